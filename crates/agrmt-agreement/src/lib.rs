//! # agrmt-agreement
//!
//! Van der Eijk's agreement A for frequency vectors over ordered categories.
//!
//! A frequency vector is peeled into binary layers. Each layer's pattern is
//! scored by classifying every ordered triplet of categories as unimodal
//! (`110`, `011`) or bimodal (`101`), and layer scores are weighted by the
//! share of observations the layer holds.
//!
//! Reference: van der Eijk, C. (2001). Measuring Agreement in Ordered Rating
//! Scales. Quality and Quantity, 35(3), 325-341.

pub mod collapse;
pub mod engine;
pub mod frequency;
pub mod layers;
pub mod pattern;

pub use collapse::{collapse, Collapsed};
pub use engine::AgreementEngine;
pub use frequency::Frequency;
pub use layers::{agreement, agreement_breakdown, AgreementBreakdown, Layer};
pub use pattern::{pattern_agreement, TripletCounts};
