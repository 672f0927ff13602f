//! Build a frequency vector from raw ordinal responses.

use std::collections::HashMap;

use agrmt_core::errors::AgreementError;

/// Frequency vector built by [`collapse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collapsed {
    /// One count per category, in category order.
    pub frequencies: Vec<u64>,
    /// Responses that matched no category.
    pub skipped: usize,
}

/// Count `responses` per category, with `categories` listing the category
/// values in rank order.
///
/// Responses outside `categories` are skipped, not rejected.
pub fn collapse(responses: &[i64], categories: &[i64]) -> Result<Collapsed, AgreementError> {
    let mut index = HashMap::with_capacity(categories.len());
    for (position, &value) in categories.iter().enumerate() {
        if index.insert(value, position).is_some() {
            return Err(AgreementError::DuplicateCategory { value });
        }
    }

    let mut collapsed = Collapsed {
        frequencies: vec![0; categories.len()],
        skipped: 0,
    };
    for response in responses {
        match index.get(response) {
            Some(&position) => collapsed.frequencies[position] += 1,
            None => collapsed.skipped += 1,
        }
    }

    if collapsed.skipped > 0 {
        tracing::debug!(
            skipped = collapsed.skipped,
            responses = responses.len(),
            "responses outside the category list were skipped"
        );
    }

    Ok(collapsed)
}
