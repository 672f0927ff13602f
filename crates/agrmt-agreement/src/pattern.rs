//! Agreement of a single binary pattern vector via triplet classification.

use agrmt_core::constants::{LACK_OF_AGREEMENT, MIN_CATEGORIES, PERFECT_AGREEMENT};
use agrmt_core::errors::AgreementError;

/// Unimodal and bimodal triplet counts of a pattern vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripletCounts {
    /// Triplets matching `110` or `011`.
    pub unimodal: u64,
    /// Triplets matching `101`.
    pub bimodal: u64,
}

impl TripletCounts {
    /// Count every ordered triplet `i < j < m` of `pattern`.
    ///
    /// O(k³) in the number of categories. Entries other than 0/1 never match.
    pub fn count(pattern: &[u8]) -> Self {
        let k = pattern.len();
        let mut counts = Self::default();

        for i in 0..k {
            for j in (i + 1)..k {
                for m in (j + 1)..k {
                    match (pattern[i], pattern[j], pattern[m]) {
                        (1, 0, 1) => counts.bimodal += 1,
                        (1, 1, 0) | (0, 1, 1) => counts.unimodal += 1,
                        _ => {}
                    }
                }
            }
        }

        counts
    }

    pub fn total(&self) -> u64 {
        self.unimodal + self.bimodal
    }

    /// Unimodality U over `categories` categories; 0.0 when no triplet matched.
    ///
    /// ```text
    /// U = ((k-2)·Tu − (k-1)·Tdu) / ((k-2)·(Tu + Tdu))
    /// ```
    pub fn unimodality(&self, categories: usize) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        let k = categories as f64;
        let tu = self.unimodal as f64;
        let tdu = self.bimodal as f64;
        ((k - 2.0) * tu - (k - 1.0) * tdu) / ((k - 2.0) * (tu + tdu))
    }
}

/// Agreement A of a binary pattern vector.
///
/// `A = U · (1 − (s−1)/(k−1))` where `s` is the number of non-empty
/// categories. A non-finite result is lack of agreement (0.0); a single
/// non-empty category is perfect agreement (1.0), applied last.
pub fn pattern_agreement(pattern: &[u8]) -> Result<f64, AgreementError> {
    if pattern.len() < MIN_CATEGORIES {
        return Err(AgreementError::TooFewCategories {
            len: pattern.len(),
            min: MIN_CATEGORIES,
        });
    }
    if let Some((index, &value)) = pattern.iter().enumerate().find(|(_, v)| **v > 1) {
        return Err(AgreementError::InvalidPattern { index, value });
    }

    let k = pattern.len();
    let counts = TripletCounts::count(pattern);
    let u = counts.unimodality(k);

    let s = pattern.iter().filter(|&&v| v == 1).count();
    let mut a = u * (1.0 - (s as f64 - 1.0) / (k as f64 - 1.0));

    tracing::trace!(
        unimodal = counts.unimodal,
        bimodal = counts.bimodal,
        non_empty = s,
        u,
        "pattern triplets counted"
    );

    if !a.is_finite() {
        a = LACK_OF_AGREEMENT;
    }
    if s == 1 {
        a = PERFECT_AGREEMENT;
    }

    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_single_bimodal_triplet() {
        let counts = TripletCounts::count(&[1, 0, 1]);
        assert_eq!(counts, TripletCounts { unimodal: 0, bimodal: 1 });
    }

    #[test]
    fn counts_unimodal_triplets() {
        assert_eq!(TripletCounts::count(&[1, 1, 0]).unimodal, 1);
        assert_eq!(TripletCounts::count(&[0, 1, 1]).unimodal, 1);
        // 111, 000, 100, 010, 001 are ignored.
        assert_eq!(TripletCounts::count(&[1, 1, 1]).total(), 0);
        assert_eq!(TripletCounts::count(&[0, 1, 0]).total(), 0);
    }

    #[test]
    fn counts_over_all_ordered_triplets() {
        // bimodal: (0,1,2) (0,1,4) (0,3,4) (2,3,4); unimodal: (0,2,3) (1,2,4)
        let counts = TripletCounts::count(&[1, 0, 1, 0, 1]);
        assert_eq!(counts.bimodal, 4);
        assert_eq!(counts.unimodal, 2);
    }

    #[test]
    fn unimodality_is_zero_without_triplets() {
        assert_eq!(TripletCounts::default().unimodality(5), 0.0);
    }

    #[test]
    fn extremes_only_is_full_disagreement() {
        assert_eq!(pattern_agreement(&[1, 0, 1]).unwrap(), -1.0);
        assert_eq!(pattern_agreement(&[1, 0, 0, 0, 1]).unwrap(), -1.0);
    }

    #[test]
    fn single_category_is_perfect_agreement() {
        assert_eq!(pattern_agreement(&[0, 1, 0, 0]).unwrap(), 1.0);
        assert_eq!(pattern_agreement(&[0, 0, 0, 0, 0, 0, 1]).unwrap(), 1.0);
    }

    #[test]
    fn all_categories_is_zero() {
        assert_eq!(pattern_agreement(&[1, 1, 1, 1]).unwrap(), 0.0);
    }

    #[test]
    fn empty_pattern_is_zero() {
        assert_eq!(pattern_agreement(&[0, 0, 0]).unwrap(), 0.0);
    }

    #[test]
    fn adjacent_pair_values() {
        assert!((pattern_agreement(&[1, 1, 0]).unwrap() - 0.5).abs() < 1e-12);
        assert!((pattern_agreement(&[1, 1, 0, 0, 0]).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn alternating_pattern_value() {
        let a = pattern_agreement(&[1, 0, 1, 0, 1]).unwrap();
        assert!((a - (-0.277_777_777_777_777_8)).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_binary_entries() {
        let err = pattern_agreement(&[1, 2, 0]).unwrap_err();
        assert_eq!(err, AgreementError::InvalidPattern { index: 1, value: 2 });
    }

    #[test]
    fn rejects_short_patterns() {
        let err = pattern_agreement(&[1, 0]).unwrap_err();
        assert_eq!(err, AgreementError::TooFewCategories { len: 2, min: 3 });
    }
}
