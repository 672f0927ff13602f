//! Frequency vector element types and input validation.

use agrmt_core::constants::MIN_CATEGORIES;
use agrmt_core::errors::AgreementError;

/// Element type of a frequency vector.
///
/// Integrality is a property of the declared type: float slices are rejected
/// even when every value is whole.
pub trait Frequency: Copy + Send + Sync {
    /// Whether the type can only hold integral counts.
    const INTEGRAL: bool;
    /// Type name reported in [`AgreementError::NonInteger`].
    const TYPE_NAME: &'static str;

    fn to_f64(self) -> f64;
}

macro_rules! impl_frequency {
    ($integral:expr => $($t:ty),* $(,)?) => {
        $(
            impl Frequency for $t {
                const INTEGRAL: bool = $integral;
                const TYPE_NAME: &'static str = stringify!($t);

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_frequency!(true => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_frequency!(false => f32, f64);

/// Validate a frequency vector and return its floating-point working copy.
///
/// Checks run in order: length, element type, sign. The first failure wins.
pub fn validate<T: Frequency>(frequencies: &[T]) -> Result<Vec<f64>, AgreementError> {
    if frequencies.len() < MIN_CATEGORIES {
        return Err(AgreementError::TooFewCategories {
            len: frequencies.len(),
            min: MIN_CATEGORIES,
        });
    }

    if !T::INTEGRAL {
        return Err(AgreementError::NonInteger {
            type_name: T::TYPE_NAME,
        });
    }

    let working: Vec<f64> = frequencies.iter().map(|f| f.to_f64()).collect();
    if let Some((index, &value)) = working.iter().enumerate().find(|(_, v)| **v < 0.0) {
        return Err(AgreementError::NegativeValue { index, value });
    }

    Ok(working)
}
