//! Numeric conversion records: text parsing, checked and saturating
//! narrowing.
//!
//! Text records live under the default tag and classify `FromStr` failures
//! into the parse codes; narrowing records live under [`Checked`] and
//! [`Saturating`] so the same type pair can carry all three semantics at
//! once.

use core::fmt;
use core::num::IntErrorKind;

use refract_error::{codes, Code, Error};
use refract_outcome::Outcome;
use thiserror::Error as ThisError;

use crate::record::{Checked, ConvertFrom, ParseFrom, Saturating};

/// Numeric conversion failures, before they are widened into an [`Error`].
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is not a value of the target type at all.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input names a value the target type cannot hold.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A range-checked narrowing failed.
    #[error("narrowing conversion failed: {0}")]
    Narrowing(String),
}

impl ConvertError {
    /// The categorized code this failure maps to.
    pub fn code(&self) -> Code {
        match self {
            ConvertError::InvalidArgument(_) => codes::INVALID_ARGUMENT,
            ConvertError::OutOfRange(_) => codes::OUT_OF_RANGE,
            ConvertError::Narrowing(_) => codes::NARROWING,
        }
    }
}

impl From<ConvertError> for Error {
    fn from(failure: ConvertError) -> Self {
        let code = failure.code();
        let (ConvertError::InvalidArgument(detail)
        | ConvertError::OutOfRange(detail)
        | ConvertError::Narrowing(detail)) = failure;
        Error::new(code).push_trace(detail)
    }
}

// Text records for the integer types. `FromStr` already rejects signs that
// do not fit the target, so "-1" against an unsigned target classifies as an
// invalid argument, not a range failure.
macro_rules! int_text_records {
    ($($ty:ty),* $(,)?) => {$(
        impl<'a> ParseFrom<&'a str> for $ty {
            type Error = Error;

            fn parse_from(source: &'a str) -> Outcome<Self, Error> {
                match source.parse::<$ty>() {
                    Ok(value) => Outcome::Valid(value),
                    Err(error) => {
                        let failure = match error.kind() {
                            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                                ConvertError::OutOfRange(format!(
                                    "{source:?} does not fit in {}",
                                    stringify!($ty)
                                ))
                            }
                            _ => ConvertError::InvalidArgument(format!(
                                "{source:?} is not a valid {}",
                                stringify!($ty)
                            )),
                        };
                        Outcome::Invalid(failure.into())
                    }
                }
            }
        }

        impl<'a> ParseFrom<&'a String> for $ty {
            type Error = Error;

            fn parse_from(source: &'a String) -> Outcome<Self, Error> {
                <$ty as ParseFrom<&str>>::parse_from(source.as_str())
            }
        }
    )*};
}

int_text_records!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Float text parsing never reports a range failure: `FromStr` rounds
// overlarge literals to infinity.
macro_rules! float_text_records {
    ($($ty:ty),* $(,)?) => {$(
        impl<'a> ParseFrom<&'a str> for $ty {
            type Error = Error;

            fn parse_from(source: &'a str) -> Outcome<Self, Error> {
                match source.parse::<$ty>() {
                    Ok(value) => Outcome::Valid(value),
                    Err(_) => Outcome::Invalid(
                        ConvertError::InvalidArgument(format!(
                            "{source:?} is not a valid {}",
                            stringify!($ty)
                        ))
                        .into(),
                    ),
                }
            }
        }

        impl<'a> ParseFrom<&'a String> for $ty {
            type Error = Error;

            fn parse_from(source: &'a String) -> Outcome<Self, Error> {
                <$ty as ParseFrom<&str>>::parse_from(source.as_str())
            }
        }
    )*};
}

float_text_records!(f32, f64);

// Range-checked narrowing for anything `TryFrom` covers.
impl<S, To> ParseFrom<S, Checked> for To
where
    To: TryFrom<S>,
    <To as TryFrom<S>>::Error: fmt::Display,
{
    type Error = Error;

    fn parse_from(source: S) -> Outcome<Self, Error> {
        match To::try_from(source) {
            Ok(value) => Outcome::Valid(value),
            Err(error) => {
                Outcome::Invalid(ConvertError::Narrowing(error.to_string()).into())
            }
        }
    }
}

// Saturating narrowing records for the lossy integer pairs.
macro_rules! saturating_records {
    ($($src:ty => [$($dst:ty),* $(,)?]);* $(;)?) => {$($(
        impl ConvertFrom<$src, Saturating> for $dst {
            #[allow(unused_comparisons)]
            #[inline]
            fn convert_from(source: $src) -> $dst {
                match <$dst>::try_from(source) {
                    Ok(value) => value,
                    Err(_) if source < 0 => <$dst>::MIN,
                    Err(_) => <$dst>::MAX,
                }
            }
        }
    )*)*};
}

saturating_records! {
    i64 => [i8, i16, i32, u8, u16, u32, u64];
    u64 => [i8, i16, i32, i64, u8, u16, u32];
    i32 => [i8, i16, u8, u16, u32];
    u32 => [i8, i16, i32, u8, u16];
    i16 => [i8, u8];
    u16 => [i8, u8];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, parse_with};
    use refract_error::Category;

    #[test]
    fn parse_reads_well_formed_integers() {
        assert_eq!(parse::<i32, _>("123").into_result(), Ok(123));
        assert_eq!(parse::<u8, _>("255").into_result(), Ok(255));
        assert_eq!(parse::<i64, _>("-9000000000").into_result(), Ok(-9_000_000_000));
    }

    #[test]
    fn malformed_text_is_an_invalid_argument() {
        let error = parse::<i32, _>("abc").err().unwrap();
        assert_eq!(error.code(), codes::INVALID_ARGUMENT);
        assert_eq!(error.code().category(), Category::Parse);
    }

    #[test]
    fn a_sign_the_target_cannot_hold_is_an_invalid_argument() {
        let error = parse::<u32, _>("-1").err().unwrap();
        assert_eq!(error.code(), codes::INVALID_ARGUMENT);
    }

    #[test]
    fn overflowing_text_is_out_of_range() {
        let error = parse::<i16, _>("1000000000").err().unwrap();
        assert_eq!(error.code(), codes::OUT_OF_RANGE);
        assert!(error.to_string().contains("does not fit in i16"));
    }

    #[test]
    fn owned_strings_parse_through_the_same_records() {
        let text = "42".to_string();
        assert_eq!(parse::<i32, _>(&text).into_result(), Ok(42));
    }

    #[test]
    fn float_text_parses_and_rejects() {
        assert_eq!(parse::<f64, _>("2.5").into_result(), Ok(2.5));
        let error = parse::<f32, _>("two and a half").err().unwrap();
        assert_eq!(error.code(), codes::INVALID_ARGUMENT);
    }

    #[test]
    fn checked_narrowing_reports_narrowing_failures() {
        assert_eq!(parse_with::<Checked, i8, _>(100i64).into_result(), Ok(100i8));
        let error = parse_with::<Checked, i8, _>(1000i64).err().unwrap();
        assert_eq!(error.code(), codes::NARROWING);
        assert_eq!(error.code().category(), Category::Convert);
    }

    #[test]
    fn saturating_narrowing_clamps_at_the_bounds() {
        use crate::convert_with;
        assert_eq!(convert_with::<Saturating, u8, _>(300i64), 255u8);
        assert_eq!(convert_with::<Saturating, u8, _>(-5i64), 0u8);
        assert_eq!(convert_with::<Saturating, i16, _>(u64::MAX), i16::MAX);
        assert_eq!(convert_with::<Saturating, i32, _>(-1i64), -1i32);
    }

    #[test]
    fn convert_error_display_feeds_the_trace() {
        let failure = ConvertError::OutOfRange("too big".to_string());
        assert_eq!(failure.to_string(), "out of range: too big");
        let error: Error = failure.into();
        assert_eq!(error.trace(), ["too big"]);
    }
}
