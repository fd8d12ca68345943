//! Tagged value-conversion records and their entry points.
//!
//! A conversion is a record keyed by (source type, target type, tag) and
//! resolved entirely at compile time: infallible records implement
//! [`ConvertFrom`], fallible ones implement [`ParseFrom`]. Whether a
//! conversion is possible *is* the trait bound — a record that exists is
//! usable, a record that does not exist fails the caller's compilation, and
//! there is no way to declare a record without supplying its transformation.
//!
//! The default [`General`] tag carries the built-in records (anything the
//! target type can construct via `From`); other tags select alternative
//! semantics for the same type pair, e.g. [`Saturating`] numeric narrowing
//! or [`Elementwise`] container traversal. Adding a conversion means
//! implementing one of the two traits for a new triple; coherence guarantees
//! at most one active record per triple.

use refract_error::Fallible;
use refract_outcome::Outcome;

// Module structure
mod collections;
mod numeric;
mod record;

// Public exports
pub use numeric::ConvertError;
pub use record::{
    Checked, ConvertFrom, ConvertInto, Elementwise, General, ParseFrom, ParseInto, Saturating,
};

/// Converts `value` through the infallible record for the default tag.
///
/// Fails to compile if no record exists for the pair.
#[inline]
pub fn convert<To, S>(value: S) -> To
where
    To: ConvertFrom<S>,
{
    To::convert_from(value)
}

/// Converts `value` through the infallible record selected by `Tag`.
#[inline]
pub fn convert_with<Tag, To, S>(value: S) -> To
where
    To: ConvertFrom<S, Tag>,
{
    To::convert_from(value)
}

/// Parses `value` through the fallible record for the default tag.
///
/// The record's associated `Error` type is the default error for the pair;
/// fails to compile if no record exists.
#[inline]
pub fn parse<To, S>(value: S) -> Outcome<To, <To as ParseFrom<S>>::Error>
where
    To: ParseFrom<S>,
{
    To::parse_from(value)
}

/// Parses `value` through the fallible record selected by `Tag`.
#[inline]
pub fn parse_with<Tag, To, S>(value: S) -> Outcome<To, <To as ParseFrom<S, Tag>>::Error>
where
    To: ParseFrom<S, Tag>,
{
    To::parse_from(value)
}

/// Lets an infallible record serve a fallible call site: converts `value`
/// and wraps it in a valid outcome.
#[inline]
pub fn parse_converted<To, S>(value: S) -> Fallible<To>
where
    To: ConvertFrom<S>,
{
    Outcome::Valid(To::convert_from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_uses_the_target_constructor_by_default() {
        let widened: i64 = convert(7i32);
        assert_eq!(widened, 7);

        let owned: String = convert("text");
        assert_eq!(owned, "text");
    }

    #[test]
    fn parse_converted_wraps_infallible_records() {
        let outcome = parse_converted::<i64, _>(7i32);
        assert_eq!(outcome.into_result(), Ok(7i64));
    }
}
