//! Elementwise conversion records over the standard containers.
//!
//! An `Elementwise<Tag>` record applies the element record tagged `Tag` to
//! every element of a container. Infallible traversal rebuilds the container
//! shape; fallible traversal short-circuits on the first failing element and
//! stamps its position onto the error trace.

use std::collections::BTreeMap;

use refract_error::Error;
use refract_outcome::Outcome;

use crate::record::{ConvertFrom, Elementwise, ParseFrom};

impl<S, T, Tag> ConvertFrom<Vec<S>, Elementwise<Tag>> for Vec<T>
where
    T: ConvertFrom<S, Tag>,
{
    fn convert_from(source: Vec<S>) -> Self {
        source.into_iter().map(T::convert_from).collect()
    }
}

impl<S, T, Tag> ConvertFrom<Option<S>, Elementwise<Tag>> for Option<T>
where
    T: ConvertFrom<S, Tag>,
{
    fn convert_from(source: Option<S>) -> Self {
        source.map(T::convert_from)
    }
}

impl<K: Ord, S, T, Tag> ConvertFrom<BTreeMap<K, S>, Elementwise<Tag>> for BTreeMap<K, T>
where
    T: ConvertFrom<S, Tag>,
{
    fn convert_from(source: BTreeMap<K, S>) -> Self {
        source
            .into_iter()
            .map(|(key, value)| (key, T::convert_from(value)))
            .collect()
    }
}

impl<S, T, Tag, const N: usize> ConvertFrom<[S; N], Elementwise<Tag>> for [T; N]
where
    T: ConvertFrom<S, Tag>,
{
    fn convert_from(source: [S; N]) -> Self {
        source.map(T::convert_from)
    }
}

impl<S, T, Tag> ParseFrom<Vec<S>, Elementwise<Tag>> for Vec<T>
where
    T: ParseFrom<S, Tag>,
    T::Error: Into<Error>,
{
    type Error = Error;

    fn parse_from(source: Vec<S>) -> Outcome<Self, Error> {
        let mut parsed = Vec::with_capacity(source.len());
        for (index, element) in source.into_iter().enumerate() {
            match T::parse_from(element) {
                Outcome::Valid(value) => parsed.push(value),
                Outcome::Invalid(error) => {
                    let error: Error = error.into();
                    return Outcome::Invalid(error.push_trace(format!("at index {index}")));
                }
            }
        }
        Outcome::Valid(parsed)
    }
}

impl<S, T, Tag> ParseFrom<Option<S>, Elementwise<Tag>> for Option<T>
where
    T: ParseFrom<S, Tag>,
{
    type Error = T::Error;

    fn parse_from(source: Option<S>) -> Outcome<Self, T::Error> {
        match source {
            None => Outcome::Valid(None),
            Some(element) => T::parse_from(element).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert_with, parse_with, General};
    use refract_error::codes;

    #[test]
    fn vectors_convert_elementwise() {
        let widened: Vec<i64> = convert_with::<Elementwise, _, _>(vec![1i32, 2, 3]);
        assert_eq!(widened, vec![1i64, 2, 3]);
    }

    #[test]
    fn options_and_arrays_convert_elementwise() {
        let widened: Option<i64> = convert_with::<Elementwise, _, _>(Some(9i32));
        assert_eq!(widened, Some(9i64));

        let none: Option<i64> = convert_with::<Elementwise, _, _>(None::<i32>);
        assert_eq!(none, None);

        let widened: [u32; 3] = convert_with::<Elementwise, _, _>([1u8, 2, 3]);
        assert_eq!(widened, [1u32, 2, 3]);
    }

    #[test]
    fn map_values_convert_elementwise() {
        let source = BTreeMap::from([("a", 1u8), ("b", 2)]);
        let widened: BTreeMap<&str, u64> = convert_with::<Elementwise, _, _>(source);
        assert_eq!(widened, BTreeMap::from([("a", 1u64), ("b", 2)]));
    }

    #[test]
    fn vector_parsing_short_circuits_and_stamps_the_position() {
        let parsed = parse_with::<Elementwise, Vec<i32>, _>(vec!["1", "2", "3"]);
        assert_eq!(parsed.into_result(), Ok(vec![1, 2, 3]));

        let error = parse_with::<Elementwise, Vec<i32>, _>(vec!["1", "oops", "3"])
            .err()
            .unwrap();
        assert_eq!(error.code(), codes::INVALID_ARGUMENT);
        assert_eq!(error.trace().last().unwrap(), "at index 1");
    }

    #[test]
    fn option_parsing_passes_none_through() {
        let parsed = parse_with::<Elementwise<General>, Option<i32>, _>(Some("7"));
        assert_eq!(parsed.into_result(), Ok(Some(7)));

        let absent = parse_with::<Elementwise, Option<i32>, _>(None::<&str>);
        assert_eq!(absent.into_result(), Ok(None));
    }
}
