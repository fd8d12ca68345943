//! Conversions between `Outcome` instantiations and neighbouring types.
//!
//! Cross-instantiation conversion is explicit: [`Outcome::cast`] exists only
//! when both payload types are constructible from the source's payload
//! types, converts whichever side is live and preserves the discriminant.
//! `std::result::Result` round-trips losslessly, and `Outcome<(), E>` models
//! a value-less success as an optional error.

use crate::Outcome::{self, Invalid, Valid};

impl<T, E> Outcome<T, E> {
    /// Converts both payload types, preserving the discriminant.
    #[inline]
    pub fn cast<T2, E2>(self) -> Outcome<T2, E2>
    where
        T2: From<T>,
        E2: From<E>,
    {
        match self {
            Valid(value) => Valid(value.into()),
            Invalid(error) => Invalid(error.into()),
        }
    }

    /// Converts the success payload type only.
    #[inline]
    pub fn map_into<U: From<T>>(self) -> Outcome<U, E> {
        self.map(U::from)
    }

    /// Converts the error payload type only.
    #[inline]
    pub fn map_error_into<F: From<E>>(self) -> Outcome<T, F> {
        self.map_error(F::from)
    }

    /// Converts into a `std::result::Result`, enabling `?` propagation.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Valid(value) => Ok(value),
            Invalid(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Valid(value),
            Err(error) => Invalid(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<E> From<Option<E>> for Outcome<(), E> {
    /// `None` is a value-less success; `Some(error)` is the error side.
    #[inline]
    fn from(error: Option<E>) -> Self {
        match error {
            None => Valid(()),
            Some(error) => Invalid(error),
        }
    }
}

impl<E> From<Outcome<(), E>> for Option<E> {
    #[inline]
    fn from(outcome: Outcome<(), E>) -> Self {
        outcome.err()
    }
}

impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    /// Collects success values, short-circuiting on the first error.
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}
