//! Monadic transforms over the two sides of an [`Outcome`].
//!
//! Each transform touches only the live side and passes the other side
//! through unchanged. A closure returning `()` turns the transformed side
//! into the unit type, which is how a "no value" success is modeled.

use crate::Outcome::{self, Invalid, Valid};

impl<T, E> Outcome<T, E> {
    /// Applies `f` to the success value, passing an error through unchanged.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Valid(value) => Valid(f(value)),
            Invalid(error) => Invalid(error),
        }
    }

    /// Applies `f` to the success value, or returns `fallback`.
    #[inline]
    pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Valid(value) => f(value),
            Invalid(_) => fallback,
        }
    }

    /// Applies `f` to the success value, or `fallback` to the error value.
    #[inline]
    pub fn map_or_else<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Valid(value) => f(value),
            Invalid(error) => fallback(error),
        }
    }

    /// Applies `f` to the error value, passing a success through unchanged.
    #[inline]
    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Valid(value) => Valid(value),
            Invalid(error) => Invalid(f(error)),
        }
    }

    /// Projects out of a borrowed success value without cloning it.
    ///
    /// The projection result may borrow from `self`; the returned outcome's
    /// error side borrows unconditionally. Lifetimes keep every projection
    /// anchored to `self`, so a projection can never outlive its source.
    #[inline]
    pub fn map_ref<'a, U>(&'a self, f: impl FnOnce(&'a T) -> U) -> Outcome<U, &'a E> {
        match self {
            Valid(value) => Valid(f(value)),
            Invalid(error) => Invalid(error),
        }
    }

    /// Chains a fallible continuation over the success side.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Valid(value) => f(value),
            Invalid(error) => Invalid(error),
        }
    }

    /// Chains a recovery continuation over the error side.
    #[inline]
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Valid(value) => Valid(value),
            Invalid(error) => f(error),
        }
    }
}
