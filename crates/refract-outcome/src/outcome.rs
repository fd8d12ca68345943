//! The success-or-error value type.
//!
//! An [`Outcome`] holds exactly one of two payloads: a success value or an
//! error value. The variant is the discriminant; dropping an outcome drops
//! exactly the live payload. Borrowed views over the live payload are
//! produced with [`Outcome::as_ref`], [`Outcome::as_mut`] and
//! [`Outcome::as_deref`], so no variant ever stores a dangling handle.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

/// A value that is either a success payload or an error payload, never both.
///
/// The two variants double as construction tags: `Outcome::Valid(v)` builds
/// the success side, `Outcome::Invalid(e)` the error side. There is no
/// implicit construction from a bare payload, so a type that could be either
/// side is never ambiguous.
///
/// Capabilities are derived from the payloads, never stored: `Outcome<T, E>`
/// is `Clone` iff both `T` and `E` are, `Copy` iff both are, and moves
/// unconditionally.
#[must_use = "this `Outcome` may hold an error, which should be handled"]
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation produced a success value.
    Valid(T),
    /// The operation produced an error value.
    Invalid(E),
}

use self::Outcome::{Invalid, Valid};

impl<T, E> Outcome<T, E> {
    /// Returns `true` iff the success side is live.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Valid(_))
    }

    /// Returns `true` iff the error side is live.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Invalid(_))
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the error side is live; the panic message includes the
    /// held error. Use [`Outcome::value_or`] or [`Outcome::into_result`]
    /// when the failure should stay a value.
    #[track_caller]
    pub fn value(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Valid(value) => value,
            Invalid(error) => {
                panic!("called `Outcome::value()` on an invalid value: {error:?}")
            }
        }
    }

    /// Returns the success value, or `fallback` if the error side is live.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Valid(value) => value,
            Invalid(_) => fallback,
        }
    }

    /// Returns the success value, or computes one from the held error.
    #[inline]
    pub fn value_or_else(self, fallback: impl FnOnce(E) -> T) -> T {
        match self {
            Valid(value) => value,
            Invalid(error) => fallback(error),
        }
    }

    /// Returns the success value, or `T::default()` if the error side is live.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Valid(value) => value,
            Invalid(_) => T::default(),
        }
    }

    /// Returns the success value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The success side must be live. Calling this on an invalid outcome is
    /// undefined behavior. Intended for hot paths where validity was already
    /// established.
    #[inline]
    pub unsafe fn value_unchecked(self) -> T {
        match self {
            Valid(value) => value,
            Invalid(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if the success side is live. Accessing the wrong side is a
    /// logic failure, not a representable domain failure.
    #[track_caller]
    pub fn error(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Valid(value) => {
                panic!("called `Outcome::error()` on a valid value: {value:?}")
            }
            Invalid(error) => error,
        }
    }

    /// Returns the error value, or `fallback` if the success side is live.
    #[inline]
    pub fn error_or(self, fallback: E) -> E {
        match self {
            Valid(_) => fallback,
            Invalid(error) => error,
        }
    }

    /// Returns the error value, or computes one from the success value.
    #[inline]
    pub fn error_or_else(self, fallback: impl FnOnce(T) -> E) -> E {
        match self {
            Valid(value) => fallback(value),
            Invalid(error) => error,
        }
    }

    /// Returns the error value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The error side must be live. Calling this on a valid outcome is
    /// undefined behavior.
    #[inline]
    pub unsafe fn error_unchecked(self) -> E {
        match self {
            Valid(_) => unsafe { core::hint::unreachable_unchecked() },
            Invalid(error) => error,
        }
    }

    /// Converts into an `Option` over the success side, discarding the error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Valid(value) => Some(value),
            Invalid(_) => None,
        }
    }

    /// Converts into an `Option` over the error side, discarding the value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Valid(_) => None,
            Invalid(error) => Some(error),
        }
    }

    /// Borrows the live payload, producing a non-owning view.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Valid(value) => Valid(value),
            Invalid(error) => Invalid(error),
        }
    }

    /// Mutably borrows the live payload.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Valid(value) => Valid(value),
            Invalid(error) => Invalid(error),
        }
    }

    /// Borrows through the success payload's `Deref` target.
    #[inline]
    pub fn as_deref(&self) -> Outcome<&T::Target, &E>
    where
        T: Deref,
    {
        match self {
            Valid(value) => Valid(value.deref()),
            Invalid(error) => Invalid(error),
        }
    }

    /// Returns `true` iff the success side is live and equals `expected`.
    ///
    /// Comparing an outcome against a bare value goes through `contains` or
    /// [`Outcome::contains_error`]; the method name selects the side, so the
    /// `T == E` instantiation is never ambiguous.
    #[inline]
    pub fn contains<U>(&self, expected: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Valid(value) => value == expected,
            Invalid(_) => false,
        }
    }

    /// Returns `true` iff the error side is live and equals `expected`.
    #[inline]
    pub fn contains_error<F>(&self, expected: &F) -> bool
    where
        E: PartialEq<F>,
    {
        match self {
            Valid(_) => false,
            Invalid(error) => error == expected,
        }
    }
}

impl<'a, T, E> Outcome<&'a T, E> {
    /// Copies the borrowed success value, producing an owning outcome.
    #[inline]
    pub fn copied(self) -> Outcome<T, E>
    where
        T: Copy,
    {
        match self {
            Valid(value) => Valid(*value),
            Invalid(error) => Invalid(error),
        }
    }

    /// Clones the borrowed success value, producing an owning outcome.
    #[inline]
    pub fn cloned(self) -> Outcome<T, E>
    where
        T: Clone,
    {
        match self {
            Valid(value) => Valid(value.clone()),
            Invalid(error) => Invalid(error),
        }
    }
}

impl<T: Clone, E: Clone> Clone for Outcome<T, E> {
    fn clone(&self) -> Self {
        match self {
            Valid(value) => Valid(value.clone()),
            Invalid(error) => Invalid(error.clone()),
        }
    }

    /// Clones `source` into `self`.
    ///
    /// When both sides hold the same variant the live payload is cloned in
    /// place; only a discriminant change tears down the old payload and
    /// constructs the new one.
    fn clone_from(&mut self, source: &Self) {
        match (&mut *self, source) {
            (Valid(dst), Valid(src)) => dst.clone_from(src),
            (Invalid(dst), Invalid(src)) => dst.clone_from(src),
            _ => *self = source.clone(),
        }
    }
}

impl<T: Copy, E: Copy> Copy for Outcome<T, E> {}

// Hand-written alongside the heterogeneous `PartialEq`: the discriminant and
// the live payload feed the hasher, so homogeneous equal outcomes hash equal.
impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Valid(value) => value.hash(state),
            Invalid(error) => error.hash(state),
        }
    }
}
