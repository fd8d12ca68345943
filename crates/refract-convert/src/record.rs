//! Conversion record traits and the tags that key them.

use core::marker::PhantomData;

use refract_outcome::Outcome;

/// Default tag: the built-in records.
#[derive(Debug, Clone, Copy, Default)]
pub struct General;

/// Range-checked numeric narrowing, built on `TryFrom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checked;

/// Numeric narrowing that clamps at the target type's bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Saturating;

/// Container traversal applying the element record tagged `Tag`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elementwise<Tag = General>(PhantomData<Tag>);

/// An infallible conversion record for the (source, `Self`, `Tag`) triple.
pub trait ConvertFrom<S, Tag = General>: Sized {
    fn convert_from(source: S) -> Self;
}

/// A fallible conversion record for the (source, `Self`, `Tag`) triple.
///
/// `Error` is the default error type for the pair; records supplied by this
/// crate use [`refract_error::Error`].
pub trait ParseFrom<S, Tag = General>: Sized {
    type Error;

    fn parse_from(source: S) -> Outcome<Self, Self::Error>;
}

/// Source-side sugar for [`ConvertFrom`], mirroring `From`/`Into`.
pub trait ConvertInto<To, Tag = General> {
    fn convert_into(self) -> To;
}

impl<S, To, Tag> ConvertInto<To, Tag> for S
where
    To: ConvertFrom<S, Tag>,
{
    #[inline]
    fn convert_into(self) -> To {
        To::convert_from(self)
    }
}

/// Source-side sugar for [`ParseFrom`].
pub trait ParseInto<To, Tag = General> {
    type Error;

    fn parse_into(self) -> Outcome<To, Self::Error>;
}

impl<S, To, Tag> ParseInto<To, Tag> for S
where
    To: ParseFrom<S, Tag>,
{
    type Error = To::Error;

    #[inline]
    fn parse_into(self) -> Outcome<To, To::Error> {
        To::parse_from(self)
    }
}

// The built-in record: anything the target type constructs via `From`.
// This blanket owns the (ConvertFrom, General) column outright, so new
// infallible records register under their own tag; fallible records may use
// any tag, General included.
impl<S, To: From<S>> ConvertFrom<S, General> for To {
    #[inline]
    fn convert_from(source: S) -> To {
        To::from(source)
    }
}
