// Error conversion utilities
// Adapts foreign error types into the categorized Error value

use crate::{codes, Error, Fallible};
use refract_outcome::Outcome;

/// Trait for converting a foreign failure into an [`Error`].
///
/// The adapter picks a code for the foreign type and pushes the foreign
/// message as the innermost trace frame.
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for crate::Code {
    fn into_error(self) -> Error {
        Error::new(self)
    }
}

impl IntoError for std::io::Error {
    fn into_error(self) -> Error {
        Error::new(codes::IO).push_trace(self.to_string())
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::new(codes::UNKNOWN).push_trace(self)
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::new(codes::UNKNOWN).push_trace(self)
    }
}

impl IntoError for anyhow::Error {
    fn into_error(self) -> Error {
        // {:#} flattens the anyhow context chain into one frame
        Error::new(codes::UNKNOWN).push_trace(format!("{self:#}"))
    }
}

impl IntoError for serde_json::Error {
    fn into_error(self) -> Error {
        Error::new(codes::SERIALIZATION).push_trace(self.to_string())
    }
}

/// Helper function to convert any adaptable failure to an [`Error`].
pub fn to_error<E: IntoError>(error: E) -> Error {
    error.into_error()
}

/// Helper function to lift a `Result` with any adaptable error type into a
/// [`Fallible`] outcome.
pub fn map_error<T, E: IntoError>(result: Result<T, E>) -> Fallible<T> {
    match result {
        Ok(value) => Outcome::Valid(value),
        Err(error) => Outcome::Invalid(error.into_error()),
    }
}
