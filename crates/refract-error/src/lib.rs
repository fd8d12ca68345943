// Refract error value
// Central location for the categorized error value, its code constants,
// interop adapters, and handling macros

use std::fmt;

// Re-export common error handling tools for convenience
pub use anyhow;
pub use refract_outcome::Outcome;

// Module structure
mod interop;
mod macros;

// Public exports
pub use interop::{map_error, to_error, IntoError};

/// Coarse error-kind tag naming the component an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// The distinguished "no category" tag carried by an unset error.
    Unspecified,
    /// General failures with no better home.
    Generic,
    /// Failures while reading a value out of text.
    Parse,
    /// Failures while converting between value types.
    Convert,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Unspecified => write!(f, "unspecified"),
            Category::Generic => write!(f, "generic"),
            Category::Parse => write!(f, "parse"),
            Category::Convert => write!(f, "convert"),
        }
    }
}

/// A categorized error code: an integer value scoped by a [`Category`].
///
/// A zero value is the distinguished "no error" code regardless of category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Code {
    category: Category,
    value: u32,
}

impl Code {
    /// The unset code carried by [`Error::none`].
    pub const UNSET: Code = Code::new(Category::Unspecified, 0);

    pub const fn new(category: Category, value: u32) -> Self {
        Self { category, value }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Static message for the known code constants in [`codes`].
    pub const fn message(&self) -> &'static str {
        match (self.category, self.value) {
            (Category::Unspecified, 0) => "no error",
            (Category::Generic, 1) => "unknown error",
            (Category::Generic, 2) => "i/o error",
            (Category::Generic, 3) => "serialization error",
            (Category::Parse, 1) => "invalid argument",
            (Category::Parse, 2) => "out of range",
            (Category::Convert, 1) => "narrowing conversion failed",
            _ => "unrecognized error",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error {}: {}", self.category, self.value, self.message())
    }
}

/// Named code constants, grouped by category.
pub mod codes {
    use super::{Category, Code};

    pub const UNSET: Code = Code::UNSET;

    // Generic codes
    pub const UNKNOWN: Code = Code::new(Category::Generic, 1);
    pub const IO: Code = Code::new(Category::Generic, 2);
    pub const SERIALIZATION: Code = Code::new(Category::Generic, 3);

    // Parse codes
    pub const INVALID_ARGUMENT: Code = Code::new(Category::Parse, 1);
    pub const OUT_OF_RANGE: Code = Code::new(Category::Parse, 2);

    // Convert codes
    pub const NARROWING: Code = Code::new(Category::Convert, 1);
}

/// A categorized error with a causal-trace description stack.
///
/// Trace frames are pushed innermost-first as the failure propagates up
/// through callers; `Display` renders them outermost-first, each followed by
/// `": "`, and closes with the code rendering. Frames are appended by value
/// with [`Error::push_trace`]; a captured error is never mutated in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Error {
    code: Code,
    trace: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl Error {
    pub fn new(code: Code) -> Self {
        Self {
            code,
            trace: Vec::new(),
            details: None,
        }
    }

    /// The "no error" value: unset code, empty trace, boolean-false.
    pub fn none() -> Self {
        Self::new(Code::UNSET)
    }

    /// `false` iff this value represents "no error".
    pub fn is_set(&self) -> bool {
        self.code.value() != 0
    }

    pub fn code(&self) -> Code {
        self.code
    }

    /// Trace frames in push order, innermost first.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Returns a copy with the code replaced and the trace preserved.
    pub fn with_code(&self, code: Code) -> Self {
        Self {
            code,
            trace: self.trace.clone(),
            details: self.details.clone(),
        }
    }

    /// Appends a context frame, consuming the receiver.
    ///
    /// Keep the original alive by cloning first: `err.clone().push_trace(..)`.
    pub fn push_trace(mut self, message: impl Into<String>) -> Self {
        self.trace.push(message.into());
        self
    }

    /// Attaches structured details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn details(&self) -> Option<&serde_json::Value> {
        self.details.as_ref()
    }

    /// Renders the code alone, ignoring the trace.
    pub fn format_code(&self) -> String {
        self.code.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.trace.iter().rev() {
            write!(f, "{frame}: ")?;
        }
        // An unset error with no context renders as nothing user-facing.
        if self.trace.is_empty() && self.code.category() == Category::Unspecified {
            return Ok(());
        }
        write!(f, "{}", self.code)
    }
}

impl std::error::Error for Error {}

impl From<Code> for Error {
    fn from(code: Code) -> Self {
        Error::new(code)
    }
}

/// Standard outcome type carrying an [`Error`] on the invalid side.
pub type Fallible<T> = Outcome<T, Error>;
