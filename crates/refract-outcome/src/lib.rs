// Refract outcome type
// A two-sided success-or-error value with independently derived capabilities

// Module structure
mod cmp;
mod combinators;
mod convert;
mod macros;
mod outcome;

// Public exports
pub use outcome::Outcome;
pub use outcome::Outcome::{Invalid, Valid};
