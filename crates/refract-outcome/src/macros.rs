// Outcome flow macros

/// Unwrap the valid side of an outcome, or return the invalid side from the
/// enclosing function, converting the error with `Into` on the way out
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr) => {
        match $expr {
            $crate::Outcome::Valid(value) => value,
            $crate::Outcome::Invalid(error) => {
                return $crate::Outcome::Invalid(::core::convert::Into::into(error))
            }
        }
    };
}
