// Error handling macros
// Macros for building and returning categorized errors in Fallible-returning
// functions, plus tracing-backed logging helpers

/// Create a new error with a code and one context frame
#[macro_export]
macro_rules! make_error {
    ($code:expr, $message:expr) => {
        $crate::Error::new($code).push_trace($message)
    };
}

/// Return early with an invalid outcome if a condition is not satisfied
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr, $message:expr) => {
        if !($cond) {
            return $crate::Outcome::Invalid($crate::make_error!($code, $message));
        }
    };
    ($cond:expr, $error:expr) => {
        if !($cond) {
            return $crate::Outcome::Invalid($crate::to_error($error));
        }
    };
}

/// Bail early with an invalid outcome
#[macro_export]
macro_rules! bail {
    ($code:expr, $message:expr) => {
        return $crate::Outcome::Invalid($crate::make_error!($code, $message))
    };
    ($error:expr) => {
        return $crate::Outcome::Invalid($crate::to_error($error))
    };
}

/// Log an invalid outcome and continue the enclosing loop
#[macro_export]
macro_rules! log_invalid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Valid(value) => value,
            $crate::Outcome::Invalid(error) => {
                tracing::error!("error: {}", error);
                continue;
            }
        }
    };
    ($outcome:expr, $message:expr) => {
        match $outcome {
            $crate::Outcome::Valid(value) => value,
            $crate::Outcome::Invalid(error) => {
                tracing::error!("{}: {}", $message, error);
                continue;
            }
        }
    };
}

/// Convert an outcome to an Option, logging the error if one is held
#[macro_export]
macro_rules! outcome_to_option {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Valid(value) => Some(value),
            $crate::Outcome::Invalid(error) => {
                tracing::error!("error: {}", error);
                None
            }
        }
    };
    ($outcome:expr, $message:expr) => {
        match $outcome {
            $crate::Outcome::Valid(value) => Some(value),
            $crate::Outcome::Invalid(error) => {
                tracing::error!("{}: {}", $message, error);
                None
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{codes, Fallible, Outcome};

    fn positive(value: i32) -> Fallible<i32> {
        ensure!(value > 0, codes::OUT_OF_RANGE, format!("{value} is not positive"));
        Outcome::Valid(value)
    }

    fn rejected() -> Fallible<i32> {
        bail!(codes::INVALID_ARGUMENT, "always rejected");
    }

    #[test]
    fn ensure_passes_satisfied_conditions_through() {
        assert_eq!(positive(3).into_result(), Ok(3));
    }

    #[test]
    fn ensure_returns_the_built_error() {
        let error = positive(-2).err().unwrap();
        assert_eq!(error.code(), codes::OUT_OF_RANGE);
        assert_eq!(error.trace(), ["-2 is not positive"]);
    }

    #[test]
    fn bail_always_returns_invalid() {
        let error = rejected().err().unwrap();
        assert_eq!(error.code(), codes::INVALID_ARGUMENT);
    }

    #[test]
    fn log_invalid_skips_bad_items() {
        let items: Vec<Fallible<i32>> = vec![
            Outcome::Valid(1),
            Outcome::Invalid(crate::make_error!(codes::UNKNOWN, "skipped")),
            Outcome::Valid(2),
        ];
        let mut sum = 0;
        for item in items {
            sum += log_invalid!(item);
        }
        assert_eq!(sum, 3);
    }

    #[test]
    fn outcome_to_option_drops_the_error_side() {
        let valid: Fallible<i32> = Outcome::Valid(1);
        assert_eq!(outcome_to_option!(valid), Some(1));

        let invalid: Fallible<i32> = Outcome::Invalid(crate::make_error!(
            codes::UNKNOWN,
            "discarded after logging"
        ));
        assert_eq!(outcome_to_option!(invalid, "while testing"), None);
    }
}
