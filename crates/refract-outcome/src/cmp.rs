//! Equality across `Outcome` instantiations.
//!
//! Two outcomes are equal iff they hold the same variant and the live
//! payloads compare equal; the payload types may differ as long as they are
//! mutually comparable. Mismatched variants are always unequal, regardless
//! of payload equality.

use crate::Outcome::{self, Invalid, Valid};

impl<T, E, T2, E2> PartialEq<Outcome<T2, E2>> for Outcome<T, E>
where
    T: PartialEq<T2>,
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Outcome<T2, E2>) -> bool {
        match (self, other) {
            (Valid(a), Valid(b)) => a == b,
            (Invalid(a), Invalid(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

#[cfg(test)]
mod tests {
    use crate::Outcome::{self, Invalid, Valid};

    #[test]
    fn equal_variants_with_equal_payloads_compare_equal() {
        let a: Outcome<String, String> = Valid("5".to_string());
        let b: Outcome<&str, &str> = Valid("5");
        assert_eq!(a, b);

        let a: Outcome<String, String> = Invalid("e".to_string());
        let b: Outcome<&str, &str> = Invalid("e");
        assert_eq!(a, b);
    }

    #[test]
    fn mismatched_variants_are_unequal_even_with_equal_payloads() {
        let valid: Outcome<i32, i32> = Valid(5);
        let invalid: Outcome<i32, i32> = Invalid(5);
        assert_ne!(valid, invalid);
    }

    #[test]
    fn payload_inequality_propagates() {
        let a: Outcome<i32, String> = Valid(5);
        let b: Outcome<i32, String> = Valid(6);
        assert_ne!(a, b);
    }
}
