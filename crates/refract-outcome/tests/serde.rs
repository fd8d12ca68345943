#![cfg(feature = "serde")]

//! JSON round-trips for serialized outcomes.

use refract_outcome::Outcome;

#[test]
fn valid_outcomes_round_trip_through_json() {
    let outcome: Outcome<i32, String> = Outcome::Valid(7);
    let encoded = serde_json::to_string(&outcome).unwrap();
    let decoded: Outcome<i32, String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, outcome);
}

#[test]
fn invalid_outcomes_round_trip_through_json() {
    let outcome: Outcome<i32, String> = Outcome::Invalid("offline".to_string());
    let encoded = serde_json::to_string(&outcome).unwrap();
    assert!(encoded.contains("Invalid"));
    let decoded: Outcome<i32, String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, outcome);
}
