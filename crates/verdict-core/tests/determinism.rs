//! Determinism and purity harness.
//!
//! The pipeline must yield byte-identical serialized output for repeated
//! invocations of the same input and must never mutate the input sentence.
//! A generative suite extends the fixed corpus to arbitrary sentence-shaped
//! and arbitrary non-sentence inputs.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use verdict_core::{validate, validate_with_phase_log, Classification};

fn corpus() -> Vec<Value> {
    vec![
        // Allowed
        json!({
            "actor": "User_001",
            "intent": "Transfer",
            "context": {"balance": 5000},
            "constraints": [{"field": "balance", "value": 5000}],
            "outcome": "Allowed"
        }),
        // Refused
        json!({
            "actor": "User_002",
            "intent": "Transfer",
            "context": {"balance": 1000},
            "constraints": [{"field": "balance", "value": 5000}],
            "outcome": "Refused",
            "reason": {"field": "balance", "value": 5000}
        }),
        // Structural reject
        json!({
            "intent": "Transfer",
            "context": {"balance": 1000},
            "constraints": [{"field": "balance", "value": 5000}],
            "outcome": "Allowed"
        }),
    ]
}

fn serialized(sentence: &Value) -> String {
    serde_json::to_string(&validate(sentence).unwrap()).unwrap()
}

#[test]
fn thousand_run_output_identity() {
    for sentence in corpus() {
        let baseline = serialized(&sentence);
        for i in 0..1000 {
            assert_eq!(serialized(&sentence), baseline, "run {i} diverged");
        }
    }
}

#[test]
fn input_is_never_mutated() {
    for sentence in corpus() {
        let snapshot = sentence.clone();
        let before = serde_json::to_string(&sentence).unwrap();

        validate(&sentence).unwrap();
        validate_with_phase_log(&sentence).unwrap();

        assert_eq!(sentence, snapshot, "input sentence was mutated");
        assert_eq!(
            serde_json::to_string(&sentence).unwrap(),
            before,
            "input serialization changed"
        );
    }
}

#[test]
fn phase_log_does_not_change_the_classification() {
    for sentence in corpus() {
        let plain = validate(&sentence).unwrap();
        let logged = validate_with_phase_log(&sentence).unwrap();
        assert_eq!(plain.classification, logged.classification);
    }
}

/// Arbitrary JSON values, shallow enough to keep cases readable.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-10_000i64..10_000).prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Sentence-shaped inputs: a subset of primitive keys in arbitrary order,
/// with values drawn from plausible and implausible pools. Covers the whole
/// spectrum from fully valid to structurally broken.
fn arb_sentence() -> impl Strategy<Value = Value> {
    let keys = prop::collection::vec(
        prop_oneof![
            Just("actor"),
            Just("intent"),
            Just("context"),
            Just("constraints"),
            Just("outcome"),
            Just("reason"),
            Just("extra"),
        ],
        0..7,
    );

    (keys, arb_json(), prop::bool::ANY, prop::bool::ANY).prop_map(
        |(keys, noise, valid_values, refuse)| {
            let mut map = Map::new();
            for key in keys {
                let value = if valid_values {
                    match key {
                        "actor" => json!("User_001"),
                        "intent" => json!("Transfer"),
                        "context" => json!({"balance": 5000, "verified": true}),
                        "constraints" => json!([
                            {"field": "balance", "value": 5000},
                            {"field": "verified", "value": refuse}
                        ]),
                        "outcome" => {
                            if refuse {
                                json!("Refused")
                            } else {
                                json!("Allowed")
                            }
                        }
                        _ => json!({"field": "balance", "value": 5000}),
                    }
                } else {
                    noise.clone()
                };
                map.insert(key.to_string(), value);
            }
            Value::Object(map)
        },
    )
}

proptest! {
    #[test]
    fn pipeline_never_panics_or_errors(sentence in prop_oneof![arb_sentence(), arb_json()]) {
        // Structural validation screens every shape the semantic evaluator
        // would reject, so the full pipeline is total over arbitrary input.
        validate(&sentence).unwrap();
    }

    #[test]
    fn repeated_runs_serialize_identically(sentence in prop_oneof![arb_sentence(), arb_json()]) {
        let first = serde_json::to_string(&validate(&sentence).unwrap()).unwrap();
        for _ in 0..5 {
            prop_assert_eq!(
                serde_json::to_string(&validate(&sentence).unwrap()).unwrap(),
                first.clone()
            );
        }
    }

    #[test]
    fn arbitrary_input_is_never_mutated(sentence in prop_oneof![arb_sentence(), arb_json()]) {
        let snapshot = sentence.clone();
        validate(&sentence).unwrap();
        prop_assert_eq!(sentence, snapshot);
    }

    #[test]
    fn rejections_carry_exactly_one_code(sentence in arb_sentence()) {
        let report = validate(&sentence).unwrap();
        if let Classification::Rejected { failure_class, message } = report.classification {
            prop_assert!(!message.is_empty());
            prop_assert!(failure_class.as_str().starts_with("SF-"));
        }
    }
}
