//! Structural validator.
//!
//! Checks a candidate sentence against the frozen grammar before any meaning
//! is evaluated. Checks run in a fixed order and stop at the first violation;
//! exactly one taxonomy code is ever reported per sentence. The sentence is
//! read-only throughout.
//!
//! The engine operates on an explicit key/value-pair view of the sentence
//! (`validate_entries`) so that the duplicate-key check (SF-05) stays
//! reachable even though `serde_json::Map` cannot physically hold duplicate
//! keys. `validate_structure` is the map-level entry point used by the
//! pipeline.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::grammar::{is_primitive, CANONICAL_ORDER, REQUIRED_PRIMITIVES, VALID_OUTCOMES};
use crate::taxonomy::FailureCode;

/// A coded grammar violation detected by the structural validator.
///
/// This is a terminal branch of the pipeline's own result type, not a bug:
/// the orchestrator converts it into a `Rejected (Structural)` classification.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{code}: {message}")]
pub struct StructuralError {
    /// The taxonomy code naming the violation class.
    pub code: FailureCode,
    /// What specifically was violated.
    pub message: String,
}

impl StructuralError {
    fn new(code: FailureCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Validate a sentence's structure against the grammar.
pub fn validate_structure(sentence: &Map<String, Value>) -> Result<(), StructuralError> {
    let entries: Vec<(&str, &Value)> = sentence.iter().map(|(k, v)| (k.as_str(), v)).collect();
    validate_entries(&entries)
}

/// Validate the pair representation of a sentence.
///
/// Same engine as [`validate_structure`], exposed separately so callers that
/// hold an intermediate key/value sequence (where keys can duplicate) get the
/// SF-05 cardinality check rather than silent last-key-wins collapsing.
pub fn validate_entries(entries: &[(&str, &Value)]) -> Result<(), StructuralError> {
    // Mandatory primitive presence, scanned in canonical order.
    for primitive in REQUIRED_PRIMITIVES {
        if lookup(entries, primitive).is_none() {
            return Err(StructuralError::new(
                FailureCode::Sf01,
                format!("Missing required primitive: {primitive}"),
            ));
        }
    }

    // Unknown primitive detection. No forward-compatibility allowance.
    for &(key, _) in entries {
        if !is_primitive(key) {
            return Err(StructuralError::new(
                FailureCode::Sf11,
                format!("Unknown primitive: {key}"),
            ));
        }
    }

    // Primitive type enforcement.
    if !lookup(entries, "actor").is_some_and(Value::is_string) {
        return Err(StructuralError::new(FailureCode::Sf08, "Actor must be a string"));
    }
    if !lookup(entries, "intent").is_some_and(Value::is_string) {
        return Err(StructuralError::new(FailureCode::Sf08, "Intent must be a string"));
    }
    if !lookup(entries, "context").is_some_and(Value::is_object) {
        return Err(StructuralError::new(FailureCode::Sf08, "Context must be an object"));
    }

    check_canonical_order(entries)?;

    // Outcome domain.
    let outcome = lookup(entries, "outcome")
        .and_then(Value::as_str)
        .filter(|o| VALID_OUTCOMES.contains(o))
        .ok_or_else(|| StructuralError::new(FailureCode::Sf07, "Invalid outcome value"))?;

    // Conditional reason rules.
    let reason = lookup(entries, "reason");
    if outcome == "Refused" && reason.is_none() {
        return Err(StructuralError::new(
            FailureCode::Sf03,
            "Reason required when outcome is Refused",
        ));
    }
    if outcome == "Allowed" && reason.is_some() {
        return Err(StructuralError::new(
            FailureCode::Sf03,
            "Reason forbidden when outcome is Allowed",
        ));
    }

    // Reason multiplicity: always a single entry, never a sequence.
    if reason.is_some_and(Value::is_array) {
        return Err(StructuralError::new(
            FailureCode::Sf06,
            "Multiple reasons not allowed",
        ));
    }

    // Cardinality: no primitive may appear twice.
    for (i, (key, _)) in entries.iter().enumerate() {
        if entries[..i].iter().any(|(seen, _)| seen == key) {
            return Err(StructuralError::new(
                FailureCode::Sf05,
                format!("Duplicate primitive: {key}"),
            ));
        }
    }

    // Constraint set integrity.
    let constraints = lookup(entries, "constraints")
        .and_then(Value::as_array)
        .ok_or_else(|| StructuralError::new(FailureCode::Sf09, "ConstraintSet must be a sequence"))?;

    if constraints.is_empty() {
        return Err(StructuralError::new(
            FailureCode::Sf02,
            "ConstraintSet must not be empty",
        ));
    }

    for constraint in constraints {
        let entry = constraint.as_object().ok_or_else(|| {
            StructuralError::new(FailureCode::Sf08, "Constraint must be an object")
        })?;
        if !entry.contains_key("field") || !entry.contains_key("value") {
            return Err(StructuralError::new(
                FailureCode::Sf08,
                "Constraint missing field or value",
            ));
        }
    }

    // Primitive nesting: no object-valued primitive may reuse a reserved
    // top-level name among its own keys.
    for (_, value) in entries {
        if let Some(nested) = value.as_object() {
            for nested_key in nested.keys() {
                if REQUIRED_PRIMITIVES.contains(&nested_key.as_str()) {
                    return Err(StructuralError::new(
                        FailureCode::Sf10,
                        format!("Primitive nesting detected: {nested_key}"),
                    ));
                }
            }
        }
    }

    Ok(())
}

/// First value recorded under `key`, if any.
fn lookup<'a>(entries: &[(&str, &'a Value)], key: &str) -> Option<&'a Value> {
    entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// The relative order of present keys must match the canonical order.
///
/// Present keys are compared after first-occurrence dedup so that a
/// duplicated key falls through to the cardinality check (SF-05) instead of
/// masquerading as an ordering violation.
fn check_canonical_order(entries: &[(&str, &Value)]) -> Result<(), StructuralError> {
    let mut keys: Vec<&str> = Vec::with_capacity(entries.len());
    for &(key, _) in entries {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    let expected: Vec<&str> = CANONICAL_ORDER
        .into_iter()
        .filter(|canonical| keys.contains(canonical))
        .collect();

    if keys != expected {
        return Err(StructuralError::new(
            FailureCode::Sf04,
            "Canonical primitive order violated",
        ));
    }

    Ok(())
}
