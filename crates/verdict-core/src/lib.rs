//! # verdict-core
//!
//! Deterministic grammar validation and outcome re-derivation for decision
//! records.
//!
//! A sentence (actor, intent, context, ordered constraints, claimed outcome)
//! passes through three ordered phases: structural grammar enforcement,
//! semantic constraint evaluation, and outcome resolution. Structure is
//! checked before meaning, meaning before the final classification, and the
//! classification is always re-derived from constraints and context rather
//! than trusted from the sentence itself.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same input always produces byte-identical output,
//!    across processes
//! 2. **Pure**: the input sentence is never mutated; no I/O, clocks, or
//!    randomness inside the pipeline
//! 3. **First-failure-wins**: exactly one taxonomy code per rejection, under
//!    a fixed check order
//! 4. **Honest outcomes**: the final reason is the evaluator's, never the
//!    sentence's declared one
//!
//! ## Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use verdict_core::{validate, Classification};
//!
//! let sentence = json!({
//!     "actor": "User_001",
//!     "intent": "Transfer",
//!     "context": {"balance": 5000},
//!     "constraints": [{"field": "balance", "value": 5000}],
//!     "outcome": "Allowed"
//! });
//!
//! let report = validate(&sentence)?;
//! match report.classification {
//!     Classification::Allowed => println!("allowed"),
//!     Classification::Refused { reason } => println!("refused: {reason}"),
//!     Classification::Rejected { failure_class, .. } => println!("{failure_class}"),
//! }
//! ```

pub mod grammar;
pub mod phase;
pub mod resolution;
pub mod semantic;
pub mod structural;
pub mod taxonomy;

// Re-export main types at crate root
pub use phase::{Phase, PhaseOrderError, PhaseTracker, PHASE_SEQUENCE};
pub use resolution::{resolve, Classification};
pub use semantic::{evaluate_constraints, ConstraintShapeError, Evaluation};
pub use structural::{validate_entries, validate_structure, StructuralError};
pub use taxonomy::FailureCode;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The pipeline's own ordering contract was broken.
///
/// Unlike a structural rejection, this is an implementation bug, not a
/// property of the input: it propagates as a hard failure and is never
/// converted into a classification.
#[derive(Error, Debug)]
pub enum InvariantError {
    #[error("constraint shape violation: {0}")]
    ConstraintShape(#[from] ConstraintShapeError),

    #[error("phase sequence violation: {0}")]
    PhaseOrder(#[from] PhaseOrderError),
}

/// The pipeline's output: a classification, optionally with the recorded
/// phase history for diagnostic callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub classification: Classification,

    /// Executed phases in entry order. Omitted from serialized output when
    /// not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_log: Option<Vec<Phase>>,
}

/// Validate a sentence end to end.
///
/// This is the main entry point. The sentence is read-only throughout and
/// the classification is fully re-derived:
///
/// - grammar violation: `Rejected` with the first taxonomy code under the
///   fixed check order; the semantic and resolution phases never run
/// - every constraint holds: `Allowed`
/// - a constraint fails: `Refused` with the first failing constraint as the
///   reason
pub fn validate(sentence: &Value) -> Result<Report, InvariantError> {
    run(sentence, false)
}

/// Validate a sentence and attach the recorded phase history to the report.
pub fn validate_with_phase_log(sentence: &Value) -> Result<Report, InvariantError> {
    run(sentence, true)
}

fn run(sentence: &Value, with_phase_log: bool) -> Result<Report, InvariantError> {
    let mut tracker = PhaseTracker::new();

    tracker.enter(Phase::Structural);
    debug!(phase = ?Phase::Structural, "entering phase");

    let structure = match sentence.as_object() {
        Some(map) => validate_structure(map),
        // A non-object root carries no primitives at all, so it fails the
        // presence scan exactly like an empty sentence.
        None => validate_entries(&[]),
    };

    if let Err(violation) = structure {
        tracker.verify_sequence()?;
        debug!(code = %violation.code, "structural rejection");

        return Ok(Report {
            classification: Classification::Rejected {
                failure_class: violation.code,
                message: violation.message,
            },
            phase_log: phase_log(tracker, with_phase_log),
        });
    }

    tracker.enter(Phase::Semantic);
    debug!(phase = ?Phase::Semantic, "entering phase");
    let evaluation = evaluate_constraints(&sentence["constraints"], &sentence["context"])?;

    tracker.enter(Phase::Resolution);
    debug!(phase = ?Phase::Resolution, "entering phase");
    let classification = resolve(evaluation);

    tracker.verify_sequence()?;

    Ok(Report {
        classification,
        phase_log: phase_log(tracker, with_phase_log),
    })
}

fn phase_log(tracker: PhaseTracker, requested: bool) -> Option<Vec<Phase>> {
    requested.then(|| tracker.into_phases())
}
