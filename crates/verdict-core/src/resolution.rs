//! Resolver.
//!
//! Converts the semantic verdict into the final classification. The mapping
//! is pure and exhaustive: the resolver never consults the sentence's own
//! declared `outcome` or `reason`, so a decision record cannot misreport its
//! own justification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::semantic::Evaluation;
use crate::taxonomy::FailureCode;

/// Final classification of a sentence.
///
/// Serializes with the classification label as the `"classification"` tag,
/// matching the wire shape consumed by callers:
/// `{"classification": "Accepted + Refused", "reason": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "classification")]
pub enum Classification {
    /// The sentence violated the grammar; meaning was never evaluated.
    #[serde(rename = "Rejected (Structural)")]
    Rejected {
        failure_class: FailureCode,
        message: String,
    },

    /// Structure and every constraint held.
    #[serde(rename = "Accepted + Allowed")]
    Allowed,

    /// Structure held but a constraint failed; `reason` is the failing
    /// constraint re-derived by the evaluator, never the declared one.
    #[serde(rename = "Accepted + Refused")]
    Refused { reason: Value },
}

/// Map a semantic verdict to its classification.
pub fn resolve(evaluation: Evaluation) -> Classification {
    match evaluation {
        Evaluation::Satisfied => Classification::Allowed,
        Evaluation::Failed { constraint, .. } => Classification::Refused { reason: constraint },
    }
}
