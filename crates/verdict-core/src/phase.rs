//! Phase tracker.
//!
//! Records which pipeline phases have executed and enforces the fixed
//! Structural -> Semantic -> Resolution sequence. A tracker is instantiated
//! fresh per invocation and dropped with it; it is never process-wide state,
//! so independent invocations stay freely parallelizable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three ordered pipeline phases. Serializes as the phase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Structural,
    Semantic,
    Resolution,
}

/// The canonical phase sequence.
pub const PHASE_SEQUENCE: [Phase; 3] = [Phase::Structural, Phase::Semantic, Phase::Resolution];

/// The recorded phase history is not a prefix of the canonical sequence.
///
/// Fatal: the pipeline's own ordering contract was broken. This is never
/// converted into a classification.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("phase order violated: expected {expected:?}, recorded {recorded:?}")]
pub struct PhaseOrderError {
    pub expected: Vec<Phase>,
    pub recorded: Vec<Phase>,
}

/// Strictly-increasing record of executed phases.
#[derive(Debug, Default)]
pub struct PhaseTracker {
    phases: Vec<Phase>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record entry into a phase.
    pub fn enter(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    /// Fail unless the recorded history is a prefix of the canonical
    /// sequence.
    pub fn verify_sequence(&self) -> Result<(), PhaseOrderError> {
        let expected = &PHASE_SEQUENCE[..self.phases.len().min(PHASE_SEQUENCE.len())];
        if self.phases != expected {
            return Err(PhaseOrderError {
                expected: expected.to_vec(),
                recorded: self.phases.clone(),
            });
        }
        Ok(())
    }

    /// The phases recorded so far, in entry order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Consume the tracker, yielding the recorded history.
    pub fn into_phases(self) -> Vec<Phase> {
        self.phases
    }
}
