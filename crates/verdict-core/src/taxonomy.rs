//! Structural failure taxonomy.
//!
//! A closed set of coded grammar violations (SF-01 through SF-11). Keeping
//! the codes as an enumeration bound to their descriptions prevents drift
//! between the checker and this table. Descriptions are documentation for
//! output; they never drive control flow.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A coded structural grammar violation.
///
/// Serializes as the literal code string (e.g. `"SF-01"`), which is the form
/// that appears in the `failure_class` field of a rejected classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureCode {
    /// Missing mandatory primitive
    #[serde(rename = "SF-01")]
    Sf01,
    /// Empty constraint set
    #[serde(rename = "SF-02")]
    Sf02,
    /// Conditional presence violation
    #[serde(rename = "SF-03")]
    Sf03,
    /// Canonical order violation
    #[serde(rename = "SF-04")]
    Sf04,
    /// Cardinality violation
    #[serde(rename = "SF-05")]
    Sf05,
    /// Reason multiplicity violation
    #[serde(rename = "SF-06")]
    Sf06,
    /// Invalid outcome domain
    #[serde(rename = "SF-07")]
    Sf07,
    /// Constraint structural invalidity
    #[serde(rename = "SF-08")]
    Sf08,
    /// Constraint order corruption
    #[serde(rename = "SF-09")]
    Sf09,
    /// Primitive nesting/interleaving violation
    #[serde(rename = "SF-10")]
    Sf10,
    /// Unknown primitive
    #[serde(rename = "SF-11")]
    Sf11,
}

impl FailureCode {
    /// The literal taxonomy code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::Sf01 => "SF-01",
            FailureCode::Sf02 => "SF-02",
            FailureCode::Sf03 => "SF-03",
            FailureCode::Sf04 => "SF-04",
            FailureCode::Sf05 => "SF-05",
            FailureCode::Sf06 => "SF-06",
            FailureCode::Sf07 => "SF-07",
            FailureCode::Sf08 => "SF-08",
            FailureCode::Sf09 => "SF-09",
            FailureCode::Sf10 => "SF-10",
            FailureCode::Sf11 => "SF-11",
        }
    }

    /// Human-readable description of the violation class.
    pub fn description(&self) -> &'static str {
        match self {
            FailureCode::Sf01 => "Missing mandatory primitive",
            FailureCode::Sf02 => "Empty ConstraintSet",
            FailureCode::Sf03 => "Conditional presence violation",
            FailureCode::Sf04 => "Canonical order violation",
            FailureCode::Sf05 => "Cardinality violation",
            FailureCode::Sf06 => "Reason multiplicity violation",
            FailureCode::Sf07 => "Invalid outcome domain",
            FailureCode::Sf08 => "Constraint structural invalidity",
            FailureCode::Sf09 => "Constraint order corruption",
            FailureCode::Sf10 => "Primitive nesting/interleaving violation",
            FailureCode::Sf11 => "Unknown primitive",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_as_literal_strings() {
        let json = serde_json::to_string(&FailureCode::Sf01).unwrap();
        assert_eq!(json, "\"SF-01\"");

        let back: FailureCode = serde_json::from_str("\"SF-11\"").unwrap();
        assert_eq!(back, FailureCode::Sf11);
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(FailureCode::Sf04.to_string(), "SF-04");
        assert_eq!(FailureCode::Sf10.as_str(), "SF-10");
    }

    #[test]
    fn every_code_has_a_description() {
        let all = [
            FailureCode::Sf01,
            FailureCode::Sf02,
            FailureCode::Sf03,
            FailureCode::Sf04,
            FailureCode::Sf05,
            FailureCode::Sf06,
            FailureCode::Sf07,
            FailureCode::Sf08,
            FailureCode::Sf09,
            FailureCode::Sf10,
            FailureCode::Sf11,
        ];
        for code in all {
            assert!(!code.description().is_empty());
        }
    }
}
