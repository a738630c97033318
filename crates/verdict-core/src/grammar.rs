//! Frozen grammar table.
//!
//! The grammar is fixed configuration data, not runtime state: the set of
//! recognized primitives, the canonical order they must appear in, and the
//! valid outcome domain. The structural validator consumes these tables; no
//! other component reads them.

/// Primitives every sentence must carry, in canonical-order scan sequence.
pub const REQUIRED_PRIMITIVES: [&str; 5] = ["actor", "intent", "context", "constraints", "outcome"];

/// Primitives a sentence may carry.
pub const OPTIONAL_PRIMITIVES: [&str; 1] = ["reason"];

/// The fixed relative order required among whichever primitives are present.
pub const CANONICAL_ORDER: [&str; 6] = [
    "actor",
    "intent",
    "context",
    "constraints",
    "outcome",
    "reason",
];

/// The two-value outcome domain.
pub const VALID_OUTCOMES: [&str; 2] = ["Allowed", "Refused"];

/// Whether `key` is a grammar-recognized primitive name (required or optional).
pub fn is_primitive(key: &str) -> bool {
    REQUIRED_PRIMITIVES.contains(&key) || OPTIONAL_PRIMITIVES.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_covers_all_primitives() {
        for key in REQUIRED_PRIMITIVES.iter().chain(OPTIONAL_PRIMITIVES.iter()) {
            assert!(CANONICAL_ORDER.contains(key), "{key} missing from canonical order");
        }
        assert_eq!(
            CANONICAL_ORDER.len(),
            REQUIRED_PRIMITIVES.len() + OPTIONAL_PRIMITIVES.len()
        );
    }

    #[test]
    fn required_precede_optional_in_canonical_order() {
        assert_eq!(&CANONICAL_ORDER[..REQUIRED_PRIMITIVES.len()], &REQUIRED_PRIMITIVES);
    }

    #[test]
    fn is_primitive_rejects_unknown_keys() {
        assert!(is_primitive("actor"));
        assert!(is_primitive("reason"));
        assert!(!is_primitive("priority"));
        assert!(!is_primitive(""));
    }
}
