//! Unified error types for the domain layer
//!
//! Lookup misses that the presentation resolves locally (unknown prerequisite,
//! unreadable stored progress) never become errors. These variants cover the
//! explicit mutation API.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for out-of-range or malformed values.
    ///
    /// # Example
    /// ```ignore
    /// if !(1..=4).contains(&week) {
    ///     return Err(DomainError::validation("week must be between 1 and 4"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Used by the `FromStr` implementations of the mood and pillar
    /// vocabularies when a stored value is not recognised.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("week must be between 1 and 4");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: week must be between 1 and 4"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Mission", "w3-volunteer-shift");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Mission"));
        assert!(err.to_string().contains("w3-volunteer-shift"));
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("mission is locked");
        assert_eq!(err.to_string(), "Constraint violation: mission is locked");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown mood: sleepy");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("sleepy"));
    }
}
