// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors (user-facing, name the offending field)
    // ========================================================================
    #[error("invalid configuration: {field} = '{value}': {reason}")]
    Configuration {
        field: &'static str,
        value: String,
        reason: String,
    },

    // ========================================================================
    // Invariant Violations (internal: pre-validated data arrived broken)
    // ========================================================================
    #[error("invariant violation: {detail}")]
    InvariantViolation { detail: String },
}

impl DomainError {
    /// Shorthand constructor for a configuration failure.
    pub fn configuration(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Configuration {
                field,
                value,
                reason,
            } => vec![
                format!("Field '{field}' with value '{value}' was rejected: {reason}"),
                "Names must be non-empty, contain only letters, digits, '-' or '_', and not start with '.'".into(),
                "Ports must be positive and unique across the host and every microfrontend".into(),
            ],
            Self::InvariantViolation { .. } => vec![
                "This appears to be a bug in mfgen: validated data reached the generator in a broken state".into(),
                "Please report this issue with the full command you ran".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration { .. } => ErrorCategory::Validation,
            Self::InvariantViolation { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_field_and_value() {
        let err = DomainError::configuration("hostPort", "3000", "duplicate port");
        let msg = err.to_string();
        assert!(msg.contains("hostPort"));
        assert!(msg.contains("3000"));
        assert!(msg.contains("duplicate port"));
    }

    #[test]
    fn configuration_suggestions_mention_the_field() {
        let err = DomainError::configuration("appName", "", "name cannot be empty");
        assert!(err.suggestions().iter().any(|s| s.contains("appName")));
    }
}
