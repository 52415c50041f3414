//! Error types for the binding generator core.
//!
//! Almost everything in the generator degrades to a documented fallback
//! instead of failing: unknown types resolve to identity descriptors and
//! ambiguous overloads widen to `Dynamic`. The only fatal condition the
//! core itself can detect is a structural violation in the upstream IDL,
//! and that aborts generation for the single offending operation.

use thiserror::Error;

/// Result alias for generator operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors raised while deriving binding signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A required parameter was discovered after an optional one while
    /// rendering a parameter list. Dart bracketed optional groups must
    /// trail the required parameters, so the upstream IDL is malformed.
    #[error("operation '{operation}': optional parameters cannot precede required ones")]
    OptionalBeforeRequired {
        /// Name of the operation whose signature could not be rendered.
        operation: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_violation_names_the_operation() {
        let err = GenerationError::OptionalBeforeRequired {
            operation: "drawImage".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("drawImage"));
        assert!(message.contains("cannot precede"));
    }
}
