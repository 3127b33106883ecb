//! Token validation errors.

use thiserror::Error;

/// Error returned when token validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// An alias references a token that doesn't exist.
    #[error("token '{from}' aliases non-existent token '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution.
    #[error("cycle detected in token aliases: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_error_display() {
        let err = TokenError::UnresolvedAlias {
            from: "orphan".to_string(),
            to: "missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("orphan"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_cycle_detected_error_display() {
        let err = TokenError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("a -> b -> a"));
    }
}
