//! Style validation errors.

use thiserror::Error;

/// Error returned when the aliases in a style registry do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// An alias references a style that doesn't exist
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// Following aliases came back to a name already visited
    #[error("cycle detected in style aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_error_display() {
        let err = StyleValidationError::UnresolvedAlias {
            from: "heading".to_string(),
            to: "missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "style 'heading' aliases non-existent style 'missing'"
        );
    }

    #[test]
    fn test_cycle_detected_error_display() {
        let err = StyleValidationError::CycleDetected {
            path: vec!["title".to_string(), "body".to_string(), "title".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cycle"));
        assert!(msg.contains("title -> body -> title"));
    }
}
