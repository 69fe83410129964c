//! Registry of named styles.

use std::collections::HashMap;

use console::Style;

use super::error::StyleValidationError;
use super::value::StyleValue;

/// Named style values, resolved through aliases on lookup.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: HashMap<String, StyleValue>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style, returning the registry for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles.insert(name.to_string(), value.into());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Follows aliases from `name` to a concrete style.
    ///
    /// Returns `None` when the name is unknown or its alias chain dangles or
    /// loops. A validated registry only returns `None` for unknown names.
    pub fn resolve(&self, name: &str) -> Option<Style> {
        let mut current = name;
        for _ in 0..=self.styles.len() {
            match self.styles.get(current)? {
                StyleValue::Concrete(style) => return Some(style.clone()),
                StyleValue::Alias(target) => current = target.as_str(),
            }
        }
        None
    }

    /// Checks that every alias chain ends at a concrete style.
    ///
    /// Names are checked in sorted order, so the reported error is stable.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for name in self.names() {
            let mut path = vec![name.to_string()];
            let mut current = name;

            while let Some(StyleValue::Alias(target)) = self.styles.get(current) {
                if !self.styles.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.to_string(),
                        to: target.clone(),
                    });
                }
                let looped = path.iter().any(|seen| seen == target);
                path.push(target.clone());
                if looped {
                    return Err(StyleValidationError::CycleDetected { path });
                }
                current = target.as_str();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Lookup
    // ============================================================================

    #[test]
    fn test_resolve_concrete() {
        let styles = Styles::new().add("title", Style::new().bold());
        assert!(styles.resolve("title").is_some());
        assert!(styles.resolve("body").is_none());
    }

    #[test]
    fn test_resolve_alias_chain() {
        let styles = Styles::new()
            .add("accent", Style::new().cyan().force_styling(true))
            .add("heading", "accent")
            .add("title", "heading");

        let style = styles.resolve("title").unwrap();
        assert_eq!(style.apply_to("x").to_string(), "\x1b[36mx\x1b[0m");
    }

    #[test]
    fn test_resolve_cycle_is_none() {
        let styles = Styles::new().add("a", "b").add("b", "a");
        assert!(styles.resolve("a").is_none());
    }

    #[test]
    fn test_add_replaces() {
        let styles = Styles::new().add("a", "missing").add("a", Style::new());
        assert_eq!(styles.len(), 1);
        assert!(styles.validate().is_ok());
    }

    // ============================================================================
    // Validation
    // ============================================================================

    #[test]
    fn test_validate_empty() {
        assert!(Styles::new().validate().is_ok());
    }

    #[test]
    fn test_validate_dangling_alias() {
        let styles = Styles::new()
            .add("title", "heading")
            .add("heading", "missing");

        assert_eq!(
            styles.validate(),
            Err(StyleValidationError::UnresolvedAlias {
                from: "heading".to_string(),
                to: "missing".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_cycle() {
        let styles = Styles::new().add("a", "b").add("b", "c").add("c", "a");

        match styles.validate() {
            Err(StyleValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["a", "b", "c", "a"]);
            }
            other => panic!("expected a cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_self_alias() {
        let styles = Styles::new().add("loop", "loop");
        assert!(matches!(
            styles.validate(),
            Err(StyleValidationError::CycleDetected { .. })
        ));
    }
}
