//! Model registry - the static table of addressable models.
//!
//! The registry is a value constructed once at startup (from configuration
//! or [`ModelRegistry::default`]) and passed explicitly to the orchestrator,
//! so tests can substitute a smaller table.

pub mod spec;

use crate::core::error::DomainError;
pub use spec::{ModelSpec, PayloadShape};

/// Ordered mapping from logical model key to [`ModelSpec`].
///
/// Iteration order is definition order; the orchestrator's result set
/// preserves it.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    specs: Vec<ModelSpec>,
}

impl ModelRegistry {
    pub fn new(specs: Vec<ModelSpec>) -> Self {
        Self { specs }
    }

    /// The built-in model table, mirroring the original endpoint mapping.
    pub fn builtin() -> Self {
        Self::new(vec![
            ModelSpec::new("fb-bart", "facebook/bart-large-cnn", PayloadShape::RawText),
            ModelSpec::new("falcon", "Falconsai/text_summarization", PayloadShape::RawText),
            ModelSpec::new(
                "mistralai",
                "mistralai/Mistral-7B-Instruct-v0.2",
                PayloadShape::RawText,
            ),
            ModelSpec::new(
                "roberta",
                "deepset/roberta-base-squad2",
                PayloadShape::QuestionContext,
            )
            .with_question("Who is mentioned in the document?"),
            ModelSpec::new(
                "pegasus",
                "starcatmeow/autotrain-cybersecurity-summarization-pegasus-x-book-43369110299",
                PayloadShape::RawText,
            ),
        ])
    }

    /// Look up a spec by its logical key (case-sensitive).
    ///
    /// Never falls back to a default: an absent key is an error.
    pub fn resolve(&self, key: &str) -> Result<&ModelSpec, DomainError> {
        self.specs
            .iter()
            .find(|s| s.key() == key)
            .ok_or_else(|| DomainError::UnknownModelKey(key.to_string()))
    }

    /// Iterate specs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Logical keys in registry order.
    pub fn keys(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.key()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_order() {
        let registry = ModelRegistry::builtin();
        assert_eq!(
            registry.keys(),
            vec!["fb-bart", "falcon", "mistralai", "roberta", "pegasus"]
        );
    }

    #[test]
    fn test_resolve_known_key() {
        let registry = ModelRegistry::builtin();
        let spec = registry.resolve("roberta").unwrap();
        assert_eq!(spec.endpoint(), "deepset/roberta-base-squad2");
        assert_eq!(spec.shape(), PayloadShape::QuestionContext);
    }

    #[test]
    fn test_resolve_unknown_key_errors() {
        let registry = ModelRegistry::builtin();
        let err = registry.resolve("nonexistent-key").unwrap_err();
        assert!(matches!(err, DomainError::UnknownModelKey(k) if k == "nonexistent-key"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = ModelRegistry::builtin();
        assert!(registry.resolve("FB-BART").is_err());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ModelRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.resolve("fb-bart").is_err());
    }
}
