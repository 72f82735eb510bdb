use crate::builtin::builtin_modes;
use crate::error::RegistryError;
use crate::mode::{LanguageDefinition, LanguageMode};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static BUILTIN: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::builtin);

/// The process-wide registry of built-in languages.
pub fn builtin_registry() -> &'static LanguageRegistry {
    &BUILTIN
}

/// An immutable, ordered collection of [`LanguageMode`]s.
///
/// Lookups never mutate the registry, so a shared reference can be read from any thread.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    modes: Vec<LanguageMode>,
    by_id: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// A registry holding the eleven built-in languages.
    pub fn builtin() -> Self {
        let modes = builtin_modes();
        let by_id: HashMap<String, usize> = modes
            .iter()
            .enumerate()
            .map(|(idx, mode)| (mode.id().to_ascii_lowercase(), idx))
            .collect();
        debug_assert_eq!(by_id.len(), modes.len(), "duplicate built-in language id");
        tracing::debug!(languages = modes.len(), "built-in language registry built");
        Self { modes, by_id }
    }

    /// Start an empty registry. Call [`RegistryBuilder::add_builtin`] to include the defaults.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up a mode by its id (`"python"`, `"json"`, ...). Ids compare case-insensitively.
    pub fn resolve(&self, id: &str) -> Option<&LanguageMode> {
        let idx = match self.by_id.get(id) {
            Some(&idx) => idx,
            None => *self.by_id.get(&id.to_ascii_lowercase())?,
        };
        self.modes.get(idx)
    }

    /// Detect a mode from a file extension (`"py"`, `".PY"`).
    ///
    /// Matching ignores ASCII case. If several modes claim the same extension, the one
    /// registered first wins.
    pub fn detect(&self, extension: &str) -> Option<&LanguageMode> {
        if extension.trim_start_matches('.').is_empty() {
            return None;
        }
        self.modes.iter().find(|m| m.matches_extension(extension))
    }

    /// Detect a mode from a path's extension.
    pub fn detect_path(&self, path: impl AsRef<Path>) -> Option<&LanguageMode> {
        let extension = path.as_ref().extension()?.to_str()?;
        self.detect(extension)
    }

    /// Resolve `key` as an id first, then as a file extension.
    pub fn lookup(&self, key: &str) -> Option<&LanguageMode> {
        self.resolve(key).or_else(|| self.detect(key))
    }

    /// Modes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageMode> {
        self.modes.iter()
    }

    /// Number of registered modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Whether no mode is registered.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// Collects modes for a [`LanguageRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modes: Vec<LanguageMode>,
    by_id: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Register a mode. Ids are stored lowercase and must be unique.
    pub fn add(&mut self, mode: LanguageMode) -> Result<&mut Self, RegistryError> {
        let id = mode.id().trim().to_ascii_lowercase();
        if id.is_empty() {
            return Err(RegistryError::MissingField("id"));
        }
        if self.by_id.contains_key(&id) {
            return Err(RegistryError::DuplicateLanguage(id));
        }
        self.by_id.insert(id, self.modes.len());
        self.modes.push(mode);
        Ok(self)
    }

    /// Register the eleven built-in languages.
    pub fn add_builtin(&mut self) -> Result<&mut Self, RegistryError> {
        for mode in builtin_modes() {
            self.add(mode)?;
        }
        Ok(self)
    }

    /// Register a mode from a YAML [`LanguageDefinition`] document.
    pub fn add_yaml(&mut self, yaml: &str) -> Result<&mut Self, RegistryError> {
        let definition: LanguageDefinition = serde_yaml::from_str(yaml)?;
        self.add(definition.into())
    }

    /// Freeze the collected modes into a registry.
    pub fn build(self) -> LanguageRegistry {
        tracing::debug!(languages = self.modes.len(), "language registry built");
        LanguageRegistry {
            modes: self.modes,
            by_id: self.by_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleTag;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_by_id() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.len(), 11);
        assert_eq!(registry.resolve("python").map(|m| m.id()), Some("python"));
        assert_eq!(registry.resolve("JSON").map(|m| m.id()), Some("json"));
        assert!(registry.resolve("cobol").is_none());
    }

    #[test]
    fn test_every_builtin_mode_resolves_to_itself() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.len(), builtin_modes().len());
        for mode in registry.iter() {
            assert!(std::ptr::eq(registry.resolve(mode.id()).unwrap(), mode), "{}", mode.id());
        }

        let mut builder = LanguageRegistry::builder();
        builder.add_builtin().unwrap();
        let built = builder.build();
        let ids: Vec<&str> = built.iter().map(LanguageMode::id).collect();
        let builtin_ids: Vec<&str> = registry.iter().map(LanguageMode::id).collect();
        assert_eq!(ids, builtin_ids);
    }

    #[test]
    fn test_detect_extension_ignores_case() {
        let registry = builtin_registry();
        assert_eq!(registry.detect("py").map(|m| m.id()), Some("python"));
        assert_eq!(registry.detect("PY").map(|m| m.id()), Some("python"));
        assert_eq!(registry.detect(".yml").map(|m| m.id()), Some("yaml"));
        assert_eq!(registry.detect("tsx").map(|m| m.id()), Some("typescript"));
        assert!(registry.detect("zzz").is_none());
        assert!(registry.detect("").is_none());
        assert!(registry.detect(".").is_none());
    }

    #[test]
    fn test_detect_path() {
        let registry = builtin_registry();
        assert_eq!(
            registry.detect_path("notes/Board.MD").map(|m| m.id()),
            Some("markdown")
        );
        assert!(registry.detect_path("Makefile").is_none());
    }

    #[test]
    fn test_lookup_prefers_id_over_extension() {
        let registry = builtin_registry();
        assert_eq!(registry.lookup("shell").map(|m| m.id()), Some("shell"));
        assert_eq!(registry.lookup("sh").map(|m| m.id()), Some("shell"));
        assert_eq!(registry.lookup("htm").map(|m| m.id()), Some("html"));
    }

    #[test]
    fn test_first_registered_wins_on_shared_extension() {
        let mut builder = LanguageRegistry::builder();
        builder
            .add(LanguageMode::builder("first", "First").extensions(["txt"]).build())
            .unwrap()
            .add(LanguageMode::builder("second", "Second").extensions(["TXT"]).build())
            .unwrap();
        let registry = builder.build();
        assert_eq!(registry.detect("txt").map(|m| m.id()), Some("first"));
    }

    #[test]
    fn test_duplicate_and_empty_ids_are_rejected() {
        let mut builder = LanguageRegistry::builder();
        builder.add_builtin().unwrap();

        let err = builder
            .add(LanguageMode::builder("Python", "Python 2").build())
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateLanguage(id) if id == "python"));

        let err = builder
            .add(LanguageMode::builder("  ", "Blank").build())
            .unwrap_err();
        assert!(matches!(err, RegistryError::MissingField("id")));
    }

    #[test]
    fn test_add_yaml_definition() {
        let mut builder = LanguageRegistry::builder();
        builder.add_builtin().unwrap();
        builder
            .add_yaml(
                r#"
id: ini
name: INI
extensions: [ini, cfg]
comments: { line: ";" }
patterns:
  - { regex: '^\s*\[[^\]]+\]', style: type }
  - { regex: '^\s*[;#].*$', style: comment }
"#,
            )
            .unwrap();
        let registry = builder.build();

        let ini = registry.detect("CFG").unwrap();
        assert_eq!(ini.id(), "ini");
        assert_eq!(ini.line_comment_token(), ";");
        assert_eq!(ini.patterns()[0].style, StyleTag::Type);
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_add_yaml_rejects_unknown_fields() {
        let mut builder = LanguageRegistry::builder();
        let err = builder.add_yaml("id: x\ncolour: red\n").unwrap_err();
        assert!(matches!(err, RegistryError::Yaml(_)));
    }
}
