//! Template sets: the embedded built-ins and the override channel.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use super::EngineError;

/// Template rendered first; it includes the others.
pub const ENTRY_TEMPLATE: &str = "output.tera";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (ENTRY_TEMPLATE, include_str!("../../templates/output.tera")),
    ("header.tera", include_str!("../../templates/header.tera")),
    ("struct.tera", include_str!("../../templates/struct.tera")),
    ("field.tera", include_str!("../../templates/field.tera")),
    (
        "type_alias.tera",
        include_str!("../../templates/type_alias.tera"),
    ),
    (
        "const_group.tera",
        include_str!("../../templates/const_group.tera"),
    ),
];

/// Names and contents of the built-in templates.
pub fn builtin_templates() -> &'static [(&'static str, &'static str)] {
    BUILTIN_TEMPLATES
}

pub(crate) fn load_builtins() -> Result<Tera, EngineError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
        .map_err(|source| EngineError::Load {
            origin: "built-in templates".to_string(),
            source,
        })?;
    Ok(tera)
}

/// A set of templates that take precedence over the built-ins by name.
pub trait TemplateSource {
    /// Load the set. Called once per render.
    fn load(&self) -> Result<Tera, EngineError>;
}

/// Every `*.tera` file in a directory, registered by file name.
#[derive(Debug, Clone)]
pub struct TemplateDir {
    dir: PathBuf,
}

impl TemplateDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl TemplateSource for TemplateDir {
    fn load(&self) -> Result<Tera, EngineError> {
        if !self.dir.is_dir() {
            return Err(EngineError::OverrideDir(self.dir.clone()));
        }
        load_templates_from_dir(&self.dir)
    }
}

/// Templates held in memory, keyed by template name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    templates: BTreeMap<String, String>,
}

impl InMemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryTemplates
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut templates = Self::new();
        for (name, content) in iter {
            templates.insert(name, content);
        }
        templates
    }
}

impl TemplateSource for InMemoryTemplates {
    fn load(&self) -> Result<Tera, EngineError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(
            self.templates
                .iter()
                .map(|(name, content)| (name.as_str(), content.as_str())),
        )
        .map_err(|source| EngineError::Load {
            origin: "in-memory overrides".to_string(),
            source,
        })?;
        Ok(tera)
    }
}

/// Load all `.tera` files from `dir` into a Tera instance.
pub(crate) fn load_templates_from_dir(dir: &Path) -> Result<Tera, EngineError> {
    let glob_pattern = dir.join("*.tera").to_string_lossy().to_string();

    Tera::new(&glob_pattern).map_err(|source| EngineError::Load {
        origin: dir.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtins_parse() {
        let tera = load_builtins().unwrap();
        let mut names: Vec<_> = tera.get_template_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "const_group.tera",
                "field.tera",
                "header.tera",
                "output.tera",
                "struct.tera",
                "type_alias.tera",
            ]
        );
    }

    #[test]
    fn test_template_dir_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("header.tera"), "// custom\n").unwrap();
        fs::write(dir.path().join("README.md"), "# notes").unwrap();

        let tera = TemplateDir::new(dir.path()).load().unwrap();
        let names: Vec<_> = tera.get_template_names().collect();
        assert_eq!(names, vec!["header.tera"]);
    }

    #[test]
    fn test_missing_template_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = TemplateDir::new(&missing).load().unwrap_err();
        assert!(matches!(err, EngineError::OverrideDir(path) if path == missing));
    }

    #[test]
    fn test_invalid_override_syntax_is_a_load_error() {
        let overrides = InMemoryTemplates::new().with("header.tera", "{% if %}");
        let err = overrides.load().unwrap_err();
        assert!(matches!(err, EngineError::Load { .. }));
    }

    #[test]
    fn test_in_memory_from_iter() {
        let overrides: InMemoryTemplates = [("a.tera", "A"), ("b.tera", "B")].into_iter().collect();
        let tera = overrides.load().unwrap();
        assert_eq!(tera.get_template_names().count(), 2);
    }
}
