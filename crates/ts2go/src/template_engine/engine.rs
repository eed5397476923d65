//! Render a [`Document`] through the built-in templates and any overrides.

use tera::{Context, Tera};
use tracing::debug;

use super::filters;
use super::loader::{load_builtins, TemplateSource, ENTRY_TEMPLATE};
use super::EngineError;
use crate::model::Document;

/// Template engine over Tera with an optional override set.
#[derive(Default)]
pub struct TemplateEngine {
    overrides: Option<Box<dyn TemplateSource>>,
}

impl TemplateEngine {
    /// Engine that renders with the built-in templates only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that prefers templates from `overrides` by name.
    pub fn with_overrides(overrides: Box<dyn TemplateSource>) -> Self {
        Self {
            overrides: Some(overrides),
        }
    }

    /// Render `document` with the entry template.
    ///
    /// Overrides are reloaded on every call, so edits to an override
    /// directory take effect without rebuilding the engine.
    pub fn render(&self, document: &Document) -> Result<String, EngineError> {
        let tera = self.templates()?;
        let mut context = Context::from_serialize(document).map_err(EngineError::Context)?;
        context.insert("declarations", &document.declarations());

        tera.render(ENTRY_TEMPLATE, &context)
            .map_err(|source| EngineError::Render {
                template: ENTRY_TEMPLATE.to_string(),
                source,
            })
    }

    fn templates(&self) -> Result<Tera, EngineError> {
        let builtins = load_builtins()?;
        let mut tera = match &self.overrides {
            Some(source) => {
                let mut tera = source.load()?;
                debug!(
                    overrides = ?tera.get_template_names().collect::<Vec<_>>(),
                    "loaded template overrides"
                );
                // Built-ins only fill names the overrides leave undefined.
                tera.extend(&builtins).map_err(|source| EngineError::Load {
                    origin: "built-in templates".to_string(),
                    source,
                })?;
                tera
            }
            None => builtins,
        };

        filters::register(&mut tera);
        tera.autoescape_on(vec![]);
        Ok(tera)
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("overrides", &self.overrides.is_some())
            .finish()
    }
}
