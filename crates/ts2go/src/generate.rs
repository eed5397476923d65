//! Generation entry point: read, parse, walk, customise, render, write.

use std::io::{Read, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::diagnostic::Diagnostic;
use crate::mixin::{self, Mixin};
use crate::model::Document;
use crate::parser::{parse, ParseError};
use crate::template_engine::{EngineError, TemplateDir, TemplateEngine, TemplateSource};
use crate::walker::walk;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read source: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to parse source: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Template(#[from] EngineError),
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

/// What a successful run reports back besides the written output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    /// Members that were seen but not turned into fields.
    pub diagnostics: Vec<Diagnostic>,
}

/// Configured generator. Each call to [`Generator::generate`] is an
/// independent run with its own document.
#[derive(Default)]
pub struct Generator {
    mixins: Vec<Mixin>,
    engine: TemplateEngine,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mixin; mixins run in the order they were added.
    pub fn with_mixin(mut self, mixin: Mixin) -> Self {
        self.mixins.push(mixin);
        self
    }

    pub fn with_mixins(mut self, mixins: impl IntoIterator<Item = Mixin>) -> Self {
        self.mixins.extend(mixins);
        self
    }

    /// Prefer `*.tera` files in `dir` over built-in templates of the same name.
    pub fn with_template_override_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.with_template_overrides(TemplateDir::new(dir))
    }

    /// Prefer templates from `source` over built-ins of the same name.
    pub fn with_template_overrides(mut self, source: impl TemplateSource + 'static) -> Self {
        self.engine = TemplateEngine::with_overrides(Box::new(source));
        self
    }

    /// Parse `source`, build the document and apply the mixins.
    pub fn document(&self, source: &str) -> Result<(Document, Vec<Diagnostic>), ParseError> {
        let tree = parse(source)?;
        let walked = walk(&tree);
        let mut document = walked.document;

        debug!(
            structs = document.structs.len(),
            type_aliases = document.type_aliases.len(),
            mixins = self.mixins.len(),
            "document built"
        );
        mixin::apply(&mut document, &self.mixins);

        Ok((document, walked.diagnostics))
    }

    /// Generate Go source for `source` into a string.
    pub fn generate_str(&self, source: &str) -> Result<(String, Generated), GenerateError> {
        let (document, diagnostics) = self.document(source)?;
        for diagnostic in &diagnostics {
            warn!(%diagnostic, "declaration member not generated");
        }

        let output = self.engine.render(&document)?;
        Ok((output, Generated { diagnostics }))
    }

    /// Read all of `reader`, generate, then write and flush `writer`.
    ///
    /// Nothing is written when reading, parsing or rendering fails.
    pub fn generate<R: Read, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<Generated, GenerateError> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(GenerateError::Read)?;

        let (output, generated) = self.generate_str(&source)?;
        writer
            .write_all(output.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(GenerateError::Write)?;

        info!(
            bytes = output.len(),
            diagnostics = generated.diagnostics.len(),
            "generated"
        );
        Ok(generated)
    }
}

/// Generate with default settings and built-in templates.
pub fn generate<R: Read, W: Write>(reader: R, writer: W) -> Result<Generated, GenerateError> {
    Generator::new().generate(reader, writer)
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("mixins", &self.mixins.len())
            .field("engine", &self.engine)
            .finish()
    }
}
