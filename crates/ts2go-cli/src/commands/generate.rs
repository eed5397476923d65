//! `ts2go generate`

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use ts2go::{mixin, Generator, Mixin};

use crate::cli_config::{expand_path, CliConfig};
use crate::output;
use crate::{GenerateArgs, PathOrStdin};

/// Generation settings after layering flags over the config file.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Settings {
    pub package_name: Option<String>,
    pub skip_header: bool,
    pub skip_optional_pointer: bool,
    pub template_dir: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(args: &GenerateArgs, config: &CliConfig) -> Self {
        Self {
            package_name: args.package.clone().or_else(|| config.package_name.clone()),
            skip_header: args.skip_header || config.skip_header,
            skip_optional_pointer: args.skip_optional_pointer || config.skip_optional_pointer,
            template_dir: args
                .templates
                .clone()
                .or_else(|| config.template_dir.as_deref().map(expand_path)),
        }
    }

    pub fn mixins(&self) -> Vec<Mixin> {
        let mut mixins = Vec::new();
        if let Some(name) = &self.package_name {
            mixins.push(mixin::set_package_name(name.clone()));
        }
        if self.skip_header {
            mixins.push(mixin::skip_header());
        }
        if self.skip_optional_pointer {
            mixins.push(mixin::skip_optional_pointer());
        }
        mixins
    }

    pub fn generator(&self) -> Generator {
        let generator = Generator::new().with_mixins(self.mixins());
        match &self.template_dir {
            Some(dir) => generator.with_template_override_dir(dir),
            None => generator,
        }
    }
}

pub(crate) fn handle_generate(args: GenerateArgs, cli_config: &CliConfig) -> anyhow::Result<()> {
    let settings = Settings::resolve(&args, cli_config);
    tracing::debug!(?settings, "generate settings");

    let source = read_input(&args.input)?;
    let (go, generated) = settings
        .generator()
        .generate_str(&source)
        .with_context(|| format!("failed to generate from {}", describe(&args.input)))?;

    match &args.output {
        Some(path) => {
            fs::write(path, &go).with_context(|| format!("failed to write {}", path.display()))?;
            output::success(format!("Wrote {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(go.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }

    if !generated.diagnostics.is_empty() {
        output::warning(format!(
            "{} member(s) were not generated",
            generated.diagnostics.len()
        ));
        for diagnostic in &generated.diagnostics {
            output::hint(format!("  {diagnostic}"));
        }
    }

    Ok(())
}

fn read_input(input: &PathOrStdin) -> anyhow::Result<String> {
    match input {
        PathOrStdin::Stdin => {
            let mut source = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
        PathOrStdin::Path(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
    }
}

fn describe(input: &PathOrStdin) -> String {
    match input {
        PathOrStdin::Stdin => "stdin".to_string(),
        PathOrStdin::Path(path) => path.display().to_string(),
    }
}
