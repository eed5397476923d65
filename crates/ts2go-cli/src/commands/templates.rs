//! `ts2go templates list|export`

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use ts2go::template_engine::{builtin_templates, ENTRY_TEMPLATE};

use crate::output;
use crate::TemplateCommands;

pub(crate) fn handle_template_command(cmd: TemplateCommands) -> anyhow::Result<()> {
    match cmd {
        TemplateCommands::List => {
            list_templates();
            Ok(())
        }
        TemplateCommands::Export { dir, force } => {
            let written = export_templates(&dir, force)?;
            output::success(format!(
                "Exported {written} templates to {}",
                dir.display()
            ));
            output::hint(format!(
                "Edit them and pass `--templates {}` to generate with your changes.",
                dir.display()
            ));
            Ok(())
        }
    }
}

fn list_templates() {
    output::header("Built-in templates:");
    for (name, _) in builtin_templates() {
        if *name == ENTRY_TEMPLATE {
            output::item(format!("{name} (entry)"));
        } else {
            output::item(name);
        }
    }
}

/// Write every built-in template into `dir`. Returns how many were written.
pub(crate) fn export_templates(dir: &Path, force: bool) -> anyhow::Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    if !force {
        let existing: Vec<_> = builtin_templates()
            .iter()
            .map(|(name, _)| dir.join(name))
            .filter(|path| path.exists())
            .collect();
        if let Some(first) = existing.first() {
            bail!(
                "{} already exists ({} file(s) would be overwritten); use --force",
                first.display(),
                existing.len()
            );
        }
    }

    for (name, content) in builtin_templates() {
        let path = dir.join(name);
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "template exported");
    }
    Ok(builtin_templates().len())
}
