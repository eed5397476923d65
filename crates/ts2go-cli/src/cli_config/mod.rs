//! Project defaults for the `generate` command, read from `.ts2go.toml`.
//!
//! Every setting here has a matching command-line flag; flags win.

pub(crate) mod loader;

pub(crate) use loader::{expand_path, load_cli_config};

use serde::Deserialize;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Go package name for generated files.
    pub package_name: Option<String>,

    #[serde(default)]
    pub skip_header: bool,

    #[serde(default)]
    pub skip_optional_pointer: bool,

    /// Template override directory; `~/` is expanded.
    pub template_dir: Option<String>,
}
