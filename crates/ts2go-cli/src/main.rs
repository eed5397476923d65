//! ts2go command-line interface
//!
//! Generates Go type declarations from TypeScript declaration files and
//! manages the template set used to render them.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Generate Go types from TypeScript type declarations
#[derive(Debug, Parser)]
#[command(name = "ts2go", author, version, about, styles = output::clap_styles())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate Go source from a TypeScript declaration file
    Generate(GenerateArgs),
    /// List or export the built-in templates
    #[command(subcommand)]
    Templates(TemplateCommands),
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// TypeScript source file, or `-` to read stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathOrStdin,

    /// Write generated Go to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Go package name
    #[arg(short, long, env = "TS2GO_PACKAGE")]
    pub package: Option<String>,

    /// Omit the generated-code header and package clause
    #[arg(long)]
    pub skip_header: bool,

    /// Render optional fields as values instead of pointers
    #[arg(long)]
    pub skip_optional_pointer: bool,

    /// Directory of `*.tera` files overriding built-in templates by name
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum TemplateCommands {
    /// List built-in template names
    List,
    /// Write the built-in templates to a directory as a starting point for overrides
    Export {
        /// Destination directory (created if missing)
        dir: PathBuf,
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PathOrStdin {
    Stdin,
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(PathOrStdin::Stdin),
            _ => Ok(PathOrStdin::Path(PathBuf::from(s))),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ts2go=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli_config = cli_config::load_cli_config();

    match cli.command {
        Commands::Generate(args) => commands::generate::handle_generate(args, &cli_config),
        Commands::Templates(cmd) => commands::templates::handle_template_command(cmd),
    }
}
