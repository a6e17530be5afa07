//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mfgen",
    bin_name = "mfgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Micro-frontend workspace scaffolding",
    long_about = "mfgen generates a module-federation workspace: a host \
                  application plus any number of microfrontends, wired \
                  together and ready to run.",
    after_help = "EXAMPLES:\n\
        \x20 mfgen create shop --port 3000 --remote cart:3001 --remote catalog:3002\n\
        \x20 mfgen create solo --yes --skip-install\n\
        \x20 mfgen create shop --dry-run --remote cart:3001\n\
        \x20 mfgen completions bash > /usr/share/bash-completion/completions/mfgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new micro-frontend workspace.
    #[command(
        visible_alias = "c",
        about = "Create a new micro-frontend workspace",
        after_help = "EXAMPLES:\n\
            \x20 mfgen create shop --port 3000 --remote cart:3001\n\
            \x20 mfgen create shop --remote cart:3001 --remote catalog:3002 --yes\n\
            \x20 mfgen create solo            # host only, no remotes"
    )]
    Create(CreateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mfgen completions bash > ~/.local/share/bash-completion/completions/mfgen\n\
            \x20 mfgen completions zsh  > ~/.zfunc/_mfgen\n\
            \x20 mfgen completions fish > ~/.config/fish/completions/mfgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the mfgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mfgen config get defaults.host_port\n\
            \x20 mfgen config list\n\
            \x20 mfgen config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `mfgen create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Name of the workspace (also the host application's name).
    #[arg(value_name = "NAME", help = "Workspace / host application name")]
    pub name: String,

    /// Dev-server port for the host application.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Host dev-server port (default from config, usually 3000)"
    )]
    pub port: Option<u16>,

    /// Microfrontend declaration, repeatable.
    #[arg(
        short = 'r',
        long = "remote",
        value_name = "NAME:PORT",
        help = "Add a microfrontend (e.g. cart:3001); repeatable"
    )]
    pub remotes: Vec<RemoteSpec>,

    /// Output directory that will contain the workspace.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub out: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the `npm install` step after generation.
    #[arg(long = "skip-install", help = "Do not run npm install after generation")]
    pub skip_install: bool,
}

/// A `name:port` microfrontend declaration from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    pub name: String,
    pub port: u16,
}

impl FromStr for RemoteSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, port) = s
            .split_once(':')
            .ok_or_else(|| format!("expected NAME:PORT, got '{s}'"))?;
        if name.is_empty() {
            return Err(format!("missing name in '{s}'"));
        }
        let port: u16 = port
            .parse()
            .map_err(|_| format!("invalid port in '{s}': '{port}'"))?;
        Ok(Self {
            name: name.to_string(),
            port,
        })
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mfgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mfgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.host_port`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
