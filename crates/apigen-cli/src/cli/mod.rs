//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{DEFAULT_CONFIG_FILE, GlobalArgs};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "apigen",
    bin_name = "apigen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Swagger API specifications from annotated sources",
    long_about = "apigen scans resource descriptors for each configured API \
                  source, assembles a Swagger 2.0 document per bundle and \
                  optionally renders human-readable documentation from a template.",
    after_help = "EXAMPLES:\n\
        \x20 apigen init\n\
        \x20 apigen validate\n\
        \x20 apigen generate -c build/apigen.yaml -v\n\
        \x20 apigen completions bash > /usr/share/bash-completion/completions/apigen",
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
    /// Run every configured API source through the generation pipeline.
    #[command(
        visible_alias = "gen",
        about = "Generate API specifications",
        after_help = "EXAMPLES:\n\
            \x20 apigen generate\n\
            \x20 apigen generate --config api/apigen.toml\n\
            \x20 APIGEN_RUNTIME__SOURCE_ROOT=src/main apigen generate"
    )]
    Generate,

    /// Check the configuration without scanning or writing anything.
    #[command(
        visible_alias = "check",
        about = "Validate the configuration",
        after_help = "EXAMPLES:\n\
            \x20 apigen validate\n\
            \x20 apigen validate -c ci/apigen.yaml"
    )]
    Validate,

    /// Write a starter run configuration.
    #[command(
        about = "Create a starter configuration file",
        after_help = "EXAMPLES:\n\
            \x20 apigen init            # writes ./apigen.yaml\n\
            \x20 apigen init -c api.yaml\n\
            \x20 apigen init --force    # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 apigen completions bash > ~/.local/share/bash-completion/completions/apigen\n\
            \x20 apigen completions zsh  > ~/.zfunc/_apigen\n\
            \x20 apigen completions fish > ~/.config/fish/completions/apigen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `apigen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `apigen completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
