//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::Args;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Default run configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "apigen.yaml";

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (bundle progress)
    -vv     - Debug level (pipeline stages)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// A non-empty `NO_COLOR` in the environment has the same effect
    /// (see <https://no-color.org>); use [`GlobalArgs::color_disabled`].
    #[arg(long = "no-color", global = true, help = "Disable colored output")]
    pub no_color: bool,

    /// Run configuration file (YAML, TOML or JSON).
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Run configuration file [default: apigen.yaml]"
    )]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// `--no-color` or any non-empty `NO_COLOR` value.
    pub fn color_disabled(&self) -> bool {
        color_disabled_by(self.no_color, std::env::var_os("NO_COLOR").as_deref())
    }

    /// The configuration file in effect and whether the user named it.
    pub fn config_file(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }
}

fn color_disabled_by(flag: bool, env: Option<&OsStr>) -> bool {
    flag || env.is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_no_color_value_disables_colour() {
        assert!(color_disabled_by(false, Some(OsStr::new("1"))));
        assert!(color_disabled_by(false, Some(OsStr::new("true"))));
        assert!(color_disabled_by(false, Some(OsStr::new("yes"))));
    }

    #[test]
    fn empty_or_unset_no_color_keeps_colour() {
        assert!(!color_disabled_by(false, None));
        assert!(!color_disabled_by(false, Some(OsStr::new(""))));
    }

    #[test]
    fn flag_wins_regardless_of_environment() {
        assert!(color_disabled_by(true, None));
    }
}
