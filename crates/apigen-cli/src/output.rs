//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use apigen_core::application::{BundleReport, RunSummary};
use apigen_core::domain::{Bundle, StrategySelector};

use crate::cli::GlobalArgs;

/// Writes user-facing progress to stdout.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.color_disabled() || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// One block per generated bundle, then a total.
    pub fn run_summary(&self, summary: &RunSummary) -> io::Result<()> {
        for report in &summary.bundles {
            self.success(&bundle_line(report))?;
            for path in &report.spec_paths {
                self.print(&format!("    {}", path.display()))?;
            }
            if let (true, Some(docs)) = (report.rendered, report.output_path.as_ref()) {
                self.print(&format!("    {} (docs)", docs.display()))?;
            }
        }
        self.header(&format!(
            "Generated {} API specification{}",
            summary.bundles.len(),
            plural(summary.bundles.len())
        ))
    }

    /// One line per valid bundle, then a total.
    pub fn validated(&self, bundles: &[Bundle]) -> io::Result<()> {
        for bundle in bundles {
            self.success(&format!(
                "{} {} [{}] {} location{}",
                bundle.title(),
                bundle.info().version,
                StrategySelector::select(bundle),
                bundle.locations().len(),
                plural(bundle.locations().len())
            ))?;
        }
        self.header(&format!(
            "{} API source{} valid",
            bundles.len(),
            if bundles.len() == 1 { " is" } else { "s are" }
        ))
    }
}

fn bundle_line(report: &BundleReport) -> String {
    format!(
        "{} {} [{}] base path {}",
        report.title, report.version, report.strategy, report.base_path
    )
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_core::domain::StrategyKind;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
        };
        OutputManager::new(&args)
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn bundle_line_names_strategy_and_base_path() {
        let report = BundleReport {
            title: "Petstore".into(),
            version: "1.0.0".into(),
            strategy: StrategyKind::FrameworkAware,
            base_path: "/v1".into(),
            rendered: false,
            output_path: None,
            spec_paths: Vec::new(),
        };
        let line = bundle_line(&report);
        assert!(line.starts_with("Petstore 1.0.0 ["));
        assert!(line.ends_with("base path /v1"));
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(0), "s");
        assert_eq!(plural(3), "s");
    }
}
