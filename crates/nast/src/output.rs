//! Per-file progress and diagnostics on stderr.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};
use nast_types::Warning;

/// Styled stderr reporter for the commands.
///
/// Write errors are ignored: a closed stderr must not abort a render.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    warn: Style,
    fail: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Unstyled status line such as the output directory.
    pub(crate) fn status(&self, label: &str, value: &dyn Display) {
        self.line(&format!("{} {value}", self.dim.apply_to(label)));
    }

    /// A dump rendered to `target`.
    pub(crate) fn rendered(&self, source: &Path, target: &Path) {
        self.line(&format!(
            "{} {} -> {}",
            self.ok.apply_to("rendered"),
            source.display(),
            target.display()
        ));
    }

    /// A non-fatal condition raised while processing `source`.
    pub(crate) fn warning(&self, source: &Path, warning: &Warning) {
        self.line(&format!(
            "{} {}: {warning}",
            self.warn.apply_to("warning"),
            source.display()
        ));
    }

    /// A dump that could not be processed.
    pub(crate) fn failed(&self, source: &Path, err: &dyn Display) {
        self.line(&format!(
            "{} {}: {err}",
            self.fail.apply_to("failed"),
            source.display()
        ));
    }

    /// Fatal command error.
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(&self.fail.apply_to(format!("Error: {err}")).to_string());
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}
