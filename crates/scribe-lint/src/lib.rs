//! `scribe-lint` - lightweight, line-oriented linting for scribe language modes.
//!
//! Each language maps to a fixed heuristic function through a dispatch table keyed by the
//! mode's [`lint_key`](LanguageMode::lint_key). Languages without an entry lint clean. The whole
//! text is re-checked on every call; nothing is cached between calls.

#![warn(missing_docs)]

mod diagnostic;
pub mod heuristics;
pub mod rules;

pub use diagnostic::{Diagnostic, Severity};

use scribe_lang::LanguageMode;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A heuristic check over a whole text snapshot.
pub type LintFn = fn(&str) -> Vec<Diagnostic>;

static BUILTIN: LazyLock<Linter> = LazyLock::new(Linter::builtin);

/// The process-wide linter with the built-in heuristics.
pub fn builtin_linter() -> &'static Linter {
    &BUILTIN
}

/// Lint `text` as `mode` with the built-in heuristics.
pub fn lint(text: &str, mode: &LanguageMode) -> Vec<Diagnostic> {
    BUILTIN.lint(text, mode)
}

/// Dispatch table from lint key to heuristic function.
#[derive(Clone, Default)]
pub struct Linter {
    table: HashMap<String, LintFn>,
}

impl Linter {
    /// A linter with no heuristics; every language lints clean.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A linter with the built-in heuristics.
    ///
    /// | key | languages |
    /// |---|---|
    /// | `swift` | swift |
    /// | `python` | python |
    /// | `javascript` | javascript, typescript |
    /// | `json` | json |
    /// | `markup` | html, xml |
    pub fn builtin() -> Self {
        let mut linter = Self::empty();
        linter.register("swift", heuristics::swift::check);
        linter.register("python", heuristics::python::check);
        linter.register("javascript", heuristics::script::check);
        linter.register("json", heuristics::json::check);
        linter.register("markup", heuristics::markup::check);
        linter
    }

    /// Register (or replace) the heuristic for `key`. Returns the previous one, if any.
    pub fn register(&mut self, key: impl Into<String>, check: LintFn) -> Option<LintFn> {
        self.table.insert(key.into(), check)
    }

    /// Whether a heuristic is registered for `mode`.
    pub fn supports(&self, mode: &LanguageMode) -> bool {
        self.table.contains_key(mode.lint_key())
    }

    /// Run `mode`'s heuristic over `text`, keeping only the rules `mode` reports.
    pub fn lint(&self, text: &str, mode: &LanguageMode) -> Vec<Diagnostic> {
        if text.is_empty() {
            return Vec::new();
        }
        let Some(check) = self.table.get(mode.lint_key()) else {
            tracing::trace!(language = mode.id(), "no lint heuristic");
            return Vec::new();
        };

        let mut diagnostics = check(text);
        diagnostics.retain(|d| mode.reports_rule(&d.rule));
        diagnostics
    }
}

impl fmt::Debug for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.table.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Linter").field("keys", &keys).finish()
    }
}
