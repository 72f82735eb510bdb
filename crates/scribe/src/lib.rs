//! Scribe - syntax highlighting and heuristic linting for editor buffers
//!
//! # Overview
//!
//! `scribe` turns a text snapshot plus a language into two things a host editor can render:
//! styled runs covering every character, and positional diagnostics. It owns no buffer, no
//! theme and no thread; every call is a pure function of its inputs.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Analyzer (resolve + delegate)              │  ← scribe
//! ├──────────────────────┬──────────────────────┤
//! │  Highlighter         │  Linter              │  ← scribe-highlight / scribe-lint
//! │  (regex tables)      │  (line heuristics)   │
//! ├──────────────────────┴──────────────────────┤
//! │  Language Registry (modes, patterns)        │  ← scribe-lang
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use scribe::{Severity, StyleTag};
//!
//! let analysis = scribe::analyze("{\"a\": 1", "json").unwrap();
//! assert_eq!(analysis.diagnostics.len(), 1);
//! assert_eq!(analysis.diagnostics[0].severity, Severity::Error);
//! assert!(analysis.spans.iter().any(|s| s.style == StyleTag::Keyword));
//!
//! // Language keys may also be file extensions.
//! let spans = scribe::highlight("def f(): pass", "py").unwrap();
//! assert_eq!(spans[0].style, StyleTag::Keyword);
//! ```
//!
//! Colors are the host's business. Pass a [`StyleResolver`] to get them attached:
//!
//! ```rust
//! use scribe::{Analyzer, StyleTag};
//!
//! let analyzer = Analyzer::builtin();
//! let dark_mode = true;
//! let theme = |tag: StyleTag| match (tag, dark_mode) {
//!     (StyleTag::Comment, true) => "#6a9955",
//!     (StyleTag::Comment, false) => "#008000",
//!     _ => "#d4d4d4",
//! };
//! let spans = analyzer.highlight_themed("x = 1 # note", "python", &theme).unwrap();
//! assert_eq!(spans.last().unwrap().style, "#6a9955");
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;

pub use analyzer::{Analysis, Analyzer};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;

pub use scribe_highlight::{
    HighlightError, Highlighter, OffsetEncoding, StyleResolver, StyledSpan, ThemedSpan,
};
pub use scribe_lang::{
    CommentConfig, HighlightPattern, LanguageDefinition, LanguageMode, LanguageModeBuilder,
    LanguageRegistry, RegistryBuilder, RegistryError, StyleTag,
};
pub use scribe_lint::{Diagnostic, LintFn, Linter, Severity, rules};

use std::sync::LazyLock;

static BUILTIN: LazyLock<Analyzer> = LazyLock::new(Analyzer::builtin);

/// The process-wide analyzer over the built-in languages.
pub fn builtin_analyzer() -> &'static Analyzer {
    &BUILTIN
}

/// Highlight and lint `text` as `language` (an id like `"swift"` or an extension like `"py"`).
pub fn analyze(text: &str, language: &str) -> Result<Analysis, AnalysisError> {
    BUILTIN.analyze(text, language)
}

/// Styled runs covering all of `text`.
pub fn highlight(text: &str, language: &str) -> Result<Vec<StyledSpan>, AnalysisError> {
    BUILTIN.highlight(text, language)
}

/// Diagnostics for `text`.
pub fn lint(text: &str, language: &str) -> Result<Vec<Diagnostic>, AnalysisError> {
    BUILTIN.lint(text, language)
}
