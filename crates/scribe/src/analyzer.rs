use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use scribe_highlight::{Highlighter, OffsetEncoding, StyleResolver, StyledSpan, ThemedSpan};
use scribe_lang::{LanguageMode, LanguageRegistry};
use scribe_lint::{Diagnostic, Linter, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Highlighting and lint output for one text snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Id of the language the text was analyzed as.
    pub language: String,
    /// Styled runs covering the whole text.
    pub spans: Vec<StyledSpan>,
    /// Lint findings after the config's severity filter and cap.
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// Highest severity among the diagnostics, if any.
    pub fn max_severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.severity).max()
    }

    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.max_severity() == Some(Severity::Error)
    }
}

/// Registry resolution plus highlight/lint delegation.
///
/// Every registered mode's highlight table is compiled once, up front. After construction the
/// analyzer is read-only, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    registry: Arc<LanguageRegistry>,
    highlighters: HashMap<String, Highlighter>,
    linter: Linter,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Analyzer over the built-in languages and heuristics with default settings.
    pub fn builtin() -> Self {
        Self::new(LanguageRegistry::builtin(), AnalyzerConfig::default())
    }

    /// Analyzer over `registry`, compiling every mode's highlight table now.
    pub fn new(registry: LanguageRegistry, config: AnalyzerConfig) -> Self {
        let highlighters = registry
            .iter()
            .map(|mode| {
                let highlighter = Highlighter::new(mode).with_encoding(config.offset_encoding);
                (mode.id().to_ascii_lowercase(), highlighter)
            })
            .collect();
        tracing::debug!(
            languages = registry.len(),
            encoding = ?config.offset_encoding,
            "analyzer built"
        );

        Self {
            registry: Arc::new(registry),
            highlighters,
            linter: Linter::builtin(),
            config,
        }
    }

    /// Analyzer over the built-in languages plus extra languages from YAML documents, each one a
    /// [`LanguageDefinition`](scribe_lang::LanguageDefinition).
    ///
    /// Fails if a document does not parse or reuses an id that is already registered.
    pub fn from_yaml_languages<I, S>(
        documents: I,
        config: AnalyzerConfig,
    ) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = LanguageRegistry::builder();
        builder.add_builtin()?;
        for document in documents {
            builder.add_yaml(document.as_ref())?;
        }
        Ok(Self::new(builder.build(), config))
    }

    /// Replace the lint dispatch table.
    pub fn with_linter(mut self, linter: Linter) -> Self {
        self.linter = linter;
        self
    }

    /// The languages this analyzer resolves.
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Settings applied to every call.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Resolve a language id (`"python"`) or file extension (`"py"`).
    pub fn resolve(&self, language: &str) -> Result<&LanguageMode, AnalysisError> {
        self.registry.lookup(language).ok_or_else(|| {
            tracing::debug!(language, "unresolved language");
            AnalysisError::UnknownLanguage(language.to_string())
        })
    }

    /// Styled runs covering all of `text`.
    pub fn highlight(&self, text: &str, language: &str) -> Result<Vec<StyledSpan>, AnalysisError> {
        let mode = self.resolve(language)?;
        Ok(self.highlight_mode(text, mode))
    }

    /// Styled runs with the host style resolved through `theme`.
    pub fn highlight_themed<R>(
        &self,
        text: &str,
        language: &str,
        theme: &R,
    ) -> Result<Vec<ThemedSpan<R::Style>>, AnalysisError>
    where
        R: StyleResolver + ?Sized,
    {
        let mode = self.resolve(language)?;
        let spans = self.highlight_mode(text, mode);
        Ok(spans.iter().map(|span| span.themed(theme)).collect())
    }

    /// Diagnostics for `text`, filtered and re-encoded per the analyzer's config.
    pub fn lint(&self, text: &str, language: &str) -> Result<Vec<Diagnostic>, AnalysisError> {
        let mode = self.resolve(language)?;
        Ok(self.lint_mode(text, mode))
    }

    /// Both outputs in one call.
    pub fn analyze(&self, text: &str, language: &str) -> Result<Analysis, AnalysisError> {
        let mode = self.resolve(language)?;
        Ok(Analysis {
            language: mode.id().to_string(),
            spans: self.highlight_mode(text, mode),
            diagnostics: self.lint_mode(text, mode),
        })
    }

    fn highlight_mode(&self, text: &str, mode: &LanguageMode) -> Vec<StyledSpan> {
        match self.highlighters.get(&mode.id().to_ascii_lowercase()) {
            Some(highlighter) => highlighter.highlight(text),
            None => Highlighter::new(mode)
                .with_encoding(self.config.offset_encoding)
                .highlight(text),
        }
    }

    fn lint_mode(&self, text: &str, mode: &LanguageMode) -> Vec<Diagnostic> {
        let mut diagnostics = self.linter.lint(text, mode);
        diagnostics.retain(|d| d.severity >= self.config.min_severity);
        if let Some(max) = self.config.max_diagnostics {
            diagnostics.truncate(max);
        }
        if self.config.offset_encoding != OffsetEncoding::Char && !diagnostics.is_empty() {
            let lines: Vec<&str> = text.lines().collect();
            for diagnostic in &mut diagnostics {
                let line = lines
                    .get(diagnostic.line.saturating_sub(1))
                    .copied()
                    .unwrap_or_default();
                diagnostic.column = self.config.offset_encoding.column(line, diagnostic.column);
            }
        }
        diagnostics
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::builtin()
    }
}
