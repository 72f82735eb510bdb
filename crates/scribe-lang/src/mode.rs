use crate::comment::CommentConfig;
use crate::style::StyleTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single regex highlighting rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightPattern {
    /// Regular expression source. Compiled multi-line: `^`/`$` match at line boundaries.
    pub regex: String,
    /// Role assigned to the matched range.
    pub style: StyleTag,
    /// Style only this capture group of each match instead of the whole match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

impl HighlightPattern {
    /// Create a rule that styles every whole match.
    pub fn new(regex: impl Into<String>, style: StyleTag) -> Self {
        Self {
            regex: regex.into(),
            style,
            group: None,
        }
    }

    /// Highlight only a capture group of each match.
    ///
    /// Example (JSON key):
    /// - pattern: `("(?:\\.|[^"\\])*")\s*:`
    /// - group: `1` (the quoted key, without the colon)
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.group = Some(group);
        self
    }
}

/// Static descriptor of a supported language.
///
/// Modes are immutable once built. The highlight table is ordered: when two patterns cover the
/// same character, the one declared later wins. If the mode has keywords, the generated keyword
/// pattern always occupies slot 0 of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMode {
    id: String,
    display_name: String,
    extensions: Vec<String>,
    comments: CommentConfig,
    keywords: BTreeSet<String>,
    patterns: Vec<HighlightPattern>,
    linter: Option<String>,
    lint_rules: Vec<String>,
}

impl LanguageMode {
    /// Start building a mode with a stable `id` (e.g. `"python"`) and a display name.
    pub fn builder(id: impl Into<String>, display_name: impl Into<String>) -> LanguageModeBuilder {
        LanguageModeBuilder {
            id: id.into(),
            display_name: display_name.into(),
            extensions: Vec::new(),
            comments: CommentConfig::default(),
            keywords: BTreeSet::new(),
            patterns: Vec::new(),
            linter: None,
            lint_rules: Vec::new(),
        }
    }

    /// Stable identifier (e.g. `"swift"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name (e.g. `"Swift"`).
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Lowercase file extensions without the leading dot, in detection order.
    pub fn file_extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Comment tokens.
    pub fn comments(&self) -> &CommentConfig {
        &self.comments
    }

    /// Line comment token, `""` if none.
    pub fn line_comment_token(&self) -> &str {
        self.comments.line_token()
    }

    /// Block comment start token, `""` if none.
    pub fn block_comment_start(&self) -> &str {
        self.comments.block_start_token()
    }

    /// Block comment end token, `""` if none.
    pub fn block_comment_end(&self) -> &str {
        self.comments.block_end_token()
    }

    /// Reserved words, highlighted by the generated pattern in slot 0.
    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    /// The ordered highlight table.
    pub fn patterns(&self) -> &[HighlightPattern] {
        &self.patterns
    }

    /// Key of the heuristic set the linter runs for this mode. Defaults to [`id`](Self::id).
    pub fn lint_key(&self) -> &str {
        self.linter.as_deref().unwrap_or(&self.id)
    }

    /// Rule identifiers this mode reports. Empty means every rule of its lint profile.
    pub fn lint_rules(&self) -> &[String] {
        &self.lint_rules
    }

    /// Whether diagnostics produced by `rule` should be reported for this mode.
    pub fn reports_rule(&self, rule: &str) -> bool {
        self.lint_rules.is_empty() || self.lint_rules.iter().any(|r| r == rule)
    }

    /// Whether `extension` (with or without a leading dot) belongs to this mode, ignoring case.
    pub fn matches_extension(&self, extension: &str) -> bool {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

/// Builder for [`LanguageMode`].
#[derive(Debug, Clone)]
pub struct LanguageModeBuilder {
    id: String,
    display_name: String,
    extensions: Vec<String>,
    comments: CommentConfig,
    keywords: BTreeSet<String>,
    patterns: Vec<HighlightPattern>,
    linter: Option<String>,
    lint_rules: Vec<String>,
}

impl LanguageModeBuilder {
    /// Add file extensions. The leading dot is optional; duplicates are dropped.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = ext.as_ref();
            let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
            if !ext.is_empty() && !self.extensions.contains(&ext) {
                self.extensions.push(ext);
            }
        }
        self
    }

    /// Set the comment tokens.
    pub fn comments(mut self, comments: CommentConfig) -> Self {
        self.comments = comments;
        self
    }

    /// Add reserved words. Empty strings are ignored.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(
            keywords
                .into_iter()
                .map(|k| k.into())
                .filter(|k: &String| !k.is_empty()),
        );
        self
    }

    /// Append a pattern to the highlight table.
    pub fn pattern(mut self, pattern: HighlightPattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Shorthand for `pattern(HighlightPattern::new(regex, style))`.
    pub fn rule(self, regex: impl Into<String>, style: StyleTag) -> Self {
        self.pattern(HighlightPattern::new(regex, style))
    }

    /// Lint with another language's heuristics (e.g. TypeScript uses `"javascript"`).
    pub fn linter(mut self, key: impl Into<String>) -> Self {
        self.linter = Some(key.into());
        self
    }

    /// Restrict reported diagnostics to these rule ids.
    pub fn lint_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lint_rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Finish the mode, placing the keyword pattern (if any) ahead of the other patterns.
    pub fn build(self) -> LanguageMode {
        let mut patterns = Vec::with_capacity(self.patterns.len() + 1);
        if !self.keywords.is_empty() {
            patterns.push(HighlightPattern::new(
                keyword_regex(&self.keywords),
                StyleTag::Keyword,
            ));
        }
        patterns.extend(self.patterns);

        LanguageMode {
            id: self.id,
            display_name: self.display_name,
            extensions: self.extensions,
            comments: self.comments,
            keywords: self.keywords,
            patterns,
            linter: self.linter,
            lint_rules: self.lint_rules,
        }
    }
}

fn keyword_regex(keywords: &BTreeSet<String>) -> String {
    let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

/// A language mode as written in a YAML definition file.
///
/// ```yaml
/// id: toml
/// name: TOML
/// extensions: [toml]
/// comments: { line: "#" }
/// keywords: []
/// patterns:
///   - { regex: '^\s*\[[^\]]+\]', style: type }
///   - { regex: '"(?:\\.|[^"\\])*"', style: string }
///   - { regex: '#.*$', style: comment }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageDefinition {
    /// Stable identifier.
    pub id: String,
    /// Display name; the id when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// File extensions, with or without the leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Comment tokens.
    #[serde(default)]
    pub comments: CommentConfig,
    /// Reserved words.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Highlight table, in precedence order.
    #[serde(default)]
    pub patterns: Vec<HighlightPattern>,
    /// Lint profile to borrow (e.g. `json`).
    #[serde(default)]
    pub linter: Option<String>,
    /// Rule ids to report; all when empty.
    #[serde(default)]
    pub lint_rules: Vec<String>,
}

impl From<LanguageDefinition> for LanguageMode {
    fn from(def: LanguageDefinition) -> Self {
        let name = def.name.unwrap_or_else(|| def.id.clone());
        let mut builder = LanguageMode::builder(def.id, name)
            .extensions(def.extensions)
            .comments(def.comments)
            .keywords(def.keywords)
            .lint_rules(def.lint_rules);
        if let Some(linter) = def.linter {
            builder = builder.linter(linter);
        }
        for pattern in def.patterns {
            builder = builder.pattern(pattern);
        }
        builder.build()
    }
}
