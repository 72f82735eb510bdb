//! `scribe-highlight` - regex-table highlighting for scribe [`LanguageMode`]s.
//!
//! Patterns run over the whole text in table order. Each match overwrites the tag of the
//! characters it covers, so later patterns win on overlap. Characters no pattern touched are
//! tagged [`StyleTag::Default`]. The result is a gap-free, non-overlapping run list covering
//! the entire text.
//!
//! This is *not* a parser. It is meant for quick, good-enough coloring of editor buffers.

#![warn(missing_docs)]

mod offset;
mod resolver;

pub use offset::OffsetEncoding;
pub use resolver::StyleResolver;
pub use scribe_lang::StyleTag;

use regex::{Regex, RegexBuilder};
use scribe_lang::{HighlightPattern, LanguageMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contiguous run of characters sharing one [`StyleTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSpan {
    /// Start offset, in the highlighter's [`OffsetEncoding`].
    pub start: usize,
    /// Run length, in the same unit as `start`.
    pub length: usize,
    /// Role shared by every character of the run.
    pub style: StyleTag,
}

impl StyledSpan {
    /// Create a run of `length` units starting at `start`.
    pub fn new(start: usize, length: usize, style: StyleTag) -> Self {
        Self {
            start,
            length,
            style,
        }
    }

    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// This run with `resolver`'s host style attached.
    pub fn themed<R>(&self, resolver: &R) -> ThemedSpan<R::Style>
    where
        R: StyleResolver + ?Sized,
    {
        ThemedSpan {
            start: self.start,
            length: self.length,
            tag: self.style,
            style: resolver.resolve(self.style),
        }
    }
}

/// A [`StyledSpan`] with the host style resolved for its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedSpan<S> {
    /// Start offset, as in [`StyledSpan::start`].
    pub start: usize,
    /// Run length, as in [`StyledSpan::length`].
    pub length: usize,
    /// The semantic tag the style was resolved from.
    pub tag: StyleTag,
    /// Host style for `tag`.
    pub style: S,
}

#[derive(Debug, Error)]
/// Errors reported by [`Highlighter::compile_strict`].
pub enum HighlightError {
    #[error("regex compile error in '{language}' for pattern '{pattern}': {source}")]
    /// A pattern failed to compile.
    RegexCompile {
        /// Id of the mode owning the pattern.
        language: String,
        /// Regex source as written in the table.
        pattern: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },

    #[error("pattern '{pattern}' in '{language}' has no capture group {group}")]
    /// A pattern styles a capture group its regex does not define.
    InvalidCaptureGroup {
        /// Id of the mode owning the pattern.
        language: String,
        /// Regex source as written in the table.
        pattern: String,
        /// Requested group index.
        group: usize,
    },
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    regex: Regex,
    style: StyleTag,
    group: Option<usize>,
}

/// The compiled highlight table of one [`LanguageMode`].
///
/// Compile once per mode and reuse: `highlight` takes `&self` and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Highlighter {
    language: String,
    patterns: Vec<CompiledPattern>,
    skipped: usize,
    encoding: OffsetEncoding,
}

impl Highlighter {
    /// Compile `mode`'s table. Patterns that fail to compile are logged and skipped.
    pub fn new(mode: &LanguageMode) -> Self {
        let mut patterns = Vec::with_capacity(mode.patterns().len());
        let mut skipped = 0;
        for pattern in mode.patterns() {
            match compile_pattern(mode.id(), pattern) {
                Ok(compiled) => patterns.push(compiled),
                Err(err) => {
                    tracing::warn!(
                        language = mode.id(),
                        pattern = %pattern.regex,
                        error = %err,
                        "skipping highlight pattern"
                    );
                    skipped += 1;
                }
            }
        }

        Self {
            language: mode.id().to_string(),
            patterns,
            skipped,
            encoding: OffsetEncoding::default(),
        }
    }

    /// Compile `mode`'s table, failing on the first pattern that does not compile.
    ///
    /// Useful for validating user-supplied language definitions up front.
    pub fn compile_strict(mode: &LanguageMode) -> Result<Self, HighlightError> {
        let patterns = mode
            .patterns()
            .iter()
            .map(|p| compile_pattern(mode.id(), p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            language: mode.id().to_string(),
            patterns,
            skipped: 0,
            encoding: OffsetEncoding::default(),
        })
    }

    /// Report offsets in `encoding` instead of `char`s.
    pub fn with_encoding(mut self, encoding: OffsetEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Unit of the reported offsets.
    pub fn encoding(&self) -> OffsetEncoding {
        self.encoding
    }

    /// Id of the mode this table was compiled from.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of usable patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of patterns dropped because they failed to compile.
    pub fn skipped_patterns(&self) -> usize {
        self.skipped
    }

    /// Run the table over `text` and return runs covering all of it.
    pub fn highlight(&self, text: &str) -> Vec<StyledSpan> {
        if text.is_empty() {
            return Vec::new();
        }

        // One tag per byte; regex matches always start and end on char boundaries.
        let mut tags = vec![StyleTag::Default; text.len()];

        for pattern in &self.patterns {
            if let Some(group) = pattern.group {
                for caps in pattern.regex.captures_iter(text) {
                    if let Some(m) = caps.get(group) {
                        tags[m.start()..m.end()].fill(pattern.style);
                    }
                }
            } else {
                for m in pattern.regex.find_iter(text) {
                    tags[m.start()..m.end()].fill(pattern.style);
                }
            }
        }

        runs_from_tags(text, &tags, self.encoding)
    }

    /// Like [`highlight`](Self::highlight), with each run's host style attached.
    pub fn highlight_themed<R>(&self, text: &str, resolver: &R) -> Vec<ThemedSpan<R::Style>>
    where
        R: StyleResolver + ?Sized,
    {
        self.highlight(text)
            .iter()
            .map(|span| span.themed(resolver))
            .collect()
    }
}

/// Compile `mode` and highlight `text` in one go.
///
/// Hosts highlighting repeatedly should keep a [`Highlighter`] around instead.
pub fn highlight(text: &str, mode: &LanguageMode) -> Vec<StyledSpan> {
    Highlighter::new(mode).highlight(text)
}

/// Compile `mode` and highlight `text`, resolving styles through `theme`.
pub fn highlight_with_theme<R>(
    text: &str,
    mode: &LanguageMode,
    theme: &R,
) -> Vec<ThemedSpan<R::Style>>
where
    R: StyleResolver + ?Sized,
{
    Highlighter::new(mode).highlight_themed(text, theme)
}

fn compile_pattern(
    language: &str,
    pattern: &HighlightPattern,
) -> Result<CompiledPattern, HighlightError> {
    let regex = RegexBuilder::new(&pattern.regex)
        .multi_line(true)
        .build()
        .map_err(|source| HighlightError::RegexCompile {
            language: language.to_string(),
            pattern: pattern.regex.clone(),
            source,
        })?;

    if let Some(group) = pattern.group
        && group >= regex.captures_len()
    {
        return Err(HighlightError::InvalidCaptureGroup {
            language: language.to_string(),
            pattern: pattern.regex.clone(),
            group,
        });
    }

    Ok(CompiledPattern {
        regex,
        style: pattern.style,
        group: pattern.group,
    })
}

fn runs_from_tags(text: &str, tags: &[StyleTag], encoding: OffsetEncoding) -> Vec<StyledSpan> {
    let mut spans: Vec<StyledSpan> = Vec::new();
    let mut offset = 0usize;

    for (byte, ch) in text.char_indices() {
        let style = tags[byte];
        let width = encoding.width(ch);
        match spans.last_mut() {
            Some(last) if last.style == style => last.length += width,
            _ => spans.push(StyledSpan::new(offset, width, style)),
        }
        offset += width;
    }

    spans
}
