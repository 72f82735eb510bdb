use serde::{Deserialize, Serialize};

/// Comment tokens for a language mode.
///
/// Hosts use this for comment toggling; the highlight tables carry their own comment patterns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// Line comment token, or `""` when the language has none.
    pub fn line_token(&self) -> &str {
        self.line.as_deref().unwrap_or_default()
    }

    /// Block comment start token, or `""` when the language has none.
    pub fn block_start_token(&self) -> &str {
        self.block_start.as_deref().unwrap_or_default()
    }

    /// Block comment end token, or `""` when the language has none.
    pub fn block_end_token(&self) -> &str {
        self.block_end.as_deref().unwrap_or_default()
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tokens_read_as_empty() {
        let html = CommentConfig::block("<!--", "-->");
        assert_eq!(html.line_token(), "");
        assert_eq!(html.block_start_token(), "<!--");
        assert!(!html.has_line());
        assert!(html.has_block());

        let empty = CommentConfig::default();
        assert!(!empty.has_block());
        assert_eq!(empty.block_end_token(), "");
    }
}
