use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic role assigned to a run of characters.
///
/// These are only identifiers. The host's theme layer maps them to actual colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum StyleTag {
    /// Text not covered by any highlight pattern.
    #[default]
    Default,
    /// Line and block comments.
    Comment,
    /// String and character literals.
    String,
    /// Language keywords, markup tags, mapping keys.
    Keyword,
    /// Literal constants (`true`, `nil`, entities, colors).
    Constant,
    /// Type names, attributes, variables.
    Type,
    /// Numeric literals.
    Number,
}

impl StyleTag {
    /// Every tag, in declaration order.
    pub const ALL: [StyleTag; 7] = [
        StyleTag::Default,
        StyleTag::Comment,
        StyleTag::String,
        StyleTag::Keyword,
        StyleTag::Constant,
        StyleTag::Type,
        StyleTag::Number,
    ];

    /// Stable lowercase name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Default => "default",
            StyleTag::Comment => "comment",
            StyleTag::String => "string",
            StyleTag::Keyword => "keyword",
            StyleTag::Constant => "constant",
            StyleTag::Type => "type",
            StyleTag::Number => "number",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
