//! Stable rule identifiers carried in [`Diagnostic::rule`](crate::Diagnostic::rule).

/// Leading-space run is not a multiple of the language's indent width.
pub const INDENTATION: &str = "indentation";
/// Line ends with a space or tab.
pub const TRAILING_WHITESPACE: &str = "trailing_whitespace";
/// Line contains both tabs and spaces.
pub const MIXED_TABS_SPACES: &str = "mixed_tabs_spaces";
/// `let` binding without an initializer.
pub const UNINITIALIZED_DECLARATION: &str = "uninitialized_declaration";
/// Statement ends with an unnecessary `;`.
pub const REDUNDANT_SEMICOLON: &str = "redundant_semicolon";
/// Variable declaration line without a terminator.
pub const MISSING_SEMICOLON: &str = "missing_semicolon";
/// `<` with no `>` on the same line.
pub const UNCLOSED_TAG: &str = "unclosed_tag";
/// `>` with no `<` on the same line.
pub const UNOPENED_TAG: &str = "unopened_tag";
/// `}` with no open brace.
pub const UNEXPECTED_CLOSING_BRACE: &str = "unexpected_closing_brace";
/// `]` with no open bracket.
pub const UNEXPECTED_CLOSING_BRACKET: &str = "unexpected_closing_bracket";
/// Braces still open at the end of the document.
pub const UNCLOSED_BRACE: &str = "unclosed_brace";
/// Brackets still open at the end of the document.
pub const UNCLOSED_BRACKET: &str = "unclosed_bracket";
/// JSON failed to parse and no brace/bracket imbalance explains it.
pub const JSON_SYNTAX: &str = "json_syntax";
