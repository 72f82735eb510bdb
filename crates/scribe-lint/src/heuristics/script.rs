use super::{contains_word, leading_spaces};
use crate::diagnostic::Diagnostic;
use crate::rules;

const BINDING_KEYWORDS: [&str; 3] = ["let", "const", "var"];
const TERMINATORS: [&str; 7] = [";", "{", "}", ")", "]", "*/", "//"];

/// JavaScript/TypeScript heuristics: unterminated declarations and odd indentation.
///
/// A line declares a binding when `let`, `const` or `var` appears in it as a whole word, so
/// `export const x = 1` counts as well as `const x = 1`.
pub fn check(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        let declares = BINDING_KEYWORDS.iter().any(|kw| contains_word(trimmed, kw));
        if declares && !TERMINATORS.iter().any(|t| trimmed.ends_with(t)) {
            diagnostics.push(Diagnostic::hint(
                line_no,
                line.trim_end().chars().count() + 1,
                rules::MISSING_SEMICOLON,
                "Missing semicolon",
            ));
        }

        let spaces = leading_spaces(line);
        if spaces > 0 && spaces % 2 != 0 && spaces % 4 != 0 {
            diagnostics.push(Diagnostic::warning(
                line_no,
                1,
                rules::INDENTATION,
                format!("Indentation of {spaces} spaces is not a multiple of 2 or 4"),
            ));
        }
    }

    diagnostics
}
