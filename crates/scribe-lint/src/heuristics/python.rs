use super::leading_spaces;
use crate::diagnostic::Diagnostic;
use crate::rules;

const INDENT_WIDTH: usize = 4;

/// Python heuristics: mixed tabs/spaces, 4-space indentation, trailing whitespace.
pub fn check(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let has_tab = line.contains('\t');

        if has_tab && line.contains(' ') {
            diagnostics.push(Diagnostic::error(
                line_no,
                1,
                rules::MIXED_TABS_SPACES,
                "Line mixes tabs and spaces",
            ));
        }

        let spaces = leading_spaces(line);
        if spaces > 0 && spaces % INDENT_WIDTH != 0 && !has_tab {
            diagnostics.push(Diagnostic::warning(
                line_no,
                1,
                rules::INDENTATION,
                format!("Indentation of {spaces} spaces is not a multiple of {INDENT_WIDTH}"),
            ));
        }

        if line.ends_with([' ', '\t']) {
            diagnostics.push(Diagnostic::hint(
                line_no,
                line.trim_end_matches([' ', '\t']).chars().count() + 1,
                rules::TRAILING_WHITESPACE,
                "Trailing whitespace",
            ));
        }
    }

    diagnostics
}
