use super::{content_column, leading_spaces, starts_with_word};
use crate::diagnostic::Diagnostic;
use crate::rules;

const INDENT_WIDTH: usize = 4;

/// Swift heuristics: 4-space indentation, `let` without `=`, and trailing `;`.
pub fn check(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        let spaces = leading_spaces(line);
        if spaces > 0 && spaces % INDENT_WIDTH != 0 {
            diagnostics.push(Diagnostic::warning(
                line_no,
                1,
                rules::INDENTATION,
                format!("Indentation of {spaces} spaces is not a multiple of {INDENT_WIDTH}"),
            ));
        }

        let trimmed = line.trim();
        if starts_with_word(trimmed, "let") && !line.contains('=') {
            diagnostics.push(Diagnostic::warning(
                line_no,
                content_column(line),
                rules::UNINITIALIZED_DECLARATION,
                "Constant declared without an initial value",
            ));
        }

        if trimmed.ends_with(';') && !trimmed.starts_with("//") {
            diagnostics.push(Diagnostic::hint(
                line_no,
                line.trim_end().chars().count(),
                rules::REDUNDANT_SEMICOLON,
                "Semicolon is not needed at the end of a statement",
            ));
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indentation_not_multiple_of_four() {
        let diagnostics = check("func f() {\n   x = 1\n}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(diagnostics[0].column, 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].rule, rules::INDENTATION);
    }

    #[test]
    fn test_clean_code_has_no_diagnostics() {
        let text = "struct Card {\n    let title: String = \"\"\n    var done = false\n}\n";
        assert!(check(text).is_empty());
    }

    #[test]
    fn test_let_without_initializer() {
        let diagnostics = check("    let title: String\nlet ok = 1\nletter()");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::warning(
                1,
                5,
                rules::UNINITIALIZED_DECLARATION,
                "Constant declared without an initial value",
            )]
        );
    }

    #[test]
    fn test_trailing_semicolon() {
        let diagnostics = check("print(x);  \n// old;\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, rules::REDUNDANT_SEMICOLON);
        assert_eq!(diagnostics[0].severity, Severity::Hint);
        assert_eq!((diagnostics[0].line, diagnostics[0].column), (1, 9));
    }

    #[test]
    fn test_rules_accumulate_on_one_line() {
        let diagnostics = check("  let x;");
        let ids: Vec<&str> = diagnostics.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                rules::INDENTATION,
                rules::UNINITIALIZED_DECLARATION,
                rules::REDUNDANT_SEMICOLON
            ]
        );
    }
}
