use super::char_column;
use crate::diagnostic::Diagnostic;
use crate::rules;

/// HTML/XML heuristic: a `<` with no `>` on the same line, or the reverse.
///
/// Tags split across lines are reported too; this is a single-line check, not a tag matcher.
pub fn check(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match (line.find('<'), line.find('>')) {
            (Some(open), None) => diagnostics.push(Diagnostic::error(
                line_no,
                char_column(line, open),
                rules::UNCLOSED_TAG,
                "Tag opened with '<' is not closed on this line",
            )),
            (None, Some(close)) => diagnostics.push(Diagnostic::error(
                line_no,
                char_column(line, close),
                rules::UNOPENED_TAG,
                "'>' has no matching '<' on this line",
            )),
            _ => {}
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
    fn test_well_formed_lines() {
        assert!(check("<ul>\n  <li>a</li>\n</ul>\nplain text\n").is_empty());
    }

    #[test]
    fn test_unclosed_and_unopened() {
        let diagnostics = check("<div class=\"x\"\n  id=\"y\">\nok");
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::error(
                    1,
                    1,
                    rules::UNCLOSED_TAG,
                    "Tag opened with '<' is not closed on this line",
                ),
                Diagnostic::error(
                    2,
                    9,
                    rules::UNOPENED_TAG,
                    "'>' has no matching '<' on this line",
                ),
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    }
}
