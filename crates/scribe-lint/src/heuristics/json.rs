//! JSON structural check.
//!
//! The parser is authoritative: if the text parses, nothing is reported. Otherwise a string-aware
//! brace/bracket scan looks for a positional cause, and only when the scan finds nothing is the
//! parser's own error reported.

use crate::diagnostic::Diagnostic;
use crate::rules;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Lint a JSON document. Whitespace-only text is not a document and reports `json_syntax`.
pub fn check(text: &str) -> Vec<Diagnostic> {
    let err = match validate(text) {
        Ok(()) => return Vec::new(),
        Err(err) => err,
    };

    let mut diagnostics = scan_balance(text);
    if diagnostics.is_empty() {
        diagnostics.push(Diagnostic::error(
            err.line().max(1),
            err.column().max(1),
            rules::JSON_SYNTAX,
            format!("Invalid JSON: {err}"),
        ));
    }
    diagnostics
}

/// Parse without building a value and without a nesting limit. Deep documents grow the stack
/// on the heap instead of overflowing it.
fn validate(text: &str) -> Result<(), serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    IgnoredAny::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()
}

#[derive(Debug, Default)]
struct Scanner {
    line: usize,
    column: usize,
    braces: usize,
    brackets: usize,
    in_string: bool,
    escaped: bool,
}

fn scan_balance(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut s = Scanner {
        line: 1,
        ..Scanner::default()
    };

    for ch in text.chars() {
        if ch == '\n' {
            s.line += 1;
            s.column = 0;
            // JSON strings cannot span lines; an unterminated one ends here.
            s.in_string = false;
            s.escaped = false;
            continue;
        }
        s.column += 1;

        if s.in_string {
            if s.escaped {
                s.escaped = false;
            } else if ch == '\\' {
                s.escaped = true;
            } else if ch == '"' {
                s.in_string = false;
            }
            continue;
        }

        match ch {
            '"' => s.in_string = true,
            '{' => s.braces += 1,
            '[' => s.brackets += 1,
            '}' if s.braces == 0 => diagnostics.push(Diagnostic::error(
                s.line,
                s.column,
                rules::UNEXPECTED_CLOSING_BRACE,
                "Unexpected closing brace '}'",
            )),
            '}' => s.braces -= 1,
            ']' if s.brackets == 0 => diagnostics.push(Diagnostic::error(
                s.line,
                s.column,
                rules::UNEXPECTED_CLOSING_BRACKET,
                "Unexpected closing bracket ']'",
            )),
            ']' => s.brackets -= 1,
            _ => {}
        }
    }

    // Unclosed openers are reported just past the last character.
    let end_column = s.column + 1;
    if s.braces > 0 {
        diagnostics.push(Diagnostic::error(
            s.line,
            end_column,
            rules::UNCLOSED_BRACE,
            format!("Missing {} closing brace{}", s.braces, plural(s.braces)),
        ));
    }
    if s.brackets > 0 {
        diagnostics.push(Diagnostic::error(
            s.line,
            end_column,
            rules::UNCLOSED_BRACKET,
            format!("Missing {} closing bracket{}", s.brackets, plural(s.brackets)),
        ));
    }

    diagnostics
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
