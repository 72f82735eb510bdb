//! Per-language heuristic checks.
//!
//! Every check is a plain `fn(&str) -> Vec<Diagnostic>` over the whole text. None of them parse;
//! they scan line by line (JSON scans characters) and accept the false positives that implies.

pub mod json;
/// Tag balance per line for HTML and XML.
pub mod markup;
/// Indentation and whitespace checks for Python.
pub mod python;
/// Declaration and indentation checks for JavaScript and TypeScript.
pub mod script;
/// Indentation, binding and semicolon checks for Swift.
pub mod swift;

/// Number of leading `' '` characters. Stops at the first tab or other character.
pub(crate) fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}

/// 1-based `char` column of the byte offset `byte` within `line`.
pub(crate) fn char_column(line: &str, byte: usize) -> usize {
    line[..byte].chars().count() + 1
}

/// 1-based column of the first non-whitespace character.
pub(crate) fn content_column(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count() + 1
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whether `trimmed` starts with `word` as a whole word (`let x`, not `letter`).
pub(crate) fn starts_with_word(trimmed: &str, word: &str) -> bool {
    trimmed
        .strip_prefix(word)
        .is_some_and(|rest| !rest.starts_with(is_word_char))
}

/// Whether `line` contains `word` as a whole word anywhere (`export const x`, not `constant`).
///
/// A `.` before the word also disqualifies it, so member accesses like `obj.let` do not count.
pub(crate) fn contains_word(line: &str, word: &str) -> bool {
    line.match_indices(word).any(|(start, _)| {
        let before_ok = line[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c) && c != '.');
        let after_ok = !line[start + word.len()..].starts_with(is_word_char);
        before_ok && after_ok
    })
}
