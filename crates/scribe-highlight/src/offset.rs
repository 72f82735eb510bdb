use serde::{Deserialize, Serialize};

/// Unit in which span offsets and diagnostic columns are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetEncoding {
    /// Unicode scalar values (`char`).
    #[default]
    Char,
    /// UTF-16 code units, as used by most platform text widgets.
    Utf16,
    /// UTF-8 bytes.
    Utf8,
}

impl OffsetEncoding {
    /// Width of a single character in this encoding.
    pub fn width(self, ch: char) -> usize {
        match self {
            OffsetEncoding::Char => 1,
            OffsetEncoding::Utf16 => ch.len_utf16(),
            OffsetEncoding::Utf8 => ch.len_utf8(),
        }
    }

    /// Length of `text` in this encoding.
    pub fn measure(self, text: &str) -> usize {
        match self {
            OffsetEncoding::Char => text.chars().count(),
            OffsetEncoding::Utf16 => text.encode_utf16().count(),
            OffsetEncoding::Utf8 => text.len(),
        }
    }

    /// Re-encode a 1-based `char` column within `line` into this encoding.
    ///
    /// Columns past the end of the line keep their distance from the line end.
    pub fn column(self, line: &str, char_column: usize) -> usize {
        if self == OffsetEncoding::Char {
            return char_column;
        }
        let wanted = char_column.saturating_sub(1);
        let mut chars = 0usize;
        let mut encoded = 0usize;
        for ch in line.chars().take(wanted) {
            chars += 1;
            encoded += self.width(ch);
        }
        encoded + (wanted - chars) + 1
    }
}
