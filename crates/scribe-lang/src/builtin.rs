//! Built-in language tables.
//!
//! Keywords always land in slot 0 of each table (see [`LanguageModeBuilder::build`]); the rules
//! listed here follow in order. Comments are declared last so they win over anything they cover.

use crate::comment::CommentConfig;
use crate::mode::{HighlightPattern, LanguageMode, LanguageModeBuilder};
use crate::style::StyleTag;

const DQ_STRING: &str = r#""(?:\\.|[^"\\\n])*""#;
const SQ_STRING: &str = r"'(?:\\.|[^'\\\n])*'";
const C_LINE_COMMENT: &str = r"//.*$";
const C_BLOCK_COMMENT: &str = r"(?s)/\*.*?\*/";
const HASH_COMMENT: &str = r"(?:^|[ \t])#.*$";
const MARKUP_COMMENT: &str = r"(?s)<!--.*?-->";
const NUMBER: &str =
    r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)\b";
const CAPITALIZED: &str = r"\b[A-Z][A-Za-z0-9_]*\b";

/// Every built-in mode, in registration (and extension tie-break) order.
pub fn builtin_modes() -> Vec<LanguageMode> {
    vec![
        swift(),
        python(),
        json(),
        html(),
        css(),
        javascript(),
        typescript(),
        markdown(),
        yaml(),
        xml(),
        shell(),
    ]
}

fn swift() -> LanguageMode {
    LanguageMode::builder("swift", "Swift")
        .extensions(["swift"])
        .comments(CommentConfig::line_and_block("//", "/*", "*/"))
        .keywords([
            "actor", "any", "as", "associatedtype", "async", "await", "break", "case", "catch",
            "class", "continue", "default", "defer", "deinit", "do", "else", "enum", "extension",
            "fallthrough", "fileprivate", "final", "for", "func", "guard", "if", "import", "in",
            "init", "inout", "internal", "is", "lazy", "let", "mutating", "open", "operator",
            "override", "private", "protocol", "public", "repeat", "rethrows", "return", "self",
            "some", "static", "struct", "subscript", "super", "switch", "throw", "throws", "try",
            "typealias", "var", "weak", "where", "while",
        ])
        .rule(CAPITALIZED, StyleTag::Type)
        .rule(r"@\w+", StyleTag::Type)
        .rule(r"\b(?:true|false|nil)\b", StyleTag::Constant)
        .rule(NUMBER, StyleTag::Number)
        .rule(r#"(?s)""".*?""""#, StyleTag::String)
        .rule(DQ_STRING, StyleTag::String)
        .rule(C_LINE_COMMENT, StyleTag::Comment)
        .rule(C_BLOCK_COMMENT, StyleTag::Comment)
        .build()
}

fn python() -> LanguageMode {
    LanguageMode::builder("python", "Python")
        .extensions(["py", "pyw", "pyi"])
        .comments(CommentConfig::line("#"))
        .keywords([
            "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
            "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in",
            "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise", "return", "try",
            "while", "with", "yield",
        ])
        .rule(
            r"\b(?:bool|bytes|dict|float|frozenset|int|list|object|set|str|tuple)\b",
            StyleTag::Type,
        )
        .pattern(
            HighlightPattern::new(r"\b(?:class|def)\s+([A-Za-z_]\w*)", StyleTag::Type)
                .with_capture_group(1),
        )
        .rule(r"^[ \t]*@[\w.]+", StyleTag::Type)
        .rule(r"\b(?:True|False|None|self|cls)\b", StyleTag::Constant)
        .rule(NUMBER, StyleTag::Number)
        .rule(DQ_STRING, StyleTag::String)
        .rule(SQ_STRING, StyleTag::String)
        .rule(r#"(?s)""".*?""""#, StyleTag::String)
        .rule(r"(?s)'''.*?'''", StyleTag::String)
        .rule(r"#.*$", StyleTag::Comment)
        .build()
}

fn json() -> LanguageMode {
    let string = r#""(?:\\.|[^"\\\n])*""#;
    LanguageMode::builder("json", "JSON")
        .extensions(["json"])
        .rule(r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", StyleTag::Number)
        .rule(r"\b(?:true|false|null)\b", StyleTag::Constant)
        .rule(string, StyleTag::String)
        .pattern(
            HighlightPattern::new(format!(r"({string})\s*:"), StyleTag::Keyword)
                .with_capture_group(1),
        )
        .build()
}

fn markup(builder: LanguageModeBuilder) -> LanguageModeBuilder {
    builder
        .comments(CommentConfig::block("<!--", "-->"))
        .rule(r"</?[A-Za-z_][\w:.-]*|/?>", StyleTag::Keyword)
        .pattern(
            HighlightPattern::new(r"\s([A-Za-z_:][\w:.-]*)\s*=", StyleTag::Type)
                .with_capture_group(1),
        )
        .rule(r#""[^"\n]*""#, StyleTag::String)
        .pattern(HighlightPattern::new(r"=\s*('[^'\n]*')", StyleTag::String).with_capture_group(1))
        .rule(r"&[A-Za-z0-9#]+;", StyleTag::Constant)
        .linter("markup")
}

fn html() -> LanguageMode {
    markup(
        LanguageMode::builder("html", "HTML")
            .extensions(["html", "htm", "xhtml"])
            .rule(r"(?i)<!DOCTYPE[^>]*>", StyleTag::Keyword),
    )
    .rule(MARKUP_COMMENT, StyleTag::Comment)
    .build()
}

fn xml() -> LanguageMode {
    markup(
        LanguageMode::builder("xml", "XML")
            .extensions(["xml", "plist", "svg", "xsd", "xsl", "xslt"])
            .rule(r"(?s)<\?.*?\?>", StyleTag::Keyword),
    )
    .rule(r"(?s)<!\[CDATA\[.*?\]\]>", StyleTag::String)
    .rule(MARKUP_COMMENT, StyleTag::Comment)
    .build()
}

fn css() -> LanguageMode {
    LanguageMode::builder("css", "CSS")
        .extensions(["css"])
        .comments(CommentConfig::block("/*", "*/"))
        .keywords(["auto", "important", "inherit", "initial", "none", "unset"])
        .rule(r"[.#][A-Za-z_-][\w-]*", StyleTag::Type)
        .pattern(HighlightPattern::new(r"([A-Za-z-]+)\s*:", StyleTag::Keyword).with_capture_group(1))
        .rule(r"@[\w-]+", StyleTag::Keyword)
        .rule(
            r"\b\d+(?:\.\d+)?(?:px|em|rem|vh|vw|vmin|vmax|ch|ex|pt|pc|cm|mm|in|deg|rad|turn|ms|s|fr|%)?",
            StyleTag::Number,
        )
        .rule(r"#[0-9a-fA-F]{3,8}\b", StyleTag::Constant)
        .rule(DQ_STRING, StyleTag::String)
        .rule(SQ_STRING, StyleTag::String)
        .rule(C_BLOCK_COMMENT, StyleTag::Comment)
        .build()
}

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from", "function",
    "get", "if", "import", "in", "instanceof", "let", "new", "of", "return", "set", "static",
    "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with", "yield",
];

fn script(builder: LanguageModeBuilder) -> LanguageModeBuilder {
    builder
        .comments(CommentConfig::line_and_block("//", "/*", "*/"))
        .keywords(JS_KEYWORDS.iter().copied())
        .rule(CAPITALIZED, StyleTag::Type)
        .rule(r"\b(?:true|false|null|undefined|NaN|Infinity)\b", StyleTag::Constant)
        .rule(NUMBER, StyleTag::Number)
        .rule(DQ_STRING, StyleTag::String)
        .rule(SQ_STRING, StyleTag::String)
        .rule(r"`(?:\\.|[^`\\])*`", StyleTag::String)
        .rule(C_LINE_COMMENT, StyleTag::Comment)
        .rule(C_BLOCK_COMMENT, StyleTag::Comment)
}

fn javascript() -> LanguageMode {
    script(LanguageMode::builder("javascript", "JavaScript").extensions(["js", "mjs", "cjs", "jsx"]))
        .build()
}

fn typescript() -> LanguageMode {
    // Type rules must precede the shared literal/comment rules so strings and comments still win.
    let builder = LanguageMode::builder("typescript", "TypeScript")
        .extensions(["ts", "tsx", "mts", "cts"])
        .keywords([
            "abstract", "as", "declare", "enum", "implements", "infer", "interface", "is",
            "keyof", "namespace", "private", "protected", "public", "readonly", "satisfies",
            "type",
        ])
        .rule(
            r"\b(?:any|bigint|boolean|never|number|object|string|symbol|unknown)\b",
            StyleTag::Type,
        )
        .rule(r"@\w+", StyleTag::Type);
    script(builder).linter("javascript").build()
}

fn markdown() -> LanguageMode {
    LanguageMode::builder("markdown", "Markdown")
        .extensions(["md", "markdown", "mdown", "mkd"])
        .comments(CommentConfig::block("<!--", "-->"))
        .rule(r"^[ \t]*(?:[-*+]|\d+\.)[ \t]", StyleTag::Number)
        .rule(r"\*[^*\n]+\*", StyleTag::Type)
        .rule(r"\*\*[^*\n]+\*\*|__[^_\n]+__", StyleTag::Type)
        .rule(r"\[[^\]\n]*\]\([^)\n]*\)", StyleTag::Constant)
        .rule(r"^#{1,6}[ \t].*$", StyleTag::Keyword)
        .rule(r"^[ \t]*>.*$", StyleTag::Comment)
        .rule(r"`[^`\n]+`", StyleTag::String)
        .rule(r"(?s)^[ \t]*```.*?^[ \t]*```", StyleTag::String)
        .rule(MARKUP_COMMENT, StyleTag::Comment)
        .build()
}

fn yaml() -> LanguageMode {
    LanguageMode::builder("yaml", "YAML")
        .extensions(["yaml", "yml"])
        .comments(CommentConfig::line("#"))
        .pattern(
            HighlightPattern::new(
                r#"^[ \t]*(?:-[ \t]+)?([^\s#:'"-][^#:\n]*?)[ \t]*:(?:[ \t]|$)"#,
                StyleTag::Keyword,
            )
            .with_capture_group(1),
        )
        .rule(r"^(?:---|\.\.\.)[ \t]*$", StyleTag::Keyword)
        .rule(r"[&*][\w-]+", StyleTag::Type)
        .rule(
            r"\b(?:true|false|null|yes|no|on|off|True|False|Null)\b|~",
            StyleTag::Constant,
        )
        .rule(NUMBER, StyleTag::Number)
        .rule(DQ_STRING, StyleTag::String)
        .rule(r"'(?:''|[^'\n])*'", StyleTag::String)
        .rule(HASH_COMMENT, StyleTag::Comment)
        .build()
}

fn shell() -> LanguageMode {
    LanguageMode::builder("shell", "Shell Script")
        .extensions(["sh", "bash", "zsh", "ksh"])
        .comments(CommentConfig::line("#"))
        .keywords([
            "alias", "break", "case", "continue", "declare", "do", "done", "elif", "else", "esac",
            "exit", "export", "fi", "for", "function", "if", "in", "local", "readonly", "return",
            "select", "shift", "source", "then", "unset", "until", "while",
        ])
        .rule(
            r"\$\{[^}\n]*\}|\$[A-Za-z_]\w*|\$[0-9#@?*!$-]",
            StyleTag::Type,
        )
        .rule(r"\b\d+\b", StyleTag::Number)
        .rule(r#""(?:\\.|[^"\\])*""#, StyleTag::String)
        .rule(r"'[^']*'", StyleTag::String)
        .rule(HASH_COMMENT, StyleTag::Comment)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_patterns_compile() {
        for mode in builtin_modes() {
            for pattern in mode.patterns() {
                let compiled = RegexBuilder::new(&pattern.regex)
                    .multi_line(true)
                    .build()
                    .unwrap_or_else(|e| panic!("{}: {} ({e})", mode.id(), pattern.regex));
                if let Some(group) = pattern.group {
                    assert!(group < compiled.captures_len(), "{}: {}", mode.id(), pattern.regex);
                }
            }
        }
    }

    #[test]
    fn test_builtin_ids_and_extensions_are_disjoint() {
        let modes = builtin_modes();
        assert_eq!(modes.len(), 11);

        let mut ids = HashSet::new();
        let mut extensions = HashSet::new();
        for mode in &modes {
            assert!(ids.insert(mode.id().to_string()), "duplicate id {}", mode.id());
            for ext in mode.file_extensions() {
                assert!(extensions.insert(ext.clone()), "duplicate extension {ext}");
            }
        }
    }

    #[test]
    fn test_comments_are_declared_last() {
        for mode in builtin_modes() {
            let Some(last) = mode.patterns().last() else {
                continue;
            };
            if mode.comments().has_line() || mode.comments().has_block() {
                assert_eq!(last.style, StyleTag::Comment, "{}", mode.id());
            }
        }
    }
}
