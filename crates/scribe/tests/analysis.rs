use pretty_assertions::assert_eq;
use scribe::{
    Analyzer, AnalyzerConfig, Diagnostic, LanguageMode, LanguageRegistry, OffsetEncoding,
    Severity, StyleTag, StyledSpan, rules,
};

fn assert_covers(spans: &[StyledSpan], len: usize) {
    let mut expected_start = 0;
    for span in spans {
        assert_eq!(span.start, expected_start, "gap or overlap at {span:?}");
        assert!(span.length > 0);
        expected_start = span.end();
    }
    assert_eq!(expected_start, len);
}

const SAMPLES: &[(&str, &str)] = &[
    (
        "swift",
        "import SwiftUI\n\nstruct Board: View {\n    @State var cards: [Card] = []\n    let title: String\n    var body: some View { Text(\"Kanban\"); }\n}\n",
    ),
    (
        "python",
        "class Card:\n    \"\"\"A kanban card.\"\"\"\n    def __init__(self, title):\n        self.title = title  # keep\n",
    ),
    ("json", "{\n  \"columns\": [\"todo\", \"doing\", \"done\"],\n  \"wip\": 3\n}\n"),
    ("html", "<!DOCTYPE html>\n<html lang=\"en\">\n<body><p class='x'>Hi &amp; bye</p></body>\n</html>\n"),
    ("css", "/* board */\n.card { color: #fff; margin: 0.5rem !important; }\n@media print { .card { display: none } }\n"),
    ("javascript", "// drag\nconst card = document.querySelector('.card')\nlet n = 0x1F;\nconsole.log(`moved ${n}`);\n"),
    ("typescript", "interface Card { title: string; done: boolean }\n@Component\nexport const c: Card = { title: \"x\", done: false };\n"),
    ("markdown", "# Board\n\n> note\n\n- [ ] *task* with **bold** and `code`\n\n```swift\nlet x = 1\n```\n[link](http://example.com)\n"),
    ("yaml", "---\nboard: main # default\ncolumns:\n  - name: \"todo\"\n    wip: 3\n  - &done name: done\nenabled: true\n"),
    ("xml", "<?xml version=\"1.0\"?>\n<plist><dict><key>A</key><![CDATA[<raw>]]></dict></plist>\n<!-- end -->\n"),
    ("shell", "#!/bin/bash\nfor f in *.md; do\n  echo \"$f\" ${HOME} $1 # loop\ndone\n"),
];

#[test]
fn test_spans_cover_every_sample_in_every_encoding() {
    for encoding in [OffsetEncoding::Char, OffsetEncoding::Utf16, OffsetEncoding::Utf8] {
        let config = AnalyzerConfig {
            offset_encoding: encoding,
            ..AnalyzerConfig::default()
        };
        let analyzer = Analyzer::new(LanguageRegistry::builtin(), config);
        for (language, text) in SAMPLES {
            let spans = analyzer.highlight(text, language).unwrap();
            assert_covers(&spans, encoding.measure(text));
        }
    }
}

#[test]
fn test_every_sample_uses_more_than_the_default_tag() {
    for (language, text) in SAMPLES {
        let spans = scribe::highlight(text, language).unwrap();
        assert!(
            spans.iter().any(|s| s.style != StyleTag::Default),
            "{language} produced only default spans"
        );
    }
}

#[test]
fn test_highlight_is_idempotent() {
    for (language, text) in SAMPLES {
        assert_eq!(
            scribe::highlight(text, language).unwrap(),
            scribe::highlight(text, language).unwrap()
        );
    }
}

#[test]
fn test_empty_input() {
    let analyzer = Analyzer::builtin();
    for mode in analyzer.registry().iter() {
        let analysis = analyzer.analyze("", mode.id()).unwrap();
        assert!(analysis.spans.is_empty(), "{}", mode.id());
        assert!(analysis.diagnostics.is_empty(), "{}", mode.id());
    }
}

#[test]
fn test_json_parser_is_authoritative() {
    assert_eq!(scribe::lint(r#"{"a":1}"#, "json").unwrap(), vec![]);
    assert_eq!(scribe::lint(r#"{"a": "}"}"#, "json").unwrap(), vec![]);

    let missing = scribe::lint(r#"{"a":1"#, "json").unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].rule, rules::UNCLOSED_BRACE);
    assert_eq!(missing[0].severity, Severity::Error);

    let extra = scribe::lint(r#"{"a":1}}"#, "json").unwrap();
    assert_eq!(
        extra,
        vec![Diagnostic::error(
            1,
            8,
            rules::UNEXPECTED_CLOSING_BRACE,
            "Unexpected closing brace '}'"
        )]
    );
}

#[test]
fn test_python_mixed_indentation() {
    let diagnostics = scribe::lint("if x:\n\t var=1", "python").unwrap();
    assert!(diagnostics.iter().any(|d| d.rule == rules::MIXED_TABS_SPACES
        && d.severity == Severity::Error
        && d.line == 2));
}

#[test]
fn test_swift_indentation() {
    let diagnostics = scribe::lint("func f() {\n   x = 1\n}", "swift").unwrap();
    assert!(diagnostics.iter().any(|d| d.rule == rules::INDENTATION
        && d.severity == Severity::Warning
        && d.line == 2));
}

#[test]
fn test_extension_detection() {
    let registry = scribe::builtin_analyzer().registry();
    assert_eq!(registry.detect("py").map(LanguageMode::id), Some("python"));
    assert_eq!(registry.detect("PY").map(LanguageMode::id), Some("python"));
    assert!(registry.detect("zzz").is_none());

    assert_eq!(scribe::analyze("x", "PY").unwrap().language, "python");
    assert!(scribe::analyze("x", "zzz").is_err());
}

#[test]
fn test_pattern_precedence_in_a_custom_mode() {
    let mut builder = LanguageRegistry::builder();
    builder
        .add(
            LanguageMode::builder("board", "Board")
                .extensions(["board"])
                .rule(r"\[[ x]\]", StyleTag::Keyword)
                .rule(r"\[x\].*$", StyleTag::Comment)
                .rule(r"(broken", StyleTag::String)
                .build(),
        )
        .unwrap();
    let analyzer = Analyzer::new(builder.build(), AnalyzerConfig::default());

    let spans = analyzer.highlight("[ ] a\n[x] b", "board").unwrap();
    assert_eq!(
        spans,
        vec![
            StyledSpan::new(0, 3, StyleTag::Keyword),
            StyledSpan::new(3, 3, StyleTag::Default),
            StyledSpan::new(6, 5, StyleTag::Comment),
        ]
    );
}

#[test]
fn test_analysis_serializes_for_hosts() {
    let analysis = scribe::analyze("<b", "html").unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["language"], "html");
    assert_eq!(json["spans"][0]["style"], "keyword");
    assert_eq!(json["diagnostics"][0]["severity"], "error");
    assert_eq!(json["diagnostics"][0]["rule"], "unclosed_tag");
}
