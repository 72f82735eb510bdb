use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scribe::{Analyzer, Highlighter};

fn large_swift(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        out.push_str(&format!(
            "    let card{i} = Card(title: \"task {i}\", points: {i}) // column {}\n",
            i % 3
        ));
    }
    out
}

fn large_json(entries: usize) -> String {
    let items: Vec<String> = (0..entries)
        .map(|i| format!("  {{\"id\": {i}, \"title\": \"card {i}\", \"done\": false}}"))
        .collect();
    format!("[\n{}\n]\n", items.join(",\n"))
}

fn bench_highlight(c: &mut Criterion) {
    let analyzer = Analyzer::builtin();
    let text = large_swift(10_000);
    c.bench_function("highlight/swift_10k_lines", |b| {
        b.iter(|| black_box(analyzer.highlight(black_box(&text), "swift").unwrap()))
    });

    let Ok(mode) = analyzer.resolve("swift") else {
        return;
    };
    c.bench_function("highlighter_compile/swift", |b| {
        b.iter(|| black_box(Highlighter::new(black_box(mode))))
    });
}

fn bench_lint(c: &mut Criterion) {
    let analyzer = Analyzer::builtin();
    let swift = large_swift(10_000);
    c.bench_function("lint/swift_10k_lines", |b| {
        b.iter(|| black_box(analyzer.lint(black_box(&swift), "swift").unwrap()))
    });

    let valid = large_json(5_000);
    c.bench_function("lint/json_valid_5k_entries", |b| {
        b.iter(|| black_box(analyzer.lint(black_box(&valid), "json").unwrap()))
    });

    let mut broken = valid.clone();
    broken.pop();
    broken.pop();
    c.bench_function("lint/json_unclosed_5k_entries", |b| {
        b.iter(|| black_box(analyzer.lint(black_box(&broken), "json").unwrap()))
    });
}

criterion_group!(benches, bench_highlight, bench_lint);
criterion_main!(benches);
