//! Print the styled runs and diagnostics for a file.
//!
//! ```text
//! RUST_LOG=scribe=debug cargo run -p scribe --example analyze_file -- path/to/file.swift
//! ```

use scribe::{Analyzer, AnalyzerConfig, LanguageRegistry};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: analyze_file <path> [config.yaml]");
        std::process::exit(2);
    };
    let config = match std::env::args().nth(2) {
        Some(config_path) => AnalyzerConfig::from_yaml(&std::fs::read_to_string(config_path)?)?,
        None => AnalyzerConfig::default(),
    };

    let analyzer = Analyzer::new(LanguageRegistry::builtin(), config);
    let language = Path::new(&path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let text = std::fs::read_to_string(&path)?;
    let analysis = analyzer.analyze(&text, language)?;

    println!("language: {}", analysis.language);
    for span in &analysis.spans {
        println!("{:>8} {:>6} {}", span.start, span.length, span.style);
    }
    for d in &analysis.diagnostics {
        println!("{path}:{}:{}: {:?} [{}] {}", d.line, d.column, d.severity, d.rule, d.message);
    }
    Ok(())
}
