//! CLI argument parsing and one-shot query evaluation.

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::time::Instant;

use crate::{
    classifier::Classifier,
    mode::{ModeConfig, SearchMode},
    provider::StaticCandidates,
    search_bar::{SearchBarState, SearchResults},
    types::{HighlightSpan, MatchResult},
};

/// omnibar - search input that answers questions or finds things
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Query to evaluate once without entering the TUI
    pub query: Option<String>,

    /// Print only the classifier verdict for the query
    #[arg(long)]
    pub classify: bool,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Start in traditional keyword mode instead of AI mode
    #[arg(long)]
    pub keyword_default: bool,

    /// Force the interactive TUI even when a query is given
    #[arg(long)]
    pub tui: bool,
}

/// CLI実行エントリーポイント
pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let config = ModeConfig {
        initial_mode: if cli.keyword_default {
            SearchMode::Keyword
        } else {
            SearchMode::Ai
        },
        ..ModeConfig::default()
    };

    if cli.tui || cli.query.is_none() {
        return crate::tui::run_tui(StaticCandidates, config).await;
    }

    let Some(query) = cli.query else {
        unreachable!()
    };

    if cli.classify {
        return run_classify(&query, cli.json);
    }

    run_evaluate(&query, config, cli.json)
}

/// Print the classifier verdict for a single query.
fn run_classify(query: &str, json: bool) -> Result<()> {
    let classifier = Classifier::new();
    let verdict = classifier.classify(query);

    debug!("classified {:?} as {:?}", query, verdict);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    let label = if verdict.is_natural_language {
        "natural language"
    } else {
        "keyword search"
    };
    println!(
        "{} ({}, {} signals)",
        label,
        verdict.reason.name(),
        verdict.matched_signal_count
    );
    Ok(())
}

/// Evaluate a query once against the demo dataset and print the surface.
fn run_evaluate(query: &str, config: ModeConfig, json: bool) -> Result<()> {
    let mut bar = SearchBarState::with_config(StaticCandidates, config);
    let now = Instant::now();
    bar.set_query(query, now);
    let snapshot = bar.evaluate(now);

    debug!("evaluated {:?} in {:?} mode", query, snapshot.mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Mode: {} {}", snapshot.mode.icon(), snapshot.mode.name());

    match snapshot.results {
        SearchResults::AiEcho { prompt } => {
            println!("✨ Ask AI: {}", prompt);
        }
        SearchResults::Matches(matches) => {
            if matches.is_empty() {
                println!("No results found.");
            }
            for result in &matches {
                println!("  {}", format_match(result));
            }
        }
        SearchResults::Defaults {
            suggestions,
            recent,
        } => {
            println!("Suggestions:");
            for suggestion in suggestions {
                println!("  ✨ {}", suggestion);
            }
            println!("Recent:");
            for item in recent {
                println!("  🕘 {}", item);
            }
        }
    }

    Ok(())
}

/// One result line with the matched region bracketed, e.g. `#[eng]ineering`.
fn format_match(result: &MatchResult) -> String {
    let highlighted = bracket_spans(result.matched_text(), &result.spans);
    match result.field {
        crate::types::HighlightField::Label => {
            format!("{} {}", result.candidate.kind.icon(), highlighted)
        }
        crate::types::HighlightField::Secondary => format!(
            "{} {}  ({})",
            result.candidate.kind.icon(),
            result.candidate.label,
            highlighted
        ),
    }
}

fn bracket_spans(text: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::new();
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push('[');
        out.push_str(&text[span.start..span.end]);
        out.push(']');
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
