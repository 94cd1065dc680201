// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Instant;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use sift::corpus::load_corpus;
use sift::{snapshot, Document, InvertedIndex, QueryOptions, RetrievalSession};

mod cli;
use cli::display::{self, format_size, row, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Index { corpus, output } => run_index(&corpus, &output),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Query {
            corpus,
            index,
            mode,
            correct,
            any_first_letter,
            limit,
            query,
        } => {
            let options = QueryOptions {
                spelling_correction: correct,
                same_first_letter: !any_first_letter,
            };
            run_query(&corpus, index.as_deref(), mode.into(), options, limit, &query)
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", display::error_line(&e));
        std::process::exit(1);
    }
}

/// Create a progress style for the indexing bar
#[cfg(feature = "progress")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn read_corpus(path: &Path) -> Result<Vec<Document>, String> {
    let start = Instant::now();
    let corpus = load_corpus(path).map_err(|e| format!("Failed to load corpus: {}", e))?;
    eprintln!(
        "📚 Loaded {} documents from {} in {:.2?}",
        corpus.len(),
        path.display(),
        start.elapsed()
    );
    Ok(corpus)
}

/// Build the index, drawing a progress bar when the feature is on.
fn build_index(corpus: &[Document]) -> Result<InvertedIndex, String> {
    let start = Instant::now();

    #[cfg(feature = "progress")]
    let index = {
        let pb = ProgressBar::new(corpus.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Indexing");
        pb.set_message("documents...");
        let index = InvertedIndex::build_with_progress(corpus, |done, _| {
            pb.set_position(done as u64);
        });
        pb.finish_and_clear();
        index
    };

    #[cfg(not(feature = "progress"))]
    let index = InvertedIndex::build(corpus);

    let index = index.map_err(|e| format!("Failed to build index: {}", e))?;
    eprintln!(
        "🔨 Indexed {} terms over {} documents in {:.2?}",
        index.len(),
        index.doc_count(),
        start.elapsed()
    );
    Ok(index)
}

fn write_snapshot(index: &InvertedIndex, path: &Path) -> Result<(), String> {
    snapshot::save(index, path)
        .map_err(|e| format!("Failed to write snapshot {}: {}", path.display(), e))?;
    let size = fs::metadata(path).map(|m| m.len() as usize).unwrap_or(0);
    eprintln!("💾 Wrote {} ({})", path.display(), format_size(size));
    Ok(())
}

/// Load the snapshot at `path` if it was built over this corpus, else rebuild
/// and save.
fn load_or_build(path: &Path, corpus: &[Document]) -> Result<InvertedIndex, String> {
    if path.exists() {
        match snapshot::load(path) {
            Ok(index) => match index.check_corpus(corpus) {
                Ok(()) => {
                    eprintln!("📦 Loaded snapshot {}", path.display());
                    return Ok(index);
                }
                Err(e) => eprintln!(
                    "⚠️  Snapshot {} does not match the corpus ({}); rebuilding",
                    path.display(),
                    e
                ),
            },
            Err(e) => eprintln!(
                "⚠️  Snapshot {} is unreadable ({}); rebuilding",
                path.display(),
                e
            ),
        }
    }

    let index = build_index(corpus)?;
    write_snapshot(&index, path)?;
    Ok(index)
}

fn run_index(corpus_path: &Path, output: &Path) -> Result<(), String> {
    let corpus = read_corpus(corpus_path)?;
    if corpus.is_empty() {
        eprintln!("⚠️  Corpus is empty; the snapshot will match nothing");
    }
    let index = build_index(&corpus)?;
    write_snapshot(&index, output)?;
    eprintln!("✅ Done");
    Ok(())
}

fn run_inspect(path: &Path) -> Result<(), String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let summary = snapshot::inspect(&bytes).map_err(|e| format!("Invalid snapshot: {}", e))?;
    // Full decode catches corruption the envelope checks cannot see
    let index = snapshot::deserialize(&bytes).map_err(|e| format!("Invalid snapshot: {}", e))?;

    section_top(&path.display().to_string());
    row(&format!(" version        {}", summary.version));
    row(&format!(" documents      {}", summary.doc_count));
    row(&format!(" terms          {}", summary.term_count));
    row(&format!(" vocabulary     {}", format_size(summary.vocab_bytes)));
    row(&format!(" postings       {}", format_size(summary.postings_bytes)));
    row(&format!(" all documents  {}", format_size(summary.all_docs_bytes)));
    row(&format!(" total          {}", format_size(summary.total_bytes)));
    row(&format!(" corpus         {:#010x}", summary.corpus_fingerprint));
    row(&format!(" crc32          {:#010x}", summary.crc32));
    if let Some(longest) = index.terms().iter().max_by_key(|term| term.postings().len()) {
        row(&display::dim(&format!(
            " most common    '{}' in {} documents",
            display::truncate(longest.token(), 32),
            longest.postings().len()
        )));
    }
    section_bot();
    Ok(())
}

fn run_query(
    corpus_path: &Path,
    index_path: Option<&Path>,
    mode: sift::QueryMode,
    options: QueryOptions,
    limit: usize,
    query: &str,
) -> Result<(), String> {
    let corpus = read_corpus(corpus_path)?;
    let index = match index_path {
        Some(path) => load_or_build(path, &corpus)?,
        None => build_index(&corpus)?,
    };
    let session = RetrievalSession::new(corpus, index).map_err(|e| e.to_string())?;

    let start = Instant::now();
    let evaluation = session
        .engine(options)
        .evaluate(mode, query)
        .map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();

    for correction in &evaluation.corrections {
        eprintln!("💡 {}", display::correction_notice(&correction.to_string()));
    }

    let total = evaluation.postings.len();
    let shown = if limit == 0 { total } else { limit.min(total) };

    section_top(query);
    for id in evaluation.postings.iter().take(shown) {
        if let Some(doc) = session.corpus().get(id.as_usize()) {
            row(&display::hit_line(id.get(), &doc.title));
        }
    }
    if shown < total {
        row(&display::dim(&format!(" … {} more", total - shown)));
    }
    section_bot();
    println!(
        "{} {}",
        display::match_count(total),
        display::dim(&format!("in {:.2?}", elapsed))
    );
    Ok(())
}
