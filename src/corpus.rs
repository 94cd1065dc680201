// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus providers.
//!
//! Two on-disk formats are understood:
//!
//! - The CMU Movie Summary corpus: a directory holding `movie.metadata.tsv`
//!   (column 0 is the movie id, column 2 the title) and `plot_summaries.txt`
//!   (column 0 is the movie id, column 1 the plot). Plots are read in file
//!   order; plots whose id has no title are skipped.
//! - A JSON array of `{ "title": ..., "text": ... }` objects.
//!
//! Document ids are positions in the returned vector, so the order produced
//! here must not change between building a snapshot and querying it.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::types::Document;

pub const METADATA_FILE: &str = "movie.metadata.tsv";
pub const PLOTS_FILE: &str = "plot_summaries.txt";

/// Load a corpus from a CMU movie-summary directory or a JSON file.
pub fn load_corpus(path: &Path) -> io::Result<Vec<Document>> {
    if path.is_dir() {
        load_movie_summaries(&path.join(PLOTS_FILE), &path.join(METADATA_FILE))
    } else {
        load_json_corpus(path)
    }
}

/// Join plot summaries with movie titles.
pub fn load_movie_summaries(plots: &Path, metadata: &Path) -> io::Result<Vec<Document>> {
    let titles = read_titles(BufReader::new(open(metadata)?))?;
    read_plots(BufReader::new(open(plots)?), &titles)
}

/// Read a JSON array of documents.
pub fn load_json_corpus(path: &Path) -> io::Result<Vec<Document>> {
    let content = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid corpus JSON in {}: {}", path.display(), e),
        )
    })
}

fn open(path: &Path) -> io::Result<File> {
    File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open {}: {}", path.display(), e))
    })
}

/// Movie id → title from tab-separated metadata rows.
fn read_titles<R: BufRead>(reader: R) -> io::Result<HashMap<String, String>> {
    let mut titles = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        let mut columns = line.split('\t');
        let (Some(id), Some(title)) = (columns.next(), columns.nth(1)) else {
            continue;
        };
        titles.insert(id.to_string(), title.to_string());
    }
    Ok(titles)
}

/// Plot rows in file order, titled through `titles`.
fn read_plots<R: BufRead>(
    reader: R,
    titles: &HashMap<String, String>,
) -> io::Result<Vec<Document>> {
    let mut corpus = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let Some((id, plot)) = line.split_once('\t') else {
            continue;
        };
        // Some plots reference ids missing from the metadata
        if let Some(title) = titles.get(id) {
            corpus.push(Document::new(title.clone(), plot));
        }
    }
    Ok(corpus)
}
