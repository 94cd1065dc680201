// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Three subcommands: `index` to build a snapshot from a corpus, `inspect` to
//! examine a snapshot, and `query` to run a Boolean query. `query` reuses a
//! snapshot when one is given and still matches the corpus, and otherwise
//! builds the index and writes the snapshot for next time.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use sift::QueryMode;

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Boolean retrieval over an inverted index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index snapshot from a corpus
    Index {
        /// Corpus: a CMU movie-summary directory or a JSON array of {title, text}
        #[arg(short, long)]
        corpus: PathBuf,

        /// Snapshot file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Inspect a snapshot's layout
    Inspect {
        /// Path to snapshot file
        file: PathBuf,
    },

    /// Run a Boolean query and print matching titles
    Query {
        /// Corpus: a CMU movie-summary directory or a JSON array of {title, text}
        #[arg(short, long)]
        corpus: PathBuf,

        /// Snapshot to load, or to create if missing or stale
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// How the query text is read
        #[arg(short, long, value_enum, default_value_t = ModeArg::Grouped)]
        mode: ModeArg,

        /// Replace words missing from the index with the nearest known term
        #[arg(long)]
        correct: bool,

        /// Let corrections start with a different letter than the typo
        #[arg(long)]
        any_first_letter: bool,

        /// Maximum number of titles to print (0 prints all)
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Query text, e.g. "(yoda AND luke) OR gandalf"
        query: String,
    },
}

/// Query modes as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Operators with parentheses
    Grouped,
    /// Operators without parentheses, left to right
    Flat,
    /// Every word must occur
    And,
    /// Any word may occur
    Or,
    /// None of the words may occur
    Not,
}

impl From<ModeArg> for QueryMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Grouped => QueryMode::Grouped,
            ModeArg::Flat => QueryMode::Flat,
            ModeArg::And => QueryMode::And,
            ModeArg::Or => QueryMode::Or,
            ModeArg::Not => QueryMode::Not,
        }
    }
}
