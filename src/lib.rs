// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean retrieval over an in-memory inverted index.
//!
//! Documents are tokenized into a sorted vocabulary of terms, each carrying
//! the ascending set of document ids it occurs in. Queries combine those sets
//! with AND, OR and NOT; there is no ranking, a document either matches or it
//! does not.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│  inverted.rs │────▶│   query/     │
//! │ (Document)  │     │ (build,      │     │ (QueryEngine │
//! │             │     │  lookup)     │     │  flat/group) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │   ▲                │
//!        │                   ▼   │                ▼
//!        │            ┌──────────────┐     ┌──────────────┐
//!        │            │  snapshot/   │     │   fuzzy/     │
//!        │            │ (save, load) │     │ (Levenshtein │
//!        │            └──────────────┘     │  correction) │
//!        ▼                                 └──────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │                    session.rs                        │
//! │   (RetrievalSession: corpus + index, ids → docs)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sift::{Document, QueryMode, QueryOptions, RetrievalSession};
//!
//! let corpus = vec![
//!     Document::new("A", "yoda luke"),
//!     Document::new("B", "darth yoda"),
//!     Document::new("C", "gandalf"),
//! ];
//! let session = RetrievalSession::from_corpus(corpus)?;
//! let answer = session.query(
//!     QueryMode::Grouped,
//!     "(yoda AND luke) OR gandalf",
//!     QueryOptions::default(),
//! )?;
//! assert_eq!(answer.documents.len(), 2);
//! ```

// Module declarations
pub mod contracts;
pub mod corpus;
mod error;
pub mod fuzzy;
mod inverted;
mod postings;
pub mod query;
mod session;
pub mod snapshot;
mod term;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use error::{Result, SiftError};
pub use fuzzy::{edit_distance, edit_distance_within, find_nearest};
pub use inverted::{corpus_fingerprint, InvertedIndex};
pub use postings::PostingSet;
pub use query::{
    Correction, Evaluation, Operand, Operator, QueryEngine, QueryMode, QueryOptions,
};
pub use session::{Answer, RetrievalSession};
pub use term::Term;
pub use types::{DocId, Document};
pub use utils::{normalize, tokenize};
