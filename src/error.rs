// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the index and the query evaluators.
//!
//! Only `TermNotFound` is ever recovered from, and only when the caller opted
//! into spelling correction. `MergeConflict` means the builder merged two
//! different tokens, which a correct build never does.

use std::fmt;

/// Everything that can go wrong between a query string and a posting set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiftError {
    /// The query text is not a well-formed Boolean expression.
    InvalidQuery { query: String, reason: String },
    /// A normalized token has no entry in the vocabulary.
    TermNotFound { term: String },
    /// Two terms with different tokens were merged.
    MergeConflict { left: String, right: String },
    /// A session was assembled from an index built over a different corpus.
    CorpusMismatch { index_docs: usize, corpus_docs: usize },
    /// The corpus has as many documents as the index, but different texts.
    CorpusChanged {
        index_fingerprint: u32,
        corpus_fingerprint: u32,
    },
    /// More documents than a `DocId` can number.
    CorpusTooLarge { documents: usize },
}

impl SiftError {
    pub(crate) fn invalid_query(query: &str, reason: impl Into<String>) -> Self {
        SiftError::InvalidQuery {
            query: query.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn term_not_found(term: &str) -> Self {
        SiftError::TermNotFound {
            term: term.to_string(),
        }
    }
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiftError::InvalidQuery { query, reason } => {
                write!(f, "invalid query '{}': {}", query, reason)
            }
            SiftError::TermNotFound { term } => {
                write!(f, "the term '{}' is not present in the index", term)
            }
            SiftError::MergeConflict { left, right } => {
                write!(f, "cannot merge term '{}' into term '{}'", right, left)
            }
            SiftError::CorpusMismatch {
                index_docs,
                corpus_docs,
            } => {
                write!(
                    f,
                    "index covers {} documents but the corpus has {}",
                    index_docs, corpus_docs
                )
            }
            SiftError::CorpusChanged {
                index_fingerprint,
                corpus_fingerprint,
            } => {
                write!(
                    f,
                    "index was built over other texts (fingerprint {:#010x}, corpus has {:#010x})",
                    index_fingerprint, corpus_fingerprint
                )
            }
            SiftError::CorpusTooLarge { documents } => {
                write!(f, "corpus has over {} documents, more than an index can hold", documents - 1)
            }
        }
    }
}

impl std::error::Error for SiftError {}

/// Result alias for index and query operations.
pub type Result<T> = std::result::Result<T, SiftError>;
