// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::inverted::InvertedIndex;
use crate::types::Document;

/// Create a document whose title is derived from its position.
pub fn make_doc(id: usize, text: &str) -> Document {
    Document::new(format!("Doc {}", id), text)
}

/// Build a corpus from texts, one document per text, titled by position.
pub fn make_corpus(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(id, text)| make_doc(id, text))
        .collect()
}

/// The three-document corpus most tests are written against.
///
/// | id | text         |
/// |----|--------------|
/// | 0  | `yoda luke`  |
/// | 1  | `darth yoda` |
/// | 2  | `gandalf`    |
pub fn star_wars_corpus() -> Vec<Document> {
    vec![
        Document::new("The Empire Strikes Back", "Yoda luke"),
        Document::new("Return of the Jedi", "darth, yoda!"),
        Document::new("The Fellowship of the Ring", "Gandalf"),
    ]
}

/// Index over [`star_wars_corpus`].
pub fn star_wars_index() -> InvertedIndex {
    match InvertedIndex::build(&star_wars_corpus()) {
        Ok(index) => index,
        Err(err) => panic!("fixture corpus failed to index: {}", err),
    }
}
