// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A corpus paired with the index built over it.
//!
//! The index only knows document ids; the session turns the posting sets it
//! returns back into documents. Sessions are read-only after construction and
//! every query call is independent.

use crate::error::Result;
use crate::inverted::InvertedIndex;
use crate::postings::PostingSet;
use crate::query::{Correction, QueryEngine, QueryMode, QueryOptions};
use crate::types::Document;

/// Documents matching a query, in id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer<'a> {
    pub documents: Vec<&'a Document>,
    pub corrections: Vec<Correction>,
}

#[derive(Debug, Clone)]
pub struct RetrievalSession {
    corpus: Vec<Document>,
    index: InvertedIndex,
}

impl RetrievalSession {
    /// Index `corpus` and keep both.
    pub fn from_corpus(corpus: Vec<Document>) -> Result<Self> {
        let index = InvertedIndex::build(&corpus)?;
        Ok(Self { corpus, index })
    }

    /// Pair a corpus with a previously built index, e.g. one loaded from a
    /// snapshot. Fails unless the index was built over exactly these texts.
    pub fn new(corpus: Vec<Document>, index: InvertedIndex) -> Result<Self> {
        index.check_corpus(&corpus)?;
        Ok(Self { corpus, index })
    }

    pub fn corpus(&self) -> &[Document] {
        &self.corpus
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn engine(&self, options: QueryOptions) -> QueryEngine<'_> {
        QueryEngine::new(&self.index, options)
    }

    /// Map ids back to documents. Ids outside the corpus are skipped.
    pub fn documents(&self, postings: &PostingSet) -> Vec<&Document> {
        postings
            .iter()
            .filter_map(|id| self.corpus.get(id.as_usize()))
            .collect()
    }

    /// Evaluate `text` in `mode` and resolve the hits to documents.
    pub fn query(&self, mode: QueryMode, text: &str, options: QueryOptions) -> Result<Answer<'_>> {
        let evaluation = self.engine(options).evaluate(mode, text)?;
        Ok(Answer {
            documents: self.documents(&evaluation.postings),
            corrections: evaluation.corrections,
        })
    }
}
