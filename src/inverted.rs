// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and term lookup.
//!
//! One pass over the corpus in document order. Every token occurrence becomes
//! a single-document `Term` that is merged into a working map keyed by token;
//! at the end the map's values are sorted into the vocabulary.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTINGS_ASCENDING**: every term's postings are strictly ascending.
//!    This holds only because documents are visited in id order, so each
//!    merge receives an id no smaller than anything already stored.
//! 2. **VOCAB_SORTED**: terms are sorted by token, tokens are unique.
//! 3. **NON_EMPTY**: every term has at least one posting.
//! 4. **ALL_DOCS**: `all_documents` is exactly `0..corpus.len()`.
//!
//! The index also keeps a CRC32 fingerprint of the texts it was built from,
//! so an index saved earlier can be matched against a freshly loaded corpus.
//!
//! The index is immutable once built. Nothing here hands out `&mut` access to
//! a posting set, so a built index can be shared across threads for reading.

use std::collections::HashMap;
use std::fmt;

use crc32fast::Hasher as Crc32Hasher;

use crate::contracts::check_index_well_formed;
use crate::error::{Result, SiftError};
use crate::postings::PostingSet;
use crate::term::Term;
use crate::types::{DocId, Document};
use crate::utils::tokenize;

/// Sorted vocabulary of terms plus the set of every indexed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: Vec<Term>,
    all_documents: PostingSet,
    fingerprint: u32,
}

/// CRC32 over a sequence of texts.
///
/// Each text is prefixed with its byte length, so moving a word across a
/// document boundary changes the fingerprint.
#[derive(Default)]
struct Fingerprint(Crc32Hasher);

impl Fingerprint {
    fn add(&mut self, text: &str) {
        self.0.update(&(text.len() as u64).to_le_bytes());
        self.0.update(text.as_bytes());
    }

    fn finish(self) -> u32 {
        self.0.finalize()
    }
}

/// Fingerprint of `corpus`: what `InvertedIndex::fingerprint` reports for an
/// index built over it.
pub fn corpus_fingerprint(corpus: &[Document]) -> u32 {
    let mut fingerprint = Fingerprint::default();
    for doc in corpus {
        fingerprint.add(&doc.text);
    }
    fingerprint.finish()
}

/// Id of the document at `position`, if it fits in a `DocId`.
fn doc_id(position: usize) -> Result<DocId> {
    u32::try_from(position)
        .map(DocId)
        .map_err(|_| SiftError::CorpusTooLarge { documents: position + 1 })
}

impl InvertedIndex {
    /// Build the index over `corpus`. Document ids are corpus positions.
    pub fn build(corpus: &[Document]) -> Result<Self> {
        Self::build_with_progress(corpus, |_, _| {})
    }

    /// Build the index, calling `on_document(done, total)` after each document.
    ///
    /// The callback is how front ends drive a progress bar; the index itself
    /// never writes to the console.
    pub fn build_with_progress<F>(corpus: &[Document], on_document: F) -> Result<Self>
    where
        F: FnMut(usize, usize),
    {
        let total = corpus.len();
        Self::build_from_texts(corpus.iter().map(|doc| doc.text.as_str()), total, on_document)
    }

    /// Build from raw texts. `total` is only reported to the callback.
    pub fn build_from_texts<'a, I, F>(texts: I, total: usize, mut on_document: F) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(usize, usize),
    {
        let mut working: HashMap<String, Term> = HashMap::new();
        let mut all_documents = PostingSet::new();
        let mut fingerprint = Fingerprint::default();

        for (position, text) in texts.into_iter().enumerate() {
            let doc = doc_id(position)?;
            fingerprint.add(text);
            all_documents.merge(PostingSet::from_doc(doc));

            for token in tokenize(text) {
                if let Some(term) = working.get_mut(&token) {
                    term.merge(Term::new(token, doc))?;
                } else {
                    working.insert(token.clone(), Term::new(token, doc));
                }
            }

            on_document(position + 1, total);
        }

        // INVARIANT: VOCAB_SORTED (map keys are unique, so unstable is fine)
        let mut terms: Vec<Term> = working.into_values().collect();
        terms.sort_unstable();

        let index = Self {
            terms,
            all_documents,
            fingerprint: fingerprint.finish(),
        };
        check_index_well_formed(&index);
        Ok(index)
    }

    /// Reassemble an index from decoded parts. The caller has validated them.
    pub(crate) fn from_parts(terms: Vec<Term>, all_documents: PostingSet, fingerprint: u32) -> Self {
        let index = Self {
            terms,
            all_documents,
            fingerprint,
        };
        check_index_well_formed(&index);
        index
    }

    /// Postings for an exact, already normalized token.
    pub fn lookup(&self, token: &str) -> Result<&PostingSet> {
        self.get(token)
            .map(Term::postings)
            .ok_or_else(|| SiftError::term_not_found(token))
    }

    /// The term for an exact, already normalized token.
    pub fn get(&self, token: &str) -> Option<&Term> {
        self.terms
            .binary_search_by(|term| term.token().cmp(token))
            .ok()
            .map(|position| &self.terms[position])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Terms in token order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Tokens in sorted order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(Term::token)
    }

    /// Every document in the corpus, used as the universe for NOT.
    pub fn all_documents(&self) -> &PostingSet {
        &self.all_documents
    }

    pub fn doc_count(&self) -> usize {
        self.all_documents.len()
    }

    /// CRC32 fingerprint of the corpus texts the index was built from.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    /// Fail unless this index was built over exactly the texts of `corpus`.
    pub fn check_corpus(&self, corpus: &[Document]) -> Result<()> {
        if self.doc_count() != corpus.len() {
            return Err(SiftError::CorpusMismatch {
                index_docs: self.doc_count(),
                corpus_docs: corpus.len(),
            });
        }
        let found = corpus_fingerprint(corpus);
        if self.fingerprint != found {
            return Err(SiftError::CorpusChanged {
                index_fingerprint: self.fingerprint,
                corpus_fingerprint: found,
            });
        }
        Ok(())
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for InvertedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inverted index with {} terms over {} documents",
            self.terms.len(),
            self.all_documents.len()
        )
    }
}
