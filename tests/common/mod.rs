//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sift::{DocId, Document, InvertedIndex, PostingSet};
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from sift::testing
pub use sift::testing::{make_corpus, make_doc, star_wars_corpus, star_wars_index};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small corpus of movie plots with overlapping vocabulary.
pub fn movie_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "The Empire Strikes Back",
            "Luke trains with Yoda while Darth Vader hunts the rebels.",
        ),
        Document::new(
            "Return of the Jedi",
            "Luke confronts Darth Vader; Yoda dies on Dagobah.",
        ),
        Document::new(
            "The Fellowship of the Ring",
            "Gandalf guides Frodo and the fellowship toward Mordor.",
        ),
        Document::new(
            "The Two Towers",
            "Frodo and Sam travel on while Gandalf returns.",
        ),
        Document::new(
            "Psycho",
            "A woman steals money and stops at a motel run by a man and his mother.",
        ),
        Document::new(
            "Love Actually",
            "Love stories in London, one involving a mother and her son.",
        ),
    ]
}

/// Ids of a posting set as plain integers.
pub fn ids(postings: &PostingSet) -> Vec<u32> {
    postings.iter().map(DocId::get).collect()
}

/// Posting set from plain integers, which must be strictly ascending.
pub fn set(ids: &[u32]) -> PostingSet {
    PostingSet::from_sorted(ids.iter().copied().map(DocId).collect())
}

// ============================================================================
// INVARIANT CHECKS
// ============================================================================

/// Every structural property a built index must have.
pub fn assert_index_well_formed(index: &InvertedIndex) {
    let terms = index.terms();
    for pair in terms.windows(2) {
        assert!(
            pair[0].token() < pair[1].token(),
            "vocabulary not strictly sorted: {:?} then {:?}",
            pair[0].token(),
            pair[1].token()
        );
    }
    for term in terms {
        assert!(!term.token().is_empty(), "empty token in vocabulary");
        assert!(!term.postings().is_empty(), "term {} has no postings", term);
        for pair in term.postings().as_slice().windows(2) {
            assert!(pair[0] < pair[1], "postings of {} not ascending", term.token());
        }
        for id in term.postings() {
            assert!(
                index.all_documents().contains(*id),
                "term {} posts unknown document {}",
                term.token(),
                id
            );
        }
    }
    let expected: Vec<u32> = (0..index.doc_count() as u32).collect();
    assert_eq!(ids(index.all_documents()), expected);
}

/// Token-by-token and posting-by-posting equality.
pub fn assert_same_index(a: &InvertedIndex, b: &InvertedIndex) {
    assert_eq!(a.all_documents(), b.all_documents());
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(
        a.vocabulary().collect::<Vec<_>>(),
        b.vocabulary().collect::<Vec<_>>()
    );
    for (x, y) in a.terms().iter().zip(b.terms()) {
        assert_eq!(x.postings(), y.postings(), "postings differ for {}", x.token());
    }
}

// ============================================================================
// ON-DISK CORPORA
// ============================================================================

/// Write `corpus` as a JSON array of {title, text}.
pub fn write_json_corpus(path: &Path, corpus: &[Document]) {
    let json = serde_json::to_string_pretty(corpus).expect("corpus serializes");
    fs::write(path, json).expect("Failed to write JSON corpus");
}

/// Write a CMU movie-summary pair into `dir`.
///
/// Metadata lists three movies; the plots file has one extra plot whose id has
/// no metadata row, which loaders must skip.
pub fn write_movie_summaries(dir: &Path) {
    fs::write(
        dir.join("movie.metadata.tsv"),
        "975900\t/m/03vyhn\tGhosts of Mars\t2001-08-24\t14010832\t98.0\n\
         3196793\t/m/08yl5d\tGetting Away with Murder: The JonBenét Ramsey Mystery\t2000-02-16\n\
         28463795\t/m/0crgdbh\tBrun bitter\t1988\n",
    )
    .expect("Failed to write metadata");
    fs::write(
        dir.join("plot_summaries.txt"),
        "3196793\tThe plot follows a murder investigation in Colorado.\n\
         99999999\tThis plot has no metadata row.\n\
         975900\tSet in the second half of the 22nd century, Mars has been colonised.\n\
         28463795\tA detective novelist investigates a murder in Oslo.\n",
    )
    .expect("Failed to write plots");
}
