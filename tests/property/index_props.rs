//! Inverted index property tests.
//!
//! These tests verify index invariants over random corpora:
//! - Vocabulary is strictly sorted and every term has postings
//! - Posting lists are strictly ascending and point at real documents
//! - A term's postings are exactly the documents whose tokens contain it
//! - Every token of every document is in the vocabulary

use proptest::prelude::*;
use sift::{normalize, tokenize, InvertedIndex};

use super::common::{assert_index_well_formed, ids, make_corpus};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like strings with occasional capitals and punctuation.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-fA-F]{1,4}[,.!']?").unwrap()
}

/// Generate random document text (multiple words).
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..10).prop_map(|words| words.join(" "))
}

/// Generate a corpus of documents.
fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 0..12)
}

fn build(texts: &[String]) -> InvertedIndex {
    let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
    InvertedIndex::build(&make_corpus(&texts)).unwrap()
}

// ============================================================================
// INVERTED INDEX PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a built index is always well formed.
    #[test]
    fn prop_index_well_formed(corpus in corpus_strategy()) {
        let index = build(&corpus);
        assert_index_well_formed(&index);
        prop_assert_eq!(index.doc_count(), corpus.len());
    }

    /// Property: postings are exactly the documents containing the token.
    #[test]
    fn prop_postings_match_brute_force(corpus in corpus_strategy()) {
        let index = build(&corpus);
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|text| tokenize(text)).collect();

        for term in index.terms() {
            let expected: Vec<u32> = tokenized
                .iter()
                .enumerate()
                .filter(|(_, tokens)| tokens.iter().any(|t| t == term.token()))
                .map(|(id, _)| id as u32)
                .collect();
            prop_assert_eq!(ids(term.postings()), expected, "token {}", term.token());
        }
    }

    /// Property: every document token can be looked up and lists its document.
    #[test]
    fn prop_every_token_is_indexed(corpus in corpus_strategy()) {
        let index = build(&corpus);
        for (id, text) in corpus.iter().enumerate() {
            for token in tokenize(text) {
                let postings = index.lookup(&token).unwrap();
                prop_assert!(ids(postings).contains(&(id as u32)));
            }
        }
    }

    /// Property: normalization is idempotent, so normalized query words find
    /// what the builder stored.
    #[test]
    fn prop_normalize_idempotent(text in "[a-zA-Z0-9éÜñ _,.!?'-]{0,20}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
