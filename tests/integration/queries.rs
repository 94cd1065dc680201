//! Query evaluation end to end: toy corpus, realistic plots, corrections.

use super::common::{ids, movie_corpus, star_wars_corpus, star_wars_index};
use sift::{
    Correction, QueryEngine, QueryMode, QueryOptions, RetrievalSession, SiftError,
};

fn engine_ids(mode: QueryMode, query: &str) -> Vec<u32> {
    let index = star_wars_index();
    let engine = QueryEngine::new(&index, QueryOptions::default());
    let evaluation = engine
        .evaluate(mode, query)
        .unwrap_or_else(|e| panic!("{} failed: {}", query, e));
    ids(&evaluation.postings)
}

// ============================================================================
// THE TOY CORPUS
// ============================================================================

#[test]
fn test_and_query() {
    assert_eq!(engine_ids(QueryMode::And, "yoda luke"), vec![0]);
}

#[test]
fn test_or_query() {
    assert_eq!(engine_ids(QueryMode::Or, "yoda gandalf"), vec![0, 1, 2]);
}

#[test]
fn test_not_query() {
    assert_eq!(engine_ids(QueryMode::Not, "yoda"), vec![2]);
}

#[test]
fn test_grouped_query() {
    assert_eq!(
        engine_ids(QueryMode::Grouped, "(yoda AND luke) OR gandalf"),
        vec![0, 2]
    );
}

#[test]
fn test_flat_query_has_no_precedence() {
    assert_eq!(
        engine_ids(QueryMode::Flat, "yoda OR darth AND gandalf"),
        Vec::<u32>::new()
    );
    assert_eq!(
        engine_ids(QueryMode::Grouped, "yoda OR (darth AND gandalf)"),
        vec![0, 1]
    );
}

#[test]
fn test_misspelling_is_corrected_when_enabled() {
    let index = star_wars_index();

    let plain = QueryEngine::new(&index, QueryOptions::default());
    assert_eq!(
        plain.and_query("yodaa luke").unwrap_err(),
        SiftError::TermNotFound {
            term: "yodaa".to_string()
        }
    );

    let correcting = QueryEngine::new(&index, QueryOptions::default().with_spelling_correction());
    let corrected = correcting.and_query("yodaa luke").unwrap();
    let exact = plain.and_query("yoda luke").unwrap();
    assert_eq!(corrected.postings, exact.postings);
    assert_eq!(
        corrected.corrections,
        vec![Correction {
            term: "yodaa".to_string(),
            suggestion: "yoda".to_string()
        }]
    );
}

#[test]
fn test_first_letter_restriction_is_configurable() {
    let index = star_wars_index();
    let restricted = QueryOptions::default().with_spelling_correction();
    let unrestricted = QueryOptions {
        spelling_correction: true,
        same_first_letter: false,
    };

    assert!(QueryEngine::new(&index, restricted)
        .or_query("xoda")
        .is_err());
    let evaluation = QueryEngine::new(&index, unrestricted)
        .or_query("xoda")
        .unwrap();
    assert_eq!(ids(&evaluation.postings), vec![0, 1]);
}

#[test]
fn test_invalid_queries_are_rejected_in_every_mode() {
    let index = star_wars_index();
    let engine = QueryEngine::new(&index, QueryOptions::default());

    for (mode, query) in [
        (QueryMode::Flat, "yoda"),
        (QueryMode::Flat, "yoda luke"),
        (QueryMode::Grouped, "(yoda AND luke"),
        (QueryMode::Grouped, "yoda"),
        (QueryMode::Grouped, "() OR yoda"),
        (QueryMode::And, ""),
        (QueryMode::Not, "  "),
    ] {
        assert!(
            matches!(
                engine.evaluate(mode, query),
                Err(SiftError::InvalidQuery { .. })
            ),
            "{:?} {:?} should be invalid",
            mode,
            query
        );
    }
}

// ============================================================================
// THROUGH A SESSION
// ============================================================================

fn titles(session: &RetrievalSession, mode: QueryMode, query: &str) -> Vec<String> {
    session
        .query(mode, query, QueryOptions::default())
        .unwrap_or_else(|e| panic!("{} failed: {}", query, e))
        .documents
        .into_iter()
        .map(|doc| doc.title.clone())
        .collect()
}

#[test]
fn test_session_maps_results_to_documents() {
    let session = RetrievalSession::from_corpus(movie_corpus()).unwrap();

    assert_eq!(
        titles(&session, QueryMode::And, "luke yoda vader"),
        vec!["The Empire Strikes Back", "Return of the Jedi"]
    );
    assert_eq!(
        titles(&session, QueryMode::Grouped, "(frodo AND gandalf) NOT returns"),
        vec!["The Fellowship of the Ring"]
    );
    assert_eq!(
        titles(&session, QueryMode::Grouped, "mother AND (love OR motel)"),
        vec!["Psycho", "Love Actually"]
    );
}

#[test]
fn test_not_query_excludes_any_listed_word() {
    let session = RetrievalSession::from_corpus(movie_corpus()).unwrap();
    let remaining = titles(&session, QueryMode::Not, "love mother luke");
    assert_eq!(
        remaining,
        vec!["The Fellowship of the Ring", "The Two Towers"]
    );
}

#[test]
fn test_query_words_are_normalized_like_documents() {
    let session = RetrievalSession::from_corpus(movie_corpus()).unwrap();
    // "Vader" is stored as "vader"; "Dagobah." lost its period
    assert_eq!(
        titles(&session, QueryMode::And, "VADER Dagobah"),
        vec!["Return of the Jedi"]
    );
}

#[test]
fn test_session_is_reusable_across_queries() {
    let session = RetrievalSession::from_corpus(star_wars_corpus()).unwrap();
    let first = titles(&session, QueryMode::Or, "gandalf");
    let _ = titles(&session, QueryMode::Not, "gandalf");
    let again = titles(&session, QueryMode::Or, "gandalf");
    assert_eq!(first, again);
}
