//! Corpus providers reading from disk.

use super::common::{movie_corpus, write_json_corpus, write_movie_summaries};
use sift::corpus::{load_corpus, load_json_corpus, load_movie_summaries};
use sift::{QueryMode, QueryOptions, RetrievalSession};
use std::fs;
use std::io;
use tempfile::TempDir;

#[test]
fn test_movie_summaries_join_titles_in_plot_order() {
    let dir = TempDir::new().unwrap();
    write_movie_summaries(dir.path());

    let corpus = load_movie_summaries(
        &dir.path().join("plot_summaries.txt"),
        &dir.path().join("movie.metadata.tsv"),
    )
    .unwrap();

    let titles: Vec<&str> = corpus.iter().map(|doc| doc.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Getting Away with Murder: The JonBenét Ramsey Mystery",
            "Ghosts of Mars",
            "Brun bitter",
        ]
    );
    assert!(corpus[1].text.starts_with("Set in the second half"));
}

#[test]
fn test_directory_is_read_as_movie_summaries() {
    let dir = TempDir::new().unwrap();
    write_movie_summaries(dir.path());

    let session = RetrievalSession::from_corpus(load_corpus(dir.path()).unwrap()).unwrap();
    let answer = session
        .query(QueryMode::And, "murder investigation", QueryOptions::default())
        .unwrap();
    assert_eq!(answer.documents.len(), 1);
    assert_eq!(
        answer.documents[0].title,
        "Getting Away with Murder: The JonBenét Ramsey Mystery"
    );

    let answer = session
        .query(QueryMode::Or, "murder", QueryOptions::default())
        .unwrap();
    assert_eq!(answer.documents.len(), 2);
}

#[test]
fn test_json_file_round_trips_documents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.json");
    write_json_corpus(&path, &movie_corpus());

    assert_eq!(load_json_corpus(&path).unwrap(), movie_corpus());
    assert_eq!(load_corpus(&path).unwrap(), movie_corpus());
}

#[test]
fn test_malformed_json_is_invalid_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"title": "no text field"}]"#).unwrap();

    let err = load_corpus(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_directory_without_metadata_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plot_summaries.txt"), "1\tA plot.\n").unwrap();

    let err = load_corpus(dir.path()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(err.to_string().contains("movie.metadata.tsv"));
}
