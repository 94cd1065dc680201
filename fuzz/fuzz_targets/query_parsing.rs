// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query evaluators.
//!
//! Arbitrary query text must come back as Ok or a typed error. Whatever is
//! returned must be a strictly ascending subset of the indexed documents.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::testing::star_wars_index;
use sift::{QueryEngine, QueryMode, QueryOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    mode: u8,
    correct: bool,
    same_first_letter: bool,
    query: String,
}

fuzz_target!(|input: Input| {
    let index = star_wars_index();
    let mode = match input.mode % 5 {
        0 => QueryMode::And,
        1 => QueryMode::Or,
        2 => QueryMode::Not,
        3 => QueryMode::Flat,
        _ => QueryMode::Grouped,
    };
    let options = QueryOptions {
        spelling_correction: input.correct,
        same_first_letter: input.same_first_letter,
    };

    let Ok(evaluation) = QueryEngine::new(&index, options).evaluate(mode, &input.query) else {
        return;
    };

    let ids = evaluation.postings.as_slice();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "unsorted result: {:?}", ids);
    assert!(
        ids.iter().all(|id| index.all_documents().contains(*id)),
        "result outside the corpus: {:?}",
        ids
    );
});
