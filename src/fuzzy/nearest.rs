// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Nearest vocabulary term for a misspelled word.

use super::levenshtein::edit_distance_within;

/// The candidate closest to `word` by edit distance.
///
/// Ties go to the lexicographically smallest candidate: the winner is the
/// minimum `(distance, candidate)` pair, independent of iteration order.
///
/// With `same_first_letter`, only candidates starting with the same character
/// as `word` are considered. That is a speed/precision trade-off (it assumes
/// the first letter is rarely the typo), not something correctness needs.
///
/// Returns `None` when no candidate is eligible.
///
/// The current best distance bounds every later comparison, so most
/// candidates are rejected by the length check or after a few DP rows.
pub fn find_nearest<'a, I>(word: &str, vocabulary: I, same_first_letter: bool) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let first = word.chars().next();
    let mut best: Option<(usize, &'a str)> = None;

    for candidate in vocabulary {
        if same_first_letter && candidate.chars().next() != first {
            continue;
        }

        let bound = best.map_or(usize::MAX, |(distance, _)| distance);
        let Some(distance) = edit_distance_within(word, candidate, bound) else {
            continue;
        };

        if best.map_or(true, |current| (distance, candidate) < current) {
            best = Some((distance, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}
