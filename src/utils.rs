// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! The same `normalize` runs over documents at build time and over query words
//! at query time. If the two ever disagree, "Gandalf" in a query never finds
//! "gandalf" in the index.

/// Characters that survive normalization: word characters, whitespace, hyphens.
#[inline]
fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace()
}

/// Normalize a string for indexing: drop punctuation, then lowercase.
///
/// Word characters (Unicode alphanumerics and `_`), whitespace and hyphens are
/// kept, everything else is removed in place, so "Luke's" becomes "lukes" and
/// "x-wing" stays "x-wing".
///
/// ```ignore
/// assert_eq!(normalize("Yoda, Luke!"), "yoda luke");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| is_kept(c))
        .collect::<String>()
        .to_lowercase()
}

/// Split document text into normalized tokens, in document order.
///
/// Duplicates are kept: the index builder has to see every occurrence.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Calculate the common prefix length of two byte strings.
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
