// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! Insertions, deletions and substitutions all cost 1; matching characters cost
//! 0. Distances count Unicode scalar values, not bytes.
//!
//! The bounded variant uses two lower bounds to skip work:
//! `|len(a) - len(b)|` before allocating anything, and the minimum of the
//! current DP row after each row. Both are sound, so a bounded call never
//! rejects a pair whose true distance is within the bound.

/// Levenshtein distance between `u` and `v`.
///
/// The classic `O(|u|·|v|)` table, kept as two rolling rows: row 0 is
/// `0..=|v|`, column 0 is the row index.
pub fn edit_distance(u: &str, v: &str) -> usize {
    let v_chars: Vec<char> = v.chars().collect();
    let mut prev: Vec<usize> = (0..=v_chars.len()).collect();
    let mut curr = vec![0; v_chars.len() + 1];

    for (i, uc) in u.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &vc) in v_chars.iter().enumerate() {
            let substitution = prev[j] + usize::from(uc != vc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[v_chars.len()]
}

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Returns `None` as soon as the distance provably exceeds `max`:
/// 1. If the length difference exceeds `max`, without touching the DP
/// 2. If every cell of a DP row exceeds `max`, abandoning the remaining rows
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|&distance| distance <= max)
}
