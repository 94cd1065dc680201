// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! These are debug-mode assertions: zero-cost in release builds (everything is
//! behind `debug_assert!` or `cfg!(debug_assertions)`), loud during development
//! and in the test suite.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_strictly_ascending`   | posting ids are sorted with no duplicates       |
//! | `check_vocabulary_sorted`    | terms are sorted by token with no duplicates    |
//! | `check_index_well_formed`    | both of the above, plus postings ⊆ all docs     |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if the invariant is violated
//! check_index_well_formed(&index);
//!
//! // In release builds, this is a no-op
//! ```

use crate::inverted::InvertedIndex;
use crate::term::Term;
use crate::types::DocId;

// ============================================================================
// POSTING CONTRACTS
// ============================================================================

/// Check that document ids are strictly ascending.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair `(a, b)` with `a >= b`.
#[inline]
pub fn check_strictly_ascending(ids: &[DocId]) {
    if cfg!(debug_assertions) {
        for (i, pair) in ids.windows(2).enumerate() {
            debug_assert!(
                pair[0] < pair[1],
                "Contract violation: postings not strictly ascending at {} ({} >= {})",
                i + 1,
                pair[0],
                pair[1]
            );
        }
    }
}

// ============================================================================
// VOCABULARY CONTRACTS
// ============================================================================

/// Check that terms are sorted by token and that no token appears twice.
///
/// Lookup is a binary search over this order, so a violation here turns into
/// silent misses rather than a crash.
#[inline]
pub fn check_vocabulary_sorted(terms: &[Term]) {
    if cfg!(debug_assertions) {
        for (i, pair) in terms.windows(2).enumerate() {
            debug_assert!(
                pair[0].token() < pair[1].token(),
                "Contract violation: vocabulary not sorted at {} ('{}' >= '{}')",
                i + 1,
                pair[0].token(),
                pair[1].token()
            );
        }
    }
}

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check every structural invariant of a built or decoded index.
#[inline]
pub fn check_index_well_formed(index: &InvertedIndex) {
    if cfg!(debug_assertions) {
        check_vocabulary_sorted(index.terms());
        check_strictly_ascending(index.all_documents().as_slice());

        for term in index.terms() {
            debug_assert!(
                !term.postings().is_empty(),
                "Contract violation: term '{}' has no postings",
                term.token()
            );
            check_strictly_ascending(term.postings().as_slice());
            debug_assert!(
                term.postings()
                    .iter()
                    .all(|id| index.all_documents().contains(id)),
                "Contract violation: term '{}' refers to a document outside the corpus",
                term.token()
            );
        }
    }
}
