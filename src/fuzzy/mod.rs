// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling correction: typo tolerance via edit distance.
//!
//! Two layers here: the edit distance itself (full and bounded), and
//! `find_nearest`, which scans a vocabulary for the closest term. Correction
//! only runs when a query word misses the index, so a linear scan is fine.

mod levenshtein;
mod nearest;

pub use levenshtein::*;
pub use nearest::*;
