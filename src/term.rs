// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A vocabulary entry: a normalized token and the documents it occurs in.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, SiftError};
use crate::postings::PostingSet;
use crate::types::DocId;

/// A normalized token bound to its posting set.
///
/// Equality and ordering look at the token only, so a sorted `Vec<Term>` is a
/// sorted vocabulary regardless of what the postings hold.
#[derive(Debug, Clone)]
pub struct Term {
    token: String,
    postings: PostingSet,
}

impl Term {
    /// One occurrence of `token` in document `doc`.
    pub fn new(token: impl Into<String>, doc: DocId) -> Self {
        Self {
            token: token.into(),
            postings: PostingSet::from_doc(doc),
        }
    }

    pub fn with_postings(token: impl Into<String>, postings: PostingSet) -> Self {
        Self {
            token: token.into(),
            postings,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn postings(&self) -> &PostingSet {
        &self.postings
    }

    /// Fold another occurrence of the same token into this one.
    ///
    /// `other`'s postings are appended with [`PostingSet::merge`], so they must
    /// not precede ours. Merging a different token is a `MergeConflict`.
    pub fn merge(&mut self, other: Term) -> Result<()> {
        if self.token != other.token {
            return Err(SiftError::MergeConflict {
                left: self.token.clone(),
                right: other.token,
            });
        }
        self.postings.merge(other.postings);
        Ok(())
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Term {}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.token.cmp(&other.token)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.postings)
    }
}
