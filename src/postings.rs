// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted, duplicate-free document id sets and the set algebra over them.
//!
//! Everything a Boolean query does reduces to three linear merges over sorted
//! vectors: intersection for AND, union for OR, difference for NOT. Each walks
//! both inputs once with two cursors, so the cost is `O(|a| + |b|)` and the
//! output comes out sorted without any extra work.
//!
//! # Invariant
//!
//! **STRICTLY_ASCENDING**: for every adjacent pair `(a, b)`, `a < b`.
//!
//! The pure operations preserve it for free. The two ways to break it are the
//! constructors that take caller-owned data (`from_sorted`) and the append-only
//! `merge`. Both document the precondition and check it with `debug_assert!`
//! only, so release builds pay nothing.
//!
//! # References
//!
//! - Manning, Raghavan, Schütze (2008): "Introduction to Information Retrieval",
//!   §1.3 "Processing Boolean queries" (the two-pointer intersection).

use std::cmp::Ordering;
use std::fmt;

use crate::contracts::check_strictly_ascending;
use crate::types::DocId;

/// An ordered set of document ids, the posting list of a term or the result of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PostingSet {
    ids: Vec<DocId>,
}

impl PostingSet {
    /// The empty set.
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// A set holding exactly one document.
    pub fn from_doc(id: DocId) -> Self {
        Self { ids: vec![id] }
    }

    /// Take ownership of an already sorted, duplicate-free vector.
    ///
    /// # Precondition
    ///
    /// `ids` must be strictly ascending. This is not validated at runtime;
    /// debug builds assert it.
    pub fn from_sorted(ids: Vec<DocId>) -> Self {
        check_strictly_ascending(&ids);
        Self { ids }
    }

    /// Append `other` to the end of this set, in place.
    ///
    /// This is the build-time fast path: documents are indexed in ascending id
    /// order, so a term's new postings always land after its existing ones.
    /// A leading run of `other` equal to our last id is skipped, which makes
    /// re-adding the current document a no-op. Nothing else is deduplicated.
    ///
    /// # Precondition
    ///
    /// Every id in `other` is `>=` the last id in `self`. Violating it leaves
    /// the set unsorted. Debug builds assert the boundary; release builds
    /// trust the caller.
    pub fn merge(&mut self, other: PostingSet) {
        let mut incoming = other.ids.into_iter().peekable();

        if let Some(&last) = self.ids.last() {
            debug_assert!(
                incoming.peek().map_or(true, |&first| first >= last),
                "Contract violation: PostingSet::merge - incoming {:?} precedes last {:?}",
                incoming.peek(),
                last
            );
            while incoming.next_if_eq(&last).is_some() {}
        }

        self.ids.extend(incoming);
    }

    /// Documents present in both sets (AND).
    pub fn intersection(&self, other: &PostingSet) -> PostingSet {
        let (a, b) = (&self.ids, &other.ids);
        let mut out = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }

        PostingSet { ids: out }
    }

    /// Documents present in either set (OR).
    pub fn union(&self, other: &PostingSet) -> PostingSet {
        let (a, b) = (&self.ids, &other.ids);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
                Ordering::Less => {
                    out.push(a[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    out.push(b[j]);
                    j += 1;
                }
            }
        }

        // At most one side has anything left
        out.extend_from_slice(&a[i..]);
        out.extend_from_slice(&b[j..]);

        PostingSet { ids: out }
    }

    /// Documents in `self` that are not in `other` (`self AND NOT other`).
    pub fn difference(&self, other: &PostingSet) -> PostingSet {
        let (a, b) = (&self.ids, &other.ids);
        let mut out = Vec::with_capacity(a.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                Ordering::Less => {
                    out.push(a[i]);
                    i += 1;
                }
                Ordering::Greater => j += 1,
            }
        }

        out.extend_from_slice(&a[i..]);

        PostingSet { ids: out }
    }

    /// Membership test by binary search.
    pub fn contains(&self, id: DocId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[DocId] {
        &self.ids
    }
}

impl<'a> IntoIterator for &'a PostingSet {
    type Item = &'a DocId;
    type IntoIter = std::slice::Iter<'a, DocId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl IntoIterator for PostingSet {
    type Item = DocId;
    type IntoIter = std::vec::IntoIter<DocId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

impl fmt::Display for PostingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}
