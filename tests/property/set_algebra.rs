//! Posting set algebra.
//!
//! Intersection, union and difference must agree with `BTreeSet`, keep their
//! output strictly ascending, and obey the usual set laws.

use std::collections::BTreeSet;

use proptest::prelude::*;
use sift::{DocId, PostingSet};

use super::common::ids;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random id sets, small enough that overlaps are common.
fn id_set_strategy() -> impl Strategy<Value = BTreeSet<u32>> {
    prop::collection::btree_set(0u32..64, 0..24)
}

fn to_postings(set: &BTreeSet<u32>) -> PostingSet {
    PostingSet::from_sorted(set.iter().copied().map(DocId).collect())
}

fn assert_strictly_ascending(postings: &PostingSet) -> Result<(), TestCaseError> {
    for pair in postings.as_slice().windows(2) {
        prop_assert!(pair[0] < pair[1], "not strictly ascending: {}", postings);
    }
    Ok(())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: every operation matches the reference set implementation.
    #[test]
    fn prop_operations_match_btreeset(a in id_set_strategy(), b in id_set_strategy()) {
        let (pa, pb) = (to_postings(&a), to_postings(&b));

        let expected: Vec<u32> = a.intersection(&b).copied().collect();
        prop_assert_eq!(ids(&pa.intersection(&pb)), expected);

        let expected: Vec<u32> = a.union(&b).copied().collect();
        prop_assert_eq!(ids(&pa.union(&pb)), expected);

        let expected: Vec<u32> = a.difference(&b).copied().collect();
        prop_assert_eq!(ids(&pa.difference(&pb)), expected);
    }

    /// Property: results stay strictly ascending with no duplicates.
    #[test]
    fn prop_results_strictly_ascending(a in id_set_strategy(), b in id_set_strategy()) {
        let (pa, pb) = (to_postings(&a), to_postings(&b));
        assert_strictly_ascending(&pa.intersection(&pb))?;
        assert_strictly_ascending(&pa.union(&pb))?;
        assert_strictly_ascending(&pa.difference(&pb))?;
    }

    /// Property: AND and OR are commutative; NOT is not, but its two sides
    /// are disjoint.
    #[test]
    fn prop_commutativity(a in id_set_strategy(), b in id_set_strategy()) {
        let (pa, pb) = (to_postings(&a), to_postings(&b));
        prop_assert_eq!(pa.intersection(&pb), pb.intersection(&pa));
        prop_assert_eq!(pa.union(&pb), pb.union(&pa));
        prop_assert!(pa.difference(&pb).intersection(&pb.difference(&pa)).is_empty());
    }

    /// Property: AND and OR are associative.
    #[test]
    fn prop_associativity(
        a in id_set_strategy(),
        b in id_set_strategy(),
        c in id_set_strategy(),
    ) {
        let (pa, pb, pc) = (to_postings(&a), to_postings(&b), to_postings(&c));
        prop_assert_eq!(
            pa.intersection(&pb).intersection(&pc),
            pa.intersection(&pb.intersection(&pc))
        );
        prop_assert_eq!(pa.union(&pb).union(&pc), pa.union(&pb.union(&pc)));
    }

    /// Property: |A ∪ B| = |A| + |B| - |A ∩ B|, and A is split exactly into
    /// A ∩ B and A - B.
    #[test]
    fn prop_sizes_add_up(a in id_set_strategy(), b in id_set_strategy()) {
        let (pa, pb) = (to_postings(&a), to_postings(&b));
        let both = pa.intersection(&pb);
        prop_assert_eq!(pa.union(&pb).len(), pa.len() + pb.len() - both.len());
        prop_assert_eq!(pa.difference(&pb).len() + both.len(), pa.len());
        prop_assert_eq!(pa.difference(&pb).union(&both), pa);
    }

    /// Property: merging a set whose ids all come at or after the last id
    /// behaves like union.
    #[test]
    fn prop_append_merge_is_union(a in id_set_strategy(), b in id_set_strategy()) {
        let pa = to_postings(&a);
        let offset = a.iter().next_back().copied().unwrap_or(0);
        let shifted: BTreeSet<u32> = b.iter().map(|id| id + offset).collect();
        let pb = to_postings(&shifted);

        let mut merged = pa.clone();
        merged.merge(pb.clone());
        prop_assert_eq!(merged, pa.union(&pb));
    }
}
