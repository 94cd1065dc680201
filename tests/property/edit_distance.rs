//! Edit distance and nearest-term lookup.
//!
//! `strsim::levenshtein` is the oracle: an independent implementation of the
//! same metric. The bounded variant and `find_nearest` must agree with it and
//! with a brute-force minimum over the candidates.

use proptest::prelude::*;
use sift::{edit_distance, edit_distance_within, find_nearest};

fn short_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eé]{0,10}").unwrap()
}

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(prop::string::string_regex("[a-e]{1,8}").unwrap(), 0..30)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: matches the oracle exactly.
    #[test]
    fn diff_edit_distance(a in short_word(), b in short_word()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Differential test: the bounded variant returns the distance iff it is
    /// within the bound.
    #[test]
    fn diff_edit_distance_within(a in short_word(), b in short_word(), max in 0usize..6) {
        let oracle = strsim::levenshtein(&a, &b);
        let expected = (oracle <= max).then_some(oracle);
        prop_assert_eq!(edit_distance_within(&a, &b, max), expected);
    }

    /// Property: metric laws (identity, symmetry, triangle inequality).
    #[test]
    fn prop_metric_laws(a in short_word(), b in short_word(), c in short_word()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
        prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
    }

    /// Property: bounds from lengths.
    #[test]
    fn prop_length_bounds(a in short_word(), b in short_word()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Differential test: pruned nearest lookup equals the brute-force
    /// minimum of (distance, candidate).
    #[test]
    fn diff_find_nearest(
        word in short_word(),
        vocab in vocabulary(),
        same_first_letter in any::<bool>(),
    ) {
        let first = word.chars().next();
        let expected = vocab
            .iter()
            .filter(|c| !same_first_letter || c.chars().next() == first)
            .map(|c| (strsim::levenshtein(&word, c), c.as_str()))
            .min()
            .map(|(_, c)| c);

        let got = find_nearest(&word, vocab.iter().map(String::as_str), same_first_letter);
        prop_assert_eq!(got, expected);
    }

    /// Property: candidate order does not change the answer.
    #[test]
    fn prop_find_nearest_order_independent(word in short_word(), vocab in vocabulary()) {
        let forward = find_nearest(&word, vocab.iter().map(String::as_str), false);
        let backward = find_nearest(&word, vocab.iter().rev().map(String::as_str), false);
        prop_assert_eq!(forward, backward);
    }
}
