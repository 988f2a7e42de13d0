use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::r;

#[test]
fn set_deduplicates_and_sorts() {
    let set: BTreeSet<_> = [r(1, 2), r(1, 25), r(3, 4), r(3, 4), r(1, 2)].into();
    assert_eq!(set.len(), 3);

    let sorted: Vec<_> = set.into_iter().collect();
    assert_eq!(sorted, [r(1, 25), r(1, 2), r(3, 4)]);
}

#[test]
fn map_counts_equal_fractions_together() {
    let mut count = BTreeMap::new();

    for value in [r(1, 2), r(2, 4), r(2, 3)] {
        *count.entry(value).or_insert(0) += 1;
    }

    assert_eq!(count.len(), 2);
    assert_eq!(count[&r(1, 2)], 2);
}

#[test]
fn hash_agrees_with_equality() {
    let set: HashSet<_> = [r(1, 2), r(-2, -4), r(3, 6)].into();
    assert_eq!(set.len(), 1);
}
