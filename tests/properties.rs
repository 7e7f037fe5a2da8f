use std::collections::BTreeSet;

use bstree::bst_base::{iter::TraversalOrder, DefaultBst};
use quickcheck_macros::quickcheck;

fn build(values: &[i16]) -> DefaultBst<i16> {
    let mut tree = DefaultBst::new();
    for &value in values {
        tree.insert(value);
    }
    tree
}

#[quickcheck]
fn in_order_is_strictly_ascending(values: Vec<i16>) -> bool {
    let tree = build(&values);
    let walked: Vec<i16> = tree.iter().copied().collect();
    walked.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn len_counts_distinct_values(values: Vec<i16>) -> bool {
    let tree = build(&values);
    let distinct: BTreeSet<i16> = values.iter().copied().collect();
    tree.len() == distinct.len()
}

#[quickcheck]
fn contains_everything_inserted(values: Vec<i16>) -> bool {
    let tree = build(&values);
    values.iter().all(|value| tree.contains(value))
}

#[quickcheck]
fn extremes_match_the_walk(values: Vec<i16>) -> bool {
    let tree = build(&values);
    let walked: Vec<i16> = tree.iter().copied().collect();
    match (walked.first(), walked.last()) {
        (Some(first), Some(last)) => {
            tree.minimum() == Ok(first) && tree.maximum() == Ok(last)
        }
        _ => tree.minimum().is_err() && tree.maximum().is_err(),
    }
}

#[quickcheck]
fn remove_missing_leaves_the_tree_unchanged(values: Vec<i16>, probe: i16) -> bool {
    let mut tree = build(&values);
    let before: Vec<i16> = tree.iter().copied().collect();

    let was_present = values.contains(&probe);
    let removed = tree.remove(&probe);
    let after: Vec<i16> = tree.iter().copied().collect();

    if was_present {
        removed && !tree.contains(&probe) && after.len() + 1 == before.len()
    } else {
        !removed && after == before
    }
}

#[quickcheck]
fn removing_everything_empties_the_tree(values: Vec<i16>) -> bool {
    let mut tree = build(&values);
    let distinct: BTreeSet<i16> = values.iter().copied().collect();

    for value in &distinct {
        if !tree.remove(value) {
            return false;
        }
    }

    tree.is_empty() && tree.minimum().is_err() && tree.maximum().is_err()
}

#[quickcheck]
fn traversals_agree_on_the_element_set(values: Vec<i16>) -> bool {
    let tree = build(&values);

    let by_order = |order| -> BTreeSet<i16> { tree.traverse(order).copied().collect() };
    let in_order = by_order(TraversalOrder::InOrder);
    let pre_order = by_order(TraversalOrder::PreOrder);
    let post_order = by_order(TraversalOrder::PostOrder);

    in_order == pre_order
        && in_order == post_order
        && tree.traverse(TraversalOrder::PreOrder).count() == tree.len()
}

#[quickcheck]
fn matches_std_btreeset(ops: Vec<(bool, i16)>) -> bool {
    let mut tree = DefaultBst::new();
    let mut reference = BTreeSet::new();

    for (is_insert, value) in ops {
        if is_insert {
            tree.insert(value);
            reference.insert(value);
        } else {
            let removed = tree.remove(&value);
            let reference_removed = reference.remove(&value);
            if removed != reference_removed {
                return false;
            }
        }
    }

    tree.len() == reference.len()
        && tree.iter().copied().collect::<Vec<_>>() == reference.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn stats_balance_out(values: Vec<i16>, removals: Vec<i16>) -> bool {
    let mut tree = build(&values);
    for value in &removals {
        tree.remove(value);
    }

    let stats = tree.stats();
    stats.created - stats.removed == stats.size
}
