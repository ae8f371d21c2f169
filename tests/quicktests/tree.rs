use std::collections::HashSet;

use ordered_tree::{NotFoundError, OrderedTree};
use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn inorder_is_always_sorted(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<i16> = xs.iter().copied().collect();

    let sorted: Vec<i16> = tree.inorder().copied().collect();
    let mut expected = xs;
    expected.sort();

    sorted == expected
}

#[quickcheck]
fn size_is_adds_minus_successful_removes(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let mut model = xs;

    for remove in &removes {
        match model.iter().position(|m| m == remove) {
            Some(pos) => {
                model.remove(pos);
                if tree.remove(remove) != Ok(*remove) {
                    return false;
                }
            }
            None => {
                // A miss must error and must not disturb the size.
                if tree.remove(remove) != Err(NotFoundError) {
                    return false;
                }
            }
        }
    }

    tree.len() == model.len()
}

#[quickcheck]
fn find_hits_iff_added_and_not_removed(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let added: HashSet<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
        && probes
            .iter()
            .all(|p| tree.find(p).is_some() == added.contains(p))
}

#[quickcheck]
fn recursive_and_iterative_entry_points_agree(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let mut recursive = OrderedTree::new();
    let mut iterative = OrderedTree::new();
    for x in &xs {
        recursive.add(*x);
        iterative.add_without_recursion(*x);
    }

    probes.iter().chain(xs.iter()).all(|p| {
        let hit = recursive.find(p);
        hit == recursive.find_without_recursion(p)
            && hit == iterative.find(p)
            && hit == iterative.find_without_recursion(p)
    })
}

#[quickcheck]
fn rebalance_preserves_values_and_minimizes_height(xs: Vec<i16>) -> bool {
    let mut tree: OrderedTree<i16> = xs.iter().copied().collect();
    let before: Vec<i16> = tree.inorder().copied().collect();

    tree.rebalance();

    let after: Vec<i16> = tree.inorder().copied().collect();
    let minimal = ((tree.len() + 1) as f64).log2().ceil() as isize;

    before == after && tree.height() <= minimal
}

#[quickcheck]
fn rebalanced_trees_are_balanced(xs: Vec<i16>) -> bool {
    let mut tree: OrderedTree<i16> = xs.iter().copied().collect();
    tree.rebalance();

    match tree.len() {
        // Trivial trees report unbalanced by convention.
        0 | 1 => !tree.is_balanced(),
        _ => tree.is_balanced(),
    }
}

#[quickcheck]
fn removals_preserve_the_ordering_invariant(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model: Vec<i8> = Vec::new();

    for op in &ops {
        match op {
            Op::Add(x) => {
                tree.add(*x);
                model.push(*x);
            }
            Op::Remove(x) => {
                let expected = model.iter().position(|m| m == x).map(|pos| model.remove(pos));
                let outcome = tree.remove(x);
                match expected {
                    Some(value) => {
                        if outcome != Ok(value) {
                            return false;
                        }
                    }
                    None => {
                        if outcome != Err(NotFoundError) {
                            return false;
                        }
                    }
                }
                // Full in-order re-check after every deletion.
                let sorted: Vec<i8> = tree.inorder().copied().collect();
                if sorted.windows(2).any(|pair| pair[0] > pair[1]) {
                    return false;
                }
            }
            Op::Rebalance => tree.rebalance(),
        }
    }

    let mut expected = model;
    expected.sort();
    tree.inorder().copied().collect::<Vec<i8>>() == expected && tree.len() == expected.len()
}

#[quickcheck]
fn successor_and_predecessor_bracket_any_probe(xs: Vec<i16>, probe: i16) -> bool {
    let tree: OrderedTree<i16> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    let expected_successor = sorted.iter().find(|&&e| e > probe);
    let expected_predecessor = sorted.iter().rev().find(|&&e| e < probe);

    tree.successor(&probe) == expected_successor && tree.predecessor(&probe) == expected_predecessor
}

#[quickcheck]
fn range_find_matches_a_sorted_filter(xs: Vec<i16>, low: i16, high: i16) -> bool {
    let tree: OrderedTree<i16> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    let expected: Vec<&i16> = sorted.iter().filter(|&&e| low <= e && e <= high).collect();

    tree.range_find(&low, &high) == expected
}
