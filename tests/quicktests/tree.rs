use containers::BinarySearchTree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::TreeOp;

fn tree_of(xs: &[i8]) -> BinarySearchTree<i8> {
    let mut tree = BinarySearchTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking after every
/// step that both agree on what is stored.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<TreeOp<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    ops.iter().all(|op| {
        let agrees = match op {
            TreeOp::Insert(x) => tree.insert(*x) == set.insert(*x),
            TreeOp::Search(x) => tree.contains(x) == set.contains(x),
            TreeOp::Clone => {
                let copy = tree.clone();
                let same_shape = copy.pre_order().eq(tree.pre_order());
                tree = copy;
                same_shape
            }
            TreeOp::Clear => {
                tree.clear();
                set.clear();
                true
            }
        };
        agrees && tree.len() == set.len() && tree.in_order().eq(set.iter())
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn in_order_is_sorted_and_unique(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let in_order: Vec<_> = tree.in_order().copied().collect();

    in_order.windows(2).all(|pair| pair[0] < pair[1])
        && in_order.len() == xs.iter().collect::<BTreeSet<_>>().len()
}

#[quickcheck]
fn root_is_first_in_pre_order_and_last_in_post_order(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    // The first value inserted is always the root.
    tree.pre_order().next() == xs.first() && tree.post_order().last() == xs.first()
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let mut in_order: Vec<_> = tree.in_order().collect();
    let mut pre_order: Vec<_> = tree.pre_order().collect();
    let mut post_order: Vec<_> = tree.post_order().collect();
    in_order.sort();
    pre_order.sort();
    post_order.sort();

    in_order == pre_order && pre_order == post_order
}

#[quickcheck]
fn pre_order_rebuilds_the_same_tree(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let rebuilt = tree_of(&tree.pre_order().copied().collect::<Vec<_>>());

    rebuilt.pre_order().eq(tree.pre_order()) && rebuilt.post_order().eq(tree.post_order())
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, extra: Vec<i8>) -> bool {
    let source = tree_of(&xs);
    let before: Vec<_> = source.in_order().copied().collect();

    let mut copy = source.clone();
    let same_shape = copy.pre_order().eq(source.pre_order());
    for x in &extra {
        copy.insert(*x);
    }

    same_shape && source.in_order().copied().eq(before) && extra.iter().all(|x| copy.contains(x))
}

#[quickcheck]
fn clone_from_matches_source(xs: Vec<i8>, old: Vec<i8>) -> bool {
    let source = tree_of(&xs);
    let mut target = tree_of(&old);
    target.clone_from(&source);

    target.len() == source.len() && target.pre_order().eq(source.pre_order())
}
