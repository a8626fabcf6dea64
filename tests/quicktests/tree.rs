use bstree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a `BTreeSet`, checking after each one
/// that both agree on what happened. This way we can ensure that after a random
/// smattering of adds and removals the tree holds the same set of elements.
fn do_ops<E>(ops: &[Op<E>], bst: &mut Tree<E>, set: &mut BTreeSet<E>) -> bool
where
    E: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Add(x) => bst.add(x.clone()) == set.insert(x.clone()),
            Op::RemoveMin => {
                let expected = set.iter().next().cloned();
                if let Some(x) = &expected {
                    set.remove(x);
                }
                bst.remove_min().map(|n| n.into_data()) == expected
            }
            Op::RemoveMax => {
                let expected = set.iter().next_back().cloned();
                if let Some(x) = &expected {
                    set.remove(x);
                }
                bst.remove_max().map(|n| n.into_data()) == expected
            }
            Op::Iter => bst.inorder_iter().eq(set.iter().cloned()),
        };

        if !agrees || bst.len() != set.len() || bst.is_empty() != set.is_empty() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_tracing();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && set.iter().all(|x| tree.contains(x))
        && tree.inorder_iter().eq(set.into_iter())
}

#[quickcheck]
fn len_counts_distinct(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn readding_is_rejected(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();

    xs.iter().all(|x| !tree.add(*x)) && tree.len() == len
}

#[quickcheck]
fn inorder_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let sorted: Vec<_> = tree.inorder_iter().collect();

    sorted.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn root_first_in_preorder_last_in_postorder(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    match tree.root() {
        Ok(root) => {
            tree.preorder_iter().next() == Some(*root.data())
                && tree.postorder_iter().last() == Some(*root.data())
        }
        Err(_) => tree.is_empty() && !tree.preorder_iter().has_next(),
    }
}

#[quickcheck]
fn traversals_are_permutations(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let inorder: BTreeSet<_> = tree.inorder_iter().collect();
    let preorder: BTreeSet<_> = tree.preorder_iter().collect();
    let postorder: BTreeSet<_> = tree.postorder_iter().collect();

    tree.preorder_iter().len() == tree.len()
        && tree.postorder_iter().len() == tree.len()
        && inorder == preorder
        && inorder == postorder
}

#[quickcheck]
fn removed_min_is_gone(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();

    match tree.remove_min() {
        Some(min) => {
            tree.search(min.data()).is_none()
                && tree.len() == len - 1
                && tree.min().map_or(true, |next| next > min.data())
        }
        None => len == 0,
    }
}

#[quickcheck]
fn height_between_balanced_and_list(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();
    let height = tree.height();

    // A tree of height h holds at most 2^h - 1 elements.
    height <= len
        && 1usize
            .checked_shl(height as u32)
            .map_or(true, |capacity| capacity > len)
}

#[quickcheck]
fn snapshot_unaffected_by_clear(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let expected: Vec<_> = tree.inorder_iter().collect();
    let traversal = tree.inorder_iter();

    tree.clear();
    tree.is_empty() && traversal.collect::<Vec<_>>() == expected
}

#[cfg(feature = "serde")]
#[quickcheck]
fn serde_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    let json = serde_json::to_string(&tree).unwrap();
    let rebuilt: Tree<i8> = serde_json::from_str(&json).unwrap();

    rebuilt == tree
        && rebuilt.height() == tree.height()
        && rebuilt.preorder_iter().eq(tree.preorder_iter())
}
