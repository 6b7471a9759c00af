//! Property tests for balance, height caching and traversal

use parity_avl::{BalancedTree, Insertion};
use proptest::prelude::*;

use tree_helpers::*;

fn odd_key() -> impl Strategy<Value = i64> {
    (-500i64..500).prop_map(|k| 2 * k + 1)
}

fn any_key() -> impl Strategy<Value = i64> {
    -200i64..200
}

proptest! {
    #[test]
    fn odd_keys_build_balanced_bst(keys in proptest::collection::vec(odd_key(), 0..96)) {
        let mut tree = BalancedTree::new();
        for &key in &keys {
            tree.insert(key);
            prop_assert_eq!(check_avl(&tree), Ok(()));
        }

        prop_assert!(is_strict_bst(&tree), "in-order not sorted: {:?}", in_order(&tree));

        let mut distinct = keys.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(in_order(&tree), distinct);
    }

    #[test]
    fn odd_duplicates_leave_tree_unchanged(keys in proptest::collection::vec(odd_key(), 1..64)) {
        let tree: BalancedTree = keys.iter().copied().collect();
        for &key in &keys {
            let mut again = tree.clone();
            prop_assert_eq!(again.insert(key), Insertion::Duplicate);
            prop_assert_eq!(&again, &tree);
        }
    }

    #[test]
    fn mixed_keys_stay_balanced_after_every_insert(keys in proptest::collection::vec(any_key(), 0..128)) {
        let mut tree = BalancedTree::new();
        let mut inserted = 0usize;
        for &key in &keys {
            if tree.insert(key) == Insertion::Inserted {
                inserted += 1;
            }
            prop_assert_eq!(check_avl(&tree), Ok(()), "after inserting {}", key);
        }
        prop_assert_eq!(tree.len(), inserted);
        prop_assert_eq!(count_nodes(&tree), inserted);
    }

    #[test]
    fn repeated_odd_key_is_noop(keys in proptest::collection::vec(any_key(), 1..64), extra in odd_key()) {
        let mut tree: BalancedTree = keys.into_iter().collect();
        tree.insert(extra);
        let snapshot = tree.clone();
        prop_assert_eq!(tree.insert(extra), Insertion::Duplicate);
        prop_assert_eq!(tree, snapshot);
    }

    #[test]
    fn post_order_is_restartable_and_structural(keys in proptest::collection::vec(any_key(), 0..96)) {
        let tree: BalancedTree = keys.into_iter().collect();

        let first: Vec<i64> = tree.post_order().collect();
        let second: Vec<i64> = tree.post_order().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &recursive_post_order(&tree));
        prop_assert_eq!(first.len(), tree.len());

        if let Some(root) = tree.root() {
            prop_assert_eq!(first.last().copied(), Some(root.key()));
        }
    }

    #[test]
    fn level_order_covers_every_node(keys in proptest::collection::vec(any_key(), 0..96)) {
        let tree: BalancedTree = keys.into_iter().collect();
        let levels: Vec<_> = tree.level_order().collect();
        prop_assert_eq!(levels.len(), tree.height());
        prop_assert_eq!(levels.iter().map(Vec::len).sum::<usize>(), tree.len());
    }
}
