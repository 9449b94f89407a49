use classic_ds::tree::Tree;

use std::collections::HashSet;

/// Builds a tree by inserting every key in order.
fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

quickcheck::quickcheck! {
    fn traversal_is_sorted_and_unique(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        tree.iter().copied().collect::<Vec<_>>() == expected
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn every_subtree_traversal_is_sorted(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        // Check the subtrees along the leftmost and rightmost paths.
        let mut node = tree.root();
        let mut sorted = true;
        while let Some(n) = node {
            let keys: Vec<_> = n.iter().collect();
            sorted &= keys.windows(2).all(|w| w[0] < w[1]);
            node = n.left();
        }
        let mut node = tree.root();
        while let Some(n) = node {
            let keys: Vec<_> = n.iter().collect();
            sorted &= keys.windows(2).all(|w| w[0] < w[1]);
            node = n.right();
        }

        sorted
    }
}

quickcheck::quickcheck! {
    fn insertion_order_only_changes_shape(xs: Vec<i8>) -> bool {
        let forwards = build(&xs);
        let mut reversed = xs;
        reversed.reverse();
        let backwards = build(&reversed);

        forwards.iter().eq(backwards.iter()) && forwards.len() == backwards.len()
    }
}
