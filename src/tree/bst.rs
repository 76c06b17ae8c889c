use super::binary_tree::{Tree, TreeNode};
use super::traversal::{inorder_rec, Inorder};

// Strict: equal keys are rejected
pub fn is_valid_bst(tree: &Tree) -> bool {
    fn go(tree: &Tree, lo: Option<i32>, hi: Option<i32>) -> bool {
        let Some(node) = tree else {
            return true;
        };
        lo.map_or(true, |lo| lo < node.val)
            && hi.map_or(true, |hi| node.val < hi)
            && go(&node.left, lo, Some(node.val))
            && go(&node.right, Some(node.val), hi)
    }
    go(tree, None, None)
}

pub fn is_valid_bst_inorder(tree: &Tree) -> bool {
    inorder_rec(tree).windows(2).all(|w| w[0] < w[1])
}

// 1-indexed
pub fn kth_smallest(tree: &Tree, k: usize) -> Option<i32> {
    Inorder::new(tree).nth(k.checked_sub(1)?).map(|node| node.val)
}

pub fn lca_bst(tree: &Tree, p: i32, q: i32) -> Option<i32> {
    let (lo, hi) = (p.min(q), p.max(q));
    let mut cur = tree.as_deref();
    while let Some(node) = cur {
        if hi < node.val {
            cur = node.left.as_deref();
        } else if node.val < lo {
            cur = node.right.as_deref();
        } else {
            return Some(node.val);
        }
    }
    None
}

// Both values must be present; None otherwise
pub fn lowest_common_ancestor(tree: &Tree, p: i32, q: i32) -> Option<i32> {
    // (found p, found q, lca if both were found below)
    fn go(tree: &Tree, p: i32, q: i32) -> (bool, bool, Option<i32>) {
        let Some(node) = tree else {
            return (false, false, None);
        };
        let (lp, lq, l) = go(&node.left, p, q);
        if l.is_some() {
            return (true, true, l);
        }
        let (rp, rq, r) = go(&node.right, p, q);
        if r.is_some() {
            return (true, true, r);
        }
        let fp = lp || rp || node.val == p;
        let fq = lq || rq || node.val == q;
        (fp, fq, (fp && fq).then_some(node.val))
    }
    go(tree, p, q).2
}

pub fn insert_bst(tree: Tree, val: i32) -> Tree {
    match tree {
        None => Some(Box::new(TreeNode::new(val))),
        Some(mut node) => {
            if val < node.val {
                node.left = insert_bst(node.left.take(), val);
            } else {
                node.right = insert_bst(node.right.take(), val);
            }
            Some(node)
        }
    }
}

// Height-balanced, picking the lower middle as root
pub fn sorted_array_to_bst(xs: &[i32]) -> Tree {
    if xs.is_empty() {
        return None;
    }
    let mid = (xs.len() - 1) / 2;
    TreeNode::with_children(
        xs[mid],
        sorted_array_to_bst(&xs[..mid]),
        sorted_array_to_bst(&xs[mid + 1..]),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;
    use crate::tree::random_tree;
    use crate::tree::traversal::{is_balanced, preorder_rec};

    #[test]
    fn test_validity_agree() {
        let mut rng = Rng::new(71);
        for _ in 0..300 {
            let n = rng.index(10);
            let tree = random_tree(&mut rng, n);
            assert_eq!(is_valid_bst(&tree), is_valid_bst_inorder(&tree));
        }
    }

    #[test]
    fn test_built_bst() {
        let xs: Vec<i32> = (0..20).map(|x| 2 * x).collect();
        let tree = sorted_array_to_bst(&xs);
        assert!(is_valid_bst(&tree));
        assert!(is_balanced(&tree));
        assert_eq!(inorder_rec(&tree), xs);
        for k in 1..=20 {
            assert_eq!(kth_smallest(&tree, k), Some(xs[k - 1]));
        }
        assert_eq!(kth_smallest(&tree, 0), None);
        assert_eq!(kth_smallest(&tree, 21), None);

        let mut inserted = None;
        for &x in &[5, 3, 8, 1, 4] {
            inserted = insert_bst(inserted, x);
        }
        assert_eq!(preorder_rec(&inserted), [5, 3, 1, 4, 8]);
    }

    #[test]
    fn test_lca_agree() {
        let xs: Vec<i32> = (0..15).collect();
        let tree = sorted_array_to_bst(&xs);
        for p in 0..15 {
            for q in 0..15 {
                assert_eq!(lca_bst(&tree, p, q), lowest_common_ancestor(&tree, p, q));
            }
        }
        assert_eq!(lowest_common_ancestor(&tree, 3, 99), None);
    }
}
