use std::collections::VecDeque;

use super::binary_tree::{Tree, TreeNode};

pub fn preorder_rec(tree: &Tree) -> Vec<i32> {
    fn go(tree: &Tree, out: &mut Vec<i32>) {
        if let Some(node) = tree {
            out.push(node.val);
            go(&node.left, out);
            go(&node.right, out);
        }
    }
    let mut out = vec![];
    go(tree, &mut out);
    out
}

pub fn inorder_rec(tree: &Tree) -> Vec<i32> {
    fn go(tree: &Tree, out: &mut Vec<i32>) {
        if let Some(node) = tree {
            go(&node.left, out);
            out.push(node.val);
            go(&node.right, out);
        }
    }
    let mut out = vec![];
    go(tree, &mut out);
    out
}

pub fn postorder_rec(tree: &Tree) -> Vec<i32> {
    fn go(tree: &Tree, out: &mut Vec<i32>) {
        if let Some(node) = tree {
            go(&node.left, out);
            go(&node.right, out);
            out.push(node.val);
        }
    }
    let mut out = vec![];
    go(tree, &mut out);
    out
}

pub fn preorder_iter(tree: &Tree) -> Vec<i32> {
    let mut out = vec![];
    let mut stack: Vec<&TreeNode> = tree.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.val);
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    out
}

// Lazy inorder walk with an explicit stack of pending ancestors
pub struct Inorder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Inorder<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        let mut iter = Self { stack: vec![] };
        iter.push_left_spine(tree.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(u) = node {
            self.stack.push(u);
            node = u.left.as_deref();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}

pub fn inorder_iter(tree: &Tree) -> Vec<i32> {
    Inorder::new(tree).map(|node| node.val).collect()
}

// Reversed (root, right, left) preorder
pub fn postorder_iter(tree: &Tree) -> Vec<i32> {
    let mut out = vec![];
    let mut stack: Vec<&TreeNode> = tree.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.val);
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    out.reverse();
    out
}

pub fn level_order(tree: &Tree) -> Vec<Vec<i32>> {
    let mut levels = vec![];
    let mut level: Vec<&TreeNode> = tree.as_deref().into_iter().collect();
    while !level.is_empty() {
        levels.push(level.iter().map(|node| node.val).collect());
        level = level
            .iter()
            .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
            .flatten()
            .collect();
    }
    levels
}

pub fn level_order_dfs(tree: &Tree) -> Vec<Vec<i32>> {
    fn go(tree: &Tree, depth: usize, levels: &mut Vec<Vec<i32>>) {
        let Some(node) = tree else {
            return;
        };
        if levels.len() == depth {
            levels.push(vec![]);
        }
        levels[depth].push(node.val);
        go(&node.left, depth + 1, levels);
        go(&node.right, depth + 1, levels);
    }
    let mut levels = vec![];
    go(tree, 0, &mut levels);
    levels
}

pub fn zigzag_level_order(tree: &Tree) -> Vec<Vec<i32>> {
    let mut levels = level_order(tree);
    for level in levels.iter_mut().skip(1).step_by(2) {
        level.reverse();
    }
    levels
}

pub fn right_side_view(tree: &Tree) -> Vec<i32> {
    level_order(tree)
        .into_iter()
        .filter_map(|level| level.last().copied())
        .collect()
}

pub fn max_depth(tree: &Tree) -> usize {
    tree.as_ref()
        .map_or(0, |node| 1 + max_depth(&node.left).max(max_depth(&node.right)))
}

pub fn max_depth_bfs(tree: &Tree) -> usize {
    let mut depth = 0;
    let mut queue: VecDeque<&TreeNode> = tree.as_deref().into_iter().collect();
    while !queue.is_empty() {
        depth += 1;
        for _ in 0..queue.len() {
            if let Some(node) = queue.pop_front() {
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
        }
    }
    depth
}

// Nodes on the shortest root-to-leaf path
pub fn min_depth(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(node) => match (&node.left, &node.right) {
            (None, None) => 1,
            (Some(_), None) => 1 + min_depth(&node.left),
            (None, Some(_)) => 1 + min_depth(&node.right),
            (l, r) => 1 + min_depth(l).min(min_depth(r)),
        },
    }
}

pub fn is_balanced(tree: &Tree) -> bool {
    // height, or None if some subtree is unbalanced
    fn height(tree: &Tree) -> Option<usize> {
        let Some(node) = tree else {
            return Some(0);
        };
        let (l, r) = (height(&node.left)?, height(&node.right)?);
        (l.abs_diff(r) <= 1).then_some(1 + l.max(r))
    }
    height(tree).is_some()
}

// Longest path between two nodes, in edges
pub fn diameter(tree: &Tree) -> usize {
    fn depth(tree: &Tree, best: &mut usize) -> usize {
        let Some(node) = tree else {
            return 0;
        };
        let (l, r) = (depth(&node.left, best), depth(&node.right, best));
        *best = (*best).max(l + r);
        1 + l.max(r)
    }
    let mut best = 0;
    depth(tree, &mut best);
    best
}

pub fn max_path_sum(tree: &Tree) -> Option<i64> {
    // best downward path starting at the node, clipped at zero
    fn gain(tree: &Tree, best: &mut Option<i64>) -> i64 {
        let Some(node) = tree else {
            return 0;
        };
        let l = gain(&node.left, best).max(0);
        let r = gain(&node.right, best).max(0);
        let through = node.val as i64 + l + r;
        *best = Some(best.map_or(through, |b| b.max(through)));
        node.val as i64 + l.max(r)
    }
    let mut best = None;
    gain(tree, &mut best);
    best
}

pub fn is_same(a: &Tree, b: &Tree) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            x.val == y.val && is_same(&x.left, &y.left) && is_same(&x.right, &y.right)
        }
        _ => false,
    }
}

pub fn is_symmetric(tree: &Tree) -> bool {
    fn mirror(a: &Tree, b: &Tree) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                x.val == y.val && mirror(&x.left, &y.right) && mirror(&x.right, &y.left)
            }
            _ => false,
        }
    }
    tree.as_ref().map_or(true, |node| mirror(&node.left, &node.right))
}

pub fn is_symmetric_bfs(tree: &Tree) -> bool {
    let Some(root) = tree else {
        return true;
    };
    let mut queue = VecDeque::from([(root.left.as_deref(), root.right.as_deref())]);
    while let Some(pair) = queue.pop_front() {
        match pair {
            (None, None) => {}
            (Some(x), Some(y)) if x.val == y.val => {
                queue.push_back((x.left.as_deref(), y.right.as_deref()));
                queue.push_back((x.right.as_deref(), y.left.as_deref()));
            }
            _ => return false,
        }
    }
    true
}

pub fn invert(tree: Tree) -> Tree {
    tree.map(|mut node| {
        let left = node.left.take();
        node.left = invert(node.right.take());
        node.right = invert(left);
        node
    })
}

// Some root-to-leaf path sums to target
pub fn has_path_sum(tree: &Tree, target: i64) -> bool {
    let Some(node) = tree else {
        return false;
    };
    let rest = target - node.val as i64;
    match (&node.left, &node.right) {
        (None, None) => rest == 0,
        (l, r) => has_path_sum(l, rest) || has_path_sum(r, rest),
    }
}

// Nodes not smaller than every ancestor
pub fn count_good_nodes(tree: &Tree) -> usize {
    fn go(tree: &Tree, max_so_far: i32) -> usize {
        let Some(node) = tree else {
            return 0;
        };
        let good = (node.val >= max_so_far) as usize;
        let max_so_far = max_so_far.max(node.val);
        good + go(&node.left, max_so_far) + go(&node.right, max_so_far)
    }
    go(tree, i32::MIN)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;
    use crate::tree::binary_tree::from_level_order;
    use crate::tree::random_tree;

    #[test]
    fn test_traversals_agree() {
        let mut rng = Rng::new(61);
        for _ in 0..200 {
            let n = rng.index(15);
            let tree = random_tree(&mut rng, n);
            assert_eq!(preorder_rec(&tree), preorder_iter(&tree));
            assert_eq!(inorder_rec(&tree), inorder_iter(&tree));
            assert_eq!(postorder_rec(&tree), postorder_iter(&tree));
            assert_eq!(level_order(&tree), level_order_dfs(&tree));
            assert_eq!(max_depth(&tree), max_depth_bfs(&tree));
            assert_eq!(is_symmetric(&tree), is_symmetric_bfs(&tree));
            assert!(min_depth(&tree) <= max_depth(&tree));
        }
    }

    #[test]
    fn test_invert_mirrors() {
        let mut rng = Rng::new(67);
        for _ in 0..100 {
            let n = rng.index(12);
            let tree = random_tree(&mut rng, n);
            let mut inorder = inorder_rec(&tree);
            inorder.reverse();
            let inverted = invert(tree.clone());
            assert_eq!(inorder_rec(&inverted), inorder);
            assert_eq!(invert(inverted), tree);
        }
    }

    #[test]
    fn test_properties() {
        let tree = from_level_order(&[Some(-10), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(max_path_sum(&tree), Some(42));
        assert_eq!(diameter(&tree), 3);
        assert_eq!(min_depth(&tree), 2);
        assert!(is_balanced(&tree));
        assert!(has_path_sum(&tree, 25));
        assert!(!has_path_sum(&tree, 20));
        assert_eq!(max_path_sum(&None), None);
    }
}
