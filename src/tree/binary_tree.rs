use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Tree,
    pub right: Tree,
}

pub type Tree = Option<Box<TreeNode>>;

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(val: i32, left: Tree, right: Tree) -> Tree {
        Some(Box::new(Self { val, left, right }))
    }
}

// Detaches subtrees onto an explicit stack; a path-shaped tree would overflow the derived drop
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// Level order with `None` holes, as written on interview sites: [1, None, 2, 3]
pub fn from_level_order(vals: &[Option<i32>]) -> Tree {
    if vals.first().copied().flatten().is_none() {
        return None;
    }

    // Resolve the child slots first, then build bottom-up from the index tree
    let n = vals.len();
    let mut children: Vec<[Option<usize>; 2]> = vec![[None; 2]; n];
    let mut queue = VecDeque::from([0]);
    let mut cursor = 1;
    while let Some(u) = queue.pop_front() {
        for side in 0..2 {
            if cursor >= n {
                break;
            }
            if vals[cursor].is_some() {
                children[u][side] = Some(cursor);
                queue.push_back(cursor);
            }
            cursor += 1;
        }
    }

    // Children sit at larger indices than their parent
    let mut built: Vec<Tree> = (0..n).map(|_| None).collect();
    for u in (0..n).rev() {
        let Some(val) = vals[u] else { continue };
        let [l, r] = children[u];
        let left = l.and_then(|l| built[l].take());
        let right = r.and_then(|r| built[r].take());
        built[u] = TreeNode::with_children(val, left, right);
    }
    built[0].take()
}

pub fn to_level_order(tree: &Tree) -> Vec<Option<i32>> {
    let mut res = vec![];
    let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::from([tree.as_deref()]);
    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(node) => {
                res.push(Some(node.val));
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
            None => res.push(None),
        }
    }
    while res.last() == Some(&None) {
        res.pop();
    }
    res
}

pub fn size(tree: &Tree) -> usize {
    tree.as_ref()
        .map_or(0, |node| 1 + size(&node.left) + size(&node.right))
}

// "[1,2,null,3]"
pub fn serialize(tree: &Tree) -> String {
    let tokens: Vec<String> = to_level_order(tree)
        .into_iter()
        .map(|v| v.map_or_else(|| "null".to_owned(), |v| v.to_string()))
        .collect();
    format!("[{}]", tokens.join(","))
}

pub fn deserialize(data: &str) -> Result<Tree> {
    let inner = data
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| Error::invalid(format!("expected a bracketed list, got {data:?}")))?;
    if inner.trim().is_empty() {
        return Ok(None);
    }
    let vals = inner
        .split(',')
        .map(|token| match token.trim() {
            "null" => Ok(None),
            token => token
                .parse()
                .map(Some)
                .map_err(|_| Error::parse::<i32>(token.as_bytes())),
        })
        .collect::<Result<Vec<_>>>()?;
    if vals[0].is_none() && vals.len() > 1 {
        return Err(Error::invalid("null root with trailing nodes"));
    }
    Ok(from_level_order(&vals))
}

// "1 2 # # 3 # #"
pub fn serialize_preorder(tree: &Tree) -> String {
    fn go(tree: &Tree, out: &mut Vec<String>) {
        match tree {
            None => out.push("#".to_owned()),
            Some(node) => {
                out.push(node.val.to_string());
                go(&node.left, out);
                go(&node.right, out);
            }
        }
    }
    let mut out = vec![];
    go(tree, &mut out);
    out.join(" ")
}

pub fn deserialize_preorder(data: &str) -> Result<Tree> {
    fn go<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Tree> {
        match tokens.next() {
            None => Err(Error::UnexpectedEof("tree node")),
            Some("#") => Ok(None),
            Some(token) => {
                let val = token
                    .parse()
                    .map_err(|_| Error::parse::<i32>(token.as_bytes()))?;
                let left = go(tokens)?;
                let right = go(tokens)?;
                Ok(TreeNode::with_children(val, left, right))
            }
        }
    }
    let mut tokens = data.split_ascii_whitespace();
    let tree = go(&mut tokens)?;
    match tokens.next() {
        Some(extra) => Err(Error::invalid(format!("trailing token {extra:?}"))),
        None => Ok(tree),
    }
}

// Values must be distinct
pub fn build_from_preorder_inorder(preorder: &[i32], inorder: &[i32]) -> Result<Tree> {
    if preorder.len() != inorder.len() {
        return Err(Error::invalid("traversals differ in length"));
    }
    let pos: FxHashMap<i32, usize> = inorder.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    if pos.len() != inorder.len() {
        return Err(Error::invalid("duplicate values"));
    }

    // preorder[pre..] builds the subtree whose inorder span is lo..hi
    fn go(
        preorder: &[i32],
        pos: &FxHashMap<i32, usize>,
        pre: &mut usize,
        lo: usize,
        hi: usize,
    ) -> Result<Tree> {
        if lo == hi {
            return Ok(None);
        }
        let val = preorder[*pre];
        *pre += 1;
        let mid = *pos
            .get(&val)
            .filter(|&&m| lo <= m && m < hi)
            .ok_or_else(|| Error::invalid(format!("{val} is misplaced in inorder")))?;
        let left = go(preorder, pos, pre, lo, mid)?;
        let right = go(preorder, pos, pre, mid + 1, hi)?;
        Ok(TreeNode::with_children(val, left, right))
    }
    go(preorder, &pos, &mut 0, 0, inorder.len())
}
