pub mod binary_tree;
pub mod bst;
pub mod traversal;
pub mod trie;

pub use binary_tree::{Tree, TreeNode};

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

use binary_tree::*;
use bst::*;
use traversal::*;
use trie::{find_words, WordDictionary, WordSet};

// Recursive variants walk one frame per level
const MAX_TREE_DEPTH: usize = 4096;

// Level order with null holes: `7 3 9 20 null null 15 7`
fn read_tree(input: &mut &[u8]) -> Result<Tree> {
    let tree = from_level_order(&input.opt_vec()?);
    let depth = max_depth_bfs(&tree);
    if depth > MAX_TREE_DEPTH {
        return Err(Error::invalid(format!(
            "tree depth {depth} exceeds {MAX_TREE_DEPTH}"
        )));
    }
    Ok(tree)
}

#[cfg(test)]
pub(crate) fn random_tree(rng: &mut crate::rng::Rng, n: usize) -> Tree {
    fn go(rng: &mut crate::rng::Rng, vals: &[i32]) -> Tree {
        if vals.is_empty() {
            return None;
        }
        let root = rng.index(vals.len());
        let left = go(rng, &vals[..root]);
        let right = go(rng, &vals[root + 1..]);
        TreeNode::with_children(vals[root], left, right)
    }
    let vals = rng.vec_i32(n, -9..10);
    go(rng, &vals)
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("preorder-traversal", Topic::Tree, "root, left, right")
            .variant("recursive", |input| Ok(render(preorder_rec(&read_tree(input)?))))
            .variant("iterative", |input| Ok(render(preorder_iter(&read_tree(input)?))))
            .sample("4 1 null 2 3", "[1, 2, 3]")
            .sample("0", "[]"),
        Problem::new("inorder-traversal", Topic::Tree, "left, root, right")
            .variant("recursive", |input| Ok(render(inorder_rec(&read_tree(input)?))))
            .variant("iterative", |input| Ok(render(inorder_iter(&read_tree(input)?))))
            .sample("4 1 null 2 3", "[1, 3, 2]")
            .sample("7 4 2 6 1 3 5 7", "[1, 2, 3, 4, 5, 6, 7]"),
        Problem::new("postorder-traversal", Topic::Tree, "left, right, root")
            .variant("recursive", |input| Ok(render(postorder_rec(&read_tree(input)?))))
            .variant("iterative", |input| Ok(render(postorder_iter(&read_tree(input)?))))
            .sample("4 1 null 2 3", "[3, 2, 1]"),
        Problem::new("level-order", Topic::Tree, "values grouped by depth")
            .variant("bfs", |input| Ok(render(level_order(&read_tree(input)?))))
            .variant("dfs", |input| Ok(render(level_order_dfs(&read_tree(input)?))))
            .sample("7 3 9 20 null null 15 7", "[[3], [9, 20], [15, 7]]")
            .sample("0", "[]"),
        Problem::new("zigzag-level-order", Topic::Tree, "level order alternating direction")
            .variant("bfs", |input| Ok(render(zigzag_level_order(&read_tree(input)?))))
            .sample("7 3 9 20 null null 15 7", "[[3], [20, 9], [15, 7]]"),
        Problem::new("right-side-view", Topic::Tree, "last node of every level")
            .variant("bfs", |input| Ok(render(right_side_view(&read_tree(input)?))))
            .sample("7 1 2 3 null 5 null 4", "[1, 3, 4]")
            .sample("3 1 2 null", "[1, 2]"),
        Problem::new("max-depth", Topic::Tree, "nodes on the longest root-to-leaf path")
            .variant("recursive", |input| Ok(render(max_depth(&read_tree(input)?))))
            .variant("bfs", |input| Ok(render(max_depth_bfs(&read_tree(input)?))))
            .sample("7 3 9 20 null null 15 7", "3")
            .sample("3 1 null 2", "2"),
        Problem::new("min-depth", Topic::Tree, "nodes on the shortest root-to-leaf path")
            .variant("recursive", |input| Ok(render(min_depth(&read_tree(input)?))))
            .sample("7 3 9 20 null null 15 7", "2")
            .sample("9 2 null 3 null 4 null 5 null 6", "5"),
        Problem::new("balanced-tree", Topic::Tree, "subtree heights differ by at most one")
            .variant("bottom-up", |input| Ok(render(is_balanced(&read_tree(input)?))))
            .sample("7 3 9 20 null null 15 7", "true")
            .sample("9 1 2 2 3 3 null null 4 4", "false"),
        Problem::new("tree-diameter", Topic::Tree, "longest path between two nodes, in edges")
            .variant("dfs", |input| Ok(render(diameter(&read_tree(input)?))))
            .sample("5 1 2 3 4 5", "3")
            .sample("2 1 2", "1"),
        Problem::new("max-path-sum", Topic::Tree, "largest sum over any node path")
            .variant("dfs", |input| Ok(render(max_path_sum(&read_tree(input)?))))
            .sample("3 1 2 3", "Some(6)")
            .sample("7 -10 9 20 null null 15 7", "Some(42)")
            .sample("1 -3", "Some(-3)"),
        Problem::new("same-tree", Topic::Tree, "two trees are structurally equal")
            .variant("recursive", |input| {
                let (a, b) = (read_tree(input)?, read_tree(input)?);
                Ok(render(is_same(&a, &b)))
            })
            .sample("3 1 2 3 3 1 2 3", "true")
            .sample("2 1 2 3 1 null 2", "false"),
        Problem::new("symmetric-tree", Topic::Tree, "tree is its own mirror")
            .variant("recursive", |input| Ok(render(is_symmetric(&read_tree(input)?))))
            .variant("bfs", |input| Ok(render(is_symmetric_bfs(&read_tree(input)?))))
            .sample("7 1 2 2 3 4 4 3", "true")
            .sample("7 1 2 2 null 3 null 3", "false"),
        Problem::new("invert-tree", Topic::Tree, "mirror every subtree")
            .variant("recursive", |input| Ok(serialize(&invert(read_tree(input)?))))
            .sample("7 4 2 7 1 3 6 9", "[4,7,2,9,6,3,1]")
            .sample("0", "[]"),
        Problem::new("path-sum", Topic::Tree, "some root-to-leaf path sums to the target")
            .variant("dfs", |input| {
                let tree = read_tree(input)?;
                Ok(render(has_path_sum(&tree, input.value()?)))
            })
            .sample("13 5 4 8 11 null 13 4 7 2 null null null 1 22", "true")
            .sample("3 1 2 3 5", "false")
            .sample("0 0", "false"),
        Problem::new("good-nodes", Topic::Tree, "nodes not smaller than any ancestor")
            .variant("dfs", |input| Ok(render(count_good_nodes(&read_tree(input)?))))
            .sample("7 3 1 4 3 null 1 5", "4")
            .sample("4 3 3 null 4 2", "3"),
        Problem::new("validate-bst", Topic::Tree, "strict binary search tree ordering")
            .variant("bounds", |input| Ok(render(is_valid_bst(&read_tree(input)?))))
            .variant("inorder", |input| Ok(render(is_valid_bst_inorder(&read_tree(input)?))))
            .sample("3 2 1 3", "true")
            .sample("7 5 1 4 null null 3 6", "false")
            .sample("3 2 2 2", "false"),
        Problem::new("kth-smallest-bst", Topic::Tree, "k-th smallest key, 1-indexed")
            .variant("inorder-iterator", |input| {
                let tree = read_tree(input)?;
                Ok(render(kth_smallest(&tree, input.value()?)))
            })
            .sample("5 3 1 4 null 2 1", "Some(1)")
            .sample("8 5 3 6 2 4 null null 1 3", "Some(3)"),
        Problem::new("lowest-common-ancestor", Topic::Tree, "deepest node above both keys")
            .variant("recursive", |input| {
                let tree = read_tree(input)?;
                let (p, q) = (input.value()?, input.value()?);
                Ok(render(lowest_common_ancestor(&tree, p, q)))
            })
            .sample("11 3 5 1 6 2 0 8 null null 7 4 5 1", "Some(3)")
            .sample("11 3 5 1 6 2 0 8 null null 7 4 5 4", "Some(5)"),
        Problem::new("lca-bst", Topic::Tree, "lowest common ancestor in a binary search tree")
            .variant("bst-walk", |input| {
                let tree = read_tree(input)?;
                let (p, q) = (input.value()?, input.value()?);
                Ok(render(lca_bst(&tree, p, q)))
            })
            .variant("recursive", |input| {
                let tree = read_tree(input)?;
                let (p, q) = (input.value()?, input.value()?);
                Ok(render(lowest_common_ancestor(&tree, p, q)))
            })
            .sample("11 6 2 8 0 4 7 9 null null 3 5 2 8", "Some(6)")
            .sample("11 6 2 8 0 4 7 9 null null 3 5 2 4", "Some(2)"),
        Problem::new("insert-into-bst", Topic::Tree, "insert a key, keeping search order")
            .variant("recursive", |input| {
                let tree = read_tree(input)?;
                Ok(serialize(&insert_bst(tree, input.value()?)))
            })
            .sample("5 4 2 7 1 3 5", "[4,2,7,1,3,5]")
            .sample("0 1", "[1]"),
        Problem::new("build-tree", Topic::Tree, "rebuild from preorder and inorder")
            .variant("index-map", |input| {
                let preorder: Vec<i32> = input.counted_vec()?;
                let inorder: Vec<i32> = input.counted_vec()?;
                Ok(serialize(&build_from_preorder_inorder(&preorder, &inorder)?))
            })
            .sample("5 3 9 20 15 7 5 9 3 15 20 7", "[3,9,20,null,null,15,7]")
            .sample("1 -1 1 -1", "[-1]"),
        Problem::new("serialize-tree", Topic::Tree, "encode a tree to text and back")
            .variant("level-order", |input| {
                let tree = read_tree(input)?;
                Ok(serialize(&deserialize(&serialize(&tree))?))
            })
            .variant("preorder", |input| {
                let tree = read_tree(input)?;
                Ok(serialize(&deserialize_preorder(&serialize_preorder(&tree))?))
            })
            .sample("7 1 2 3 null null 4 5", "[1,2,3,null,null,4,5]")
            .sample("0", "[]"),
        Problem::new("sorted-array-to-bst", Topic::Tree, "height-balanced tree from sorted keys")
            .variant("divide-and-conquer", |input| {
                Ok(serialize(&sorted_array_to_bst(&input.counted_vec()?)))
            })
            .sample("5 -10 -3 0 5 9", "[0,-10,5,null,-3,null,9]")
            .sample("2 1 3", "[1,null,3]"),
        Problem::new("implement-trie", Topic::Trie, "word set with prefix queries")
            .variant("hash-map-children", |input| {
                // ops: `insert w`, `search w`, `prefix w`, `count w`, `remove w`, `list w`
                let n: usize = input.value()?;
                let mut set = WordSet::new();
                let mut out = vec![];
                for _ in 0..n {
                    let op = input.word()?;
                    let word = input.word()?;
                    match op.as_str() {
                        "insert" => {
                            set.insert(&word);
                        }
                        "search" => out.push(render(set.contains(&word))),
                        "prefix" => out.push(render(set.starts_with(&word))),
                        "count" => out.push(render(set.count_prefix(&word))),
                        "remove" => out.push(render(set.remove(&word))),
                        "list" => out.push(render(set.words_with_prefix(&word))),
                        op => return Err(Error::invalid(format!("unknown op {op:?}"))),
                    }
                }
                Ok(out.join(" "))
            })
            .sample(
                "6 insert apple search apple search app prefix app insert app search app",
                "true false true true",
            )
            .sample(
                "5 insert car insert cat count ca remove car list ca",
                "2 true [\"cat\"]",
            ),
        Problem::new("word-dictionary", Topic::Trie, "word lookup where '.' matches any letter")
            .variant("array-children", |input| {
                // ops: `add w`, `search pattern`
                let n: usize = input.value()?;
                let mut dict = WordDictionary::new();
                let mut out = vec![];
                for _ in 0..n {
                    let op = input.word()?;
                    let word = input.word()?;
                    match op.as_str() {
                        "add" => dict.add_word(&word)?,
                        "search" => out.push(render(dict.search(&word))),
                        op => return Err(Error::invalid(format!("unknown op {op:?}"))),
                    }
                }
                Ok(out.join(" "))
            })
            .sample(
                "7 add bad add dad add mad search pad search bad search .ad search b..",
                "false true true true",
            ),
        Problem::new("word-search-ii", Topic::Trie, "dictionary words traceable on a letter grid")
            .variant("trie", |input| {
                let board = input.char_grid()?;
                Ok(render(find_words(&board, &input.words()?)))
            })
            .variant("per-word-backtracking", |input| {
                let board = input.char_grid()?;
                let mut found: Vec<String> = input
                    .words()?
                    .into_iter()
                    .filter(|w| crate::backtrack::exist(&board, w))
                    .collect();
                found.sort();
                found.dedup();
                Ok(render(found))
            })
            .sample("4 oaan etae ihkr iflv 4 oath pea eat rain", "[\"eat\", \"oath\"]")
            .sample("2 ab cd 1 abcb", "[]"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    // Level order of a right spine 0 -> 1 -> .. -> n - 1
    fn spine_input(n: usize) -> String {
        let mut input = format!("{} 0", 2 * n - 1);
        for v in 1..n {
            input += &format!(" null {v}");
        }
        input
    }

    #[test]
    fn test_tree_depth_limit() {
        let problem = crate::catalog::find("max-depth").unwrap();
        for variant in &problem.variants {
            assert_eq!(variant.run(&spine_input(MAX_TREE_DEPTH)).unwrap(), "4096");
            assert!(matches!(
                variant.run(&spine_input(MAX_TREE_DEPTH + 1)),
                Err(Error::InvalidInput(_))
            ));
        }
    }
}
