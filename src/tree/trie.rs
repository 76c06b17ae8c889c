use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

pub const UNSET: u32 = !0;
pub type NodeRef = u32;

// Generic interface for different associative containers
pub trait TransitionMap {
    type Key: Copy;
    fn empty() -> Self;
    fn get(&self, key: &Self::Key) -> NodeRef;
    fn insert(&mut self, key: Self::Key, value: NodeRef);
    fn for_each(&self, f: impl FnMut(Self::Key, NodeRef));
}

// The most generic one
impl<K, S> TransitionMap for HashMap<K, NodeRef, S>
where
    K: Eq + Hash + Copy,
    S: BuildHasher + Default,
{
    type Key = K;

    fn empty() -> Self {
        Default::default()
    }

    fn get(&self, key: &Self::Key) -> NodeRef {
        HashMap::get(self, key).copied().unwrap_or(UNSET)
    }

    fn insert(&mut self, key: K, value: NodeRef) {
        HashMap::insert(self, key, value);
    }

    fn for_each(&self, mut f: impl FnMut(K, NodeRef)) {
        for (&k, &v) in self {
            f(k, v);
        }
    }
}

// Fixed-size array map
impl<const N_ALPHABETS: usize> TransitionMap for [NodeRef; N_ALPHABETS] {
    type Key = usize;

    fn empty() -> Self {
        [UNSET; N_ALPHABETS]
    }

    fn get(&self, key: &Self::Key) -> NodeRef {
        self[*key]
    }

    fn insert(&mut self, key: usize, value: NodeRef) {
        self[key] = value;
    }

    fn for_each(&self, mut f: impl FnMut(usize, NodeRef)) {
        for (k, &v) in self.iter().enumerate() {
            if v != UNSET {
                f(k, v);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node<M> {
    pub children: M,
    // Id of the word ending here, or UNSET
    pub tag: u32,
    // Number of live words in this subtree
    pub count: u32,
}

impl<M> Node<M> {
    pub fn terminal(&self) -> bool {
        self.tag != UNSET
    }
}

#[derive(Debug, Clone)]
pub struct Trie<M> {
    pub pool: Vec<Node<M>>,
}

impl<M: TransitionMap> Default for Trie<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TransitionMap> Trie<M> {
    pub fn new() -> Self {
        let root = Node {
            children: M::empty(),
            tag: UNSET,
            count: 0,
        };
        Self { pool: vec![root] }
    }

    fn alloc(&mut self) -> NodeRef {
        let idx = self.pool.len() as u32;
        self.pool.push(Node {
            children: M::empty(),
            tag: UNSET,
            count: 0,
        });
        idx
    }

    // Creates the missing nodes along `path` and returns its last node
    pub fn insert(&mut self, path: impl IntoIterator<Item = M::Key>) -> NodeRef {
        let mut u = 0;
        for c in path {
            let next = self.pool[u as usize].children.get(&c);
            if next == UNSET {
                let new_node = self.alloc();
                self.pool[u as usize].children.insert(c, new_node);
                u = new_node;
            } else {
                u = next;
            }
        }
        u
    }

    pub fn find(&self, path: impl IntoIterator<Item = M::Key>) -> Option<NodeRef> {
        let mut u = 0;
        for c in path {
            let next = self.pool[u as usize].children.get(&c);
            if next == UNSET {
                return None;
            }
            u = next;
        }
        Some(u)
    }

    // Root followed by every node along `path`
    fn walk(&self, path: impl IntoIterator<Item = M::Key>) -> Option<Vec<NodeRef>> {
        let mut nodes = vec![0];
        for c in path {
            let next = self.pool[*nodes.last()? as usize].children.get(&c);
            if next == UNSET {
                return None;
            }
            nodes.push(next);
        }
        Some(nodes)
    }

    pub fn node(&self, u: NodeRef) -> &Node<M> {
        &self.pool[u as usize]
    }
}

// Set of byte strings with prefix queries
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    trie: Trie<FxHashMap<u8, NodeRef>>,
    next_id: u32,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.trie.pool[0].count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Returns false if the word was already present
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }
        let u = self.trie.insert(word.bytes());
        self.trie.pool[u as usize].tag = self.next_id;
        self.next_id += 1;
        if let Some(path) = self.trie.walk(word.bytes()) {
            for v in path {
                self.trie.pool[v as usize].count += 1;
            }
        }
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie
            .find(word.bytes())
            .map_or(false, |u| self.trie.node(u).terminal())
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.count_prefix(prefix) > 0
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.trie
            .find(prefix.bytes())
            .map_or(0, |u| self.trie.node(u).count as usize)
    }

    // Returns false if the word was absent
    pub fn remove(&mut self, word: &str) -> bool {
        let Some(path) = self.trie.walk(word.bytes()) else {
            return false;
        };
        let last = path[path.len() - 1] as usize;
        if !self.trie.pool[last].terminal() {
            return false;
        }
        self.trie.pool[last].tag = UNSET;
        for v in path {
            self.trie.pool[v as usize].count -= 1;
        }
        true
    }

    // Sorted
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.trie.find(prefix.bytes()) else {
            return vec![];
        };
        let mut res = vec![];
        let mut stack = vec![(start, prefix.as_bytes().to_vec())];
        while let Some((u, word)) = stack.pop() {
            let node = self.trie.node(u);
            if node.count == 0 {
                continue;
            }
            if node.terminal() {
                res.push(String::from_utf8_lossy(&word).into_owned());
            }
            node.children.for_each(|c, v| {
                let mut next = word.clone();
                next.push(c);
                stack.push((v, next));
            });
        }
        res.sort();
        res
    }
}

pub const N_LOWERCASE: usize = 26;

fn lowercase_keys(word: &str) -> Result<Vec<usize>> {
    word.bytes()
        .map(|c| {
            c.is_ascii_lowercase()
                .then(|| (c - b'a') as usize)
                .ok_or_else(|| Error::invalid(format!("{word:?} is not lowercase ascii")))
        })
        .collect()
}

// Words over 'a'..='z', searched with '.' matching any single letter
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    trie: Trie<[NodeRef; N_LOWERCASE]>,
}

impl WordDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: &str) -> Result<()> {
        let u = self.trie.insert(lowercase_keys(word)?);
        self.trie.pool[u as usize].tag = 0;
        Ok(())
    }

    pub fn search(&self, pattern: &str) -> bool {
        self.search_from(0, pattern.as_bytes())
    }

    fn search_from(&self, u: NodeRef, pattern: &[u8]) -> bool {
        let node = self.trie.node(u);
        let Some((&c, rest)) = pattern.split_first() else {
            return node.terminal();
        };
        match c {
            b'.' => node
                .children
                .iter()
                .any(|&v| v != UNSET && self.search_from(v, rest)),
            b'a'..=b'z' => {
                let v = node.children[(c - b'a') as usize];
                v != UNSET && self.search_from(v, rest)
            }
            _ => false,
        }
    }
}

// Every word of `words` spelled by a path of adjacent, unrepeated cells. Sorted.
pub fn find_words(board: &[Vec<u8>], words: &[String]) -> Vec<String> {
    let mut trie: Trie<[NodeRef; N_LOWERCASE]> = Trie::new();
    for (i, word) in words.iter().enumerate() {
        if let Ok(keys) = lowercase_keys(word) {
            let u = trie.insert(keys);
            trie.pool[u as usize].tag = i as u32;
        }
    }

    fn dfs(
        trie: &mut Trie<[NodeRef; N_LOWERCASE]>,
        board: &mut [Vec<u8>],
        (i, j): (usize, usize),
        u: NodeRef,
        found: &mut Vec<u32>,
    ) {
        let c = board[i][j];
        if !c.is_ascii_lowercase() {
            return;
        }
        let v = trie.pool[u as usize].children[(c - b'a') as usize];
        if v == UNSET {
            return;
        }
        let tag = trie.pool[v as usize].tag;
        if tag != UNSET {
            found.push(tag);
            trie.pool[v as usize].tag = UNSET;
        }

        board[i][j] = b'#';
        let neighbors = [
            i.checked_sub(1).map(|i| (i, j)),
            Some((i + 1, j)),
            j.checked_sub(1).map(|j| (i, j)),
            Some((i, j + 1)),
        ];
        for (ni, nj) in neighbors.into_iter().flatten() {
            if ni < board.len() && nj < board[ni].len() {
                dfs(trie, board, (ni, nj), v, found);
            }
        }
        board[i][j] = c;
    }

    let mut board = board.to_vec();
    let mut found = vec![];
    for i in 0..board.len() {
        for j in 0..board[i].len() {
            dfs(&mut trie, &mut board, (i, j), 0, &mut found);
        }
    }
    let mut res: Vec<String> = found.into_iter().map(|i| words[i as usize].clone()).collect();
    res.sort();
    res.dedup();
    res
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_word_set() {
        let mut set = WordSet::new();
        assert!(set.insert("apple"));
        assert!(!set.insert("apple"));
        assert!(set.contains("apple"));
        assert!(!set.contains("app"));
        assert!(set.starts_with("app"));
        assert!(set.insert("app"));
        assert!(set.insert(""));
        assert_eq!(set.count_prefix("ap"), 2);
        assert_eq!(set.words_with_prefix(""), ["", "app", "apple"]);
        assert!(set.remove("apple"));
        assert!(!set.remove("apple"));
        assert!(!set.remove("ap"));
        assert_eq!(set.words_with_prefix("ap"), ["app"]);
        assert!(!set.starts_with("appl"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_word_dictionary() {
        let mut dict = WordDictionary::new();
        for w in ["bad", "dad", "mad"] {
            dict.add_word(w).unwrap();
        }
        assert!(!dict.search("pad"));
        assert!(dict.search("bad"));
        assert!(dict.search(".ad"));
        assert!(dict.search("b.."));
        assert!(!dict.search("b..."));
        assert!(dict.add_word("Bad").is_err());
    }

    #[test]
    fn test_find_words() {
        let board: Vec<Vec<u8>> = ["oaan", "etae", "ihkr", "iflv"]
            .iter()
            .map(|r| r.as_bytes().to_vec())
            .collect();
        let words: Vec<String> = ["oath", "pea", "eat", "rain"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(find_words(&board, &words), ["eat", "oath"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn word_set_matches_btree(
            ops in proptest::collection::vec((any::<bool>(), "[ab]{0,4}"), 0..40),
            prefix in "[ab]{0,2}",
        ) {
            let mut set = WordSet::new();
            let mut model = BTreeSet::new();
            for (insert, word) in &ops {
                if *insert {
                    prop_assert_eq!(set.insert(word), model.insert(word.clone()));
                } else {
                    prop_assert_eq!(set.remove(word), model.remove(word));
                }
            }
            prop_assert_eq!(set.len(), model.len());
            let expected: Vec<String> = model
                .iter()
                .filter(|w| w.starts_with(prefix.as_str()))
                .cloned()
                .collect();
            prop_assert_eq!(set.count_prefix(&prefix), expected.len());
            prop_assert_eq!(set.words_with_prefix(&prefix), expected);
        }
    }
}
