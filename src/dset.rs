use std::{cell::Cell, mem};

#[derive(Clone, Debug)]
pub struct DisjointSet {
    // Represents parent if >= 0, size if < 0
    link: Vec<Cell<i32>>,
    n_sets: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            link: vec![Cell::new(-1); n],
            n_sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.link.len()
    }

    pub fn is_empty(&self) -> bool {
        self.link.is_empty()
    }

    pub fn find_root_with_size(&self, u: usize) -> (usize, u32) {
        let p = self.link[u].get();
        if p >= 0 {
            let (root, size) = self.find_root_with_size(p as usize);
            self.link[u].set(root as i32);
            (root, size)
        } else {
            (u, (-p) as u32)
        }
    }

    pub fn find_root(&self, u: usize) -> usize {
        self.find_root_with_size(u).0
    }

    pub fn size(&self, u: usize) -> u32 {
        self.find_root_with_size(u).1
    }

    pub fn connected(&self, u: usize, v: usize) -> bool {
        self.find_root(u) == self.find_root(v)
    }

    pub fn n_sets(&self) -> usize {
        self.n_sets
    }

    // Returns true iif two sets were previously disjoint
    pub fn merge(&mut self, u: usize, v: usize) -> bool {
        let (mut u, size_u) = self.find_root_with_size(u);
        let (mut v, size_v) = self.find_root_with_size(v);
        if u == v {
            return false;
        }

        if size_u < size_v {
            mem::swap(&mut u, &mut v);
        }
        self.link[v].set(u as i32);
        self.link[u].set(-((size_u + size_v) as i32));
        self.n_sets -= 1;
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge() {
        let mut dset = DisjointSet::new(6);
        assert!(dset.merge(0, 1));
        assert!(dset.merge(2, 3));
        assert!(!dset.merge(1, 0));
        assert!(dset.merge(1, 3));
        assert!(dset.connected(0, 2));
        assert!(!dset.connected(0, 4));
        assert_eq!(dset.size(3), 4);
        assert_eq!(dset.n_sets(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn merges_agree_with_labels(
            n in 1_usize..24,
            ops in proptest::collection::vec((0_usize..24, 0_usize..24), 0..60),
        ) {
            let mut dset = DisjointSet::new(n);
            let mut label: Vec<usize> = (0..n).collect();
            for &(u, v) in ops.iter().filter(|&&(u, v)| u < n && v < n) {
                let merged = dset.merge(u, v);
                let (lu, lv) = (label[u], label[v]);
                prop_assert_eq!(merged, lu != lv);
                for l in label.iter_mut() {
                    if *l == lv {
                        *l = lu;
                    }
                }
            }

            for u in 0..n {
                for v in 0..n {
                    prop_assert_eq!(dset.connected(u, v), label[u] == label[v]);
                }
                let size = label.iter().filter(|&&l| l == label[u]).count();
                prop_assert_eq!(dset.size(u) as usize, size);
            }
            let mut distinct = label.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(dset.n_sets(), distinct.len());
        }
    }
}
