use crate::dset::DisjointSet;

use super::jagged::Jagged;

pub fn count_components_dset(n: usize, edges: &[[usize; 2]]) -> usize {
    let mut dset = DisjointSet::new(n);
    for &[u, v] in edges {
        dset.merge(u, v);
    }
    dset.n_sets()
}

pub fn count_components_dfs(n: usize, edges: &[[usize; 2]]) -> usize {
    let graph = Jagged::undirected(n, edges);
    let mut visited = vec![false; n];
    let mut count = 0;
    for start in 0..n {
        if visited[start] {
            continue;
        }
        count += 1;
        visited[start] = true;
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            for &v in &graph[u] {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
    }
    count
}

// Provinces of a symmetric adjacency matrix
pub fn find_circle_num_dset(is_connected: &[Vec<u8>]) -> usize {
    let n = is_connected.len();
    let mut dset = DisjointSet::new(n);
    for (u, row) in is_connected.iter().enumerate() {
        for (v, &c) in row.iter().enumerate().take(n).skip(u + 1) {
            if c != 0 {
                dset.merge(u, v);
            }
        }
    }
    dset.n_sets()
}

pub fn find_circle_num_dfs(is_connected: &[Vec<u8>]) -> usize {
    let n = is_connected.len();
    let edges: Vec<[usize; 2]> = (0..n)
        .flat_map(|u| (0..n).map(move |v| [u, v]))
        .filter(|&[u, v]| u < v && is_connected[u].get(v).map_or(false, |&c| c != 0))
        .collect();
    count_components_dfs(n, &edges)
}

// Last edge whose endpoints were already connected
pub fn redundant_connection(edges: &[[usize; 2]]) -> Option<[usize; 2]> {
    let n = edges.iter().flatten().max().map_or(0, |&u| u + 1);
    let mut dset = DisjointSet::new(n);
    let mut res = None;
    for &[u, v] in edges {
        if !dset.merge(u, v) {
            res = Some([u, v]);
        }
    }
    res
}

// Connected and acyclic
pub fn valid_tree_dset(n: usize, edges: &[[usize; 2]]) -> bool {
    if edges.len() + 1 != n {
        return false;
    }
    let mut dset = DisjointSet::new(n);
    edges.iter().all(|&[u, v]| dset.merge(u, v))
}

pub fn valid_tree_dfs(n: usize, edges: &[[usize; 2]]) -> bool {
    edges.len() + 1 == n && count_components_dfs(n, edges) == 1
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    fn random_edges(rng: &mut Rng, n: usize, m: usize) -> Vec<[usize; 2]> {
        (0..m).map(|_| [rng.index(n), rng.index(n)]).collect()
    }

    #[test]
    fn test_components_agree() {
        let mut rng = Rng::new(131);
        for _ in 0..300 {
            let n = 1 + rng.index(10);
            let m = rng.index(12);
            let edges = random_edges(&mut rng, n, m);
            assert_eq!(count_components_dset(n, &edges), count_components_dfs(n, &edges));
            assert_eq!(valid_tree_dset(n, &edges), valid_tree_dfs(n, &edges));

            let mut matrix = vec![vec![0u8; n]; n];
            for &[u, v] in &edges {
                matrix[u][v] = 1;
                matrix[v][u] = 1;
            }
            let expected = count_components_dset(n, &edges);
            assert_eq!(find_circle_num_dset(&matrix), expected);
            assert_eq!(find_circle_num_dfs(&matrix), expected);
        }
    }

    #[test]
    fn test_redundant() {
        assert_eq!(redundant_connection(&[[1, 2], [1, 3], [2, 3]]), Some([2, 3]));
        assert_eq!(redundant_connection(&[[1, 2], [2, 3]]), None);
        assert!(valid_tree_dset(1, &[]));
        assert!(!valid_tree_dfs(0, &[]));
    }
}
