use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::heap::MinHeap;

use super::jagged::Jagged;

const INF: u64 = u64::MAX;

// Weighted edge `from -> to`
pub type Edge = (usize, usize, u64);

pub fn dijkstra(neighbors: &Jagged<(usize, u64)>, start: usize) -> Vec<u64> {
    let mut dist = vec![INF; neighbors.len()];
    dist[start] = 0;
    let mut queue = MinHeap::new();
    queue.push((0, start));
    while let Some((du, u)) = queue.pop() {
        if du != dist[u] {
            continue;
        }
        for &(v, d_uv) in &neighbors[u] {
            let dv_new = du + d_uv;
            if dv_new < dist[v] {
                dist[v] = dv_new;
                queue.push((dv_new, v));
            }
        }
    }
    dist
}

// Relaxes every edge n - 1 times
pub fn bellman_ford(n: usize, edges: &[Edge], start: usize) -> Vec<u64> {
    let mut dist = vec![INF; n];
    dist[start] = 0;
    for _ in 1..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            if dist[u] != INF && dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn slowest(dist: Vec<u64>) -> Option<u64> {
    dist.into_iter().try_fold(0, |acc, d| (d != INF).then(|| acc.max(d)))
}

// Time for a signal from `source` to reach every node, None if some node is unreachable
pub fn network_delay_time(n: usize, times: &[Edge], source: usize) -> Option<u64> {
    let pairs: Vec<(usize, (usize, u64))> = times.iter().map(|&(u, v, w)| (u, (v, w))).collect();
    let graph = Jagged::from_assoc_list(n, &pairs);
    slowest(dijkstra(&graph, source))
}

pub fn network_delay_time_bellman_ford(n: usize, times: &[Edge], source: usize) -> Option<u64> {
    slowest(bellman_ford(n, times, source))
}

fn differ_by_one(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).filter(|(x, y)| x != y).count() == 1
}

// Words on the shortest transformation sequence, 0 if `end` is unreachable
pub fn ladder_length(begin: &str, end: &str, words: &[String]) -> usize {
    let Some(target) = words.iter().position(|w| w == end) else {
        return 0;
    };
    if begin == end {
        return 1;
    }
    let mut words: Vec<&[u8]> = words.iter().map(|w| w.as_bytes()).collect();
    words.push(begin.as_bytes());
    let start = words.len() - 1;

    // "h*t" -> every word matching it
    let mut buckets: FxHashMap<Vec<u8>, Vec<usize>> = FxHashMap::default();
    for (i, w) in words.iter().enumerate() {
        for k in 0..w.len() {
            let mut key = w.to_vec();
            key[k] = b'*';
            buckets.entry(key).or_default().push(i);
        }
    }

    let mut dist = vec![0; words.len()];
    dist[start] = 1;
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for k in 0..words[u].len() {
            let mut key = words[u].to_vec();
            key[k] = b'*';
            // Each bucket is a clique, so it only needs to be drained once
            for v in buckets.remove(&key).unwrap_or_default() {
                if dist[v] == 0 {
                    dist[v] = dist[u] + 1;
                    if v == target {
                        return dist[v];
                    }
                    queue.push_back(v);
                }
            }
        }
    }
    0
}

// Compares every pair of words for each expansion, O(n^2 L)
pub fn ladder_length_pairwise(begin: &str, end: &str, words: &[String]) -> usize {
    if begin == end {
        return usize::from(words.iter().any(|w| w == end));
    }
    let words: Vec<&[u8]> = words.iter().map(|w| w.as_bytes()).collect();
    let mut seen = vec![false; words.len()];
    let mut frontier = vec![begin.as_bytes()];
    let mut steps = 1;
    while !frontier.is_empty() {
        steps += 1;
        let mut next = vec![];
        for u in frontier {
            for (i, &w) in words.iter().enumerate() {
                if !seen[i] && differ_by_one(u, w) {
                    if w == end.as_bytes() {
                        return steps;
                    }
                    seen[i] = true;
                    next.push(w);
                }
            }
        }
        frontier = next;
    }
    0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_shortest_paths_agree() {
        let mut rng = Rng::new(137);
        for _ in 0..300 {
            let n = 1 + rng.index(8);
            let m = rng.index(20);
            let times: Vec<Edge> = (0..m)
                .map(|_| (rng.index(n), rng.index(n), rng.range_u64(0..10)))
                .collect();
            let source = rng.index(n);
            assert_eq!(
                network_delay_time(n, &times, source),
                network_delay_time_bellman_ford(n, &times, source)
            );
        }
    }

    #[test]
    fn test_ladders_agree() {
        let mut rng = Rng::new(139);
        for _ in 0..200 {
            let n = rng.index(12);
            let mut word = || -> String {
                (0..3).map(|_| (b'a' + rng.index(3) as u8) as char).collect()
            };
            let begin = word();
            let end = word();
            let words: Vec<String> = (0..n).map(|_| word()).collect();
            assert_eq!(
                ladder_length(&begin, &end, &words),
                ladder_length_pairwise(&begin, &end, &words),
                "{begin} -> {end} via {words:?}"
            );
        }
    }
}
