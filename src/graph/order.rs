use std::collections::VecDeque;

use super::jagged::Jagged;

// Kahn's algorithm, with lazy evaluation. Stops early on a cycle.
pub fn toposort(neighbors: &Jagged<usize>) -> impl Iterator<Item = usize> + '_ {
    let n = neighbors.len();
    let mut indegree: Vec<u32> = vec![0; n];
    for u in 0..n {
        for &v in &neighbors[u] {
            indegree[v] += 1;
        }
    }

    // intialize queue with zero indegree nodes
    let mut queue: VecDeque<usize> = indegree
        .iter()
        .enumerate()
        .filter_map(|(i, &d)| (d == 0).then_some(i))
        .collect();

    std::iter::from_fn(move || {
        queue.pop_front().map(|u| {
            for &v in &neighbors[u] {
                indegree[v] -= 1;
                if indegree[v] == 0 {
                    queue.push_back(v);
                }
            }
            u
        })
    })
}

// `[a, b]` means b must come before a
fn prerequisite_graph(n: usize, prerequisites: &[[usize; 2]]) -> Jagged<usize> {
    let edges: Vec<[usize; 2]> = prerequisites.iter().map(|&[a, b]| [b, a]).collect();
    Jagged::directed(n, &edges)
}

pub fn find_order_kahn(n: usize, prerequisites: &[[usize; 2]]) -> Option<Vec<usize>> {
    let graph = prerequisite_graph(n, prerequisites);
    let order: Vec<usize> = toposort(&graph).collect();
    (order.len() == n).then_some(order)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

// Reversed post-order; a gray node reached again closes a cycle
pub fn find_order_dfs(n: usize, prerequisites: &[[usize; 2]]) -> Option<Vec<usize>> {
    fn visit(graph: &Jagged<usize>, u: usize, color: &mut [Color], post: &mut Vec<usize>) -> bool {
        color[u] = Color::Gray;
        for &v in &graph[u] {
            let acyclic = match color[v] {
                Color::White => visit(graph, v, color, post),
                Color::Gray => false,
                Color::Black => true,
            };
            if !acyclic {
                return false;
            }
        }
        color[u] = Color::Black;
        post.push(u);
        true
    }

    let graph = prerequisite_graph(n, prerequisites);
    let mut color = vec![Color::White; n];
    let mut post = Vec::with_capacity(n);
    for u in 0..n {
        if color[u] == Color::White && !visit(&graph, u, &mut color, &mut post) {
            return None;
        }
    }
    post.reverse();
    Some(post)
}

pub fn can_finish_kahn(n: usize, prerequisites: &[[usize; 2]]) -> bool {
    find_order_kahn(n, prerequisites).is_some()
}

pub fn can_finish_dfs(n: usize, prerequisites: &[[usize; 2]]) -> bool {
    find_order_dfs(n, prerequisites).is_some()
}
