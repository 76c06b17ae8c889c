// Edge lists: n, then a counted list of pairs over nodes 0..n

pub mod connectivity;
pub mod grid;
pub mod jagged;
pub mod order;
pub mod shortest;

pub use jagged::Jagged;

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

use connectivity::*;
use grid::*;
use order::*;
use shortest::*;

fn check_nodes(n: usize, nodes: impl IntoIterator<Item = usize>) -> Result<()> {
    match nodes.into_iter().find(|&u| u >= n) {
        Some(u) => Err(Error::invalid(format!("node {u} out of range 0..{n}"))),
        None => Ok(()),
    }
}

fn read_graph(input: &mut &[u8]) -> Result<(usize, Vec<[usize; 2]>)> {
    let n: usize = input.value()?;
    let edges = input.pairs()?;
    check_nodes(n, edges.iter().flatten().copied())?;
    Ok((n, edges))
}

// `n m` then m triples `u v w`, 1-indexed, then the source
fn read_network(input: &mut &[u8]) -> Result<(usize, Vec<Edge>, usize)> {
    let (n, m): (usize, usize) = (input.value()?, input.value()?);
    let mut times = Vec::with_capacity(m);
    for _ in 0..m {
        let (u, v, w): (usize, usize, u64) = (input.value()?, input.value()?, input.value()?);
        check_nodes(n + 1, [u, v])?;
        if u == 0 || v == 0 {
            return Err(Error::invalid("nodes are numbered from 1"));
        }
        times.push((u - 1, v - 1, w));
    }
    let source: usize = input.value()?;
    if source == 0 || source > n {
        return Err(Error::invalid(format!("source {source} out of range 1..={n}")));
    }
    Ok((n, times, source - 1))
}

fn read_ladder(input: &mut &[u8]) -> Result<(String, String, Vec<String>)> {
    Ok((input.word()?, input.word()?, input.words()?))
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("num-islands", Topic::Graph, "connected groups of '1' cells")
            .variant("dfs", |input| Ok(render(num_islands_dfs(&input.char_grid()?))))
            .variant("bfs", |input| Ok(render(num_islands_bfs(&input.char_grid()?))))
            .variant("union-find", |input| Ok(render(num_islands_dset(&input.char_grid()?))))
            .sample("4 11110 11010 11000 00000", "1")
            .sample("4 11000 11000 00100 00011", "3"),
        Problem::new("max-area-of-island", Topic::Graph, "largest group of '1' cells")
            .variant("dfs", |input| Ok(render(max_area_of_island(&input.char_grid()?))))
            .sample("3 0110 0100 0011", "3")
            .sample("2 00 00", "0"),
        Problem::new("rotting-oranges", Topic::Graph, "minutes until every orange rots")
            .variant("multi-source-bfs", |input| Ok(render(oranges_rotting(&input.char_grid()?))))
            .sample("3 211 110 011", "Some(4)")
            .sample("3 211 011 101", "None")
            .sample("1 02", "Some(0)"),
        Problem::new("pacific-atlantic", Topic::Graph, "cells draining into both oceans")
            .variant("reverse-flow", |input| Ok(render(pacific_atlantic(&input.matrix()?))))
            .variant("per-cell-search", |input| {
                Ok(render(pacific_atlantic_brute(&input.matrix()?)))
            })
            .sample(
                "5 5 1 2 2 3 5 3 2 3 4 4 2 4 5 3 1 6 7 1 4 5 5 1 1 2 4",
                "[[0, 4], [1, 3], [1, 4], [2, 2], [3, 0], [3, 1], [4, 0]]",
            )
            .sample("1 1 1", "[[0, 0]]"),
        Problem::new("course-schedule", Topic::Graph, "prerequisites admit some order")
            .variant("kahn", |input| {
                let (n, prerequisites) = read_graph(input)?;
                Ok(render(can_finish_kahn(n, &prerequisites)))
            })
            .variant("dfs-coloring", |input| {
                let (n, prerequisites) = read_graph(input)?;
                Ok(render(can_finish_dfs(n, &prerequisites)))
            })
            .sample("2 1 1 0", "true")
            .sample("2 2 1 0 0 1", "false"),
        Problem::new("course-order", Topic::Graph, "an order satisfying every prerequisite")
            .variant("kahn", |input| {
                let (n, prerequisites) = read_graph(input)?;
                Ok(render(find_order_kahn(n, &prerequisites)))
            })
            .variant("dfs-coloring", |input| {
                let (n, prerequisites) = read_graph(input)?;
                Ok(render(find_order_dfs(n, &prerequisites)))
            })
            .sample("4 3 1 0 2 1 3 2", "Some([0, 1, 2, 3])")
            .sample("2 2 1 0 0 1", "None")
            .sample("1 0", "Some([0])"),
        Problem::new("count-components", Topic::UnionFind, "connected components of an undirected graph")
            .variant("union-find", |input| {
                let (n, edges) = read_graph(input)?;
                Ok(render(count_components_dset(n, &edges)))
            })
            .variant("dfs", |input| {
                let (n, edges) = read_graph(input)?;
                Ok(render(count_components_dfs(n, &edges)))
            })
            .sample("5 3 0 1 1 2 3 4", "2")
            .sample("5 4 0 1 1 2 2 3 3 4", "1"),
        Problem::new("number-of-provinces", Topic::UnionFind, "components of an adjacency matrix")
            .variant("union-find", |input| Ok(render(find_circle_num_dset(&input.matrix()?))))
            .variant("dfs", |input| Ok(render(find_circle_num_dfs(&input.matrix()?))))
            .sample("3 3 1 1 0 1 1 0 0 0 1", "2")
            .sample("3 3 1 0 0 0 1 0 0 0 1", "3"),
        Problem::new("redundant-connection", Topic::UnionFind, "last edge that closes a cycle")
            .variant("union-find", |input| Ok(render(redundant_connection(&input.pairs()?))))
            .sample("3 1 2 1 3 2 3", "Some([2, 3])")
            .sample("5 1 2 2 3 3 4 1 4 1 5", "Some([1, 4])"),
        Problem::new("graph-valid-tree", Topic::UnionFind, "edges form a single tree")
            .variant("union-find", |input| {
                let (n, edges) = read_graph(input)?;
                Ok(render(valid_tree_dset(n, &edges)))
            })
            .variant("dfs", |input| {
                let (n, edges) = read_graph(input)?;
                Ok(render(valid_tree_dfs(n, &edges)))
            })
            .sample("5 4 0 1 0 2 0 3 1 4", "true")
            .sample("5 5 0 1 1 2 2 3 1 3 1 4", "false"),
        Problem::new("network-delay-time", Topic::Graph, "time for a signal to reach every node")
            .variant("dijkstra", |input| {
                let (n, times, source) = read_network(input)?;
                Ok(render(network_delay_time(n, &times, source)))
            })
            .variant("bellman-ford", |input| {
                let (n, times, source) = read_network(input)?;
                Ok(render(network_delay_time_bellman_ford(n, &times, source)))
            })
            .sample("4 3 2 1 1 2 3 1 3 4 1 2", "Some(2)")
            .sample("2 1 1 2 1 1", "Some(1)")
            .sample("2 1 1 2 1 2", "None"),
        Problem::new("word-ladder", Topic::Graph, "shortest chain of one-letter edits")
            .variant("wildcard-buckets", |input| {
                let (begin, end, words) = read_ladder(input)?;
                Ok(render(ladder_length(&begin, &end, &words)))
            })
            .variant("pairwise-bfs", |input| {
                let (begin, end, words) = read_ladder(input)?;
                Ok(render(ladder_length_pairwise(&begin, &end, &words)))
            })
            .sample("hit cog 6 hot dot dog lot log cog", "5")
            .sample("hit cog 5 hot dot dog lot log", "0"),
    ]
}
