use std::collections::VecDeque;

use crate::dset::DisjointSet;

pub type Cell = (usize, usize);

// 4-neighbors that fall inside the (possibly ragged) grid
pub fn neighbors<T>(grid: &[Vec<T>], (i, j): Cell) -> impl Iterator<Item = Cell> + '_ {
    [
        (i.wrapping_sub(1), j),
        (i + 1, j),
        (i, j.wrapping_sub(1)),
        (i, j + 1),
    ]
    .into_iter()
    .filter(move |&(i, j)| i < grid.len() && j < grid[i].len())
}

fn cells<T>(grid: &[Vec<T>]) -> impl Iterator<Item = Cell> + '_ {
    (0..grid.len()).flat_map(move |i| (0..grid[i].len()).map(move |j| (i, j)))
}

fn is_land(c: u8) -> bool {
    c == b'1'
}

// Flood fill from `start`, sinking the land it visits. Returns the area.
fn sink(grid: &mut [Vec<u8>], start: Cell) -> usize {
    let mut area = 0;
    let mut stack = vec![start];
    grid[start.0][start.1] = b'0';
    while let Some(u) = stack.pop() {
        area += 1;
        let next: Vec<Cell> = neighbors(grid, u)
            .filter(|&(i, j)| is_land(grid[i][j]))
            .collect();
        for (i, j) in next {
            grid[i][j] = b'0';
            stack.push((i, j));
        }
    }
    area
}

pub fn num_islands_dfs(grid: &[Vec<u8>]) -> usize {
    let mut grid = grid.to_vec();
    let mut count = 0;
    for i in 0..grid.len() {
        for j in 0..grid[i].len() {
            if is_land(grid[i][j]) {
                sink(&mut grid, (i, j));
                count += 1;
            }
        }
    }
    count
}

pub fn num_islands_bfs(grid: &[Vec<u8>]) -> usize {
    let mut visited: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut count = 0;
    for (i, j) in cells(grid) {
        if !is_land(grid[i][j]) || visited[i][j] {
            continue;
        }
        count += 1;
        visited[i][j] = true;
        let mut queue = VecDeque::from([(i, j)]);
        while let Some(u) = queue.pop_front() {
            for (vi, vj) in neighbors(grid, u) {
                if is_land(grid[vi][vj]) && !visited[vi][vj] {
                    visited[vi][vj] = true;
                    queue.push_back((vi, vj));
                }
            }
        }
    }
    count
}

pub fn num_islands_dset(grid: &[Vec<u8>]) -> usize {
    let mut offset = vec![0];
    for row in grid {
        offset.push(offset[offset.len() - 1] + row.len());
    }
    let id = |(i, j): Cell| offset[i] + j;

    let mut dset = DisjointSet::new(offset[grid.len()]);
    let mut water = 0;
    for u in cells(grid) {
        if !is_land(grid[u.0][u.1]) {
            water += 1;
            continue;
        }
        for v in [(u.0 + 1, u.1), (u.0, u.1 + 1)] {
            if v.0 < grid.len() && v.1 < grid[v.0].len() && is_land(grid[v.0][v.1]) {
                dset.merge(id(u), id(v));
            }
        }
    }
    dset.n_sets() - water
}

pub fn max_area_of_island(grid: &[Vec<u8>]) -> usize {
    let mut grid = grid.to_vec();
    let mut best = 0;
    for i in 0..grid.len() {
        for j in 0..grid[i].len() {
            if is_land(grid[i][j]) {
                best = best.max(sink(&mut grid, (i, j)));
            }
        }
    }
    best
}

// '0' empty, '1' fresh, '2' rotten. Minutes until nothing is fresh, None if some orange never rots.
pub fn oranges_rotting(grid: &[Vec<u8>]) -> Option<u32> {
    let mut grid = grid.to_vec();
    let mut fresh = 0;
    let mut queue = VecDeque::new();
    for (i, j) in cells(&grid) {
        match grid[i][j] {
            b'1' => fresh += 1,
            b'2' => queue.push_back(((i, j), 0)),
            _ => {}
        }
    }

    let mut minutes = 0;
    while let Some((u, t)) = queue.pop_front() {
        minutes = t;
        let next: Vec<Cell> = neighbors(&grid, u)
            .filter(|&(i, j)| grid[i][j] == b'1')
            .collect();
        for (i, j) in next {
            grid[i][j] = b'2';
            fresh -= 1;
            queue.push_back(((i, j), t + 1));
        }
    }
    (fresh == 0).then_some(minutes)
}

// Cells reachable uphill from the given border cells
fn climb(heights: &[Vec<u32>], sources: impl IntoIterator<Item = Cell>) -> Vec<Vec<bool>> {
    let mut seen: Vec<Vec<bool>> = heights.iter().map(|row| vec![false; row.len()]).collect();
    let mut stack = vec![];
    for (i, j) in sources {
        if !seen[i][j] {
            seen[i][j] = true;
            stack.push((i, j));
        }
    }
    while let Some(u) = stack.pop() {
        for (vi, vj) in neighbors(heights, u) {
            if !seen[vi][vj] && heights[vi][vj] >= heights[u.0][u.1] {
                seen[vi][vj] = true;
                stack.push((vi, vj));
            }
        }
    }
    seen
}

// Cells draining into both oceans: Pacific on the top/left border, Atlantic on the bottom/right. Sorted.
pub fn pacific_atlantic(heights: &[Vec<u32>]) -> Vec<[usize; 2]> {
    let rows = heights.len();
    let cols = heights.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return vec![];
    }
    let pacific = climb(
        heights,
        (0..cols).map(|j| (0, j)).chain((0..rows).map(|i| (i, 0))),
    );
    let atlantic = climb(
        heights,
        (0..cols)
            .map(|j| (rows - 1, j))
            .chain((0..rows).map(|i| (i, cols - 1))),
    );
    cells(heights)
        .filter(|&(i, j)| pacific[i][j] && atlantic[i][j])
        .map(|(i, j)| [i, j])
        .collect()
}

// Downhill search from every cell separately
pub fn pacific_atlantic_brute(heights: &[Vec<u32>]) -> Vec<[usize; 2]> {
    let rows = heights.len();
    let cols = heights.first().map_or(0, Vec::len);
    let mut res = vec![];
    for start in cells(heights) {
        let mut seen = vec![vec![false; cols]; rows];
        seen[start.0][start.1] = true;
        let mut stack = vec![start];
        let (mut pacific, mut atlantic) = (false, false);
        while let Some(u) = stack.pop() {
            pacific |= u.0 == 0 || u.1 == 0;
            atlantic |= u.0 == rows - 1 || u.1 == cols - 1;
            for (vi, vj) in neighbors(heights, u) {
                if !seen[vi][vj] && heights[vi][vj] <= heights[u.0][u.1] {
                    seen[vi][vj] = true;
                    stack.push((vi, vj));
                }
            }
        }
        if pacific && atlantic {
            res.push([start.0, start.1]);
        }
    }
    res
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    fn random_grid(rng: &mut Rng, alphabet: &[u8]) -> Vec<Vec<u8>> {
        let (rows, cols) = (1 + rng.index(6), 1 + rng.index(6));
        (0..rows)
            .map(|_| (0..cols).map(|_| alphabet[rng.index(alphabet.len())]).collect())
            .collect()
    }

    #[test]
    fn test_islands_agree() {
        let mut rng = Rng::new(109);
        for _ in 0..300 {
            let grid = random_grid(&mut rng, b"01");
            let count = num_islands_dfs(&grid);
            assert_eq!(num_islands_bfs(&grid), count);
            assert_eq!(num_islands_dset(&grid), count);
            assert_eq!(max_area_of_island(&grid) == 0, count == 0);
        }
    }

    #[test]
    fn test_pacific_atlantic_agree() {
        let mut rng = Rng::new(113);
        for _ in 0..200 {
            let (rows, cols) = (1 + rng.index(5), 1 + rng.index(5));
            let heights: Vec<Vec<u32>> = (0..rows)
                .map(|_| (0..cols).map(|_| rng.index(4) as u32).collect())
                .collect();
            assert_eq!(pacific_atlantic(&heights), pacific_atlantic_brute(&heights));
        }
    }

    #[test]
    fn test_oranges() {
        fn grid(rows: &[&str]) -> Vec<Vec<u8>> {
            rows.iter().map(|r| r.as_bytes().to_vec()).collect()
        }
        assert_eq!(oranges_rotting(&grid(&["211", "110", "011"])), Some(4));
        assert_eq!(oranges_rotting(&grid(&["211", "011", "101"])), None);
        assert_eq!(oranges_rotting(&grid(&["00"])), Some(0));
    }
}
