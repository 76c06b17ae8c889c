// Monotone lattice paths from the top-left to the bottom-right corner; None past u64
pub fn unique_paths(rows: usize, cols: usize) -> Option<u64> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }
    let mut dp = vec![1u64; cols];
    for _ in 1..rows {
        for j in 1..cols {
            dp[j] = dp[j].checked_add(dp[j - 1])?;
        }
    }
    Some(dp[cols - 1])
}

// C(rows + cols - 2, rows - 1), multiplied out so every prefix stays integral.
// Each prefix is C(n - k + i, i) <= the answer, so a u64 prefix times the next factor fits u128.
pub fn unique_paths_comb(rows: usize, cols: usize) -> Option<u64> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }
    let (n, k) = ((rows + cols - 2) as u128, (rows.min(cols) - 1) as u128);
    let mut acc: u64 = 1;
    for i in 1..=k {
        acc = u64::try_from(acc as u128 * (n - k + i) / i).ok()?;
    }
    Some(acc)
}

// Nonzero cells are blocked
pub fn unique_paths_with_obstacles(grid: &[Vec<u8>]) -> u64 {
    let cols = grid.first().map_or(0, Vec::len);
    let mut dp = vec![0u64; cols];
    if cols > 0 {
        dp[0] = 1;
    }
    for row in grid {
        for j in 0..cols {
            if row.get(j).map_or(true, |&c| c != 0) {
                dp[j] = 0;
            } else if j > 0 {
                dp[j] += dp[j - 1];
            }
        }
    }
    dp.last().copied().unwrap_or(0)
}

// Cheapest monotone path, counting both corners
pub fn min_path_sum(grid: &[Vec<u32>]) -> Option<u64> {
    let cols = grid.first().map_or(0, Vec::len);
    if cols == 0 {
        return None;
    }
    let mut dp = vec![u64::MAX; cols];
    dp[0] = 0;
    for row in grid {
        if row.len() != cols {
            return None;
        }
        dp[0] += row[0] as u64;
        for j in 1..cols {
            dp[j] = dp[j].min(dp[j - 1]) + row[j] as u64;
        }
    }
    dp.last().copied()
}

pub fn longest_common_subsequence<T: Eq>(a: &[T], b: &[T]) -> usize {
    // dp[i][j]: LCS of a[..i] and b[..j]
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

// Levenshtein distance over insertions, deletions and substitutions
pub fn edit_distance_table<T: Eq>(a: &[T], b: &[T]) -> usize {
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 0..=a.len() {
        dp[i][0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let replace = dp[i - 1][j - 1] + (a[i - 1] != b[j - 1]) as usize;
            dp[i][j] = replace.min(dp[i - 1][j] + 1).min(dp[i][j - 1] + 1);
        }
    }
    dp[a.len()][b.len()]
}

// Two rows of the table
pub fn edit_distance<T: Eq>(a: &[T], b: &[T]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=b.len() {
            let replace = prev[j - 1] + (a[i - 1] != b[j - 1]) as usize;
            cur[j] = replace.min(prev[j] + 1).min(cur[j - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}
