#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

// dp[i][w]: best value from items[..i] within weight w
pub fn knapsack_01_table(items: &[Item], capacity: u32) -> u64 {
    let cap = capacity as usize;
    let mut dp = vec![vec![0u64; cap + 1]; items.len() + 1];
    for (i, item) in items.iter().enumerate() {
        let w = item.weight as usize;
        for c in 0..=cap {
            dp[i + 1][c] = dp[i][c];
            if w <= c {
                dp[i + 1][c] = dp[i + 1][c].max(dp[i][c - w] + item.value as u64);
            }
        }
    }
    dp[items.len()][cap]
}

// One row, updated right to left so every item is taken at most once
pub fn knapsack_01(items: &[Item], capacity: u32) -> u64 {
    let cap = capacity as usize;
    let mut dp = vec![0u64; cap + 1];
    for item in items {
        let w = item.weight as usize;
        for c in (w..=cap).rev() {
            dp[c] = dp[c].max(dp[c - w] + item.value as u64);
        }
    }
    dp[cap]
}

// Sign assignments of xs summing to target.
// With P the positive part, P = (sum + target) / 2, so this counts subsets summing to P.
pub fn target_sum(xs: &[u32], target: i64) -> u64 {
    let total: i64 = xs.iter().map(|&x| x as i64).sum();
    if target.abs() > total || (total + target) % 2 != 0 {
        return 0;
    }
    let goal = ((total + target) / 2) as usize;
    let mut ways = vec![0u64; goal + 1];
    ways[0] = 1;
    for &x in xs {
        let x = x as usize;
        for s in (x..=goal).rev() {
            ways[s] += ways[s - x];
        }
    }
    ways[goal]
}

pub fn target_sum_brute(xs: &[u32], target: i64) -> u64 {
    match xs.split_first() {
        None => (target == 0) as u64,
        Some((&x, rest)) => {
            target_sum_brute(rest, target - x as i64) + target_sum_brute(rest, target + x as i64)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_knapsack_agree() {
        let mut rng = Rng::new(199);
        for _ in 0..300 {
            let n = rng.index(8);
            let items: Vec<Item> = (0..n)
                .map(|_| Item {
                    weight: rng.range_u64(0..8) as u32,
                    value: rng.range_u64(0..20) as u32,
                })
                .collect();
            let capacity = rng.range_u64(0..20) as u32;
            let best = knapsack_01(&items, capacity);
            assert_eq!(knapsack_01_table(&items, capacity), best);

            let naive = (0..1u32 << n)
                .filter_map(|mask| {
                    let chosen = (0..n).filter(|i| mask >> i & 1 == 1).map(|i| items[i]);
                    let (w, v) = chosen.fold((0, 0), |(w, v), it| (w + it.weight, v + it.value as u64));
                    (w <= capacity).then_some(v)
                })
                .max()
                .unwrap_or(0);
            assert_eq!(best, naive);
        }
    }

    #[test]
    fn test_target_sum_agree() {
        let mut rng = Rng::new(211);
        for _ in 0..300 {
            let n = rng.index(10);
            let xs: Vec<u32> = (0..n).map(|_| rng.range_u64(0..5) as u32).collect();
            let target = rng.range_i32(-8..9) as i64;
            assert_eq!(target_sum(&xs, target), target_sum_brute(&xs, target));
        }
        assert_eq!(target_sum(&[1, 1, 1, 1, 1], 3), 5);
    }
}
