use std::collections::VecDeque;

use rustc_hash::FxHashSet;

// Ways to climb n steps taking 1 or 2 at a time
pub fn climb_stairs_memo(n: usize) -> u64 {
    fn go(n: usize, memo: &mut [Option<u64>]) -> u64 {
        if n <= 1 {
            return 1;
        }
        if let Some(x) = memo[n] {
            return x;
        }
        let x = go(n - 1, memo) + go(n - 2, memo);
        memo[n] = Some(x);
        x
    }
    go(n, &mut vec![None; n + 1])
}

pub fn climb_stairs_table(n: usize) -> u64 {
    let mut dp = vec![1u64; n + 1];
    for i in 2..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
    }
    dp[n]
}

pub fn climb_stairs(n: usize) -> u64 {
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 1..n {
        (a, b) = (b, a + b);
    }
    b
}

// Best loot without robbing two adjacent houses
pub fn rob(houses: &[u32]) -> u64 {
    // (best ending before the previous house, best so far)
    let (_, best) = houses.iter().fold((0u64, 0u64), |(skip, take), &x| {
        (take, take.max(skip + x as u64))
    });
    best
}

// Houses on a circle: the first and last are adjacent
pub fn rob_circular(houses: &[u32]) -> u64 {
    match houses {
        [] => 0,
        [x] => *x as u64,
        _ => rob(&houses[1..]).max(rob(&houses[..houses.len() - 1])),
    }
}

// Fewest coins summing to amount
pub fn coin_change(coins: &[u32], amount: u32) -> Option<u32> {
    let amount = amount as usize;
    let mut dp: Vec<Option<u32>> = vec![None; amount + 1];
    dp[0] = Some(0);
    for a in 1..=amount {
        dp[a] = coins
            .iter()
            .filter(|&&c| c as usize <= a && c > 0)
            .filter_map(|&c| dp[a - c as usize])
            .min()
            .map(|k| k + 1);
    }
    dp[amount]
}

// Level-by-level search over reachable amounts
pub fn coin_change_bfs(coins: &[u32], amount: u32) -> Option<u32> {
    let mut dist = vec![None; amount as usize + 1];
    dist[0] = Some(0u32);
    let mut queue = VecDeque::from([0u32]);
    while let Some(a) = queue.pop_front() {
        let d = dist[a as usize]?;
        if a == amount {
            return Some(d);
        }
        for &c in coins {
            let b = a.saturating_add(c);
            if c > 0 && b <= amount && dist[b as usize].is_none() {
                dist[b as usize] = Some(d + 1);
                queue.push_back(b);
            }
        }
    }
    None
}

// Unordered combinations of coins summing to amount
pub fn coin_change_ways(coins: &[u32], amount: u32) -> u64 {
    let amount = amount as usize;
    let mut dp = vec![0u64; amount + 1];
    dp[0] = 1;
    for &c in coins {
        let c = c as usize;
        if c == 0 {
            continue;
        }
        for a in c..=amount {
            dp[a] += dp[a - c];
        }
    }
    dp[amount]
}

// Letters 'A'..'Z' encoded as 1..26
pub fn decode_ways(s: &str) -> u64 {
    let s = s.as_bytes();
    // ways for s[..i - 1] and s[..i]
    let (mut two_back, mut one_back) = (0u64, 1u64);
    for i in 0..s.len() {
        let mut cur = 0;
        if (b'1'..=b'9').contains(&s[i]) {
            cur += one_back;
        }
        if i > 0 && matches!((s[i - 1], s[i]), (b'1', b'0'..=b'9') | (b'2', b'0'..=b'6')) {
            cur += two_back;
        }
        (two_back, one_back) = (one_back, cur);
    }
    one_back
}

pub fn decode_ways_rec(s: &str) -> u64 {
    fn go(s: &[u8]) -> u64 {
        match s {
            [] => 1,
            [b'0', ..] => 0,
            [a, b, rest @ ..]
                if a.is_ascii_digit()
                    && b.is_ascii_digit()
                    && (a - b'0') * 10 + (b - b'0') <= 26 =>
            {
                go(&s[1..]) + go(rest)
            }
            [a, ..] if a.is_ascii_digit() => go(&s[1..]),
            _ => 0,
        }
    }
    go(s.as_bytes())
}

pub fn word_break(s: &str, words: &[String]) -> bool {
    let dict: FxHashSet<&[u8]> = words.iter().map(|w| w.as_bytes()).collect();
    let max_len = words.iter().map(String::len).max().unwrap_or(0);
    let s = s.as_bytes();
    // reachable[i]: s[..i] splits into words
    let mut reachable = vec![false; s.len() + 1];
    reachable[0] = true;
    for i in 1..=s.len() {
        reachable[i] = (i.saturating_sub(max_len)..i).any(|j| reachable[j] && dict.contains(&s[j..i]));
    }
    reachable[s.len()]
}

pub fn word_break_memo(s: &str, words: &[String]) -> bool {
    fn go(s: &[u8], start: usize, words: &[String], memo: &mut [Option<bool>]) -> bool {
        if start == s.len() {
            return true;
        }
        if let Some(x) = memo[start] {
            return x;
        }
        let x = words.iter().any(|w| {
            !w.is_empty()
                && s[start..].starts_with(w.as_bytes())
                && go(s, start + w.len(), words, memo)
        });
        memo[start] = Some(x);
        x
    }
    go(s.as_bytes(), 0, words, &mut vec![None; s.len()])
}

// Strictly increasing
pub fn length_of_lis_quadratic(xs: &[i32]) -> usize {
    let mut dp = vec![1; xs.len()];
    for i in 0..xs.len() {
        for j in 0..i {
            if xs[j] < xs[i] {
                dp[i] = dp[i].max(dp[j] + 1);
            }
        }
    }
    dp.into_iter().max().unwrap_or(0)
}

// Patience sorting: tails[k] is the least tail of an increasing run of length k + 1
pub fn length_of_lis(xs: &[i32]) -> usize {
    let mut tails: Vec<i32> = vec![];
    for &x in xs {
        let k = tails.partition_point(|&t| t < x);
        if k == tails.len() {
            tails.push(x);
        } else {
            tails[k] = x;
        }
    }
    tails.len()
}

// Kadane; None for an empty array. Sums are kept in i128 so they cannot overflow.
pub fn max_subarray(xs: &[i64]) -> Option<i128> {
    let mut best: Option<i128> = None;
    let mut cur = 0i128;
    for &x in xs {
        let x = x as i128;
        cur = x.max(cur + x);
        best = Some(best.map_or(cur, |b| b.max(cur)));
    }
    best
}

pub fn max_subarray_divide(xs: &[i64]) -> Option<i128> {
    #[derive(Clone, Copy)]
    struct Summary {
        total: i128,
        prefix: i128,
        suffix: i128,
        best: i128,
    }

    fn go(xs: &[i64]) -> Summary {
        if let [x] = xs {
            let x = *x as i128;
            return Summary {
                total: x,
                prefix: x,
                suffix: x,
                best: x,
            };
        }
        let (l, r) = xs.split_at(xs.len() / 2);
        let (l, r) = (go(l), go(r));
        Summary {
            total: l.total + r.total,
            prefix: l.prefix.max(l.total + r.prefix),
            suffix: r.suffix.max(r.total + l.suffix),
            best: l.best.max(r.best).max(l.suffix + r.prefix),
        }
    }

    (!xs.is_empty()).then(|| go(xs).best)
}

// Saturating products: exact whenever the answer fits in i64, otherwise i64::MAX.
// A product that saturates already exceeds every bound it is compared against.
pub fn max_product_subarray(xs: &[i64]) -> Option<i64> {
    let (&first, rest) = xs.split_first()?;
    let (mut hi, mut lo, mut best) = (first, first, first);
    for &x in rest {
        let candidates = [x, hi.saturating_mul(x), lo.saturating_mul(x)];
        hi = candidates.into_iter().max()?;
        lo = candidates.into_iter().min()?;
        best = best.max(hi);
    }
    Some(best)
}

pub fn max_product_subarray_brute(xs: &[i64]) -> Option<i64> {
    (0..xs.len())
        .flat_map(|i| {
            (i..xs.len()).scan(1, move |acc, j| {
                *acc = xs[j].saturating_mul(*acc);
                Some(*acc)
            })
        })
        .max()
}

// Split into two halves of equal sum
pub fn can_partition(xs: &[u32]) -> bool {
    let total: u64 = xs.iter().map(|&x| x as u64).sum();
    if total % 2 == 1 {
        return false;
    }
    let half = (total / 2) as usize;
    let mut reachable = vec![false; half + 1];
    reachable[0] = true;
    for &x in xs {
        let x = x as usize;
        for s in (x..=half).rev() {
            reachable[s] |= reachable[s - x];
        }
    }
    reachable[half]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_climb_stairs() {
        for n in 0..60 {
            let x = climb_stairs(n);
            assert_eq!(climb_stairs_memo(n), x);
            assert_eq!(climb_stairs_table(n), x);
        }
        assert_eq!(climb_stairs(5), 8);
    }

    #[test]
    fn test_coins_agree() {
        let mut rng = Rng::new(163);
        for _ in 0..300 {
            let k = rng.index(4);
            let coins: Vec<u32> = (0..k).map(|_| rng.range_u64(1..12) as u32).collect();
            let amount = rng.range_u64(0..60) as u32;
            assert_eq!(coin_change(&coins, amount), coin_change_bfs(&coins, amount));
            assert_eq!(
                coin_change(&coins, amount).is_some(),
                coin_change_ways(&coins, amount) > 0
            );
        }
    }

    #[test]
    fn test_decode_agree() {
        let mut rng = Rng::new(167);
        for _ in 0..500 {
            let n = rng.index(10);
            let s: String = (0..n).map(|_| (b'0' + rng.index(4) as u8) as char).collect();
            assert_eq!(decode_ways(&s), decode_ways_rec(&s), "{s}");
        }
    }

    #[test]
    fn test_lis_agree() {
        let mut rng = Rng::new(173);
        for _ in 0..300 {
            let n = rng.index(20);
            let xs = rng.vec_i32(n, -5..5);
            assert_eq!(length_of_lis(&xs), length_of_lis_quadratic(&xs));
        }
    }

    #[test]
    fn test_subarrays_agree() {
        let mut rng = Rng::new(179);
        for _ in 0..300 {
            let n = rng.index(12);
            let xs: Vec<i64> = rng.vec_i32(n, -4..5).into_iter().map(i64::from).collect();
            assert_eq!(max_subarray(&xs), max_subarray_divide(&xs));
            assert_eq!(max_product_subarray(&xs), max_product_subarray_brute(&xs));
        }
    }

    #[test]
    fn test_subarrays_extreme_values() {
        let xs = [i64::MAX, i64::MAX, -1, i64::MIN];
        assert_eq!(max_subarray(&xs), Some(2 * i64::MAX as i128));
        assert_eq!(max_subarray_divide(&xs), Some(2 * i64::MAX as i128));
        assert_eq!(max_subarray(&[i64::MIN, i64::MIN]), Some(i64::MIN as i128));

        let big = 1i64 << 40;
        // Only big * big overflows; the answer is the lone element
        assert_eq!(max_product_subarray(&[big, -big, 0, 3]), Some(big));
        assert_eq!(max_product_subarray_brute(&[big, -big, 0, 3]), Some(big));
        assert_eq!(max_product_subarray(&[-big, 2, -big, 0, 7]), Some(i64::MAX));
        assert_eq!(max_product_subarray_brute(&[-big, 2, -big, 0, 7]), Some(i64::MAX));
        assert_eq!(max_product_subarray(&[-big, -big, -big, 5]), Some(i64::MAX));
    }

    #[test]
    fn test_partition_against_subsets() {
        let mut rng = Rng::new(181);
        for _ in 0..200 {
            let n = rng.index(10);
            let xs: Vec<u32> = (0..n).map(|_| rng.range_u64(1..10) as u32).collect();
            let total: u32 = xs.iter().sum();
            let expected = (0..1u32 << n).any(|mask| {
                let s: u32 = (0..n).filter(|i| mask >> i & 1 == 1).map(|i| xs[i]).sum();
                2 * s == total
            });
            assert_eq!(can_partition(&xs), expected);
        }
    }

    #[test]
    fn test_word_break_agree() {
        let words: Vec<String> = ["a", "ab", "bab", "ba"].iter().map(|s| s.to_string()).collect();
        let mut rng = Rng::new(191);
        for _ in 0..300 {
            let n = rng.index(10);
            let s: String = (0..n).map(|_| (b'a' + rng.index(2) as u8) as char).collect();
            assert_eq!(word_break(&s, &words), word_break_memo(&s, &words), "{s}");
        }
    }
}
