use std::collections::BTreeMap;

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

// nums[i] is the longest jump allowed from i
pub fn can_jump(nums: &[u32]) -> bool {
    let mut reach = 0;
    for (i, &x) in nums.iter().enumerate() {
        if i > reach {
            return false;
        }
        reach = reach.max(i + x as usize);
    }
    true
}

// Moves the goal leftwards to every index that can reach it
pub fn can_jump_backward(nums: &[u32]) -> bool {
    let Some(mut goal) = nums.len().checked_sub(1) else {
        return true;
    };
    for i in (0..goal).rev() {
        if i + nums[i] as usize >= goal {
            goal = i;
        }
    }
    goal == 0
}

// Fewest jumps to the last index, as a BFS over reachable windows
pub fn jump(nums: &[u32]) -> Option<usize> {
    let last = nums.len().checked_sub(1)?;
    let (mut jumps, mut window_end, mut farthest) = (0, 0, 0);
    for i in 0..last {
        farthest = farthest.max(i + nums[i] as usize);
        if i == window_end {
            if farthest <= i {
                return None;
            }
            jumps += 1;
            window_end = farthest;
        }
    }
    Some(jumps)
}

pub fn jump_dp(nums: &[u32]) -> Option<usize> {
    let n = nums.len();
    if n == 0 {
        return None;
    }
    let mut dp: Vec<Option<usize>> = vec![None; n];
    dp[0] = Some(0);
    for i in 0..n {
        let Some(d) = dp[i] else { continue };
        for j in i + 1..=(i + nums[i] as usize).min(n - 1) {
            if dp[j].map_or(true, |dj| d + 1 < dj) {
                dp[j] = Some(d + 1);
            }
        }
    }
    dp[n - 1]
}

// Unique starting station completing the loop, if any
pub fn can_complete_circuit(gas: &[u32], cost: &[u32]) -> Option<usize> {
    let (mut total, mut tank, mut start) = (0i64, 0i64, 0);
    for (i, (&g, &c)) in gas.iter().zip(cost).enumerate() {
        let delta = g as i64 - c as i64;
        total += delta;
        tank += delta;
        if tank < 0 {
            start = i + 1;
            tank = 0;
        }
    }
    (total >= 0 && start < gas.len()).then_some(start)
}

pub fn can_complete_circuit_brute(gas: &[u32], cost: &[u32]) -> Option<usize> {
    let n = gas.len().min(cost.len());
    (0..n).find(|&start| {
        let mut tank = 0i64;
        (0..n).all(|k| {
            let i = (start + k) % n;
            tank += gas[i] as i64 - cost[i] as i64;
            tank >= 0
        })
    })
}

// Unlimited transactions, one share held at a time
pub fn max_profit_multi(prices: &[u32]) -> u64 {
    prices
        .windows(2)
        .map(|w| w[1].saturating_sub(w[0]) as u64)
        .sum()
}

// States: holding a share or holding cash after each day
pub fn max_profit_multi_dp(prices: &[u32]) -> u64 {
    let Some(&first) = prices.first() else {
        return 0;
    };
    let (mut hold, mut cash) = (-(first as i64), 0i64);
    for &p in &prices[1..] {
        let p = p as i64;
        (hold, cash) = (hold.max(cash - p), cash.max(hold + p));
    }
    cash as u64
}

// Most parts such that each letter lives in exactly one part
pub fn partition_labels(s: &str) -> Vec<usize> {
    let bytes = s.as_bytes();
    let mut last = [0usize; 256];
    for (i, &b) in bytes.iter().enumerate() {
        last[b as usize] = i;
    }
    let mut parts = vec![];
    let (mut start, mut end) = (0, 0);
    for (i, &b) in bytes.iter().enumerate() {
        end = end.max(last[b as usize]);
        if i == end {
            parts.push(end + 1 - start);
            start = i + 1;
        }
    }
    parts
}

// Rearranges the hand into runs of `group` consecutive values
pub fn is_n_straight_hand(hand: &[i32], group: usize) -> bool {
    if group == 0 {
        return hand.is_empty();
    }
    if hand.len() % group != 0 {
        return false;
    }
    let mut count: BTreeMap<i64, usize> = BTreeMap::new();
    for &card in hand {
        *count.entry(card as i64).or_default() += 1;
    }
    while let Some((&low, &k)) = count.first_key_value() {
        for card in low..low + group as i64 {
            match count.get_mut(&card) {
                Some(c) if *c >= k => {
                    *c -= k;
                    if *c == 0 {
                        count.remove(&card);
                    }
                }
                _ => return false,
            }
        }
    }
    true
}

// Every run starts at the smallest unused card
pub fn is_n_straight_hand_sort(hand: &[i32], group: usize) -> bool {
    if group == 0 {
        return hand.is_empty();
    }
    let mut cards = hand.to_vec();
    cards.sort_unstable();
    let mut used = vec![false; cards.len()];
    for i in 0..cards.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let (mut want, mut j) = (cards[i] as i64 + 1, i + 1);
        for _ in 1..group {
            while j < cards.len() && (used[j] || (cards[j] as i64) < want) {
                j += 1;
            }
            if j == cards.len() || cards[j] as i64 != want {
                return false;
            }
            used[j] = true;
            want += 1;
        }
    }
    true
}

fn read_stations(input: &mut &[u8]) -> Result<(Vec<u32>, Vec<u32>)> {
    let gas: Vec<u32> = input.counted_vec()?;
    let cost = input.vec(gas.len())?;
    Ok((gas, cost))
}

fn read_hand(input: &mut &[u8]) -> Result<(Vec<i32>, usize)> {
    let hand = input.counted_vec()?;
    let group: usize = input.value()?;
    if group == 0 {
        return Err(Error::invalid("group size must be positive"));
    }
    Ok((hand, group))
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("jump-game", Topic::Greedy, "reach the last index")
            .variant("max-reach", |input| Ok(render(can_jump(&input.counted_vec()?))))
            .variant("backward-goal", |input| Ok(render(can_jump_backward(&input.counted_vec()?))))
            .sample("5 2 3 1 1 4", "true")
            .sample("5 3 2 1 0 4", "false")
            .sample("1 0", "true"),
        Problem::new("jump-game-ii", Topic::Greedy, "fewest jumps to the last index")
            .variant("bfs-windows", |input| Ok(render(jump(&input.counted_vec()?))))
            .variant("dp", |input| Ok(render(jump_dp(&input.counted_vec()?))))
            .sample("5 2 3 1 1 4", "Some(2)")
            .sample("5 2 3 0 1 4", "Some(2)")
            .sample("3 1 0 1", "None")
            .sample("1 0", "Some(0)"),
        Problem::new("gas-station", Topic::Greedy, "start that completes the circuit")
            .variant("one-pass", |input| {
                let (gas, cost) = read_stations(input)?;
                Ok(render(can_complete_circuit(&gas, &cost)))
            })
            .variant("simulate-each-start", |input| {
                let (gas, cost) = read_stations(input)?;
                Ok(render(can_complete_circuit_brute(&gas, &cost)))
            })
            .sample("5 1 2 3 4 5 3 4 5 1 2", "Some(3)")
            .sample("3 2 3 4 3 4 3", "None"),
        Problem::new("best-time-to-buy-and-sell-stock-ii", Topic::Greedy, "profit with unlimited trades")
            .variant("sum-of-rises", |input| Ok(render(max_profit_multi(&input.counted_vec()?))))
            .variant("hold-or-cash", |input| Ok(render(max_profit_multi_dp(&input.counted_vec()?))))
            .sample("6 7 1 5 3 6 4", "7")
            .sample("5 1 2 3 4 5", "4")
            .sample("5 7 6 4 3 1", "0"),
        Problem::new("partition-labels", Topic::Greedy, "most parts with each letter in one part")
            .variant("last-occurrence", |input| Ok(render(partition_labels(&input.word()?))))
            .sample("ababcbacadefegdehijhklij", "[9, 7, 8]")
            .sample("eccbbbbdec", "[10]"),
        Problem::new("hand-of-straights", Topic::Greedy, "split into runs of consecutive cards")
            .variant("ordered-counts", |input| {
                let (hand, group) = read_hand(input)?;
                Ok(render(is_n_straight_hand(&hand, group)))
            })
            .variant("sort-and-scan", |input| {
                let (hand, group) = read_hand(input)?;
                Ok(render(is_n_straight_hand_sort(&hand, group)))
            })
            .sample("9 1 2 3 6 2 3 4 7 8 3", "true")
            .sample("5 1 2 3 4 5 4", "false"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_jumps_agree() {
        let mut rng = Rng::new(233);
        for _ in 0..500 {
            let n = rng.index(12) + 1;
            let nums: Vec<u32> = (0..n).map(|_| rng.range_u64(0..4) as u32).collect();
            let fewest = jump_dp(&nums);
            assert_eq!(jump(&nums), fewest, "{nums:?}");
            assert_eq!(can_jump(&nums), fewest.is_some(), "{nums:?}");
            assert_eq!(can_jump_backward(&nums), fewest.is_some(), "{nums:?}");
        }
        assert!(can_jump(&[]));
        assert_eq!(jump(&[]), None);
    }

    #[test]
    fn test_circuit_agree() {
        let mut rng = Rng::new(239);
        for _ in 0..500 {
            let n = rng.index(8) + 1;
            let gas: Vec<u32> = (0..n).map(|_| rng.range_u64(0..6) as u32).collect();
            let cost: Vec<u32> = (0..n).map(|_| rng.range_u64(0..6) as u32).collect();
            let brute = can_complete_circuit_brute(&gas, &cost);
            // The one-pass answer is always a valid start; the brute force finds the first one
            match can_complete_circuit(&gas, &cost) {
                Some(start) => {
                    let at = |s: usize| can_complete_circuit_brute(&rotate(&gas, s), &rotate(&cost, s));
                    assert_eq!(at(start), Some(0), "{gas:?} {cost:?}");
                }
                None => assert_eq!(brute, None, "{gas:?} {cost:?}"),
            }
        }
    }

    fn rotate(xs: &[u32], k: usize) -> Vec<u32> {
        let mut v = xs.to_vec();
        v.rotate_left(k);
        v
    }

    #[test]
    fn test_profit_agree() {
        let mut rng = Rng::new(241);
        for _ in 0..300 {
            let n = rng.index(10);
            let prices: Vec<u32> = (0..n).map(|_| rng.range_u64(0..10) as u32).collect();
            assert_eq!(max_profit_multi(&prices), max_profit_multi_dp(&prices), "{prices:?}");
        }
    }

    #[test]
    fn test_partition_labels() {
        let parts = partition_labels("ababcbacadefegdehijhklij");
        assert_eq!(parts, [9, 7, 8]);
        assert_eq!(parts.iter().sum::<usize>(), 24);
        assert!(partition_labels("").is_empty());
        assert_eq!(partition_labels("abc"), [1, 1, 1]);
    }

    #[test]
    fn test_straights_agree() {
        let mut rng = Rng::new(251);
        for _ in 0..500 {
            let n = rng.index(10);
            let hand: Vec<i32> = (0..n).map(|_| rng.range_i32(0..6)).collect();
            let group = rng.index(4) + 1;
            assert_eq!(
                is_n_straight_hand(&hand, group),
                is_n_straight_hand_sort(&hand, group),
                "{hand:?} {group}"
            );
        }
        assert!(is_n_straight_hand(&[1, 2, 3, 6, 2, 3, 4, 7, 8], 3));
        assert!(!is_n_straight_hand(&[1, 2, 3, 4, 5], 4));
    }
}
