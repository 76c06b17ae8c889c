use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::catalog::{render, Problem, Topic};
use crate::io::InputStream;

pub fn longest_unique_substring(s: &str) -> usize {
    let s = s.as_bytes();
    let mut in_window = [false; 256];
    let mut best = 0;
    let mut start = 0;
    for end in 0..s.len() {
        while in_window[s[end] as usize] {
            in_window[s[start] as usize] = false;
            start += 1;
        }
        in_window[s[end] as usize] = true;
        best = best.max(end + 1 - start);
    }
    best
}

// Jump the window start past the last occurrence
pub fn longest_unique_substring_jump(s: &str) -> usize {
    let mut last_seen = [usize::MAX; 256];
    let mut best = 0;
    let mut start = 0;
    for (end, c) in s.bytes().enumerate() {
        let prev = last_seen[c as usize];
        if prev != usize::MAX && prev >= start {
            start = prev + 1;
        }
        last_seen[c as usize] = end;
        best = best.max(end + 1 - start);
    }
    best
}

// Shortest substring of s containing every character of t (with multiplicity),
// measured in chars; the leftmost one on ties
pub fn min_window_substring<'a>(s: &'a str, t: &str) -> &'a str {
    let mut need: FxHashMap<char, i32> = FxHashMap::default();
    for c in t.chars() {
        *need.entry(c).or_default() += 1;
    }
    let mut missing = need.len();
    if missing == 0 {
        return "";
    }

    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut best: Option<(usize, usize)> = None;
    let mut start = 0;
    for end in 0..chars.len() {
        if let Some(n) = need.get_mut(&chars[end].1) {
            *n -= 1;
            if *n == 0 {
                missing -= 1;
            }
        }
        while missing == 0 {
            if best.map_or(true, |(i, j)| end + 1 - start < j - i) {
                best = Some((start, end + 1));
            }
            if let Some(n) = need.get_mut(&chars[start].1) {
                *n += 1;
                if *n > 0 {
                    missing += 1;
                }
            }
            start += 1;
        }
    }
    let byte_at = |i: usize| chars.get(i).map_or(s.len(), |&(b, _)| b);
    best.map_or("", |(i, j)| &s[byte_at(i)..byte_at(j)])
}

// Longest substring that becomes uniform after at most k replacements (uppercase letters)
pub fn character_replacement(s: &str, k: usize) -> usize {
    let s = s.as_bytes();
    let mut count = [0usize; 256];
    let mut max_freq = 0;
    let mut start = 0;
    let mut best = 0;
    for end in 0..s.len() {
        count[s[end] as usize] += 1;
        max_freq = max_freq.max(count[s[end] as usize]);
        // max_freq never shrinks; a stale value only keeps the window from growing
        if end + 1 - start - max_freq > k {
            count[s[start] as usize] -= 1;
            start += 1;
        }
        best = best.max(end + 1 - start);
    }
    best
}

// Whether some permutation of `pattern` is a substring of s
pub fn check_inclusion(pattern: &str, s: &str) -> bool {
    let (p, s) = (pattern.as_bytes(), s.as_bytes());
    if p.len() > s.len() {
        return false;
    }
    let mut diff = [0i32; 256];
    for &c in p {
        diff[c as usize] += 1;
    }
    for &c in &s[..p.len()] {
        diff[c as usize] -= 1;
    }
    let mut mismatched = diff.iter().filter(|&&d| d != 0).count();
    if mismatched == 0 {
        return true;
    }
    let mut adjust = |diff: &mut [i32; 256], c: u8, delta: i32| {
        let before = diff[c as usize] != 0;
        diff[c as usize] += delta;
        let after = diff[c as usize] != 0;
        match (before, after) {
            (true, false) => mismatched -= 1,
            (false, true) => mismatched += 1,
            _ => {}
        }
        mismatched
    };
    for end in p.len()..s.len() {
        adjust(&mut diff, s[end], -1);
        if adjust(&mut diff, s[end - p.len()], 1) == 0 {
            return true;
        }
    }
    false
}

// Indices hold a decreasing run of values; the front is the window maximum
pub fn max_sliding_window(nums: &[i32], k: usize) -> Vec<i32> {
    if k == 0 {
        return vec![];
    }
    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut res = vec![];
    for i in 0..nums.len() {
        while deque.back().map_or(false, |&j| nums[j] <= nums[i]) {
            deque.pop_back();
        }
        deque.push_back(i);
        if deque.front().map_or(false, |&j| j + k <= i) {
            deque.pop_front();
        }
        if i + 1 >= k {
            res.push(nums[deque[0]]);
        }
    }
    res
}

pub fn max_sliding_window_brute(nums: &[i32], k: usize) -> Vec<i32> {
    if k == 0 {
        return vec![];
    }
    nums.windows(k)
        .filter_map(|w| w.iter().max().copied())
        .collect()
}

// Shortest subarray of positive numbers with sum >= target
pub fn min_subarray_len(target: u64, nums: &[u32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut start = 0;
    let mut sum = 0u64;
    for end in 0..nums.len() {
        sum += nums[end] as u64;
        while sum >= target && start <= end {
            best = Some(best.map_or(end + 1 - start, |b| b.min(end + 1 - start)));
            sum -= nums[start] as u64;
            start += 1;
        }
    }
    best
}

pub fn best_time_to_buy_sell(prices: &[u32]) -> u32 {
    let mut min_price = u32::MAX;
    let mut best = 0;
    for &p in prices {
        min_price = min_price.min(p);
        best = best.max(p - min_price);
    }
    best
}

pub fn best_time_to_buy_sell_brute(prices: &[u32]) -> u32 {
    let n = prices.len();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .map(|(i, j)| prices[j].saturating_sub(prices[i]))
        .max()
        .unwrap_or(0)
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("longest-unique-substring", Topic::SlidingWindow, "longest substring without repeats")
            .variant("set-window", |input| {
                Ok(render(longest_unique_substring(&input.word()?)))
            })
            .variant("last-index", |input| {
                Ok(render(longest_unique_substring_jump(&input.word()?)))
            })
            .sample("abcabcbb", "3")
            .sample("bbbbb", "1")
            .sample("pwwkew", "3")
            .sample("\"\"", "0"),
        Problem::new("min-window-substring", Topic::SlidingWindow, "shortest window covering t")
            .variant("counting-window", |input| {
                let (s, t) = (input.word()?, input.word()?);
                Ok(render(min_window_substring(&s, &t)))
            })
            .sample("ADOBECODEBANC ABC", "\"BANC\"")
            .sample("a a", "\"a\"")
            .sample("a aa", "\"\""),
        Problem::new("character-replacement", Topic::SlidingWindow, "longest uniform run after k edits")
            .variant("max-frequency-window", |input| {
                let s = input.word()?;
                Ok(render(character_replacement(&s, input.value()?)))
            })
            .sample("ABAB 2", "4")
            .sample("AABABBA 1", "4"),
        Problem::new("permutation-in-string", Topic::SlidingWindow, "s2 contains a permutation of s1")
            .variant("fixed-window", |input| {
                let (p, s) = (input.word()?, input.word()?);
                Ok(render(check_inclusion(&p, &s)))
            })
            .sample("ab eidbaooo", "true")
            .sample("ab eidboaoo", "false"),
        Problem::new("sliding-window-maximum", Topic::SlidingWindow, "maximum of every window of size k")
            .variant("monotonic-deque", |input| {
                let nums = input.counted_vec()?;
                Ok(render(max_sliding_window(&nums, input.value()?)))
            })
            .variant("brute-force", |input| {
                let nums = input.counted_vec()?;
                Ok(render(max_sliding_window_brute(&nums, input.value()?)))
            })
            .sample("8 1 3 -1 -3 5 3 6 7 3", "[3, 3, 5, 5, 6, 7]")
            .sample("1 1 1", "[1]"),
        Problem::new("min-subarray-len", Topic::SlidingWindow, "shortest subarray with sum at least target")
            .variant("shrinking-window", |input| {
                let target = input.value()?;
                Ok(render(min_subarray_len(target, &input.counted_vec()?)))
            })
            .sample("7 6 2 3 1 2 4 3", "Some(2)")
            .sample("4 3 1 4 4", "Some(1)")
            .sample("11 8 1 1 1 1 1 1 1 1", "None"),
        Problem::new("best-time-to-buy-sell", Topic::SlidingWindow, "max profit from one transaction")
            .variant("running-min", |input| {
                Ok(render(best_time_to_buy_sell(&input.counted_vec()?)))
            })
            .variant("brute-force", |input| {
                Ok(render(best_time_to_buy_sell_brute(&input.counted_vec()?)))
            })
            .sample("6 7 1 5 3 6 4", "5")
            .sample("5 7 6 4 3 1", "0"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    fn random_word(rng: &mut Rng, len: usize, alphabet: u8) -> String {
        (0..len)
            .map(|_| (b'a' + rng.range_u64(0..alphabet as u64) as u8) as char)
            .collect()
    }

    #[test]
    fn test_unique_substring_agree() {
        let mut rng = Rng::new(17);
        for _ in 0..300 {
            let len = rng.index(20);
            let s = random_word(&mut rng, len, 5);
            assert_eq!(longest_unique_substring(&s), longest_unique_substring_jump(&s));
        }
    }

    #[test]
    fn test_check_inclusion_naive() {
        let mut rng = Rng::new(23);
        for _ in 0..300 {
            let (lp, ls) = (1 + rng.index(4), rng.index(10));
            let (p, s) = (random_word(&mut rng, lp, 3), random_word(&mut rng, ls, 3));
            let mut sorted_p = p.clone().into_bytes();
            sorted_p.sort_unstable();
            let naive = s.as_bytes().windows(p.len()).any(|w| {
                let mut w = w.to_vec();
                w.sort_unstable();
                w == sorted_p
            });
            assert_eq!(check_inclusion(&p, &s), naive, "{} {}", p, s);
        }
    }

    #[test]
    fn test_window_max_agree() {
        let mut rng = Rng::new(29);
        for _ in 0..200 {
            let n = rng.index(20);
            let nums = rng.vec_i32(n, -10..10);
            let k = rng.index(6);
            assert_eq!(max_sliding_window(&nums, k), max_sliding_window_brute(&nums, k));
        }
    }

    #[test]
    fn test_min_window_is_minimal() {
        assert_eq!(min_window_substring("aaflslflsldkalskaaa", "aaa"), "aaa");
        assert_eq!(min_window_substring("bba", "ab"), "ba");
        assert_eq!(min_window_substring("abc", ""), "");
        assert_eq!(min_window_substring("©é", "é"), "é");
        assert_eq!(min_window_substring("日本語日本", "本日"), "日本");
        assert_eq!(min_window_substring("aé日bé", "éb"), "bé");
        assert_eq!(min_window_substring("é", "e"), "");
    }

    #[test]
    fn test_min_window_agree() {
        fn covers(window: &[char], t: &[char]) -> bool {
            t.iter().all(|c| {
                let have = window.iter().filter(|&x| x == c).count();
                have >= t.iter().filter(|&x| x == c).count()
            })
        }

        let alphabet = ['a', 'é', '日'];
        let mut rng = Rng::new(31);
        for _ in 0..300 {
            let s: Vec<char> = (0..rng.index(10)).map(|_| alphabet[rng.index(3)]).collect();
            let t: Vec<char> = (0..rng.index(4)).map(|_| alphabet[rng.index(3)]).collect();
            let naive: String = if t.is_empty() {
                String::new()
            } else {
                (1..=s.len())
                    .flat_map(|len| s.windows(len))
                    .find(|w| covers(w, &t))
                    .map_or_else(String::new, |w| w.iter().collect())
            };
            let (s, t): (String, String) = (s.iter().collect(), t.iter().collect());
            assert_eq!(min_window_substring(&s, &t), naive, "{s} {t}");
        }
    }
}
