use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::catalog::{render, render_sorted, Problem, Topic};
use crate::dset::DisjointSet;
use crate::io::InputStream;

// Indices (i, j), i < j, with nums[i] + nums[j] == target
pub fn two_sum_brute(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let n = nums.len();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .find(|&(i, j)| nums[i] as i64 + nums[j] as i64 == target as i64)
}

pub fn two_sum_hash(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    for (j, &x) in nums.iter().enumerate() {
        if let Some(&i) = seen.get(&(target as i64 - x as i64)) {
            return Some((i, j));
        }
        seen.entry(x as i64).or_insert(j);
    }
    None
}

pub fn two_sum_sorted(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..nums.len()).collect();
    order.sort_unstable_by_key(|&i| nums[i]);

    let (mut lo, mut hi) = (0, order.len().checked_sub(1)?);
    while lo < hi {
        let sum = nums[order[lo]] as i64 + nums[order[hi]] as i64;
        match sum.cmp(&(target as i64)) {
            std::cmp::Ordering::Less => lo += 1,
            std::cmp::Ordering::Greater => hi -= 1,
            std::cmp::Ordering::Equal => {
                let (i, j) = (order[lo], order[hi]);
                return Some((i.min(j), i.max(j)));
            }
        }
    }
    None
}

pub fn contains_duplicate(nums: &[i32]) -> bool {
    let mut seen = FxHashSet::default();
    !nums.iter().all(|x| seen.insert(x))
}

pub fn contains_duplicate_sort(nums: &[i32]) -> bool {
    nums.iter().sorted_unstable().tuple_windows().any(|(a, b)| a == b)
}

pub fn valid_anagram(s: &str, t: &str) -> bool {
    let mut count = [0i32; 256];
    for c in s.bytes() {
        count[c as usize] += 1;
    }
    for c in t.bytes() {
        count[c as usize] -= 1;
    }
    count.iter().all(|&c| c == 0)
}

// Unicode-aware
pub fn valid_anagram_map(s: &str, t: &str) -> bool {
    let mut count: FxHashMap<char, i32> = FxHashMap::default();
    for c in s.chars() {
        *count.entry(c).or_default() += 1;
    }
    for c in t.chars() {
        *count.entry(c).or_default() -= 1;
    }
    count.values().all(|&c| c == 0)
}

// Groups in first-occurrence order; words keep their input order within a group.
pub fn group_anagrams(words: &[String]) -> Vec<Vec<String>> {
    let mut group_idx: FxHashMap<Vec<u8>, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<String>> = vec![];
    for word in words {
        let mut key = word.as_bytes().to_vec();
        key.sort_unstable();
        let idx = *group_idx.entry(key).or_insert_with(|| {
            groups.push(vec![]);
            groups.len() - 1
        });
        groups[idx].push(word.clone());
    }
    groups
}

pub fn group_anagrams_count_key(words: &[String]) -> Vec<Vec<String>> {
    let mut groups: FxHashMap<[u16; 26], Vec<String>> = FxHashMap::default();
    for word in words {
        let mut key = [0u16; 26];
        for c in word.bytes().filter(u8::is_ascii_lowercase) {
            key[(c - b'a') as usize] += 1;
        }
        groups.entry(key).or_default().push(word.clone());
    }
    groups.into_values().collect()
}

// Products wrap modulo 2^64, which is exact whenever the answer itself fits in i64
pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    let n = nums.len();
    let mut res = vec![1i64; n];
    for i in 1..n {
        res[i] = res[i - 1].wrapping_mul(nums[i - 1]);
    }
    let mut suffix = 1i64;
    for i in (0..n).rev() {
        res[i] = res[i].wrapping_mul(suffix);
        suffix = suffix.wrapping_mul(nums[i]);
    }
    res
}

pub fn product_except_self_brute(nums: &[i64]) -> Vec<i64> {
    (0..nums.len())
        .map(|i| {
            nums.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(1i64, |acc, (_, &x)| acc.wrapping_mul(x))
        })
        .collect()
}

pub fn longest_consecutive(nums: &[i32]) -> usize {
    let set: FxHashSet<i32> = nums.iter().copied().collect();
    set.iter()
        .filter(|&&x| x == i32::MIN || !set.contains(&(x - 1)))
        .map(|&start| {
            let mut len = 1;
            let mut x = start;
            while x < i32::MAX && set.contains(&(x + 1)) {
                x += 1;
                len += 1;
            }
            len
        })
        .max()
        .unwrap_or(0)
}

pub fn longest_consecutive_dset(nums: &[i32]) -> usize {
    let mut index: FxHashMap<i32, usize> = FxHashMap::default();
    for &x in nums {
        let next = index.len();
        index.entry(x).or_insert(next);
    }
    let mut dset = DisjointSet::new(index.len());
    for (&x, &i) in &index {
        if let Some(&j) = x.checked_add(1).and_then(|y| index.get(&y)) {
            dset.merge(i, j);
        }
    }
    (0..index.len())
        .map(|i| dset.size(i) as usize)
        .max()
        .unwrap_or(0)
}

// Boyer-Moore voting, then a second pass to confirm the survivor
pub fn majority_element(nums: &[i32]) -> Option<i32> {
    let mut candidate = *nums.first()?;
    let mut count = 0;
    for &x in nums {
        if count == 0 {
            candidate = x;
        }
        count += if x == candidate { 1 } else { -1 };
    }
    let votes = nums.iter().filter(|&&x| x == candidate).count();
    (votes * 2 > nums.len()).then_some(candidate)
}

pub fn majority_element_map(nums: &[i32]) -> Option<i32> {
    let mut count: FxHashMap<i32, usize> = FxHashMap::default();
    for &x in nums {
        let c = count.entry(x).or_default();
        *c += 1;
        if *c * 2 > nums.len() {
            return Some(x);
        }
    }
    None
}

// Number of contiguous subarrays summing to k
pub fn subarray_sum(nums: &[i32], k: i32) -> usize {
    let mut prefix_count: FxHashMap<i64, usize> = FxHashMap::default();
    prefix_count.insert(0, 1);
    let mut prefix = 0i64;
    let mut res = 0;
    for &x in nums {
        prefix += x as i64;
        res += prefix_count.get(&(prefix - k as i64)).copied().unwrap_or(0);
        *prefix_count.entry(prefix).or_default() += 1;
    }
    res
}

pub fn subarray_sum_brute(nums: &[i32], k: i32) -> usize {
    let n = nums.len();
    (0..n)
        .map(|i| {
            let mut sum = 0i64;
            (i..n)
                .filter(|&j| {
                    sum += nums[j] as i64;
                    sum == k as i64
                })
                .count()
        })
        .sum()
}

fn sorted_groups(mut groups: Vec<Vec<String>>) -> String {
    for g in &mut groups {
        g.sort();
    }
    render_sorted(groups)
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("two-sum", Topic::Hashing, "indices of two numbers adding up to target")
            .variant("brute-force", |input| {
                let nums = input.counted_vec()?;
                Ok(render(two_sum_brute(&nums, input.value()?)))
            })
            .variant("hash-map", |input| {
                let nums = input.counted_vec()?;
                Ok(render(two_sum_hash(&nums, input.value()?)))
            })
            .variant("sort-two-pointers", |input| {
                let nums = input.counted_vec()?;
                Ok(render(two_sum_sorted(&nums, input.value()?)))
            })
            .sample("4 2 7 11 15 9", "Some((0, 1))")
            .sample("3 3 2 4 6", "Some((1, 2))")
            .sample("2 3 3 6", "Some((0, 1))")
            .sample("3 1 2 3 100", "None"),
        Problem::new("contains-duplicate", Topic::Hashing, "any value appearing twice")
            .variant("hash-set", |input| {
                Ok(render(contains_duplicate(&input.counted_vec()?)))
            })
            .variant("sort", |input| {
                Ok(render(contains_duplicate_sort(&input.counted_vec()?)))
            })
            .sample("4 1 2 3 1", "true")
            .sample("4 1 2 3 4", "false")
            .sample("0", "false"),
        Problem::new("valid-anagram", Topic::Hashing, "t is a permutation of s")
            .variant("byte-count", |input| {
                Ok(render(valid_anagram(&input.word()?, &input.word()?)))
            })
            .variant("char-map", |input| {
                Ok(render(valid_anagram_map(&input.word()?, &input.word()?)))
            })
            .sample("anagram nagaram", "true")
            .sample("rat car", "false")
            .sample("ab abb", "false"),
        Problem::new("group-anagrams", Topic::Hashing, "partition words into anagram classes")
            .variant("sorted-key", |input| {
                Ok(sorted_groups(group_anagrams(&input.words()?)))
            })
            .variant("count-key", |input| {
                Ok(sorted_groups(group_anagrams_count_key(&input.words()?)))
            })
            .sample(
                "6 eat tea tan ate nat bat",
                r#"[["ate", "eat", "tea"], ["bat"], ["nat", "tan"]]"#,
            )
            .sample("1 \"\"", r#"[[""]]"#),
        Problem::new("product-except-self", Topic::Hashing, "product of all other elements")
            .variant("prefix-suffix", |input| {
                Ok(render(product_except_self(&input.counted_vec()?)))
            })
            .variant("brute-force", |input| {
                Ok(render(product_except_self_brute(&input.counted_vec()?)))
            })
            .sample("4 1 2 3 4", "[24, 12, 8, 6]")
            .sample("5 -1 1 0 -3 3", "[0, 0, 9, 0, 0]")
            .sample("2 4611686018427387904 2", "[2, 4611686018427387904]"),
        Problem::new("longest-consecutive", Topic::Hashing, "longest run of consecutive integers")
            .variant("hash-set", |input| {
                Ok(render(longest_consecutive(&input.counted_vec()?)))
            })
            .variant("union-find", |input| {
                Ok(render(longest_consecutive_dset(&input.counted_vec()?)))
            })
            .sample("6 100 4 200 1 3 2", "4")
            .sample("10 0 3 7 2 5 8 4 6 0 1", "9")
            .sample("0", "0"),
        Problem::new("majority-element", Topic::Hashing, "value occurring more than n/2 times")
            .variant("boyer-moore", |input| {
                Ok(render(majority_element(&input.counted_vec()?)))
            })
            .variant("hash-count", |input| {
                Ok(render(majority_element_map(&input.counted_vec()?)))
            })
            .sample("3 3 2 3", "Some(3)")
            .sample("7 2 2 1 1 1 2 2", "Some(2)")
            .sample("3 1 2 3", "None"),
        Problem::new("subarray-sum-k", Topic::Hashing, "count subarrays summing to k")
            .variant("prefix-sum", |input| {
                let nums = input.counted_vec()?;
                Ok(render(subarray_sum(&nums, input.value()?)))
            })
            .variant("brute-force", |input| {
                let nums = input.counted_vec()?;
                Ok(render(subarray_sum_brute(&nums, input.value()?)))
            })
            .sample("3 1 1 1 2", "2")
            .sample("3 1 2 3 3", "2")
            .sample("4 1 -1 1 -1 0", "4"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_two_sum_variants_agree() {
        let mut rng = Rng::new(7);
        for _ in 0..300 {
            let n = rng.index(12);
            let nums = rng.vec_i32(n, -20..20);
            let target = rng.range_i32(-40..40);
            let brute = two_sum_brute(&nums, target);
            for found in [two_sum_hash(&nums, target), two_sum_sorted(&nums, target)] {
                assert_eq!(found.is_some(), brute.is_some(), "{:?} {}", nums, target);
                if let Some((i, j)) = found {
                    assert!(i < j);
                    assert_eq!(nums[i] + nums[j], target);
                }
            }
        }
    }

    #[test]
    fn test_longest_consecutive_agree() {
        let mut rng = Rng::new(11);
        for _ in 0..200 {
            let n = rng.index(20);
            let nums = rng.vec_i32(n, -15..15);
            assert_eq!(longest_consecutive(&nums), longest_consecutive_dset(&nums));
        }
        assert_eq!(longest_consecutive(&[i32::MAX, i32::MIN, i32::MAX - 1]), 2);
    }

    #[test]
    fn test_subarray_sum_agree() {
        let mut rng = Rng::new(3);
        for _ in 0..200 {
            let n = rng.index(15);
            let nums = rng.vec_i32(n, -3..4);
            let k = rng.range_i32(-4..5);
            assert_eq!(subarray_sum(&nums, k), subarray_sum_brute(&nums, k));
        }
    }

    #[test]
    fn test_majority_agree() {
        assert_eq!(majority_element(&[]), None);
        assert_eq!(majority_element_map(&[]), None);
        assert_eq!(majority_element(&[1, 2, 3]), None);
        assert_eq!(majority_element(&[1, 1, 2, 2]), None);

        let mut rng = Rng::new(13);
        for _ in 0..300 {
            let n = rng.index(12);
            let nums = rng.vec_i32(n, 0..3);
            assert_eq!(majority_element(&nums), majority_element_map(&nums), "{nums:?}");
        }
    }

    #[test]
    fn test_product_except_self_large() {
        let big = 1i64 << 62;
        assert_eq!(product_except_self(&[big, 2]), [2, big]);
        assert_eq!(product_except_self_brute(&[big, 2]), [2, big]);
        assert_eq!(product_except_self(&[big, 4, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(product_except_self(&[big, -2, 0]), [0, 0, i64::MIN]);
        assert_eq!(product_except_self(&[i64::MAX, 1, -1]), [-1, -i64::MAX, i64::MAX]);
    }
}
