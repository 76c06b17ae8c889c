use std::cmp::Ordering;

use crate::catalog::{render, render_sorted, Problem, Topic};
use crate::io::InputStream;

// Alphanumeric characters only, case-insensitive
pub fn is_palindrome(s: &str) -> bool {
    let s = s.as_bytes();
    let (mut i, mut j) = (0, s.len());
    while i < j {
        if !s[i].is_ascii_alphanumeric() {
            i += 1;
        } else if !s[j - 1].is_ascii_alphanumeric() {
            j -= 1;
        } else {
            if !s[i].eq_ignore_ascii_case(&s[j - 1]) {
                return false;
            }
            i += 1;
            j -= 1;
        }
    }
    true
}

pub fn is_palindrome_filtered(s: &str) -> bool {
    let cs: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    cs.iter().eq(cs.iter().rev())
}

// 1-indexed positions in a sorted array
pub fn two_sum_sorted(numbers: &[i32], target: i32) -> Option<(usize, usize)> {
    let (mut i, mut j) = (0, numbers.len().checked_sub(1)?);
    while i < j {
        match (numbers[i] as i64 + numbers[j] as i64).cmp(&(target as i64)) {
            Ordering::Less => i += 1,
            Ordering::Greater => j -= 1,
            Ordering::Equal => return Some((i + 1, j + 1)),
        }
    }
    None
}

// Distinct triplets summing to zero, each sorted, in lexicographic order
pub fn three_sum(nums: &[i32]) -> Vec<[i32; 3]> {
    let mut xs = nums.to_vec();
    xs.sort_unstable();
    let n = xs.len();
    let mut res = vec![];
    for i in 0..n {
        if i > 0 && xs[i] == xs[i - 1] {
            continue;
        }
        if xs[i] > 0 {
            break;
        }
        let (mut lo, mut hi) = (i + 1, n);
        while lo + 1 < hi {
            let sum = xs[i] as i64 + xs[lo] as i64 + xs[hi - 1] as i64;
            match sum.cmp(&0) {
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
                Ordering::Equal => {
                    res.push([xs[i], xs[lo], xs[hi - 1]]);
                    lo += 1;
                    while lo + 1 < hi && xs[lo] == xs[lo - 1] {
                        lo += 1;
                    }
                    hi -= 1;
                }
            }
        }
    }
    res
}

pub fn three_sum_hash(nums: &[i32]) -> Vec<[i32; 3]> {
    use std::collections::BTreeSet;
    let mut xs = nums.to_vec();
    xs.sort_unstable();
    let mut found = BTreeSet::new();
    for i in 0..xs.len() {
        let mut seen = rustc_hash::FxHashSet::default();
        for j in i + 1..xs.len() {
            let need = -(xs[i] as i64) - xs[j] as i64;
            if seen.contains(&need) {
                found.insert([xs[i], need as i32, xs[j]]);
            }
            seen.insert(xs[j] as i64);
        }
    }
    found.into_iter().collect()
}

pub fn max_area(height: &[u32]) -> u64 {
    let (mut i, mut j) = (0, height.len());
    let mut best = 0;
    while i + 1 < j {
        let w = (j - 1 - i) as u64;
        best = best.max(w * height[i].min(height[j - 1]) as u64);
        if height[i] < height[j - 1] {
            i += 1;
        } else {
            j -= 1;
        }
    }
    best
}

pub fn max_area_brute(height: &[u32]) -> u64 {
    let n = height.len();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .map(|(i, j)| (j - i) as u64 * height[i].min(height[j]) as u64)
        .max()
        .unwrap_or(0)
}

pub fn trap_rain_water(height: &[u32]) -> u64 {
    let (mut i, mut j) = (0, height.len());
    let (mut left_max, mut right_max) = (0, 0);
    let mut water = 0u64;
    while i < j {
        if height[i] <= height[j - 1] {
            left_max = left_max.max(height[i]);
            water += (left_max - height[i]) as u64;
            i += 1;
        } else {
            right_max = right_max.max(height[j - 1]);
            water += (right_max - height[j - 1]) as u64;
            j -= 1;
        }
    }
    water
}

pub fn trap_rain_water_prefix(height: &[u32]) -> u64 {
    let n = height.len();
    let mut left = vec![0; n];
    let mut right = vec![0; n];
    let mut acc = 0;
    for i in 0..n {
        acc = acc.max(height[i]);
        left[i] = acc;
    }
    acc = 0;
    for i in (0..n).rev() {
        acc = acc.max(height[i]);
        right[i] = acc;
    }
    (0..n)
        .map(|i| (left[i].min(right[i]) - height[i]) as u64)
        .sum()
}

pub fn move_zeroes(nums: &mut [i32]) {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            nums.swap(write, read);
            write += 1;
        }
    }
}

// Dedups a sorted slice in place and returns the new length
pub fn remove_duplicates(nums: &mut [i32]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..nums.len() {
        if nums[read] != nums[write - 1] {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write
}

// Dutch national flag over {0, 1, 2}
pub fn sort_colors(nums: &mut [u8]) {
    let (mut lo, mut mid, mut hi) = (0, 0, nums.len());
    while mid < hi {
        match nums[mid] {
            0 => {
                nums.swap(lo, mid);
                lo += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                hi -= 1;
                nums.swap(mid, hi);
            }
        }
    }
}

pub fn sort_colors_counting(nums: &mut [u8]) {
    let mut count = [0usize; 3];
    for &c in nums.iter() {
        count[c.min(2) as usize] += 1;
    }
    let mut i = 0;
    for (c, &k) in count.iter().enumerate() {
        nums[i..i + k].fill(c as u8);
        i += k;
    }
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("valid-palindrome", Topic::TwoPointers, "palindrome ignoring non-alphanumerics")
            .variant("two-pointers", |input| Ok(render(is_palindrome(&input.word()?))))
            .variant("filter-reverse", |input| {
                Ok(render(is_palindrome_filtered(&input.word()?)))
            })
            .sample("A_man,_a_plan,_a_canal:_Panama", "true")
            .sample("race_a_car", "false")
            .sample("\"\"", "true"),
        Problem::new("two-sum-sorted", Topic::TwoPointers, "1-indexed pair in a sorted array")
            .variant("two-pointers", |input| {
                let nums = input.counted_vec()?;
                Ok(render(two_sum_sorted(&nums, input.value()?)))
            })
            .sample("4 2 7 11 15 9", "Some((1, 2))")
            .sample("3 2 3 4 6", "Some((1, 3))")
            .sample("2 -1 0 -1", "Some((1, 2))"),
        Problem::new("three-sum", Topic::TwoPointers, "unique triplets summing to zero")
            .variant("sort-two-pointers", |input| {
                Ok(render_sorted(three_sum(&input.counted_vec()?)))
            })
            .variant("hash-set", |input| {
                Ok(render_sorted(three_sum_hash(&input.counted_vec()?)))
            })
            .sample("6 -1 0 1 2 -1 -4", "[[-1, -1, 2], [-1, 0, 1]]")
            .sample("3 0 1 1", "[]")
            .sample("4 0 0 0 0", "[[0, 0, 0]]"),
        Problem::new("container-with-most-water", Topic::TwoPointers, "max area between two lines")
            .variant("two-pointers", |input| Ok(render(max_area(&input.counted_vec()?))))
            .variant("brute-force", |input| {
                Ok(render(max_area_brute(&input.counted_vec()?)))
            })
            .sample("9 1 8 6 2 5 4 8 3 7", "49")
            .sample("2 1 1", "1"),
        Problem::new("trapping-rain-water", Topic::TwoPointers, "water trapped between bars")
            .variant("two-pointers", |input| {
                Ok(render(trap_rain_water(&input.counted_vec()?)))
            })
            .variant("prefix-max", |input| {
                Ok(render(trap_rain_water_prefix(&input.counted_vec()?)))
            })
            .variant("monotonic-stack", |input| {
                Ok(render(crate::stack::trap_rain_water(&input.counted_vec()?)))
            })
            .sample("12 0 1 0 2 1 0 1 3 2 1 2 1", "6")
            .sample("6 4 2 0 3 2 5", "9")
            .sample("0", "0"),
        Problem::new("move-zeroes", Topic::TwoPointers, "stable partition of non-zeros to the front")
            .variant("swap", |input| {
                let mut nums: Vec<i32> = input.counted_vec()?;
                move_zeroes(&mut nums);
                Ok(render(nums))
            })
            .sample("5 0 1 0 3 12", "[1, 3, 12, 0, 0]")
            .sample("1 0", "[0]"),
        Problem::new("remove-duplicates", Topic::TwoPointers, "in-place dedup of a sorted array")
            .variant("read-write", |input| {
                let mut nums: Vec<i32> = input.counted_vec()?;
                let len = remove_duplicates(&mut nums);
                Ok(render(&nums[..len]))
            })
            .sample("3 1 1 2", "[1, 2]")
            .sample("10 0 0 1 1 1 2 2 3 3 4", "[0, 1, 2, 3, 4]"),
        Problem::new("sort-colors", Topic::TwoPointers, "sort an array of 0s, 1s and 2s")
            .variant("dutch-flag", |input| {
                let mut nums: Vec<u8> = input.counted_vec()?;
                sort_colors(&mut nums);
                Ok(render(nums))
            })
            .variant("counting", |input| {
                let mut nums: Vec<u8> = input.counted_vec()?;
                sort_colors_counting(&mut nums);
                Ok(render(nums))
            })
            .sample("6 2 0 2 1 1 0", "[0, 0, 1, 1, 2, 2]")
            .sample("3 2 0 1", "[0, 1, 2]"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_three_sum_agree() {
        let mut rng = Rng::new(5);
        for _ in 0..200 {
            let n = rng.index(14);
            let nums = rng.vec_i32(n, -6..7);
            assert_eq!(three_sum(&nums), three_sum_hash(&nums), "{:?}", nums);
        }
    }

    #[test]
    fn test_water_agree() {
        let mut rng = Rng::new(9);
        for _ in 0..200 {
            let n = rng.index(16);
            let h: Vec<u32> = rng.vec_i32(n, 0..8).into_iter().map(|x| x as u32).collect();
            assert_eq!(trap_rain_water(&h), trap_rain_water_prefix(&h));
            assert_eq!(max_area(&h), max_area_brute(&h));
        }
    }

    #[test]
    fn test_palindrome_agree() {
        for s in ["", "a", "ab", "0P", "Aa", ".,", "No lemon, no melon"] {
            assert_eq!(is_palindrome(s), is_palindrome_filtered(s), "{:?}", s);
        }
    }
}
