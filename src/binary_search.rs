use crate::catalog::{render, Problem, Topic};
use crate::io::InputStream;

// First index i with !pred(i), given pred is monotone (true..., false...) on 0..n
pub fn partition_point(n: usize, mut pred: impl FnMut(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (0, n);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

pub fn lower_bound<T: Ord>(xs: &[T], x: &T) -> usize {
    partition_point(xs.len(), |i| &xs[i] < x)
}

pub fn upper_bound<T: Ord>(xs: &[T], x: &T) -> usize {
    partition_point(xs.len(), |i| &xs[i] <= x)
}

pub fn search<T: Ord>(xs: &[T], x: &T) -> Option<usize> {
    let i = lower_bound(xs, x);
    (i < xs.len() && &xs[i] == x).then_some(i)
}

// First and last position of x in a sorted slice
pub fn search_range<T: Ord>(xs: &[T], x: &T) -> Option<(usize, usize)> {
    let (lo, hi) = (lower_bound(xs, x), upper_bound(xs, x));
    (lo < hi).then(|| (lo, hi - 1))
}

// Distinct values, sorted then rotated
pub fn search_rotated(xs: &[i32], target: i32) -> Option<usize> {
    let (mut lo, mut hi) = (0, xs.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if xs[mid] == target {
            return Some(mid);
        }
        if xs[lo] <= xs[mid] {
            // left half [lo, mid] is sorted
            if xs[lo] <= target && target < xs[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else if xs[mid] < target && target <= xs[hi - 1] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    None
}

pub fn find_min_rotated(xs: &[i32]) -> Option<i32> {
    let last = *xs.last()?;
    let i = partition_point(xs.len(), |i| xs[i] > last);
    Some(xs[i])
}

// Row-major sorted matrix (each row starts after the previous row ends)
pub fn search_matrix(matrix: &[Vec<i32>], target: i32) -> bool {
    let cols = matrix.first().map_or(0, Vec::len);
    if cols == 0 {
        return false;
    }
    let n = matrix.len() * cols;
    let i = partition_point(n, |i| matrix[i / cols][i % cols] < target);
    i < n && matrix[i / cols][i % cols] == target
}

// Minimum integer speed k such that all piles are eaten within h hours
pub fn min_eating_speed(piles: &[u64], h: u64) -> Option<u64> {
    if (piles.len() as u64) > h {
        return None;
    }
    let max = piles.iter().copied().max()?;
    // None once the total no longer fits, which is past any h
    let hours = |k: u64| piles.iter().try_fold(0u64, |acc, &p| acc.checked_add(p.div_ceil(k)));
    let too_slow = |k: u64| hours(k).map_or(true, |t| t > h);
    let k = 1 + partition_point(max as usize, |i| too_slow(i as u64 + 1)) as u64;
    Some(k)
}

pub fn isqrt(x: u64) -> u64 {
    // largest r with r * r <= x
    let hi = (x as f64).sqrt() as usize + 2;
    partition_point(hi, |r| (r as u128) * (r as u128) <= x as u128) as u64 - 1
}

// Median of the union of two sorted slices, by binary search on the shorter one
pub fn median_of_two_sorted(a: &[i32], b: &[i32]) -> Option<f64> {
    if a.len() > b.len() {
        return median_of_two_sorted(b, a);
    }
    let (m, n) = (a.len(), b.len());
    if m + n == 0 {
        return None;
    }
    let half = (m + n + 1) / 2;

    // i elements taken from a, half - i from b
    let i = partition_point(m, |i| {
        let j = half - i - 1;
        // a[i] < b[j] means more of a belongs on the left
        j < n && a[i] < b[j]
    });
    let j = half - i;

    let left_max = match (i.checked_sub(1).map(|k| a[k]), j.checked_sub(1).map(|k| b[k])) {
        (Some(x), Some(y)) => x.max(y),
        (Some(x), None) | (None, Some(x)) => x,
        (None, None) => unreachable!(),
    };
    if (m + n) % 2 == 1 {
        return Some(left_max as f64);
    }
    let right_min = match (a.get(i), b.get(j)) {
        (Some(&x), Some(&y)) => x.min(y),
        (Some(&x), None) | (None, Some(&x)) => x,
        (None, None) => unreachable!(),
    };
    Some((left_max as f64 + right_min as f64) / 2.0)
}

pub fn median_of_two_sorted_merge(a: &[i32], b: &[i32]) -> Option<f64> {
    let mut merged: Vec<i32> = a.iter().chain(b).copied().collect();
    merged.sort_unstable();
    let n = merged.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(merged[n / 2] as f64),
        _ => Some((merged[n / 2 - 1] as f64 + merged[n / 2] as f64) / 2.0),
    }
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("binary-search", Topic::BinarySearch, "index of target in a sorted array")
            .variant("lower-bound", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render(search(&xs, &input.value()?)))
            })
            .variant("std", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render(xs.binary_search(&input.value()?).ok()))
            })
            .sample("6 -1 0 3 5 9 12 9", "Some(4)")
            .sample("6 -1 0 3 5 9 12 2", "None"),
        Problem::new("search-range", Topic::BinarySearch, "first and last position of target")
            .variant("two-bounds", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render(search_range(&xs, &input.value()?)))
            })
            .sample("6 5 7 7 8 8 10 8", "Some((3, 4))")
            .sample("6 5 7 7 8 8 10 6", "None")
            .sample("0 0", "None"),
        Problem::new("search-rotated", Topic::BinarySearch, "search a rotated sorted array")
            .variant("half-sorted", |input| {
                let xs = input.counted_vec()?;
                Ok(render(search_rotated(&xs, input.value()?)))
            })
            .sample("7 4 5 6 7 0 1 2 0", "Some(4)")
            .sample("7 4 5 6 7 0 1 2 3", "None")
            .sample("1 1 0", "None"),
        Problem::new("find-min-rotated", Topic::BinarySearch, "minimum of a rotated sorted array")
            .variant("compare-last", |input| {
                Ok(render(find_min_rotated(&input.counted_vec()?)))
            })
            .variant("linear-scan", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render(xs.into_iter().min()))
            })
            .sample("5 3 4 5 1 2", "Some(1)")
            .sample("7 4 5 6 7 0 1 2", "Some(0)")
            .sample("4 11 13 15 17", "Some(11)"),
        Problem::new("search-matrix", Topic::BinarySearch, "search a row-major sorted matrix")
            .variant("flattened", |input| {
                let matrix = input.matrix()?;
                Ok(render(search_matrix(&matrix, input.value()?)))
            })
            .sample("3 4 1 3 5 7 10 11 16 20 23 30 34 60 3", "true")
            .sample("3 4 1 3 5 7 10 11 16 20 23 30 34 60 13", "false"),
        Problem::new("koko-eating-bananas", Topic::BinarySearch, "minimum eating speed within h hours")
            .variant("answer-search", |input| {
                let piles = input.counted_vec()?;
                Ok(render(min_eating_speed(&piles, input.value()?)))
            })
            .sample("4 3 6 7 11 8", "Some(4)")
            .sample("5 30 11 23 4 20 5", "Some(30)")
            .sample("5 30 11 23 4 20 6", "Some(23)"),
        Problem::new("sqrt", Topic::BinarySearch, "integer square root")
            .variant("answer-search", |input| Ok(render(isqrt(input.value()?))))
            .sample("8", "2")
            .sample("0", "0")
            .sample("18446744073709551615", "4294967295"),
        Problem::new("median-of-two-sorted", Topic::BinarySearch, "median of two sorted arrays")
            .variant("partition", |input| {
                let (a, b) = (input.counted_vec()?, input.counted_vec()?);
                Ok(render(median_of_two_sorted(&a, &b)))
            })
            .variant("merge", |input| {
                let (a, b) = (input.counted_vec()?, input.counted_vec()?);
                Ok(render(median_of_two_sorted_merge(&a, &b)))
            })
            .sample("2 1 3 1 2", "Some(2.0)")
            .sample("2 1 2 2 3 4", "Some(2.5)")
            .sample("0 1 5", "Some(5.0)"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_rotated() {
        let mut rng = Rng::new(41);
        for _ in 0..200 {
            let n = 1 + rng.index(12);
            let mut xs: Vec<i32> = (0..n as i32).map(|x| 3 * x - 7).collect();
            xs.rotate_left(rng.index(n));
            assert_eq!(find_min_rotated(&xs), Some(-7));
            for target in -9..3 * n as i32 {
                let expected = xs.iter().position(|&x| x == target);
                assert_eq!(search_rotated(&xs, target), expected, "{:?} {}", xs, target);
            }
        }
    }

    #[test]
    fn test_median_agree() {
        let mut rng = Rng::new(43);
        for _ in 0..300 {
            let (m, n) = (rng.index(7), rng.index(7));
            let mut a = rng.vec_i32(m, -10..10);
            let mut b = rng.vec_i32(n, -10..10);
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(
                median_of_two_sorted(&a, &b),
                median_of_two_sorted_merge(&a, &b),
                "{:?} {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_isqrt() {
        for x in 0..2000u64 {
            let r = isqrt(x);
            assert!(r * r <= x && (r + 1) * (r + 1) > x);
        }
    }

    #[test]
    fn test_eating_speed_minimal() {
        let piles = [3, 6, 7, 11];
        for h in 4..30 {
            let k = min_eating_speed(&piles, h).unwrap();
            let hours = |k: u64| piles.iter().map(|&p| (p + k - 1) / k).sum::<u64>();
            assert!(hours(k) <= h);
            assert!(k == 1 || hours(k - 1) > h);
        }
        assert_eq!(min_eating_speed(&piles, 3), None);
    }

    #[test]
    fn test_eating_speed_huge_piles() {
        assert_eq!(min_eating_speed(&[u64::MAX, 1], 2), Some(u64::MAX));
        assert_eq!(min_eating_speed(&[u64::MAX, u64::MAX], 4), Some(u64::MAX / 2 + 1));
        assert_eq!(min_eating_speed(&[u64::MAX; 3], u64::MAX), Some(3));
    }
}
