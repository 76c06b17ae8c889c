use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::catalog::{render, render_sorted, Problem, Topic};
use crate::error::Error;
use crate::io::InputStream;
use crate::rng::Rng;

pub trait Compare<T> {
    // Returns true iif `a` must sit above `b`
    fn before(a: &T, b: &T) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Less;

#[derive(Debug, Clone, Copy, Default)]
pub struct Greater;

impl<T: Ord> Compare<T> for Less {
    fn before(a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord> Compare<T> for Greater {
    fn before(a: &T, b: &T) -> bool {
        a > b
    }
}

pub struct Heap<T, C> {
    data: Vec<T>,
    _marker: PhantomData<C>,
}

pub type MinHeap<T> = Heap<T, Less>;
pub type MaxHeap<T> = Heap<T, Greater>;

impl<T: Clone, C> Clone for Heap<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Debug, C> Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<T, C: Compare<T>> Default for Heap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    pub fn new() -> Self {
        Self {
            data: vec![],
            _marker: PhantomData,
        }
    }

    // Floyd's bottom-up heapify, O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self {
            data,
            _marker: PhantomData,
        };
        for u in (0..heap.data.len() / 2).rev() {
            heap.sift_down(u);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();
        self.sift_down(0);
        top
    }

    // In pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.len());
        while let Some(x) = self.pop() {
            res.push(x);
        }
        res
    }

    fn sift_up(&mut self, mut u: usize) {
        while u > 0 {
            let p = (u - 1) / 2;
            if !C::before(&self.data[u], &self.data[p]) {
                break;
            }
            self.data.swap(u, p);
            u = p;
        }
    }

    fn sift_down(&mut self, mut u: usize) {
        let n = self.data.len();
        loop {
            let mut top = u;
            for child in [2 * u + 1, 2 * u + 2] {
                if child < n && C::before(&self.data[child], &self.data[top]) {
                    top = child;
                }
            }
            if top == u {
                break;
            }
            self.data.swap(u, top);
            u = top;
        }
    }
}

impl<T, C: Compare<T>> FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

// 1-indexed from the top; None if k is out of range
pub fn kth_largest_sort(xs: &[i32], k: usize) -> Option<i32> {
    if k == 0 {
        return None;
    }
    let mut xs = xs.to_vec();
    xs.sort_unstable_by(|a, b| b.cmp(a));
    xs.get(k - 1).copied()
}

// Keeps the k largest seen so far
pub fn kth_largest_heap(xs: &[i32], k: usize) -> Option<i32> {
    if k == 0 || k > xs.len() {
        return None;
    }
    let mut heap = MinHeap::new();
    for &x in xs {
        heap.push(x);
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.peek().copied()
}

// Quickselect with a random pivot and three-way partition, expected O(n)
pub fn kth_largest_select(xs: &[i32], k: usize, rng: &mut Rng) -> Option<i32> {
    if k == 0 || k > xs.len() {
        return None;
    }
    let mut xs = xs.to_vec();
    let target = xs.len() - k;
    let (mut lo, mut hi) = (0, xs.len());
    loop {
        let pivot = xs[lo + rng.index(hi - lo)];
        // xs[lo..lt] < pivot, xs[lt..i] == pivot, xs[gt..hi] > pivot
        let (mut lt, mut i, mut gt) = (lo, lo, hi);
        while i < gt {
            match xs[i].cmp(&pivot) {
                Ordering::Less => {
                    xs.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    xs.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }
        if target < lt {
            hi = lt;
        } else if target >= gt {
            lo = gt;
        } else {
            return Some(pivot);
        }
    }
}

fn frequencies(xs: &[i32]) -> FxHashMap<i32, usize> {
    let mut freq = FxHashMap::default();
    for &x in xs {
        *freq.entry(x).or_insert(0) += 1;
    }
    freq
}

// Ties at the cutoff are broken arbitrarily
pub fn top_k_frequent_heap(xs: &[i32], k: usize) -> Vec<i32> {
    let mut heap = MinHeap::new();
    for (x, count) in frequencies(xs) {
        heap.push((count, x));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec().into_iter().map(|(_, x)| x).collect()
}

pub fn top_k_frequent_bucket(xs: &[i32], k: usize) -> Vec<i32> {
    let mut buckets = vec![vec![]; xs.len() + 1];
    for (x, count) in frequencies(xs) {
        buckets[count].push(x);
    }
    buckets.into_iter().rev().flatten().take(k).collect()
}

pub fn merge_k_sorted(lists: &[Vec<i32>]) -> Vec<i32> {
    let mut heap: MinHeap<(i32, usize, usize)> = lists
        .iter()
        .enumerate()
        .filter_map(|(i, list)| list.first().map(|&x| (x, i, 0)))
        .collect();
    let mut res = Vec::with_capacity(lists.iter().map(Vec::len).sum());
    while let Some((x, i, j)) = heap.pop() {
        res.push(x);
        if let Some(&y) = lists[i].get(j + 1) {
            heap.push((y, i, j + 1));
        }
    }
    res
}

pub fn merge_k_sorted_divide(lists: &[Vec<i32>]) -> Vec<i32> {
    match lists {
        [] => vec![],
        [list] => list.clone(),
        _ => {
            let (a, b) = lists.split_at(lists.len() / 2);
            let (a, b) = (merge_k_sorted_divide(a), merge_k_sorted_divide(b));
            let mut res = Vec::with_capacity(a.len() + b.len());
            let (mut i, mut j) = (0, 0);
            while i < a.len() && j < b.len() {
                if a[i] <= b[j] {
                    res.push(a[i]);
                    i += 1;
                } else {
                    res.push(b[j]);
                    j += 1;
                }
            }
            res.extend_from_slice(&a[i..]);
            res.extend_from_slice(&b[j..]);
            res
        }
    }
}

// Smash the two heaviest stones until at most one remains
pub fn last_stone_weight(stones: &[u32]) -> u32 {
    let mut heap: MaxHeap<u32> = stones.iter().copied().collect();
    while heap.len() > 1 {
        let (Some(x), Some(y)) = (heap.pop(), heap.pop()) else {
            break;
        };
        if x > y {
            heap.push(x - y);
        }
    }
    heap.pop().unwrap_or(0)
}

// Lower half in a max-heap, upper half in a min-heap; lo holds the extra element
#[derive(Debug, Clone, Default)]
pub struct MedianFinder {
    lo: MaxHeap<i64>,
    hi: MinHeap<i64>,
}

impl MedianFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lo.len() + self.hi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lo.is_empty()
    }

    pub fn add_num(&mut self, x: i64) {
        self.lo.push(x);
        if let Some(top) = self.lo.pop() {
            self.hi.push(top);
        }
        if self.hi.len() > self.lo.len() {
            if let Some(top) = self.hi.pop() {
                self.lo.push(top);
            }
        }
    }

    pub fn find_median(&self) -> Option<f64> {
        let &a = self.lo.peek()?;
        if self.lo.len() > self.hi.len() {
            return Some(a as f64);
        }
        let &b = self.hi.peek()?;
        Some((a as f64 + b as f64) / 2.0)
    }
}

fn dist2([x, y]: [i32; 2]) -> i64 {
    let (x, y) = (x as i64, y as i64);
    x * x + y * y
}

// k points closest to the origin, in no particular order
pub fn k_closest_points(points: &[[i32; 2]], k: usize) -> Vec<[i32; 2]> {
    let mut heap = MaxHeap::new();
    for &p in points {
        heap.push((dist2(p), p));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec().into_iter().map(|(_, p)| p).collect()
}

pub fn k_closest_points_sort(points: &[[i32; 2]], k: usize) -> Vec<[i32; 2]> {
    let mut points = points.to_vec();
    points.sort_by_key(|&p| dist2(p));
    points.truncate(k);
    points
}

fn read_lists(input: &mut &[u8]) -> crate::error::Result<Vec<Vec<i32>>> {
    let n: usize = input.value()?;
    (0..n).map(|_| input.counted_vec()).collect()
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("kth-largest", Topic::Heap, "k-th largest element, counting duplicates")
            .variant("sort", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render(kth_largest_sort(&xs, input.value()?)))
            })
            .variant("min-heap", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render(kth_largest_heap(&xs, input.value()?)))
            })
            .variant("quickselect", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                let k = input.value()?;
                Ok(render(kth_largest_select(&xs, k, &mut Rng::default())))
            })
            .sample("6 3 2 1 5 6 4 2", "Some(5)")
            .sample("9 3 2 3 1 2 4 5 5 6 4", "Some(4)")
            .sample("3 1 2 3 4", "None"),
        Problem::new("top-k-frequent", Topic::Heap, "the k most frequent values")
            .variant("min-heap", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render_sorted(top_k_frequent_heap(&xs, input.value()?)))
            })
            .variant("bucket", |input| {
                let xs: Vec<i32> = input.counted_vec()?;
                Ok(render_sorted(top_k_frequent_bucket(&xs, input.value()?)))
            })
            .sample("6 1 1 1 2 2 3 2", "[1, 2]")
            .sample("1 1 1", "[1]"),
        Problem::new("merge-k-sorted", Topic::Heap, "merge k ascending lists")
            .variant("min-heap", |input| Ok(render(merge_k_sorted(&read_lists(input)?))))
            .variant("divide-and-conquer", |input| {
                Ok(render(merge_k_sorted_divide(&read_lists(input)?)))
            })
            .sample("3 3 1 4 5 3 1 3 4 2 2 6", "[1, 1, 2, 3, 4, 4, 5, 6]")
            .sample("2 0 0", "[]")
            .sample("0", "[]"),
        Problem::new("last-stone-weight", Topic::Heap, "weight left after smashing the heaviest pairs")
            .variant("max-heap", |input| Ok(render(last_stone_weight(&input.counted_vec()?))))
            .sample("6 2 7 4 1 8 1", "1")
            .sample("2 3 3", "0")
            .sample("1 1", "1"),
        Problem::new("find-median", Topic::Heap, "running median of a stream")
            .variant("two-heaps", |input| {
                // ops: `add x`, `median`
                let n: usize = input.value()?;
                let mut finder = MedianFinder::new();
                let mut out = vec![];
                for _ in 0..n {
                    match input.word()?.as_str() {
                        "add" => finder.add_num(input.value()?),
                        "median" => out.push(finder.find_median()),
                        op => return Err(Error::invalid(format!("unknown op {op:?}"))),
                    }
                }
                Ok(render(out))
            })
            .sample("5 add 1 add 2 median add 3 median", "[Some(1.5), Some(2.0)]")
            .sample("1 median", "[None]"),
        Problem::new("k-closest-points", Topic::Heap, "k points nearest the origin")
            .variant("max-heap", |input| {
                let points = input.pairs()?;
                Ok(render_sorted(k_closest_points(&points, input.value()?)))
            })
            .variant("sort", |input| {
                let points = input.pairs()?;
                Ok(render_sorted(k_closest_points_sort(&points, input.value()?)))
            })
            .sample("2 1 3 -2 2 1", "[[-2, 2]]")
            .sample("3 3 3 5 -1 -2 4 2", "[[-2, 4], [3, 3]]"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use crate::rng::Rng;
    use std::collections::BinaryHeap;

    #[test]
    fn test_kth_largest_agree() {
        let mut rng = Rng::new(83);
        for _ in 0..300 {
            let n = rng.index(12);
            let xs = rng.vec_i32(n, -5..5);
            for k in 0..=n + 1 {
                let expected = kth_largest_sort(&xs, k);
                assert_eq!(kth_largest_heap(&xs, k), expected);
                assert_eq!(kth_largest_select(&xs, k, &mut rng), expected);
            }
        }
    }

    #[test]
    fn test_top_k_frequencies_agree() {
        let mut rng = Rng::new(89);
        for _ in 0..200 {
            let n = rng.index(20);
            let xs = rng.vec_i32(n, 0..6);
            let freq = frequencies(&xs);
            let k = rng.index(freq.len() + 1);
            let counts = |ys: Vec<i32>| {
                let mut c: Vec<usize> = ys.iter().map(|y| freq[y]).collect();
                c.sort();
                c
            };
            assert_eq!(
                counts(top_k_frequent_heap(&xs, k)),
                counts(top_k_frequent_bucket(&xs, k))
            );
        }
    }

    #[test]
    fn test_median() {
        let mut rng = Rng::new(97);
        let mut finder = MedianFinder::new();
        let mut seen = vec![];
        assert_eq!(finder.find_median(), None);
        for _ in 0..100 {
            let x = rng.range_i32(-50..50) as i64;
            finder.add_num(x);
            seen.push(x);
            seen.sort();
            let n = seen.len();
            let expected = (seen[(n - 1) / 2] + seen[n / 2]) as f64 / 2.0;
            assert_eq!(finder.find_median(), Some(expected));
            assert_eq!(finder.len(), n);
        }
    }

    #[test]
    fn test_merge_k() {
        let lists = vec![vec![1, 4, 5], vec![], vec![1, 3, 4], vec![2, 6]];
        assert_eq!(merge_k_sorted(&lists), merge_k_sorted_divide(&lists));
        assert_eq!(merge_k_sorted(&lists), [1, 1, 2, 3, 4, 4, 5, 6]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn heapify_sorts(xs in proptest::collection::vec(-100i32..100, 0..64)) {
            let mut sorted = xs.clone();
            sorted.sort();
            prop_assert_eq!(MinHeap::from_vec(xs.clone()).into_sorted_vec(), sorted.clone());
            sorted.reverse();
            prop_assert_eq!(MaxHeap::from_vec(xs).into_sorted_vec(), sorted);
        }

        #[test]
        fn matches_binary_heap(ops in proptest::collection::vec(proptest::option::of(-100i32..100), 0..100)) {
            let mut heap = MaxHeap::new();
            let mut model = BinaryHeap::new();
            for op in ops {
                match op {
                    Some(x) => {
                        heap.push(x);
                        model.push(x);
                    }
                    None => prop_assert_eq!(heap.pop(), model.pop()),
                }
                prop_assert_eq!(heap.peek(), model.peek());
                prop_assert_eq!(heap.len(), model.len());
            }
        }
    }
}
