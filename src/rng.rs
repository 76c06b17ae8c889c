// splitmix64, after Sebastiano Vigna (https://xoshiro.di.unimi.it/splitmix64.c)
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct Rng(u64);

// 2^64 mod width: values at or above it split evenly into width buckets
fn rejection_zone(width: u64) -> u64 {
    width.wrapping_neg() % width
}

impl Default for Rng {
    fn default() -> Self {
        Self(0x5eed_1234_abcd_0001)
    }
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        assert_ne!(seed, 0);
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut x = self.0;
        x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }

    pub fn range_u64(&mut self, range: Range<u64>) -> u64 {
        let Range { start, end } = range;
        assert!(start < end);

        let width = end - start;
        let test = rejection_zone(width);
        loop {
            let value = self.next_u64();
            if value >= test {
                return start + value % width;
            }
        }
    }

    pub fn range_i32(&mut self, range: Range<i32>) -> i32 {
        let Range { start, end } = range;
        let offset = self.range_u64(0..(end as i64 - start as i64) as u64);
        (start as i64 + offset as i64) as i32
    }

    pub fn index(&mut self, len: usize) -> usize {
        self.range_u64(0..len as u64) as usize
    }

    pub fn shuffle<T>(&mut self, xs: &mut [T]) {
        let n = xs.len();
        for i in 0..n.saturating_sub(1) {
            let j = self.range_u64(i as u64..n as u64) as usize;
            xs.swap(i, j);
        }
    }

    pub fn vec_i32(&mut self, len: usize, range: Range<i32>) -> Vec<i32> {
        (0..len).map(|_| self.range_i32(range.clone())).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_range_bounds() {
        let mut rng = Rng::new(42);
        for _ in 0..1000 {
            let x = rng.range_i32(-5..5);
            assert!((-5..5).contains(&x));
        }
        let mut xs: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut xs);
        xs.sort_unstable();
        assert!(xs.iter().copied().eq(0..50));
    }

    #[test]
    fn test_rejection_zone_is_exact() {
        for width in [1, 2, 3, 7, 10, 1 << 32, (1 << 63) - 1, 1 << 63, (1 << 63) + 1, u64::MAX] {
            let zone = rejection_zone(width);
            assert!(zone < width);
            let accepted = (1u128 << 64) - zone as u128;
            assert_eq!(accepted % width as u128, 0, "width {width}");
        }
        // Powers of two never reject
        assert_eq!(rejection_zone(1 << 40), 0);

        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            assert_eq!(rng.range_u64(5..6), 5);
            assert!(rng.range_u64(0..u64::MAX) < u64::MAX);
        }
    }
}
