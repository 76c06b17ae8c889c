use rustc_hash::FxHashSet;

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

// Every other value appears exactly twice
pub fn single_number(xs: &[i32]) -> i32 {
    xs.iter().fold(0, |acc, &x| acc ^ x)
}

pub fn single_number_set(xs: &[i32]) -> Option<i32> {
    let mut seen = FxHashSet::default();
    for &x in xs {
        if !seen.remove(&x) {
            seen.insert(x);
        }
    }
    seen.into_iter().next()
}

// Clears the lowest set bit until none remain
pub fn hamming_weight(mut n: u32) -> u32 {
    let mut count = 0;
    while n != 0 {
        n &= n - 1;
        count += 1;
    }
    count
}

// SWAR popcount
pub fn hamming_weight_swar(n: u32) -> u32 {
    let n = n - ((n >> 1) & 0x5555_5555);
    let n = (n & 0x3333_3333) + ((n >> 2) & 0x3333_3333);
    let n = (n + (n >> 4)) & 0x0f0f_0f0f;
    n.wrapping_mul(0x0101_0101) >> 24
}

// Popcounts of 0..=n, each from the value with its lowest bit shifted out
pub fn count_bits(n: usize) -> Vec<u32> {
    let mut res = vec![0u32; n + 1];
    for i in 1..=n {
        res[i] = res[i >> 1] + (i & 1) as u32;
    }
    res
}

pub fn count_bits_naive(n: usize) -> Vec<u32> {
    (0..=n).map(|i| i.count_ones()).collect()
}

// Swaps halves, then quarters, down to single bits
pub fn reverse_bits(n: u32) -> u32 {
    let n = n.rotate_left(16);
    let n = ((n & 0xff00_ff00) >> 8) | ((n & 0x00ff_00ff) << 8);
    let n = ((n & 0xf0f0_f0f0) >> 4) | ((n & 0x0f0f_0f0f) << 4);
    let n = ((n & 0xcccc_cccc) >> 2) | ((n & 0x3333_3333) << 2);
    ((n & 0xaaaa_aaaa) >> 1) | ((n & 0x5555_5555) << 1)
}

pub fn reverse_bits_loop(mut n: u32) -> u32 {
    let mut res = 0;
    for _ in 0..32 {
        res = res << 1 | n & 1;
        n >>= 1;
    }
    res
}

// xs holds n distinct values from 0..=n
pub fn missing_number_xor(xs: &[u32]) -> u32 {
    xs.iter()
        .enumerate()
        .fold(xs.len() as u32, |acc, (i, &x)| acc ^ i as u32 ^ x)
}

pub fn missing_number_sum(xs: &[u32]) -> u32 {
    let n = xs.len() as u64;
    let total: u64 = xs.iter().map(|&x| x as u64).sum();
    (n * (n + 1) / 2 - total) as u32
}

// Two's complement addition from xor and carries only
pub fn get_sum(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a as u32, b as u32);
    while b != 0 {
        let carry = (a & b) << 1;
        a ^= b;
        b = carry;
    }
    a as i32
}

fn read_missing(input: &mut &[u8]) -> Result<Vec<u32>> {
    let xs: Vec<u32> = input.counted_vec()?;
    let n = xs.len() as u32;
    let mut seen = vec![false; xs.len() + 1];
    for &x in &xs {
        if x > n || std::mem::replace(&mut seen[x as usize], true) {
            return Err(Error::invalid(format!("{x} is repeated or outside 0..={n}")));
        }
    }
    Ok(xs)
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("single-number", Topic::Bits, "the value that appears once")
            .variant("xor-fold", |input| Ok(render(single_number(&input.counted_vec()?))))
            .variant("toggle-set", |input| {
                let xs = input.counted_vec()?;
                let x = single_number_set(&xs).ok_or_else(|| Error::invalid("every value is paired"))?;
                Ok(render(x))
            })
            .sample("5 4 1 2 1 2", "4")
            .sample("3 2 2 1", "1")
            .sample("1 -7", "-7"),
        Problem::new("number-of-1-bits", Topic::Bits, "set bits of an unsigned 32-bit value")
            .variant("clear-lowest", |input| Ok(render(hamming_weight(input.value()?))))
            .variant("swar", |input| Ok(render(hamming_weight_swar(input.value()?))))
            .sample("11", "3")
            .sample("128", "1")
            .sample("4294967293", "31"),
        Problem::new("counting-bits", Topic::Bits, "popcounts of 0..=n")
            .variant("shift-recurrence", |input| Ok(render(count_bits(input.value()?))))
            .variant("popcount", |input| Ok(render(count_bits_naive(input.value()?))))
            .sample("2", "[0, 1, 1]")
            .sample("5", "[0, 1, 1, 2, 1, 2]"),
        Problem::new("reverse-bits", Topic::Bits, "bit order of an unsigned 32-bit value reversed")
            .variant("swap-masks", |input| Ok(render(reverse_bits(input.value()?))))
            .variant("bit-by-bit", |input| Ok(render(reverse_bits_loop(input.value()?))))
            .sample("43261596", "964176192")
            .sample("4294967293", "3221225471"),
        Problem::new("missing-number", Topic::Bits, "the value of 0..=n absent from n distinct values")
            .variant("xor", |input| Ok(render(missing_number_xor(&read_missing(input)?))))
            .variant("gauss-sum", |input| Ok(render(missing_number_sum(&read_missing(input)?))))
            .sample("3 3 0 1", "2")
            .sample("2 0 1", "2")
            .sample("9 9 6 4 2 3 5 7 0 1", "8"),
        Problem::new("sum-of-two-integers", Topic::Bits, "a + b without the + operator")
            .variant("carry-loop", |input| Ok(render(get_sum(input.value()?, input.value()?))))
            .sample("1 2", "3")
            .sample("-2 3", "1")
            .sample("-5 -7", "-12"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_popcounts_agree() {
        let mut rng = Rng::new(257);
        for _ in 0..1000 {
            let n = rng.next_u64() as u32;
            assert_eq!(hamming_weight(n), n.count_ones());
            assert_eq!(hamming_weight_swar(n), n.count_ones());
            assert_eq!(reverse_bits(n), n.reverse_bits());
            assert_eq!(reverse_bits_loop(n), n.reverse_bits());
        }
        for n in [0, 1, u32::MAX, 0x8000_0000] {
            assert_eq!(hamming_weight_swar(n), n.count_ones());
            assert_eq!(reverse_bits(n), n.reverse_bits());
        }
        assert_eq!(count_bits(100), count_bits_naive(100));
        assert_eq!(count_bits(0), [0]);
    }

    #[test]
    fn test_single_and_missing() {
        let mut rng = Rng::new(263);
        for _ in 0..200 {
            let n = rng.index(20);
            let mut xs: Vec<i32> = (0..n).map(|_| rng.range_i32(-50..50)).collect();
            xs.sort_unstable();
            xs.dedup();
            let Some(&lone) = xs.last() else { continue };
            let mut all: Vec<i32> = xs[..xs.len() - 1].iter().flat_map(|&x| [x, x]).collect();
            all.push(lone);
            rng.shuffle(&mut all);
            assert_eq!(single_number(&all), lone);
            assert_eq!(single_number_set(&all), Some(lone));

            let len = rng.index(30) as u32 + 1;
            let gone = rng.range_u64(0..len as u64 + 1) as u32;
            let mut ys: Vec<u32> = (0..=len).filter(|&y| y != gone).collect();
            rng.shuffle(&mut ys);
            assert_eq!(missing_number_xor(&ys), gone);
            assert_eq!(missing_number_sum(&ys), gone);
        }
    }

    #[test]
    fn test_get_sum() {
        let mut rng = Rng::new(269);
        for _ in 0..1000 {
            let (a, b) = (rng.next_u64() as i32, rng.next_u64() as i32);
            assert_eq!(get_sum(a, b), a.wrapping_add(b));
        }
        assert_eq!(get_sum(-1, 1), 0);
    }
}
