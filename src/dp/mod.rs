pub mod grid;
pub mod knapsack;
pub mod linear;
pub mod palindrome;

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

use grid::*;
use knapsack::*;
use linear::*;
use palindrome::*;

// climb_stairs(n) overflows u64 past this
const MAX_STAIRS: usize = 90;

fn read_stairs(input: &mut &[u8]) -> Result<usize> {
    let n: usize = input.value()?;
    if n > MAX_STAIRS {
        return Err(Error::invalid(format!("{n} stairs exceeds {MAX_STAIRS}")));
    }
    Ok(n)
}

fn read_coins(input: &mut &[u8]) -> Result<(Vec<u32>, u32)> {
    Ok((input.counted_vec()?, input.value()?))
}

fn read_items(input: &mut &[u8]) -> Result<(Vec<Item>, u32)> {
    let items = input
        .pairs::<u32>()?
        .into_iter()
        .map(|[weight, value]| Item { weight, value })
        .collect();
    Ok((items, input.value()?))
}

fn chars(word: &str) -> Vec<char> {
    word.chars().collect()
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("climbing-stairs", Topic::Dp, "ways to climb taking one or two steps")
            .variant("memo", |input| Ok(render(climb_stairs_memo(read_stairs(input)?))))
            .variant("table", |input| Ok(render(climb_stairs_table(read_stairs(input)?))))
            .variant("rolling", |input| Ok(render(climb_stairs(read_stairs(input)?))))
            .sample("2", "2")
            .sample("3", "3")
            .sample("5", "8"),
        Problem::new("house-robber", Topic::Dp, "best loot skipping adjacent houses")
            .variant("rolling", |input| Ok(render(rob(&input.counted_vec()?))))
            .sample("4 1 2 3 1", "4")
            .sample("5 2 7 9 3 1", "12"),
        Problem::new("house-robber-ii", Topic::Dp, "houses arranged in a circle")
            .variant("two-passes", |input| Ok(render(rob_circular(&input.counted_vec()?))))
            .sample("3 2 3 2", "3")
            .sample("4 1 2 3 1", "4")
            .sample("1 5", "5"),
        Problem::new("coin-change", Topic::Dp, "fewest coins making the amount")
            .variant("table", |input| {
                let (coins, amount) = read_coins(input)?;
                Ok(render(coin_change(&coins, amount)))
            })
            .variant("bfs", |input| {
                let (coins, amount) = read_coins(input)?;
                Ok(render(coin_change_bfs(&coins, amount)))
            })
            .sample("3 1 2 5 11", "Some(3)")
            .sample("1 2 3", "None")
            .sample("1 1 0", "Some(0)"),
        Problem::new("coin-change-ways", Topic::Dp, "unordered coin combinations making the amount")
            .variant("table", |input| {
                let (coins, amount) = read_coins(input)?;
                Ok(render(coin_change_ways(&coins, amount)))
            })
            .sample("3 1 2 5 5", "4")
            .sample("1 2 3", "0")
            .sample("1 10 10", "1"),
        Problem::new("decode-ways", Topic::Dp, "readings of a digit string as letters 1..26")
            .variant("rolling", |input| Ok(render(decode_ways(&input.word()?))))
            .variant("recursive", |input| Ok(render(decode_ways_rec(&input.word()?))))
            .sample("12", "2")
            .sample("226", "3")
            .sample("06", "0"),
        Problem::new("word-break", Topic::Dp, "split into dictionary words")
            .variant("table", |input| {
                let s = input.word()?;
                Ok(render(word_break(&s, &input.words()?)))
            })
            .variant("memo", |input| {
                let s = input.word()?;
                Ok(render(word_break_memo(&s, &input.words()?)))
            })
            .sample("leetcode 2 leet code", "true")
            .sample("applepenapple 2 apple pen", "true")
            .sample("catsandog 5 cats dog sand and cat", "false"),
        Problem::new("longest-increasing-subsequence", Topic::Dp, "length of the longest strictly increasing subsequence")
            .variant("quadratic", |input| Ok(render(length_of_lis_quadratic(&input.counted_vec()?))))
            .variant("patience", |input| Ok(render(length_of_lis(&input.counted_vec()?))))
            .sample("8 10 9 2 5 3 7 101 18", "4")
            .sample("6 0 1 0 3 2 3", "4")
            .sample("7 7 7 7 7 7 7 7", "1"),
        Problem::new("max-subarray", Topic::Dp, "largest sum of a non-empty contiguous run")
            .variant("kadane", |input| Ok(render(max_subarray(&input.counted_vec()?))))
            .variant("divide-and-conquer", |input| {
                Ok(render(max_subarray_divide(&input.counted_vec()?)))
            })
            .sample("9 -2 1 -3 4 -1 2 1 -5 4", "Some(6)")
            .sample("2 1 -1", "Some(1)")
            .sample("0", "None"),
        Problem::new("max-product-subarray", Topic::Dp, "largest product of a non-empty contiguous run")
            .variant("min-max", |input| Ok(render(max_product_subarray(&input.counted_vec()?))))
            .variant("brute-force", |input| {
                Ok(render(max_product_subarray_brute(&input.counted_vec()?)))
            })
            .sample("4 2 3 -2 4", "Some(6)")
            .sample("3 -2 0 -1", "Some(0)"),
        Problem::new("partition-equal-subset-sum", Topic::Dp, "split into two halves of equal sum")
            .variant("subset-sum", |input| Ok(render(can_partition(&input.counted_vec()?))))
            .sample("4 1 5 11 5", "true")
            .sample("4 1 2 3 5", "false"),
        Problem::new("unique-paths", Topic::Dp, "right/down paths across a grid")
            .variant("table", |input| {
                let (rows, cols) = (input.value()?, input.value()?);
                Ok(render(unique_paths(rows, cols)))
            })
            .variant("combinatorial", |input| {
                let (rows, cols) = (input.value()?, input.value()?);
                Ok(render(unique_paths_comb(rows, cols)))
            })
            .sample("3 7", "Some(28)")
            .sample("3 2", "Some(3)")
            .sample("33 33", "Some(1832624140942590534)")
            .sample("35 35", "None"),
        Problem::new("unique-paths-ii", Topic::Dp, "right/down paths avoiding blocked cells")
            .variant("rolling", |input| Ok(render(unique_paths_with_obstacles(&input.matrix()?))))
            .sample("3 3 0 0 0 0 1 0 0 0 0", "2")
            .sample("2 2 0 1 0 0", "1"),
        Problem::new("min-path-sum", Topic::Dp, "cheapest right/down path")
            .variant("rolling", |input| Ok(render(min_path_sum(&input.matrix()?))))
            .sample("3 3 1 3 1 1 5 1 4 2 1", "Some(7)")
            .sample("2 3 1 2 3 4 5 6", "Some(12)"),
        Problem::new("longest-common-subsequence", Topic::Dp, "length of the longest shared subsequence")
            .variant("table", |input| {
                let (a, b) = (chars(&input.word()?), chars(&input.word()?));
                Ok(render(longest_common_subsequence(&a, &b)))
            })
            .sample("abcde ace", "3")
            .sample("abc def", "0"),
        Problem::new("edit-distance", Topic::Dp, "fewest single-character edits")
            .variant("table", |input| {
                let (a, b) = (chars(&input.word()?), chars(&input.word()?));
                Ok(render(edit_distance_table(&a, &b)))
            })
            .variant("rolling", |input| {
                let (a, b) = (chars(&input.word()?), chars(&input.word()?));
                Ok(render(edit_distance(&a, &b)))
            })
            .sample("horse ros", "3")
            .sample("intention execution", "5")
            .sample("café cafe", "1")
            .sample("\"\" abc", "3"),
        Problem::new("longest-palindromic-substring", Topic::Dp, "leftmost longest palindrome")
            .variant("expand-around-center", |input| {
                Ok(render(longest_palindromic_substring_expand(&input.word()?)))
            })
            .variant("manacher", |input| {
                Ok(render(longest_palindromic_substring_manacher(&input.word()?)))
            })
            .sample("babad", "\"bab\"")
            .sample("xaéa", "\"aéa\"")
            .sample("cbbd", "\"bb\""),
        Problem::new("palindromic-substrings", Topic::Dp, "count of palindromic substrings")
            .variant("expand-around-center", |input| {
                Ok(render(count_palindromic_substrings(&input.word()?)))
            })
            .variant("manacher", |input| {
                Ok(render(count_palindromic_substrings_manacher(&input.word()?)))
            })
            .sample("abc", "3")
            .sample("aaa", "6"),
        Problem::new("longest-palindromic-subsequence", Topic::Dp, "length of the longest palindromic subsequence")
            .variant("interval", |input| Ok(render(longest_palindromic_subsequence(&input.word()?))))
            .variant("lcs-with-reverse", |input| {
                Ok(render(longest_palindromic_subsequence_lcs(&input.word()?)))
            })
            .sample("bbbab", "4")
            .sample("cbbd", "2"),
        Problem::new("knapsack-01", Topic::Dp, "best value within capacity, each item once")
            .variant("table-2d", |input| {
                let (items, capacity) = read_items(input)?;
                Ok(render(knapsack_01_table(&items, capacity)))
            })
            .variant("rolling-1d", |input| {
                let (items, capacity) = read_items(input)?;
                Ok(render(knapsack_01(&items, capacity)))
            })
            .sample("3 1 1 3 4 4 5 7", "9")
            .sample("0 5", "0"),
        Problem::new("target-sum", Topic::Dp, "sign assignments reaching the target")
            .variant("subset-count", |input| {
                let xs: Vec<u32> = input.counted_vec()?;
                Ok(render(target_sum(&xs, input.value()?)))
            })
            .variant("brute-force", |input| {
                let xs: Vec<u32> = input.counted_vec()?;
                Ok(render(target_sum_brute(&xs, input.value()?)))
            })
            .sample("5 1 1 1 1 1 3", "5")
            .sample("1 1 1", "1"),
    ]
}
