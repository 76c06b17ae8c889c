use std::ops::Range;
use std::str;

use itertools::Itertools;

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

// pi[i]: length of the longest proper border of pattern[..=i]
pub fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut jump_table = vec![0; pattern.len()];
    let mut i_prev = 0;
    for i in 1..pattern.len() {
        while i_prev > 0 && pattern[i] != pattern[i_prev] {
            i_prev = jump_table[i_prev - 1];
        }
        if pattern[i] == pattern[i_prev] {
            i_prev += 1;
        }
        jump_table[i] = i_prev;
    }
    jump_table
}

// Start of every (possibly overlapping) occurrence of a non-empty pattern
pub fn kmp_find_all<'a: 'c, 'b: 'c, 'c, T: PartialEq>(
    s: impl IntoIterator<Item = T> + 'a,
    pattern: &'b [T],
) -> impl Iterator<Item = usize> + 'c {
    assert!(!pattern.is_empty());
    let jump_table = prefix_function(pattern);
    let mut j = 0;
    s.into_iter().enumerate().filter_map(move |(i, c)| {
        while j == pattern.len() || j > 0 && pattern[j] != c {
            j = jump_table[j - 1];
        }
        if pattern[j] == c {
            j += 1;
        }
        (j == pattern.len()).then(|| i + 1 - pattern.len())
    })
}

pub fn str_str(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    kmp_find_all(haystack.bytes(), needle.as_bytes()).next()
}

pub fn str_str_naive(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w == needle.as_bytes())
}

pub fn find_all_naive(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return (0..=haystack.len()).collect();
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .enumerate()
        .filter_map(|(i, w)| (w == needle.as_bytes()).then_some(i))
        .collect()
}

pub fn find_all(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return (0..=haystack.len()).collect();
    }
    kmp_find_all(haystack.bytes(), needle.as_bytes()).collect()
}

// Vertical scan over byte columns
pub fn longest_common_prefix(words: &[String]) -> String {
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let len = rest.iter().fold(first.len(), |len, w| {
        first.as_bytes()[..len]
            .iter()
            .zip(w.as_bytes())
            .take_while(|(a, b)| a == b)
            .count()
    });
    String::from_utf8_lossy(&first.as_bytes()[..len]).into_owned()
}

// The common prefix of all words is the one of the extreme pair after sorting
pub fn longest_common_prefix_sort(words: &[String]) -> String {
    let (Some(lo), Some(hi)) = (words.iter().min(), words.iter().max()) else {
        return String::new();
    };
    let len = lo
        .bytes()
        .zip(hi.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    String::from_utf8_lossy(&lo.as_bytes()[..len]).into_owned()
}

const ROMAN: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn roman_digit(c: u8) -> Option<u32> {
    Some(match c {
        b'I' => 1,
        b'V' => 5,
        b'X' => 10,
        b'L' => 50,
        b'C' => 100,
        b'D' => 500,
        b'M' => 1000,
        _ => return None,
    })
}

// A digit smaller than its successor is subtracted
pub fn roman_to_int(s: &str) -> Result<u32> {
    let digits = s
        .bytes()
        .map(|c| roman_digit(c).ok_or_else(|| Error::invalid(format!("{s:?} is not a roman numeral"))))
        .collect::<Result<Vec<u32>>>()?;
    let mut total = 0;
    for (i, &d) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(&next) if d < next => total -= d as i64,
            _ => total += d as i64,
        }
    }
    u32::try_from(total).map_err(|_| Error::invalid(format!("{s:?} is not a roman numeral")))
}

pub fn int_to_roman(mut n: u32) -> Result<String> {
    if !(1..=3999).contains(&n) {
        return Err(Error::invalid(format!("{n} is outside 1..=3999")));
    }
    let mut res = String::new();
    for &(value, symbol) in &ROMAN {
        while n >= value {
            res.push_str(symbol);
            n -= value;
        }
    }
    Ok(res)
}

pub fn reverse_words(s: &str) -> String {
    s.split_ascii_whitespace().rev().join(" ")
}

// Reverse the whole buffer, then every word back
pub fn reverse_words_in_place(s: &str) -> String {
    let mut buf: Vec<u8> = s.split_ascii_whitespace().join(" ").into_bytes();
    buf.reverse();
    for word in buf.split_mut(|&c| c == b' ') {
        word.reverse();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

// Manacher's algorithm.
// rs[i]: the largest r with s[i - r..=i + r] a palindrome
pub fn palindrome_radius<T: Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut i = 0;
    let mut radius = 0;
    let mut rs = vec![];
    while i < n {
        while i >= (radius + 1)
            && i + (radius + 1) < n
            && s[i - (radius + 1)] == s[i + (radius + 1)]
        {
            radius += 1;
        }
        rs.push(radius);

        let mut mirrored_center = i;
        let mut max_mirrored_radius = radius;
        i += 1;
        radius = 0;
        while max_mirrored_radius > 0 {
            mirrored_center -= 1;
            max_mirrored_radius -= 1;
            if rs[mirrored_center] == max_mirrored_radius {
                radius = max_mirrored_radius;
                break;
            }
            rs.push(rs[mirrored_center].min(max_mirrored_radius));
            i += 1;
        }
    }
    rs
}

// Radii over s interleaved with separators (#a#b#), so even palindromes get a center.
// Entry c is the length of the longest palindrome of s centered at c / 2.
pub fn palindrome_lengths<T: Eq>(s: &[T]) -> Vec<usize> {
    let interleaved: Vec<Option<&T>> = std::iter::once(None)
        .chain(s.iter().flat_map(|c| [Some(c), None]))
        .collect();
    palindrome_radius(&interleaved)
}

// Leftmost longest palindromic substring
pub fn longest_palindrome_span<T: Eq>(s: &[T]) -> Range<usize> {
    let lengths = palindrome_lengths(s);
    let mut best = 0..0;
    for (c, &len) in lengths.iter().enumerate() {
        let start = (c - len) / 2;
        if len > best.len() {
            best = start..start + len;
        }
    }
    best
}

fn read_line(input: &mut &[u8]) -> Result<String> {
    let line = input.line().ok_or(Error::UnexpectedEof("line"))?;
    str::from_utf8(line)
        .map(str::to_owned)
        .map_err(|_| Error::parse::<String>(line))
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("find-first-occurrence", Topic::String, "index of the first match of a needle")
            .variant("kmp", |input| {
                let (haystack, needle) = (input.word()?, input.word()?);
                Ok(render(str_str(&haystack, &needle)))
            })
            .variant("naive", |input| {
                let (haystack, needle) = (input.word()?, input.word()?);
                Ok(render(str_str_naive(&haystack, &needle)))
            })
            .sample("sadbutsad sad", "Some(0)")
            .sample("leetcode leeto", "None")
            .sample("hello ll", "Some(2)")
            .sample("abc \"\"", "Some(0)"),
        Problem::new("pattern-occurrences", Topic::String, "every, possibly overlapping, match")
            .variant("kmp", |input| {
                let (haystack, needle) = (input.word()?, input.word()?);
                Ok(render(find_all(&haystack, &needle)))
            })
            .variant("naive", |input| {
                let (haystack, needle) = (input.word()?, input.word()?);
                Ok(render(find_all_naive(&haystack, &needle)))
            })
            .sample("abababa aba", "[0, 2, 4]")
            .sample("aaaa b", "[]"),
        Problem::new("longest-common-prefix", Topic::String, "prefix shared by every word")
            .variant("vertical-scan", |input| Ok(render(longest_common_prefix(&input.words()?))))
            .variant("sorted-extremes", |input| {
                Ok(render(longest_common_prefix_sort(&input.words()?)))
            })
            .sample("3 flower flow flight", "\"fl\"")
            .sample("3 dog racecar car", "\"\"")
            .sample("0", "\"\""),
        Problem::new("roman-to-int", Topic::String, "value of a roman numeral")
            .variant("lookahead", |input| Ok(render(roman_to_int(&input.word()?)?)))
            .sample("III", "3")
            .sample("LVIII", "58")
            .sample("MCMXCIV", "1994"),
        Problem::new("int-to-roman", Topic::String, "roman numeral for 1..=3999")
            .variant("greedy", |input| Ok(render(int_to_roman(input.value()?)?)))
            .sample("3749", "\"MMMDCCXLIX\"")
            .sample("58", "\"LVIII\""),
        Problem::new("reverse-words", Topic::String, "words of a line in reverse order")
            .variant("split", |input| Ok(render(reverse_words(&read_line(input)?))))
            .variant("double-reverse", |input| {
                Ok(render(reverse_words_in_place(&read_line(input)?)))
            })
            .sample("the sky is blue", "\"blue is sky the\"")
            .sample("  hello world  ", "\"world hello\""),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    fn random_word(rng: &mut Rng, len: usize, alphabet: u8) -> String {
        (0..len).map(|_| (b'a' + rng.index(alphabet as usize) as u8) as char).collect()
    }

    #[test]
    fn test_kmp() {
        let mut rng = Rng::new(149);
        for _ in 0..500 {
            let (n, m) = (rng.index(30), 1 + rng.index(4));
            let haystack = random_word(&mut rng, n, 2);
            let needle = random_word(&mut rng, m, 2);
            assert_eq!(find_all(&haystack, &needle), find_all_naive(&haystack, &needle));
            assert_eq!(str_str(&haystack, &needle), str_str_naive(&haystack, &needle));
        }
        assert_eq!(prefix_function(b"aabaaab"), [0, 1, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn test_palindrome() {
        let naive = |s: &[u8]| {
            let mut best = 0..0;
            for i in 0..=s.len() {
                for j in i..=s.len() {
                    let t = &s[i..j];
                    if t.iter().eq(t.iter().rev()) && j - i > best.len() {
                        best = i..j;
                    }
                }
            }
            best
        };
        let mut rng = Rng::new(151);
        for _ in 0..500 {
            let n = rng.index(20);
            let s = random_word(&mut rng, n, 3);
            assert_eq!(longest_palindrome_span(s.as_bytes()), naive(s.as_bytes()), "{s}");
        }
        assert_eq!(palindrome_radius(b"abacaba"), [0, 1, 0, 3, 0, 1, 0]);
    }

    #[test]
    fn test_roman_roundtrip() {
        for n in 1..=3999 {
            assert_eq!(roman_to_int(&int_to_roman(n).unwrap()).unwrap(), n);
        }
        assert!(int_to_roman(0).is_err());
        assert!(roman_to_int("MCMZ").is_err());
    }

    #[test]
    fn test_common_prefix_agree() {
        let mut rng = Rng::new(157);
        for _ in 0..300 {
            let k = rng.index(5);
            let words: Vec<String> = (0..k)
                .map(|_| {
                    let len = rng.index(4);
                    random_word(&mut rng, len, 2)
                })
                .collect();
            assert_eq!(longest_common_prefix(&words), longest_common_prefix_sort(&words));
        }
    }
}
