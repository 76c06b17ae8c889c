use crate::string::{longest_palindrome_span, palindrome_lengths};

// Widest palindrome centered between s[lo] and s[hi], as a half-open range
fn expand<T: Eq>(s: &[T], mut lo: usize, mut hi: usize) -> (usize, usize) {
    while lo > 0 && hi < s.len() && s[lo - 1] == s[hi] {
        lo -= 1;
        hi += 1;
    }
    (lo, hi)
}

// Substring of s spanning chars lo..hi
fn char_span(s: &str, lo: usize, hi: usize) -> &str {
    let offset = |k: usize| s.char_indices().nth(k).map_or(s.len(), |(i, _)| i);
    &s[offset(lo)..offset(hi)]
}

// Leftmost longest, by trying all 2n - 1 centers
pub fn longest_palindromic_substring_expand(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    let mut best = (0, 0);
    for c in 0..2 * chars.len() {
        // Odd centers sit on a character, even ones between two
        let (lo, hi) = if c % 2 == 0 {
            expand(&chars, c / 2, c / 2 + 1)
        } else {
            expand(&chars, c / 2 + 1, c / 2 + 1)
        };
        if hi - lo > best.1 - best.0 {
            best = (lo, hi);
        }
    }
    char_span(s, best.0, best.1)
}

pub fn longest_palindromic_substring_manacher(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    let span = longest_palindrome_span(&chars);
    char_span(s, span.start, span.end)
}

pub fn count_palindromic_substrings(s: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let mut count = 0;
    for center in 0..s.len() {
        for (lo, hi) in [(center, center + 1), (center + 1, center + 1)] {
            if hi <= s.len() {
                let (l, h) = expand(&s, lo, hi);
                count += (h - l + 1) / 2;
            }
        }
    }
    count
}

// A palindrome of length len contains (len + 1) / 2 palindromes with the same center
pub fn count_palindromic_substrings_manacher(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    palindrome_lengths(&chars)
        .into_iter()
        .map(|len| (len + 1) / 2)
        .sum()
}

// Interval table: dp[i][j] over s[i..j]
pub fn longest_palindromic_subsequence(s: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let n = s.len();
    let mut dp = vec![vec![0usize; n + 1]; n + 1];
    for i in (0..n).rev() {
        dp[i][i + 1] = 1;
        for j in i + 2..=n {
            dp[i][j] = if s[i] == s[j - 1] {
                dp[i + 1][j - 1] + 2
            } else {
                dp[i + 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[0][n]
}

pub fn longest_palindromic_subsequence_lcs(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let reversed: Vec<char> = chars.iter().rev().copied().collect();
    super::grid::longest_common_subsequence(&chars, &reversed)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_palindromes_agree() {
        let mut rng = Rng::new(197);
        for _ in 0..500 {
            let n = rng.index(16);
            let s: String = (0..n).map(|_| (b'a' + rng.index(3) as u8) as char).collect();
            assert_eq!(
                longest_palindromic_substring_expand(&s),
                longest_palindromic_substring_manacher(&s),
                "{s}"
            );
            let naive = (0..=n)
                .flat_map(|i| (i + 1..=n).map(move |j| (i, j)))
                .filter(|&(i, j)| s[i..j].bytes().eq(s[i..j].bytes().rev()))
                .count();
            assert_eq!(count_palindromic_substrings(&s), naive, "{s}");
            assert_eq!(count_palindromic_substrings_manacher(&s), naive, "{s}");
            assert_eq!(
                longest_palindromic_subsequence(&s),
                longest_palindromic_subsequence_lcs(&s),
                "{s}"
            );
        }
    }

    #[test]
    fn test_palindromes_multibyte() {
        assert_eq!(longest_palindromic_substring_expand("é"), "é");
        assert_eq!(longest_palindromic_substring_manacher("é"), "é");
        assert_eq!(longest_palindromic_substring_expand("xaéa"), "aéa");
        assert_eq!(longest_palindromic_substring_manacher("xaéa"), "aéa");
        assert_eq!(longest_palindromic_substring_manacher("日本日本"), "日本日");
        assert_eq!(longest_palindromic_substring_expand(""), "");
        assert_eq!(count_palindromic_substrings("éé"), 3);
        assert_eq!(count_palindromic_substrings_manacher("éé"), 3);
        assert_eq!(longest_palindromic_subsequence("é日e"), 1);
        assert_eq!(longest_palindromic_subsequence_lcs("é日e"), 1);

        let alphabet = ['a', 'é', '日'];
        let mut rng = Rng::new(199);
        for _ in 0..300 {
            let n = rng.index(12);
            let s: String = (0..n).map(|_| alphabet[rng.index(3)]).collect();
            let chars: Vec<char> = s.chars().collect();
            let is_palindrome = |w: &[char]| w.iter().eq(w.iter().rev());
            let mut longest: &[char] = &[];
            let mut count = 0;
            for i in 0..n {
                for j in i + 1..=n {
                    if is_palindrome(&chars[i..j]) {
                        count += 1;
                        if j - i > longest.len() {
                            longest = &chars[i..j];
                        }
                    }
                }
            }
            let longest: String = longest.iter().collect();
            assert_eq!(longest_palindromic_substring_expand(&s), longest, "{s}");
            assert_eq!(longest_palindromic_substring_manacher(&s), longest, "{s}");
            assert_eq!(count_palindromic_substrings(&s), count, "{s}");
            assert_eq!(count_palindromic_substrings_manacher(&s), count, "{s}");
            assert_eq!(
                longest_palindromic_subsequence(&s),
                longest_palindromic_subsequence_lcs(&s),
                "{s}"
            );
        }
    }
}
