use crate::catalog::{render, render_sorted, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

// Rearranges into the lexicographically next permutation.
// Returns false and resets to the smallest one on the last permutation.
pub fn next_permutation<T: Ord>(arr: &mut [T]) -> bool {
    match arr.windows(2).rposition(|w| w[0] < w[1]) {
        Some(i) => {
            let j = i + arr[i + 1..].partition_point(|x| &arr[i] < x);
            arr.swap(i, j);
            arr[i + 1..].reverse();
            true
        }
        None => {
            arr.reverse();
            false
        }
    }
}

pub fn subsets(xs: &[i32]) -> Vec<Vec<i32>> {
    fn go(xs: &[i32], start: usize, path: &mut Vec<i32>, res: &mut Vec<Vec<i32>>) {
        res.push(path.clone());
        for i in start..xs.len() {
            path.push(xs[i]);
            go(xs, i + 1, path, res);
            path.pop();
        }
    }
    let mut res = vec![];
    go(xs, 0, &mut vec![], &mut res);
    res
}

pub fn subsets_bitmask(xs: &[i32]) -> Vec<Vec<i32>> {
    (0..1u64 << xs.len())
        .map(|mask| {
            (0..xs.len())
                .filter(|i| mask >> i & 1 == 1)
                .map(|i| xs[i])
                .collect()
        })
        .collect()
}

// Distinct subsets of a multiset, each in ascending order
pub fn subsets_with_dup(xs: &[i32]) -> Vec<Vec<i32>> {
    fn go(xs: &[i32], start: usize, path: &mut Vec<i32>, res: &mut Vec<Vec<i32>>) {
        res.push(path.clone());
        for i in start..xs.len() {
            if i > start && xs[i] == xs[i - 1] {
                continue;
            }
            path.push(xs[i]);
            go(xs, i + 1, path, res);
            path.pop();
        }
    }
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    let mut res = vec![];
    go(&xs, 0, &mut vec![], &mut res);
    res
}

pub fn permutations_swap(xs: &[i32]) -> Vec<Vec<i32>> {
    fn go(xs: &mut [i32], idx: usize, res: &mut Vec<Vec<i32>>) {
        if idx == xs.len() {
            res.push(xs.to_vec());
            return;
        }
        for i in idx..xs.len() {
            xs.swap(idx, i);
            go(xs, idx + 1, res);
            xs.swap(idx, i);
        }
    }
    let mut res = vec![];
    go(&mut xs.to_vec(), 0, &mut res);
    res
}

pub fn permutations_used(xs: &[i32]) -> Vec<Vec<i32>> {
    fn go(xs: &[i32], used: &mut [bool], path: &mut Vec<i32>, res: &mut Vec<Vec<i32>>) {
        if path.len() == xs.len() {
            res.push(path.clone());
            return;
        }
        for i in 0..xs.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            path.push(xs[i]);
            go(xs, used, path, res);
            path.pop();
            used[i] = false;
        }
    }
    let mut res = vec![];
    go(xs, &mut vec![false; xs.len()], &mut vec![], &mut res);
    res
}

// Distinct permutations in lexicographic order; duplicates in `xs` are collapsed
pub fn permutations_lex(xs: &[i32]) -> Vec<Vec<i32>> {
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    let mut res = vec![xs.clone()];
    while next_permutation(&mut xs) {
        res.push(xs.clone());
    }
    res
}

pub fn permute_unique(xs: &[i32]) -> Vec<Vec<i32>> {
    fn go(xs: &[i32], used: &mut [bool], path: &mut Vec<i32>, res: &mut Vec<Vec<i32>>) {
        if path.len() == xs.len() {
            res.push(path.clone());
            return;
        }
        for i in 0..xs.len() {
            // Equal values are taken left to right only
            if used[i] || i > 0 && xs[i] == xs[i - 1] && !used[i - 1] {
                continue;
            }
            used[i] = true;
            path.push(xs[i]);
            go(xs, used, path, res);
            path.pop();
            used[i] = false;
        }
    }
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    let mut res = vec![];
    go(&xs, &mut vec![false; xs.len()], &mut vec![], &mut res);
    res
}

// k-subsets of 1..=n
pub fn combine(n: u32, k: usize) -> Vec<Vec<u32>> {
    fn go(next: u32, n: u32, k: usize, path: &mut Vec<u32>, res: &mut Vec<Vec<u32>>) {
        if path.len() == k {
            res.push(path.clone());
            return;
        }
        // Leave room for the remaining picks
        let last = (n + 1).saturating_sub((k - path.len()) as u32);
        for x in next..=last {
            path.push(x);
            go(x + 1, n, k, path, res);
            path.pop();
        }
    }
    let mut res = vec![];
    if k as u64 <= n as u64 {
        go(1, n, k, &mut vec![], &mut res);
    }
    res
}

// Candidates may be reused; each combination is ascending
pub fn combination_sum(candidates: &[u32], target: u32) -> Vec<Vec<u32>> {
    fn go(cs: &[u32], start: usize, rest: u32, path: &mut Vec<u32>, res: &mut Vec<Vec<u32>>) {
        if rest == 0 {
            res.push(path.clone());
            return;
        }
        for i in start..cs.len() {
            if cs[i] > rest {
                break;
            }
            if cs[i] == 0 || i > start && cs[i] == cs[i - 1] {
                continue;
            }
            path.push(cs[i]);
            go(cs, i, rest - cs[i], path, res);
            path.pop();
        }
    }
    let mut cs = candidates.to_vec();
    cs.sort_unstable();
    let mut res = vec![];
    go(&cs, 0, target, &mut vec![], &mut res);
    res
}

// Each candidate used at most once; no repeated combinations
pub fn combination_sum2(candidates: &[u32], target: u32) -> Vec<Vec<u32>> {
    fn go(cs: &[u32], start: usize, rest: u32, path: &mut Vec<u32>, res: &mut Vec<Vec<u32>>) {
        if rest == 0 {
            res.push(path.clone());
            return;
        }
        for i in start..cs.len() {
            if cs[i] > rest {
                break;
            }
            if i > start && cs[i] == cs[i - 1] {
                continue;
            }
            path.push(cs[i]);
            go(cs, i + 1, rest - cs[i], path, res);
            path.pop();
        }
    }
    let mut cs = candidates.to_vec();
    cs.sort_unstable();
    let mut res = vec![];
    go(&cs, 0, target, &mut vec![], &mut res);
    res
}

pub fn generate_parentheses(n: usize) -> Vec<String> {
    fn go(n: usize, open: usize, close: usize, acc: &mut String, res: &mut Vec<String>) {
        if acc.len() == 2 * n {
            res.push(acc.clone());
            return;
        }
        if open < n {
            acc.push('(');
            go(n, open + 1, close, acc, res);
            acc.pop();
        }
        if close < open {
            acc.push(')');
            go(n, open, close + 1, acc, res);
            acc.pop();
        }
    }
    let mut res = vec![];
    go(n, 0, 0, &mut String::new(), &mut res);
    res
}

pub const MAX_QUEENS: usize = 16;

pub fn solve_n_queens(n: usize) -> Vec<Vec<String>> {
    struct Board {
        n: usize,
        queens: Vec<usize>,
        cols: Vec<bool>,
        diag: Vec<bool>,
        anti: Vec<bool>,
    }

    fn go(b: &mut Board, res: &mut Vec<Vec<String>>) {
        let row = b.queens.len();
        if row == b.n {
            let rows = b
                .queens
                .iter()
                .map(|&c| (0..b.n).map(|j| if j == c { 'Q' } else { '.' }).collect())
                .collect();
            res.push(rows);
            return;
        }
        for c in 0..b.n {
            let (d, a) = (row + c, row + b.n - 1 - c);
            if b.cols[c] || b.diag[d] || b.anti[a] {
                continue;
            }
            (b.cols[c], b.diag[d], b.anti[a]) = (true, true, true);
            b.queens.push(c);
            go(b, res);
            b.queens.pop();
            (b.cols[c], b.diag[d], b.anti[a]) = (false, false, false);
        }
    }

    let mut board = Board {
        n,
        queens: vec![],
        cols: vec![false; n],
        diag: vec![false; 2 * n],
        anti: vec![false; 2 * n],
    };
    let mut res = vec![];
    go(&mut board, &mut res);
    res
}

// Columns and both diagonals as bitmasks; n <= MAX_QUEENS
pub fn total_n_queens(n: usize) -> usize {
    fn go(full: u32, cols: u32, diag: u32, anti: u32) -> usize {
        if cols == full {
            return 1;
        }
        let mut free = full & !(cols | diag | anti);
        let mut count = 0;
        while free != 0 {
            let bit = free & free.wrapping_neg();
            free ^= bit;
            count += go(full, cols | bit, (diag | bit) << 1, (anti | bit) >> 1);
        }
        count
    }
    debug_assert!(n <= MAX_QUEENS);
    go((1u32 << n) - 1, 0, 0, 0)
}

// Word spelled by a path of adjacent, unrepeated cells
pub fn exist(board: &[Vec<u8>], word: &str) -> bool {
    fn go(board: &mut [Vec<u8>], (i, j): (usize, usize), word: &[u8]) -> bool {
        let Some((&c, rest)) = word.split_first() else {
            return true;
        };
        if board[i][j] != c {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        board[i][j] = 0;
        let neighbors = [
            i.checked_sub(1).map(|i| (i, j)),
            Some((i + 1, j)),
            j.checked_sub(1).map(|j| (i, j)),
            Some((i, j + 1)),
        ];
        let mut found = false;
        for (ni, nj) in neighbors.into_iter().flatten() {
            if ni < board.len() && nj < board[ni].len() && go(board, (ni, nj), rest) {
                found = true;
                break;
            }
        }
        board[i][j] = c;
        found
    }

    if word.is_empty() {
        return true;
    }
    let mut board = board.to_vec();
    (0..board.len()).any(|i| (0..board[i].len()).any(|j| go(&mut board, (i, j), word.as_bytes())))
}

fn keypad(digit: u8) -> &'static [u8] {
    match digit {
        b'2' => b"abc",
        b'3' => b"def",
        b'4' => b"ghi",
        b'5' => b"jkl",
        b'6' => b"mno",
        b'7' => b"pqrs",
        b'8' => b"tuv",
        b'9' => b"wxyz",
        _ => b"",
    }
}

// Phone keypad spellings; empty for empty input
pub fn letter_combinations(digits: &str) -> Vec<String> {
    if digits.is_empty() {
        return vec![];
    }
    digits.bytes().fold(vec![String::new()], |acc, d| {
        acc.iter()
            .flat_map(|prefix| {
                keypad(d).iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c as char);
                    s
                })
            })
            .collect()
    })
}

pub fn partition_palindromes(s: &str) -> Vec<Vec<String>> {
    let s = s.as_bytes();
    let n = s.len();
    // pal[i][j]: s[i..j] is a palindrome
    let mut pal = vec![vec![false; n + 1]; n + 1];
    for i in (0..=n).rev() {
        for j in i..=n {
            pal[i][j] = j - i < 2 || s[i] == s[j - 1] && pal[i + 1][j - 1];
        }
    }

    fn go(s: &[u8], pal: &[Vec<bool>], start: usize, path: &mut Vec<String>, res: &mut Vec<Vec<String>>) {
        if start == s.len() {
            res.push(path.clone());
            return;
        }
        for end in start + 1..=s.len() {
            if pal[start][end] {
                path.push(String::from_utf8_lossy(&s[start..end]).into_owned());
                go(s, pal, end, path, res);
                path.pop();
            }
        }
    }
    let mut res = vec![];
    go(s, &pal, 0, &mut vec![], &mut res);
    res
}

fn read_queens(input: &mut &[u8]) -> Result<usize> {
    let n: usize = input.value()?;
    if n > MAX_QUEENS {
        return Err(Error::invalid(format!("board size {n} exceeds {MAX_QUEENS}")));
    }
    Ok(n)
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("subsets", Topic::Backtrack, "power set of distinct values")
            .variant("backtracking", |input| Ok(render_sorted(subsets(&input.counted_vec()?))))
            .variant("bitmask", |input| Ok(render_sorted(subsets_bitmask(&input.counted_vec()?))))
            .sample("3 1 2 3", "[[], [1], [1, 2], [1, 2, 3], [1, 3], [2], [2, 3], [3]]")
            .sample("0", "[[]]"),
        Problem::new("subsets-with-dup", Topic::Backtrack, "distinct subsets of a multiset")
            .variant("backtracking", |input| {
                Ok(render_sorted(subsets_with_dup(&input.counted_vec()?)))
            })
            .sample("3 1 2 2", "[[], [1], [1, 2], [1, 2, 2], [2], [2, 2]]"),
        Problem::new("permutations", Topic::Backtrack, "every ordering of distinct values")
            .variant("swap", |input| Ok(render_sorted(permutations_swap(&input.counted_vec()?))))
            .variant("used-mask", |input| Ok(render_sorted(permutations_used(&input.counted_vec()?))))
            .variant("next-permutation", |input| {
                Ok(render_sorted(permutations_lex(&input.counted_vec()?)))
            })
            .sample(
                "3 1 2 3",
                "[[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]]",
            )
            .sample("1 1", "[[1]]"),
        Problem::new("permutations-unique", Topic::Backtrack, "distinct orderings of a multiset")
            .variant("used-mask", |input| Ok(render_sorted(permute_unique(&input.counted_vec()?))))
            .variant("next-permutation", |input| {
                Ok(render_sorted(permutations_lex(&input.counted_vec()?)))
            })
            .sample("3 1 1 2", "[[1, 1, 2], [1, 2, 1], [2, 1, 1]]"),
        Problem::new("combinations", Topic::Backtrack, "k-subsets of 1..=n")
            .variant("backtracking", |input| {
                let (n, k) = (input.value()?, input.value()?);
                Ok(render(combine(n, k)))
            })
            .sample("4 2", "[[1, 2], [1, 3], [1, 4], [2, 3], [2, 4], [3, 4]]")
            .sample("1 1", "[[1]]"),
        Problem::new("combination-sum", Topic::Backtrack, "multisets of candidates summing to target")
            .variant("backtracking", |input| {
                let cs: Vec<u32> = input.counted_vec()?;
                Ok(render_sorted(combination_sum(&cs, input.value()?)))
            })
            .sample("4 2 3 6 7 7", "[[2, 2, 3], [7]]")
            .sample("3 2 3 5 8", "[[2, 2, 2, 2], [2, 3, 3], [3, 5]]")
            .sample("1 2 1", "[]"),
        Problem::new("combination-sum-ii", Topic::Backtrack, "each candidate at most once")
            .variant("backtracking", |input| {
                let cs: Vec<u32> = input.counted_vec()?;
                Ok(render_sorted(combination_sum2(&cs, input.value()?)))
            })
            .sample("7 10 1 2 7 6 1 5 8", "[[1, 1, 6], [1, 2, 5], [1, 7], [2, 6]]")
            .sample("5 2 5 2 1 2 5", "[[1, 2, 2], [5]]"),
        Problem::new("generate-parentheses", Topic::Backtrack, "all well-formed strings of n pairs")
            .variant("backtracking", |input| {
                Ok(render_sorted(generate_parentheses(input.value()?)))
            })
            .sample("3", "[\"((()))\", \"(()())\", \"(())()\", \"()(())\", \"()()()\"]")
            .sample("1", "[\"()\"]"),
        Problem::new("n-queens", Topic::Backtrack, "boards of n non-attacking queens")
            .variant("backtracking", |input| Ok(render_sorted(solve_n_queens(read_queens(input)?))))
            .sample(
                "4",
                "[[\"..Q.\", \"Q...\", \"...Q\", \".Q..\"], [\".Q..\", \"...Q\", \"Q...\", \"..Q.\"]]",
            )
            .sample("1", "[[\"Q\"]]"),
        Problem::new("n-queens-count", Topic::Backtrack, "number of n-queens boards")
            .variant("bitmask", |input| Ok(render(total_n_queens(read_queens(input)?))))
            .variant("board", |input| Ok(render(solve_n_queens(read_queens(input)?).len())))
            .sample("4", "2")
            .sample("8", "92")
            .sample("3", "0"),
        Problem::new("word-search", Topic::Backtrack, "word traced through adjacent grid cells")
            .variant("dfs", |input| {
                let board = input.char_grid()?;
                Ok(render(exist(&board, &input.word()?)))
            })
            .sample("3 ABCE SFCS ADEE ABCCED", "true")
            .sample("3 ABCE SFCS ADEE SEE", "true")
            .sample("3 ABCE SFCS ADEE ABCB", "false"),
        Problem::new("letter-combinations", Topic::Backtrack, "phone keypad spellings of digits")
            .variant("product", |input| Ok(render_sorted(letter_combinations(&input.word()?))))
            .sample(
                "23",
                "[\"ad\", \"ae\", \"af\", \"bd\", \"be\", \"bf\", \"cd\", \"ce\", \"cf\"]",
            )
            .sample("\"\"", "[]"),
        Problem::new("palindrome-partitioning", Topic::Backtrack, "splits into palindromic pieces")
            .variant("backtracking", |input| {
                Ok(render_sorted(partition_palindromes(&input.word()?)))
            })
            .sample("aab", "[[\"a\", \"a\", \"b\"], [\"aa\", \"b\"]]")
            .sample("a", "[[\"a\"]]"),
        Problem::new("next-permutation", Topic::Backtrack, "lexicographic successor, wrapping around")
            .variant("pivot-swap", |input| {
                let mut xs: Vec<i32> = input.counted_vec()?;
                next_permutation(&mut xs);
                Ok(render(xs))
            })
            .sample("3 1 2 3", "[1, 3, 2]")
            .sample("3 3 2 1", "[1, 2, 3]")
            .sample("3 1 1 5", "[1, 5, 1]"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    fn sorted<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
        xs.sort();
        xs
    }

    #[test]
    fn test_permutations_agree() {
        let mut rng = Rng::new(101);
        for n in 0..6 {
            let mut xs: Vec<i32> = (0..n).map(|x| x * 3 - 4).collect();
            rng.shuffle(&mut xs);
            let expected = sorted(permutations_swap(&xs));
            assert_eq!(expected.len(), (1..=n as usize).product::<usize>());
            assert_eq!(sorted(permutations_used(&xs)), expected);
            assert_eq!(permutations_lex(&xs), expected);
            assert_eq!(sorted(permute_unique(&xs)), expected);
        }
    }

    #[test]
    fn test_permute_unique_dedups() {
        let mut rng = Rng::new(103);
        for _ in 0..50 {
            let n = rng.index(6);
            let xs = rng.vec_i32(n, 0..3);
            let mut expected = sorted(permutations_used(&xs));
            expected.dedup();
            assert_eq!(sorted(permute_unique(&xs)), expected);
            assert_eq!(permutations_lex(&xs), expected);
        }
    }

    #[test]
    fn test_subsets_agree() {
        let mut rng = Rng::new(107);
        for _ in 0..50 {
            let n = rng.index(7);
            let xs = rng.vec_i32(n, 0..4);
            assert_eq!(sorted(subsets(&xs)), sorted(subsets_bitmask(&xs)));
            let mut expected: Vec<Vec<i32>> = subsets(&xs).into_iter().map(sorted).collect();
            expected.sort();
            expected.dedup();
            assert_eq!(sorted(subsets_with_dup(&xs)), expected);
        }
    }

    #[test]
    fn test_combinations() {
        for n in 0..8u32 {
            for k in 0..=n as usize + 1 {
                let combs = combine(n, k);
                let expected = subsets_bitmask(&(1..=n as i32).collect::<Vec<_>>())
                    .into_iter()
                    .filter(|s| s.len() == k)
                    .count();
                assert_eq!(combs.len(), expected);
                assert!(combs.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
            }
        }
        for comb in combination_sum(&[2, 3, 5], 8) {
            assert_eq!(comb.iter().sum::<u32>(), 8);
        }
        assert!(combination_sum(&[0, 1], 2).contains(&vec![1, 1]));
    }

    #[test]
    fn test_n_queens() {
        let counts = [1, 1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &count) in counts.iter().enumerate() {
            assert_eq!(total_n_queens(n), count);
            assert_eq!(solve_n_queens(n).len(), count);
        }
    }

    #[test]
    fn test_parentheses_catalan() {
        let catalan = [1, 1, 2, 5, 14, 42, 132];
        for (n, &c) in catalan.iter().enumerate() {
            assert_eq!(generate_parentheses(n).len(), c);
        }
    }

    #[test]
    fn test_letter_combinations() {
        assert_eq!(letter_combinations("79").len(), 16);
        assert!(letter_combinations("").is_empty());
        assert!(letter_combinations("21").is_empty());
    }
}
