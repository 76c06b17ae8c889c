use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

// For each i, the smallest j > i with xs[j] > xs[i]
pub fn next_greater<T: Ord>(xs: &[T]) -> Vec<Option<usize>> {
    let mut res = vec![None; xs.len()];
    // Monotone stack: indices with non-increasing values
    let mut stack: Vec<usize> = vec![];
    for (i, x) in xs.iter().enumerate() {
        while let Some(&j) = stack.last() {
            if &xs[j] >= x {
                break;
            }
            res[j] = Some(i);
            stack.pop();
        }
        stack.push(i);
    }
    res
}

// For each i, the smallest j > i with xs[j] < xs[i]
pub fn next_smaller<T: Ord>(xs: &[T]) -> Vec<Option<usize>> {
    let mut res = vec![None; xs.len()];
    let mut stack: Vec<usize> = vec![];
    for (i, x) in xs.iter().enumerate() {
        while let Some(&j) = stack.last() {
            if &xs[j] <= x {
                break;
            }
            res[j] = Some(i);
            stack.pop();
        }
        stack.push(i);
    }
    res
}

pub fn next_greater_brute<T: Ord>(xs: &[T]) -> Vec<Option<usize>> {
    (0..xs.len())
        .map(|i| (i + 1..xs.len()).find(|&j| xs[j] > xs[i]))
        .collect()
}

// Days to wait for a warmer temperature, 0 if none
pub fn daily_temperatures(temps: &[i32]) -> Vec<usize> {
    next_greater(temps)
        .into_iter()
        .enumerate()
        .map(|(i, j)| j.map_or(0, |j| j - i))
        .collect()
}

pub fn largest_rectangle(heights: &[u32]) -> u64 {
    let n = heights.len();
    let mut best = 0;
    // (start, height) with increasing heights
    let mut stack: Vec<(usize, u32)> = vec![];
    for (i, h) in heights.iter().copied().chain(std::iter::once(0)).enumerate() {
        let mut start = i;
        while let Some(&(s, top)) = stack.last() {
            if top < h {
                break;
            }
            best = best.max(top as u64 * (i - s) as u64);
            start = s;
            stack.pop();
        }
        if i < n {
            stack.push((start, h));
        }
    }
    best
}

pub fn largest_rectangle_brute(heights: &[u32]) -> u64 {
    let n = heights.len();
    let mut best = 0;
    for i in 0..n {
        let mut min_h = u32::MAX;
        for j in i..n {
            min_h = min_h.min(heights[j]);
            best = best.max(min_h as u64 * (j + 1 - i) as u64);
        }
    }
    best
}

// Fills the water layer by layer as each basin is closed from the right
pub fn trap_rain_water(height: &[u32]) -> u64 {
    let mut water = 0u64;
    let mut stack: Vec<usize> = vec![];
    for (i, &h) in height.iter().enumerate() {
        while let Some(&bottom) = stack.last() {
            if height[bottom] >= h {
                break;
            }
            stack.pop();
            let Some(&left) = stack.last() else {
                break;
            };
            let width = (i - left - 1) as u64;
            let depth = h.min(height[left]) - height[bottom];
            water += width * depth as u64;
        }
        stack.push(i);
    }
    water
}

#[derive(Debug, Default, Clone)]
pub struct MinStack {
    // (value, minimum of the stack up to here)
    items: Vec<(i64, i64)>,
}

impl MinStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        let min = self.get_min().map_or(value, |m| m.min(value));
        self.items.push((value, min));
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.items.pop().map(|(v, _)| v)
    }

    pub fn top(&self) -> Option<i64> {
        self.items.last().map(|&(v, _)| v)
    }

    pub fn get_min(&self) -> Option<i64> {
        self.items.last().map(|&(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn valid_parentheses(s: &str) -> bool {
    let mut stack = vec![];
    for c in s.chars() {
        match c {
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ')' | ']' | '}' => {
                if stack.pop() != Some(c) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

// Reverse Polish notation over i64, truncating division
pub fn eval_rpn<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<i64> {
    let mut stack: Vec<i64> = vec![];
    for token in tokens {
        let op: fn(i64, i64) -> Option<i64> = match token {
            "+" => |a, b| a.checked_add(b),
            "-" => |a, b| a.checked_sub(b),
            "*" => |a, b| a.checked_mul(b),
            "/" => |a, b| a.checked_div(b),
            _ => {
                let value = token
                    .parse()
                    .map_err(|_| Error::invalid(format!("bad rpn token {token:?}")))?;
                stack.push(value);
                continue;
            }
        };
        let (b, a) = stack
            .pop()
            .zip(stack.pop())
            .ok_or_else(|| Error::invalid(format!("operator {token} lacks operands")))?;
        let value = op(a, b)
            .ok_or_else(|| Error::invalid(format!("{a} {token} {b} is undefined")))?;
        stack.push(value);
    }
    match stack[..] {
        [value] => Ok(value),
        _ => Err(Error::invalid(format!(
            "expression leaves {} values",
            stack.len()
        ))),
    }
}

// Smallest number after deleting k digits, without leading zeros
pub fn remove_k_digits(num: &str, k: usize) -> String {
    let mut k = k;
    let mut stack: Vec<u8> = vec![];
    for c in num.bytes() {
        while k > 0 && stack.last().map_or(false, |&top| top > c) {
            stack.pop();
            k -= 1;
        }
        stack.push(c);
    }
    stack.truncate(stack.len().saturating_sub(k));
    let start = stack
        .iter()
        .position(|&c| c != b'0')
        .unwrap_or(stack.len());
    if start == stack.len() {
        return "0".to_owned();
    }
    String::from_utf8_lossy(&stack[start..]).into_owned()
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("next-greater-element", Topic::Stack, "index of the next strictly greater element")
            .variant("monotonic-stack", |input| {
                Ok(render(next_greater::<i32>(&input.counted_vec()?)))
            })
            .variant("brute-force", |input| {
                Ok(render(next_greater_brute::<i32>(&input.counted_vec()?)))
            })
            .sample("4 2 1 2 4", "[Some(3), Some(2), Some(3), None]")
            .sample("3 3 2 1", "[None, None, None]"),
        Problem::new("next-smaller-element", Topic::Stack, "index of the next strictly smaller element")
            .variant("monotonic-stack", |input| {
                Ok(render(next_smaller::<i32>(&input.counted_vec()?)))
            })
            .sample("5 4 5 2 10 8", "[Some(2), Some(2), None, Some(4), None]"),
        Problem::new("daily-temperatures", Topic::Stack, "days until a warmer temperature")
            .variant("monotonic-stack", |input| {
                Ok(render(daily_temperatures(&input.counted_vec()?)))
            })
            .sample("8 73 74 75 71 69 72 76 73", "[1, 1, 4, 2, 1, 1, 0, 0]")
            .sample("3 30 60 90", "[1, 1, 0]"),
        Problem::new("largest-rectangle", Topic::Stack, "largest rectangle in a histogram")
            .variant("monotonic-stack", |input| {
                Ok(render(largest_rectangle(&input.counted_vec()?)))
            })
            .variant("brute-force", |input| {
                Ok(render(largest_rectangle_brute(&input.counted_vec()?)))
            })
            .sample("6 2 1 5 6 2 3", "10")
            .sample("2 2 4", "4")
            .sample("0", "0"),
        Problem::new("min-stack", Topic::Stack, "stack with O(1) minimum")
            .variant("paired-minimum", |input| {
                // ops: `push x`, `pop`, `top`, `min`
                let n: usize = input.value()?;
                let mut stack = MinStack::new();
                let mut out = vec![];
                for _ in 0..n {
                    match input.word()?.as_str() {
                        "push" => stack.push(input.value()?),
                        "pop" => out.push(stack.pop()),
                        "top" => out.push(stack.top()),
                        "min" => out.push(stack.get_min()),
                        op => return Err(Error::invalid(format!("unknown op {op:?}"))),
                    }
                }
                Ok(render(out))
            })
            .sample(
                "7 push -2 push 0 push -3 min pop top min",
                "[Some(-3), Some(-3), Some(0), Some(-2)]",
            )
            .sample("2 pop min", "[None, None]"),
        Problem::new("valid-parentheses", Topic::Stack, "brackets are balanced and well nested")
            .variant("stack", |input| Ok(render(valid_parentheses(&input.word()?))))
            .sample("()[]{}", "true")
            .sample("(]", "false")
            .sample("([)]", "false")
            .sample("{[]}", "true"),
        Problem::new("eval-rpn", Topic::Stack, "evaluate reverse polish notation")
            .variant("stack", |input| {
                let tokens = input.words()?;
                Ok(render(eval_rpn(tokens.iter().map(String::as_str))?))
            })
            .sample("5 2 1 + 3 *", "9")
            .sample("5 4 13 5 / +", "6")
            .sample("13 10 6 9 3 + -11 * / * 17 + 5 +", "22"),
        Problem::new("remove-k-digits", Topic::Stack, "smallest number after removing k digits")
            .variant("monotonic-stack", |input| {
                let num = input.word()?;
                Ok(render(remove_k_digits(&num, input.value()?)))
            })
            .sample("1432219 3", "\"1219\"")
            .sample("10200 1", "\"200\"")
            .sample("10 2", "\"0\""),
    ]
}
