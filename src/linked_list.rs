use std::fmt;

use rustc_hash::FxHashSet;

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::io::InputStream;

pub struct ListNode {
    pub val: i32,
    pub next: List,
}

pub type List = Option<Box<ListNode>>;

fn nodes(head: &ListNode) -> impl Iterator<Item = &ListNode> {
    std::iter::successors(Some(head), |node| node.next.as_deref())
}

// Unlinks one node at a time; the derived drop would recurse down the whole list
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        nodes(self).map(|node| node.val).eq(nodes(other).map(|node| node.val))
    }
}

impl Eq for ListNode {}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(nodes(self).map(|node| node.val)).finish()
    }
}

pub fn from_slice(xs: &[i32]) -> List {
    xs.iter()
        .rev()
        .fold(None, |next, &val| Some(Box::new(ListNode { val, next })))
}

pub fn iter(list: &List) -> impl Iterator<Item = i32> + '_ {
    std::iter::successors(list.as_deref(), |node| node.next.as_deref()).map(|node| node.val)
}

pub fn to_vec(list: &List) -> Vec<i32> {
    iter(list).collect()
}

pub fn len(list: &List) -> usize {
    iter(list).count()
}

// Detach every node, keeping order
fn into_nodes(mut list: List) -> Vec<Box<ListNode>> {
    let mut nodes = vec![];
    while let Some(mut node) = list {
        list = node.next.take();
        nodes.push(node);
    }
    nodes
}

fn from_nodes(nodes: impl DoubleEndedIterator<Item = Box<ListNode>>) -> List {
    nodes.rev().fold(None, |next, mut node| {
        node.next = next;
        Some(node)
    })
}

pub fn reverse(head: List) -> List {
    let mut prev = None;
    let mut cur = head;
    while let Some(mut node) = cur {
        cur = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

// Recursion depth is the list length
pub fn reverse_rec(head: List) -> List {
    fn go(cur: List, acc: List) -> List {
        match cur {
            None => acc,
            Some(mut node) => {
                let next = node.next.take();
                node.next = acc;
                go(next, Some(node))
            }
        }
    }
    go(head, None)
}

pub fn merge_two(mut a: List, mut b: List) -> List {
    let mut head: List = None;
    let mut tail = &mut head;
    loop {
        match (a, b) {
            (Some(mut x), Some(y)) if x.val <= y.val => {
                a = x.next.take();
                b = Some(y);
                tail = &mut tail.insert(x).next;
            }
            (Some(x), Some(mut y)) => {
                a = Some(x);
                b = y.next.take();
                tail = &mut tail.insert(y).next;
            }
            (rest, None) | (None, rest) => {
                *tail = rest;
                return head;
            }
        }
    }
}

// Recursion depth is the merged length
pub fn merge_two_rec(a: List, b: List) -> List {
    match (a, b) {
        (Some(mut x), Some(y)) if x.val <= y.val => {
            x.next = merge_two_rec(x.next.take(), Some(y));
            Some(x)
        }
        (Some(x), Some(mut y)) => {
            y.next = merge_two_rec(Some(x), y.next.take());
            Some(y)
        }
        (rest, None) | (None, rest) => rest,
    }
}

// n counts from 1 at the tail; out-of-range n leaves the list untouched.
// Recursion depth is the list length.
pub fn remove_nth_from_end(head: List, n: usize) -> List {
    // Returns the rebuilt list and the position of `node` counted from the tail
    fn go(node: List, n: usize) -> (List, usize) {
        match node {
            None => (None, 0),
            Some(mut node) => {
                let (next, k) = go(node.next.take(), n);
                if k + 1 == n {
                    (next, k + 1)
                } else {
                    node.next = next;
                    (Some(node), k + 1)
                }
            }
        }
    }
    go(head, n).0
}

pub fn remove_nth_from_end_vec(head: List, n: usize) -> List {
    let mut nodes = into_nodes(head);
    if (1..=nodes.len()).contains(&n) {
        let idx = nodes.len() - n;
        nodes.remove(idx);
    }
    from_nodes(nodes.into_iter())
}

// Second middle for even lengths
pub fn middle(head: &List) -> Option<i32> {
    let mut slow = head.as_deref();
    let mut fast = head.as_deref();
    while let Some(next) = fast.and_then(|f| f.next.as_deref()) {
        fast = next.next.as_deref();
        slow = slow.and_then(|s| s.next.as_deref());
    }
    slow.map(|node| node.val)
}

pub fn is_palindrome(head: &List) -> bool {
    let xs = to_vec(head);
    xs.iter().eq(xs.iter().rev())
}

// Reverses the first half in place while walking, then compares halves
pub fn is_palindrome_reverse(head: List) -> bool {
    let n = len(&head);
    let mut rest = head;
    let mut front: List = None;
    for _ in 0..n / 2 {
        if let Some(mut node) = rest {
            rest = node.next.take();
            node.next = front;
            front = Some(node);
        }
    }
    if n % 2 == 1 {
        rest = rest.and_then(|mut node| node.next.take());
    }
    iter(&front).eq(iter(&rest))
}

// Digits stored least significant first
pub fn add_two_numbers(a: &List, b: &List) -> List {
    let (mut a, mut b) = (a.as_deref(), b.as_deref());
    let mut digits = vec![];
    let mut carry = 0;
    while a.is_some() || b.is_some() || carry > 0 {
        let sum = a.map_or(0, |n| n.val) + b.map_or(0, |n| n.val) + carry;
        digits.push(sum % 10);
        carry = sum / 10;
        a = a.and_then(|n| n.next.as_deref());
        b = b.and_then(|n| n.next.as_deref());
    }
    from_slice(&digits)
}

// L0 -> Ln -> L1 -> Ln-1 -> ...
pub fn reorder(head: List) -> List {
    let mut nodes: std::collections::VecDeque<_> = into_nodes(head).into();
    let mut order = Vec::with_capacity(nodes.len());
    let mut from_front = true;
    loop {
        let next = if from_front {
            nodes.pop_front()
        } else {
            nodes.pop_back()
        };
        let Some(node) = next else {
            break;
        };
        order.push(node);
        from_front = !from_front;
    }
    from_nodes(order.into_iter())
}

// `next[u]` is the successor of node u. Floyd's tortoise and hare.
pub fn cycle_entry(next: &[Option<usize>], head: Option<usize>) -> Option<usize> {
    let step = |u: Option<usize>| u.and_then(|u| next[u]);
    let (mut slow, mut fast) = (head, head);
    loop {
        slow = step(slow);
        fast = step(step(fast));
        fast?;
        if slow == fast {
            break;
        }
    }
    let mut p = head;
    while p != slow {
        p = step(p);
        slow = step(slow);
    }
    p
}

pub fn has_cycle(next: &[Option<usize>], head: Option<usize>) -> bool {
    cycle_entry(next, head).is_some()
}

pub fn cycle_entry_hash(next: &[Option<usize>], head: Option<usize>) -> Option<usize> {
    let mut seen = FxHashSet::default();
    let mut u = head;
    while let Some(v) = u {
        if !seen.insert(v) {
            return Some(v);
        }
        u = next[v];
    }
    None
}

// `n v1 .. vn pos`: the tail links back to index pos, or nowhere if pos < 0
fn read_cyclic(input: &mut &[u8]) -> Result<(Vec<Option<usize>>, Option<usize>)> {
    let n: usize = input.value()?;
    let _values: Vec<i32> = input.vec(n)?;
    let pos: i64 = input.value()?;
    let mut next: Vec<Option<usize>> = (1..=n).map(|i| (i < n).then_some(i)).collect();
    if let Some(last) = next.last_mut() {
        *last = usize::try_from(pos).ok().filter(|&p| p < n);
    }
    Ok((next, (n > 0).then_some(0)))
}

// Deepest list the recursive variants accept
const MAX_RECURSION_DEPTH: usize = 4096;

pub(crate) fn problems() -> Vec<Problem> {
    fn list(input: &mut &[u8]) -> Result<List> {
        Ok(from_slice(&input.counted_vec()?))
    }

    fn shallow_list(input: &mut &[u8]) -> Result<List> {
        let xs: Vec<i32> = input.counted_vec()?;
        if xs.len() > MAX_RECURSION_DEPTH {
            return Err(Error::invalid(format!(
                "{} nodes exceeds the recursion limit of {MAX_RECURSION_DEPTH}",
                xs.len()
            )));
        }
        Ok(from_slice(&xs))
    }

    vec![
        Problem::new("reverse-list", Topic::LinkedList, "reverse a singly linked list")
            .variant("iterative", |input| Ok(render(to_vec(&reverse(list(input)?)))))
            .variant("recursive", |input| {
                Ok(render(to_vec(&reverse_rec(shallow_list(input)?))))
            })
            .sample("5 1 2 3 4 5", "[5, 4, 3, 2, 1]")
            .sample("0", "[]"),
        Problem::new("merge-two-lists", Topic::LinkedList, "merge two sorted lists")
            .variant("iterative", |input| {
                let (a, b) = (list(input)?, list(input)?);
                Ok(render(to_vec(&merge_two(a, b))))
            })
            .variant("recursive", |input| {
                let (a, b) = (shallow_list(input)?, shallow_list(input)?);
                if len(&a) + len(&b) > MAX_RECURSION_DEPTH {
                    return Err(Error::invalid("merged list exceeds the recursion limit"));
                }
                Ok(render(to_vec(&merge_two_rec(a, b))))
            })
            .sample("3 1 2 4 3 1 3 4", "[1, 1, 2, 3, 4, 4]")
            .sample("0 1 0", "[0]"),
        Problem::new("remove-nth-from-end", Topic::LinkedList, "drop the n-th node from the tail")
            .variant("recursive", |input| {
                let head = shallow_list(input)?;
                Ok(render(to_vec(&remove_nth_from_end(head, input.value()?))))
            })
            .variant("node-vec", |input| {
                let head = list(input)?;
                Ok(render(to_vec(&remove_nth_from_end_vec(head, input.value()?))))
            })
            .sample("5 1 2 3 4 5 2", "[1, 2, 3, 5]")
            .sample("1 1 1", "[]")
            .sample("2 1 2 1", "[1]"),
        Problem::new("middle-of-list", Topic::LinkedList, "middle node value")
            .variant("slow-fast", |input| Ok(render(middle(&list(input)?))))
            .sample("5 1 2 3 4 5", "Some(3)")
            .sample("6 1 2 3 4 5 6", "Some(4)")
            .sample("0", "None"),
        Problem::new("palindrome-list", Topic::LinkedList, "list reads the same both ways")
            .variant("collect", |input| Ok(render(is_palindrome(&list(input)?))))
            .variant("reverse-half", |input| {
                Ok(render(is_palindrome_reverse(list(input)?)))
            })
            .sample("4 1 2 2 1", "true")
            .sample("2 1 2", "false")
            .sample("3 1 0 1", "true"),
        Problem::new("add-two-numbers", Topic::LinkedList, "sum of two reversed-digit numbers")
            .variant("carry", |input| {
                let (a, b) = (list(input)?, list(input)?);
                Ok(render(to_vec(&add_two_numbers(&a, &b))))
            })
            .sample("3 2 4 3 3 5 6 4", "[7, 0, 8]")
            .sample("7 9 9 9 9 9 9 9 4 9 9 9 9", "[8, 9, 9, 9, 0, 0, 0, 1]"),
        Problem::new("reorder-list", Topic::LinkedList, "interleave the list with its reverse")
            .variant("deque", |input| Ok(render(to_vec(&reorder(list(input)?)))))
            .sample("4 1 2 3 4", "[1, 4, 2, 3]")
            .sample("5 1 2 3 4 5", "[1, 5, 2, 4, 3]"),
        Problem::new("linked-list-cycle", Topic::LinkedList, "index where the cycle begins")
            .variant("floyd", |input| {
                let (next, head) = read_cyclic(input)?;
                Ok(render(cycle_entry(&next, head)))
            })
            .variant("hash-set", |input| {
                let (next, head) = read_cyclic(input)?;
                Ok(render(cycle_entry_hash(&next, head)))
            })
            .sample("4 3 2 0 -4 1", "Some(1)")
            .sample("2 1 2 0", "Some(0)")
            .sample("1 1 -1", "None")
            .sample("0 -1", "None"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn test_reverse_merge() {
        let mut rng = Rng::new(47);
        for _ in 0..100 {
            let (n, m) = (rng.index(8), rng.index(8));
            let mut a = rng.vec_i32(n, -5..5);
            let mut b = rng.vec_i32(m, -5..5);
            let mut rev = a.clone();
            rev.reverse();
            assert_eq!(to_vec(&reverse(from_slice(&a))), rev);
            assert_eq!(to_vec(&reverse_rec(from_slice(&a))), rev);

            a.sort_unstable();
            b.sort_unstable();
            let mut merged: Vec<i32> = a.iter().chain(&b).copied().collect();
            merged.sort_unstable();
            assert_eq!(to_vec(&merge_two(from_slice(&a), from_slice(&b))), merged);
            assert_eq!(to_vec(&merge_two_rec(from_slice(&a), from_slice(&b))), merged);
        }
    }

    #[test]
    fn test_remove_nth_agree() {
        for n_len in 0..6 {
            let xs: Vec<i32> = (0..n_len).collect();
            for n in 0..8 {
                assert_eq!(
                    remove_nth_from_end(from_slice(&xs), n),
                    remove_nth_from_end_vec(from_slice(&xs), n)
                );
            }
        }
    }

    #[test]
    fn test_palindrome_agree() {
        let mut rng = Rng::new(53);
        for _ in 0..200 {
            let n = rng.index(7);
            let xs = rng.vec_i32(n, 0..2);
            assert_eq!(
                is_palindrome(&from_slice(&xs)),
                is_palindrome_reverse(from_slice(&xs))
            );
        }
    }

    #[test]
    fn test_long_lists() {
        let n = 1_000_000;
        let xs: Vec<i32> = (0..n).collect();
        let list = reverse(from_slice(&xs));
        assert_eq!(iter(&list).next(), Some(n - 1));
        assert_eq!(len(&list), n as usize);
        let rev: Vec<i32> = xs.iter().rev().copied().collect();
        assert_eq!(list, from_slice(&rev));
        drop(list);

        let merged = merge_two(from_slice(&xs), from_slice(&xs));
        assert_eq!(len(&merged), 2 * n as usize);
        assert_eq!(middle(&merged), Some(n / 2));
        let removed = remove_nth_from_end_vec(merged, 1);
        assert_eq!(iter(&removed).last(), Some(n - 1));
        assert!(is_palindrome_reverse(from_slice(&vec![1; n as usize])));
    }

    #[test]
    fn test_recursive_variants_bounded() {
        let problem = crate::catalog::find("reverse-list").unwrap();
        let recursive = problem.find_variant("recursive").unwrap();
        let iterative = problem.find_variant("iterative").unwrap();
        let n = MAX_RECURSION_DEPTH + 1;
        let input = format!("{n} {}", vec!["7"; n].join(" "));
        assert!(matches!(recursive.run(&input), Err(Error::InvalidInput(_))));
        assert!(iterative.run(&input).is_ok());

        let xs: Vec<i32> = (0..MAX_RECURSION_DEPTH as i32).collect();
        let mut rev = xs.clone();
        rev.reverse();
        assert_eq!(to_vec(&reverse_rec(from_slice(&xs))), rev);
        assert_eq!(to_vec(&remove_nth_from_end(from_slice(&xs), 1)), xs[..xs.len() - 1]);
    }

    #[test]
    fn test_cycle_agree() {
        let mut rng = Rng::new(59);
        for _ in 0..200 {
            // random functional graph
            let n = 1 + rng.index(10);
            let next: Vec<Option<usize>> = (0..n)
                .map(|_| {
                    let v = rng.index(n + 2);
                    (v < n).then_some(v)
                })
                .collect();
            let head = Some(rng.index(n));
            assert_eq!(cycle_entry(&next, head), cycle_entry_hash(&next, head));
        }
    }
}
