// Answers render with `Debug`, so every variant of a problem compares against one expected text

use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{Error, Result};

pub type Runner = fn(&mut &[u8]) -> Result<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    Hashing,
    TwoPointers,
    SlidingWindow,
    Stack,
    BinarySearch,
    LinkedList,
    Tree,
    Trie,
    Heap,
    Backtrack,
    Graph,
    UnionFind,
    Dp,
    Intervals,
    Greedy,
    Bits,
    String,
}

impl Topic {
    pub const ALL: [Topic; 17] = [
        Topic::Hashing,
        Topic::TwoPointers,
        Topic::SlidingWindow,
        Topic::Stack,
        Topic::BinarySearch,
        Topic::LinkedList,
        Topic::Tree,
        Topic::Trie,
        Topic::Heap,
        Topic::Backtrack,
        Topic::Graph,
        Topic::UnionFind,
        Topic::Dp,
        Topic::Intervals,
        Topic::Greedy,
        Topic::Bits,
        Topic::String,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Hashing => "hashing",
            Topic::TwoPointers => "two-pointers",
            Topic::SlidingWindow => "sliding-window",
            Topic::Stack => "stack",
            Topic::BinarySearch => "binary-search",
            Topic::LinkedList => "linked-list",
            Topic::Tree => "tree",
            Topic::Trie => "trie",
            Topic::Heap => "heap",
            Topic::Backtrack => "backtrack",
            Topic::Graph => "graph",
            Topic::UnionFind => "union-find",
            Topic::Dp => "dp",
            Topic::Intervals => "intervals",
            Topic::Greedy => "greedy",
            Topic::Bits => "bits",
            Topic::String => "string",
        }
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid(format!("unknown topic {s:?}")))
    }
}

pub struct Variant {
    pub name: &'static str,
    pub solve: Runner,
}

impl Variant {
    pub fn run(&self, input: &str) -> Result<String> {
        let mut buf = input.as_bytes();
        (self.solve)(&mut buf)
    }
}

impl Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub input: &'static str,
    pub expected: &'static str,
}

#[derive(Debug)]
pub struct Problem {
    pub name: &'static str,
    pub topic: Topic,
    pub summary: &'static str,
    pub variants: Vec<Variant>,
    pub samples: Vec<Sample>,
}

impl Problem {
    pub fn new(name: &'static str, topic: Topic, summary: &'static str) -> Self {
        Self {
            name,
            topic,
            summary,
            variants: vec![],
            samples: vec![],
        }
    }

    pub fn variant(mut self, name: &'static str, solve: Runner) -> Self {
        self.variants.push(Variant { name, solve });
        self
    }

    pub fn sample(mut self, input: &'static str, expected: &'static str) -> Self {
        self.samples.push(Sample { input, expected });
        self
    }

    pub fn find_variant(&self, name: &str) -> Result<&Variant> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| Error::UnknownVariant {
                problem: self.name.to_owned(),
                variant: name.to_owned(),
            })
    }

    pub fn default_variant(&self) -> Result<&Variant> {
        self.variants
            .first()
            .ok_or_else(|| Error::invalid(format!("{} has no variants", self.name)))
    }
}

pub fn render<T: Debug>(value: T) -> String {
    format!("{:?}", value)
}

pub fn render_sorted<T: Ord + Debug>(mut values: Vec<T>) -> String {
    values.sort();
    render(values)
}

pub fn problems() -> &'static [Problem] {
    static CATALOG: OnceLock<Vec<Problem>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut all = vec![];
        all.extend(crate::hashing::problems());
        all.extend(crate::two_pointers::problems());
        all.extend(crate::sliding_window::problems());
        all.extend(crate::stack::problems());
        all.extend(crate::binary_search::problems());
        all.extend(crate::linked_list::problems());
        all.extend(crate::tree::problems());
        all.extend(crate::heap::problems());
        all.extend(crate::backtrack::problems());
        all.extend(crate::graph::problems());
        all.extend(crate::dp::problems());
        all.extend(crate::intervals::problems());
        all.extend(crate::greedy::problems());
        all.extend(crate::bits::problems());
        all.extend(crate::string::problems());
        all
    })
}

pub fn find(name: &str) -> Result<&'static Problem> {
    problems()
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| Error::UnknownProblem(name.to_owned()))
}

#[derive(Debug)]
pub struct Outcome {
    pub problem: &'static str,
    pub variant: &'static str,
    pub sample: usize,
    pub expected: &'static str,
    pub actual: Result<String>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(actual) if actual.trim() == self.expected.trim())
    }
}

// Runs every variant against every sample of `problem`.
pub fn check(problem: &Problem) -> Vec<Outcome> {
    let mut outcomes = vec![];
    for variant in &problem.variants {
        for (i, sample) in problem.samples.iter().enumerate() {
            let actual = variant.run(sample.input);
            let outcome = Outcome {
                problem: problem.name,
                variant: variant.name,
                sample: i,
                expected: sample.expected,
                actual,
            };
            if outcome.passed() {
                tracing::debug!("{}/{} sample #{} ok", problem.name, variant.name, i);
            } else {
                tracing::warn!(
                    "{}/{} sample #{}: expected {}, got {:?}",
                    problem.name,
                    variant.name,
                    i,
                    sample.expected,
                    outcome.actual
                );
            }
            outcomes.push(outcome);
        }
    }
    outcomes
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_names() {
        let mut seen = HashSet::new();
        for problem in problems() {
            assert!(seen.insert(problem.name), "duplicate {}", problem.name);
            assert!(!problem.variants.is_empty(), "{}", problem.name);
            assert!(!problem.samples.is_empty(), "{}", problem.name);
            let mut variants = HashSet::new();
            for v in &problem.variants {
                assert!(variants.insert(v.name), "{}/{}", problem.name, v.name);
            }
        }
    }

    #[test]
    fn test_topic_roundtrip() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), topic);
        }
        assert!("nope".parse::<Topic>().is_err());
    }

    #[test]
    fn test_lookup() {
        let problem = find("two-sum").unwrap();
        assert!(problem.find_variant("hash-map").is_ok());
        assert!(matches!(
            problem.find_variant("quantum"),
            Err(Error::UnknownVariant { .. })
        ));
        assert!(matches!(find("no-such"), Err(Error::UnknownProblem(_))));
    }
}
