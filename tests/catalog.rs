use ps_interview::catalog::{check, find, problems, Topic};
use ps_interview::Error;

#[test]
fn every_variant_passes_every_sample() {
    let failures: Vec<String> = problems()
        .iter()
        .flat_map(check)
        .filter(|outcome| !outcome.passed())
        .map(|outcome| {
            format!(
                "{}/{} #{}: expected {}, got {:?}",
                outcome.problem, outcome.variant, outcome.sample, outcome.expected, outcome.actual
            )
        })
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn every_topic_has_problems() {
    for topic in Topic::ALL {
        assert!(
            problems().iter().any(|p| p.topic == topic),
            "no problems for {topic}"
        );
    }
}

#[test]
fn malformed_input_is_an_error() {
    let two_sum = find("two-sum").unwrap();
    let variant = two_sum.default_variant().unwrap();
    assert!(matches!(variant.run("3 1 2"), Err(Error::UnexpectedEof(_))));
    assert!(matches!(variant.run("2 1 x 3"), Err(Error::Parse { .. })));
}

#[test]
fn variants_agree_on_fresh_input() {
    let problem = find("kth-largest").unwrap();
    let answers: Vec<String> = problem
        .variants
        .iter()
        .map(|v| v.run("6 3 2 1 5 6 4 2").unwrap())
        .collect();
    assert!(answers.windows(2).all(|w| w[0] == w[1]), "{answers:?}");
}

#[test]
fn variants_may_pick_different_valid_answers() {
    let problem = find("two-sum").unwrap();
    let nums = [1, 2, 3, 4];
    let answers: Vec<String> = problem
        .variants
        .iter()
        .map(|v| v.run("4 1 2 3 4 5").unwrap())
        .collect();
    for answer in &answers {
        let pair = answer
            .strip_prefix("Some((")
            .and_then(|s| s.strip_suffix("))"))
            .unwrap();
        let (i, j) = pair.split_once(", ").unwrap();
        let (i, j): (usize, usize) = (i.parse().unwrap(), j.parse().unwrap());
        assert!(i < j && nums[i] + nums[j] == 5, "{answer}");
    }
    assert!(answers.windows(2).any(|w| w[0] != w[1]), "{answers:?}");
}
