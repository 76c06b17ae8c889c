// Closed intervals: touching ones merge but do not overlap for scheduling

use itertools::Itertools;

use crate::catalog::{render, Problem, Topic};
use crate::error::{Error, Result};
use crate::heap::MinHeap;
use crate::io::InputStream;

pub type Interval = [i32; 2];

fn sorted_by_start(intervals: &[Interval]) -> Vec<Interval> {
    let mut xs = intervals.to_vec();
    xs.sort_unstable();
    xs
}

pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut res: Vec<Interval> = vec![];
    for [start, end] in sorted_by_start(intervals) {
        match res.last_mut() {
            Some(last) if start <= last[1] => last[1] = last[1].max(end),
            _ => res.push([start, end]),
        }
    }
    res
}

// `intervals` sorted and disjoint
pub fn insert_interval(intervals: &[Interval], new: Interval) -> Vec<Interval> {
    let [mut start, mut end] = new;
    let before = intervals.partition_point(|iv| iv[1] < start);
    let after = intervals.partition_point(|iv| iv[0] <= end);
    let mut res = intervals[..before].to_vec();
    if before < after {
        start = start.min(intervals[before][0]);
        end = end.max(intervals[after - 1][1]);
    }
    res.push([start, end]);
    res.extend_from_slice(&intervals[after..]);
    res
}

// Fewest removals leaving no overlaps. Keeps the earliest-ending interval of each clash.
pub fn erase_overlap_intervals(intervals: &[Interval]) -> usize {
    let mut xs = intervals.to_vec();
    xs.sort_unstable_by_key(|&[start, end]| (end, start));
    let mut kept = 0;
    let mut last_end = None;
    for [start, end] in xs {
        if last_end.map_or(true, |e| e <= start) {
            kept += 1;
            last_end = Some(end);
        }
    }
    intervals.len() - kept
}

// Sweeping by start, dropping whichever of two clashing intervals ends later
pub fn erase_overlap_intervals_by_start(intervals: &[Interval]) -> usize {
    let mut removed = 0;
    let mut last_end: Option<i32> = None;
    for [start, end] in sorted_by_start(intervals) {
        match last_end {
            Some(e) if start < e => {
                removed += 1;
                last_end = Some(e.min(end));
            }
            _ => last_end = Some(end),
        }
    }
    removed
}

pub fn can_attend_meetings(intervals: &[Interval]) -> bool {
    sorted_by_start(intervals)
        .into_iter()
        .tuple_windows()
        .all(|(a, b)| a[1] <= b[0])
}

// Rooms in use at the busiest moment; a room freed at t can be reused at t
pub fn min_meeting_rooms_heap(intervals: &[Interval]) -> usize {
    let mut ends = MinHeap::new();
    let mut rooms = 0;
    for [start, end] in sorted_by_start(intervals) {
        if ends.peek().map_or(false, |&e| e <= start) {
            ends.pop();
        }
        ends.push(end);
        rooms = rooms.max(ends.len());
    }
    rooms
}

pub fn min_meeting_rooms_sweep(intervals: &[Interval]) -> usize {
    // Ends sort before starts at the same time
    let mut events: Vec<(i32, i32)> = intervals
        .iter()
        .flat_map(|&[start, end]| [(start, 1), (end, -1)])
        .collect();
    events.sort_unstable();
    let mut cur = 0i32;
    let mut best = 0;
    for (_, delta) in events {
        cur += delta;
        best = best.max(cur);
    }
    best as usize
}

fn read_intervals(input: &mut &[u8]) -> Result<Vec<Interval>> {
    let intervals: Vec<Interval> = input.pairs()?;
    match intervals.iter().find(|iv| iv[0] > iv[1]) {
        Some(iv) => Err(Error::invalid(format!("interval {iv:?} ends before it starts"))),
        None => Ok(intervals),
    }
}

pub(crate) fn problems() -> Vec<Problem> {
    vec![
        Problem::new("merge-intervals", Topic::Intervals, "union of overlapping intervals")
            .variant("sort-and-sweep", |input| Ok(render(merge_intervals(&read_intervals(input)?))))
            .sample("4 1 3 2 6 8 10 15 18", "[[1, 6], [8, 10], [15, 18]]")
            .sample("2 1 4 4 5", "[[1, 5]]")
            .sample("0", "[]"),
        Problem::new("insert-interval", Topic::Intervals, "insert into sorted disjoint intervals")
            .variant("binary-search", |input| {
                let intervals = merge_intervals(&read_intervals(input)?);
                let new = [input.value()?, input.value()?];
                Ok(render(insert_interval(&intervals, new)))
            })
            .variant("merge-all", |input| {
                let mut intervals = read_intervals(input)?;
                intervals.push([input.value()?, input.value()?]);
                Ok(render(merge_intervals(&intervals)))
            })
            .sample("2 1 3 6 9 2 5", "[[1, 5], [6, 9]]")
            .sample("5 1 2 3 5 6 7 8 10 12 16 4 8", "[[1, 2], [3, 10], [12, 16]]")
            .sample("0 5 7", "[[5, 7]]"),
        Problem::new("non-overlapping-intervals", Topic::Intervals, "fewest removals to avoid overlaps")
            .variant("earliest-end", |input| {
                Ok(render(erase_overlap_intervals(&read_intervals(input)?)))
            })
            .variant("sweep-by-start", |input| {
                Ok(render(erase_overlap_intervals_by_start(&read_intervals(input)?)))
            })
            .sample("4 1 2 2 3 3 4 1 3", "1")
            .sample("3 1 2 1 2 1 2", "2")
            .sample("2 1 2 2 3", "0"),
        Problem::new("meeting-rooms", Topic::Intervals, "one person can attend every meeting")
            .variant("sort", |input| Ok(render(can_attend_meetings(&read_intervals(input)?))))
            .sample("3 0 30 5 10 15 20", "false")
            .sample("2 7 10 2 4", "true"),
        Problem::new("meeting-rooms-ii", Topic::Intervals, "rooms needed to host every meeting")
            .variant("min-heap", |input| Ok(render(min_meeting_rooms_heap(&read_intervals(input)?))))
            .variant("sweep", |input| Ok(render(min_meeting_rooms_sweep(&read_intervals(input)?))))
            .sample("3 0 30 5 10 15 20", "2")
            .sample("2 7 10 2 4", "1")
            .sample("0", "0"),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::Rng;

    fn random_intervals(rng: &mut Rng, n: usize) -> Vec<Interval> {
        (0..n)
            .map(|_| {
                let start = rng.range_i32(0..20);
                [start, start + rng.range_i32(1..6)]
            })
            .collect()
    }

    fn overlaps(a: Interval, b: Interval) -> bool {
        a[0] < b[1] && b[0] < a[1]
    }

    #[test]
    fn test_merge_covers_same_points() {
        let mut rng = Rng::new(223);
        for _ in 0..300 {
            let n = rng.index(10);
            let xs = random_intervals(&mut rng, n);
            let merged = merge_intervals(&xs);
            assert!(merged.windows(2).all(|w| w[0][1] < w[1][0]), "{merged:?}");
            for t in -1..=26 {
                let inside = |ivs: &[Interval]| ivs.iter().any(|iv| iv[0] <= t && t <= iv[1]);
                assert_eq!(inside(&xs), inside(&merged), "{xs:?} at {t}");
            }

            let new = random_intervals(&mut rng, 1)[0];
            let mut all = xs.clone();
            all.push(new);
            assert_eq!(insert_interval(&merged, new), merge_intervals(&all));
        }
    }

    #[test]
    fn test_erase_overlap_agree() {
        let mut rng = Rng::new(227);
        for _ in 0..300 {
            let n = rng.index(9);
            let xs = random_intervals(&mut rng, n);
            let best_kept = (0..1u32 << n)
                .filter(|mask| {
                    let chosen: Vec<_> = (0..n).filter(|i| mask >> i & 1 == 1).collect();
                    chosen.iter().all(|&i| {
                        chosen.iter().all(|&j| i == j || !overlaps(xs[i], xs[j]))
                    })
                })
                .map(u32::count_ones)
                .max()
                .unwrap_or(0) as usize;
            assert_eq!(erase_overlap_intervals(&xs), n - best_kept, "{xs:?}");
            assert_eq!(erase_overlap_intervals_by_start(&xs), n - best_kept, "{xs:?}");
        }
    }

    #[test]
    fn test_meeting_rooms_agree() {
        let mut rng = Rng::new(229);
        for _ in 0..300 {
            let n = rng.index(12);
            let xs = random_intervals(&mut rng, n);
            // Busiest half-open instant
            let naive = (0..26)
                .map(|t| xs.iter().filter(|iv| iv[0] <= t && t < iv[1]).count())
                .max()
                .unwrap_or(0);
            assert_eq!(min_meeting_rooms_heap(&xs), naive, "{xs:?}");
            assert_eq!(min_meeting_rooms_sweep(&xs), naive, "{xs:?}");
            assert_eq!(can_attend_meetings(&xs), naive <= 1, "{xs:?}");
        }
    }
}
