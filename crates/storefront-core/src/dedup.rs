//! # Deduplication Strategies
//!
//! Two ways of removing duplicates while keeping first-occurrence order,
//! and a timed side-by-side run of both.
//!
//! ```text
//! input   [1, 2, 2, 3, 4, 4, 5]
//!           │
//!           ├── dedup_naive: scan output for each item      O(n²)
//!           └── dedup_fast:  HashSet membership             O(n)
//!           │
//! output  [1, 2, 3, 4, 5]   (both)
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Instant;

use crate::types::BenchmarkSample;

/// Removes duplicates by checking each item against the output so far.
pub fn dedup_naive<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Removes duplicates with a hash set of the items already seen.
pub fn dedup_fast<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Timings and output lengths of both strategies over one input.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupComparison {
    pub naive: BenchmarkSample,
    pub fast: BenchmarkSample,
    pub naive_len: usize,
    pub fast_len: usize,
}

impl DedupComparison {
    /// The only correctness check the benchmark makes. Element-wise
    /// equality is not compared.
    pub fn lengths_match(&self) -> bool {
        self.naive_len == self.fast_len
    }

    /// Input size both strategies ran over.
    pub fn size(&self) -> usize {
        self.naive.size
    }
}

/// Runs both strategies over `input`, timing each.
pub fn compare_strategies<T: Eq + Hash + Clone>(input: &[T]) -> DedupComparison {
    let (naive_len, naive) = time_strategy(input, dedup_naive);
    let (fast_len, fast) = time_strategy(input, dedup_fast);

    DedupComparison {
        naive,
        fast,
        naive_len,
        fast_len,
    }
}

fn time_strategy<T>(input: &[T], strategy: fn(&[T]) -> Vec<T>) -> (usize, BenchmarkSample) {
    let start = Instant::now();
    let output = strategy(input);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    (
        output.len(),
        BenchmarkSample {
            size: input.len(),
            elapsed_ms,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEDUP_SAMPLE;
    use proptest::prelude::*;

    #[test]
    fn test_sample() {
        assert_eq!(dedup_naive(&DEDUP_SAMPLE), vec![1, 2, 3, 4, 5]);
        assert_eq!(dedup_fast(&DEDUP_SAMPLE), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [i64; 0] = [];
        assert!(dedup_naive(&empty).is_empty());
        assert!(dedup_fast(&empty).is_empty());
    }

    #[test]
    fn test_keeps_first_occurrence() {
        let input = ["b", "a", "b", "c", "a"];
        assert_eq!(dedup_fast(&input), vec!["b", "a", "c"]);
        assert_eq!(dedup_naive(&input), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_compare_strategies() {
        let comparison = compare_strategies(&DEDUP_SAMPLE);
        assert_eq!(comparison.size(), 7);
        assert_eq!(comparison.naive_len, 5);
        assert!(comparison.lengths_match());
        assert!(comparison.naive.elapsed_ms >= 0.0);
    }

    proptest! {
        #[test]
        fn prop_strategies_agree(input in prop::collection::vec(0i64..50, 0..200)) {
            let naive = dedup_naive(&input);
            let fast = dedup_fast(&input);
            prop_assert_eq!(naive.len(), fast.len());
            prop_assert_eq!(&naive, &fast);
        }

        #[test]
        fn prop_output_has_no_duplicates(input in prop::collection::vec(any::<i64>(), 0..100)) {
            let fast = dedup_fast(&input);
            let distinct: HashSet<_> = fast.iter().collect();
            prop_assert_eq!(distinct.len(), fast.len());
        }
    }
}
