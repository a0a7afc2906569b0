//! src/aggregators/mod.rs
use crate::functions::{Aggregate, Count, Word};
use std::collections::HashMap;

mod sum;
pub use sum::SumAggregator;

/// Group a batch of `(word, count)` pairs by word and aggregate each
/// group, yielding exactly one pair per distinct word. This is the shape
/// of both pipeline positions: the combine pass runs it over one worker's
/// emitted pairs, the final reduce runs it over every worker's partial
/// counts. Output re-feeds input, so passes can be stacked freely.
pub fn aggregate_pairs<A: Aggregate>(
    pairs: Vec<(Word, Count)>,
    aggregator: &A,
) -> HashMap<Word, Count> {
    let mut grouped: HashMap<Word, Vec<Count>> = HashMap::new();
    for (word, count) in pairs {
        grouped.entry(word).or_default().push(count);
    }
    grouped
        .into_iter()
        .map(|(word, counts)| {
            let total = aggregator.aggregate(&word, counts);
            (word, total)
        })
        .collect()
}
