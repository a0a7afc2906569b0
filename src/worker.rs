//! src/worker.rs
use crate::aggregators::aggregate_pairs;
use crate::filter::{FilterConfig, FilterSet};
use crate::functions::{Aggregate, BufferedEmitter, Count, Mapper, Word};
use crate::mappers::WordCountMapper;
use crate::splitter::InputSplit;
use anyhow::Context;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WorkerId(Uuid);

impl WorkerId {
    pub fn new() -> Self {
        WorkerId(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for WorkerId {
    fn default() -> Self {
        Self::new()
    }
}

/// One map task sequence. A worker owns a set of input splits, builds its
/// filter exactly once at setup, maps every record of every split through
/// one mapper, and pre-aggregates its own output (the combine pass) before
/// anything crosses the worker boundary.
pub struct MapWorker {
    id: WorkerId,
    splits: Vec<InputSplit>,
}

impl Default for MapWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl MapWorker {
    pub fn new() -> Self {
        MapWorker {
            id: WorkerId::new(),
            splits: vec![],
        }
    }

    pub fn id(&self) -> &WorkerId {
        &self.id
    }

    pub fn assign(&mut self, split: InputSplit) {
        self.splits.push(split);
    }

    pub fn has_work(&self) -> bool {
        !self.splits.is_empty()
    }

    pub fn split_count(&self) -> usize {
        self.splits.len()
    }

    /// Setup, map, combine. Setup failure aborts before any record is
    /// read; the caller surfaces it as a task failure.
    #[tracing::instrument(
        name = "Run map worker",
        skip_all,
        fields(worker_id = %self.id.id(), splits = self.splits.len())
    )]
    pub fn run<A: Aggregate>(
        &self,
        filter_config: &FilterConfig,
        aggregator: &A,
    ) -> anyhow::Result<Vec<(Word, Count)>> {
        let filter = Arc::new(FilterSet::load(filter_config)?);
        let mut mapper = WordCountMapper::build(
            BufferedEmitter::new(),
            filter,
            filter_config.case_sensitive,
        );

        for split in &self.splits {
            let records = split.records().context("Failed to read input split")?;
            tracing::debug!("mapping {} records from split {}", records.len(), split.id());
            for record in &records {
                mapper.map(record);
            }
        }

        let pairs = mapper.into_emitter().into_pairs();
        Ok(aggregate_pairs(pairs, aggregator).into_iter().collect())
    }
}
