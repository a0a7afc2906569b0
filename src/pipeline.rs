//! src/pipeline.rs
use crate::aggregators::{aggregate_pairs, SumAggregator};
use crate::configuration::Settings;
use crate::functions::{Count, Word};
use crate::spec::JobSpec;
use crate::splitter::{InputSplit, InputSplitter};
use crate::worker::MapWorker;
use anyhow::Context;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The job driver. Splits the inputs, fans the splits out to map workers,
/// waits for every partial count to come back, runs the final reduce with
/// the same aggregator the workers used to combine, and optionally renders
/// the totals to the spec'd output directory.
pub struct Pipeline {
    spec: JobSpec,
    settings: Settings,
}

impl Pipeline {
    pub fn new(spec: JobSpec, settings: Settings) -> Self {
        Pipeline { spec, settings }
    }

    pub fn spec(&self) -> &JobSpec {
        &self.spec
    }

    #[tracing::instrument(name = "Run pipeline", skip_all, fields(inputs = self.spec.inputs().len()))]
    pub async fn run(&self) -> anyhow::Result<HashMap<Word, Count>> {
        let splits = self.split_inputs()?;

        let worker_count = self.settings.cluster.workers.max(1);
        let mut workers: Vec<MapWorker> = (0..worker_count).map(|_| MapWorker::new()).collect();
        for (i, split) in splits.into_iter().enumerate() {
            workers[i % worker_count].assign(split);
        }

        let mut handles = Vec::new();
        for worker in workers.into_iter().filter(|worker| worker.has_work()) {
            let filter_config = self.spec.filter().clone();
            let handle = tokio::task::spawn_blocking(move || {
                worker.run(&filter_config, &SumAggregator)
            });
            handles.push(handle);
        }

        // Barrier: every value for a key has to be in hand before the
        // final reduce sees that key.
        let mut partials: Vec<(Word, Count)> = Vec::new();
        for handle in handles {
            let partial = handle.await.context("Map worker task failed")??;
            partials.extend(partial);
        }

        let totals = aggregate_pairs(partials, &SumAggregator);
        tracing::info!("counted {} distinct words", totals.len());

        if let Some(dir) = self.spec.output_dir() {
            write_totals(dir, &totals)?;
        }
        Ok(totals)
    }

    #[tracing::instrument(name = "Split inputs", skip_all)]
    fn split_inputs(&self) -> anyhow::Result<Vec<InputSplit>> {
        let mut splits = Vec::new();
        for path in self.spec.inputs() {
            tracing::debug!("processing input file: {}", path.display());
            let splitter = InputSplitter::new(path.clone(), self.settings.engine.split_bytes);
            let file_splits = splitter.split().context("Failed to split input files")?;
            splits.extend(file_splits);
        }
        Ok(splits)
    }
}

#[tracing::instrument(name = "Write job output", skip(totals), fields(dir = %dir.display()))]
fn write_totals(dir: &Path, totals: &HashMap<Word, Count>) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).context("Failed to create output directory")?;
    let path = dir.join("part-00000");
    let file = File::create(&path).context(format!(
        "Failed to create output file at: {}",
        path.display()
    ))?;
    let mut writer = BufWriter::new(file);

    let mut sorted: Vec<(&Word, &Count)> = totals.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    for (word, count) in sorted {
        writeln!(writer, "{word}\t{count}").context("Failed to write output record")?;
    }
    writer.flush().context("Failed to flush output file")?;
    Ok(())
}
