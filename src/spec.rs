//! src/spec.rs
use crate::filter::FilterConfig;
use std::path::{Path, PathBuf};

/// A counting job: which files to count, where (optionally) to render the
/// totals, and the filtering surface for the run. Replaces the original's
/// process-wide option strings with an explicit value handed to pipeline
/// construction.
#[derive(Clone, Debug, Default)]
pub struct JobSpec {
    inputs: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    filter: FilterConfig,
}

impl JobSpec {
    pub fn new(filter: FilterConfig) -> Self {
        JobSpec {
            inputs: vec![],
            output_dir: None,
            filter,
        }
    }

    pub fn add_input(&mut self, path: impl Into<PathBuf>) {
        self.inputs.push(path.into());
    }

    pub fn set_output_dir(&mut self, path: impl Into<PathBuf>) {
        self.output_dir = Some(path.into());
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }
}
