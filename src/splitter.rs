//! src/splitter.rs
use crate::functions::Record;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A byte range of one input file, cut at line boundaries. Each split is
/// handed to exactly one map worker; the worker materializes the range
/// into records on demand.
#[derive(Clone, Debug)]
pub struct InputSplit {
    id: Uuid,
    path: PathBuf,
    offset: u64,
    len: u64,
}

impl InputSplit {
    fn new(path: &Path, offset: u64, len: u64) -> Self {
        InputSplit {
            id: Uuid::new_v4(),
            path: path.to_path_buf(),
            offset,
            len,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    /// Read the split's lines back as offset-tagged records.
    pub fn records(&self) -> anyhow::Result<Vec<Record>> {
        let mut file = File::open(&self.path).context(format!(
            "Failed to open input file: {}",
            self.path.display()
        ))?;
        file.seek(SeekFrom::Start(self.offset))
            .context("Failed to seek to input split offset")?;

        let reader = BufReader::new(file).take(self.len);
        let mut records = Vec::new();
        let mut offset = self.offset;
        for line in reader.lines() {
            let line = line.context("Failed to read line from input split")?;
            let advance = line.len() as u64 + 1;
            records.push(Record::new(offset, line));
            offset += advance;
        }
        Ok(records)
    }
}

/// Cuts an input file into splits of roughly `split_bytes` bytes, never
/// breaking a line across two splits. A single line longer than the
/// threshold gets a split of its own.
pub struct InputSplitter {
    path: PathBuf,
    split_bytes: u64,
}

impl InputSplitter {
    pub fn new(path: impl Into<PathBuf>, split_bytes: u64) -> Self {
        InputSplitter {
            path: path.into(),
            split_bytes,
        }
    }

    #[tracing::instrument(name = "Split input file", skip(self), fields(path = %self.path.display()))]
    pub fn split(&self) -> anyhow::Result<Vec<InputSplit>> {
        if !self.path.exists() {
            return Err(anyhow::anyhow!(
                "Input file does not exist: {}",
                self.path.display()
            ));
        }

        let file = File::open(&self.path).context("Failed to open input file")?;
        let reader = BufReader::new(file);

        let mut splits = Vec::new();
        let mut split_start = 0u64;
        let mut split_len = 0u64;
        let mut cursor = 0u64;
        for line in reader.lines() {
            let line = line.context("Failed to read line from input file")?;
            let line_bytes = line.len() as u64 + 1;
            if split_len > 0 && split_len + line_bytes > self.split_bytes {
                splits.push(InputSplit::new(&self.path, split_start, split_len));
                split_start = cursor;
                split_len = 0;
            }
            split_len += line_bytes;
            cursor += line_bytes;
        }
        if split_len > 0 {
            splits.push(InputSplit::new(&self.path, split_start, split_len));
        }
        tracing::debug!("cut {} into {} splits", self.path.display(), splits.len());
        Ok(splits)
    }
}
