//! src/side_input.rs
use crate::error::SetupError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Reads the auxiliary side files that carry a run's filter data.
///
/// Side files are newline-delimited UTF-8, one stop-word or pattern per
/// line. Lines are yielded in file order then line order; blank lines at
/// the end of a file are dropped. A location that cannot be opened or read
/// aborts worker setup with `SideFileUnreadable` rather than degrading to
/// an unfiltered count.
pub struct FilterSource {
    locations: Vec<PathBuf>,
}

impl FilterSource {
    pub fn new(locations: Vec<PathBuf>) -> Self {
        Self { locations }
    }

    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    #[tracing::instrument(name = "Read side files", skip(self), fields(files = self.locations.len()))]
    pub fn read_lines(&self) -> Result<Vec<String>, SetupError> {
        let mut lines = Vec::new();
        for path in &self.locations {
            let file = File::open(path).map_err(|source| SetupError::SideFileUnreadable {
                path: path.clone(),
                source,
            })?;
            let reader = BufReader::new(file);
            let mut file_lines = Vec::new();
            for line in reader.lines() {
                let line = line.map_err(|source| SetupError::SideFileUnreadable {
                    path: path.clone(),
                    source,
                })?;
                file_lines.push(line);
            }
            while file_lines.last().is_some_and(|line| line.trim().is_empty()) {
                file_lines.pop();
            }
            tracing::debug!("read {} filter lines from {}", file_lines.len(), path.display());
            lines.append(&mut file_lines);
        }
        Ok(lines)
    }
}
