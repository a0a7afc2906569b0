//! src/error.rs
use std::path::PathBuf;

/// Errors raised while preparing a worker, before any record is mapped.
///
/// Both variants are fatal to the worker that hit them: running with a
/// partial or empty filter would silently change every count downstream,
/// so the job fails fast instead.
#[derive(thiserror::Error)]
pub enum SetupError {
    #[error("Failed to read side file: {}", path.display())]
    SideFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to compile filter pattern: {pattern:?}")]
    MalformedPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl std::fmt::Debug for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
