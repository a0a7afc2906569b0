//! src/filter.rs
use crate::error::SetupError;
use crate::side_input::FilterSource;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    None,
    ExactMatch,
    PatternSubstitution,
}

/// Per-job filtering surface, passed into pipeline construction.
#[derive(Clone, Debug, Default)]
pub struct FilterConfig {
    pub mode: FilterMode,
    pub case_sensitive: bool,
    pub side_files: Vec<PathBuf>,
}

/// The in-memory filter a worker builds once at setup and then applies to
/// every record it processes. Immutable after `build`.
#[derive(Debug)]
pub enum FilterSet {
    /// No filtering configured; every token survives.
    Passthrough,
    /// Tokens that are members of the set are dropped after tokenization.
    Exact(HashSet<String>),
    /// Patterns are applied to the whole line, before tokenization, as
    /// global substitutions in load order.
    Patterns(Vec<Regex>),
}

impl FilterSet {
    /// Worker-setup entry point: read the configured side files and build
    /// the filter. Fatal on an unreadable side file or a malformed pattern.
    pub fn load(config: &FilterConfig) -> Result<Self, SetupError> {
        if config.mode == FilterMode::None {
            return Ok(FilterSet::Passthrough);
        }
        let lines = FilterSource::new(config.side_files.clone()).read_lines()?;
        Self::build(lines, config.case_sensitive, config.mode)
    }

    /// Parse raw side-file lines into a filter.
    ///
    /// Each line is trimmed and, when case-insensitive, folded before
    /// insertion. Blank lines are skipped. Exact-match entries collapse to
    /// set membership; pattern entries keep their order and duplicates.
    pub fn build<I, S>(lines: I, case_sensitive: bool, mode: FilterMode) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = lines.into_iter().filter_map(|line| {
            let line = line.as_ref().trim().to_string();
            if line.is_empty() {
                return None;
            }
            if case_sensitive {
                Some(line)
            } else {
                Some(line.to_lowercase())
            }
        });

        match mode {
            FilterMode::None => Ok(FilterSet::Passthrough),
            FilterMode::ExactMatch => Ok(FilterSet::Exact(normalized.collect())),
            FilterMode::PatternSubstitution => {
                let mut patterns = Vec::new();
                for line in normalized {
                    let pattern =
                        Regex::new(&line).map_err(|source| SetupError::MalformedPattern {
                            pattern: line,
                            source,
                        })?;
                    patterns.push(pattern);
                }
                Ok(FilterSet::Patterns(patterns))
            }
        }
    }

    /// True iff the token is a member of an exact-match set. Always false
    /// for the other variants.
    pub fn should_exclude(&self, token: &str) -> bool {
        match self {
            FilterSet::Exact(words) => words.contains(token),
            _ => false,
        }
    }

    /// Replace every pattern match in the line with the empty string, in
    /// stored order. Identity for the other variants.
    pub fn scrub<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self {
            FilterSet::Patterns(patterns) => {
                let mut scrubbed = line.to_string();
                for pattern in patterns {
                    scrubbed = pattern.replace_all(&scrubbed, "").into_owned();
                }
                Cow::Owned(scrubbed)
            }
            _ => Cow::Borrowed(line),
        }
    }
}
