//! src/tokenizer.rs
use crate::filter::FilterSet;
use crate::functions::Word;
use std::borrow::Cow;

/// Split a line into normalized, filtered tokens.
///
/// The line is case-folded first (unless the run is case-sensitive), then
/// scrubbed by a pattern-substitution filter, then split on whitespace
/// runs; an exact-match filter drops excluded tokens last. Tokens come out
/// in their left-to-right order in the line, and re-invocation on the same
/// inputs yields the same tokens.
pub fn tokenize(line: &str, filter: &FilterSet, case_sensitive: bool) -> Vec<Word> {
    let folded: Cow<'_, str> = if case_sensitive {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(line.to_lowercase())
    };
    let scrubbed = filter.scrub(&folded);
    scrubbed
        .split_whitespace()
        .filter(|token| !filter.should_exclude(token))
        .map(str::to_string)
        .collect()
}
