//! src/mappers/mod.rs
mod word_count;
pub use word_count::WordCountMapper;
