//! src/mappers/word_count.rs
use crate::filter::FilterSet;
use crate::functions::{MapEmitter, Mapper, Record};
use crate::tokenizer::tokenize;
use std::sync::Arc;

/// Emits `(word, 1)` for every token of a record that survives the
/// worker's filter. Holds no state across records beyond the immutable
/// filter established at worker setup.
pub struct WordCountMapper<E: MapEmitter> {
    emitter: E,
    filter: Arc<FilterSet>,
    case_sensitive: bool,
}

impl<E: MapEmitter> WordCountMapper<E> {
    pub fn build(emitter: E, filter: Arc<FilterSet>, case_sensitive: bool) -> Self {
        Self {
            emitter,
            filter,
            case_sensitive,
        }
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

impl<E: MapEmitter> Mapper for WordCountMapper<E> {
    type Emitter = E;

    fn map(&mut self, record: &Record) {
        for token in tokenize(record.line(), &self.filter, self.case_sensitive) {
            self.emitter.emit(token, 1);
        }
    }
}
