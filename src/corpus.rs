//! Reading a corpus from JSON.
//!
//! The engine only ever sees `&[FaqRecord]`; this is the convenience loader the
//! CLI and tests use. Entries are decoded one by one so the first bad entry is
//! reported with its index instead of as a generic parse failure.

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::types::FaqRecord;

/// Parse a JSON array of records.
pub fn load_corpus<R: Read>(reader: R) -> Result<Vec<FaqRecord>> {
    let entries: Vec<Value> = serde_json::from_reader(reader).map_err(SearchError::CorpusFormat)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry)
                .map_err(|source| SearchError::MalformedRecord { index, source })
        })
        .collect()
}

pub fn load_corpus_file(path: impl AsRef<Path>) -> Result<Vec<FaqRecord>> {
    let file = File::open(path.as_ref())?;
    load_corpus(BufReader::new(file))
}
