use serde_json::{Map, Value};

use std::{fmt, io};
use std::io::Write;

use crate::chaizi_parser::ChaiziMap;
use crate::config::{CHAIZI_FIELD, CHAR_FIELD, PINYIN_FIELD, VARIANT_FIELD};
use crate::pinyin::pinyin_num_from_mark;

/// One entry of the character dictionary, field name -> value, in file order
pub type CharRecord = Map<String, Value>;

#[derive(Debug)]
pub enum MergeError {
    Io { source: io::Error },
    Json { source: serde_json::Error },
    MissingChar { record_idx: usize },
    InvalidChar { record_idx: usize },
}

pub type Result<T> = std::result::Result<T, MergeError>;

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "{source}"),
            Self::Json { source } => write!(f, "Invalid JSON: {source}"),
            Self::MissingChar { record_idx } => {
                write!(f, "Record {record_idx} has no \"{CHAR_FIELD}\" field")
            }
            Self::InvalidChar { record_idx } => {
                write!(f, "Record {record_idx}: \"{CHAR_FIELD}\" is not a string")
            }
        }
    }
}

impl From<io::Error> for MergeError {
    fn from(err: io::Error) -> Self {
        Self::Io { source: err }
    }
}

impl From<serde_json::Error> for MergeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { source: err }
    }
}

impl std::error::Error for MergeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            MergeError::Io { ref source } => Some(source),
            MergeError::Json { ref source } => Some(source),
            MergeError::MissingChar { .. } => None,
            MergeError::InvalidChar { .. } => None,
        }
    }
}

/// Merge a single record: drop "variant", convert "pinyin" to tone numbers and add the decompositions of the
/// character as "chaizi" (if there are any)
pub fn merge_record(
    record: CharRecord,
    record_idx: usize,
    chaizi_map: &ChaiziMap,
) -> Result<CharRecord> {
    let mut merged: CharRecord = record
        .into_iter()
        .filter(|(key, _)| key != VARIANT_FIELD)
        .collect();

    if let Some(Value::Array(pinyins)) = merged.get_mut(PINYIN_FIELD) {
        for pinyin in pinyins.iter_mut() {
            if let Value::String(pinyin_mark) = pinyin {
                *pinyin_mark = pinyin_num_from_mark(pinyin_mark);
            }
        }
    }

    let chaizi = match merged.get(CHAR_FIELD) {
        Some(Value::String(hanzi)) => chaizi_map.get(hanzi),
        Some(_) => return Err(MergeError::InvalidChar { record_idx }),
        None => return Err(MergeError::MissingChar { record_idx }),
    };
    if let Some(decompositions) = chaizi {
        let decompositions = decompositions.iter().cloned().map(Value::String).collect();
        merged.insert(CHAIZI_FIELD.to_owned(), Value::Array(decompositions));
    }

    Ok(merged)
}

/// Merge all records, keeps the order of the character dictionary and stops at the first record without
/// a usable "char" field
pub fn merge_hanzi(char_base: Vec<CharRecord>, chaizi_map: &ChaiziMap) -> Result<Vec<CharRecord>> {
    let merged = char_base
        .into_iter()
        .enumerate()
        .map(|(record_idx, record)| merge_record(record, record_idx, chaizi_map))
        .collect::<Result<Vec<_>>>()?;
    let with_chaizi = merged.iter().filter(|r| r.contains_key(CHAIZI_FIELD)).count();
    tracing::info!(records = merged.len(), with_chaizi, "merged records");
    Ok(merged)
}

/// Write the records as a JSON array, indented by two spaces, non-ASCII characters are not escaped
pub fn write_hanzi_data<W: Write>(writer: &mut W, records: &[CharRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writer.flush()?;
    Ok(())
}
