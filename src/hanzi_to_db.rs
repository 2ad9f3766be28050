use rusqlite::{Error as SqliteError, Transaction};
use serde_json::Value;

use crate::config::{CHAIZI_FIELD, CHAR_FIELD, HANZI_DB_SCHEMA, PINYIN_FIELD};
use crate::merge::CharRecord;

pub type SqliteId = i64;

fn string_items<'a>(record: &'a CharRecord, field: &str) -> impl Iterator<Item = &'a str> {
    record
        .get(field)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

/// Insert the merged records into the (empty) database, returns the number of inserted characters
pub fn hanzi_to_db(conn: &Transaction, records: &[CharRecord]) -> Result<usize, SqliteError> {
    conn.execute_batch(HANZI_DB_SCHEMA)?;

    let mut stmt_insert_hanzi = conn.prepare_cached(
        r"
        INSERT INTO hanzi (rank, char, data)
        VALUES (?1, ?2, ?3);
        ",
    )?;
    let mut stmt_insert_pinyin = conn.prepare_cached(
        r"
        INSERT INTO hanzi_pinyin (hanzi_id, rank, pinyin)
        VALUES (?1, ?2, ?3);
        ",
    )?;
    let mut stmt_insert_chaizi = conn.prepare_cached(
        r"
        INSERT INTO hanzi_chaizi (hanzi_id, rank, chaizi)
        VALUES (?1, ?2, ?3);
        ",
    )?;

    for (rank, record) in records.iter().enumerate() {
        let hanzi = record.get(CHAR_FIELD).and_then(Value::as_str).unwrap_or_default();
        let data = Value::Object(record.clone()).to_string();
        stmt_insert_hanzi.execute((rank, hanzi, data))?;
        let hanzi_id: SqliteId = conn.last_insert_rowid();

        for (pinyin_rank, pinyin) in string_items(record, PINYIN_FIELD).enumerate() {
            stmt_insert_pinyin.execute((hanzi_id, pinyin_rank, pinyin))?;
        }
        for (chaizi_rank, chaizi) in string_items(record, CHAIZI_FIELD).enumerate() {
            stmt_insert_chaizi.execute((hanzi_id, chaizi_rank, chaizi))?;
        }
    }
    Ok(records.len())
}
