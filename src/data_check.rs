use regex::Regex;
use serde_json::Value;

use std::collections::HashSet;

use crate::config::{CHAR_FIELD, PINYIN_FIELD, REQUIRED_FIELDS};
use crate::merge::CharRecord;

/// Check merged records for problems which would show up in applications using the data, returns one message
/// per problem (the records are not modified)
pub fn check_records(records: &[CharRecord]) -> Result<Vec<String>, regex::Error> {
    let hanzi_re = Regex::new(r"^\p{Han}$")?;
    let pinyin_re = Regex::new(r"^[a-z]+[1-4]?$")?;

    let mut errors = vec![];
    let mut seen = HashSet::new();
    for (record_idx, record) in records.iter().enumerate() {
        for field in REQUIRED_FIELDS {
            if !record.contains_key(field) {
                errors.push(format!("Record {record_idx}: missing field \"{field}\""));
            }
        }

        match record.get(CHAR_FIELD) {
            Some(Value::String(hanzi)) => {
                if !hanzi_re.is_match(hanzi) {
                    errors.push(format!(
                        "Record {record_idx}: \"{hanzi}\" is not a single Chinese character"
                    ));
                }
                if !seen.insert(hanzi.as_str()) {
                    errors.push(format!("Record {record_idx}: duplicate character \"{hanzi}\""));
                }
            }
            _ => errors.push(format!("Record {record_idx}: no valid \"{CHAR_FIELD}\" field")),
        }

        if let Some(Value::Array(pinyins)) = record.get(PINYIN_FIELD) {
            for pinyin in pinyins {
                match pinyin {
                    Value::String(p) if pinyin_re.is_match(p) => {}
                    Value::String(p) => errors.push(format!(
                        "Record {record_idx}: unexpected pinyin \"{p}\" (unconverted tone mark?)"
                    )),
                    other => {
                        errors.push(format!("Record {record_idx}: pinyin is not a string: {other}"));
                    }
                }
            }
        }
    }
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CharRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    fn complete(hanzi: &str, pinyin: &[&str]) -> CharRecord {
        record(json!({
            "index": 0,
            "char": hanzi,
            "strokes": 4,
            "pinyin": pinyin,
            "radicals": "丨",
            "frequency": 0
        }))
    }

    #[test]
    fn test_check_records_ok() {
        let records = vec![complete("中", &["zhong1", "zhong4"]), complete("吗", &["ma"])];
        assert!(check_records(&records).unwrap().is_empty());
    }

    #[test]
    fn test_check_records_missing_fields() {
        let records = vec![record(json!({"char": "中", "pinyin": ["zhong1"]}))];
        let errors = check_records(&records).unwrap();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Record 0: missing field \"index\"");
    }

    #[test]
    fn test_check_records_char() {
        let records = vec![complete("中国", &[]), complete("a", &[]), complete("好", &[]), complete("好", &[])];
        let errors = check_records(&records).unwrap();
        assert_eq!(
            errors,
            [
                "Record 0: \"中国\" is not a single Chinese character",
                "Record 1: \"a\" is not a single Chinese character",
                "Record 3: duplicate character \"好\"",
            ]
        );
    }

    #[test]
    fn test_check_records_pinyin() {
        let records = vec![complete("呣", &["ḿ", "m2", "lü", "Zhong1", "hao3"])];
        let errors = check_records(&records).unwrap();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("\"ḿ\""));
        assert!(errors[1].contains("\"lü\""));
        assert!(errors[2].contains("\"Zhong1\""));
    }
}
