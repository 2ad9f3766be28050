//! The character dictionary is stored as comma separated JSON objects without the enclosing brackets of an
//! array, e.g. `{"char": "一", ...},\n{"char": "乙", ...}`.

use std::io::Read;

use crate::merge::{CharRecord, Result};

pub fn parse_char_base(text: &str) -> Result<Vec<CharRecord>> {
    let array_text = format!("[{text}]");
    let records: Vec<CharRecord> = serde_json::from_str(&array_text)?;
    Ok(records)
}

pub fn read_char_base<R: Read>(reader: &mut R) -> Result<Vec<CharRecord>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let records = parse_char_base(&text)?;
    tracing::info!(records = records.len(), "loaded character dictionary");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::MergeError;
    use serde_json::json;

    #[test]
    fn test_parse_char_base() {
        let text = "{\"char\": \"一\", \"pinyin\": [\"yī\"]},\n{\"char\": \"乙\", \"pinyin\": [\"yǐ\"], \"variant\": \"乁\"}\n";
        let records = parse_char_base(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["char"], json!("一"));
        assert_eq!(records[1]["variant"], json!("乁"));
    }

    #[test]
    fn test_parse_char_base_keeps_field_order() {
        let text = r#"{"strokes": 1, "char": "一", "index": 0}"#;
        let records = parse_char_base(text).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["strokes", "char", "index"]);
    }

    #[test]
    fn test_parse_char_base_empty() {
        assert!(parse_char_base("").unwrap().is_empty());
        assert!(parse_char_base("\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_char_base_invalid() {
        // already an array
        assert!(matches!(
            parse_char_base(r#"[{"char": "一"}]"#),
            Err(MergeError::Json { .. })
        ));
        // missing comma between the objects
        assert!(matches!(
            parse_char_base("{\"char\": \"一\"}\n{\"char\": \"乙\"}"),
            Err(MergeError::Json { .. })
        ));
        // not an object
        assert!(matches!(
            parse_char_base(r#""一""#),
            Err(MergeError::Json { .. })
        ));
    }

    #[test]
    fn test_read_char_base() {
        let mut reader = r#"{"char": "中"}"#.as_bytes();
        let records = read_char_base(&mut reader).unwrap();
        assert_eq!(records.len(), 1);
    }
}
