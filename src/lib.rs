pub mod chaizi_parser;
pub mod char_base;
pub mod config;
pub mod data_check;
pub mod hanzi_to_db;
pub mod merge;
pub mod pinyin;
