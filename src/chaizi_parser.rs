/*
Format Description

- encoded in utf-8
- one character per line, fields separated by tabs
- the first field is the character, every following field is one possible decomposition
- the components of a decomposition are separated by single spaces

chaizi_line = hanzi {"\t" decomposition}
decomposition = component {" " component}

Example: "好\t女 子" decomposes 好 into 女 and 子, which is stored as "女子".
*/

use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::{all_consuming, map},
    multi::many0,
    sequence::preceded,
};

use itertools::Itertools;

use std::collections::HashMap;
use std::io::Read;

use crate::config::{CHAIZI_COMPONENT_SEP, CHAIZI_FIELD_SEP};
use crate::merge::Result;

/// Character -> decompositions (components concatenated), in file order
pub type ChaiziMap = HashMap<String, Vec<String>>;

#[derive(Debug, PartialEq)]
pub struct ChaiziLine {
    pub hanzi: String,
    pub decompositions: Vec<String>,
}

fn parse_field(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == CHAIZI_FIELD_SEP).parse(input)
}

/// "丨 口" -> "丨口"
pub fn join_components(decomposition: &str) -> String {
    decomposition.trim().split(CHAIZI_COMPONENT_SEP).join("")
}

pub fn parse_chaizi_line(input: &str) -> IResult<&str, ChaiziLine> {
    map(
        all_consuming((
            parse_field,
            many0(preceded(char(CHAIZI_FIELD_SEP), parse_field)),
        )),
        |(hanzi, decompositions): (&str, Vec<&str>)| ChaiziLine {
            hanzi: hanzi.to_owned(),
            decompositions: decompositions.into_iter().map(join_components).collect(),
        },
    )
    .parse(input)
}

/// Parse the whole decomposition file, a character appearing on several lines keeps the decompositions of
/// its last line
pub fn parse_chaizi(text: &str) -> ChaiziMap {
    let mut chaizi_map = ChaiziMap::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        // every line is accepted, a line without tab is a character without decompositions
        if let Ok((_, chaizi_line)) = parse_chaizi_line(line) {
            chaizi_map.insert(chaizi_line.hanzi, chaizi_line.decompositions);
        }
    }
    chaizi_map
}

pub fn read_chaizi<R: Read>(reader: &mut R) -> Result<ChaiziMap> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let chaizi_map = parse_chaizi(&text);
    tracing::info!(entries = chaizi_map.len(), "loaded decompositions");
    Ok(chaizi_map)
}
