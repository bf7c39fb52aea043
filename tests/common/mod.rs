//! Shared test utilities for dxfwriter integration tests.
//!
//! Rendered output is parsed back into group code / value pairs so tests can
//! reason about records and sections instead of raw text.

#![allow(dead_code)]

pub mod builders;

use std::collections::HashSet;

/// One group code / value pair read back from rendered text
pub type Pair = (i32, String);

/// Parse rendered DXF text into pairs
pub fn parse_pairs(text: &str) -> Vec<Pair> {
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len() % 2, 0, "odd number of lines in output");
    lines
        .chunks(2)
        .map(|pair| {
            let code = pair[0]
                .parse::<i32>()
                .unwrap_or_else(|_| panic!("bad group code {:?}", pair[0]));
            (code, pair[1].to_string())
        })
        .collect()
}

/// A record: everything from one code 0 pair up to the next
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub pairs: Vec<Pair>,
}

impl Record {
    /// First value with the given code
    pub fn get(&self, code: i32) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, v)| v.as_str())
    }

    /// All values with the given code
    pub fn all(&self, code: i32) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(c, _)| *c == code)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Own handle (code 5, or 105 for DIMSTYLE)
    pub fn handle(&self) -> Option<u64> {
        self.get(5)
            .or_else(|| self.get(105))
            .map(|h| u64::from_str_radix(h, 16).expect("handle is not hex"))
    }

    /// Owner handle, the first 330 outside any 102 group
    pub fn owner(&self) -> Option<u64> {
        let mut in_group = false;
        for (code, value) in &self.pairs {
            match *code {
                102 => in_group = value.starts_with('{'),
                330 if !in_group => {
                    return Some(u64::from_str_radix(value, 16).expect("owner is not hex"))
                }
                _ => {}
            }
        }
        None
    }
}

/// Split pairs into records
pub fn records(pairs: &[Pair]) -> Vec<Record> {
    let mut result: Vec<Record> = Vec::new();
    for (code, value) in pairs {
        if *code == 0 {
            result.push(Record {
                name: value.clone(),
                pairs: Vec::new(),
            });
        }
        if let Some(record) = result.last_mut() {
            record.pairs.push((*code, value.clone()));
        }
    }
    result
}

/// Section names in output order
pub fn section_names(pairs: &[Pair]) -> Vec<String> {
    pairs
        .windows(2)
        .filter(|w| w[0] == (0, "SECTION".to_string()) && w[1].0 == 2)
        .map(|w| w[1].1.clone())
        .collect()
}

/// Pairs inside one named section, markers excluded
pub fn section<'a>(pairs: &'a [Pair], name: &str) -> &'a [Pair] {
    let start = pairs
        .windows(2)
        .position(|w| w[0] == (0, "SECTION".to_string()) && w[1] == (2, name.to_string()))
        .unwrap_or_else(|| panic!("section {} missing", name))
        + 2;
    let end = pairs[start..]
        .iter()
        .position(|p| *p == (0, "ENDSEC".to_string()))
        .expect("section not closed")
        + start;
    &pairs[start..end]
}

/// Records of every section except HEADER, whose `$HANDSEED` uses code 5
pub fn handle_records(pairs: &[Pair]) -> Vec<Record> {
    ["TABLES", "BLOCKS", "ENTITIES", "OBJECTS"]
        .iter()
        .flat_map(|name| records(section(pairs, name)))
        .collect()
}

/// Check every begin marker has exactly one matching end marker, properly nested
pub fn assert_balanced(pairs: &[Pair]) {
    let mut stack: Vec<&str> = Vec::new();
    for (code, value) in pairs.iter().filter(|(c, _)| *c == 0) {
        assert_eq!(*code, 0);
        match value.as_str() {
            "SECTION" | "TABLE" | "BLOCK" | "POLYLINE" => stack.push(value),
            "ENDSEC" => assert_eq!(stack.pop(), Some("SECTION")),
            "ENDTAB" => assert_eq!(stack.pop(), Some("TABLE")),
            "ENDBLK" => assert_eq!(stack.pop(), Some("BLOCK")),
            "SEQEND" => assert_eq!(stack.pop(), Some("POLYLINE")),
            "EOF" => assert!(stack.is_empty(), "EOF inside {:?}", stack),
            _ => {}
        }
    }
    assert!(stack.is_empty(), "unclosed {:?}", stack);
    assert_eq!(pairs.last(), Some(&(0, "EOF".to_string())));
}

/// All own handles, asserting there are no duplicates
pub fn unique_handles(records: &[Record]) -> HashSet<u64> {
    let mut seen = HashSet::new();
    for record in records {
        if let Some(handle) = record.handle() {
            assert!(seen.insert(handle), "handle {:X} used twice ({})", handle, record.name);
        }
    }
    seen
}

/// `$HANDSEED` value from the header
pub fn handle_seed(pairs: &[Pair]) -> u64 {
    let header = section(pairs, "HEADER");
    let index = header
        .iter()
        .position(|p| *p == (9, "$HANDSEED".to_string()))
        .expect("$HANDSEED missing");
    u64::from_str_radix(&header[index + 1].1, 16).expect("seed is not hex")
}
