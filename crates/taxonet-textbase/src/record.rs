//! Line-oriented textbase record parser

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A line consisting of exactly this string ends the current record.
pub const TERMINATOR: &str = "$";

/// Lines starting with this marker continue the most recently seen tag.
pub const CONTINUATION: &str = "; ";

/// One textbase record: a mapping from tag to its ordered value sequence.
///
/// Tags may repeat within a record; values always accumulate into the
/// sequence and are never overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Vec<String>>,
}

impl Record {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First value of a tag, if the tag is present.
    pub fn first(&self, tag: &str) -> Option<&str> {
        self.fields
            .get(tag)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a tag, in file order. Empty when the tag is absent.
    pub fn values(&self, tag: &str) -> &[String] {
        self.fields.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tags present in this record, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn push(&mut self, tag: &str, value: String) {
        self.fields.entry(tag.to_string()).or_default().push(value);
    }
}

/// Parse a textbase file into its records, preserving file order.
pub fn parse_textbase(path: &Path) -> io::Result<Vec<Record>> {
    let file = File::open(path)?;
    parse_records(BufReader::new(file))
}

/// Parse textbase records from any buffered reader.
///
/// Parsing is permissive by contract: malformed lines are absorbed by
/// well-defined fallbacks rather than raised as errors, since the source
/// corpus is external and imperfect.
pub fn parse_records<R: BufRead>(reader: R) -> io::Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut current = Record::default();
    let mut last_tag: Option<String> = None;

    for line in reader.lines() {
        let line = line?;

        // Blank lines carry no record-boundary meaning.
        if line.is_empty() {
            continue;
        }

        if line == TERMINATOR {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            last_tag = None;
            continue;
        }

        if let Some(rest) = line.strip_prefix(CONTINUATION) {
            match &last_tag {
                Some(tag) => current.push(tag, rest.to_string()),
                // No tag seen yet in this record: the line is dropped.
                None => tracing::debug!("continuation line before any tag dropped"),
            }
            continue;
        }

        let (tag, value) = match line.split_once(' ') {
            Some((tag, value)) => (tag.to_string(), value.to_string()),
            None => (line, String::new()),
        };
        current.push(&tag, value);
        last_tag = Some(tag);
    }

    // The file need not end with a terminator line.
    if !current.is_empty() {
        records.push(current);
    }

    Ok(records)
}
