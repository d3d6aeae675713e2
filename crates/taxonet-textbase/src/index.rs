//! Notation index keyed by each record's own notation code

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::record::{parse_textbase, Record};

/// Tag holding a record's own notation code (first value wins).
pub const NOTATION_TAG: &str = "N";

/// Tag holding a record's ordered child notation codes.
pub const CHILDREN_TAG: &str = "C";

/// Mapping from notation code to its record.
#[derive(Debug, Default)]
pub struct NotationIndex {
    records: HashMap<String, Record>,
}

impl NotationIndex {
    /// Index parsed records by the first value of their `N` tag.
    ///
    /// Records without a non-empty `N` are unindexed; on duplicate codes the
    /// later record wins. Both are silent fallbacks, not errors.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut index = HashMap::new();
        for record in records {
            let code = record
                .first(NOTATION_TAG)
                .filter(|code| !code.is_empty())
                .map(str::to_string);
            match code {
                Some(code) => {
                    if index.insert(code.clone(), record).is_some() {
                        tracing::debug!(%code, "duplicate notation code, later record kept");
                    }
                }
                None => tracing::debug!("record without notation code dropped"),
            }
        }
        NotationIndex { records: index }
    }

    /// Parse a textbase file and index its records.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::from_records(parse_textbase(path)?))
    }

    pub fn get(&self, code: &str) -> Option<&Record> {
        self.records.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// Child codes of a notation, in record order.
    ///
    /// Unknown codes and childless records both read as empty, so dangling
    /// references behave as leaves during traversal.
    pub fn children(&self, code: &str) -> &[String] {
        self.records
            .get(code)
            .map(|record| record.values(CHILDREN_TAG))
            .unwrap_or(&[])
    }

    /// All indexed notation codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
