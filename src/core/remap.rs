//! Loader for the capitalization remap table.
//!
//! The table lives in a C++ source file as a series of assignments:
//!
//! ```text
//! 	capitalize_string_remaps["2d"] = "2D";
//! 	capitalize_string_remaps["ssao"] = String::utf8("SSAO");
//! ```
//!
//! Loading never fails: a missing file yields an empty table and lines that
//! mention the table but do not parse are skipped.

use std::{collections::HashMap, fs, path::Path};

use regex::Regex;

/// Overrides from a raw identifier piece to its display form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapTable {
    entries: HashMap<String, String>,
}

/// Outcome of reading the remap source file.
#[derive(Debug, Default)]
pub struct RemapLoad {
    pub table: RemapTable,
    /// Lines that reference the table but could not be parsed.
    pub skipped_lines: Vec<usize>,
    /// Set when the source file could not be read; the table is then empty.
    pub read_error: Option<String>,
}

impl RemapTable {
    /// Parse every `table_name["from"] = "to"` assignment in `source`.
    ///
    /// Later assignments to the same key overwrite earlier ones.
    pub fn parse(source: &str, table_name: &str) -> RemapLoad {
        let Some(assignment) = assignment_regex(table_name) else {
            return RemapLoad::default();
        };

        let mut table = RemapTable::default();
        let mut skipped_lines = Vec::new();

        for (idx, line) in source.lines().enumerate() {
            match assignment.captures(line) {
                Some(caps) => {
                    table.insert(&caps["from"], &caps["to"]);
                }
                None if line.contains(table_name) && line.contains('=') => {
                    skipped_lines.push(idx + 1);
                }
                None => {}
            }
        }

        RemapLoad {
            table,
            skipped_lines,
            read_error: None,
        }
    }

    /// Read and parse the table from `path`.
    pub fn load(path: &Path, table_name: &str) -> RemapLoad {
        match fs::read_to_string(path) {
            Ok(source) => Self::parse(&source, table_name),
            Err(e) => RemapLoad {
                read_error: Some(format!("{}: {}", path.display(), e)),
                ..Default::default()
            },
        }
    }

    pub fn insert(&mut self, from: &str, to: &str) {
        self.entries.insert(from.to_string(), to.to_string());
    }

    pub fn get(&self, piece: &str) -> Option<&str> {
        self.entries.get(piece).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RemapTable {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut table = RemapTable::default();
        for (from, to) in pairs {
            table.insert(from, to);
        }
        table
    }
}

fn assignment_regex(table_name: &str) -> Option<Regex> {
    Regex::new(&format!(
        r#"^\t*{}\["(?P<from>.+)"\] = (String::utf8\()?"(?P<to>.+)""#,
        regex::escape(table_name)
    ))
    .ok()
}
