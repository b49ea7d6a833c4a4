//! The deduplicated message catalog.
//!
//! Entries are kept in first-seen order together with an index from
//! [`Message`] to entry position. A message seen again only grows its
//! location list and annotation; it never gets a second entry.
//!
//! ## Module Structure
//!
//! - `header`: static header metadata and the [`HeaderSource`] seam
//! - `render`: serialization into gettext template text
//! - `wrap`: fixed-width line wrapping for rendered strings and references
//! - `diff`: comparison against a previously written template

pub mod diff;
pub mod header;
pub mod render;
pub mod wrap;

pub use diff::*;
pub use header::*;
pub use render::*;

use std::{collections::HashMap, fmt};

/// A unique translatable unit: the text and its optional context.
///
/// The text is kept exactly as it appears inside the source literal, escapes
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Message {
    pub context: Option<String>,
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            context: None,
            text: text.into(),
        }
    }

    /// An empty context is the same as no context.
    pub fn with_context(context: &str, text: impl Into<String>) -> Self {
        Self {
            context: (!context.is_empty()).then(|| context.to_string()),
            text: text.into(),
        }
    }
}

/// Where a message occurs: a repo-relative path and, optionally, a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub path: String,
    pub line: Option<usize>,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => f.write_str(&self.path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub message: Message,
    /// Distinct locations in the order they were first recorded.
    pub locations: Vec<SourceLocation>,
    /// Translator annotation lines, oldest first.
    pub annotation: Vec<String>,
}

/// Result of [`Catalog::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// First occurrence; a new entry was appended.
    Created,
    /// Known message at a new location.
    LocationAdded,
    /// Known message at a location it already has.
    AlreadyRecorded,
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<Message, usize>,
    anomalies: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one occurrence of `message` into the catalog.
    ///
    /// A non-empty `comment` is appended to the entry's annotation whether or
    /// not the location is new.
    pub fn record(
        &mut self,
        message: Message,
        location: SourceLocation,
        comment: Option<&str>,
    ) -> RecordOutcome {
        let position = self.index.get(&message).copied();

        let (entry, outcome) = match position.filter(|&pos| self.is_indexed_at(pos, &message)) {
            Some(pos) => {
                let entry = &mut self.entries[pos];
                if entry.locations.contains(&location) {
                    (entry, RecordOutcome::AlreadyRecorded)
                } else {
                    entry.locations.push(location);
                    (entry, RecordOutcome::LocationAdded)
                }
            }
            None => {
                if let Some(pos) = position {
                    self.anomalies.push(format!(
                        "index for msgid \"{}\" points at entry {} which holds another message; appending a new entry",
                        message.text, pos
                    ));
                }
                let pos = self.entries.len();
                self.index.insert(message.clone(), pos);
                self.entries.push(CatalogEntry {
                    message,
                    locations: vec![location],
                    annotation: Vec::new(),
                });
                (&mut self.entries[pos], RecordOutcome::Created)
            }
        };

        if let Some(comment) = comment.filter(|c| !c.trim().is_empty()) {
            entry
                .annotation
                .extend(comment.lines().map(|line| line.trim().to_string()));
        }

        outcome
    }

    fn is_indexed_at(&self, pos: usize, message: &Message) -> bool {
        self.entries
            .get(pos)
            .is_some_and(|entry| &entry.message == message)
    }

    pub fn get(&self, message: &Message) -> Option<&CatalogEntry> {
        self.index
            .get(message)
            .and_then(|&pos| self.entries.get(pos))
    }

    /// All entries in first-seen order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries under one context (`None` for context-free messages), in
    /// first-seen order.
    pub fn entries_in_context<'a>(
        &'a self,
        context: Option<&'a str>,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.message.context.as_deref() == context)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded locations across all entries.
    pub fn location_count(&self) -> usize {
        self.entries.iter().map(|e| e.locations.len()).sum()
    }

    /// Structural problems met while merging. Each one was recovered by
    /// appending a fresh entry.
    pub fn anomalies(&self) -> &[String] {
        &self.anomalies
    }
}
