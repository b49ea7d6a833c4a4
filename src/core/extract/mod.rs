//! Per-file extraction.
//!
//! A file is processed line by line. The [`CommentExtractor`] decides which
//! lines are scanned and hands over finished translator annotations; every
//! rule from [`rules()`] is then applied to the line in registry order and
//! each match is turned into messages by the arm for its [`ExtractionKind`].
//!
//! The active group prefix and the pending annotation live only for the
//! duration of one [`Extractor::extract_file`] call.

use regex::Captures;

use super::{
    catalog::{Catalog, Message, RecordOutcome, SourceLocation},
    comments::{CommentExtractor, CommentStyle},
    normalize::process_segment,
    patterns::{ExtractionKind, rules},
    remap::RemapTable,
};


/// Prefix introduced by the last group header, stripped from following
/// property paths until one no longer starts with it.
pub type GroupPrefix = Option<String>;

/// Counters for one extracted file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Messages forwarded to the catalog, duplicates included.
    pub occurrences: usize,
    /// Occurrences that created a catalog entry.
    pub new_messages: usize,
}

pub struct Extractor<'a> {
    remaps: &'a RemapTable,
    line_numbers: bool,
}

impl<'a> Extractor<'a> {
    pub fn new(remaps: &'a RemapTable, line_numbers: bool) -> Self {
        Self {
            remaps,
            line_numbers,
        }
    }

    /// Extract every message of `source` into `catalog`.
    ///
    /// `path` is the repo-relative path recorded in locations.
    pub fn extract_file(&self, path: &str, source: &str, catalog: &mut Catalog) -> FileStats {
        let mut stats = FileStats::default();
        let mut comments = CommentExtractor::new();
        let mut group: GroupPrefix = None;
        let mut pending: Option<String> = None;

        for (idx, line) in source.lines().enumerate() {
            let outcome = comments.feed(line);
            let closed_block_here = outcome
                .completed
                .as_ref()
                .is_some_and(|c| c.style == CommentStyle::Block);
            if let Some(completed) = outcome.completed {
                pending = Some(completed.text);
            }
            if !outcome.scan {
                continue;
            }

            let messages = self.extract_line(line, &mut group);
            if messages.is_empty() {
                // A block comment closing on its own line annotates the next line.
                if !closed_block_here {
                    pending = None;
                }
                continue;
            }

            let location = self.location(path, idx + 1);
            let mut comment = pending.take();
            for message in messages {
                let outcome = catalog.record(message, location.clone(), comment.take().as_deref());
                stats.occurrences += 1;
                if outcome == RecordOutcome::Created {
                    stats.new_messages += 1;
                }
            }
        }

        stats
    }

    /// Apply every rule to one line, in registry order, and collect the
    /// resulting messages left to right.
    pub fn extract_line(&self, line: &str, group: &mut GroupPrefix) -> Vec<Message> {
        let mut messages = Vec::new();

        for rule in rules() {
            for caps in rule.regex.captures_iter(line) {
                match rule.kind {
                    ExtractionKind::PlainText => messages.push(plain_text(&caps)),
                    ExtractionKind::PropertyPath => {
                        messages.extend(property_path(&caps, group, self.remaps))
                    }
                    ExtractionKind::GroupHeader => messages.push(group_header(&caps, group)),
                }
            }
        }

        messages
    }

    fn location(&self, path: &str, line: usize) -> SourceLocation {
        SourceLocation::new(path, self.line_numbers.then_some(line))
    }
}

fn capture<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn plain_text(caps: &Captures<'_>) -> Message {
    Message::with_context(capture(caps, "context"), capture(caps, "message"))
}

/// Strip the active group prefix (or drop it when the path does not start
/// with it), then normalize each `/` segment into its own message.
fn property_path(caps: &Captures<'_>, group: &mut GroupPrefix, remaps: &RemapTable) -> Vec<Message> {
    let context = capture(caps, "context");
    let mut path = capture(caps, "message");

    if let Some(prefix) = group.take()
        && let Some(rest) = path.strip_prefix(prefix.as_str())
    {
        path = rest;
        *group = Some(prefix);
    }

    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| process_segment(segment, remaps))
        .filter(|phrase| !phrase.is_empty())
        .map(|phrase| Message::with_context(context, phrase))
        .collect()
}

fn group_header(caps: &Captures<'_>, group: &mut GroupPrefix) -> Message {
    let prefix = capture(caps, "prefix");
    *group = (!prefix.is_empty()).then(|| prefix.to_string());
    Message::with_context(capture(caps, "context"), capture(caps, "message"))
}
