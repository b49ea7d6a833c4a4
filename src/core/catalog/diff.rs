//! Comparison between a freshly built catalog and the template already on disk.

use std::collections::HashSet;

use super::{Catalog, Message};

/// Messages gained and lost relative to the previous template.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateDiff {
    /// New messages, in catalog order.
    pub added: Vec<Message>,
    /// Messages no longer extracted, in their old template order.
    pub removed: Vec<Message>,
}

impl TemplateDiff {
    pub fn between(previous: &[Message], catalog: &Catalog) -> Self {
        let old: HashSet<&Message> = previous.iter().collect();
        let new: HashSet<&Message> = catalog.entries().iter().map(|e| &e.message).collect();

        let added = catalog
            .entries()
            .iter()
            .map(|e| &e.message)
            .filter(|m| !old.contains(m))
            .cloned()
            .collect();
        let removed = previous
            .iter()
            .filter(|m| !new.contains(m))
            .cloned()
            .collect();

        Self { added, removed }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Clone, Copy)]
enum Field {
    Context,
    Id,
    Other,
}

/// Collect the `(msgctxt, msgid)` keys of a template, skipping the header.
///
/// Strings are kept escaped, matching how the catalog stores them.
/// Multi-line strings are joined.
pub fn parse_template_keys(content: &str) -> Vec<Message> {
    let mut keys = Vec::new();
    let mut context: Option<String> = None;
    let mut id: Option<String> = None;
    let mut field = Field::Other;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgctxt ") {
            context = Some(unquote(rest).to_string());
            field = Field::Context;
        } else if let Some(rest) = line.strip_prefix("msgid ") {
            id = Some(unquote(rest).to_string());
            field = Field::Id;
        } else if line.starts_with("msgstr") {
            if let Some(text) = id.take() {
                let context = context.take();
                if context.is_some() || !text.is_empty() {
                    keys.push(Message { context, text });
                }
            }
            context = None;
            field = Field::Other;
        } else if line.starts_with('"') {
            let continued = unquote(line);
            match field {
                Field::Context => {
                    if let Some(ctx) = context.as_mut() {
                        ctx.push_str(continued);
                    }
                }
                Field::Id => {
                    if let Some(text) = id.as_mut() {
                        text.push_str(continued);
                    }
                }
                Field::Other => {}
            }
        }
    }

    keys
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}
