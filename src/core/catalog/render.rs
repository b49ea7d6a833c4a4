//! Serialization of a [`Catalog`] into gettext template text.
//!
//! Each entry renders as:
//!
//! ```text
//! #. TRANSLATORS: first annotation line
//! #. further annotation line
//! #: editor/a.cpp editor/b.cpp
//! msgctxt "context"
//! msgid "text"
//! msgstr ""
//!
//! ```

use super::{Catalog, CatalogEntry, HeaderSource, wrap};
use crate::core::comments::TRANSLATORS_MARKER;

/// Render the full template: header, then every entry in first-seen order.
pub fn render_catalog(
    catalog: &Catalog,
    header: &impl HeaderSource,
    wrap_width: Option<usize>,
) -> String {
    let mut out = header.header().render();
    for entry in catalog.entries() {
        render_entry(entry, wrap_width, &mut out);
    }
    out
}

pub fn render_entry(entry: &CatalogEntry, wrap_width: Option<usize>, out: &mut String) {
    for (i, line) in entry.annotation.iter().enumerate() {
        if i == 0 {
            push_line(out, &format!("#. {} {}", TRANSLATORS_MARKER, line));
        } else {
            push_line(out, &format!("#. {}", line));
        }
    }

    let references: Vec<String> = entry.locations.iter().map(ToString::to_string).collect();
    for line in wrap::wrap_references(&references, wrap_width) {
        push_line(out, &line);
    }

    if let Some(context) = &entry.message.context {
        for line in wrap::wrap_string("msgctxt", context, wrap_width) {
            push_line(out, &line);
        }
    }
    for line in wrap::wrap_string("msgid", &entry.message.text, wrap_width) {
        push_line(out, &line);
    }
    out.push_str("msgstr \"\"\n\n");
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end_matches(' ').trim_end_matches('\t'));
    out.push('\n');
}
