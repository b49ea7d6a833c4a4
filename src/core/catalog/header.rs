use std::fmt::Write;

/// Project metadata written at the top of every template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogHeader {
    pub title: String,
    pub copyright: Vec<String>,
    pub license_notice: String,
    pub project_id_version: String,
    pub report_msgid_bugs_to: String,
}

/// Supplies the static header fields.
///
/// Implemented by the configuration's header section; tests provide their
/// own.
pub trait HeaderSource {
    fn header(&self) -> CatalogHeader;
}

impl HeaderSource for CatalogHeader {
    fn header(&self) -> CatalogHeader {
        self.clone()
    }
}

impl CatalogHeader {
    /// Render the comment block and the empty-msgid header entry, followed by
    /// the blank line that separates it from the first message.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# {}", self.title);
        for line in &self.copyright {
            let _ = writeln!(out, "# {}", line);
        }
        let _ = writeln!(out, "# {}", self.license_notice);
        out.push_str("#\n");
        out.push_str("# FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.\n");
        out.push_str("#\n");
        out.push_str("#, fuzzy\n");
        out.push_str("msgid \"\"\n");
        out.push_str("msgstr \"\"\n");

        let fields = [
            ("Project-Id-Version", self.project_id_version.as_str()),
            ("Report-Msgid-Bugs-To", self.report_msgid_bugs_to.as_str()),
            ("MIME-Version", "1.0"),
            ("Content-Type", "text/plain; charset=UTF-8"),
            ("Content-Transfer-Encoding", "8-bit"),
        ];
        for (name, value) in fields {
            let _ = writeln!(out, "\"{}: {}\\n\"", name, escape(value));
        }

        out.push('\n');
        out
    }
}

/// Escape a plain value for use inside a quoted template string.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
