//! Translator annotation comments.
//!
//! A comment containing `TRANSLATORS:` is guidance for whoever translates the
//! next extracted message. Two shapes are recognised:
//!
//! ```cpp
//! // TRANSLATORS: Shown in the export dialog.
//! // Keep it short.
//! TTR("Export")
//!
//! /* TRANSLATORS: Tooltip text */ TTR("Run")
//! ```
//!
//! A line comment ends at the first line that no longer starts with `//`; that
//! line is regular code and is scanned. A block comment ends at the line holding
//! `*/`, which is scanned as well. Lines inside the comment are not scanned.

pub const TRANSLATORS_MARKER: &str = "TRANSLATORS:";

const LINE_COMMENT: &str = "//";
const BLOCK_END: &str = "*/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// ...` lines.
    Line,
    /// `/* ... */`, possibly spanning lines.
    Block,
}

/// A translator annotation that just finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedComment {
    pub text: String,
    pub style: CommentStyle,
}

/// What the scanner should do with a line after the extractor has seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// False while the line is part of an annotation still being read.
    pub scan: bool,
    /// Set on the line where an annotation ends.
    pub completed: Option<CompletedComment>,
}

/// Per-file state machine accumulating translator annotations.
#[derive(Debug, Default)]
pub struct CommentExtractor {
    reading: Option<CommentStyle>,
    lines: Vec<String>,
}

impl CommentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_reading(&self) -> bool {
        self.reading.is_some()
    }

    /// Feed the next source line.
    pub fn feed(&mut self, line: &str) -> LineOutcome {
        if self.reading.is_none() && line.contains(TRANSLATORS_MARKER) {
            self.reading = Some(classify(line));
            self.lines.clear();
        }

        let Some(style) = self.reading else {
            return LineOutcome {
                scan: true,
                completed: None,
            };
        };

        let (reached_end, extracted) = extract_line(line, style);
        let extracted = extracted.trim();
        if !extracted.is_empty() {
            self.lines.push(extracted.to_string());
        }

        if !reached_end {
            return LineOutcome {
                scan: false,
                completed: None,
            };
        }

        self.reading = None;
        let text = std::mem::take(&mut self.lines).join("\n");
        LineOutcome {
            scan: true,
            completed: (!text.is_empty()).then_some(CompletedComment { text, style }),
        }
    }
}

fn classify(line: &str) -> CommentStyle {
    if line.trim().starts_with(LINE_COMMENT) {
        CommentStyle::Line
    } else {
        CommentStyle::Block
    }
}

/// Strip comment syntax from one line. Returns whether the annotation ended and
/// the text the line contributes.
fn extract_line(line: &str, style: CommentStyle) -> (bool, &str) {
    let line = line.trim();
    let marker_end = line
        .find(TRANSLATORS_MARKER)
        .map(|pos| pos + TRANSLATORS_MARKER.len());

    match style {
        CommentStyle::Block => {
            let start = marker_end.unwrap_or(0);
            match line.rfind(BLOCK_END) {
                Some(end) if end >= start => (true, &line[start..end]),
                Some(_) => (true, ""),
                None => {
                    let text = &line[start..];
                    // Continuation lines conventionally open with ` * `.
                    let text = match marker_end {
                        Some(_) => text,
                        None => text.strip_prefix('*').unwrap_or(text),
                    };
                    (false, text)
                }
            }
        }
        CommentStyle::Line => match line.strip_prefix(LINE_COMMENT) {
            Some(rest) => match marker_end {
                Some(start) => (false, &line[start..]),
                None => (false, rest),
            },
            None => (true, ""),
        },
    }
}
