//! Registry of translatable-string call patterns.
//!
//! Every rule pairs a regex with the [`ExtractionKind`] that says how its
//! captures become catalog messages. Rules are applied to each line in
//! registry order, and every match of every rule is honored.
//!
//! Capture groups:
//! - `message`: the string literal body or property path (all rules)
//! - `context`: optional disambiguation context (`TTR` only)
//! - `prefix`: the property prefix introduced by a group (`ADD_GROUP` only)

use regex::Regex;
use std::sync::LazyLock;

/// How a rule's captures turn into messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionKind {
    /// The captured literal is the message.
    PlainText,
    /// A `/`-separated property path; each segment is normalized to a phrase.
    PropertyPath,
    /// A group label whose prefix is stripped from following property paths.
    GroupHeader,
}

pub struct ExtractionRule {
    pub name: &'static str,
    pub kind: ExtractionKind,
    pub regex: Regex,
}

// `"(?P<message>([^"\\]|\\.)*)"` matches a C string literal, escapes included.
static RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    use ExtractionKind::*;

    [
        ("RTR", PlainText, r#"RTR\("(?P<message>([^"\\]|\\.)*)"\)"#),
        (
            "TTR",
            PlainText,
            r#"TTR\("(?P<message>([^"\\]|\\.)*)"(, "(?P<context>([^"\\]|\\.)*)")?\)"#,
        ),
        ("TTRC", PlainText, r#"TTRC\("(?P<message>([^"\\]|\\.)*)"\)"#),
        (
            "_initial_set",
            PropertyPath,
            r#"_initial_set\("(?P<message>[^"]+?)","#,
        ),
        (
            "GLOBAL_DEF",
            PropertyPath,
            r#"GLOBAL_DEF(_RST)?(_NOVAL)?\("(?P<message>[^".]+?)","#,
        ),
        (
            "EDITOR_DEF",
            PropertyPath,
            r#"EDITOR_DEF(_RST)?\("(?P<message>[^"]+?)","#,
        ),
        (
            "PropertyInfo",
            PropertyPath,
            r#"(ADD_PROPERTYI?|ImportOption|ExportOption)\(PropertyInfo\(Variant::[_A-Z0-9]+, "(?P<message>[^"]+?)"[,)]"#,
        ),
        (
            "LIMPL_PROPERTY",
            PropertyPath,
            r#"LIMPL_PROPERTY(_RANGE)?\(Variant::[_A-Z0-9]+, (?P<message>[^,]+?),"#,
        ),
        (
            "ADD_GROUP",
            GroupHeader,
            r#"ADD_GROUP\("(?P<message>[^"]+?)", "(?P<prefix>[^"]*?)"\)"#,
        ),
    ]
    .into_iter()
    .map(|(name, kind, pattern)| ExtractionRule {
        name,
        kind,
        regex: Regex::new(pattern).unwrap(),
    })
    .collect()
});

/// The built-in rules, in the order they are applied to a line.
pub fn rules() -> &'static [ExtractionRule] {
    &RULES
}
