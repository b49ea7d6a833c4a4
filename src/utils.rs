//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Render a relative path with `/` separators regardless of platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use potgen::utils::to_slash_path;
///
/// assert_eq!(to_slash_path(Path::new("editor/editor_node.cpp")), "editor/editor_node.cpp");
/// assert_eq!(to_slash_path(Path::new("./main.cpp")), "main.cpp");
/// ```
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Pick the singular or plural noun for `count`.
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
