//! Fixed-width wrapping compatible with what gettext's own tools produce, so
//! translation platforms re-saving the template do not introduce noise.

use unicode_width::UnicodeWidthStr;

/// Render `keyword "value"`, switching to the multi-line form when needed.
///
/// `value` is an already-escaped string body. With a width, a value that does
/// not fit, or that has an `\n` escape before its end, is written as
/// `keyword ""` followed by quoted chunks broken after spaces and after each
/// `\n` escape. Escapes are never split.
pub fn wrap_string(keyword: &str, value: &str, width: Option<usize>) -> Vec<String> {
    let single = format!("{} \"{}\"", keyword, value);
    let Some(width) = width else {
        return vec![single];
    };

    let atoms = atoms(value);
    let inner_newline = atoms
        .iter()
        .rev()
        .skip(1)
        .any(|&atom| atom == "\\n");

    if !inner_newline && single.width() <= width {
        return vec![single];
    }

    let max = width.saturating_sub(2).max(1);
    let mut lines = vec![format!("{} \"\"", keyword)];
    for segment in atoms.split_inclusive(|&atom| atom == "\\n") {
        lines.extend(fill(segment, max).into_iter().map(|l| format!("\"{}\"", l)));
    }
    lines
}

/// Render `#:` reference lines, starting a new line whenever the next
/// reference would push the current one past `width`.
pub fn wrap_references(references: &[String], width: Option<usize>) -> Vec<String> {
    const PREFIX: &str = "#:";

    let Some(width) = width else {
        let mut line = PREFIX.to_string();
        for reference in references {
            line.push(' ');
            line.push_str(reference);
        }
        return vec![line];
    };

    let mut lines = Vec::new();
    let mut line = PREFIX.to_string();
    for reference in references {
        if line.len() > PREFIX.len() && line.width() + 1 + reference.width() > width {
            lines.push(std::mem::replace(&mut line, PREFIX.to_string()));
        }
        line.push(' ');
        line.push_str(reference);
    }
    lines.push(line);
    lines
}

/// Split an escaped string body into units that must stay together: an escape
/// sequence or a single character.
fn atoms(value: &str) -> Vec<&str> {
    let mut atoms = Vec::with_capacity(value.len());
    let mut indices = value.char_indices();

    while let Some((start, c)) = indices.next() {
        let mut end = start + c.len_utf8();
        if c == '\\'
            && let Some((next_start, next)) = indices.next()
        {
            end = next_start + next.len_utf8();
        }
        atoms.push(&value[start..end]);
    }

    atoms
}

/// Greedy fill: break after the last space that keeps the chunk within `max`
/// columns. A run without spaces longer than `max` stays on one line.
fn fill(atoms: &[&str], max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0;
    let mut last_break: Option<usize> = None;

    for &atom in atoms {
        let atom_width = atom.width();
        if current_width + atom_width > max
            && let Some(brk) = last_break.take()
        {
            let rest = current.split_off(brk);
            lines.push(current.concat());
            current = rest;
            current_width = current.iter().map(|a| a.width()).sum();
        }

        current.push(atom);
        current_width += atom_width;
        if atom == " " {
            last_break = Some(current.len());
        }
    }

    if !current.is_empty() {
        lines.push(current.concat());
    }
    lines
}
