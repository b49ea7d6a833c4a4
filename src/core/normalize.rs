//! Conversion of property identifiers into display phrases.
//!
//! `auto_exposure` becomes `Auto Exposure`, `msaa_2d` becomes `Msaa 2D`, and any
//! piece found in the [`RemapTable`] is replaced verbatim (`ssao` → `SSAO`).

use super::remap::RemapTable;

/// Turn one underscore-delimited identifier segment into a display phrase.
///
/// The caller splits property paths on `/` first; `segment` never contains one.
pub fn process_segment(segment: &str, remaps: &RemapTable) -> String {
    segment
        .split('_')
        .filter(|piece| !piece.is_empty())
        .map(|piece| match remaps.get(piece) {
            Some(remapped) => remapped.to_string(),
            None => capitalize(piece),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generic capitalization used when a piece has no remap entry.
///
/// Letter/digit runs are separated first, so `x86` reads `X 86` while `2d`
/// stays a single token and renders as `2D`.
pub fn capitalize(piece: &str) -> String {
    split_digit_runs(piece)
        .replace('_', " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert `_` between a non-digit and a following digit, and between a digit
/// and a following non-digit when the character after that is a lowercase
/// letter or a digit.
fn split_digit_runs(piece: &str) -> String {
    let chars: Vec<char> = piece.chars().collect();
    let mut out = String::with_capacity(piece.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let into_digits = !prev.is_ascii_digit() && c.is_ascii_digit();
            let out_of_digits = prev.is_ascii_digit()
                && !c.is_ascii_digit()
                && chars
                    .get(i + 1)
                    .is_some_and(|n| n.is_lowercase() || n.is_ascii_digit());
            if into_digits || out_of_digits {
                out.push('_');
            }
        }
        out.push(c);
    }

    out
}

/// Uppercase the first letter of every letter run and lowercase the rest.
///
/// Digits break letter runs, which is what turns `2d` into `2D`.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_cased = false;

    for c in word.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && prev_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}
