//! Greedy re-flow of rendered comment lines.
//!
//! Tag lines keep their tag, type and name on the first line; description
//! words continue on following lines indented to the column where the
//! description started. Words are never split, so a single long word may
//! still exceed the width.

use crate::columns::split_tag_line;
use crate::profile::{Dialect, LanguageProfile};

/// Marker that starts every inner comment line of a dialect.
fn line_marker(profile: &LanguageProfile) -> &'static str {
    match profile.dialect {
        Dialect::Table(delims) => delims.prefix,
        Dialect::Rustdoc | Dialect::SwiftMarkup => "///",
        Dialect::Rdoc => "#",
    }
}

fn is_delimiter(profile: &LanguageProfile, line: &str) -> bool {
    let line = line.trim();
    match profile.delimiters() {
        Some(delims) => {
            line == delims.open.trim() || delims.close.is_some_and(|close| line == close.trim())
        }
        None => line == "##" || line == "=begin" || line == "=end",
    }
}

/// Re-flow `lines` so that each fits in `width` columns where possible.
pub fn wrap(lines: &[String], profile: &LanguageProfile, width: usize) -> Vec<String> {
    let marker = line_marker(profile);
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        if line.chars().count() <= width || is_delimiter(profile, line) {
            out.push(line.clone());
            continue;
        }
        let Some(content) = line.strip_prefix(marker) else {
            out.push(line.clone());
            continue;
        };
        let body = content.trim_start();
        let lead = &line[..line.len() - body.len()];

        // Where the flowing text starts, relative to `body`.
        let desc_start = match split_tag_line(body, profile) {
            Some(tag_line) => match tag_line.desc_start {
                Some(start) => start,
                None => {
                    out.push(line.clone());
                    continue;
                }
            },
            None => 0,
        };

        let head = format!("{lead}{}", &body[..desc_start]);
        let indent = head.chars().count().saturating_sub(marker.chars().count());
        let continuation = format!("{marker}{}", " ".repeat(indent));
        out.extend(pack(&head, &continuation, &body[desc_start..], width));
    }

    out
}

/// Greedily pack `text` after `head`, starting new lines with `continuation`.
fn pack(head: &str, continuation: &str, text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = head.to_string();
    let mut len = current.chars().count();
    let mut has_word = false;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if has_word && len + 1 + word_len > width {
            lines.push(current.trim_end().to_string());
            current = continuation.to_string();
            len = current.chars().count();
            has_word = false;
        }
        if has_word {
            current.push(' ');
            len += 1;
        }
        current.push_str(word);
        len += word_len;
        has_word = true;
    }

    lines.push(current.trim_end().to_string());
    lines
}
