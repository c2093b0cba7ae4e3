//! Existing docblock text back into rows.
//!
//! Only tag-table dialects can be re-parsed. Prose dialects have no tag
//! columns to recover.

use crate::columns::split_tag_line;
use crate::model::{DocBlock, DocRow};
use crate::profile::LanguageProfile;
use crate::snippet::Field;

/// A comment line after joining continuations.
#[derive(Debug)]
enum Logical {
    Text(String),
    Tag(String),
    Blank,
}

/// Strip delimiters and markers, leaving the content of each line.
fn contents(raw: &str, profile: &LanguageProfile) -> Option<Vec<String>> {
    let delims = profile.delimiters()?;
    let marker = delims.prefix.trim();
    let close = delims.close.map(str::trim);

    let lines = raw
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let mut line = line.trim();
            if i == 0 {
                line = line.strip_prefix(delims.open).unwrap_or(line);
            }
            if let Some(close) = close {
                line = line.strip_suffix(close).unwrap_or(line).trim_end();
            }
            let line = line.trim_start();
            line.strip_prefix(marker).unwrap_or(line).trim().to_string()
        })
        .collect();
    Some(lines)
}

fn logical_lines(contents: &[String], profile: &LanguageProfile) -> Vec<Logical> {
    let mut logical: Vec<Logical> = Vec::new();

    for content in contents {
        if content.is_empty() {
            if !matches!(logical.last(), None | Some(Logical::Blank)) {
                logical.push(Logical::Blank);
            }
            continue;
        }
        if split_tag_line(content, profile).is_some() {
            logical.push(Logical::Tag(content.clone()));
            continue;
        }

        // A summary sentence ending in '.' stands alone.
        let closed_summary = logical.len() == 1
            && matches!(&logical[0], Logical::Text(text) if text.ends_with('.'));
        match logical.last_mut() {
            Some(Logical::Text(prev) | Logical::Tag(prev)) if !closed_summary => {
                prev.push(' ');
                prev.push_str(content);
            }
            _ => logical.push(Logical::Text(content.clone())),
        }
    }

    if matches!(logical.last(), Some(Logical::Blank)) {
        logical.pop();
    }
    logical
}

fn row(line: &Logical, profile: &LanguageProfile) -> DocRow {
    match line {
        Logical::Blank => DocRow::Blank,
        Logical::Text(text) => DocRow::Text(Field::text(text)),
        Logical::Tag(text) => match split_tag_line(text, profile) {
            Some(tag) if tag.structured => DocRow::Entry {
                tag: tag.tag.to_string(),
                ty: tag.ty.map(Field::text),
                name: tag.name.map(Field::text),
                description: tag.description.map(Field::text),
            },
            Some(tag) => DocRow::Tag {
                tag: tag.tag.to_string(),
                value: tag.description.map(Field::text),
            },
            None => DocRow::Text(Field::text(text)),
        },
    }
}

/// Parse a rendered docblock. `None` for prose dialects and empty comments.
pub fn reparse(raw: &str, profile: &LanguageProfile) -> Option<DocBlock> {
    let contents = contents(raw, profile)?;
    let rows: Vec<DocRow> = logical_lines(&contents, profile)
        .iter()
        .map(|line| row(line, profile))
        .collect();
    if rows.is_empty() {
        return None;
    }
    Some(DocBlock::new(rows))
}
