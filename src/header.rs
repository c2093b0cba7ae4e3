//! File header blocks: file name, workspace name and user-configured tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{DocBlock, DocRow};
use crate::profile::LanguageProfile;
use crate::snippet::{Field, TabStops};
use crate::tags::lookup_tags;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$YEAR([^A-Z]|$)").unwrap());

static CUSTOM_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>[@\\]\S+)(?:\s*(?P<remainder>.+))?$").unwrap()
});

/// Values substituted into a header.
///
/// An absent file or workspace name leaves the host token (`$FILENAME`,
/// `$WORKSPACE_NAME`) in place for the editor to expand.
#[derive(Debug, Clone, Default)]
pub struct HeaderContext {
    pub year: i32,
    pub file_name: Option<String>,
    pub workspace_name: Option<String>,
}

fn substitute_year(text: &str, year: i32) -> String {
    YEAR.replace_all(text, format!("{year}$1").as_str())
        .into_owned()
}

/// One configured header line as a row.
fn custom_row(raw: &str, profile: &LanguageProfile, stops: &mut TabStops) -> DocRow {
    let Some(caps) = CUSTOM_TAG.captures(raw) else {
        return DocRow::Text(Field::template(raw, stops));
    };
    let tag = &caps["tag"];

    if let Some(remainder) = caps.name("remainder") {
        return DocRow::Tag {
            tag: tag.to_string(),
            value: Some(Field::template(remainder.as_str(), stops)),
        };
    }

    // A bare tag borrows the template of the known tag it names, else the
    // first one it matches.
    let known = lookup_tags(profile.language, tag);
    let bare = tag.trim_start_matches(['@', '\\']);
    match known.iter().find(|t| t.tag == bare).or_else(|| known.first()) {
        Some(known) => DocRow::Tag {
            tag: format!("@{}", known.tag),
            value: (!known.template.is_empty()).then(|| Field::template(known.template, stops)),
        },
        None => DocRow::Text(Field::template(raw, stops)),
    }
}

/// Build the header block for a file.
///
/// Rows are the file name and workspace name, then (when any custom tags are
/// configured) a blank line and one row per tag. Placeholders in tag
/// templates are renumbered across the whole block.
pub fn header_block(
    profile: &LanguageProfile,
    custom_tags: &[String],
    ctx: &HeaderContext,
) -> DocBlock {
    let mut stops = TabStops::new();
    let mut rows = vec![
        DocRow::Text(Field::text(
            ctx.file_name.as_deref().unwrap_or("$FILENAME"),
        )),
        DocRow::Text(Field::text(
            ctx.workspace_name.as_deref().unwrap_or("$WORKSPACE_NAME"),
        )),
    ];

    if !custom_tags.is_empty() {
        rows.push(DocRow::Blank);
        for raw in custom_tags {
            let raw = substitute_year(raw, ctx.year);
            rows.push(custom_row(&raw, profile, &mut stops));
        }
    }

    DocBlock::new(rows)
}
