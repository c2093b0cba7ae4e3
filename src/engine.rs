//! Entry points: generate a docblock for the text after the cursor, or
//! reformat existing docblocks.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::Config;
use crate::model::{DocBlock, Declaration};
use crate::parser::{for_language, LanguageParser};
use crate::profile::{Dialect, Language, LanguageProfile};
use crate::render::{format, RenderOptions};
use crate::reparse::reparse;
use crate::scan::docblock_ranges;
use crate::snippet::{Field, TabStops};
use crate::synth::synthesize;

/// Result of a generation request for an enabled language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// Rendered docblock lines.
    Block(Vec<String>),
    /// Nothing to document; insert [`fallback_block`] instead.
    Fallback,
}

/// A classified declaration together with its synthesized block.
#[derive(Debug, Clone, Serialize)]
pub struct Documented {
    pub language: Language,
    pub declaration: Declaration,
    pub block: DocBlock,
}

/// Parser for a language id, unless the id is unknown or disabled.
pub fn parser_for(lang: &str, config: &Config) -> Option<Box<dyn LanguageParser>> {
    let language: Language = match lang.parse() {
        Ok(language) => language,
        Err(err) => {
            debug!(%err, "no parser");
            return None;
        }
    };
    if !config.is_enabled(language) {
        debug!(%language, "language disabled");
        return None;
    }
    Some(for_language(language, config))
}

/// Whether the following text calls for a bare comment instead of a
/// docblock: nothing left in the file, another comment next, or two empty
/// lines before any code.
fn needs_fallback(following: &str) -> bool {
    let trimmed = following.trim();
    if trimmed.is_empty()
        || trimmed.starts_with("/*")
        || trimmed.starts_with("//")
        || trimmed.starts_with('#')
    {
        return true;
    }
    let mut lines = following.lines();
    matches!(
        (lines.next(), lines.next()),
        (Some(first), Some(second)) if first.trim().is_empty() && second.trim().is_empty()
    )
}

/// Classify the declaration following the cursor and synthesize its block.
pub fn document(parser: &dyn LanguageParser, following: &str) -> Option<Documented> {
    if needs_fallback(following) {
        debug!("nothing to document before the next comment or gap");
        return None;
    }

    let lines: Vec<&str> = following.lines().collect();
    let definition = parser.definition(&lines);
    trace!(%definition, "extracted definition");
    if definition.is_empty() {
        return None;
    }

    let Some(declaration) = parser.parse_declaration(&definition) else {
        debug!(%definition, "no declaration found");
        return None;
    };
    let block = synthesize(&declaration, parser)?;
    Some(Documented {
        language: parser.profile().language,
        declaration,
        block,
    })
}

/// Generate the docblock for the text following the insertion point.
///
/// `None` when the language is unknown or disabled. With `placeholders` the
/// lines carry `${n:default}` tab stops for a snippet-capable host.
pub fn generate(
    lang: &str,
    following: &str,
    config: &Config,
    placeholders: bool,
) -> Option<Generated> {
    let parser = parser_for(lang, config)?;
    let Some(documented) = document(parser.as_ref(), following) else {
        return Some(Generated::Fallback);
    };
    let profile = parser.profile();
    let options = RenderOptions::new(profile, config, placeholders);
    Some(Generated::Block(format(&documented.block, profile, &options)))
}

/// A bare comment with a single `comment` placeholder.
pub fn fallback_block(profile: &LanguageProfile, placeholders: bool) -> Vec<String> {
    let comment = Field::template("${0:comment}", &mut TabStops::new()).render(placeholders);
    if profile.language == Language::Ruby {
        return vec!["=begin".to_string(), comment, "=end".to_string()];
    }
    match profile.dialect {
        Dialect::Table(delims) => {
            let mut lines = vec![
                delims.open.to_string(),
                format!("{} {comment}", delims.prefix),
            ];
            lines.extend(delims.close.map(str::to_string));
            lines
        }
        Dialect::Rustdoc | Dialect::SwiftMarkup | Dialect::Rdoc => {
            vec![format!("/// {comment}")]
        }
    }
}

/// Reformat one existing docblock, wrapping at `width`.
///
/// The indentation of the first line is kept on every output line and counts
/// against the width. `None` for unknown or disabled languages, prose
/// dialects and empty comments.
pub fn reformat(lang: &str, comment: &str, config: &Config, width: usize) -> Option<Vec<String>> {
    let parser = parser_for(lang, config)?;
    let profile = parser.profile();

    let indent: String = comment
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    let Some(block) = reparse(comment, profile) else {
        debug!(language = %profile.language, "nothing to reformat");
        return None;
    };
    let options = RenderOptions::new(profile, config, false)
        .with_wrap_width(width.saturating_sub(indent.chars().count()));
    Some(
        format(&block, profile, &options)
            .into_iter()
            .map(|line| format!("{indent}{line}"))
            .collect(),
    )
}

/// Reformat every docblock in a source file, leaving the rest untouched.
pub fn reformat_all(lang: &str, text: &str, config: &Config, width: usize) -> Option<String> {
    let parser = parser_for(lang, config)?;
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let ranges = docblock_ranges(parser.profile(), text);
    debug!(count = ranges.len(), "docblocks found");

    // Back to front so earlier ranges stay valid.
    for range in ranges.into_iter().rev() {
        let comment = lines[range.clone()].join("\n");
        if let Some(formatted) = reformat(lang, &comment, config, width) {
            lines.splice(range, formatted);
        }
    }

    let mut out = lines.join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    Some(out)
}
