//! Prose dialects: rustdoc Markdown, Swift markup and RDoc.
//!
//! These have no tag table. The summary comes first, then one section per
//! row group (parameters, errors, return value).

use super::{cell, RenderOptions, Renderer};
use crate::model::{DocBlock, DocRow};

/// Rows of a block sorted into the sections prose dialects print.
#[derive(Default)]
struct Sections<'a> {
    text: Vec<&'a DocRow>,
    params: Vec<(String, String)>,
    throws: Vec<(String, String)>,
    returns: Option<String>,
    other: Vec<(String, String)>,
}

fn tag_name(tag: &str) -> &str {
    tag.trim_start_matches(['@', '\\'])
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<'a> Sections<'a> {
    fn collect(block: &'a DocBlock, placeholders: bool) -> Self {
        let mut sections = Sections::default();
        for row in &block.rows {
            match row {
                DocRow::Text(_) | DocRow::Blank => sections.text.push(row),
                DocRow::Tag { tag, value } => sections
                    .other
                    .push((tag_name(tag).to_string(), cell(value.as_ref(), placeholders))),
                DocRow::Entry {
                    tag,
                    name,
                    description,
                    ..
                } => {
                    let name = cell(name.as_ref(), placeholders);
                    let description = cell(description.as_ref(), placeholders);
                    match tag_name(tag) {
                        "param" | "arg" | "argument" => sections.params.push((name, description)),
                        "throws" | "throw" | "raise" | "exception" => {
                            sections.throws.push((name, description))
                        }
                        "return" | "returns" => sections.returns = Some(description),
                        other => sections.other.push((other.to_string(), description)),
                    }
                }
            }
        }
        sections
    }

    /// Summary and paragraphs, with blank rows kept.
    fn text_lines(&self, marker: &str, placeholders: bool) -> Vec<String> {
        self.text
            .iter()
            .map(|row| match row {
                DocRow::Text(field) => line(marker, &field.render(placeholders)),
                _ => marker.to_string(),
            })
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.params.is_empty()
            && self.throws.is_empty()
            && self.returns.is_none()
            && self.other.is_empty()
    }
}

fn line(marker: &str, text: &str) -> String {
    format!("{marker} {text}").trim_end().to_string()
}

// -- rustdoc -----------------------------------------------------------------

/// `///` comments with `# Arguments` / `# Errors` / `# Returns` sections.
pub struct RustdocRenderer;

impl RustdocRenderer {
    const MARKER: &'static str = "///";

    fn section(lines: &mut Vec<String>, heading: &str) {
        lines.push(Self::MARKER.to_string());
        lines.push(line(Self::MARKER, &format!("# {heading}")));
        lines.push(Self::MARKER.to_string());
    }
}

impl Renderer for RustdocRenderer {
    fn render(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        let sections = Sections::collect(block, options.placeholders);
        let mut lines = sections.text_lines(Self::MARKER, options.placeholders);

        if !sections.params.is_empty() {
            Self::section(&mut lines, "Arguments");
            for (name, description) in &sections.params {
                lines.push(line(Self::MARKER, &format!("* `{name}` - {description}")));
            }
        }
        if !sections.throws.is_empty() {
            Self::section(&mut lines, "Errors");
            for (_, description) in &sections.throws {
                lines.push(line(Self::MARKER, description));
            }
        }
        if let Some(description) = &sections.returns {
            Self::section(&mut lines, "Returns");
            lines.push(line(Self::MARKER, description));
        }
        for (tag, value) in &sections.other {
            Self::section(&mut lines, &capitalize(tag));
            lines.push(line(Self::MARKER, value));
        }
        lines
    }

    /// Module header: `//!` inner doc comments.
    fn render_header(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        block
            .rows
            .iter()
            .map(|row| match row {
                DocRow::Text(field) => line("//!", &field.render(options.placeholders)),
                DocRow::Blank => "//!".to_string(),
                DocRow::Tag { tag, value } => line(
                    "//!",
                    &format!(
                        "{}: {}",
                        capitalize(tag_name(tag)),
                        cell(value.as_ref(), options.placeholders)
                    ),
                ),
                DocRow::Entry {
                    tag, description, ..
                } => line(
                    "//!",
                    &format!(
                        "{}: {}",
                        capitalize(tag_name(tag)),
                        cell(description.as_ref(), options.placeholders)
                    ),
                ),
            })
            .collect()
    }
}

// -- Swift markup ------------------------------------------------------------

/// `///` comments with `- Parameters:` / `- Throws:` / `- Returns:` callouts.
pub struct SwiftMarkupRenderer;

impl SwiftMarkupRenderer {
    const MARKER: &'static str = "///";
}

impl Renderer for SwiftMarkupRenderer {
    fn render(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        let sections = Sections::collect(block, options.placeholders);
        let mut lines = sections.text_lines(Self::MARKER, options.placeholders);
        if sections.is_empty() {
            return lines;
        }
        lines.push(Self::MARKER.to_string());

        for (tag, value) in &sections.other {
            lines.push(line(Self::MARKER, &format!("- {}: {value}", capitalize(tag))));
        }
        match sections.params.as_slice() {
            [] => {}
            [(name, description)] => {
                lines.push(line(Self::MARKER, &format!("- Parameter {name}: {description}")));
            }
            params => {
                lines.push(line(Self::MARKER, "- Parameters:"));
                for (name, description) in params {
                    lines.push(line(Self::MARKER, &format!("  - {name}: {description}")));
                }
            }
        }
        for (_, description) in &sections.throws {
            lines.push(line(Self::MARKER, &format!("- Throws: {description}")));
        }
        if let Some(description) = &sections.returns {
            lines.push(line(Self::MARKER, &format!("- Returns: {description}")));
        }
        lines
    }

    fn render_header(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, row) in block.rows.iter().enumerate() {
            match row {
                DocRow::Text(field) => {
                    lines.push(line(Self::MARKER, &field.render(options.placeholders)))
                }
                DocRow::Blank => lines.push(Self::MARKER.to_string()),
                DocRow::Tag { tag, value } => lines.push(line(
                    Self::MARKER,
                    &format!(
                        "- {}: {}",
                        capitalize(tag_name(tag)),
                        cell(value.as_ref(), options.placeholders)
                    ),
                )),
                DocRow::Entry { .. } => {}
            }
            // Separate the file name from the rest.
            if i == 0 && block.rows.len() > 1 && !block.rows[1].is_blank() {
                lines.push(Self::MARKER.to_string());
            }
        }
        lines
    }
}

// -- RDoc --------------------------------------------------------------------

/// `#` comments with `== Parameters:` headings.
pub struct RdocRenderer;

impl RdocRenderer {
    const MARKER: &'static str = "#";

    fn heading(lines: &mut Vec<String>, heading: &str) {
        lines.push(Self::MARKER.to_string());
        lines.push(line(Self::MARKER, &format!("== {heading}:")));
    }
}

impl Renderer for RdocRenderer {
    fn render(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        let sections = Sections::collect(block, options.placeholders);
        let mut lines = vec!["##".to_string()];
        lines.extend(sections.text_lines(Self::MARKER, options.placeholders));

        if !sections.params.is_empty() {
            Self::heading(&mut lines, "Parameters");
            for (name, description) in &sections.params {
                lines.push(line(Self::MARKER, &format!("+{name}+:: {description}")));
            }
        }
        if !sections.throws.is_empty() {
            Self::heading(&mut lines, "Raises");
            for (name, description) in &sections.throws {
                lines.push(line(Self::MARKER, &format!("+{name}+:: {description}")));
            }
        }
        if let Some(description) = &sections.returns {
            Self::heading(&mut lines, "Returns");
            lines.push(line(Self::MARKER, description));
        }
        for (tag, value) in &sections.other {
            lines.push(line(Self::MARKER, &format!("{}:: {value}", capitalize(tag))));
        }
        lines
    }

    fn render_header(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        block
            .rows
            .iter()
            .filter_map(|row| match row {
                DocRow::Text(field) => Some(line(Self::MARKER, &field.render(options.placeholders))),
                DocRow::Blank => Some(Self::MARKER.to_string()),
                DocRow::Tag { tag, value } => Some(line(
                    Self::MARKER,
                    &format!(
                        "{}:: {}",
                        capitalize(tag_name(tag)),
                        cell(value.as_ref(), options.placeholders)
                    ),
                )),
                DocRow::Entry { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::EmptyLines;
    use crate::snippet::Field;

    fn options() -> RenderOptions {
        RenderOptions {
            placeholders: false,
            align: 0,
            empty_lines: EmptyLines::None,
            wrap_width: None,
        }
    }

    fn entry(tag: &str, name: Option<&str>, desc: &str) -> DocRow {
        DocRow::Entry {
            tag: tag.into(),
            ty: None,
            name: name.map(Field::text),
            description: Some(Field::text(desc)),
        }
    }

    fn block() -> DocBlock {
        DocBlock::new(vec![
            DocRow::Text(Field::text("Looks a key up.")),
            entry("@param", Some("key"), "the key"),
            entry("@param", Some("fallback"), "used when missing"),
            entry("@returns", None, "the value"),
        ])
    }

    #[test]
    fn rustdoc_sections() {
        assert_eq!(
            RustdocRenderer.render(&block(), &options()),
            vec![
                "/// Looks a key up.",
                "///",
                "/// # Arguments",
                "///",
                "/// * `key` - the key",
                "/// * `fallback` - used when missing",
                "///",
                "/// # Returns",
                "///",
                "/// the value",
            ]
        );
    }

    #[test]
    fn swift_callouts() {
        assert_eq!(
            SwiftMarkupRenderer.render(&block(), &options()),
            vec![
                "/// Looks a key up.",
                "///",
                "/// - Parameters:",
                "///   - key: the key",
                "///   - fallback: used when missing",
                "/// - Returns: the value",
            ]
        );
    }

    #[test]
    fn swift_single_parameter_and_throws() {
        let block = DocBlock::new(vec![
            DocRow::Text(Field::text("Loads.")),
            entry("@param", Some("url"), "source"),
            entry("@throws", Some("Error"), "when offline"),
        ]);
        assert_eq!(
            SwiftMarkupRenderer.render(&block, &options()),
            vec![
                "/// Loads.",
                "///",
                "/// - Parameter url: source",
                "/// - Throws: when offline",
            ]
        );
    }

    #[test]
    fn summary_only_is_one_line() {
        let block = DocBlock::new(vec![DocRow::Text(Field::text("Ticks."))]);
        assert_eq!(SwiftMarkupRenderer.render(&block, &options()), vec!["/// Ticks."]);
        assert_eq!(RustdocRenderer.render(&block, &options()), vec!["/// Ticks."]);
    }

    #[test]
    fn rdoc_headings() {
        assert_eq!(
            RdocRenderer.render(&block(), &options()),
            vec![
                "##",
                "# Looks a key up.",
                "#",
                "# == Parameters:",
                "# +key+:: the key",
                "# +fallback+:: used when missing",
                "#",
                "# == Returns:",
                "# the value",
            ]
        );
    }

    #[test]
    fn headers() {
        let block = DocBlock::new(vec![
            DocRow::Text(Field::text("main.rs")),
            DocRow::Text(Field::text("demo")),
            DocRow::Blank,
            DocRow::Tag {
                tag: "@author".into(),
                value: Some(Field::text("Ada")),
            },
        ]);
        assert_eq!(
            RustdocRenderer.render_header(&block, &options()),
            vec!["//! main.rs", "//! demo", "//!", "//! Author: Ada"]
        );
        assert_eq!(
            SwiftMarkupRenderer.render_header(&block, &options()),
            vec!["/// main.rs", "///", "/// demo", "///", "/// - Author: Ada"]
        );
        assert_eq!(
            RdocRenderer.render_header(&block, &options()),
            vec!["# main.rs", "# demo", "#", "# Author:: Ada"]
        );
    }
}
