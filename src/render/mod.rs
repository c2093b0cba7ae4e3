//! Renderer module: docblock rows to comment lines, dispatched on dialect.

pub mod prose;
pub mod table;

use crate::config::Config;
use crate::model::DocBlock;
use crate::profile::{Dialect, EmptyLines, LanguageProfile};
use crate::snippet::Field;
use crate::wrap::wrap;

/// Knobs shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `${n:default}` snippet syntax instead of plain text.
    pub placeholders: bool,
    /// Number of leading columns padded to a common width (0-3).
    pub align: u8,
    pub empty_lines: EmptyLines,
    pub wrap_width: Option<usize>,
}

impl RenderOptions {
    pub fn new(profile: &LanguageProfile, config: &Config, placeholders: bool) -> Self {
        Self {
            placeholders,
            align: config.align_tags,
            empty_lines: profile.empty_lines,
            wrap_width: None,
        }
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }
}

/// Trait for rendering a DocBlock in one comment dialect.
pub trait Renderer {
    fn render(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String>;

    /// File header rendering. Tag-table dialects reuse [`Renderer::render`].
    fn render_header(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        self.render(block, options)
    }
}

/// Create the renderer for a profile's dialect.
pub fn create_renderer(profile: &LanguageProfile) -> Box<dyn Renderer> {
    match profile.dialect {
        Dialect::Table(_) => Box::new(table::TableRenderer::new(profile.clone())),
        Dialect::Rustdoc => Box::new(prose::RustdocRenderer),
        Dialect::SwiftMarkup => Box::new(prose::SwiftMarkupRenderer),
        Dialect::Rdoc => Box::new(prose::RdocRenderer),
    }
}

/// Render and, when a width is set, re-flow.
pub fn format(block: &DocBlock, profile: &LanguageProfile, options: &RenderOptions) -> Vec<String> {
    let lines = create_renderer(profile).render(block, options);
    match options.wrap_width {
        Some(width) => wrap(&lines, profile, width),
        None => lines,
    }
}

/// Render a header block.
pub fn format_header(
    block: &DocBlock,
    profile: &LanguageProfile,
    options: &RenderOptions,
) -> Vec<String> {
    create_renderer(profile).render_header(block, options)
}

/// Rendered text of an optional field, empty when absent.
pub(crate) fn cell(field: Option<&Field>, placeholders: bool) -> String {
    field.map(|f| f.render(placeholders)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocRow;
    use crate::profile::Language;

    fn options(placeholders: bool) -> RenderOptions {
        RenderOptions {
            placeholders,
            align: 0,
            empty_lines: EmptyLines::None,
            wrap_width: None,
        }
    }

    #[test]
    fn dispatches_on_dialect() {
        let block = DocBlock::new(vec![DocRow::Text(Field::text("Adds two numbers."))]);
        let config = Config::default();

        let js = LanguageProfile::new(Language::JavaScript, &config);
        assert_eq!(
            format(&block, &js, &options(false)),
            vec!["/**", " * Adds two numbers.", " */"]
        );

        let rust = LanguageProfile::new(Language::Rust, &config);
        assert_eq!(format(&block, &rust, &options(false)), vec!["/// Adds two numbers."]);
    }

    #[test]
    fn wraps_when_width_given() {
        let block = DocBlock::new(vec![DocRow::Text(Field::text(
            "one two three four five six seven eight nine ten",
        ))]);
        let js = LanguageProfile::new(Language::JavaScript, &Config::default());
        let lines = format(&block, &js, &options(false).with_wrap_width(24));
        assert!(lines.len() > 3);
        assert!(lines.iter().all(|line| line.chars().count() <= 24));
    }

    #[test]
    fn options_follow_profile_and_config() {
        let config = Config {
            align_tags: 2,
            ..Config::default()
        };
        let php = LanguageProfile::new(Language::Php, &config);
        let opts = RenderOptions::new(&php, &config, true);
        assert_eq!(opts.align, 2);
        assert_eq!(opts.empty_lines, EmptyLines::BetweenGroups);
        assert!(opts.placeholders);
        assert_eq!(opts.wrap_width, None);
    }
}
