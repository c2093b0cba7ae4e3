//! Tag-table dialects: JSDoc, PHPDoc, Javadoc, Doxygen, HeaderDoc, YARD.
//!
//! Every structured row is laid out in fixed slots (tag, type, name) followed
//! by the description. With alignment enabled the first `align` slots are
//! padded to the widest value in the block, so descriptions line up.

use super::{cell, RenderOptions, Renderer};
use crate::model::{DocBlock, DocRow};
use crate::profile::{Columns, Delimiters, EmptyLines, LanguageProfile};

pub struct TableRenderer {
    profile: LanguageProfile,
}

/// One rendered slot and its display width.
#[derive(Debug, Clone, Default)]
struct Slot {
    text: String,
    width: usize,
}

impl TableRenderer {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }

    fn delimiters(&self) -> Delimiters {
        self.profile.delimiters().copied().unwrap_or(Delimiters {
            open: "/**",
            prefix: " *",
            close: Some(" */"),
        })
    }

    /// Slots of a row. `None` marks a column the row's tag does not have.
    fn slots(&self, row: &DocRow, placeholders: bool) -> Vec<Option<Slot>> {
        let typed = self.profile.has_type_column();
        match row {
            DocRow::Tag { tag, .. } => vec![Some(Slot {
                text: tag.clone(),
                width: tag.chars().count(),
            })],
            DocRow::Entry { tag, ty, name, .. } => {
                let cols = self.profile.columns(tag).unwrap_or(Columns {
                    ty: ty.is_some(),
                    name: name.is_some(),
                });
                let mut slots = vec![Some(Slot {
                    text: tag.clone(),
                    width: tag.chars().count(),
                })];
                if typed {
                    slots.push((cols.ty || ty.is_some()).then(|| match ty {
                        Some(ty) => Slot {
                            text: self.profile.format_type(&ty.render(placeholders)),
                            width: self.profile.format_type(&ty.plain()).chars().count(),
                        },
                        None => Slot::default(),
                    }));
                }
                slots.push((cols.name || name.is_some()).then(|| Slot {
                    text: cell(name.as_ref(), placeholders),
                    width: name.as_ref().map_or(0, |n| n.width()),
                }));
                slots
            }
            DocRow::Text(_) | DocRow::Blank => Vec::new(),
        }
    }

    /// Widest value per slot index across the structured rows of the block.
    fn column_widths(&self, block: &DocBlock) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        let entries = block
            .rows
            .iter()
            .filter(|row| matches!(row, DocRow::Entry { .. }));
        for row in entries {
            for (i, slot) in self.slots(row, false).into_iter().enumerate() {
                if widths.len() <= i {
                    widths.resize(i + 1, 0);
                }
                if let Some(slot) = slot {
                    widths[i] = widths[i].max(slot.width);
                }
            }
        }
        widths
    }

    fn render_row(
        &self,
        row: &DocRow,
        prefix: &str,
        widths: &[usize],
        options: &RenderOptions,
    ) -> String {
        let align = usize::from(options.align);
        let mut line = prefix.to_string();

        match row {
            DocRow::Blank => {}
            DocRow::Text(text) => {
                line.push(' ');
                line.push_str(&text.render(options.placeholders));
            }
            DocRow::Tag { value, .. } | DocRow::Entry {
                description: value, ..
            } => {
                let slots = self.slots(row, options.placeholders);
                let entry = matches!(row, DocRow::Entry { .. });
                let has_name = entry && slots.last().is_some_and(Option::is_some);

                for (i, slot) in slots.into_iter().enumerate() {
                    let Some(slot) = slot else { continue };
                    let max = widths.get(i).copied().unwrap_or(0);
                    let padded = entry && i < align && max > 0;
                    if slot.text.is_empty() && !padded {
                        continue;
                    }
                    line.push(' ');
                    line.push_str(&slot.text);
                    if padded {
                        line.push_str(&" ".repeat(max.saturating_sub(slot.width)));
                    }
                }

                let value = cell(value.as_ref(), options.placeholders);
                if !value.is_empty() {
                    let sep = if has_name { self.profile.desc_sep } else { " " };
                    line.push_str(sep);
                    line.push_str(&value);
                }
            }
        }

        line.trim_end().to_string()
    }
}

/// Whether an empty line goes between rows `prev` and `next` (the latter at
/// index `index`).
fn separates(policy: EmptyLines, index: usize, prev: &DocRow, next: &DocRow) -> bool {
    if prev.is_blank() || next.is_blank() {
        return false;
    }
    match policy {
        EmptyLines::None => false,
        EmptyLines::AfterSummary => index == 1,
        EmptyLines::BetweenGroups => index == 1 || prev.tag() != next.tag(),
    }
}

impl Renderer for TableRenderer {
    fn render(&self, block: &DocBlock, options: &RenderOptions) -> Vec<String> {
        let delims = self.delimiters();
        let widths = if options.align > 0 {
            self.column_widths(block)
        } else {
            Vec::new()
        };

        let mut lines = vec![delims.open.to_string()];
        for (i, row) in block.rows.iter().enumerate() {
            if i > 0 && separates(options.empty_lines, i, &block.rows[i - 1], row) {
                lines.push(delims.prefix.trim_end().to_string());
            }
            lines.push(self.render_row(row, delims.prefix, &widths, options));
        }
        if let Some(close) = delims.close {
            lines.push(close.to_string());
        }
        lines
    }
}
