//! Splitting a rendered tag line back into its columns.
//!
//! Shared by the line wrapper (which needs the description offset) and the
//! re-parser (which needs every column).

use crate::profile::LanguageProfile;

/// Columns of one tag line. Slices borrow from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine<'a> {
    pub tag: &'a str,
    /// Type with its wrapper removed.
    pub ty: Option<&'a str>,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    /// Byte offset of the description within the input.
    pub desc_start: Option<usize>,
    /// Whether the tag has a known column layout.
    pub structured: bool,
}

/// Split `content` (a line with its comment marker already removed).
///
/// Returns `None` when the line does not start with a tag.
pub fn split_tag_line<'a>(content: &'a str, profile: &LanguageProfile) -> Option<TagLine<'a>> {
    let first = content.chars().next()?;
    if !profile.is_tag_start(first) {
        return None;
    }
    let tag_end = content
        .find(char::is_whitespace)
        .unwrap_or(content.len());
    if tag_end == first.len_utf8() {
        return None;
    }
    let tag = &content[..tag_end];
    let mut pos = skip_ws(content, tag_end);

    let Some(cols) = profile.columns(tag) else {
        let (description, desc_start) = description_at(content, pos);
        return Some(TagLine {
            tag,
            ty: None,
            name: None,
            description,
            desc_start,
            structured: false,
        });
    };

    let mut ty = None;
    if cols.ty && pos < content.len() {
        match profile.type_brackets() {
            Some((open, close)) => {
                if content[pos..].starts_with(open) {
                    if let Some(end) = balanced_end(content, pos, open, close) {
                        ty = Some(&content[pos + open.len_utf8()..end]);
                        pos = skip_ws(content, end + close.len_utf8());
                    }
                }
            }
            None => {
                let end = word_end(content, pos);
                ty = Some(&content[pos..end]);
                pos = skip_ws(content, end);
            }
        }
    }

    let mut name = None;
    if cols.name && pos < content.len() && !content[pos..].starts_with("- ") {
        let end = word_end(content, pos);
        name = Some(&content[pos..end]);
        pos = skip_ws(content, end);
    }

    let rest = &content[pos..];
    if rest.trim_end() == "-" || rest.starts_with("- ") {
        pos = skip_ws(content, pos + 1);
    }

    let (description, desc_start) = description_at(content, pos);
    Some(TagLine {
        tag,
        ty,
        name,
        description,
        desc_start,
        structured: true,
    })
}

fn description_at(content: &str, pos: usize) -> (Option<&str>, Option<usize>) {
    let desc = content[pos..].trim_end();
    if desc.is_empty() {
        (None, None)
    } else {
        (Some(desc), Some(pos))
    }
}

fn skip_ws(s: &str, from: usize) -> usize {
    s[from..]
        .find(|c: char| !c.is_whitespace())
        .map_or(s.len(), |offset| from + offset)
}

fn word_end(s: &str, from: usize) -> usize {
    s[from..]
        .find(char::is_whitespace)
        .map_or(s.len(), |offset| from + offset)
}

/// Byte index of the bracket closing the one at `from`.
fn balanced_end(s: &str, from: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s[from..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(from + i);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::Language;

    fn profile(language: Language) -> LanguageProfile {
        LanguageProfile::new(language, &Config::default())
    }

    #[test]
    fn jsdoc_param() {
        let p = profile(Language::JavaScript);
        let line = split_tag_line("@param {string} name - the name", &p).unwrap();
        assert_eq!(line.tag, "@param");
        assert_eq!(line.ty, Some("string"));
        assert_eq!(line.name, Some("name"));
        assert_eq!(line.description, Some("the name"));
        assert_eq!(line.desc_start, Some(23));
        assert!(line.structured);
    }

    #[test]
    fn nested_braces_in_type() {
        let p = profile(Language::JavaScript);
        let line = split_tag_line("@param {{a: number}} opts", &p).unwrap();
        assert_eq!(line.ty, Some("{a: number}"));
        assert_eq!(line.name, Some("opts"));
        assert_eq!(line.description, None);
    }

    #[test]
    fn aligned_padding_is_skipped() {
        let p = profile(Language::JavaScript);
        let line = split_tag_line("@returns {number}      - sum", &p).unwrap();
        assert_eq!(line.ty, Some("number"));
        assert_eq!(line.name, None);
        assert_eq!(line.description, Some("sum"));
    }

    #[test]
    fn php_bare_type() {
        let p = profile(Language::Php);
        let line = split_tag_line("@param int $count how many", &p).unwrap();
        assert_eq!(line.ty, Some("int"));
        assert_eq!(line.name, Some("$count"));
        assert_eq!(line.description, Some("how many"));
    }

    #[test]
    fn java_without_type_column() {
        let p = profile(Language::Java);
        let line = split_tag_line("@throws IOException when it fails", &p).unwrap();
        assert_eq!(line.ty, None);
        assert_eq!(line.name, Some("IOException"));
        assert_eq!(line.description, Some("when it fails"));
    }

    #[test]
    fn free_form_tag() {
        let p = profile(Language::JavaScript);
        let line = split_tag_line("@see https://example.com", &p).unwrap();
        assert!(!line.structured);
        assert_eq!(line.description, Some("https://example.com"));
        assert_eq!(line.desc_start, Some(5));
    }

    #[test]
    fn not_a_tag() {
        let p = profile(Language::JavaScript);
        assert!(split_tag_line("plain text", &p).is_none());
        assert!(split_tag_line("@ alone", &p).is_none());
        assert!(split_tag_line("", &p).is_none());
    }
}
