//! Locating existing docblocks in a source file.

use std::ops::Range;

use crate::profile::LanguageProfile;

/// Line ranges (end exclusive) of every docblock in `text`.
///
/// Block dialects run from an opener line to the first line ending in the
/// closer; an opener seen before the closer restarts the block. YARD blocks
/// are an opener line followed by one or more marker lines. Prose dialects
/// are never scanned.
pub fn docblock_ranges(profile: &LanguageProfile, text: &str) -> Vec<Range<usize>> {
    let Some(delims) = profile.delimiters() else {
        return Vec::new();
    };
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut ranges = Vec::new();

    match delims.close.map(str::trim) {
        Some(close) => {
            let mut start = None;
            for (i, line) in lines.iter().enumerate() {
                if line.starts_with(delims.open) {
                    start = Some(i);
                }
                if let Some(s) = start {
                    if line.ends_with(close) && !(i == s && *line == delims.open) {
                        ranges.push(s..i + 1);
                        start = None;
                    }
                }
            }
        }
        None => {
            let marker = delims.prefix.trim();
            let mut i = 0;
            while i < lines.len() {
                if lines[i] == delims.open {
                    let mut end = i + 1;
                    while end < lines.len()
                        && lines[end].starts_with(marker)
                        && lines[end] != delims.open
                    {
                        end += 1;
                    }
                    if end > i + 1 {
                        ranges.push(i..end);
                        i = end;
                        continue;
                    }
                }
                i += 1;
            }
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::{Language, RubyStyle};

    #[test]
    fn block_comments() {
        let profile = LanguageProfile::new(Language::JavaScript, &Config::default());
        let text = "/**\n * One.\n */\nfunction a() {}\n\n/** Two. */\nlet b;\n/* plain */\n";
        assert_eq!(docblock_ranges(&profile, text), vec![0..3, 5..6]);
    }

    #[test]
    fn unterminated_block_restarts() {
        let profile = LanguageProfile::new(Language::Java, &Config::default());
        let text = "/**\n * lost\n/**\n * kept\n */";
        assert_eq!(docblock_ranges(&profile, text), vec![2..5]);
    }

    #[test]
    fn yard_blocks() {
        let config = Config {
            ruby_style: RubyStyle::Yard,
            ..Config::default()
        };
        let profile = LanguageProfile::new(Language::Ruby, &config);
        let text = "##\n# Greets.\n# @param [String] name\ndef greet(name)\n##\nx = 1\n";
        assert_eq!(docblock_ranges(&profile, text), vec![0..3]);
    }

    #[test]
    fn prose_dialects_are_skipped() {
        let profile = LanguageProfile::new(Language::Rust, &Config::default());
        assert!(docblock_ranges(&profile, "/// doc\nfn a() {}").is_empty());
    }
}
