//! Snippet fields: literal text mixed with numbered `${n:default}` tab stops.
//!
//! Every interactive part of a generated docblock is a [`Field`]. A field can
//! be rendered two ways: as a host editor snippet (placeholders kept, special
//! characters escaped) or as plain text (placeholders replaced by their
//! default text).

use serde::Serialize;

/// Host template tokens that must survive snippet escaping untouched.
const RESERVED_TOKENS: &[&str] = &["FILENAME", "FILEPATH", "WORKSPACE_NAME", "USER_NAME", "DATE"];

/// Hands out tab-stop indices in emission order, starting at 0.
#[derive(Debug, Default)]
pub struct TabStops {
    next: usize,
}

impl TabStops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next index.
    pub fn take(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Number of indices handed out so far.
    pub fn count(&self) -> usize {
        self.next
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Placeholder { index: usize, default: String },
}

/// A run of segments forming one docblock field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    pub segments: Vec<Segment>,
}

impl Field {
    /// A field holding literal text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Text { text: text.into() }],
        }
    }

    /// A single placeholder with the next free tab-stop index.
    pub fn placeholder(stops: &mut TabStops, default: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Placeholder {
                index: stops.take(),
                default: default.into(),
            }],
        }
    }

    /// Parse a template such as `{${0:type}} ${1:name}`.
    ///
    /// Placeholder indices found in the template are discarded and renumbered
    /// from `stops`, in order of appearance. `${0}` (no default) is accepted.
    /// An unterminated `${` is kept as literal text.
    pub fn template(src: &str, stops: &mut TabStops) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = src;

        while let Some(pos) = rest.find("${") {
            let after = &rest[pos + 2..];
            let Some(close) = after.find('}') else {
                break;
            };
            literal.push_str(&rest[..pos]);
            let body = &after[..close];
            let digits = body.chars().take_while(|c| c.is_ascii_digit()).count();
            let default = match body[digits..].strip_prefix(':') {
                Some(default) => default,
                None => &body[digits..],
            };
            if !literal.is_empty() {
                segments.push(Segment::Text {
                    text: std::mem::take(&mut literal),
                });
            }
            segments.push(Segment::Placeholder {
                index: stops.take(),
                default: default.to_string(),
            });
            rest = &after[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Text { text: literal });
        }
        Self { segments }
    }

    /// Text with every placeholder replaced by its default.
    pub fn plain(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text { text } => text.as_str(),
                Segment::Placeholder { default, .. } => default.as_str(),
            })
            .collect()
    }

    /// Host snippet syntax: `${n:default}` with `\`, `$` and `}` escaped.
    pub fn snippet(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(&escape(text)),
                Segment::Placeholder { index, default } => {
                    out.push_str(&format!("${{{}:{}}}", index, escape(default)));
                }
            }
        }
        out
    }

    pub fn render(&self, placeholders: bool) -> String {
        if placeholders {
            self.snippet()
        } else {
            self.plain()
        }
    }

    /// Display width of the plain rendering.
    pub fn width(&self) -> usize {
        self.plain().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|segment| match segment {
            Segment::Text { text } => text.is_empty(),
            Segment::Placeholder { default, .. } => default.is_empty(),
        })
    }

    /// Same text with placeholders flattened into literal segments.
    pub fn to_plain(&self) -> Self {
        Self::text(self.plain())
    }
}

/// Escape snippet metacharacters, leaving reserved `$TOKEN`s alone.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if c == '$' {
            if let Some(token) = reserved_token(&rest[1..]) {
                out.push('$');
                out.push_str(token);
                rest = &rest[1 + token.len()..];
                continue;
            }
        }
        if matches!(c, '\\' | '$' | '}') {
            out.push('\\');
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn reserved_token(s: &str) -> Option<&'static str> {
    RESERVED_TOKENS.iter().copied().find(|token| {
        s.starts_with(token)
            && !s[token.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_uppercase() || c == '_')
    })
}
