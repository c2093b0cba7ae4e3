//! Per-language comment dialect and tag configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Supported source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Php,
    Java,
    /// C, C++ and LSL share one Doxygen-flavoured parser.
    Cpp,
    ObjC,
    Rust,
    Ruby,
    Swift,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Php,
        Language::Java,
        Language::Cpp,
        Language::ObjC,
        Language::Rust,
        Language::Ruby,
        Language::Swift,
    ];

    /// Canonical identifier, as used in configuration files.
    pub fn id(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Php => "php",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::ObjC => "objc",
            Language::Rust => "rust",
            Language::Ruby => "ruby",
            Language::Swift => "swift",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Ok(Language::JavaScript),
            "typescript" | "ts" | "tsx" => Ok(Language::TypeScript),
            "php" => Ok(Language::Php),
            "java" => Ok(Language::Java),
            "c" | "cpp" | "c++" | "lsl" => Ok(Language::Cpp),
            "objc" | "objective-c" => Ok(Language::ObjC),
            "rust" | "rs" => Ok(Language::Rust),
            "ruby" | "rb" => Ok(Language::Ruby),
            "swift" => Ok(Language::Swift),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Where blank separator lines are inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyLines {
    #[default]
    None,
    AfterSummary,
    /// After the summary and wherever the leading tag changes.
    BetweenGroups,
}

/// Opener used by C-family block comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// `/**`
    #[default]
    Javadoc,
    /// `/*!`
    Qt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RubyStyle {
    #[default]
    Rdoc,
    Yard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberTypes {
    /// Every numeric literal is `number`.
    Number,
    /// `integer` or `float` depending on a decimal point.
    IntegerFloat,
}

/// Framing of a tag-table comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    /// Marker at the start of every inner line.
    pub prefix: &'static str,
    pub close: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Tag rows between block delimiters (JSDoc, PHPDoc, Javadoc, YARD...).
    Table(Delimiters),
    /// `///` Markdown with `# Arguments` / `# Returns` sections.
    Rustdoc,
    /// `///` Swift markup with `- Parameters:` lists.
    SwiftMarkup,
    /// `#` lines with `== Parameters:` headings.
    Rdoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tags {
    /// Default text of the summary placeholder.
    pub summary: &'static str,
    pub param: &'static str,
    pub ret: &'static str,
    pub throws: &'static str,
    pub var: Option<&'static str>,
    pub yields: Option<&'static str>,
    pub member: Option<&'static str>,
    pub extends: Option<&'static str>,
}

/// Column slots a structured tag occupies besides tag and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub ty: bool,
    pub name: bool,
}

const PARAM_TAGS: &[&str] = &[
    "param", "arg", "argument", "property", "prop", "option", "yieldparam", "field",
];

const RESULT_TAGS: &[&str] = &[
    "return", "returns", "yield", "yields", "yieldreturn", "result",
];

const THROW_TAGS: &[&str] = &["throws", "throw", "exception", "raise"];

/// Immutable per-language settings, built once per parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub language: Language,
    pub dialect: Dialect,
    /// Wrapper for the type column (`{%s}`, `[%s]`, `%s`). `None` when the
    /// dialect has no type column.
    pub type_format: Option<&'static str>,
    pub tags: Tags,
    pub multiple_supertypes: bool,
    /// Separator placed before a description.
    pub desc_sep: &'static str,
    pub numbers: NumberTypes,
    /// Characters that may start a tag (`@`, and `\` for Doxygen).
    pub tag_introducers: &'static str,
    pub empty_lines: EmptyLines,
}

const JAVADOC: Delimiters = Delimiters {
    open: "/**",
    prefix: " *",
    close: Some(" */"),
};

const QT: Delimiters = Delimiters {
    open: "/*!",
    prefix: " *",
    close: Some(" */"),
};

const YARD: Delimiters = Delimiters {
    open: "##",
    prefix: "#",
    close: None,
};

const JSDOC_TAGS: Tags = Tags {
    summary: "summary",
    param: "@param",
    ret: "@returns",
    throws: "@throws",
    var: Some("@type"),
    yields: Some("@yields"),
    member: Some("@memberof"),
    extends: Some("@extends"),
};

const PROSE_TAGS: Tags = Tags {
    summary: "description",
    param: "@param",
    ret: "@returns",
    throws: "@throws",
    var: None,
    yields: None,
    member: None,
    extends: None,
};

impl LanguageProfile {
    pub fn new(language: Language, config: &Config) -> Self {
        let block = match config.comment_style {
            CommentStyle::Javadoc => JAVADOC,
            CommentStyle::Qt => QT,
        };
        let empty_lines = config.empty_lines(language);

        let base = LanguageProfile {
            language,
            dialect: Dialect::Table(JAVADOC),
            type_format: None,
            tags: JSDOC_TAGS,
            multiple_supertypes: false,
            desc_sep: " ",
            numbers: NumberTypes::Number,
            tag_introducers: "@",
            empty_lines,
        };

        match language {
            Language::JavaScript | Language::TypeScript => LanguageProfile {
                type_format: Some("{%s}"),
                desc_sep: " - ",
                ..base
            },
            Language::Php => LanguageProfile {
                type_format: Some("%s"),
                numbers: NumberTypes::IntegerFloat,
                tags: Tags {
                    ret: "@return",
                    var: Some("@var"),
                    yields: None,
                    member: None,
                    ..JSDOC_TAGS
                },
                ..base
            },
            Language::Java => LanguageProfile {
                tags: Tags {
                    ret: "@return",
                    var: None,
                    yields: None,
                    member: None,
                    extends: None,
                    ..JSDOC_TAGS
                },
                ..base
            },
            Language::Cpp => LanguageProfile {
                dialect: Dialect::Table(block),
                tags: Tags {
                    summary: "brief",
                    ret: "@return",
                    var: Some("@var"),
                    yields: None,
                    member: None,
                    ..JSDOC_TAGS
                },
                multiple_supertypes: true,
                tag_introducers: "@\\",
                ..base
            },
            Language::ObjC => LanguageProfile {
                dialect: Dialect::Table(block),
                tags: Tags {
                    ret: "@return",
                    var: Some("@var"),
                    yields: None,
                    member: None,
                    extends: Some("@superclass"),
                    ..JSDOC_TAGS
                },
                tag_introducers: "@\\",
                ..base
            },
            Language::Rust => LanguageProfile {
                dialect: Dialect::Rustdoc,
                tags: PROSE_TAGS,
                ..base
            },
            Language::Swift => LanguageProfile {
                dialect: Dialect::SwiftMarkup,
                tags: PROSE_TAGS,
                ..base
            },
            Language::Ruby => {
                let tags = Tags {
                    ret: "@return",
                    throws: "@raise",
                    ..PROSE_TAGS
                };
                match config.ruby_style {
                    RubyStyle::Rdoc => LanguageProfile {
                        dialect: Dialect::Rdoc,
                        tags,
                        ..base
                    },
                    RubyStyle::Yard => LanguageProfile {
                        dialect: Dialect::Table(YARD),
                        type_format: Some("[%s]"),
                        tags,
                        ..base
                    },
                }
            }
        }
    }

    pub fn has_type_column(&self) -> bool {
        self.type_format.is_some()
    }

    /// Delimiters of a tag-table dialect.
    pub fn delimiters(&self) -> Option<&Delimiters> {
        match &self.dialect {
            Dialect::Table(delims) => Some(delims),
            _ => None,
        }
    }

    /// Apply the type wrapper (`{string}` for JSDoc).
    pub fn format_type(&self, ty: &str) -> String {
        match self.type_format {
            Some(format) => format.replacen("%s", ty, 1),
            None => ty.to_string(),
        }
    }

    /// Opening and closing characters of the type wrapper, if any.
    pub fn type_brackets(&self) -> Option<(char, char)> {
        let format = self.type_format?;
        let (before, after) = format.split_once("%s")?;
        match (before.chars().next(), after.chars().next()) {
            (Some(open), Some(close)) => Some((open, close)),
            _ => None,
        }
    }

    pub fn is_tag_start(&self, c: char) -> bool {
        self.tag_introducers.contains(c)
    }

    /// Column layout of a structured tag, or `None` for free-form tags.
    pub fn columns(&self, tag: &str) -> Option<Columns> {
        let bare = tag.trim_start_matches(|c: char| self.is_tag_start(c));
        let ty = self.has_type_column();

        if PARAM_TAGS.contains(&bare) {
            return Some(Columns { ty, name: true });
        }
        if RESULT_TAGS.contains(&bare) {
            return Some(Columns { ty, name: false });
        }
        if THROW_TAGS.contains(&bare) {
            // Without a type column the exception class sits in the name slot.
            return Some(Columns { ty, name: !ty });
        }
        if self.tags.var.is_some_and(|var| var == tag) {
            return Some(Columns { ty, name: false });
        }
        None
    }
}
