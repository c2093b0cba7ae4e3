//! User configuration, loaded from a TOML file.
//!
//! ```toml
//! align-tags = 2
//! comment-style = "qt"
//! ruby-style = "yard"
//! custom-tags = ["@author Jane Doe", "@license", "@copyright $YEAR Acme"]
//!
//! [languages.php]
//! empty-lines = "after-summary"
//!
//! [languages.swift]
//! enabled = false
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::profile::{CommentStyle, EmptyLines, Language, RubyStyle};

/// Default re-flow width of the reformat command.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("align-tags must be between 0 and 3, got {0}")]
    InvalidAlign(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Number of leading columns (tag, type, name) padded to a common width.
    pub align_tags: u8,
    pub comment_style: CommentStyle,
    pub ruby_style: RubyStyle,
    /// Extra header lines. `$YEAR` is replaced by the current year.
    pub custom_tags: Vec<String>,
    pub wrap_width: usize,
    pub languages: BTreeMap<Language, LanguageConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LanguageConfig {
    pub enabled: bool,
    pub empty_lines: Option<EmptyLines>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            empty_lines: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            align_tags: 0,
            comment_style: CommentStyle::default(),
            ruby_style: RubyStyle::default(),
            custom_tags: Vec::new(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            languages: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.align_tags > 3 {
            return Err(ConfigError::InvalidAlign(config.align_tags));
        }
        Ok(config)
    }

    pub fn is_enabled(&self, language: Language) -> bool {
        self.languages
            .get(&language)
            .map_or(true, |lang| lang.enabled)
    }

    /// Empty-line policy for a language, falling back to its default.
    pub fn empty_lines(&self, language: Language) -> EmptyLines {
        self.languages
            .get(&language)
            .and_then(|lang| lang.empty_lines)
            .unwrap_or_else(|| default_empty_lines(language))
    }
}

fn default_empty_lines(language: Language) -> EmptyLines {
    match language {
        Language::Cpp | Language::Java | Language::ObjC | Language::Ruby => {
            EmptyLines::AfterSummary
        }
        Language::Php => EmptyLines::BetweenGroups,
        Language::JavaScript | Language::TypeScript | Language::Rust | Language::Swift => {
            EmptyLines::None
        }
    }
}
