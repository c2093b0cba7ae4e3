//! Rust recognizer (rustdoc Markdown sections).

use std::sync::LazyLock;

use regex::Regex;

use super::{extract_definition, split_args, LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const ID: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";

const PREAMBLE: &str = r"^\s*(?:#\[[^\]]*\]\s*)*(?:pub(?:\s*\([^)]*\))?\s+)?";

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{PREAMBLE}(?:unsafe\s+)?(?:struct|trait|enum|union)\s+(?P<name>{ID})(?:\s*<(?:[^<>]|<[^<>]*>)*>)?(?:\s*:\s*(?P<supers>[^{{;=]+))?"
    ))
    .unwrap()
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"{PREAMBLE}(?:(?:const|async|unsafe|default)\s+)*(?:extern\s+(?:"[^"]*"\s+)?)?fn\s+(?P<name>{ID})\s*(?:<(?:[^<>]|<[^<>]*>)*>)?\s*{PARAMS}(?:\s*->\s*(?P<rettype>[^{{;]+))?"#
    ))
    .unwrap()
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{PREAMBLE}(?:let(?:\s+mut)?|const|static(?:\s+mut)?)\s+(?P<name>{ID})\s*(?::\s*(?P<type>[^=;]+?))?\s*(?:=\s*(?P<value>[^;]*))?;?\s*$"
    ))
    .unwrap()
});

static WHERE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+where\b.*$").unwrap());

/// `'a` lifetimes would otherwise be mistaken for character literals.
static LIFETIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([A-Za-z_][A-Za-z0-9_]*)([^'A-Za-z0-9_]|$)").unwrap());

// -- Parser ------------------------------------------------------------------

pub struct RustParser {
    profile: LanguageProfile,
}

impl RustParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

fn is_receiver(arg: &str) -> bool {
    let compact: String = arg.chars().filter(|c| !c.is_whitespace()).collect();
    matches!(compact.as_str(), "self" | "&self" | "&mutself" | "mutself")
        || compact.starts_with("self:")
}

impl LanguageParser for RustParser {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn definition(&self, lines: &[&str]) -> String {
        let stripped: Vec<String> = lines
            .iter()
            .map(|line| LIFETIME.replace_all(line, "$2").into_owned())
            .collect();
        let refs: Vec<&str> = stripped.iter().map(String::as_str).collect();
        extract_definition(&refs)
    }

    fn parse_class(&self, line: &str) -> Option<Declaration> {
        let caps = CLASS.captures(line)?;
        Some(Declaration::Class {
            name: caps["name"].to_string(),
            super_types: caps
                .name("supers")
                .map(|supers| {
                    WHERE
                        .replace(supers.as_str(), "")
                        .split('+')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    fn parse_function(&self, line: &str) -> Option<Declaration> {
        let caps = FUNCTION.captures(line)?;
        let return_type = caps
            .name("rettype")
            .map(|ty| WHERE.replace(ty.as_str(), "").trim().to_string())
            .filter(|ty| !ty.is_empty());

        Some(Declaration::Callable {
            name: caps["name"].to_string(),
            kind: CallableKind::Plain,
            raw_args: caps
                .name("args")
                .map(|m| m.as_str().trim().to_string())
                .filter(|args| !args.is_empty()),
            return_type,
            throws: None,
        })
    }

    fn parse_var(&self, line: &str) -> Option<Declaration> {
        let caps = VAR.captures(line)?;
        Some(Declaration::Variable {
            name: caps["name"].to_string(),
            declared_type: caps.name("type").map(|m| m.as_str().trim().to_string()),
            initializer: caps
                .name("value")
                .map(|m| m.as_str().trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    fn parse_args(&self, raw: &str) -> Vec<Argument> {
        split_args(raw)
            .iter()
            .filter(|arg| !is_receiver(arg))
            .map(|arg| self.parse_arg(arg))
            .collect()
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        match raw.split_once(':') {
            Some((pattern, ty)) => {
                let pattern = pattern.trim();
                let name = pattern.strip_prefix("mut ").unwrap_or(pattern).trim();
                Argument::new(name).with_type(ty.trim())
            }
            None => Argument::new(raw.trim()),
        }
    }
}
