//! Swift recognizer (Swift markup).

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const ID: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";

const MODIFIERS: &str = r"(?:(?:@\w+(?:\([^)]*\))?|public|private|fileprivate|internal|open|final|static|class|override|mutating|nonmutating|convenience|required|lazy|weak|unowned|nonisolated)\s+)*";

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*{MODIFIERS}(?:class|struct|enum|protocol|actor|extension)\s+(?P<name>[A-Z][A-Za-z0-9_]*)(?:<[^>]*>)?(?:\s*:\s*(?P<supers>[^{{]+))?"
    ))
    .unwrap()
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:\bfunc\s+(?P<name>{ID})|\b(?P<init>init)[?!]?)\s*(?:<[^>]*>)?\s*{PARAMS}\s*(?:async\s+)?(?P<throws>throws|rethrows)?(?:\s*->\s*(?P<rettype>[^{{]+))?"
    ))
    .unwrap()
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*{MODIFIERS}(?:let|var)\s+(?P<name>{ID})\s*(?::\s*(?P<type>[^={{]+?))?\s*(?:=\s*(?P<value>[^{{]+?))?\s*\{{?\s*$"
    ))
    .unwrap()
});

static ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:(?P<label>{ID})\s+)?(?P<name>{ID})\s*:\s*(?:@\w+\s+)*(?:inout\s+)?(?P<type>[^=]+?)\s*(?:=\s*(?P<value>.+))?$"
    ))
    .unwrap()
});

// -- Parser ------------------------------------------------------------------

pub struct SwiftParser {
    profile: LanguageProfile,
}

impl SwiftParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

impl LanguageParser for SwiftParser {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn parse_class(&self, line: &str) -> Option<Declaration> {
        let caps = CLASS.captures(line)?;
        Some(Declaration::Class {
            name: caps["name"].to_string(),
            super_types: caps
                .name("supers")
                .map(|supers| {
                    supers
                        .as_str()
                        .split(',')
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
        let (name, kind) = match caps.name("name") {
            Some(name) => (name.as_str().to_string(), CallableKind::Plain),
            None => ("init".to_string(), CallableKind::Constructor),
        };

        Some(Declaration::Callable {
            name,
            kind,
            raw_args: caps
                .name("args")
                .map(|m| m.as_str().trim().to_string())
                .filter(|args| !args.is_empty()),
            return_type: caps
                .name("rettype")
                .map(|m| m.as_str().trim().to_string())
                .filter(|ty| !ty.is_empty()),
            throws: caps.name("throws").map(|_| vec!["Error".to_string()]),
        })
    }

    fn parse_var(&self, line: &str) -> Option<Declaration> {
        let caps = VAR.captures(line)?;
        Some(Declaration::Variable {
            name: caps["name"].to_string(),
            declared_type: caps.name("type").map(|m| m.as_str().trim().to_string()),
            initializer: caps.name("value").map(|m| m.as_str().trim().to_string()),
        })
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        let Some(caps) = ARG.captures(raw.trim()) else {
            return Argument::new(raw.trim());
        };
        let arg = Argument::new(&caps["name"]).with_type(caps["type"].trim());
        match caps.name("value") {
            Some(value) => arg.with_value(value.as_str().trim()),
            None => arg,
        }
    }
}
