//! Ruby recognizer (RDoc or YARD).

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const CONSTANT: &str = r"[A-Z][A-Za-z0-9_]*";

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:class|module)\s+(?P<name>{CONSTANT}(?:::{CONSTANT})*)(?:\s*<\s*(?P<super>{CONSTANT}(?:::{CONSTANT})*))?"
    ))
    .unwrap()
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*def\s+(?:self\.)?(?P<name>[A-Za-z_][A-Za-z0-9_]*[!?=]?)(?:\s*{PARAMS}|\s+(?P<bare>[^;#]+))?"
    ))
    .unwrap()
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<name>(?:@@?|\$)?[A-Za-z_][A-Za-z0-9_]*)\s*=\s*(?P<value>[^=].*?)\s*$")
        .unwrap()
});

static ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sigil>\*\*|\*|&)?(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*(?:[:=]\s*(?P<value>.*))?$")
        .unwrap()
});

// -- Parser ------------------------------------------------------------------

pub struct RubyParser {
    profile: LanguageProfile,
}

impl RubyParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

impl LanguageParser for RubyParser {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn parse_class(&self, line: &str) -> Option<Declaration> {
        let caps = CLASS.captures(line)?;
        Some(Declaration::Class {
            name: caps["name"].to_string(),
            super_types: caps
                .name("super")
                .map(|m| vec![m.as_str().to_string()])
                .unwrap_or_default(),
        })
    }

    fn parse_function(&self, line: &str) -> Option<Declaration> {
        let caps = FUNCTION.captures(line)?;
        let name = caps["name"].to_string();

        let (kind, return_type) = if name == "initialize" {
            (CallableKind::Constructor, None)
        } else if name.ends_with('?') {
            // Predicate methods answer yes or no.
            (CallableKind::Plain, Some("Boolean".to_string()))
        } else {
            (CallableKind::Plain, None)
        };

        Some(Declaration::Callable {
            name,
            kind,
            raw_args: caps
                .name("args")
                .or_else(|| caps.name("bare"))
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
            declared_type: None,
            initializer: Some(caps["value"].to_string()),
        })
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        let Some(caps) = ARG.captures(raw.trim()) else {
            return Argument::new(raw.trim());
        };
        let mut arg = Argument::new(&caps["name"]);
        arg.ty = caps.name("sigil").map(|sigil| {
            match sigil.as_str() {
                "**" => "Hash",
                "*" => "Array",
                _ => "Proc",
            }
            .to_string()
        });
        arg.value = caps
            .name("value")
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty());
        arg
    }
}
