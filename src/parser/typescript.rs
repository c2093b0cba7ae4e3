//! TypeScript / TSX recognizer (JSDoc with declared types).

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const ID: &str = r"[a-zA-Z_$][a-zA-Z_$0-9]*";

/// `Foo`, `ns.Foo[]`, `Map<string, Foo>`.
fn parametric_type() -> String {
    let base = format!(r"{ID}(?:\.{ID})*(?:\[\])?");
    format!(r"{base}(?:\s*<\s*{base}(?:\s*,\s*{base}\s*)*>)?")
}

/// A parametric type or a union of them.
fn return_type() -> String {
    let pt = parametric_type();
    format!(r"{pt}(?:\s*\|\s*{pt})*")
}

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+(?P<name>{ID})(?:\s*<[^>]*>)?(?:\s+extends\s+(?P<extends>{ID}(?:\.{ID})*))?"
    ))
    .unwrap()
});

static ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:export\s+)?(?:(?:const|let|var)\s+)?(?P<name>{ID})\s*(?::[^=]*)?=\s*(?P<promise>async\s+)?(?:<[^>]*>\s*)?{PARAMS}(?:\s*:\s*(?P<rettype>{ret}))?\s*=>",
        ret = return_type()
    ))
    .unwrap()
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?:public|private|protected|static|readonly|abstract|override|export|default)\s+)*(?P<promise>async\s+)?(?:function\s*\*?\s*)?(?P<name>{ID})\s*(?:<[^>]+>)?\s*{PARAMS}\s*(?::\s*(?P<rettype>{ret}))?",
        ret = return_type()
    ))
    .unwrap()
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:(?:public|private|protected|static|readonly|declare|export|var|let|const)\s+)*(?P<name>{ID})[?!]?\s*(?::\s*(?P<type>{pt}))?(?:\s*=\s*(?P<value>.*?))?\s*(?:[;,]|$)",
        pt = parametric_type()
    ))
    .unwrap()
});

static ACCESS_MODIFIERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:public|private|protected|readonly)\s+").unwrap());

// -- Parser ------------------------------------------------------------------

pub struct TypeScriptParser {
    profile: LanguageProfile,
}

impl TypeScriptParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

/// Normalize a declared type: nullable unions become `?T`, other unions are
/// parenthesised.
fn normalize_type(raw: &str) -> String {
    let ty: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(base) = ty.strip_suffix("|null") {
        return format!("?{base}");
    }
    if ty.contains('|') {
        return format!("({ty})");
    }
    ty
}

/// Byte index of a default-value `=` (not part of `=>`).
fn default_separator(arg: &str) -> Option<usize> {
    let bytes = arg.as_bytes();
    (0..bytes.len()).find(|&i| bytes[i] == b'=' && bytes.get(i + 1) != Some(&b'>'))
}

impl LanguageParser for TypeScriptParser {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn parse_class(&self, line: &str) -> Option<Declaration> {
        let caps = CLASS.captures(line)?;
        Some(Declaration::Class {
            name: caps["name"].to_string(),
            super_types: caps
                .name("extends")
                .map(|m| vec![m.as_str().to_string()])
                .unwrap_or_default(),
        })
    }

    fn parse_function(&self, line: &str) -> Option<Declaration> {
        let caps = ARROW.captures(line).or_else(|| FUNCTION.captures(line))?;
        let name = caps["name"].to_string();

        let mut return_type = caps
            .name("rettype")
            .map(|m| normalize_type(m.as_str()));
        if return_type.is_none() && caps.name("promise").is_some() {
            return_type = Some("Promise".to_string());
        }

        let kind = if name == "constructor" {
            return_type = None;
            CallableKind::Constructor
        } else {
            CallableKind::Plain
        };

        Some(Declaration::Callable {
            name,
            kind,
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
            declared_type: caps.name("type").map(|m| normalize_type(m.as_str())),
            initializer: caps
                .name("value")
                .map(|m| m.as_str().trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        let (decl, value) = match default_separator(raw) {
            Some(i) => (&raw[..i], Some(raw[i + 1..].trim())),
            None => (raw, None),
        };

        let (name, ty) = match decl.split_once(':') {
            Some((name, ty)) => {
                let ty = normalize_type(ty);
                let ty = match ty.chars().next() {
                    Some('[') => "Array".to_string(),
                    Some('{') => "Object".to_string(),
                    Some('(') if !ty.contains('|') => "Function".to_string(),
                    _ => ty,
                };
                (name, Some(ty).filter(|t| !t.is_empty()))
            }
            None => (decl, None),
        };

        let name = ACCESS_MODIFIERS.replace_all(name, "");
        let name: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '?')
            .collect();
        let (name, rest) = match name.strip_prefix("...") {
            Some(stripped) => (stripped.to_string(), true),
            None => (name, false),
        };

        let mut arg = Argument::new(name);
        arg.ty = ty.or_else(|| rest.then(|| "Array".to_string()));
        arg.value = value.filter(|v| !v.is_empty()).map(str::to_string);
        arg
    }
}
