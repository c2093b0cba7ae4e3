//! Objective-C recognizer (HeaderDoc).
//!
//! Method selectors are rebuilt from their keyword parts, so
//! `- (void)setName:(NSString *)name forKey:(id)key` is named
//! `setName:forKey:`. The per-part arguments travel one per line in
//! `raw_args`.

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const ID: &str = r"[a-zA-Z_$][a-zA-Z0-9_$]*";

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*@(?:interface|implementation|protocol)\s+(?P<name>{ID})(?:\s*:\s*(?P<super>{ID}))?"
    ))
    .unwrap()
});

static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*[-+]\s*\(\s*(?P<rettype>{ID}\s*\**)\s*\)\s*(?P<name>{ID})\s*(?::(?P<args>[^{{;]*))?"
    ))
    .unwrap()
});

/// Plain C functions declared alongside methods.
static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:(?:static|inline|extern|const)\s+)*(?P<rettype>{ID})(?P<ptr>[*\s]+)(?P<name>{ID})\s*{PARAMS}"
    ))
    .unwrap()
});

static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*@property\s*(?:\([^)]*\)\s*)?(?P<type>{ID}(?:\s*<[^>]*>)?)(?P<ptr>[*\s]+)(?P<name>{ID})\s*;?"
    ))
    .unwrap()
});

static SELECTOR_PART: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*:\s*").unwrap());

// -- Parser ------------------------------------------------------------------

pub struct ObjCParser {
    profile: LanguageProfile,
}

impl ObjCParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

fn compact_type(base: &str, ptr: &str) -> String {
    let ptr: String = ptr.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{}{ptr}", base.trim())
}

/// Split `(T)a part2:(U)b` into the selector suffix and one argument per part.
fn selector(name: &str, args: &str) -> (String, Vec<String>) {
    let mut selector = name.to_string();
    let groups: Vec<&str> = SELECTOR_PART.split(args.trim()).collect();
    let mut params = Vec::with_capacity(groups.len());

    for (i, group) in groups.iter().enumerate() {
        let group = group.trim();
        if i + 1 < groups.len() {
            match group.rsplit_once(char::is_whitespace) {
                Some((param, keyword)) => {
                    selector.push(':');
                    selector.push_str(keyword);
                    params.push(param.trim().to_string());
                }
                None => {
                    selector.push(':');
                    params.push(group.to_string());
                }
            }
        } else {
            params.push(group.to_string());
        }
    }
    selector.push(':');
    (selector, params)
}

impl LanguageParser for ObjCParser {
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
        if let Some(caps) = METHOD.captures(line) {
            let (name, params) = match caps.name("args") {
                Some(args) if !args.as_str().trim().is_empty() => {
                    selector(&caps["name"], args.as_str())
                }
                _ => (caps["name"].to_string(), Vec::new()),
            };
            let params: Vec<String> = params.into_iter().filter(|p| !p.is_empty()).collect();
            return Some(Declaration::Callable {
                name,
                kind: CallableKind::Plain,
                raw_args: (!params.is_empty()).then(|| params.join("\n")),
                return_type: Some(caps["rettype"].split_whitespace().collect()),
                throws: None,
            });
        }

        let caps = FUNCTION.captures(line)?;
        Some(Declaration::Callable {
            name: caps["name"].to_string(),
            kind: CallableKind::Plain,
            raw_args: caps
                .name("args")
                .map(|m| m.as_str().trim().to_string())
                .filter(|args| !args.is_empty()),
            return_type: Some(compact_type(&caps["rettype"], &caps["ptr"])),
            throws: None,
        })
    }

    fn parse_var(&self, line: &str) -> Option<Declaration> {
        let caps = PROPERTY.captures(line)?;
        Some(Declaration::Variable {
            name: caps["name"].to_string(),
            declared_type: Some(compact_type(&caps["type"], &caps["ptr"])),
            initializer: None,
        })
    }

    /// Selector arguments arrive one per line; C arguments are comma separated.
    fn parse_args(&self, raw: &str) -> Vec<Argument> {
        if raw.contains('\n') || raw.trim_start().starts_with('(') {
            return raw
                .lines()
                .map(str::trim)
                .filter(|arg| !arg.is_empty())
                .map(|arg| self.parse_arg(arg))
                .collect();
        }
        super::split_args(raw)
            .iter()
            .filter(|arg| *arg != "void")
            .map(|arg| self.parse_arg(arg))
            .collect()
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        let raw = raw.trim();
        if let (Some(open), Some(close)) = (raw.find('('), raw.rfind(')')) {
            if open < close {
                let inner = &raw[open + 1..close];
                let stars = "*".repeat(inner.matches('*').count());
                let ty = compact_type(&inner.replace('*', ""), &stars);
                return Argument::new(raw[close + 1..].trim()).with_type(ty);
            }
        }
        match raw.rsplit_once(char::is_whitespace) {
            Some((ty, name)) => {
                let stars: String = name.chars().take_while(|&c| c == '*').collect();
                Argument::new(name.trim_start_matches('*')).with_type(compact_type(ty, &stars))
            }
            None => Argument::new(raw),
        }
    }
}
