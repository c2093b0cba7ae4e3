//! JavaScript / JSX recognizer (JSDoc).

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const ID: &str = r"[a-zA-Z_$][a-zA-Z_$0-9]*";

const MODIFIERS: &str = r"(?:\bstatic\s+)?(?P<promise>\basync\s+)?";

/// Everything that may precede a function keyword or arrow parameter list:
/// `return`, `export default`, `var`/`let`/`const`, and an optional
/// `owner.name =` / `name:` assignment target.
fn pre_function() -> String {
    format!(
        r"^\s*(?:return\s+|(?:export\s+(?:default\s+)?)?(?:(?:var|let|const)\s+)?)?(?:(?:[a-zA-Z_$][a-zA-Z_$0-9.]*\.)?(?P<name1>{ID})\s*[:=]\s*)?"
    )
}

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:export\s+(?:default\s+)?)?class\s+(?P<name>{ID})(?:\s+extends\s+(?P<extends>{ID}(?:\.{ID})*))?"
    ))
    .unwrap()
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{pre}{MODIFIERS}function(?P<generator>\s*\*)?\s*(?:\b(?P<name2>{ID}))?\s*{PARAMS}",
        pre = pre_function()
    ))
    .unwrap()
});

static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*{MODIFIERS}(?P<generator>\*)?\s*(?P<name2>{ID})\s*{PARAMS}\s*\{{"
    ))
    .unwrap()
});

static ACCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:static\s+)?(?P<getter>get|set)\s+(?P<name2>{ID})\s*{PARAMS}\s*\{{"
    ))
    .unwrap()
});

static ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{pre}(?P<promise>async\s+)?(?:(?P<arg>{ID})|{PARAMS})\s*=>",
        pre = pre_function()
    ))
    .unwrap()
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?P<name>{ID})\s*[=:]\s*(?P<value>.*?)(?:[;,]|$)")).unwrap()
});

static REST_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\.{{3}}(?P<name>{ID})")).unwrap());

static DESTRUCTURED_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(?P<object>\{.*\})|(?P<array>\[.*\]))").unwrap());

static PLAIN_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?P<name>{ID})(?:\s*=\s*(?P<value>.*))?")).unwrap()
});

// -- Parser ------------------------------------------------------------------

pub struct JavaScriptParser {
    profile: LanguageProfile,
}

impl JavaScriptParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

/// Which of the callable patterns matched.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Form {
    Function,
    Method,
    Accessor,
    Arrow,
}

impl LanguageParser for JavaScriptParser {
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
        let (caps, form) = [
            (&*FUNCTION, Form::Function),
            (&*METHOD, Form::Method),
            (&*ACCESSOR, Form::Accessor),
            (&*ARROW, Form::Arrow),
        ]
        .into_iter()
        .find_map(|(re, form)| re.captures(line).map(|caps| (caps, form)))?;

        // "name1 = function name2()" prefers name1
        let name = caps
            .name("name1")
            .or_else(|| caps.name("name2"))
            .map_or("", |m| m.as_str())
            .to_string();
        let raw_args = caps
            .name("args")
            .or_else(|| caps.name("arg"))
            .map(|m| m.as_str().trim().to_string())
            .filter(|args| !args.is_empty());

        let mut kind = match form {
            Form::Method if name == "constructor" => CallableKind::Constructor,
            Form::Method => CallableKind::Member,
            Form::Accessor if &caps["getter"] == "get" => CallableKind::Getter,
            _ => CallableKind::Plain,
        };
        if caps.name("generator").is_some() {
            kind = CallableKind::Generator;
        }
        let return_type = caps.name("promise").map(|_| "Promise".to_string());

        Some(Declaration::Callable {
            name,
            kind,
            raw_args,
            return_type,
            throws: None,
        })
    }

    fn parse_var(&self, line: &str) -> Option<Declaration> {
        let caps = VAR.captures(line)?;
        Some(Declaration::Variable {
            name: caps["name"].to_string(),
            declared_type: None,
            initializer: caps
                .name("value")
                .map(|m| m.as_str().trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        if let Some(caps) = REST_ARG.captures(raw) {
            return Argument::new(&caps["name"]).with_type("Array");
        }
        if let Some(caps) = DESTRUCTURED_ARG.captures(raw) {
            let ty = if caps.name("object").is_some() {
                "Object"
            } else {
                "Array"
            };
            return Argument::new("").with_type(ty);
        }
        if let Some(caps) = PLAIN_ARG.captures(raw) {
            let arg = Argument::new(&caps["name"]);
            return match caps.name("value") {
                Some(value) => arg.with_value(value.as_str().trim()),
                None => arg,
            };
        }
        Argument::new(raw.trim())
    }
}
