//! PHP recognizer (PHPDoc).

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const ID: &str = r"[a-zA-Z_$\x7f-\xff][a-zA-Z0-9_$\x7f-\xff]*";

/// Words that can precede a variable without being its type.
const NOT_TYPES: &[&str] = &[
    "return", "echo", "print", "new", "use", "namespace", "throw", "yield", "include",
    "require", "global", "clone", "case", "goto",
];

fn var_id() -> String {
    format!(r"{ID}(?:->{ID})*")
}

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:(?:abstract|final|readonly)\s+)*(?:class|interface|trait|enum)\s+(?P<name>{ID})(?:\s+extends\s+(?P<extends>\\?[A-Za-z_][A-Za-z0-9_\\]*))?"
    ))
    .unwrap()
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:(?:final|abstract|public|protected|private|static)\s+)*function\s+&?\s*(?P<name>{ID})\s*{PARAMS}(?:\s*:\s*(?P<nullable>\?)?(?P<rettype>[a-zA-Z0-9_\\|]+))?"
    ))
    .unwrap()
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:(?:var|static|const|final|public|private|protected|readonly)\s+)*(?:(?P<nullable>\?)?(?P<type>[A-Za-z_\\][A-Za-z0-9_\\|]*)\s+)?(?P<name>\$?{var})(?:\s*=>?\s*(?P<value>.*?)\s*(?:[;,]|$))?",
        var = var_id()
    ))
    .unwrap()
});

static PROMOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(?:public|private|protected|readonly)\s+)*").unwrap());

static TYPED_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<nullable>\?)?(?P<type>[A-Za-z_\\][A-Za-z0-9_\\|]*)\s+&?(?P<splat>\.{{3}})?(?P<name>\${ID})(?:\s*=\s*(?P<value>.*))?"
    ))
    .unwrap()
});

static SPLAT_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"&?\.{{3}}(?P<name>\$?{var})", var = var_id())).unwrap()
});

static PLAIN_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"&?(?P<name>\$?{var})(?:\s*=\s*(?P<value>.*))?",
        var = var_id()
    ))
    .unwrap()
});

// -- Parser ------------------------------------------------------------------

pub struct PhpParser {
    profile: LanguageProfile,
}

impl PhpParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

fn nullable(ty: &str, is_nullable: bool) -> String {
    if is_nullable {
        format!("{ty}|null")
    } else {
        ty.to_string()
    }
}

impl LanguageParser for PhpParser {
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
        let caps = FUNCTION.captures(line)?;
        let name = caps["name"].to_string();

        // A missing return type documents as void.
        let ret = caps.name("rettype").map_or("void", |m| m.as_str());
        let mut return_type = Some(nullable(ret, caps.name("nullable").is_some()));

        let kind = if name == "__construct" {
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
        if caps
            .name("type")
            .is_some_and(|ty| NOT_TYPES.contains(&ty.as_str()))
        {
            return None;
        }
        Some(Declaration::Variable {
            name: caps["name"].to_string(),
            declared_type: caps
                .name("type")
                .map(|ty| nullable(ty.as_str(), caps.name("nullable").is_some())),
            initializer: caps
                .name("value")
                .map(|m| m.as_str().trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        let raw = PROMOTED.replace(raw.trim(), "");

        if let Some(caps) = TYPED_ARG.captures(&raw) {
            let mut ty = caps["type"].to_string();
            if caps.name("splat").is_some() {
                ty.push_str("[]");
            }
            let arg = Argument::new(&caps["name"])
                .with_type(nullable(&ty, caps.name("nullable").is_some()));
            return match caps.name("value") {
                Some(value) => arg.with_value(value.as_str().trim()),
                None => arg,
            };
        }
        if let Some(caps) = SPLAT_ARG.captures(&raw) {
            return Argument::new(&caps["name"]).with_type("Array");
        }
        if let Some(caps) = PLAIN_ARG.captures(&raw) {
            let arg = Argument::new(&caps["name"]);
            return match caps.name("value") {
                Some(value) => arg.with_value(value.as_str().trim()),
                None => arg,
            };
        }
        Argument::new(raw.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::Language;

    fn parser() -> PhpParser {
        PhpParser::new(LanguageProfile::new(Language::Php, &Config::default()))
    }

    #[test]
    fn function_without_return_type_is_void() {
        assert_eq!(
            parser().parse_declaration("public function save($data) {"),
            Some(Declaration::Callable {
                name: "save".into(),
                kind: CallableKind::Plain,
                raw_args: Some("$data".into()),
                return_type: Some("void".into()),
                throws: None,
            })
        );
    }

    #[test]
    fn nullable_return_type() {
        let Some(Declaration::Callable { return_type, .. }) =
            parser().parse_declaration("final public static function find(int $id): ?User")
        else {
            panic!("expected callable");
        };
        assert_eq!(return_type.as_deref(), Some("User|null"));
    }

    #[test]
    fn constructor() {
        let Some(Declaration::Callable {
            kind, return_type, ..
        }) = parser().parse_declaration("public function __construct(private Clock $clock)")
        else {
            panic!("expected callable");
        };
        assert_eq!(kind, CallableKind::Constructor);
        assert_eq!(return_type, None);
    }

    #[test]
    fn classes() {
        assert_eq!(
            parser().parse_declaration("abstract class Repo extends \\Base\\Model {"),
            Some(Declaration::Class {
                name: "Repo".into(),
                super_types: vec!["\\Base\\Model".into()],
            })
        );
    }

    #[test]
    fn variables() {
        let p = parser();
        assert_eq!(
            p.parse_declaration("$count = 5;"),
            Some(Declaration::Variable {
                name: "$count".into(),
                declared_type: None,
                initializer: Some("5".into()),
            })
        );
        assert_eq!(
            p.parse_declaration("public ?string $name;"),
            Some(Declaration::Variable {
                name: "$name".into(),
                declared_type: Some("string|null".into()),
                initializer: None,
            })
        );
        assert_eq!(
            p.parse_declaration("const LIMIT = 10;"),
            Some(Declaration::Variable {
                name: "LIMIT".into(),
                declared_type: None,
                initializer: Some("10".into()),
            })
        );
        assert_eq!(p.parse_declaration("return $x;"), None);
    }

    #[test]
    fn arguments() {
        let p = parser();
        assert_eq!(p.parse_arg("int $x"), Argument::new("$x").with_type("int"));
        assert_eq!(
            p.parse_arg("?Foo $f = null"),
            Argument::new("$f").with_type("Foo|null").with_value("null")
        );
        assert_eq!(
            p.parse_arg("string ...$parts"),
            Argument::new("$parts").with_type("string[]")
        );
        assert_eq!(p.parse_arg("...$args"), Argument::new("$args").with_type("Array"));
        assert_eq!(p.parse_arg("$n = 5"), Argument::new("$n").with_value("5"));
        assert_eq!(p.parse_arg("&$ref"), Argument::new("$ref"));
        assert_eq!(
            p.parse_arg("private readonly Clock $clock"),
            Argument::new("$clock").with_type("Clock")
        );
        assert_eq!(
            p.parse_arg("\\App\\User $user"),
            Argument::new("$user").with_type("\\App\\User")
        );
    }
}
