//! C / C++ / LSL recognizer (Doxygen).

use std::sync::LazyLock;

use regex::Regex;

use super::{split_args, LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;
use crate::tokenize::tokenize;

const ID: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";

/// Keywords that can sit in the return type slot of a statement.
const NOT_TYPES: &[&str] = &["return", "else", "new", "delete", "throw", "case", "goto"];

/// Qualified identifier with an optional template argument list.
fn var_ident() -> String {
    format!(r"{ID}(?:::{ID})*(?:\s*<[^<>;()]*>)?")
}

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:template\s*<[^>]*>\s*)?(?:class|struct|union)\s+(?:\[\[[^\]]*\]\]\s*|alignas\([^)]*\)\s*|[A-Z_][A-Z0-9_]*\s+)*(?P<name>{ID})\s*(?:final\s*)?(?::\s*(?P<bases>[^{{;]+))?"
    ))
    .unwrap()
});

static BASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:public|protected|private|virtual)\s+)*(?P<name>.+)$").unwrap()
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?:static|inline|virtual|explicit|constexpr|extern|friend|const)\s+)*(?:(?P<rettype>{var})(?P<ptr>[&*\s]+))?(?P<name>~?{var})\s*{PARAMS}",
        var = var_ident()
    ))
    .unwrap()
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:(?:static|const|constexpr|extern|volatile|mutable|inline)\s+)*(?P<type>{var})(?P<ptr>[&*\s]+)(?P<name>{ID})(?:\[[^\]]*\])?\s*(?:=\s*(?P<value>[^;]*))?;?\s*$",
        var = var_ident()
    ))
    .unwrap()
});

static ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<type>.*?)(?P<ptr>[&*\s]*)(?P<name>{ID})\s*(?P<array>\[[^\]]*\])?\s*(?:=\s*(?P<value>.*))?$"
    ))
    .unwrap()
});

// -- Parser ------------------------------------------------------------------

pub struct CppParser {
    profile: LanguageProfile,
}

impl CppParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

/// `char` + ` *` becomes `char*`.
fn pointer_type(base: &str, ptr: &str) -> String {
    let ptr: String = ptr.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{}{ptr}", base.trim())
}

impl LanguageParser for CppParser {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn parse_class(&self, line: &str) -> Option<Declaration> {
        let caps = CLASS.captures(line)?;
        let super_types = caps
            .name("bases")
            .map(|bases| {
                tokenize(bases.as_str())
                    .iter()
                    .filter_map(|base| BASE.captures(base))
                    .map(|base| base["name"].trim().to_string())
                    .collect()
            })
            .unwrap_or_default();
        Some(Declaration::Class {
            name: caps["name"].to_string(),
            super_types,
        })
    }

    fn parse_function(&self, line: &str) -> Option<Declaration> {
        let caps = FUNCTION.captures(line)?;
        let return_type = caps
            .name("rettype")
            .map(|ty| pointer_type(ty.as_str(), caps.name("ptr").map_or("", |m| m.as_str())));

        if return_type
            .as_deref()
            .is_some_and(|ty| NOT_TYPES.contains(&ty))
        {
            return None;
        }

        // Constructors and destructors have no return type.
        let kind = if return_type.is_none() {
            CallableKind::Constructor
        } else {
            CallableKind::Plain
        };

        Some(Declaration::Callable {
            name: caps["name"].to_string(),
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
        if NOT_TYPES.contains(&&caps["type"]) {
            return None;
        }
        Some(Declaration::Variable {
            name: caps["name"].to_string(),
            declared_type: Some(pointer_type(&caps["type"], &caps["ptr"])),
            initializer: caps
                .name("value")
                .map(|m| m.as_str().trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    fn parse_args(&self, raw: &str) -> Vec<Argument> {
        split_args(raw)
            .iter()
            .filter(|arg| *arg != "void" && *arg != "...")
            .map(|arg| self.parse_arg(arg))
            .collect()
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        let Some(caps) = ARG.captures(raw.trim()) else {
            return Argument::new(raw.trim());
        };
        let mut arg = Argument::new(&caps["name"]);
        if !caps["type"].trim().is_empty() {
            let mut ty = pointer_type(&caps["type"], &caps["ptr"]);
            if caps.name("array").is_some() {
                ty.push_str("[]");
            }
            arg.ty = Some(ty);
        }
        arg.value = caps
            .name("value")
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty());
        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::Language;

    fn parser() -> CppParser {
        CppParser::new(LanguageProfile::new(Language::Cpp, &Config::default()))
    }

    #[test]
    fn function_with_pointer_return() {
        assert_eq!(
            parser().parse_declaration("static const char *label(int code, bool upper) {"),
            Some(Declaration::Callable {
                name: "label".into(),
                kind: CallableKind::Plain,
                raw_args: Some("int code, bool upper".into()),
                return_type: Some("char*".into()),
                throws: None,
            })
        );
    }

    #[test]
    fn qualified_names() {
        let Some(Declaration::Callable {
            name, return_type, ..
        }) = parser().parse_declaration("virtual std::string name() const override;")
        else {
            panic!("expected callable");
        };
        assert_eq!(name, "name");
        assert_eq!(return_type.as_deref(), Some("std::string"));
    }

    #[test]
    fn constructor_has_no_return_type() {
        let Some(Declaration::Callable {
            name, kind, return_type, ..
        }) = parser().parse_declaration("explicit Widget(int size)")
        else {
            panic!("expected callable");
        };
        assert_eq!(name, "Widget");
        assert_eq!(kind, CallableKind::Constructor);
        assert_eq!(return_type, None);
    }

    #[test]
    fn class_with_base_list() {
        assert_eq!(
            parser().parse_declaration("class Derived : public Base, private Mixin<int, 2> {"),
            Some(Declaration::Class {
                name: "Derived".into(),
                super_types: vec!["Base".into(), "Mixin<int, 2>".into()],
            })
        );
        assert_eq!(
            parser().parse_declaration("struct Point {"),
            Some(Declaration::Class {
                name: "Point".into(),
                super_types: vec![],
            })
        );
    }

    #[test]
    fn variables() {
        assert_eq!(
            parser().parse_declaration("static unsigned count = 0;"),
            Some(Declaration::Variable {
                name: "count".into(),
                declared_type: Some("unsigned".into()),
                initializer: Some("0".into()),
            })
        );
        assert_eq!(parser().parse_declaration("return result;"), None);
        assert_eq!(parser().parse_declaration("return compute(x);"), None);
        assert_eq!(parser().parse_declaration("if (ready) {"), None);
    }

    #[test]
    fn void_and_variadic_parameters_are_skipped() {
        assert!(parser().parse_args("void").is_empty());
        assert_eq!(
            parser().parse_args("const char *fmt, ..."),
            vec![Argument::new("fmt").with_type("const char*")]
        );
    }

    #[test]
    fn arguments() {
        let p = parser();
        assert_eq!(p.parse_arg("int x"), Argument::new("x").with_type("int"));
        assert_eq!(
            p.parse_arg("const std::string& name"),
            Argument::new("name").with_type("const std::string&")
        );
        assert_eq!(p.parse_arg("int values[16]"), Argument::new("values").with_type("int[]"));
        assert_eq!(
            p.parse_arg("double ratio = 0.5"),
            Argument::new("ratio").with_type("double").with_value("0.5")
        );
        assert_eq!(p.parse_arg("n"), Argument::new("n"));
        assert_eq!(p.parse_arg("void (*cb)(int)"), Argument::new("void (*cb)(int)"));
    }
}
