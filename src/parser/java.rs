//! Java recognizer (Javadoc, no type column).

use std::sync::LazyLock;

use regex::Regex;

use super::{LanguageParser, PARAMS};
use crate::model::{Argument, CallableKind, Declaration};
use crate::profile::LanguageProfile;

const ID: &str = r"[a-zA-Z_$][a-zA-Z_$0-9]*";

/// Words that can sit where a return type would, in statements.
const NOT_TYPES: &[&str] = &["new", "return", "throw", "else"];

// -- Regex patterns ----------------------------------------------------------

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:@\w+(?:\([^)]*\))?\s+)*(?:(?:public|protected|private|static|abstract|final|sealed|non-sealed|strictfp)\s+)*(?:class|interface|enum|record)\s+(?P<name>{ID})(?:\s*<[^>]*>)?(?:\s+extends\s+(?P<extends>{ID}))?"
    ))
    .unwrap()
});

static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?:public|protected|private|static|abstract|final|transient|synchronized|native|strictfp|default)\s+)*(?:<[^>]*>\s+)?(?:(?P<rettype>[a-zA-Z_$][<>., a-zA-Z_$0-9\[\]]+)\s+)?(?P<name>{ID})\s*{PARAMS}\s*(?:throws\s+(?P<throws>[a-zA-Z_$0-9.,\s]*))?"
    ))
    .unwrap()
});

// -- Parser ------------------------------------------------------------------

pub struct JavaParser {
    profile: LanguageProfile,
}

impl JavaParser {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }
}

impl LanguageParser for JavaParser {
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
        let caps = METHOD.captures(line)?;
        let name = caps["name"].to_string();
        let return_type: Option<String> = caps
            .name("rettype")
            .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect());

        if return_type
            .as_deref()
            .is_some_and(|ty| NOT_TYPES.contains(&ty))
        {
            return None;
        }

        let kind = if return_type.is_none() && name.starts_with(|c: char| c.is_ascii_uppercase()) {
            CallableKind::Constructor
        } else {
            CallableKind::Plain
        };

        let throws = caps.name("throws").map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        Some(Declaration::Callable {
            name,
            kind,
            raw_args: caps
                .name("args")
                .map(|m| m.as_str().trim().to_string())
                .filter(|args| !args.is_empty()),
            return_type,
            throws: throws.filter(|t| !t.is_empty()),
        })
    }

    fn parse_arg(&self, raw: &str) -> Argument {
        let words: Vec<&str> = raw
            .split_whitespace()
            .filter(|w| !w.starts_with('@') && *w != "final")
            .collect();
        match words.split_last() {
            Some((name, [])) => Argument::new(*name),
            Some((name, ty)) => Argument::new(*name).with_type(ty.join(" ")),
            None => Argument::new(raw.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::Language;

    fn parser() -> JavaParser {
        JavaParser::new(LanguageProfile::new(Language::Java, &Config::default()))
    }

    #[test]
    fn method_with_throws() {
        assert_eq!(
            parser().parse_declaration(
                "public static String read(File f, int n) throws IOException, ParseException {"
            ),
            Some(Declaration::Callable {
                name: "read".into(),
                kind: CallableKind::Plain,
                raw_args: Some("File f, int n".into()),
                return_type: Some("String".into()),
                throws: Some(vec!["IOException".into(), "ParseException".into()]),
            })
        );
    }

    #[test]
    fn void_main() {
        let Some(Declaration::Callable {
            name, return_type, ..
        }) = parser().parse_declaration("public static void main(String[] args) {")
        else {
            panic!("expected callable");
        };
        assert_eq!(name, "main");
        assert_eq!(return_type.as_deref(), Some("void"));
    }

    #[test]
    fn generic_return() {
        let Some(Declaration::Callable { return_type, .. }) =
            parser().parse_declaration("public <T> List<T> of(T first) {")
        else {
            panic!("expected callable");
        };
        assert_eq!(return_type.as_deref(), Some("List<T>"));
    }

    #[test]
    fn constructor() {
        let Some(Declaration::Callable { kind, .. }) =
            parser().parse_declaration("public Account(String owner) {")
        else {
            panic!("expected callable");
        };
        assert_eq!(kind, CallableKind::Constructor);
    }

    #[test]
    fn class_declaration() {
        assert_eq!(
            parser().parse_declaration("public final class Account extends Entity {"),
            Some(Declaration::Class {
                name: "Account".into(),
                super_types: vec!["Entity".into()],
            })
        );
    }

    #[test]
    fn statements_are_not_declarations() {
        assert_eq!(parser().parse_declaration("return compute(x);"), None);
        assert_eq!(parser().parse_declaration("for (int i = 0; i < n; i++) {"), None);
    }

    #[test]
    fn arguments() {
        let p = parser();
        assert_eq!(p.parse_arg("int n"), Argument::new("n").with_type("int"));
        assert_eq!(
            p.parse_arg("final @NonNull Map<String, Integer> counts"),
            Argument::new("counts").with_type("Map<String, Integer>")
        );
        assert_eq!(p.parse_arg("String... names"), Argument::new("names").with_type("String..."));
        assert_eq!(p.parse_arg("x"), Argument::new("x"));
    }
}
