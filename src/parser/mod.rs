//! Declaration recognizers, one per language.
//!
//! Each parser owns a [`LanguageProfile`] and a private table of regexes.
//! Recognition is heuristic: a definition line is tried as a type, then a
//! callable, then a variable, and the first match wins.

pub mod cpp;
pub mod java;
pub mod javascript;
pub mod objc;
pub mod php;
pub mod ruby;
pub mod rust;
pub mod swift;
pub mod typescript;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::model::{Argument, Declaration};
use crate::profile::{Language, LanguageProfile};
use crate::tokenize::tokenize;

/// Parenthesised parameter list captured as `args`.
///
/// Nested parentheses are followed two levels deep; deeper nesting ends the
/// capture early.
pub(crate) const PARAMS: &str = r"\(\s*(?P<args>(?:[^()]|\((?:[^()]|\([^()]*\))*\))*)\)";

/// Names that look like calls but are control-flow statements.
const STATEMENTS: &[&str] = &["for", "foreach", "if", "switch", "while", "catch", "elseif"];

/// Non-empty definition lines scanned before giving up.
const MAX_DEFINITION_LINES: usize = 11;

// -- Regex patterns ----------------------------------------------------------

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*$").unwrap());

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*.*\*/").unwrap());

static INLINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*.*?\*/").unwrap());

static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(?:\\.|[^'\\])*'").unwrap());

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:\\.|[^"\\])*""#).unwrap());

// -- Parser trait ------------------------------------------------------------

pub trait LanguageParser {
    fn profile(&self) -> &LanguageProfile;

    /// Recognize a class-like declaration.
    fn parse_class(&self, _line: &str) -> Option<Declaration> {
        None
    }

    fn parse_function(&self, line: &str) -> Option<Declaration>;

    fn parse_var(&self, _line: &str) -> Option<Declaration> {
        None
    }

    /// Destructure one raw argument. Falls back to the raw text as the name.
    fn parse_arg(&self, raw: &str) -> Argument;

    fn parse_args(&self, raw: &str) -> Vec<Argument> {
        split_args(raw).iter().map(|arg| self.parse_arg(arg)).collect()
    }

    /// Join the lines following the insertion point into one definition.
    fn definition(&self, lines: &[&str]) -> String {
        extract_definition(lines)
    }

    /// Probe class, callable and variable recognizers in that order.
    fn parse_declaration(&self, line: &str) -> Option<Declaration> {
        let decl = self
            .parse_class(line)
            .or_else(|| self.parse_function(line))
            .or_else(|| self.parse_var(line))?;
        if is_statement(decl.name()) {
            return None;
        }
        Some(decl)
    }
}

/// Build the parser for a language.
pub fn for_language(language: Language, config: &Config) -> Box<dyn LanguageParser> {
    let profile = LanguageProfile::new(language, config);
    match language {
        Language::JavaScript => Box::new(javascript::JavaScriptParser::new(profile)),
        Language::TypeScript => Box::new(typescript::TypeScriptParser::new(profile)),
        Language::Php => Box::new(php::PhpParser::new(profile)),
        Language::Java => Box::new(java::JavaParser::new(profile)),
        Language::Cpp => Box::new(cpp::CppParser::new(profile)),
        Language::ObjC => Box::new(objc::ObjCParser::new(profile)),
        Language::Rust => Box::new(rust::RustParser::new(profile)),
        Language::Ruby => Box::new(ruby::RubyParser::new(profile)),
        Language::Swift => Box::new(swift::SwiftParser::new(profile)),
    }
}

/// Drop inline comments and split a parameter list into raw arguments.
pub(crate) fn split_args(raw: &str) -> Vec<String> {
    tokenize(&INLINE_COMMENT.replace_all(raw, ""))
}

pub fn is_statement(name: &str) -> bool {
    STATEMENTS.contains(&name)
}

/// Join source lines into a single definition string.
///
/// Comments and string contents are stripped first. Scanning stops at a line
/// ending in `;`, when parentheses close past the start, or after
/// [`MAX_DEFINITION_LINES`] non-empty lines.
pub fn extract_definition(lines: &[&str]) -> String {
    let mut definition = String::new();
    let mut counted = 0;
    let mut depth: i32 = 0;

    for line in lines {
        let line = LINE_COMMENT.replace(line, "");
        let line = BLOCK_COMMENT.replace_all(&line, "");
        let line = SINGLE_QUOTED.replace_all(&line, "''");
        let line = DOUBLE_QUOTED.replace_all(&line, "\"\"");
        let line = line.trim();

        for c in line.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
        }

        if !line.is_empty() {
            if !definition.is_empty() && needs_space(&definition, line) {
                definition.push(' ');
            }
            definition.push_str(line);
            if line.ends_with(';') {
                break;
            }
            counted += 1;
            if counted >= MAX_DEFINITION_LINES {
                break;
            }
        }

        if depth < 0 {
            break;
        }
    }

    definition
}

/// Keep words from adjacent lines apart when joining.
fn needs_space(left: &str, right: &str) -> bool {
    let word = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    left.ends_with(word) && right.starts_with(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        assert_eq!(
            extract_definition(&["function foo(a, b) {", "  return a;", "}"]),
            "function foo(a, b) {return a;"
        );
    }

    #[test]
    fn joins_multi_line_signature() {
        let lines = ["function foo(", "  a, // first", "  b", ") {"];
        assert_eq!(extract_definition(&lines), "function foo(a,b) {");
    }

    #[test]
    fn keeps_words_apart() {
        let lines = ["public static", "int count;"];
        assert_eq!(extract_definition(&lines), "public static int count;");
    }

    #[test]
    fn strips_strings_and_comments() {
        let lines = [r#"var x = "a, b"; /* note */"#];
        assert_eq!(extract_definition(&lines), r#"var x = "";"#);
        let lines = [r"var y = 'it\'s';"];
        assert_eq!(extract_definition(&lines), "var y = '';");
    }

    #[test]
    fn stops_when_parens_close_past_start() {
        let lines = ["a, b)", "function other() {}"];
        assert_eq!(extract_definition(&lines), "a, b)");
    }

    #[test]
    fn skips_blank_lines() {
        let lines = ["", "   ", "let x = 1;"];
        assert_eq!(extract_definition(&lines), "let x = 1;");
    }

    #[test]
    fn caps_scan_at_eleven_lines() {
        let lines: Vec<String> = (0..20).map(|i| format!("x{i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let def = extract_definition(&refs);
        assert!(def.ends_with("x10"));
        assert!(!def.contains("x11"));
    }

    #[test]
    fn long_parameter_list_fits_in_scan() {
        let mut lines = vec!["function f("];
        lines.extend(["a,"; 9]);
        lines.push(");");
        let def = extract_definition(&lines);
        assert!(def.starts_with("function f("));
        assert!(def.ends_with(");"));
    }

    #[test]
    fn params_pattern_handles_nesting() {
        let re = Regex::new(&format!(r"^f{PARAMS}")).unwrap();
        let caps = re.captures("f(a = g(h(1)), b)").unwrap();
        assert_eq!(&caps["args"], "a = g(h(1)), b");
    }

    #[test]
    fn statements_are_rejected() {
        let parser = for_language(Language::JavaScript, &Config::default());
        assert!(parser.parse_declaration("if (x > 0) {").is_none());
        assert!(parser.parse_declaration("while (true) {").is_none());
        assert!(parser.parse_declaration("if (x > 0)").is_none());
    }

    #[test]
    fn registry_covers_every_language() {
        let config = Config::default();
        for language in Language::ALL {
            assert_eq!(for_language(language, &config).profile().language, language);
        }
    }
}
