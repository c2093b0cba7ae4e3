//! Type guessing from literal values and naming conventions.

use std::sync::LazyLock;

use regex::Regex;

use crate::profile::NumberTypes;

// -- Regex patterns ----------------------------------------------------------

static BOOLEAN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[$_]?(?:is|has)[A-Z_]").unwrap());

static CALLBACK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[$_]?(?:cb|callback|done|next|fn)$").unwrap());

static REGEXP_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RegExp|^/[^/*].*/[a-z]*$").unwrap());

static NEW_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^new\s+(\\?[A-Za-z_$][A-Za-z0-9_$\\.]*)").unwrap());

// -- Public API --------------------------------------------------------------

/// Guess a type from an initializer or default value.
pub fn infer_from_value(value: &str, numbers: NumberTypes) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if is_numeric(value) {
        let ty = match numbers {
            NumberTypes::Number => "number",
            NumberTypes::IntegerFloat if value.contains('.') => "float",
            NumberTypes::IntegerFloat => "integer",
        };
        return Some(ty.to_string());
    }
    if value.starts_with(['\'', '"', '`']) {
        return Some("string".to_string());
    }
    if value.starts_with("array") || value.starts_with('[') {
        return Some("Array".to_string());
    }
    if value.starts_with('{') {
        return Some("Object".to_string());
    }
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return Some("boolean".to_string());
    }
    if REGEXP_VALUE.is_match(value) {
        return Some("RegExp".to_string());
    }
    NEW_VALUE
        .captures(value)
        .map(|caps| caps[1].to_string())
}

/// Guess a type from naming conventions (`isReady`, `callback`).
pub fn infer_from_name(name: &str) -> Option<&'static str> {
    if BOOLEAN_NAME.is_match(name) {
        return Some("boolean");
    }
    if CALLBACK_NAME.is_match(name) {
        return Some("function");
    }
    None
}

/// Resolve a type: declared, then value, then name, then `type`.
pub fn resolve_type(
    declared: Option<&str>,
    value: Option<&str>,
    name: &str,
    numbers: NumberTypes,
) -> String {
    declared
        .map(str::trim)
        .filter(|ty| !ty.is_empty())
        .map(str::to_string)
        .or_else(|| value.and_then(|v| infer_from_value(v, numbers)))
        .or_else(|| infer_from_name(name).map(str::to_string))
        .unwrap_or_else(|| "type".to_string())
}

/// Numeric literal in any of the common source notations.
fn is_numeric(value: &str) -> bool {
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    let lower = unsigned.to_ascii_lowercase();

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && unsigned.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values() {
        assert_eq!(infer_from_value("42", NumberTypes::Number).as_deref(), Some("number"));
        assert_eq!(infer_from_value("-1.5", NumberTypes::Number).as_deref(), Some("number"));
        assert_eq!(infer_from_value("0xff", NumberTypes::Number).as_deref(), Some("number"));
        assert_eq!(infer_from_value("1e3", NumberTypes::Number).as_deref(), Some("number"));
    }

    #[test]
    fn split_numbers() {
        assert_eq!(
            infer_from_value("42", NumberTypes::IntegerFloat).as_deref(),
            Some("integer")
        );
        assert_eq!(
            infer_from_value("4.2", NumberTypes::IntegerFloat).as_deref(),
            Some("float")
        );
    }

    #[test]
    fn not_numbers() {
        assert_eq!(infer_from_value("NaN", NumberTypes::Number), None);
        assert_eq!(infer_from_value("inf", NumberTypes::Number), None);
        assert_eq!(infer_from_value("0x", NumberTypes::Number), None);
    }

    #[test]
    fn literal_shapes() {
        let n = NumberTypes::Number;
        assert_eq!(infer_from_value("'a'", n).as_deref(), Some("string"));
        assert_eq!(infer_from_value("\"a\"", n).as_deref(), Some("string"));
        assert_eq!(infer_from_value("`a`", n).as_deref(), Some("string"));
        assert_eq!(infer_from_value("[1, 2]", n).as_deref(), Some("Array"));
        assert_eq!(infer_from_value("array()", n).as_deref(), Some("Array"));
        assert_eq!(infer_from_value("{}", n).as_deref(), Some("Object"));
        assert_eq!(infer_from_value("TRUE", n).as_deref(), Some("boolean"));
        assert_eq!(infer_from_value("/ab+c/i", n).as_deref(), Some("RegExp"));
        assert_eq!(infer_from_value("RegExp('x')", n).as_deref(), Some("RegExp"));
        assert_eq!(infer_from_value("new Map()", n).as_deref(), Some("Map"));
        assert_eq!(infer_from_value("new \\App\\User()", n).as_deref(), Some("\\App\\User"));
        assert_eq!(infer_from_value("foo()", n), None);
    }

    #[test]
    fn names() {
        assert_eq!(infer_from_name("isValid"), Some("boolean"));
        assert_eq!(infer_from_name("$hasItems"), Some("boolean"));
        assert_eq!(infer_from_name("_is_set"), Some("boolean"));
        assert_eq!(infer_from_name("is_set"), Some("boolean"));
        assert_eq!(infer_from_name("callback"), Some("function"));
        assert_eq!(infer_from_name("next"), Some("function"));
        assert_eq!(infer_from_name("nextPage"), None);
        assert_eq!(infer_from_name("island"), None);
    }

    #[test]
    fn resolution_order() {
        let n = NumberTypes::Number;
        assert_eq!(resolve_type(Some("Foo"), Some("42"), "isX", n), "Foo");
        assert_eq!(resolve_type(None, Some("42"), "isX", n), "number");
        assert_eq!(resolve_type(None, None, "isValid", n), "boolean");
        assert_eq!(resolve_type(None, Some("foo()"), "x", n), "type");
        assert_eq!(resolve_type(Some("  "), None, "x", n), "type");
    }
}
