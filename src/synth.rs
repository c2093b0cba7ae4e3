//! Declaration to docblock rows.
//!
//! Placeholders are numbered from 0 in emission order: summary first, then
//! each row left to right.

use crate::infer::{infer_from_name, resolve_type};
use crate::model::{CallableKind, Declaration, DocBlock, DocRow};
use crate::parser::{is_statement, LanguageParser};
use crate::profile::LanguageProfile;
use crate::snippet::{Field, TabStops};

/// Return types that mean "nothing", suppressed when there is no type column.
const VOID_TYPES: &[&str] = &["void", "Void", "()", ""];

/// Build the rows documenting `decl`. `None` for control-flow statements.
pub fn synthesize(decl: &Declaration, parser: &dyn LanguageParser) -> Option<DocBlock> {
    if is_statement(decl.name()) {
        return None;
    }
    let profile = parser.profile();
    let mut stops = TabStops::new();
    let mut rows = vec![DocRow::Text(Field::placeholder(
        &mut stops,
        profile.tags.summary,
    ))];

    match decl {
        Declaration::Class { super_types, .. } => {
            if let Some(extends) = profile.tags.extends {
                let count = if profile.multiple_supertypes {
                    super_types.len()
                } else {
                    super_types.len().min(1)
                };
                rows.extend(super_types.iter().take(count).map(|ty| DocRow::Tag {
                    tag: extends.to_string(),
                    value: Some(Field::text(ty)),
                }));
            }
        }
        Declaration::Callable {
            name,
            kind,
            raw_args,
            return_type,
            throws,
        } => {
            callable_rows(
                &mut rows,
                &mut stops,
                parser,
                CallableRows {
                    name,
                    kind: *kind,
                    raw_args: raw_args.as_deref(),
                    return_type: return_type.as_deref(),
                    throws: throws.as_deref().unwrap_or_default(),
                },
            );
        }
        Declaration::Variable {
            name,
            declared_type,
            initializer,
        } => {
            if let (Some(var), true) = (profile.tags.var, profile.has_type_column()) {
                let ty = resolve_type(
                    declared_type.as_deref(),
                    initializer.as_deref(),
                    name,
                    profile.numbers,
                );
                rows.push(DocRow::Entry {
                    tag: var.to_string(),
                    ty: Some(Field::placeholder(&mut stops, ty)),
                    name: None,
                    description: None,
                });
            }
        }
    }

    Some(DocBlock::new(rows))
}

struct CallableRows<'a> {
    name: &'a str,
    kind: CallableKind,
    raw_args: Option<&'a str>,
    return_type: Option<&'a str>,
    throws: &'a [String],
}

fn callable_rows(
    rows: &mut Vec<DocRow>,
    stops: &mut TabStops,
    parser: &dyn LanguageParser,
    callable: CallableRows<'_>,
) {
    let profile = parser.profile();
    let typed = profile.has_type_column();

    if matches!(callable.kind, CallableKind::Member | CallableKind::Getter) {
        if let Some(member) = profile.tags.member {
            rows.push(DocRow::Tag {
                tag: member.to_string(),
                value: Some(Field::placeholder(stops, "parent")),
            });
        }
    }

    let args = callable
        .raw_args
        .map(|raw| parser.parse_args(raw))
        .unwrap_or_default();
    for arg in &args {
        let ty = typed.then(|| {
            let ty = resolve_type(
                arg.ty.as_deref(),
                arg.value.as_deref(),
                &arg.name,
                profile.numbers,
            );
            Field::placeholder(stops, ty)
        });
        let name = if arg.name.is_empty() {
            Field::placeholder(stops, "name")
        } else {
            Field::text(&arg.name)
        };
        rows.push(DocRow::Entry {
            tag: profile.tags.param.to_string(),
            ty,
            name: Some(name),
            description: Some(Field::placeholder(stops, "description")),
        });
    }

    for exception in callable.throws {
        let (ty, name) = if typed {
            (Some(Field::placeholder(stops, exception)), None)
        } else {
            (None, Some(Field::text(exception)))
        };
        rows.push(DocRow::Entry {
            tag: profile.tags.throws.to_string(),
            ty,
            name,
            description: Some(Field::placeholder(stops, "description")),
        });
    }

    if let Some(row) = trailing_row(profile, stops, &callable) {
        rows.push(row);
    }
}

/// The returns / yields / type row closing a callable.
fn trailing_row(
    profile: &LanguageProfile,
    stops: &mut TabStops,
    callable: &CallableRows<'_>,
) -> Option<DocRow> {
    let typed = profile.has_type_column();
    let (tag, ty) = match callable.kind {
        CallableKind::Constructor => return None,
        CallableKind::Getter => (
            profile.tags.var.unwrap_or(profile.tags.ret),
            Some(resolve_type(
                callable.return_type,
                None,
                callable.name,
                profile.numbers,
            )),
        ),
        CallableKind::Generator => (
            profile.tags.yields.unwrap_or(profile.tags.ret),
            Some(resolve_type(
                callable.return_type,
                None,
                callable.name,
                profile.numbers,
            )),
        ),
        CallableKind::Plain | CallableKind::Member => (
            profile.tags.ret,
            callable
                .return_type
                .map(str::to_string)
                .or_else(|| infer_from_name(callable.name).map(str::to_string)),
        ),
    };

    let ty = ty?;
    if !typed && VOID_TYPES.contains(&ty.trim()) {
        return None;
    }

    let ty = typed.then(|| Field::placeholder(stops, ty));
    // A getter's type row carries no description.
    let description = (callable.kind != CallableKind::Getter || profile.tags.var.is_none())
        .then(|| Field::placeholder(stops, "description"));
    Some(DocRow::Entry {
        tag: tag.to_string(),
        ty,
        name: None,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::parser::for_language;
    use crate::profile::Language;

    fn rows(language: Language, line: &str) -> Vec<DocRow> {
        let parser = for_language(language, &Config::default());
        let decl = parser.parse_declaration(line).expect("declaration");
        synthesize(&decl, parser.as_ref()).expect("block").to_plain().rows
    }

    fn entry(tag: &str, ty: Option<&str>, name: Option<&str>, desc: Option<&str>) -> DocRow {
        DocRow::Entry {
            tag: tag.into(),
            ty: ty.map(Field::text),
            name: name.map(Field::text),
            description: desc.map(Field::text),
        }
    }

    #[test]
    fn javascript_function() {
        assert_eq!(
            rows(Language::JavaScript, "function save(isDirty, retries = 3, cb) {"),
            vec![
                DocRow::Text(Field::text("summary")),
                entry("@param", Some("boolean"), Some("isDirty"), Some("description")),
                entry("@param", Some("number"), Some("retries"), Some("description")),
                entry("@param", Some("function"), Some("cb"), Some("description")),
            ]
        );
    }

    #[test]
    fn placeholders_are_sequential() {
        let parser = for_language(Language::JavaScript, &Config::default());
        let decl = parser.parse_declaration("function f(a, b) {").expect("declaration");
        let block = synthesize(&decl, parser.as_ref()).expect("block");
        let indices: Vec<usize> = block
            .rows
            .iter()
            .flat_map(|row| match row {
                DocRow::Text(field) => vec![field.clone()],
                DocRow::Entry {
                    ty,
                    name,
                    description,
                    ..
                } => [ty, name, description].into_iter().flatten().cloned().collect(),
                _ => vec![],
            })
            .flat_map(|field| field.segments)
            .filter_map(|segment| match segment {
                crate::snippet::Segment::Placeholder { index, .. } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_parameters_means_no_param_rows() {
        assert_eq!(
            rows(Language::JavaScript, "function tick() {"),
            vec![DocRow::Text(Field::text("summary"))]
        );
    }

    #[test]
    fn declared_return_type() {
        let rows = rows(Language::TypeScript, "function size(): number {");
        assert_eq!(rows[1], entry("@returns", Some("number"), None, Some("description")));
    }

    #[test]
    fn predicate_name_implies_boolean_return() {
        let rows = rows(Language::JavaScript, "function isReady() {");
        assert_eq!(rows[1], entry("@returns", Some("boolean"), None, Some("description")));
    }

    #[test]
    fn void_return_dropped_without_type_column() {
        assert_eq!(
            rows(Language::Java, "public void run() {"),
            vec![DocRow::Text(Field::text("summary"))]
        );
        let rows = rows(Language::Java, "public int size() {");
        assert_eq!(rows[1], entry("@return", None, None, Some("description")));
    }

    #[test]
    fn php_void_kept_with_type_column() {
        let rows = rows(Language::Php, "function reset() {");
        assert_eq!(rows[1], entry("@return", Some("void"), None, Some("description")));
    }

    #[test]
    fn java_throws() {
        let rows = rows(Language::Java, "void open(String path) throws IOException {");
        assert_eq!(
            rows,
            vec![
                DocRow::Text(Field::text("summary")),
                entry("@param", None, Some("path"), Some("description")),
                entry("@throws", None, Some("IOException"), Some("description")),
            ]
        );
    }

    #[test]
    fn constructors_have_no_return_row() {
        let rows = rows(Language::JavaScript, "  constructor(a) {");
        assert_eq!(rows.last().and_then(DocRow::tag), Some("@param"));
    }

    #[test]
    fn members_and_getters() {
        let member = rows(Language::JavaScript, "  render(el) {");
        assert_eq!(
            member[1],
            DocRow::Tag {
                tag: "@memberof".into(),
                value: Some(Field::text("parent")),
            }
        );
        let getter = rows(Language::JavaScript, "  get size() {");
        assert_eq!(getter.last(), Some(&entry("@type", Some("type"), None, None)));
    }

    #[test]
    fn generators_yield() {
        let rows = rows(Language::JavaScript, "function* ids() {");
        assert_eq!(rows[1], entry("@yields", Some("type"), None, Some("description")));
    }

    #[test]
    fn classes() {
        assert_eq!(
            rows(Language::JavaScript, "class Foo extends Bar {"),
            vec![
                DocRow::Text(Field::text("summary")),
                DocRow::Tag {
                    tag: "@extends".into(),
                    value: Some(Field::text("Bar")),
                },
            ]
        );
        let cpp = rows(Language::Cpp, "class D : public A, public B {");
        assert_eq!(cpp.len(), 3);
        // Java has no extends tag.
        assert_eq!(rows(Language::Java, "class A extends B {").len(), 1);
    }

    #[test]
    fn variables() {
        assert_eq!(
            rows(Language::JavaScript, "var count = 42;"),
            vec![
                DocRow::Text(Field::text("summary")),
                entry("@type", Some("number"), None, None),
            ]
        );
        assert_eq!(rows(Language::Cpp, "int count = 0;").len(), 1);
    }

    #[test]
    fn destructured_parameter_gets_name_placeholder() {
        let rows = rows(Language::JavaScript, "function f({ a, b }) {");
        assert_eq!(rows[1], entry("@param", Some("Object"), Some("name"), Some("description")));
    }
}
