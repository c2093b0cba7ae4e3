use serde::Serialize;

use crate::snippet::Field;

/// Variant of a callable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallableKind {
    Plain,
    Constructor,
    Getter,
    Generator,
    /// A method declared inside a class or object body.
    Member,
}

/// A classified declaration. Each recognizer yields exactly one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Declaration {
    Class {
        name: String,
        super_types: Vec<String>,
    },
    Callable {
        name: String,
        kind: CallableKind,
        /// Raw text between the parameter parentheses.
        raw_args: Option<String>,
        return_type: Option<String>,
        throws: Option<Vec<String>>,
    },
    Variable {
        name: String,
        declared_type: Option<String>,
        initializer: Option<String>,
    },
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class { name, .. }
            | Declaration::Callable { name, .. }
            | Declaration::Variable { name, .. } => name,
        }
    }
}

/// One parameter after per-language destructuring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Argument {
    /// Never absent. Empty for destructured parameters.
    pub name: String,
    pub ty: Option<String>,
    pub value: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// One logical line of a docblock.
///
/// The field order of a structured row is fixed: tag, type, name,
/// description. Whether the type and name slots exist for a tag is decided by
/// the language profile, not by the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum DocRow {
    /// Free text: summary, paragraph, header token.
    Text(Field),
    /// Explicit empty separator line.
    Blank,
    /// Simple tag with an optional free-form value, e.g. `@extends Foo`.
    Tag { tag: String, value: Option<Field> },
    /// Structured tag such as `@param {string} name - description`.
    Entry {
        tag: String,
        ty: Option<Field>,
        name: Option<Field>,
        description: Option<Field>,
    },
}

impl DocRow {
    /// Leading tag of the row, if it has one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            DocRow::Tag { tag, .. } | DocRow::Entry { tag, .. } => Some(tag),
            DocRow::Text(_) | DocRow::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, DocRow::Blank)
    }

    /// Same row with every field flattened to plain text.
    pub fn to_plain(&self) -> DocRow {
        let flat = |field: &Option<Field>| field.as_ref().map(Field::to_plain);
        match self {
            DocRow::Text(field) => DocRow::Text(field.to_plain()),
            DocRow::Blank => DocRow::Blank,
            DocRow::Tag { tag, value } => DocRow::Tag {
                tag: tag.clone(),
                value: flat(value),
            },
            DocRow::Entry {
                tag,
                ty,
                name,
                description,
            } => DocRow::Entry {
                tag: tag.clone(),
                ty: flat(ty),
                name: flat(name),
                description: flat(description),
            },
        }
    }
}

/// Ordered rows, summary first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    pub rows: Vec<DocRow>,
}

impl DocBlock {
    pub fn new(rows: Vec<DocRow>) -> Self {
        Self { rows }
    }

    /// Rows that carry content, i.e. everything except blank separators.
    pub fn content_rows(&self) -> impl Iterator<Item = &DocRow> {
        self.rows.iter().filter(|row| !row.is_blank())
    }

    /// Same block with placeholders replaced by their default text.
    pub fn to_plain(&self) -> DocBlock {
        DocBlock {
            rows: self.rows.iter().map(DocRow::to_plain).collect(),
        }
    }
}
