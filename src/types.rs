//! Resolution of schema type descriptors into TypeScript type expressions.

use crate::config::UnknownTypeMode;
use crate::swagger::{PrimitiveKind, TypeDescriptor};

/// Target names of the primitive kinds. Never imported from the definitions file.
const PRIMITIVE_NAMES: [&str; 4] = ["number", "string", "object", "boolean"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Primitive(&'static str),
    Array(Box<TsType>),
    Named(String),
    Unknown,
}

impl TsType {
    /// Renders the type, or `None` when it is unknown and the mode says to
    /// leave the annotation out.
    pub fn render(&self, mode: UnknownTypeMode) -> Option<String> {
        match self {
            TsType::Primitive(name) => Some(name.to_string()),
            TsType::Array(inner) => inner.render(mode).map(|inner| format!("{inner}[]")),
            TsType::Named(name) => Some(name.clone()),
            TsType::Unknown => match mode {
                UnknownTypeMode::Omit => None,
                UnknownTypeMode::Any => Some("any".to_string()),
                UnknownTypeMode::Unknown => Some("unknown".to_string()),
            },
        }
    }

    /// The named definition at the bottom of any array layers, if it needs importing.
    pub fn import_name(&self) -> Option<&str> {
        match self {
            TsType::Array(inner) => inner.import_name(),
            TsType::Named(name) if !is_primitive_name(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

pub fn is_primitive_name(name: &str) -> bool {
    PRIMITIVE_NAMES.contains(&name)
}

fn primitive(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Number | PrimitiveKind::Integer => "number",
        PrimitiveKind::String => "string",
        PrimitiveKind::Object => "object",
        PrimitiveKind::Boolean => "boolean",
    }
}

pub fn resolve(descriptor: &TypeDescriptor) -> TsType {
    match descriptor {
        TypeDescriptor::Primitive(kind) => TsType::Primitive(primitive(*kind)),
        TypeDescriptor::ArrayOf(inner) => match resolve(inner) {
            TsType::Unknown => TsType::Unknown,
            element => TsType::Array(Box::new(element)),
        },
        TypeDescriptor::Reference(reference) => TsType::Named(reference_name(reference)),
        TypeDescriptor::Unknown => TsType::Unknown,
    }
}

/// `#/definitions/Page«Pet»` -> `PagePet`
pub fn reference_name(reference: &str) -> String {
    let last = reference.rsplit('/').next().unwrap_or(reference);
    strip_decorations(last)
}

pub fn strip_decorations(name: &str) -> String {
    name.chars().filter(|c| !matches!(c, '«' | '»')).collect()
}
