//! Serde model of the Swagger 2 document the generator consumes.
//!
//! Only the parts the generator reads are modelled; every other key is ignored.
//! Maps are `IndexMap`s so definitions, paths and properties keep document order.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// HTTP methods a path item may declare operations for.
const OPERATION_METHODS: [&str; 7] = ["get", "put", "post", "delete", "options", "head", "patch"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    #[serde(default)]
    pub base_path: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaObject>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

impl SchemaDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaObject {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDescriptor>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl SchemaObject {
    pub fn is_object(&self) -> bool {
        self.kind.as_deref() == Some("object")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDescriptor {
    pub description: Option<String>,
    #[serde(flatten)]
    pub ty: TypeDescriptor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Number,
    Integer,
    String,
    Object,
    Boolean,
}

impl PrimitiveKind {
    fn parse(kind: &str) -> Option<Self> {
        match kind {
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "string" => Some(Self::String),
            "object" => Some(Self::Object),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

/// The type of a property, parameter or response body.
///
/// Exactly one shape applies. Anything the document describes in a way that
/// fits none of them (or several at once) is `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTypeDescriptor")]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    ArrayOf(Box<TypeDescriptor>),
    Reference(String),
    Unknown,
}

impl TypeDescriptor {
    /// Whether this is a reference itself or an array whose innermost element is one.
    pub fn references_definition(&self) -> bool {
        match self {
            TypeDescriptor::Reference(_) => true,
            TypeDescriptor::ArrayOf(inner) => inner.references_definition(),
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTypeDescriptor {
    #[serde(rename = "type")]
    kind: Option<String>,
    items: Option<Box<RawTypeDescriptor>>,
    #[serde(rename = "$ref")]
    reference: Option<String>,
}

impl From<RawTypeDescriptor> for TypeDescriptor {
    fn from(raw: RawTypeDescriptor) -> Self {
        match (raw.kind, raw.reference) {
            (None, Some(reference)) => TypeDescriptor::Reference(reference),
            (Some(kind), None) if kind == "array" => match raw.items {
                Some(items) => TypeDescriptor::ArrayOf(Box::new((*items).into())),
                None => TypeDescriptor::Unknown,
            },
            (Some(kind), None) => PrimitiveKind::parse(&kind)
                .map(TypeDescriptor::Primitive)
                .unwrap_or(TypeDescriptor::Unknown),
            _ => TypeDescriptor::Unknown,
        }
    }
}

/// Operations declared for one URL path pattern, keyed by lowercase HTTP method.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "IndexMap<String, Value>")]
pub struct PathItem {
    /// Path-level parameters inherited by every operation below.
    pub parameters: Vec<ParameterDescriptor>,
    pub operations: IndexMap<String, OperationDescriptor>,
}

impl TryFrom<IndexMap<String, Value>> for PathItem {
    type Error = serde_json::Error;

    fn try_from(raw: IndexMap<String, Value>) -> std::result::Result<Self, Self::Error> {
        let mut item = PathItem::default();
        for (key, value) in raw {
            if key == "parameters" {
                item.parameters = serde_json::from_value(value)?;
            } else if OPERATION_METHODS.contains(&key.as_str()) {
                item.operations.insert(key, serde_json::from_value(value)?);
            }
        }
        Ok(item)
    }
}

impl PathItem {
    /// Parameters in effect for `operation`: inherited path-level ones the
    /// operation does not redeclare, followed by the operation's own.
    pub fn parameters_for<'a>(&'a self, operation: &'a OperationDescriptor) -> Vec<&'a ParameterDescriptor> {
        self.parameters
            .iter()
            .filter(|inherited| {
                !operation
                    .parameters
                    .iter()
                    .any(|own| own.name == inherited.name && own.location == inherited.location)
            })
            .chain(operation.parameters.iter())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationDescriptor {
    #[serde(default)]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub responses: IndexMap<String, ResponseDescriptor>,
}

impl OperationDescriptor {
    /// Schema of the `"200"` response, the only one the generator types.
    pub fn success_schema(&self) -> Option<&TypeDescriptor> {
        self.responses.get("200").and_then(|response| response.schema.as_ref())
    }

    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .or(self.summary.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseDescriptor {
    pub schema: Option<TypeDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Path,
    Body,
    Header,
    FormData,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    /// Body parameters describe their type here.
    pub schema: Option<TypeDescriptor>,
    /// Every other location describes its type inline.
    #[serde(flatten)]
    pub ty: TypeDescriptor,
}
