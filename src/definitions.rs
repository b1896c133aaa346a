//! `export interface` blocks for the document's named object definitions.

use crate::config::GeneratorOptions;
use crate::swagger::{SchemaDocument, SchemaObject};
use crate::types::{resolve, strip_decorations, TsType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub fields: Vec<InterfaceField>,
}

impl InterfaceDecl {
    /// Builds the declaration, or `None` for definitions that are not objects.
    pub fn from_schema(name: &str, schema: &SchemaObject, options: &GeneratorOptions) -> Option<Self> {
        if !schema.is_object() {
            return None;
        }
        let fields = schema
            .properties
            .iter()
            .map(|(prop_name, prop)| InterfaceField {
                name: prop_name.clone(),
                ty: resolve(&prop.ty),
                optional: !(options.required_fields && schema.required.contains(prop_name)),
                doc: prop.description.clone().filter(|doc| !doc.is_empty()),
            })
            .collect();
        Some(Self {
            name: strip_decorations(name),
            fields,
        })
    }

    pub fn render(&self, options: &GeneratorOptions) -> String {
        let mut ts = format!("export interface {} {{\n", self.name);
        for field in &self.fields {
            let optional = if field.optional { "?" } else { "" };
            let annotation = field
                .ty
                .render(options.unknown_type)
                .map(|ty| format!(": {ty}"))
                .unwrap_or_default();
            match &field.doc {
                Some(doc) => {
                    ts.push_str(&format!("  /** {doc} */\n"));
                    ts.push_str(&format!("  {}{}{}\n\n", field.name, optional, annotation));
                }
                None => ts.push_str(&format!("  {}{}{}\n", field.name, optional, annotation)),
            }
        }
        ts.push_str("}\n\n");
        ts
    }
}

/// Text of the shared definitions file.
pub fn emit_definitions(doc: &SchemaDocument, options: &GeneratorOptions) -> String {
    doc.definitions
        .iter()
        .filter_map(|(name, schema)| InterfaceDecl::from_schema(name, schema, options))
        .map(|decl| decl.render(options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownTypeMode;

    fn schema(json: &str) -> SchemaObject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_fields_are_optional_and_documented() {
        let schema = schema(
            r#"{
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string", "description": "x"}
                }
            }"#,
        );
        let decl = InterfaceDecl::from_schema("User", &schema, &GeneratorOptions::default()).unwrap();
        assert_eq!(
            decl.render(&GeneratorOptions::default()),
            "export interface User {\n  id?: number\n  /** x */\n  name?: string\n\n}\n\n"
        );
    }

    #[test]
    fn test_required_fields_option() {
        let schema = schema(
            r#"{
                "type": "object",
                "required": ["name"],
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"}
                }
            }"#,
        );
        let options = GeneratorOptions {
            required_fields: true,
            ..GeneratorOptions::default()
        };
        let decl = InterfaceDecl::from_schema("Pet", &schema, &options).unwrap();
        assert_eq!(
            decl.render(&options),
            "export interface Pet {\n  id?: number\n  name: string\n}\n\n"
        );
    }

    #[test]
    fn test_references_arrays_and_unknown_types() {
        let schema = schema(
            r##"{
                "type": "object",
                "properties": {
                    "category": {"$ref": "#/definitions/Category"},
                    "tags": {"type": "array", "items": {"$ref": "#/definitions/Tag«String»"}},
                    "photo": {"type": "file"}
                }
            }"##,
        );
        let decl =
            InterfaceDecl::from_schema("Page«Pet»", &schema, &GeneratorOptions::default()).unwrap();
        assert_eq!(decl.name, "PagePet");
        assert_eq!(
            decl.render(&GeneratorOptions::default()),
            "export interface PagePet {\n  category?: Category\n  tags?: TagString[]\n  photo?\n}\n\n"
        );

        let any = GeneratorOptions {
            unknown_type: UnknownTypeMode::Any,
            ..GeneratorOptions::default()
        };
        assert!(decl.render(&any).contains("  photo?: any\n"));
    }

    #[test]
    fn test_non_objects_are_skipped() {
        let doc = SchemaDocument::from_json(
            r#"{
                "definitions": {
                    "Status": {"type": "string"},
                    "Tag": {"type": "object", "properties": {"name": {"type": "string"}}}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            emit_definitions(&doc, &GeneratorOptions::default()),
            "export interface Tag {\n  name?: string\n}\n\n"
        );
    }
}
