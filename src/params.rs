//! Splitting an operation's parameters into query, path and body groups.

use tracing::{debug, warn};

use crate::config::UnknownTypeMode;
use crate::swagger::{ParameterDescriptor, ParameterLocation, TypeDescriptor};
use crate::types::{resolve, TsType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamField {
    pub name: String,
    pub ty: TsType,
    pub required: bool,
}

impl ParamField {
    fn render(&self, mode: UnknownTypeMode) -> String {
        let optional = if self.required { "" } else { "?" };
        match self.ty.render(mode) {
            Some(ty) => format!("{}{}: {}", self.name, optional, ty),
            None => format!("{}{}", self.name, optional),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedParams {
    pub query: Vec<ParamField>,
    pub path: Vec<ParamField>,
    pub body: Option<TsType>,
    /// Definition the body schema references directly.
    pub body_import: Option<String>,
}

impl ClassifiedParams {
    /// `{ role: string; limit?: number; }`, or `None` without query parameters.
    pub fn render_query_object(&self, mode: UnknownTypeMode) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let fields: String = self
            .query
            .iter()
            .map(|field| format!("{}; ", field.render(mode)))
            .collect();
        Some(format!("{{ {fields}}}"))
    }

    /// Positional path arguments appended after `data`, e.g. ` petId: number,`.
    pub fn render_path_clause(&self, mode: UnknownTypeMode) -> String {
        if self.path.is_empty() {
            return String::new();
        }
        let args: String = self
            .path
            .iter()
            .map(|field| format!("{},", field.render(mode)))
            .collect();
        format!(" {args}")
    }

    pub fn render_body(&self, mode: UnknownTypeMode) -> String {
        self.body
            .as_ref()
            .and_then(|body| body.render(mode))
            .unwrap_or_else(|| "{}".to_string())
    }
}

pub fn classify(parameters: &[&ParameterDescriptor]) -> ClassifiedParams {
    let mut classified = ClassifiedParams::default();

    for param in parameters {
        match param.location {
            ParameterLocation::Body => {
                if classified.body.is_some() {
                    warn!(name = %param.name, "Ignoring additional body parameter.");
                    continue;
                }
                let ty = param.schema.as_ref().map(resolve).unwrap_or(TsType::Unknown);
                if let Some(TypeDescriptor::Reference(_)) = &param.schema {
                    classified.body_import = ty.import_name().map(str::to_string);
                }
                classified.body = Some(ty);
            }
            ParameterLocation::Query => classified.query.push(field(param)),
            ParameterLocation::Path => classified.path.push(field(param)),
            _ => debug!(name = %param.name, location = ?param.location, "Skipping parameter."),
        }
    }

    classified
}

fn field(param: &ParameterDescriptor) -> ParamField {
    ParamField {
        name: param.name.clone(),
        ty: resolve(&param.ty),
        required: param.required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(json: &str) -> Vec<ParameterDescriptor> {
        serde_json::from_str(json).unwrap()
    }

    fn classify_json(json: &str) -> ClassifiedParams {
        let params = params(json);
        let refs: Vec<&ParameterDescriptor> = params.iter().collect();
        classify(&refs)
    }

    #[test]
    fn test_single_required_query_param() {
        let classified =
            classify_json(r#"[{"name": "role", "in": "query", "required": true, "type": "string"}]"#);
        assert_eq!(
            classified.render_query_object(UnknownTypeMode::Omit).as_deref(),
            Some("{ role: string; }")
        );
        assert_eq!(classified.render_path_clause(UnknownTypeMode::Omit), "");
        assert_eq!(classified.render_body(UnknownTypeMode::Omit), "{}");
    }

    #[test]
    fn test_declaration_order_and_optional_marker() {
        let classified = classify_json(
            r#"[
                {"name": "storeId", "in": "path", "required": true, "type": "integer"},
                {"name": "status", "in": "query", "type": "array", "items": {"type": "string"}},
                {"name": "orderId", "in": "path", "required": true, "type": "string"},
                {"name": "limit", "in": "query", "required": true, "type": "integer"},
                {"name": "api_key", "in": "header", "type": "string"}
            ]"#,
        );
        assert_eq!(
            classified.render_query_object(UnknownTypeMode::Omit).as_deref(),
            Some("{ status?: string[]; limit: number; }")
        );
        assert_eq!(
            classified.render_path_clause(UnknownTypeMode::Omit),
            " storeId: number,orderId: string,"
        );
    }

    #[test]
    fn test_body_reference_is_imported() {
        let classified = classify_json(
            r##"[{"name": "body", "in": "body", "required": true, "schema": {"$ref": "#/definitions/Pet"}}]"##,
        );
        assert_eq!(classified.render_body(UnknownTypeMode::Omit), "Pet");
        assert_eq!(classified.body_import.as_deref(), Some("Pet"));
    }

    #[test]
    fn test_body_array_is_not_imported() {
        let classified = classify_json(
            r##"[{"name": "body", "in": "body", "schema": {"type": "array", "items": {"$ref": "#/definitions/User"}}}]"##,
        );
        assert_eq!(classified.render_body(UnknownTypeMode::Omit), "User[]");
        assert_eq!(classified.body_import, None);
    }

    #[test]
    fn test_first_body_wins() {
        let classified = classify_json(
            r##"[
                {"name": "a", "in": "body", "schema": {"$ref": "#/definitions/A"}},
                {"name": "b", "in": "body", "schema": {"$ref": "#/definitions/B"}}
            ]"##,
        );
        assert_eq!(classified.render_body(UnknownTypeMode::Omit), "A");
        assert_eq!(classified.body_import.as_deref(), Some("A"));
    }

    #[test]
    fn test_unknown_param_type() {
        let classified = classify_json(
            r#"[
                {"name": "file", "in": "path", "required": true, "type": "file"},
                {"name": "body", "in": "body"}
            ]"#,
        );
        assert_eq!(classified.render_path_clause(UnknownTypeMode::Omit), " file,");
        assert_eq!(classified.render_path_clause(UnknownTypeMode::Any), " file: any,");
        assert_eq!(classified.render_body(UnknownTypeMode::Omit), "{}");
        assert_eq!(classified.body_import, None);
    }
}
