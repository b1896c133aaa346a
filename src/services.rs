//! One axios-backed client function per operation, grouped by tag.

use tracing::{debug, warn};

use crate::config::{GeneratorOptions, UnknownTypeMode};
use crate::naming::{service_name, url_template};
use crate::params::{classify, ClassifiedParams};
use crate::swagger::{OperationDescriptor, ParameterDescriptor, SchemaDocument};
use crate::tags::GenerationContext;
use crate::types::{resolve, TsType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFunction {
    pub name: String,
    pub description: String,
    pub method: String,
    pub path: String,
    /// Request URL with path variables already turned into template placeholders.
    pub url: String,
    pub params: ClassifiedParams,
    pub response: TsType,
    pub response_import: Option<String>,
}

impl ServiceFunction {
    pub fn build(
        base_path: &str,
        path: &str,
        method: &str,
        operation: &OperationDescriptor,
        parameters: &[&ParameterDescriptor],
    ) -> Self {
        let schema = operation.success_schema();
        let response = schema.map(resolve).unwrap_or(TsType::Unknown);
        let response_import = schema
            .filter(|schema| schema.references_definition())
            .and_then(|_| response.import_name())
            .map(str::to_string);

        Self {
            name: service_name(path, method),
            description: operation.description().to_string(),
            method: method.to_string(),
            path: path.to_string(),
            url: format!("{}{}", base_path, url_template(path)),
            params: classify(parameters),
            response,
            response_import,
        }
    }

    /// Definitions the owning tag must import, response type first.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.response_import
            .as_deref()
            .into_iter()
            .chain(self.params.body_import.as_deref())
    }

    pub fn render(&self, tag: &str, mode: UnknownTypeMode) -> String {
        let mut ts = format!(
            "/**\n* @description {}\n* @tags {}\n* @request {}:{}\n*/\n",
            self.description, tag, self.method, self.path
        );

        let query = self.params.render_query_object(mode);
        let params_arg = query
            .as_ref()
            .map(|query| format!("params: {query}, "))
            .unwrap_or_default();
        let config = if query.is_some() { " params, " } else { " " };
        let generic = self
            .response
            .render(mode)
            .map(|ty| format!("<{ty}>"))
            .unwrap_or_default();

        ts.push_str(&format!(
            "export const {} = ({}data: {},{}) => axios.{}{}(`{}`, {{{}data }})\n\n",
            self.name,
            params_arg,
            self.params.render_body(mode),
            self.params.render_path_clause(mode),
            self.method,
            generic,
            self.url,
            config,
        ));
        ts
    }
}

/// Appends a function for every operation to the tag(s) chosen by the tag policy.
pub fn emit_services(doc: &SchemaDocument, ctx: &mut GenerationContext, options: &GeneratorOptions) {
    for (path, item) in &doc.paths {
        for (method, operation) in &item.operations {
            let tags = options.tag_policy.select(&operation.tags);
            if tags.is_empty() {
                warn!(%path, %method, "Operation has no tags, skipping.");
                continue;
            }

            let parameters = item.parameters_for(operation);
            let function = ServiceFunction::build(&doc.base_path, path, method, operation, &parameters);
            debug!(name = %function.name, ?tags, "Generated service function.");

            for tag in tags {
                let Some(acc) = ctx.tag_mut(tag) else {
                    warn!(%path, %method, tag, "Operation tag is not declared in the document, skipping.");
                    continue;
                };
                for name in function.imports() {
                    acc.add_import(name);
                }
                acc.service_text
                    .push_str(&function.render(tag, options.unknown_type));
            }
        }
    }
}
