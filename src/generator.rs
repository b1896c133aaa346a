//! The generation pipeline. The pipeline is:
//! 1. Definitions: every object definition -> shared `export interface` file
//! 2. Services: every operation -> function text appended to its tag
//! 3. Outputs: one file per declared tag, headed by its imports

use indexmap::IndexMap;
use tracing::info;

use crate::config::GeneratorOptions;
use crate::definitions::emit_definitions;
use crate::services::emit_services;
use crate::swagger::SchemaDocument;
use crate::tags::GenerationContext;

/// Generated files keyed by file name: the definitions file first, then one per tag.
pub fn generate(doc: &SchemaDocument, options: &GeneratorOptions) -> IndexMap<String, String> {
    let mut files = IndexMap::new();
    files.insert(options.types_file_name(), emit_definitions(doc, options));

    let mut ctx = GenerationContext::new(&doc.tags);
    emit_services(doc, &mut ctx, options);
    let tags = ctx.accumulators().len();
    for (file_name, text) in ctx.into_outputs(options) {
        files.insert(file_name, text);
    }

    info!(
        definitions = doc.definitions.len(),
        paths = doc.paths.len(),
        tags,
        files = files.len(),
        "Generated TypeScript sources."
    );
    files
}
