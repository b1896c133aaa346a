//! Per-tag accumulation of generated service functions for one run.

use indexmap::IndexSet;
use tracing::warn;

use crate::config::GeneratorOptions;
use crate::naming::file_name;
use crate::swagger::Tag;

#[derive(Debug, Clone)]
pub struct TagAccumulator {
    pub name: String,
    pub description: Option<String>,
    pub service_text: String,
    pub imports: IndexSet<String>,
}

impl TagAccumulator {
    fn new(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            description: tag.description.clone(),
            service_text: String::new(),
            imports: IndexSet::new(),
        }
    }

    pub fn add_import(&mut self, name: &str) {
        self.imports.insert(name.to_string());
    }

    pub fn file_name(&self, extension: &str) -> String {
        file_name(self.description.as_deref().unwrap_or(&self.name), extension)
    }

    /// Axios import, the named definitions this tag uses, then its functions.
    pub fn render(&self, types_module: &str) -> String {
        let mut ts = "import axios from 'axios'\n\n".to_string();
        if !self.imports.is_empty() {
            let names: String = self.imports.iter().map(|name| format!("{name}, ")).collect();
            ts.push_str(&format!("import {{ {names}}} from './{types_module}'\n\n"));
        }
        ts.push_str(&self.service_text);
        ts
    }
}

/// Generation state owned by a single run: one accumulator per declared tag,
/// in declaration order.
#[derive(Debug, Default)]
pub struct GenerationContext {
    accumulators: Vec<TagAccumulator>,
}

impl GenerationContext {
    pub fn new(tags: &[Tag]) -> Self {
        Self {
            accumulators: tags.iter().map(TagAccumulator::new).collect(),
        }
    }

    pub fn tag_mut(&mut self, name: &str) -> Option<&mut TagAccumulator> {
        self.accumulators.iter_mut().find(|acc| acc.name == name)
    }

    pub fn accumulators(&self) -> &[TagAccumulator] {
        &self.accumulators
    }

    /// One `(file name, text)` pair per declared tag. A tag whose file name is
    /// already taken, by the definitions file or an earlier tag, gets its tag
    /// name appended to the file stem.
    pub fn into_outputs(self, options: &GeneratorOptions) -> Vec<(String, String)> {
        let mut taken = IndexSet::from([options.types_file_name()]);
        let mut outputs = Vec::with_capacity(self.accumulators.len());

        for acc in self.accumulators {
            let derived = acc.file_name(&options.extension);
            let mut file_name = derived.clone();
            let mut attempt = 1;
            while taken.contains(&file_name) {
                let stem = derived
                    .strip_suffix(&format!(".{}", options.extension))
                    .unwrap_or(&derived);
                let suffix = if attempt == 1 { String::new() } else { attempt.to_string() };
                file_name = format!("{stem}_{}{suffix}.{}", acc.name, options.extension);
                attempt += 1;
            }
            if file_name != derived {
                warn!(tag = %acc.name, %derived, renamed = %file_name, "Tag file name is already taken, renaming.");
            }

            let text = acc.render(&options.types_module);
            taken.insert(file_name.clone());
            outputs.push((file_name, text));
        }
        outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<Tag> {
        vec![
            Tag {
                name: "pet".to_string(),
                description: Some("Everything about your Pets".to_string()),
            },
            Tag {
                name: "user".to_string(),
                description: None,
            },
        ]
    }

    #[test]
    fn test_imports_are_deduplicated_in_first_use_order() {
        let mut ctx = GenerationContext::new(&tags());
        let pet = ctx.tag_mut("pet").unwrap();
        pet.add_import("Pet");
        pet.add_import("ApiResponse");
        pet.add_import("Pet");
        let imports: Vec<_> = pet.imports.iter().cloned().collect();
        assert_eq!(imports, vec!["Pet", "ApiResponse"]);
        assert!(ctx.tag_mut("store").is_none());
    }

    #[test]
    fn test_render_header() {
        let mut ctx = GenerationContext::new(&tags());
        let pet = ctx.tag_mut("pet").unwrap();
        pet.add_import("Pet");
        pet.add_import("Tag");
        pet.service_text.push_str("export const a = 1\n\n");

        let outputs = ctx.into_outputs(&GeneratorOptions::default());
        assert_eq!(outputs[0].0, "everythingaboutyourPets.ts");
        assert_eq!(
            outputs[0].1,
            "import axios from 'axios'\n\nimport { Pet, Tag, } from './newTypes'\n\nexport const a = 1\n\n"
        );
        assert_eq!(outputs[1].0, "user.ts");
        assert_eq!(outputs[1].1, "import axios from 'axios'\n\n");
    }
}
