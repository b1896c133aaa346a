use clap::ValueEnum;
use indexmap::IndexSet;

/// Which of an operation's tags decide the file its function lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TagPolicy {
    /// The last listed tag.
    #[default]
    Last,
    /// The first listed tag.
    First,
    /// Every listed tag gets its own copy of the function.
    All,
}

impl TagPolicy {
    pub fn select<'a>(&self, tags: &'a [String]) -> Vec<&'a str> {
        match self {
            TagPolicy::Last => tags.last().map(String::as_str).into_iter().collect(),
            TagPolicy::First => tags.first().map(String::as_str).into_iter().collect(),
            TagPolicy::All => tags
                .iter()
                .map(String::as_str)
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect(),
        }
    }
}

/// How a type the document does not describe is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnknownTypeMode {
    /// Leave the annotation out.
    #[default]
    Omit,
    Any,
    Unknown,
}

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub tag_policy: TagPolicy,
    /// Keep the schema's `required` list on definition fields instead of
    /// marking every field optional.
    pub required_fields: bool,
    pub unknown_type: UnknownTypeMode,
    /// Base name of the shared definitions file, also the import path.
    pub types_module: String,
    pub extension: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            tag_policy: TagPolicy::default(),
            required_fields: false,
            unknown_type: UnknownTypeMode::default(),
            types_module: "newTypes".to_string(),
            extension: "ts".to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn types_file_name(&self) -> String {
        format!("{}.{}", self.types_module, self.extension)
    }
}
