use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Notebook format major version written by the builder.
pub const NBFORMAT: u32 = 4;
/// Notebook format minor version written by the builder.
pub const NBFORMAT_MINOR: u32 = 5;

/// Kernel descriptor attached to every generated notebook.
pub const NOTEBOOK_METADATA: NotebookMetadata = NotebookMetadata {
    kernelspec: KernelSpec {
        display_name: "Dockerfile",
        language: "text",
        name: "docker",
    },
    language_info: LanguageInfo {
        file_extension: ".dockerfile",
        mimetype: "text/x-dockerfile-config",
        name: "docker",
    },
};

/// One not-yet-classified chunk of Dockerfile text, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a>(&'a str);

impl<'a> RawBlock<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lines split on `\n` only; a trailing newline yields a final empty line.
    pub fn lines(&self) -> std::str::Split<'a, char> {
        self.0.split('\n')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(default)]
    pub execution_count: Option<u32>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub outputs: Vec<Value>,
    #[serde(deserialize_with = "multiline_source")]
    pub source: Vec<String>,
}

impl Cell {
    /// The cell source as one string, joined the way the host joins it.
    pub fn text(&self) -> String {
        self.source.concat()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KernelSpec {
    pub display_name: &'static str,
    pub language: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub file_extension: &'static str,
    pub mimetype: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotebookDocument {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl NotebookDocument {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            metadata: NOTEBOOK_METADATA,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

// nbformat allows `source` as either a single string or a list of lines.
fn multiline_source<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Source {
        Text(String),
        Lines(Vec<String>),
    }

    Ok(match Source::deserialize(deserializer)? {
        Source::Lines(lines) => lines,
        Source::Text(text) if text.is_empty() => Vec::new(),
        Source::Text(text) => text.split_inclusive('\n').map(str::to_string).collect(),
    })
}
