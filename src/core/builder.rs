//! Classifies raw blocks into notebook cells and assembles the document.

use crate::domain::model::{Cell, CellType, NotebookDocument, RawBlock};
use serde_json::Map;
use uuid::Uuid;

/// Line prefix that turns the whole cell into markdown.
pub const MARKDOWN_PREFIX: &str = "#md ";
/// Line prefix that hides a kernel magic from `docker build`.
pub const MAGIC_PREFIX: &str = "#mg ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Markdown,
    Magic,
}

impl Directive {
    fn strip(line: &str) -> (Option<Self>, &str) {
        if let Some(rest) = line.strip_prefix(MARKDOWN_PREFIX) {
            (Some(Directive::Markdown), rest)
        } else if let Some(rest) = line.strip_prefix(MAGIC_PREFIX) {
            (Some(Directive::Magic), rest)
        } else {
            (None, line)
        }
    }
}

/// Returns the cell type of `block` and its source lines with directive
/// prefixes removed. Every line but the last keeps its `\n`.
pub fn classify(block: &RawBlock<'_>) -> (CellType, Vec<String>) {
    if block.is_empty() {
        return (CellType::Code, Vec::new());
    }

    let (cell_type, mut lines) = block.lines().fold(
        (CellType::Code, Vec::new()),
        |(cell_type, mut lines), line| {
            let (directive, content) = Directive::strip(line);
            lines.push(format!("{}\n", content));
            match directive {
                Some(Directive::Markdown) => (CellType::Markdown, lines),
                _ => (cell_type, lines),
            }
        },
    );

    if let Some(last) = lines.last_mut() {
        last.pop();
    }

    (cell_type, lines)
}

/// Builds a notebook with a fresh UUID v4 per cell.
pub fn build<'a, I>(blocks: I) -> NotebookDocument
where
    I: IntoIterator<Item = RawBlock<'a>>,
{
    build_with_ids(blocks, || Uuid::new_v4().to_string())
}

/// Builds a notebook drawing cell ids from `next_id`, which must never repeat
/// a value within one call.
pub fn build_with_ids<'a, I, F>(blocks: I, mut next_id: F) -> NotebookDocument
where
    I: IntoIterator<Item = RawBlock<'a>>,
    F: FnMut() -> String,
{
    let cells = blocks
        .into_iter()
        .map(|block| {
            let (cell_type, source) = classify(&block);
            Cell {
                cell_type,
                execution_count: None,
                id: next_id(),
                metadata: Map::new(),
                outputs: Vec::new(),
                source,
            }
        })
        .collect();

    NotebookDocument::new(cells)
}
