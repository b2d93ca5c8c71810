//! Turns a notebook back into an annotated Dockerfile that re-imports to the
//! same cells.

use crate::core::builder::{MAGIC_PREFIX, MARKDOWN_PREFIX};
use crate::core::segmenter::{CELL_END, CELL_START};
use crate::domain::model::{Cell, CellType, NBFORMAT};
use crate::utils::error::{ConvertError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NotebookFile {
    nbformat: u32,
    #[serde(default)]
    cells: Vec<Cell>,
}

/// Parses notebook JSON, accepting nbformat 4 only.
pub fn parse_notebook(json: &str) -> Result<Vec<Cell>> {
    let notebook: NotebookFile =
        serde_json::from_str(json).map_err(|e| ConvertError::InvalidNotebook {
            message: e.to_string(),
        })?;

    if notebook.nbformat != NBFORMAT {
        return Err(ConvertError::InvalidNotebook {
            message: format!(
                "unsupported nbformat {}, expected {}",
                notebook.nbformat, NBFORMAT
            ),
        });
    }

    Ok(notebook.cells)
}

pub fn export_cells(cells: &[Cell]) -> String {
    cells
        .iter()
        .filter_map(|cell| {
            let text = cell.text();
            (!text.is_empty()).then(|| export_cell(cell.cell_type, &text))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn export_cell(cell_type: CellType, text: &str) -> String {
    match cell_type {
        CellType::Markdown => text
            .split('\n')
            .map(|line| format!("{}{}", MARKDOWN_PREFIX, line))
            .collect::<Vec<_>>()
            .join("\n"),
        CellType::Code | CellType::Raw => {
            let body = text
                .split('\n')
                .map(|line| {
                    // Magics, and lines that would read back as directives, are escaped.
                    if line.starts_with('%')
                        || line.starts_with(MARKDOWN_PREFIX)
                        || line.starts_with(MAGIC_PREFIX)
                    {
                        format!("{}{}", MAGIC_PREFIX, line)
                    } else {
                        line.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");

            // Blank lines would split the cell on re-import.
            if text.split('\n').any(str::is_empty) {
                format!("{}{}{}", CELL_START, body, CELL_END)
            } else {
                body
            }
        }
    }
}
