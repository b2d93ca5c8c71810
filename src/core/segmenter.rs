//! Splits Dockerfile text into raw cell blocks.
//!
//! `#cellStart` / `#cellEnd` force a group of lines into one cell; everywhere
//! else a blank line starts a new cell.

use crate::domain::model::RawBlock;

pub const CELL_START: &str = "#cellStart\n";
pub const CELL_END: &str = "\n#cellEnd";
const BLANK_LINE: &str = "\n\n";

pub fn segment(text: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();

    for outer in text.split(CELL_END) {
        let mut chunks = outer.split(CELL_START);

        // Text before the first `#cellStart` is never part of a forced group.
        if let Some(free) = chunks.next() {
            push_blank_separated(&mut blocks, free);
        }

        for forced in chunks {
            if forced.starts_with('\n') || forced.ends_with('\n') {
                push_blank_separated(&mut blocks, forced);
            } else if !forced.is_empty() {
                blocks.push(RawBlock::new(forced));
            }
        }
    }

    blocks
}

fn push_blank_separated<'a>(blocks: &mut Vec<RawBlock<'a>>, chunk: &'a str) {
    blocks.extend(
        chunk
            .split(BLANK_LINE)
            .filter(|part| !part.is_empty())
            .map(RawBlock::new),
    );
}
