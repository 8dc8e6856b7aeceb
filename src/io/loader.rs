//! Maze text loader.
//!
//! Format: a header with `rows cols`, then `rows x cols` cell characters
//! separated by arbitrary whitespace; a maze laid out one row per line
//! and one laid out flat parse identically. Characters: `#` wall, `x`
//! open, `e` start, `s` exit. `.` is an output-only form and is
//! rejected on input along with everything else unknown.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::{CellKind, Position};
use crate::error::{Error, Result};
use crate::grid::Grid;

/// Upper bound per grid axis, enforced before allocation
pub const MAX_DIMENSION: usize = 4096;

/// Load a maze file, returning the grid and the start position
pub fn load<P: AsRef<Path>>(path: P) -> Result<(Grid, Position)> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let (grid, start) = parse(&text)?;
    debug!(
        "Loaded {}x{} maze from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok((grid, start))
}

/// Parse maze text, validating cell characters and the start/exit
/// uniqueness invariants.
pub fn parse(text: &str) -> Result<(Grid, Position)> {
    let mut tokens = text.split_whitespace();
    let rows = dimension(tokens.next(), "row count")?;
    let cols = dimension(tokens.next(), "column count")?;
    let expected = rows * cols;

    let mut cells = tokens.flat_map(|token| token.chars());
    let mut kinds = Vec::with_capacity(expected);
    let mut start = None;
    let mut exit = None;

    for idx in 0..expected {
        let c = cells
            .next()
            .ok_or_else(|| Error::Parse(format!("Grid ends after {} of {} cells", idx, expected)))?;
        let kind = CellKind::from_char(c).ok_or_else(|| {
            Error::Parse(format!(
                "Unknown cell character '{}' at row {}, column {}",
                c,
                idx / cols,
                idx % cols
            ))
        })?;
        let pos = Position::new((idx / cols) as i32, (idx % cols) as i32);
        match kind {
            CellKind::Start => {
                if start.replace(pos).is_some() {
                    return Err(Error::Invalid("More than one start cell".into()));
                }
            }
            CellKind::Exit => {
                if exit.replace(pos).is_some() {
                    return Err(Error::Invalid("More than one exit cell".into()));
                }
            }
            _ => {}
        }
        kinds.push(kind);
    }
    if cells.next().is_some() {
        return Err(Error::Parse(format!(
            "Trailing data after {} cells",
            expected
        )));
    }

    let start = start.ok_or_else(|| Error::Invalid("No start cell".into()))?;
    if exit.is_none() {
        return Err(Error::Invalid("No exit cell".into()));
    }
    Ok((Grid::from_cells(rows, cols, kinds), start))
}

fn dimension(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| Error::Parse(format!("Missing {} in header", what)))?;
    let value: usize = token
        .parse()
        .map_err(|_| Error::Parse(format!("Invalid {} '{}'", what, token)))?;
    if value == 0 || value > MAX_DIMENSION {
        return Err(Error::Parse(format!(
            "Header {} must be between 1 and {}, got {}",
            what, MAX_DIMENSION, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_and_flat_layouts_agree() {
        let by_rows = "2 2\ne x\nx s\n";
        let flat = "2 2 e x x s";

        let (grid_a, start_a) = parse(by_rows).expect("row layout should parse");
        let (grid_b, start_b) = parse(flat).expect("flat layout should parse");

        assert_eq!(start_a, Position::new(0, 0));
        assert_eq!(start_a, start_b);
        assert_eq!(grid_a.counts(), grid_b.counts());
    }

    #[test]
    fn test_rejects_visited_character() {
        let err = parse("1 3\ne . s").expect_err("'.' is output only");
        assert!(matches!(err, Error::Parse(_)), "got {:?}", err);
    }
}
