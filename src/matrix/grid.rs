use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{MATRIX_SIZE, Matrix, ParseOutcome, split_lines};

/// Tabs, or runs of two or more whitespace characters. Single spaces stay inside a cell.
static CELL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t|\s{2,}").expect("static regex must compile"));

static BENEFIT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)benefits?").expect("static regex must compile"));

const HEADED_ROW_WIDTH: usize = MATRIX_SIZE + 1;

/// Reads `raw` as a literal 3×3 table, as copied from a spreadsheet selection.
///
/// A first row whose leading cell is blank or mentions "benefit" is taken as
/// the column header and dropped. If the next row then has four cells, the
/// first column is taken as an ID column and dropped from every row. Missing
/// positions become empty cells. Fewer than three lines is not a grid.
pub fn parse_grid(raw: &str) -> ParseOutcome {
    let mut rows = split_lines(raw.trim())
        .map(split_grid_cells)
        .collect::<Vec<Vec<&str>>>();

    if rows.len() < MATRIX_SIZE {
        debug!(lines = rows.len(), "too few lines for a grid");
        return ParseOutcome::NotApplicable;
    }

    let header_corner = rows[0].first().copied();
    let is_header = leading_cell_is_blank(raw)
        || header_corner.is_none_or(|cell| BENEFIT_HEADER.is_match(cell));
    if is_header {
        debug!(corner = header_corner.unwrap_or_default(), "dropping grid header row");
        rows.remove(0);
    }

    if rows.first().is_some_and(|row| row.len() == HEADED_ROW_WIDTH) {
        debug!("dropping grid id column");
        for row in &mut rows {
            if !row.is_empty() {
                row.remove(0);
            }
        }
    }

    let cells = std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            rows.get(row)
                .and_then(|cells| cells.get(col))
                .map(|cell| (*cell).to_string())
                .unwrap_or_default()
        })
    });

    ParseOutcome::Matched(Matrix::from_cells(cells))
}

fn split_grid_cells(line: &str) -> Vec<&str> {
    CELL_SEPARATOR
        .split(line)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Whole-text trimming eats a leading tab, so the blank top-left corner of a
/// spreadsheet selection is only visible on the untrimmed first line. Leading
/// spaces are indentation, not an empty cell.
fn leading_cell_is_blank(raw: &str) -> bool {
    split_lines(raw)
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split('\t').next())
        .is_some_and(|cell| cell.trim().is_empty())
}
