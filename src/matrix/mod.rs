//! Paste-text parsing into a fixed 3×3 benefit/feasibility matrix.
//!
//! Rows are benefit levels (High, Medium, Low from the top) and columns are
//! feasibility levels (Low, Medium, High from the left). Parsing never fails:
//! unrecognised input either leaves cells empty or reports
//! [`ParseOutcome::NotApplicable`] so the next strategy can be tried.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

mod band;
mod dispatch;
mod grid;
mod levels;
mod list;
mod split;

pub use band::{ColorBand, cell_band};
pub use dispatch::{Board, PasteOutcome, Strategy};
pub use grid::parse_grid;
pub use levels::{
    BenefitLevel, COL_LABELS, FeasibilityLevel, ROW_LABELS, resolve_benefit, resolve_feasibility,
};
pub use list::parse_list;
pub use split::split_cell;

pub const MATRIX_SIZE: usize = 3;

/// Delimiter placed between labels accumulated in one cell.
pub const ITEM_SEPARATOR: char = '\n';

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("static regex must compile"));

pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(text)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    cells: [[String; MATRIX_SIZE]; MATRIX_SIZE],
}

impl Matrix {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[String; MATRIX_SIZE]; MATRIX_SIZE]) -> Self {
        Self { cells }
    }

    /// Panics when `row` or `col` is outside `0..3`.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.cells[row][col]
    }

    #[cfg(test)]
    pub fn cell_at(&self, benefit: BenefitLevel, feasibility: FeasibilityLevel) -> &str {
        self.cell(benefit.row(), feasibility.col())
    }

    pub fn has_entries(&self) -> bool {
        self.cells.iter().flatten().any(|cell| !cell.is_empty())
    }

    /// Labels held in a cell, one per line.
    pub fn items(&self, row: usize, col: usize) -> Vec<&str> {
        self.cell(row, col)
            .split(ITEM_SEPARATOR)
            .filter(|item| !item.is_empty())
            .collect()
    }

    pub fn item_count(&self) -> usize {
        (0..MATRIX_SIZE)
            .flat_map(|row| (0..MATRIX_SIZE).map(move |col| (row, col)))
            .map(|(row, col)| self.items(row, col).len())
            .sum()
    }

    /// Adds `label` below whatever the cell already holds. Empty labels are ignored.
    pub fn append(&mut self, benefit: BenefitLevel, feasibility: FeasibilityLevel, label: &str) {
        if label.is_empty() {
            return;
        }

        let cell = &mut self.cells[benefit.row()][feasibility.col()];
        if !cell.is_empty() {
            cell.push(ITEM_SEPARATOR);
        }
        cell.push_str(label);
    }

    /// Returns a copy with every cell renormalised to one item per line.
    pub fn split_items(&self) -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| split_cell(&self.cells[row][col]))
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Matched(Matrix),
    NotApplicable,
}

impl ParseOutcome {
    pub fn matched(self) -> Option<Matrix> {
        match self {
            Self::Matched(matrix) => Some(matrix),
            Self::NotApplicable => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}
