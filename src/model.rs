use serde::Serialize;

use crate::matrix::{
    BenefitLevel, ColorBand, FeasibilityLevel, MATRIX_SIZE, Matrix, PasteOutcome, Strategy,
    cell_band,
};

pub const REPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct CellReport {
    pub row: usize,
    pub col: usize,
    pub benefit: BenefitLevel,
    pub feasibility: FeasibilityLevel,
    pub band: ColorBand,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasteRecord {
    pub input_path: String,
    pub input_sha256: String,
    pub input_bytes: usize,
    pub outcome: String,
    pub strategy: Option<Strategy>,
}

impl PasteRecord {
    pub fn new(
        input_path: String,
        input_sha256: String,
        input_bytes: usize,
        outcome: PasteOutcome,
    ) -> Self {
        let (label, strategy) = match outcome {
            PasteOutcome::Replaced { strategy } => ("replaced", Some(strategy)),
            PasteOutcome::Unchanged => ("unchanged", None),
        };

        Self {
            input_path,
            input_sha256,
            input_bytes,
            outcome: label.to_string(),
            strategy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixReport {
    pub report_version: u32,
    pub generated_at: String,
    pub strategy_mode: String,
    pub pastes: Vec<PasteRecord>,
    pub item_count: usize,
    pub cells: Vec<CellReport>,
    pub matrix: Matrix,
}

pub fn cell_reports(matrix: &Matrix) -> Vec<CellReport> {
    let mut cells = Vec::with_capacity(MATRIX_SIZE * MATRIX_SIZE);
    for benefit in BenefitLevel::ALL {
        for feasibility in FeasibilityLevel::ALL {
            let (row, col) = (benefit.row(), feasibility.col());
            cells.push(CellReport {
                row,
                col,
                benefit,
                feasibility,
                band: cell_band(row, col),
                items: matrix
                    .items(row, col)
                    .into_iter()
                    .map(ToOwned::to_owned)
                    .collect(),
            });
        }
    }
    cells
}
