use serde::Serialize;

/// Color band a renderer paints behind a cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBand {
    Strong,
    Moderate,
    Weak,
}

impl ColorBand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

/// Ranges from 2 (low benefit, low feasibility) to 6 (high benefit, high feasibility).
pub fn cell_score(row: usize, col: usize) -> usize {
    3usize.saturating_sub(row) + col + 1
}

pub fn cell_band(row: usize, col: usize) -> ColorBand {
    let score = cell_score(row, col);
    if score >= 6 {
        ColorBand::Strong
    } else if score >= 4 {
        ColorBand::Moderate
    } else {
        ColorBand::Weak
    }
}
