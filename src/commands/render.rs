use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::matrix::{BenefitLevel, COL_LABELS, FeasibilityLevel, Matrix, ROW_LABELS, cell_band};
use crate::model::{MatrixReport, PasteRecord, REPORT_VERSION, cell_reports};
use crate::util::now_utc_string;

pub(super) fn build_report(
    strategy_mode: &str,
    pastes: Vec<PasteRecord>,
    matrix: &Matrix,
) -> MatrixReport {
    MatrixReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        strategy_mode: strategy_mode.to_string(),
        pastes,
        item_count: matrix.item_count(),
        cells: cell_reports(matrix),
        matrix: matrix.clone(),
    }
}

pub(super) fn write_json_report(report: &MatrixReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize matrix json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

pub(super) fn write_text_matrix(matrix: &Matrix) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    render_text(&mut output, matrix)?;
    output.flush()?;
    Ok(())
}

/// Lists the nine cells row by row, High benefit first and Low feasibility leftmost.
pub(super) fn render_text<W: Write>(output: &mut W, matrix: &Matrix) -> io::Result<()> {
    writeln!(
        output,
        "Benefit (rows: {}) x Feasibility (columns: {})",
        ROW_LABELS.join(" | "),
        COL_LABELS.join(" | ")
    )?;

    for benefit in BenefitLevel::ALL {
        for feasibility in FeasibilityLevel::ALL {
            let (row, col) = (benefit.row(), feasibility.col());
            let items = matrix.items(row, col);
            writeln!(
                output,
                "[{} benefit / {} feasibility] band={} items={}",
                benefit.label(),
                feasibility.label(),
                cell_band(row, col).as_str(),
                items.len(),
            )?;
            for item in items {
                writeln!(output, "\t{item}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{PasteOutcome, Strategy, parse_list};

    #[test]
    fn render_text_lists_items_under_their_cell() {
        let matrix = parse_list("High\tHigh\tShip it\nLow\tLow\tParking lot");
        let mut buf = Vec::new();
        render_text(&mut buf, &matrix).expect("render");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.starts_with(
            "Benefit (rows: High | Medium | Low) x Feasibility (columns: Low | Medium | High)\n"
        ));
        assert!(
            text.contains("[High benefit / High feasibility] band=strong items=1\n\tShip it\n")
        );
        assert!(
            text.contains("[Low benefit / Low feasibility] band=weak items=1\n\tParking lot\n")
        );
        assert!(text.contains("[Medium benefit / Medium feasibility] band=moderate items=0\n"));
        assert_eq!(text.lines().count(), 1 + 9 + 2);
    }

    #[test]
    fn report_carries_cells_in_display_order() {
        let matrix = parse_list("Medium\tLow\tA, B").split_items();
        let paste = PasteRecord::new(
            "paste.txt".to_string(),
            "00".to_string(),
            10,
            PasteOutcome::Replaced {
                strategy: Strategy::List,
            },
        );
        let report = build_report("auto", vec![paste], &matrix);

        assert_eq!(report.item_count, 2);
        assert_eq!(report.cells.len(), 9);
        assert_eq!(report.cells[3].row, 1);
        assert_eq!(report.cells[3].col, 0);
        assert_eq!(report.cells[3].items, vec!["A", "B"]);

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["pastes"][0]["outcome"], "replaced");
        assert_eq!(json["pastes"][0]["strategy"], "list");
        assert_eq!(json["cells"][3]["benefit"], "medium");
        assert_eq!(json["cells"][3]["band"], "weak");
        assert_eq!(json["matrix"][1][0], "A\nB");
    }
}
