use anyhow::Result;
use tracing::info;

use crate::cli::ParseArgs;
use crate::matrix::Board;
use crate::util::{read_input, write_json_pretty};

use super::apply_paste;
use super::render::{build_report, write_json_report, write_text_matrix};

pub fn run(args: ParseArgs) -> Result<()> {
    let (input_path, text) = read_input(args.input.as_deref())?;
    info!(
        input = %input_path,
        strategy = args.strategy.as_str(),
        bytes = text.len(),
        "parsing paste"
    );

    let mut board = Board::with_strategies(args.strategy.strategies());
    let paste = apply_paste(&mut board, input_path, &text);
    let report = build_report(args.strategy.as_str(), vec![paste], board.current());

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote matrix report");
    }

    if args.json {
        write_json_report(&report)
    } else {
        write_text_matrix(board.current())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::cli::StrategyMode;
    use crate::util::sha256_text;

    #[test]
    fn run_writes_report_for_matched_paste() {
        let dir = tempfile::tempdir().expect("tempdir");
        let text = "ID\tBenefit\tFeasibility\nA1\tHigh\tLow\nA2\tMedium\tMedium";
        let input = dir.path().join("paste.txt");
        fs::write(&input, text).expect("write paste");
        let report_path = dir.path().join("reports").join("matrix.json");

        run(ParseArgs {
            input: Some(input.clone()),
            strategy: StrategyMode::Auto,
            json: false,
            report_path: Some(report_path.clone()),
        })
        .expect("parse run");

        let raw = fs::read_to_string(&report_path).expect("read report");
        let report: serde_json::Value = serde_json::from_str(&raw).expect("report json");

        assert_eq!(report["report_version"], 1);
        assert_eq!(report["strategy_mode"], "auto");
        assert_eq!(report["item_count"], 2);
        assert_eq!(report["pastes"][0]["input_path"], input.display().to_string());
        assert_eq!(report["pastes"][0]["input_sha256"], sha256_text(text));
        assert_eq!(report["pastes"][0]["input_bytes"], text.len());
        assert_eq!(report["pastes"][0]["outcome"], "replaced");
        assert_eq!(report["pastes"][0]["strategy"], "list");
        assert_eq!(report["cells"][0]["items"], serde_json::json!(["A1"]));
        assert_eq!(report["cells"][0]["band"], "moderate");
        assert_eq!(report["cells"][4]["items"], serde_json::json!(["A2"]));
        assert_eq!(report["matrix"][1][1], "A2");
    }

    #[test]
    fn run_reports_unchanged_when_nothing_matches() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("prose.txt");
        fs::write(&input, "just a sentence").expect("write paste");
        let report_path = dir.path().join("matrix.json");

        run(ParseArgs {
            input: Some(input),
            strategy: StrategyMode::Grid,
            json: true,
            report_path: Some(report_path.clone()),
        })
        .expect("unmatched paste is not an error");

        let raw = fs::read_to_string(&report_path).expect("read report");
        let report: serde_json::Value = serde_json::from_str(&raw).expect("report json");

        assert_eq!(report["strategy_mode"], "grid");
        assert_eq!(report["pastes"][0]["outcome"], "unchanged");
        assert!(report["pastes"][0]["strategy"].is_null());
        assert_eq!(report["item_count"], 0);
        assert_eq!(report["cells"].as_array().map(Vec::len), Some(9));
    }
}
