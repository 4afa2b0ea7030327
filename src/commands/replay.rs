use anyhow::Result;
use tracing::info;

use crate::cli::ReplayArgs;
use crate::matrix::Board;
use crate::model::PasteRecord;
use crate::util::read_input;

use super::apply_paste;
use super::render::{build_report, write_json_report, write_text_matrix};

pub fn run(args: ReplayArgs) -> Result<()> {
    let mut board = Board::with_strategies(args.strategy.strategies());
    let pastes = replay_inputs(&mut board, &args)?;

    let replaced = pastes
        .iter()
        .filter(|paste| paste.strategy.is_some())
        .count();
    info!(
        pastes = pastes.len(),
        replaced,
        items = board.current().item_count(),
        "replay completed"
    );

    if args.json {
        let report = build_report(args.strategy.as_str(), pastes, board.current());
        write_json_report(&report)
    } else {
        write_text_matrix(board.current())
    }
}

fn replay_inputs(board: &mut Board, args: &ReplayArgs) -> Result<Vec<PasteRecord>> {
    let mut pastes = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let (input_path, text) = read_input(Some(path.as_path()))?;
        pastes.push(apply_paste(board, input_path, &text));
    }
    Ok(pastes)
}
