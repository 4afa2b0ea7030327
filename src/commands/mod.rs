pub mod parse;
pub mod replay;

mod render;

use tracing::{info, warn};

use crate::matrix::{Board, PasteOutcome};
use crate::model::PasteRecord;
use crate::util::sha256_text;

/// Feeds one paste to `board` and records what happened to it.
fn apply_paste(board: &mut Board, input_path: String, text: &str) -> PasteRecord {
    let outcome = board.paste(text);
    match outcome {
        PasteOutcome::Replaced { strategy } => info!(
            input = %input_path,
            strategy = strategy.as_str(),
            items = board.current().item_count(),
            "paste replaced matrix"
        ),
        PasteOutcome::Unchanged => warn!(
            input = %input_path,
            bytes = text.len(),
            "paste matched no strategy; matrix unchanged"
        ),
    }

    PasteRecord::new(input_path, sha256_text(text), text.len(), outcome)
}
