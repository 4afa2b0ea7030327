use std::sync::LazyLock;

use regex::Regex;

use super::ITEM_SEPARATOR;

static ITEM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\n]+").expect("static regex must compile"));

/// Splits `cell` on commas, semicolons and newlines and rejoins the trimmed,
/// non-empty pieces one per line.
pub fn split_cell(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    for item in ITEM_BOUNDARY
        .split(cell)
        .map(str::trim)
        .filter(|item| !item.is_empty())
    {
        if !out.is_empty() {
            out.push(ITEM_SEPARATOR);
        }
        out.push_str(item);
    }
    out
}
