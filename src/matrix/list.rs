use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{Matrix, resolve_benefit, resolve_feasibility, split_lines};

static FIELD_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t;]").expect("static regex must compile"));

/// How a data line was read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum RecordShape {
    /// `id, benefit, feasibility` under a detected header row.
    HeaderedId,
    /// `benefit, feasibility, title...` with the title words joined by spaces.
    Shorthand,
    /// `id, benefit, feasibility` without a header.
    FallbackId,
}

impl RecordShape {
    fn as_str(self) -> &'static str {
        match self {
            Self::HeaderedId => "headered_id",
            Self::Shorthand => "shorthand",
            Self::FallbackId => "fallback_id",
        }
    }
}

#[derive(Debug)]
struct Record<'a> {
    shape: RecordShape,
    benefit: &'a str,
    feasibility: &'a str,
    label: String,
}

/// Reads `raw` as one record per line and buckets each label into its cell.
///
/// Lines split on tabs or semicolons. Records whose levels do not resolve,
/// or with fewer than three non-empty fields, are skipped.
pub fn parse_list(raw: &str) -> Matrix {
    let mut matrix = Matrix::empty();
    let lines = split_lines(raw.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>();

    let Some(first) = lines.first() else {
        return matrix;
    };

    let has_header = is_list_header(first);
    let data_lines = if has_header { &lines[1..] } else { &lines[..] };
    debug!(has_header, lines = data_lines.len(), "parsing list paste");

    for (index, line) in data_lines.iter().enumerate() {
        let fields = split_fields(line);
        let Some(record) = interpret_fields(&fields, has_header) else {
            debug!(line = index, fields = fields.len(), "skipping short list line");
            continue;
        };

        let (Some(benefit), Some(feasibility)) = (
            resolve_benefit(record.benefit),
            resolve_feasibility(record.feasibility),
        ) else {
            debug!(
                line = index,
                shape = record.shape.as_str(),
                benefit = record.benefit,
                feasibility = record.feasibility,
                "dropping record with unresolved levels"
            );
            continue;
        };

        if record.label.is_empty() {
            continue;
        }

        matrix.append(benefit, feasibility, &record.label);
    }

    matrix
}

/// A header names an exact `id` field plus fields mentioning benefit and feasibility.
fn is_list_header(line: &str) -> bool {
    let fields = FIELD_DELIMITER
        .split(line)
        .map(|field| field.trim().to_lowercase())
        .collect::<Vec<String>>();

    fields.iter().any(|field| field == "id")
        && fields.iter().any(|field| field.contains("benefit"))
        && fields.iter().any(|field| field.contains("feas"))
}

fn split_fields(line: &str) -> Vec<&str> {
    FIELD_DELIMITER
        .split(line)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

fn interpret_fields<'a>(fields: &[&'a str], has_header: bool) -> Option<Record<'a>> {
    let &[first, second, third, ref rest @ ..] = fields else {
        return None;
    };

    let id_record = |shape: RecordShape| Record {
        shape,
        benefit: second,
        feasibility: third,
        label: first.to_string(),
    };

    if has_header {
        return Some(id_record(RecordShape::HeaderedId));
    }

    if resolve_benefit(first).is_some() && resolve_feasibility(second).is_some() {
        let mut title = third.to_string();
        for word in rest {
            title.push(' ');
            title.push_str(word);
        }
        return Some(Record {
            shape: RecordShape::Shorthand,
            benefit: first,
            feasibility: second,
            label: title,
        });
    }

    Some(id_record(RecordShape::FallbackId))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_requires_exact_id_field() {
        assert!(is_list_header("ID\tBenefit\tFeasibility"));
        assert!(is_list_header(" id ; Expected benefits ; Feas."));
        assert!(!is_list_header("Identifier\tBenefit\tFeasibility"));
        assert!(!is_list_header("ID\tValue\tFeasibility"));
        assert!(!is_list_header("ID\tBenefit\tEffort"));
    }

    #[test]
    fn shorthand_joins_trailing_fields_with_spaces() {
        let fields = ["High", "Low", "Project", "Alpha"];
        let record = interpret_fields(&fields, false).expect("record");
        assert_eq!(record.shape, RecordShape::Shorthand);
        assert_eq!(record.label, "Project Alpha");
    }

    #[test]
    fn fallback_reads_id_benefit_feasibility() {
        let fields = ["A7", "Medium", "High", "ignored"];
        let record = interpret_fields(&fields, false).expect("record");
        assert_eq!(record.shape, RecordShape::FallbackId);
        assert_eq!(record.label, "A7");
        assert_eq!(record.benefit, "Medium");
        assert_eq!(record.feasibility, "High");
    }

    #[test]
    fn header_forces_id_reading_even_for_level_tokens() {
        let fields = ["High", "Low", "Medium"];
        let record = interpret_fields(&fields, true).expect("record");
        assert_eq!(record.shape, RecordShape::HeaderedId);
        assert_eq!(record.label, "High");
        assert_eq!(record.benefit, "Low");
    }

    #[test]
    fn fewer_than_three_fields_is_not_a_record() {
        assert!(interpret_fields(&["High", "Low"], false).is_none());
    }
}
