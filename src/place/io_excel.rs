use snafu::{OptionExt, ResultExt};

use crate::place::*;

use calamine::{open_workbook_auto, DataType, Reader};
use exam_placement::Student;

/// The topic cell starts with a fixed-width label ("Klausur:"), 8 characters
/// that are stripped before the topic itself.
const TOPIC_LABEL_LEN: usize = 8;

/// The first 4 rows of each sheet are portal boilerplate, never data.
const DATA_START_ROW: usize = 4;

/// Reads one portal export and merges its students into the registry.
///
/// Only the first worksheet is considered. The examination topic is taken
/// from cell (0,0), but only as long as the registry does not know a topic
/// yet (i.e. from the first input file of the run).
pub fn read_input_file(path: &str, registry: &mut Registry) -> PlaceResult<()> {
    let mut workbook = open_workbook_auto(path).context(OpeningWorkbookSnafu { path })?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context(MissingSheetSnafu { path })?;
    let wrange = workbook
        .worksheet_range(&sheet_name)
        .context(MissingSheetSnafu { path })?
        .context(OpeningWorkbookSnafu { path })?;
    debug!("read_input_file: {} rows in {:?}", wrange.rows().count(), path);

    if !registry.has_topic() {
        let cell = wrange
            .get_value((0, 0))
            .context(MissingTopicSnafu { path })?;
        registry.set_topic_once(topic_from_cell(cell));
    }

    for row in wrange.rows().skip(DATA_START_ROW) {
        if let Some((key, student)) = record_from_row(row) {
            registry.add(key, student);
        }
    }
    Ok(())
}

/// Strips the label prefix from the topic cell and trims the rest.
/// A cell shorter than the label yields an empty topic, without complaint.
fn topic_from_cell(cell: &DataType) -> String {
    let raw = cell_text(cell);
    raw.chars()
        .skip(TOPIC_LABEL_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extracts one (key, student) record from a data row, or `None` when the
/// row does not qualify.
///
/// calamine pads short rows with `Empty` cells up to the sheet width, so the
/// raggedness of the original sheet is recovered by dropping trailing empty
/// cells first. Rows with fewer than 3 remaining cells are skipped.
fn record_from_row(row: &[DataType]) -> Option<(String, Student)> {
    let row = trim_ragged(row);
    if row.len() < 3 {
        return None;
    }
    let key = cell_text(&row[0]);
    let student = Student {
        last: cell_text(&row[1]),
        first: cell_text(&row[2]),
    };
    Some((key, student))
}

fn trim_ragged(row: &[DataType]) -> &[DataType] {
    let end = row
        .iter()
        .rposition(|c| !matches!(c, DataType::Empty))
        .map_or(0, |i| i + 1);
    &row[..end]
}

/// The raw text of a cell, without type coercion of the content.
///
/// Registration numbers are kept as opaque strings so that leading zeros
/// survive. The portal stores purely numeric cells as floats; an integral
/// float renders without the trailing `.0`.
fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        DataType::Float(f) => f.to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::Empty => String::new(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> DataType {
        DataType::String(text.to_string())
    }

    #[test]
    fn topic_strips_label_and_whitespace() {
        assert_eq!(topic_from_cell(&s("Klausur: Algorithmen")), "Algorithmen");
        assert_eq!(topic_from_cell(&s("Klausur: Datenbanken  ")), "Datenbanken");
    }

    #[test]
    fn short_topic_cell_yields_empty_topic() {
        assert_eq!(topic_from_cell(&s("Kl.")), "");
        assert_eq!(topic_from_cell(&DataType::Empty), "");
    }

    #[test]
    fn record_needs_three_populated_columns() {
        assert_eq!(record_from_row(&[]), None);
        assert_eq!(record_from_row(&[s("101")]), None);
        assert_eq!(record_from_row(&[s("101"), s("Meier")]), None);
        // Trailing padding does not count as a column.
        assert_eq!(
            record_from_row(&[s("101"), s("Meier"), DataType::Empty, DataType::Empty]),
            None
        );
    }

    #[test]
    fn record_takes_the_first_three_columns() {
        let row = [s("101"), s("Meier"), s("Bob"), s("ignored")];
        let (key, student) = record_from_row(&row).unwrap();
        assert_eq!(key, "101");
        assert_eq!(student.last, "Meier");
        assert_eq!(student.first, "Bob");
    }

    #[test]
    fn numeric_keys_lose_the_float_artifacts() {
        let row = [DataType::Float(101.0), s("Meier"), s("Bob")];
        let (key, _) = record_from_row(&row).unwrap();
        assert_eq!(key, "101");
    }

    #[test]
    fn string_keys_keep_leading_zeros() {
        let row = [s("00123"), s("Meier"), s("Bob")];
        let (key, _) = record_from_row(&row).unwrap();
        assert_eq!(key, "00123");
    }
}
