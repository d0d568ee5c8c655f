use snafu::ResultExt;

use crate::place::*;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};

/// Header labels of the placement sheet. The first two columns are
/// centered, the rest left-aligned.
const HEADER_LABELS: [&str; 6] = [
    "Platz",
    "MatNr",
    "Nachname",
    "Vorname",
    "Spickzettel",
    "Unterschrift",
];

/// Column widths in Excel character units. The name columns are wide, the
/// place column narrow; exact values are cosmetic.
const COLUMN_WIDTHS: [f64; 6] = [6.0, 10.0, 20.0, 20.0, 12.0, 20.0];

/// First data row of the sheet: topic banner in row 0, header in row 2.
const FIRST_DATA_ROW: u32 = 3;

/// Writes the placement as a styled Excel file to `path`.
pub fn write_placement(registry: &Registry, keys: &[String], path: &str) -> PlaceResult<()> {
    let mut workbook =
        build_workbook(registry, keys).context(WritingWorkbookSnafu { path })?;
    workbook.save(path).context(WritingWorkbookSnafu { path })?;
    Ok(())
}

/// Assembles the placement workbook in memory.
///
/// Layout: the topic merged and centered across the six columns of row 0,
/// the header labels in row 2, one student per row from row 3 on in the
/// given key order. The last two columns stay empty except for their
/// borders; they are filled in by hand at exam time (scratch-paper mark
/// and signature).
fn build_workbook(registry: &Registry, keys: &[String]) -> Result<Workbook, XlsxError> {
    let topic_banner = Format::new().set_bold().set_align(FormatAlign::Center);
    let header_center = Format::new().set_bold().set_align(FormatAlign::Center);
    let header_left = Format::new().set_bold().set_align(FormatAlign::Left);
    let list_center = Format::new().set_align(FormatAlign::Center);
    let list_cross = Format::new()
        .set_align(FormatAlign::Left)
        .set_border_bottom(FormatBorder::Thin)
        .set_border_right(FormatBorder::Thin);
    let list_sign = Format::new()
        .set_align(FormatAlign::Left)
        .set_border_bottom(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name("Placement")?;

    worksheet.merge_range(0, 0, 0, 5, registry.topic(), &topic_banner)?;
    for (col, label) in HEADER_LABELS.iter().enumerate() {
        let format = if col < 2 { &header_center } else { &header_left };
        worksheet.write_string_with_format(2, col as u16, *label, format)?;
    }

    for (idx, key) in keys.iter().enumerate() {
        let row = FIRST_DATA_ROW + idx as u32;
        let student = registry.student(key);
        worksheet.write_number_with_format(row, 0, (idx + 1) as f64, &list_center)?;
        worksheet.write_string_with_format(row, 1, key, &list_center)?;
        worksheet.write_string(row, 2, &student.last)?;
        worksheet.write_string(row, 3, &student.first)?;
        worksheet.write_string_with_format(row, 4, " ", &list_cross)?;
        worksheet.write_string_with_format(row, 5, " ", &list_sign)?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_placement::Student;

    fn sample_registry() -> Registry {
        let mut reg = Registry::new();
        reg.set_topic_once("Algorithmen".to_string());
        reg.add(
            "101".to_string(),
            Student {
                last: "Meier".to_string(),
                first: "Bob".to_string(),
            },
        );
        reg.add(
            "102".to_string(),
            Student {
                last: "Schmidt".to_string(),
                first: "Lea".to_string(),
            },
        );
        reg
    }

    #[test]
    fn workbook_builds_and_serializes() {
        let reg = sample_registry();
        let keys = vec!["102".to_string(), "101".to_string()];
        let mut workbook = build_workbook(&reg, &keys).unwrap();
        let buffer = workbook.save_to_buffer().unwrap();
        // An xlsx file is a zip archive.
        assert!(buffer.starts_with(b"PK"));
        assert!(!buffer.is_empty());
    }

    #[test]
    fn empty_registry_still_builds_header_only_sheet() {
        let mut reg = Registry::new();
        reg.set_topic_once("Algorithmen".to_string());
        let mut workbook = build_workbook(&reg, &[]).unwrap();
        assert!(workbook.save_to_buffer().unwrap().starts_with(b"PK"));
    }
}
