// ********* Text layout for the stdout rendering ***********

use crate::{Registry, Student};

/// Display widths for the four columns of the text listing, computed over
/// the whole data set so that every line aligns.
///
/// All widths are character counts, not byte counts: names and topics may
/// carry umlauts and the banner must still line up.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ColumnWidths {
    /// Digit count of the highest place number.
    pub place: usize,
    pub key: usize,
    pub last: usize,
    pub first: usize,
}

fn width(s: &str) -> usize {
    s.chars().count()
}

pub fn column_widths(registry: &Registry) -> ColumnWidths {
    ColumnWidths {
        place: registry.len().to_string().len(),
        key: registry.keys().map(|k| width(k)).max().unwrap_or(0),
        last: registry
            .students()
            .map(|(_, s)| width(&s.last))
            .max()
            .unwrap_or(0),
        first: registry
            .students()
            .map(|(_, s)| width(&s.first))
            .max()
            .unwrap_or(0),
    }
}

/// Renders the placement as plain text lines.
///
/// The first three lines are the topic, a `=` banner of the same character
/// length and a blank separator. Then one line per key in the given order:
/// place number and key right-aligned, last and first name left-aligned,
/// single spaces in between.
pub fn render_text(registry: &Registry, keys: &[String]) -> Vec<String> {
    let topic = registry.topic();
    let widths = column_widths(registry);
    let mut lines = vec![
        topic.to_string(),
        "=".repeat(width(topic)),
        String::new(),
    ];
    for (idx, key) in keys.iter().enumerate() {
        let student: &Student = registry.student(key);
        lines.push(format!(
            "{place:>pw$} {key:>kw$} {last:<lw$} {first:<fw$}",
            place = idx + 1,
            key = key,
            last = student.last,
            first = student.first,
            pw = widths.place,
            kw = widths.key,
            lw = widths.last,
            fw = widths.first,
        ));
    }
    lines
}
