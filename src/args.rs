use clap::Parser;

use std::fs::File;
use std::path::Path;

/// This program assigns randomized seat numbers to the students of an
/// examination, read from the Excel exports of the registration portal.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) If specified, the placement is written as a styled Excel
    /// file to this location. If not specified, the placement is printed as an aligned
    /// text listing on the standard output.
    #[clap(short, long, value_parser = placement_file, value_name = "PLACE")]
    pub out: Option<String>,

    /// (file paths) The Excel files with the registered students. The examination topic
    /// is taken from the first file; students from later files are merged in, last file
    /// wins on duplicate registration numbers.
    #[clap(value_parser = input_file, required = true)]
    pub xlsfile: Vec<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

/// Accepts only `.xls` / `.xlsx` paths (case-insensitive on the extension).
fn placement_file(value: &str) -> Result<String, String> {
    let ext = Path::new(value)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("xls") | Some("xlsx") => Ok(value.to_string()),
        _ => Err(format!("Invalid file name '{}'", value)),
    }
}

/// Input files must additionally be openable for reading at parse time.
fn input_file(value: &str) -> Result<String, String> {
    let value = placement_file(value)?;
    File::open(&value).map_err(|e| format!("Cannot read file '{}': {}", value, e))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::placement_file;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(placement_file("students.xls").is_ok());
        assert!(placement_file("students.XLSX").is_ok());
        assert!(placement_file("dir.xlsx/students.Xls").is_ok());
    }

    #[test]
    fn other_extensions_are_rejected() {
        assert!(placement_file("students.csv").is_err());
        assert!(placement_file("students.xls.txt").is_err());
        assert!(placement_file("students").is_err());
    }
}
