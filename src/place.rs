use log::{debug, info};

use exam_placement::{render_text, Registry};
use snafu::Snafu;

pub mod io_excel;
pub mod render_xlsx;

#[derive(Debug, Snafu)]
pub enum PlaceError {
    #[snafu(display("Error opening workbook {path}"))]
    OpeningWorkbook {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("No worksheet found in {path}"))]
    MissingSheet { path: String },
    #[snafu(display("Missing topic cell in {path}"))]
    MissingTopic { path: String },
    #[snafu(display("Error writing placement {path}"))]
    WritingWorkbook {
        source: rust_xlsxwriter::XlsxError,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type PlaceResult<T> = Result<T, PlaceError>;

/// Runs the whole pipeline: read all input files into one registry,
/// shuffle, then render to stdout or to an Excel file.
pub fn run_placement(input_files: &[String], out: Option<String>) -> PlaceResult<()> {
    let mut registry = Registry::new();
    for path in input_files {
        info!("Reading input file {:?}", path);
        io_excel::read_input_file(path, &mut registry)?;
    }
    info!(
        "Topic {:?}, {} students registered",
        registry.topic(),
        registry.len()
    );

    let keys = registry.shuffled_keys();
    debug!("Shuffled keys: {:?}", keys);

    match out {
        None => print_placement(&registry, &keys),
        Some(path) => {
            info!("Writing placement to {:?}", path);
            render_xlsx::write_placement(&registry, &keys, &path)?;
        }
    }
    Ok(())
}

/// Prints the placement on stdout.
fn print_placement(registry: &Registry, keys: &[String]) {
    for line in render_text(registry, keys) {
        println!("{}", line);
    }
}
