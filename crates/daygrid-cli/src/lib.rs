//! CLI logic for the Daygrid layout tool.
//!
//! This module contains the core CLI logic: loading configuration, reading
//! the event document, and writing the rendered grid.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::fs;

use log::info;

use daygrid::{DaygridError, GridBuilder};

/// Run the Daygrid CLI application
///
/// This function processes the input file through the Daygrid pipeline
/// and writes the rendered document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DaygridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), DaygridError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format:? = args.format;
        "Processing calendar"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = GridBuilder::new(app_config);
    let calendar = builder.parse(&source)?;
    let output = match args.format {
        Format::Svg => builder.render_svg(&calendar)?,
        Format::Html => builder.render_html(&calendar)?,
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Grid exported successfully");

    Ok(())
}
