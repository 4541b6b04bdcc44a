//! Command-line argument definitions for the Daygrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output document formats.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// SVG picture of the grid
    #[default]
    Svg,
    /// HTML table with rowspan/colspan cells
    Html,
}

/// Command-line arguments for the Daygrid layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input event document (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["daygrid", "week.toml"]).unwrap();
        assert_eq!(args.input, "week.toml");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.format, Format::Svg);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_html_format() {
        let args =
            Args::try_parse_from(["daygrid", "week.toml", "-f", "html", "-o", "week.html"]).unwrap();
        assert_eq!(args.format, Format::Html);
        assert_eq!(args.output, "week.html");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["daygrid", "week.toml", "--format", "pdf"]).is_err());
    }
}
