//! Error adapter for converting DaygridError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use daygrid::{DaygridError, source::SourceError};

/// Adapter for an event document error.
///
/// Wraps a [`SourceError`] together with the document it was raised for, so
/// the offending location can be shown in context.
pub struct SourceAdapter<'a> {
    err: &'a SourceError,
    src: &'a str,
}

impl<'a> SourceAdapter<'a> {
    /// Create a new source adapter.
    pub fn new(err: &'a SourceError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for SourceAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SourceAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for SourceAdapter<'_> {}

impl MietteDiagnostic for SourceAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("daygrid::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            SourceError::InvalidColor { .. } => {
                Some(Box::new("colors are CSS color strings, e.g. \"#3a87ad\" or \"teal\""))
            }
            SourceError::Toml(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}

/// Adapter for [`DaygridError`] variants without source locations.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, layout errors, and export errors.
pub struct ErrorAdapter<'a>(pub &'a DaygridError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DaygridError::Io(_) => "daygrid::io",
            DaygridError::Parse { .. } => "daygrid::parse",
            DaygridError::Layout(_) => "daygrid::layout",
            DaygridError::Export(_) => "daygrid::export",
            DaygridError::Config(_) => "daygrid::config",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A document error with source location information.
    Source(SourceAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Source(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Source(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Source(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Source(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`DaygridError`] into a reportable error.
pub fn to_reportable(err: &DaygridError) -> Reportable<'_> {
    match err {
        DaygridError::Parse { err, src } => Reportable::Source(SourceAdapter::new(err, src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
