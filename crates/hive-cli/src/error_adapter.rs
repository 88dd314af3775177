//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! TOML syntax errors are rendered with the offending file as source code and
//! the error span labelled. Everything else gets a diagnostic code and, where
//! the fix is obvious, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, NamedSource, SourceSpan};

use hive::{HiveError, InputError};

use crate::error::{CliError, SyntaxError};

/// Adapter for a TOML syntax error with its source file.
pub struct SyntaxAdapter<'a> {
    err: &'a SyntaxError,
    source: NamedSource<String>,
}

impl<'a> SyntaxAdapter<'a> {
    pub fn new(err: &'a SyntaxError) -> Self {
        Self {
            err,
            source: NamedSource::new(&err.path, err.src.clone()),
        }
    }
}

impl fmt::Debug for SyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid TOML in `{}`", self.err.path)
    }
}

impl std::error::Error for SyntaxAdapter<'_> {}

impl MietteDiagnostic for SyntaxAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("hive::syntax"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span.clone()?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.err.message.trim().to_string()),
            SourceSpan::from(span),
        );
        Some(Box::new(std::iter::once(label)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.err.span.is_some() {
            return None;
        }
        Some(Box::new(self.err.message.trim()))
    }
}

/// Adapter for every other [`CliError`].
pub struct ErrorAdapter<'a>(pub &'a CliError);

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
        let code = match self.0 {
            CliError::Hive(HiveError::Io(_)) | CliError::Io(_) => "hive::io",
            CliError::Hive(HiveError::Input(_)) | CliError::InvalidScore { .. } => "hive::input",
            CliError::Hive(HiveError::Config(_)) | CliError::MissingConfig(_) => "hive::config",
            CliError::Hive(HiveError::Export(_)) => "hive::export",
            CliError::Syntax(_) => "hive::syntax",
            CliError::Color { .. } => "hive::color",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Hive(HiveError::Input(InputError::NoGroups)) => {
                "add at least one [[groups]] table or a [[nodes]] entry"
            }
            CliError::Hive(HiveError::Input(InputError::DuplicateNode { .. })) => {
                "each node may be listed in only one group"
            }
            CliError::Hive(HiveError::Input(InputError::UnknownNode { .. })) => {
                "list the node in a [[groups]] table or add a [[nodes]] entry for it"
            }
            CliError::InvalidScore { .. } => "scores must be finite numbers",
            CliError::Color { .. } => "use a CSS color such as \"steelblue\" or \"#1f77b4\"",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A TOML error with source location information.
    Syntax(SyntaxAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Syntax(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Syntax(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Syntax(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Syntax(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Syntax(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Syntax(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Wraps a [`CliError`] for rendering.
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    match err {
        CliError::Syntax(syntax) => Reportable::Syntax(SyntaxAdapter::new(syntax)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
