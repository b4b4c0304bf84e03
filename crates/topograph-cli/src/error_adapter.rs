//! Error adapter for converting TopographError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use topograph::TopographError;

/// Adapter wrapping a [`TopographError`] for miette reporting.
///
/// Topograph errors carry no source spans (there is nothing to parse), so
/// the adapter only contributes a diagnostic code and, for collaborator
/// failures, a help hint.
pub struct ErrorAdapter<'a>(pub &'a TopographError);

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
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TopographError::Io(_) => "topograph::io",
            TopographError::Model(_) => "topograph::model",
            TopographError::Export(_) => "topograph::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            TopographError::Export(_) => Some(Box::new(
                "check that the Graphviz `dot` executable is installed and on PATH \
                 (or use the `dot` output format, which needs no Graphviz)",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`TopographError`] for miette rendering.
pub fn to_reportable(err: &TopographError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use topograph::model::ModelError;

    use super::*;

    #[test]
    fn test_model_error_code() {
        let err = TopographError::Model(ModelError::EmptyLabel);
        let adapter = to_reportable(&err);

        assert_eq!(
            adapter.code().map(|code| code.to_string()),
            Some("topograph::model".to_string())
        );
        assert!(adapter.help().is_none());
        assert_eq!(adapter.to_string(), "Model error: label must not be empty");
    }

    #[test]
    fn test_io_error_code() {
        let err = TopographError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let adapter = to_reportable(&err);

        assert_eq!(
            adapter.code().map(|code| code.to_string()),
            Some("topograph::io".to_string())
        );
        assert!(adapter.source().is_some());
    }

    #[test]
    fn test_export_error_has_help() {
        let err = TopographError::Export(Box::new(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        )));
        let adapter = to_reportable(&err);

        assert_eq!(
            adapter.code().map(|code| code.to_string()),
            Some("topograph::export".to_string())
        );
        let help = adapter.help().expect("export errors carry a hint");
        assert!(help.to_string().contains("Graphviz"));
    }
}
