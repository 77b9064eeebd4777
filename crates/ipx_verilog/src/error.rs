//! Errors raised while preparing or writing generated documents.

use ipx_diagnostics::{Category, Diagnostic, DiagnosticCode};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during HDL generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The existing module file could not be used to recover the implementation.
    #[error("could not recover the implementation from {}: {reason}", path.display())]
    Implementation {
        /// The module file that was read.
        path: PathBuf,
        /// Why the implementation could not be located.
        reason: String,
    },

    /// The generated document could not be written.
    #[error("could not write {}: {source}", path.display())]
    Io {
        /// The output file or directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Returns the diagnostic code of this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            GenerationError::Implementation { .. } => DiagnosticCode::new(Category::Generation, 201),
            GenerationError::Io { .. } => DiagnosticCode::new(Category::Generation, 202),
        }
    }

    /// Converts the error into an error diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (path, diag) = match self {
            GenerationError::Implementation { path, reason } => (
                path,
                Diagnostic::error(self.code(), reason.clone()).with_help(
                    "fix the module file by hand or move it aside to regenerate from scratch",
                ),
            ),
            GenerationError::Io { path, source } => {
                (path, Diagnostic::error(self.code(), source.to_string()))
            }
        };
        diag.with_subject(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implementation_diagnostic() {
        let err = GenerationError::Implementation {
            path: PathBuf::from("out/top.v"),
            reason: "module top is not terminated by endmodule".to_string(),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.code.to_string(), "G201");
        assert_eq!(diag.subject.as_deref(), Some("out/top.v"));
        assert_eq!(diag.help.len(), 1);
        assert_eq!(
            err.to_string(),
            "could not recover the implementation from out/top.v: module top is not terminated by endmodule"
        );
    }

    #[test]
    fn io_code() {
        let err = GenerationError::Io {
            path: PathBuf::from("out"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.code().to_string(), "G202");
        assert_eq!(err.to_diagnostic().message, "denied");
    }
}
