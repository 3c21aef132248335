use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all refscope operations.
#[derive(Debug, Error, Diagnostic)]
pub enum RefscopeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scanning a directory for assemblies failed.
    #[error("Scan error: {message}")]
    #[diagnostic(help("Check that the path exists and is a readable directory"))]
    Scan { message: String },

    /// A version string could not be parsed as a 4-part numeric version.
    #[error("Version error: {message}")]
    Version { message: String },

    /// Rendering or serializing a report failed.
    #[error("Report error: {message}")]
    Report { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type RefscopeResult<T> = miette::Result<T>;
