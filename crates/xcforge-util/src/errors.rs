use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all xcforge operations.
#[derive(Debug, Error, Diagnostic)]
pub enum XcforgeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No project file was found in the given directory. Fatal for the run.
    #[error("No project file found in {directory}")]
    #[diagnostic(help("Expected an entry named *.xcodeproj next to .xcforge.json"))]
    ProjectNotFound { directory: String },

    /// A target with this name already exists; creation never overwrites.
    #[error("Target {name} already exists")]
    TargetExists { name: String },

    /// The base project is missing an expected logical group.
    #[error("Group not found: {path}")]
    #[diagnostic(help(
        "The base project must contain the Apps and Distll/Resources/Assets/Videos groups"
    ))]
    GroupNotFound { path: String },

    /// Invalid or malformed plist document.
    #[error("Plist error: {message}")]
    Plist { message: String },

    /// Invalid or malformed manifest (e.g. .xcforge.json).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your .xcforge.json for syntax errors"))]
    Manifest { message: String },

    /// Network request or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type XcforgeResult<T> = miette::Result<T>;
