//! Typed error for the flutter-codegen crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Debug, Error)]
pub enum CodegenError {
    /// A named template could not be located. Hard stop for that
    /// generation request.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// The template exists but could not be read.
    #[error("failed to read template {name}: {source}")]
    TemplateIo {
        name: String,
        source: std::io::Error,
    },

    /// This generator only produces Flutter code.
    #[error("unsupported project type: {0}")]
    UnsupportedProjectType(String),

    /// Malformed pubspec input, wrapping the underlying YAML error.
    #[error("invalid pubspec: {0}")]
    PubspecParse(#[from] serde_yml::Error),
}
