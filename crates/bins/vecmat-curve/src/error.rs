use std::path::PathBuf;

/// Errors of the `vecmat-curve` command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The samples could not be written out.
    #[error("Failed to write the samples: {0}")]
    Output(#[source] std::io::Error),
    /// The input file is not a valid curve description.
    #[error("Invalid curve file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The curve could not be evaluated.
    #[error(transparent)]
    Curve(#[from] vecmat::Error),
}
