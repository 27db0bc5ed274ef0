//! Curve description files.

use crate::error::CliError;
use std::path::Path;
use vecmat::{vec4, Vec4d};

/// Number of interior samples when neither the command line nor the input
/// file gives one.
pub const DEFAULT_SAMPLES: u32 = 16;

/// Content of a curve description file.
///
/// ```toml
/// samples = 8
/// points = [[0.0, 0.0, 0.0, 1.0], [1.0, 2.0, 0.0, 0.5], [2.0, 0.0, 0.0, 1.0]]
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveFile {
    /// Number of interior samples.
    #[serde(default)]
    pub samples: Option<u32>,
    /// Control points as `[x, y, z, weight]`.
    pub points: Vec<[f64; 4]>,
}

impl CurveFile {
    /// Parses a curve description.
    pub fn parse(text: &str) -> Result<Self, CliError> { Ok(toml::from_str(text)?) }

    /// Reads and parses a curve description file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        log::debug!("loading curve from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Control points in homogeneous form.
    pub fn control_points(&self) -> Vec<Vec4d> {
        self.points
            .iter()
            .map(|&[x, y, z, w]| vec4(x, y, z, w))
            .collect()
    }

    /// Sample count: the command line wins over the file, the file over
    /// [`DEFAULT_SAMPLES`].
    pub fn sample_count(&self, cli: Option<u32>) -> u32 {
        cli.or(self.samples).unwrap_or(DEFAULT_SAMPLES)
    }
}
