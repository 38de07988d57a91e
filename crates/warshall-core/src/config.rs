//! Configuration for Warshall runs
//!
//! Settings shared by front-ends: default and maximum matrix size and the
//! parameters of random graph generation. Read from TOML; every field is
//! optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StepperError, StepperResult};
use crate::random::SeededRng;

/// Largest matrix the interactive front-ends accept by default.
pub const DEFAULT_MAX_SIZE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Size used when none is given.
    pub default_size: usize,
    /// Largest accepted matrix size.
    pub max_size: usize,
    /// Edge count for random graphs; defaults to the vertex count.
    pub random_edges: Option<usize>,
    /// Fixed seed for random graphs.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            default_size: 3,
            max_size: DEFAULT_MAX_SIZE,
            random_edges: None,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> StepperResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| StepperError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> StepperResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject sizes above `max_size`.
    pub fn validate_size(&self, size: usize) -> StepperResult<()> {
        if size > self.max_size {
            return Err(StepperError::MatrixTooLarge {
                size,
                max: self.max_size,
            });
        }
        Ok(())
    }

    /// Edge count for a random graph of `size` vertices.
    pub fn edges_for(&self, size: usize) -> usize {
        self.random_edges.unwrap_or(size)
    }

    /// Generator honoring the configured seed.
    pub fn rng(&self) -> SeededRng {
        match self.seed {
            Some(seed) => SeededRng::new(seed),
            None => SeededRng::from_entropy(),
        }
    }

    fn check(&self) -> StepperResult<()> {
        if self.default_size > self.max_size {
            return Err(StepperError::Config(format!(
                "default_size {} exceeds max_size {}",
                self.default_size, self.max_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = VisualizerConfig::from_toml_str("").unwrap();
        assert_eq!(config, VisualizerConfig::default());
        assert_eq!(config.edges_for(5), 5);
    }

    #[test]
    fn test_partial_document() {
        let config = VisualizerConfig::from_toml_str("max_size = 8\nseed = 42\n").unwrap();
        assert_eq!(config.max_size, 8);
        assert_eq!(config.default_size, 3);
        assert_eq!(config.rng().seed(), 42);
    }

    #[test]
    fn test_validate_size() {
        let config = VisualizerConfig::default();
        assert!(config.validate_size(15).is_ok());
        assert!(matches!(
            config.validate_size(16),
            Err(StepperError::MatrixTooLarge { size: 16, max: 15 })
        ));
    }

    #[test]
    fn test_inconsistent_sizes_rejected() {
        let err = VisualizerConfig::from_toml_str("default_size = 20\n").unwrap_err();
        assert!(matches!(err, StepperError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "random_edges = 4").unwrap();

        let config = VisualizerConfig::load(file.path()).unwrap();
        assert_eq!(config.edges_for(10), 4);
    }
}
