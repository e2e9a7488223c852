//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigValidationError;

/// Which repository adapters the binary wires up
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Collections live in process memory and vanish on restart
    #[default]
    Memory,
    /// Collections are YAML files under `data_dir`
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding `programs.yaml` and `progress.yaml`
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend == StorageBackend::File
            && self.data_dir.as_ref().map_or(true, |dir| dir.as_os_str().is_empty())
        {
            return Err(ConfigValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_is_default() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_requires_data_dir() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: None,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingRequired("storage.data_dir"))
        );

        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: Some(PathBuf::from("./data")),
        };
        assert!(config.validate().is_ok());
    }
}
