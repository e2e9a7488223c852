//! File-based Repository Adapters
//!
//! Store the program collection and the progress map as single YAML files
//! under a data directory. Each save rewrites the whole file.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::curriculum::Program;
use crate::domain::foundation::{DomainError, EnrollmentId};
use crate::domain::progress::CurriculumProgress;
use crate::ports::{ProgramRepository, ProgressRepository};

const PROGRAMS_FILE: &str = "programs.yaml";
const PROGRESS_FILE: &str = "progress.yaml";

/// Reads a whole YAML document, treating a missing file as an empty value.
async fn read_yaml<T>(path: &Path) -> Result<T, DomainError>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| io_error("read", path, e))?;

    if yaml.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&yaml).map_err(|e| {
        DomainError::storage(format!("Failed to parse {}: {}", path.display(), e))
            .with_detail("path", path.display().to_string())
    })
}

/// Serializes `value` and overwrites the file, creating parent directories.
async fn write_yaml<T>(path: &Path, value: &T) -> Result<(), DomainError>
where
    T: Serialize + ?Sized,
{
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| io_error("create directory for", path, e))?;
    }

    let yaml = serde_yaml::to_string(value).map_err(|e| {
        DomainError::storage(format!("Failed to serialize {}: {}", path.display(), e))
    })?;

    fs::write(path, yaml)
        .await
        .map_err(|e| io_error("write", path, e))
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::storage(format!("Failed to {} {}: {}", action, path.display(), err))
        .with_detail("path", path.display().to_string())
}

/// File storage for programs
#[derive(Debug, Clone)]
pub struct FileProgramRepository {
    path: PathBuf,
}

impl FileProgramRepository {
    /// Create a repository storing `programs.yaml` under `data_dir`
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(PROGRAMS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgramRepository for FileProgramRepository {
    async fn get_programs(&self) -> Result<Vec<Program>, DomainError> {
        read_yaml(&self.path).await
    }

    async fn save_programs(&self, programs: &[Program]) -> Result<(), DomainError> {
        write_yaml(&self.path, programs).await
    }
}

/// File storage for progress copies
#[derive(Debug, Clone)]
pub struct FileProgressRepository {
    path: PathBuf,
}

impl FileProgressRepository {
    /// Create a repository storing `progress.yaml` under `data_dir`
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(PROGRESS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProgressRepository for FileProgressRepository {
    async fn get_progress(&self) -> Result<HashMap<EnrollmentId, CurriculumProgress>, DomainError> {
        read_yaml(&self.path).await
    }

    async fn save_progress(
        &self,
        progress: &HashMap<EnrollmentId, CurriculumProgress>,
    ) -> Result<(), DomainError> {
        write_yaml(&self.path, progress).await
    }
}
