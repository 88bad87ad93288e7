use crate::core::Storage;
use crate::utils::error::{BuildError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn list_dir(&self, path: &str) -> Result<Vec<String>> {
        let full_path = Path::new(&self.base_path).join(path);
        let read_dir = fs::read_dir(&full_path).map_err(|e| BuildError::InputDirError {
            path: full_path.display().to_string(),
            source: e,
        })?;

        // Entries come back in whatever order the filesystem reports them;
        // deliberately not sorted.
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| BuildError::InputDirError {
                path: full_path.display().to_string(),
                source: e,
            })?;
            entries.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(entries)
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read(&full_path).map_err(|e| BuildError::InputFileError {
            path: full_path.display().to_string(),
            source: e,
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        // The parent directory must already exist; a missing parent aborts
        // the run rather than being created.
        fs::write(&full_path, data).map_err(|e| BuildError::OutputError {
            path: full_path.display().to_string(),
            source: e,
        })
    }
}
