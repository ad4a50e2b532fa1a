use crate::domain::ports::Storage;
use crate::utils::error::{Result, SieveError};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Files on the local filesystem, resolved against `base_path`.
/// Absolute paths are used as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(self.resolve(path)).map_err(|e| SieveError::from_read_error(path, e))
    }

    fn open_writer(&self, path: &str) -> Result<Box<dyn Write + Send>> {
        let file = File::create(self.resolve(path)).map_err(|source| {
            SieveError::OutputUnwritable {
                path: path.to_string(),
                source,
            }
        })?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
