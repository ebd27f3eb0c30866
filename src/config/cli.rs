use crate::core::Storage;
use crate::utils::error::{RegistrarError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `Storage` backed by the local filesystem, rooted at the project's resource directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        self.full_path(path).exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.full_path(path);
        fs::create_dir_all(&full_path).map_err(|e| RegistrarError::io(full_path, e))
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        let full_path = self.full_path(path);
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&full_path)
            .map(|_| ())
            .map_err(|e| RegistrarError::io(full_path, e))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.full_path(path);
        fs::read_to_string(&full_path).map_err(|e| RegistrarError::io(full_path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let full_path = self.full_path(path);
        fs::write(&full_path, contents).map_err(|e| RegistrarError::io(full_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_file_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let path = Path::new("com.foo.Bar");

        storage.write(path, "com.foo.BarImpl").unwrap();
        storage.create_file(path).unwrap();

        assert_eq!(storage.read_to_string(path).unwrap(), "com.foo.BarImpl");
    }

    #[test]
    fn test_errors_carry_full_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        match storage.read_to_string(Path::new("missing")) {
            Err(RegistrarError::Io { path, .. }) => assert_eq!(path, temp_dir.path().join("missing")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
