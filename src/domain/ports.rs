use crate::utils::error::Result;
use std::path::Path;

/// What the registrar needs to know about the project it edits.
pub trait ProjectModel {
    /// Whether a source file exists for the fully-qualified class name.
    fn source_exists(&self, class_name: &str) -> bool;
    fn resource_root(&self) -> &Path;
}

/// File access relative to the resource root. Errors carry the offending path.
pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Creates an empty file; an existing file is left untouched.
    fn create_file(&self, path: &Path) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
