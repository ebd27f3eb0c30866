use crate::config::toml_config::{TomlConfig, DESCRIPTOR_FILE};
use crate::core::ProjectModel;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::is_qualified_class_name;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_DIR: &str = "src/main/java";
pub const DEFAULT_RESOURCE_DIR: &str = "src/main/resources";
pub const DEFAULT_SOURCE_EXTENSION: &str = "java";

/// Files whose presence marks a directory as a project root.
pub const PROJECT_MARKERS: [&str; 4] = [DESCRIPTOR_FILE, "pom.xml", "build.gradle", "build.gradle.kts"];

/// Walks from `start` up through its ancestors until a project marker is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        if let Some(marker) = PROJECT_MARKERS.iter().find(|m| dir.join(m).is_file()) {
            tracing::debug!("Found {} in {}", marker, dir.display());
            return Ok(dir.to_path_buf());
        }
    }

    Err(RegistrarError::ProjectNotFound {
        start: start.to_path_buf(),
    })
}

/// A project on the local filesystem with a conventional source/resource layout.
#[derive(Debug, Clone)]
pub struct LocalProject {
    root: PathBuf,
    source_root: PathBuf,
    resource_root: PathBuf,
    source_extensions: Vec<String>,
}

impl LocalProject {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source_root: root.join(DEFAULT_SOURCE_DIR),
            resource_root: root.join(DEFAULT_RESOURCE_DIR),
            source_extensions: vec![DEFAULT_SOURCE_EXTENSION.to_string()],
            root,
        }
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &TomlConfig) -> Self {
        let mut project = Self::new(root);
        if let Some(dir) = &config.project.source_dir {
            project = project.with_source_dir(dir);
        }
        if let Some(dir) = &config.project.resource_dir {
            project = project.with_resource_dir(dir);
        }
        if let Some(extensions) = &config.project.source_extensions {
            project = project.with_source_extensions(extensions.clone());
        }
        project
    }

    /// Relative directories are resolved against the project root.
    pub fn with_source_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.source_root = self.root.join(dir);
        self
    }

    pub fn with_resource_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.resource_root = self.root.join(dir);
        self
    }

    pub fn with_source_extensions(mut self, extensions: Vec<String>) -> Self {
        self.source_extensions = extensions;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// `com.foo.BarImpl` -> `<source_root>/com/foo/BarImpl.<extension>`
    pub fn source_path(&self, class_name: &str, extension: &str) -> PathBuf {
        let relative = format!("{}.{}", class_name.replace('.', "/"), extension);
        self.source_root.join(relative)
    }
}

impl ProjectModel for LocalProject {
    fn source_exists(&self, class_name: &str) -> bool {
        if !is_qualified_class_name(class_name) {
            tracing::debug!("{:?} is not a class name", class_name);
            return false;
        }

        self.source_extensions.iter().any(|ext| {
            let path = self.source_path(class_name, ext);
            tracing::debug!("Looking for {}", path.display());
            path.starts_with(&self.source_root) && path.is_file()
        })
    }

    fn resource_root(&self) -> &Path {
        &self.resource_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_project_root_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();
        let nested = temp_dir.path().join("src/main/java/com/foo");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_find_project_root_requires_marker() {
        let temp_dir = TempDir::new().unwrap();
        let err = find_project_root(temp_dir.path()).unwrap_err();
        assert!(matches!(err, RegistrarError::ProjectNotFound { .. }));
    }

    #[test]
    fn test_source_exists_uses_package_path() {
        let temp_dir = TempDir::new().unwrap();
        let project = LocalProject::new(temp_dir.path());
        let source = project.source_path("com.foo.BarImpl", "java");
        assert_eq!(
            source,
            temp_dir.path().join("src/main/java/com/foo/BarImpl.java")
        );

        assert!(!project.source_exists("com.foo.BarImpl"));
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, "package com.foo;").unwrap();
        assert!(project.source_exists("com.foo.BarImpl"));
    }

    #[cfg(unix)]
    #[test]
    fn test_source_outside_source_root_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let outside = tempfile::Builder::new()
            .prefix("Outside")
            .suffix(".java")
            .tempfile_in(std::env::temp_dir())
            .unwrap();

        // /tmp/OutsideXYZ.java spelled as a dotted name: .tmp.OutsideXYZ
        let stem = outside.path().file_stem().unwrap().to_str().unwrap();
        let parent = outside.path().parent().unwrap().to_str().unwrap();
        let dotted = format!("{}.{}", parent.replace('/', "."), stem);

        let project = LocalProject::new(temp_dir.path());
        assert!(!project.source_exists(&dotted));
        assert!(!project.source_exists("com/foo/BarImpl"));
        assert!(!project.source_exists("com..BarImpl"));
    }

    #[test]
    fn test_from_config_overrides_layout() {
        let temp_dir = TempDir::new().unwrap();
        let config = TomlConfig::from_toml_str(
            "[project]\nsource_dir = \"app\"\nresource_dir = \"res\"\nsource_extensions = [\"kt\"]\n",
        )
        .unwrap();

        let project = LocalProject::from_config(temp_dir.path(), &config);
        assert_eq!(project.source_root(), temp_dir.path().join("app"));
        assert_eq!(project.resource_root(), temp_dir.path().join("res"));

        let kotlin = temp_dir.path().join("app/com/foo/BarImpl.kt");
        fs::create_dir_all(kotlin.parent().unwrap()).unwrap();
        fs::write(&kotlin, "package com.foo").unwrap();
        assert!(project.source_exists("com.foo.BarImpl"));
    }
}
