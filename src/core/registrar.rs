use crate::core::{ProjectModel, Storage};
use crate::domain::model::{AppendOutcome, RegistrationFile, RegistrationPreview, SERVICES_DIRECTORY};
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{validate_class_name, validate_non_empty_string};
use std::path::{Path, PathBuf};

/// Adds implementation class names to `META-INF/services/<interface>` files.
pub struct ServiceRegistrar<P: ProjectModel, S: Storage> {
    project: P,
    storage: S,
}

impl<P: ProjectModel, S: Storage> ServiceRegistrar<P, S> {
    pub fn new(project: P, storage: S) -> Self {
        Self { project, storage }
    }

    pub fn project(&self) -> &P {
        &self.project
    }

    /// Registration file path relative to the resource root. The interface name is used verbatim.
    pub fn registration_path(interface: &str) -> PathBuf {
        PathBuf::from(format!("{}/{}", SERVICES_DIRECTORY, interface))
    }

    /// Appends `implementation` to the registration file of `interface`, creating the
    /// services directory and the file on demand. The whole file is read and rewritten.
    pub fn register(&self, interface: &str, implementation: &str) -> Result<()> {
        self.check_implementation(interface, implementation)?;

        let services_dir = Path::new(SERVICES_DIRECTORY);
        if !self.storage.exists(services_dir) {
            tracing::debug!("Creating services directory {}", services_dir.display());
            self.storage.create_dir_all(services_dir)?;
        }

        let path = Self::registration_path(interface);
        if !self.storage.exists(&path) {
            tracing::debug!("Creating registration file {}", path.display());
            self.storage.create_file(&path)?;
        }

        let content = self.storage.read_to_string(&path)?;
        let file = self.append_to(&path, &content, implementation)?;

        self.storage.write(&path, &file.render())?;

        tracing::info!(
            interface,
            implementation,
            entries = file.lines().len(),
            "Registered service implementation"
        );
        Ok(())
    }

    /// Same checks as [`register`](Self::register) but nothing is created or written.
    pub fn preview(&self, interface: &str, implementation: &str) -> Result<RegistrationPreview> {
        self.check_implementation(interface, implementation)?;

        let path = Self::registration_path(interface);
        let file_exists = self.storage.exists(&path);
        let content = if file_exists {
            self.storage.read_to_string(&path)?
        } else {
            String::new()
        };

        let file = self.append_to(&path, &content, implementation)?;

        Ok(RegistrationPreview {
            path,
            file_exists,
            contents: file.render(),
        })
    }

    fn check_implementation(&self, interface: &str, implementation: &str) -> Result<()> {
        validate_non_empty_string("interface", interface)?;
        validate_non_empty_string("implementation", implementation)?;
        // every registered line must be a class name, so reject paths and line breaks up front
        validate_class_name("implementation", implementation)?;

        if !self.project.source_exists(implementation) {
            tracing::debug!("No source found for {}", implementation);
            return Err(RegistrarError::ImplementationNotFound {
                interface: interface.to_string(),
                implementation: implementation.to_string(),
            });
        }
        Ok(())
    }

    fn append_to(&self, path: &Path, content: &str, implementation: &str) -> Result<RegistrationFile> {
        let mut file = RegistrationFile::parse(content);
        tracing::debug!("{} holds {} entries", path.display(), file.lines().len());

        match file.append(implementation) {
            AppendOutcome::Appended => Ok(file),
            AppendOutcome::AlreadyPresent => Err(RegistrarError::DuplicateRegistration {
                implementation: implementation.to_string(),
                file: self.project.resource_root().join(path),
            }),
        }
    }
}
