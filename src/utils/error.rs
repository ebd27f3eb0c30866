use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Implementation class {implementation} does not exist in the current project")]
    ImplementationNotFound {
        interface: String,
        implementation: String,
    },

    #[error("Implementation {implementation} is already declared in {}", .file.display())]
    DuplicateRegistration {
        implementation: String,
        file: PathBuf,
    },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a descriptor or locating the project directory, as opposed to editing it.
    #[error("Cannot read {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No project found at or above {}", .start.display())]
    ProjectNotFound { start: PathBuf },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Project,
    Registration,
    Filesystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistrarError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ImplementationNotFound { .. } | Self::ProjectNotFound { .. } => {
                ErrorCategory::Project
            }
            Self::DuplicateRegistration { .. } => ErrorCategory::Registration,
            Self::Io { .. } => ErrorCategory::Filesystem,
            Self::ConfigIo { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Drives the process exit code: Low=0, Medium=2, High=1, Critical=3.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // re-registering is a no-op
            Self::DuplicateRegistration { .. } => ErrorSeverity::Low,
            Self::ProjectNotFound { .. }
            | Self::ConfigIo { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            Self::ImplementationNotFound { .. } => ErrorSeverity::High,
            Self::Io { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// The single line shown to the user for this failure.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ImplementationNotFound {
                interface,
                implementation,
            } => format!(
                "The implementation class {} does not exist in the current project. \
                 You can declare only existing implementations of {}",
                implementation, interface
            ),
            Self::DuplicateRegistration {
                implementation,
                file,
            } => format!(
                "The implementation {} is already declared in {}.",
                implementation,
                file.display()
            ),
            Self::Io { path, source } => {
                format!("Could not update {}. Reason: {}", path.display(), source)
            }
            Self::ConfigIo { path, source } => {
                format!("Could not read {}. Reason: {}", path.display(), source)
            }
            Self::ProjectNotFound { start } => format!(
                "No project found in {} or any of its parent directories",
                start.display()
            ),
            Self::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ImplementationNotFound { .. } => {
                "Create the implementation class first, or check the spelling of its fully-qualified name"
            }
            Self::DuplicateRegistration { .. } => "Nothing to do, the registration already exists",
            Self::Io { .. } => "Check that the resource directory exists and is writable",
            Self::ConfigIo { .. } => "Check that --project-dir and --config point at readable paths",
            Self::ProjectNotFound { .. } => {
                "Run the command inside a project, or pass --project-dir pointing at one"
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the value in serviceloader.toml or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
