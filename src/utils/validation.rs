use crate::utils::error::{RegistrarError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Dot-separated identifier segments, e.g. `com.foo.Bar` or `com.foo.Outer$Inner`.
pub fn is_qualified_class_name(name: &str) -> bool {
    name.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
                chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
            }
            _ => false,
        }
    })
}

pub fn validate_class_name(field_name: &str, value: &str) -> Result<()> {
    if !is_qualified_class_name(value) {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Expected a fully-qualified class name such as com.foo.Bar".to_string(),
        });
    }
    Ok(())
}

pub fn validate_extensions(field_name: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(RegistrarError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one source extension is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for ext in extensions {
        validate_non_empty_string(field_name, ext)?;
        if ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(RegistrarError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Extension must be a bare suffix such as 'java'".to_string(),
            });
        }
        if !seen.insert(ext.as_str()) {
            return Err(RegistrarError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: ext.clone(),
                reason: "Extension listed more than once".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("project.source_dir", "src/main/java").is_ok());
        assert!(validate_path("project.source_dir", "").is_err());
        assert!(validate_path("project.source_dir", "src\0java").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("interface", "com.foo.Bar").is_ok());
        assert!(validate_non_empty_string("interface", "   ").is_err());
    }

    #[test]
    fn test_qualified_class_names() {
        assert!(is_qualified_class_name("com.foo.Bar"));
        assert!(is_qualified_class_name("Bar"));
        assert!(is_qualified_class_name("com.foo.Outer$Inner"));
        assert!(is_qualified_class_name("com.foo_bar.Baz2"));

        assert!(!is_qualified_class_name(""));
        assert!(!is_qualified_class_name(".tmp.X"));
        assert!(!is_qualified_class_name("com.foo."));
        assert!(!is_qualified_class_name("a..B"));
        assert!(!is_qualified_class_name("com/foo/X"));
        assert!(!is_qualified_class_name("com\\foo.X"));
        assert!(!is_qualified_class_name("com.foo.X\ncom.foo.Y"));
        assert!(!is_qualified_class_name("com.foo.1Bad"));
        assert!(!is_qualified_class_name("com.foo.Bar "));
    }

    #[test]
    fn test_validate_class_name_escapes_value() {
        match validate_class_name("implementation", "a.B\nc.D") {
            Err(RegistrarError::InvalidConfigValueError { value, .. }) => {
                assert_eq!(value, "a.B\\nc.D")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_extensions() {
        let ok = vec!["java".to_string(), "kt".to_string()];
        assert!(validate_extensions("project.source_extensions", &ok).is_ok());

        assert!(validate_extensions("project.source_extensions", &[]).is_err());
        assert!(validate_extensions("project.source_extensions", &[".java".to_string()]).is_err());
        let dup = vec!["java".to_string(), "java".to_string()];
        assert!(validate_extensions("project.source_extensions", &dup).is_err());
    }
}
