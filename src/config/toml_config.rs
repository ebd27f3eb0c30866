use crate::utils::error::{RegistrarError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_extensions, validate_path, Validate};
use serde::Deserialize;
use std::path::Path;

/// 專案描述檔檔名，同時也是專案根目錄的標記之一
pub const DESCRIPTOR_FILE: &str = "serviceloader.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    pub source_dir: Option<String>,
    pub resource_dir: Option<String>,
    pub source_extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| RegistrarError::config_io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistrarError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESOURCE_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistrarError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得日誌等級
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// 取得日誌格式，未設定時使用 compact
    pub fn log_format(&self) -> Result<LogFormat> {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some(format) => format
                .parse::<LogFormat>()
                .map_err(|reason| RegistrarError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason,
                }),
            None => Ok(LogFormat::default()),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = &self.project.source_dir {
            validate_path("project.source_dir", dir)?;
        }

        if let Some(dir) = &self.project.resource_dir {
            validate_path("project.resource_dir", dir)?;
        }

        if let Some(extensions) = &self.project.source_extensions {
            validate_extensions("project.source_extensions", extensions)?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(RegistrarError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        self.log_format()?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
