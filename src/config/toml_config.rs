use crate::core::DrawSettings;
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, SantaError};
use crate::utils::names::normalize_name;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub draw: DrawConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawConfig {
    #[serde(default)]
    pub participants: Vec<String>,
    pub min_participants: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SantaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXTRA_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SantaError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(min) = self.draw.min_participants {
            validation::validate_positive_number("draw.min_participants", min, 2)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validation::validate_one_of("output.format", &format.to_lowercase(), &OutputFormat::NAMES)?;
        }

        let normalized: Vec<String> = self
            .draw
            .participants
            .iter()
            .map(|name| normalize_name(name))
            .collect();
        validation::validate_unique_names("draw.participants", &normalized)?;

        Ok(())
    }
}

impl DrawSettings for TomlConfig {
    fn participants(&self) -> &[String] {
        &self.draw.participants
    }

    fn min_participants(&self) -> usize {
        self.draw
            .min_participants
            .unwrap_or(crate::app::session::DEFAULT_MIN_PARTICIPANTS)
    }

    fn seed(&self) -> Option<u64> {
        self.draw.seed
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
