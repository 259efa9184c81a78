use crate::app::session::{SessionOptions, DEFAULT_MIN_PARTICIPANTS};
use crate::core::derangement::MIN_PARTICIPANTS;
use crate::core::DrawSettings;
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, SantaError};
use crate::utils::names::normalize_name;
use crate::utils::validation::{self, Validate};

/// Effective settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub participants: Vec<String>,
    pub min_participants: usize,
    pub seed: Option<u64>,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            min_participants: DEFAULT_MIN_PARTICIPANTS,
            seed: None,
            output_format: OutputFormat::Text,
        }
    }
}

/// Values given explicitly on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub participants: Vec<String>,
    pub min_participants: Option<usize>,
    pub seed: Option<u64>,
    pub output_format: Option<OutputFormat>,
}

impl Settings {
    /// 以檔案設定為底，再套用命令列覆蓋
    ///
    /// A participant list that was given but holds only blank entries is an
    /// error rather than a silent switch to interactive mode.
    pub fn resolve(file: Option<&dyn DrawSettings>, overrides: Overrides) -> Result<Self> {
        let base = match file {
            Some(file) => Settings {
                participants: file.participants().to_vec(),
                min_participants: file.min_participants(),
                seed: file.seed(),
                output_format: file.output_format(),
            },
            None => Settings::default(),
        };

        let cli_participants: Vec<String> = overrides
            .participants
            .iter()
            .map(|name| normalize_name(name))
            .filter(|name| !name.is_empty())
            .collect();

        if !overrides.participants.is_empty() && cli_participants.is_empty() {
            return Err(SantaError::invalid_input(
                "The participant list was supplied but contains no names",
            ));
        }

        Ok(Settings {
            participants: if cli_participants.is_empty() {
                base.participants
            } else {
                cli_participants
            },
            min_participants: overrides.min_participants.unwrap_or(base.min_participants),
            seed: overrides.seed.or(base.seed),
            output_format: overrides.output_format.unwrap_or(base.output_format),
        })
    }

    /// No upfront participant list means names are entered interactively.
    pub fn is_interactive(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            min_participants: self.min_participants,
            seed: self.seed,
        }
    }
}

impl DrawSettings for Settings {
    fn participants(&self) -> &[String] {
        &self.participants
    }

    fn min_participants(&self) -> usize {
        self.min_participants
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number(
            "min_participants",
            self.min_participants,
            MIN_PARTICIPANTS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;

    fn file_config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[draw]
participants = ["alice", "bob", "charlie"]
min_participants = 4
seed = 1

[output]
format = "csv"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_are_interactive() {
        let settings = Settings::resolve(None, Overrides::default()).unwrap();
        assert!(settings.is_interactive());
        assert_eq!(settings.min_participants, 3);
        assert_eq!(settings.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_file_values_used_without_overrides() {
        let file = file_config();
        let settings = Settings::resolve(Some(&file), Overrides::default()).unwrap();
        assert!(!settings.is_interactive());
        assert_eq!(settings.participants.len(), 3);
        assert_eq!(settings.min_participants, 4);
        assert_eq!(settings.seed, Some(1));
        assert_eq!(settings.output_format, OutputFormat::Csv);
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = file_config();
        let overrides = Overrides {
            participants: vec![" dana".to_string(), "".to_string(), "EVE".to_string()],
            min_participants: Some(2),
            seed: Some(9),
            output_format: Some(OutputFormat::Json),
        };
        let settings = Settings::resolve(Some(&file), overrides).unwrap();
        assert_eq!(settings.participants, vec!["Dana", "Eve"]);
        assert_eq!(settings.min_participants, 2);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_blank_participant_list_is_invalid_input() {
        let overrides = Overrides {
            participants: vec!["".to_string(), " ".to_string(), "".to_string()],
            ..Overrides::default()
        };
        let err = Settings::resolve(None, overrides).unwrap_err();
        assert!(matches!(err, SantaError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validate_rejects_minimum_below_two() {
        let settings = Settings {
            min_participants: 1,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
