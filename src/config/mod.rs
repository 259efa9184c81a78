pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::settings::Overrides;
#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa pairs so nobody gets their own name")]
pub struct CliConfig {
    /// Comma-separated participant names. When empty, names are entered interactively
    #[arg(long, env = "PARTICIPANTS", value_delimiter = ',')]
    pub participants: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for non-interactive draws
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimum participants required before interactive play can start
    #[arg(long)]
    pub min_participants: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            participants: self.participants.clone(),
            min_participants: self.min_participants,
            seed: self.seed,
            output_format: self.format,
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participants_flag() {
        let config = CliConfig::parse_from([
            "secret-santa",
            "--participants",
            "alice,bob,charlie",
            "--format",
            "csv",
            "--seed",
            "5",
        ]);
        assert_eq!(config.participants, vec!["alice", "bob", "charlie"]);

        let overrides = config.overrides();
        assert_eq!(overrides.output_format, Some(OutputFormat::Csv));
        assert_eq!(overrides.seed, Some(5));
        assert_eq!(overrides.min_participants, None);
    }

    #[test]
    fn test_participants_from_environment() {
        std::env::set_var("PARTICIPANTS", "alice,bob,charlie");

        let config = CliConfig::try_parse_from(["secret-santa"]).unwrap();
        assert_eq!(config.participants, vec!["alice", "bob", "charlie"]);

        std::env::remove_var("PARTICIPANTS");
    }
}
