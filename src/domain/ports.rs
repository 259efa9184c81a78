use crate::domain::model::OutputFormat;

/// Where a draw gets its settings from: command line, TOML file, or a merge of both.
pub trait DrawSettings {
    fn participants(&self) -> &[String];
    fn min_participants(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn output_format(&self) -> OutputFormat;
}
