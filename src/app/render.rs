use crate::domain::model::{Assignment, OutputFormat, Pairing};
use crate::utils::error::{Result, SantaError};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    participants: usize,
    pairs: &'a [Pairing],
}

pub fn render(assignment: &Assignment, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(assignment)),
        OutputFormat::Csv => render_csv(assignment),
        OutputFormat::Json => render_json(assignment),
    }
}

pub fn render_text(assignment: &Assignment) -> String {
    let mut lines = vec!["Secret Santa Assignments:".to_string()];
    for pair in assignment.pairs() {
        lines.push(format!("{} -> {}", pair.giver, pair.recipient));
    }
    lines.join("\n")
}

pub fn render_csv(assignment: &Assignment) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for pair in assignment.pairs() {
        writer.serialize(pair)?;
    }
    let bytes = writer.into_inner().map_err(|e| SantaError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| SantaError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn render_json(assignment: &Assignment) -> Result<String> {
    let report = JsonReport {
        generated_at: Utc::now(),
        participants: assignment.len(),
        pairs: assignment.pairs(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
