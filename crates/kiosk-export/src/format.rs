use std::fmt;
use std::str::FromStr;

use crate::csv::to_csv;
use crate::error::ExportError;
use crate::payload::ExportPayload;
use crate::render::render_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "text",
        }
    }

    pub fn render(self, payload: &ExportPayload) -> Result<String, ExportError> {
        match self {
            ExportFormat::Json => payload.to_json(),
            ExportFormat::Csv => Ok(to_csv(payload)),
            ExportFormat::Text => render_summary(payload),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
