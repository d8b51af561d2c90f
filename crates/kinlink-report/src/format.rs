//! Rendering a relation map as report text.

use kinlink_model::{DisplayName, RelationMap};

use crate::error::Result;

/// Output encoding of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One `"Name: Related, Related \n"` line per person.
    #[default]
    Text,
    /// A single JSON object keyed by display name, in map order.
    Json,
}

/// Lazily render each map entry as one report line.
pub fn format(relations: &RelationMap) -> impl Iterator<Item = String> + '_ {
    relations
        .iter()
        .map(|(name, related)| format_line(name, related))
}

pub fn format_line(name: &DisplayName, related: &[DisplayName]) -> String {
    let joined = related
        .iter()
        .map(DisplayName::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name}: {joined} \n")
}

/// Render the whole map as pretty-printed JSON, newline terminated.
pub fn render_json(relations: &RelationMap) -> Result<String> {
    let mut json = serde_json::to_string_pretty(relations)?;
    json.push('\n');
    Ok(json)
}
