//! Presentation: text/json rendering of command results.

use crate::cli::parse::OutputFormat;
use crate::types::{Health, LogRow, Payload};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::{json, Value};

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Plan records are opaque; both formats print them as JSON.
pub fn format_payload(payload: &Payload) -> String {
    pretty(payload)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Plan listings render as a table when every record is an object with an `id`;
/// anything else falls back to JSON.
pub fn format_plan_list(plans: &Payload, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return pretty(plans);
    }
    let Some(records) = plans.as_array() else {
        return pretty(plans);
    };
    if records.is_empty() {
        return "No plans found.".to_string();
    }
    if !records
        .iter()
        .all(|r| r.as_object().map_or(false, |o| o.contains_key("id")))
    {
        return pretty(plans);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Created", "Title"]);
    for record in records {
        table.add_row(vec![
            cell(record.get("id")),
            cell(record.get("created_at")),
            cell(record.get("title")),
        ]);
    }
    format!("{}\n\nTotal: {} plan(s)", table, records.len())
}

pub fn format_log_row(row: &LogRow, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => pretty(&json!(row)),
        OutputFormat::Text => format!(
            "Logged #{}: {} {}x{}kg (RIR {}){}",
            row.id,
            row.name,
            row.reps,
            row.weight_kg,
            row.rir,
            row.focus
                .as_deref()
                .map(|f| format!(" [{}]", f))
                .unwrap_or_default()
        ),
    }
}

pub fn format_log_list(rows: &[LogRow], format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return pretty(&json!(rows));
    }
    if rows.is_empty() {
        return "No logs found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Exercise", "Reps", "Weight (kg)", "RIR", "Focus", "Time"]);
    for row in rows {
        table.add_row(vec![
            row.id.to_string(),
            row.name.clone(),
            row.reps.to_string(),
            row.weight_kg.to_string(),
            row.rir.to_string(),
            row.focus.clone().unwrap_or_else(|| "-".to_string()),
            row.timestamp.clone(),
        ]);
    }
    table.to_string()
}

pub fn format_health(base_url: &str, health: &Health, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => pretty(&json!({ "api_base": base_url, "ok": health.ok })),
        OutputFormat::Text if health.ok => format!("API at {} is healthy", base_url),
        OutputFormat::Text => format!("API at {} reported unhealthy", base_url),
    }
}
