//! Wire types for the plans API.
//!
//! Plan records are owned by the backend and stay opaque (`serde_json::Value`).
//! Request records mirror the backend's published request schema and are sent
//! as-is; validation happens server-side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Opaque structured value exchanged with the backend.
pub type Payload = serde_json::Value;

/// Plan identifier, interpolated verbatim into `/plans/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanId {
    Int(i64),
    Str(String),
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanId::Int(id) => write!(f, "{}", id),
            PlanId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PlanId {
    fn from(id: i64) -> Self {
        PlanId::Int(id)
    }
}

impl From<&str> for PlanId {
    fn from(id: &str) -> Self {
        PlanId::Str(id.to_string())
    }
}

impl From<String> for PlanId {
    fn from(id: String) -> Self {
        PlanId::Str(id)
    }
}

impl FromStr for PlanId {
    type Err = std::convert::Infallible;

    /// Integers become `Int`; anything else is kept as the exact string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(id) if id.to_string() == s => PlanId::Int(id),
            _ => PlanId::Str(s.to_string()),
        })
    }
}

/// Training focus of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Upper,
    Lower,
    Full,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Upper => "upper",
            Focus::Lower => "lower",
            Focus::Full => "full",
        }
    }
}

/// Available equipment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    #[default]
    Gym,
    Dumbbells,
    /// Bodyweight only; `none` on the wire.
    #[serde(rename = "none")]
    #[value(name = "none")]
    Bodyweight,
}

/// One prior set, used by the backend for overload calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    pub reps: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir: Option<i64>,
}

/// Prior sets keyed by exercise name.
pub type LastLog = BTreeMap<String, Vec<SetLog>>;

fn default_true() -> bool {
    true
}

/// Request body for `POST /plans/workout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRequest {
    pub focus: Focus,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub soreness_text: Option<String>,
    #[serde(default)]
    pub last_log: Option<LastLog>,
    /// Let the backend fall back to its stored logs when `last_log` is absent.
    #[serde(default = "default_true")]
    pub use_db_logs: bool,
}

impl WorkoutRequest {
    pub fn new(focus: Focus) -> Self {
        Self {
            focus,
            equipment: Equipment::default(),
            soreness_text: None,
            last_log: None,
            use_db_logs: true,
        }
    }
}

/// Request body for `POST /plans/week`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRequest {
    /// The backend accepts 2 through 7.
    pub days_per_week: u8,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub soreness_text: Option<String>,
    #[serde(default)]
    pub last_log: Option<LastLog>,
    #[serde(default = "default_true")]
    pub use_db_logs: bool,
}

impl WeekRequest {
    pub fn new(days_per_week: u8) -> Self {
        Self {
            days_per_week,
            equipment: Equipment::default(),
            soreness_text: None,
            last_log: None,
            use_db_logs: true,
        }
    }
}

/// Request body for `POST /logs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub reps: i64,
    pub weight_kg: f64,
    pub rir: i64,
    #[serde(default)]
    pub focus: Option<String>,
}

/// A stored exercise log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRow {
    pub id: i64,
    pub name: String,
    pub reps: i64,
    pub weight_kg: f64,
    pub rir: i64,
    #[serde(default)]
    pub focus: Option<String>,
    pub timestamp: String,
}

/// Envelope returned by `POST /logs/`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AddedLog {
    pub added: LogRow,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}
