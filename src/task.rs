use std::collections::BTreeMap;

use serde::Deserialize;

/// A task as returned by `GET /v1/tasks/{id}?view=FULL`.
///
/// Every field is optional and may be `null`: the gateway omits zero values,
/// and smaller views leave most of the message out.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Task {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Status label, e.g. `RUNNING`. Shown verbatim.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub resources: Option<Resources>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Resources {
    #[serde(default)]
    pub cpu_cores: Option<u32>,
    #[serde(default)]
    pub ram_gb: Option<f64>,
    #[serde(default)]
    pub disk_gb: Option<f64>,
    #[serde(default)]
    pub preemptible: Option<bool>,
    #[serde(default)]
    pub zones: Option<Vec<String>>,
}

/// Colour bucket for the status pill. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Good,
    Busy,
    Warn,
    Bad,
    Idle,
}

impl StatusTone {
    pub fn of(state: &str) -> Self {
        match state {
            "COMPLETE" => StatusTone::Good,
            "RUNNING" | "INITIALIZING" => StatusTone::Busy,
            "QUEUED" | "PAUSED" => StatusTone::Warn,
            "EXECUTOR_ERROR" | "SYSTEM_ERROR" | "CANCELED" => StatusTone::Bad,
            _ => StatusTone::Idle,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StatusTone::Good => "tone-good",
            StatusTone::Busy => "tone-busy",
            StatusTone::Warn => "tone-warn",
            StatusTone::Bad => "tone-bad",
            StatusTone::Idle => "tone-idle",
        }
    }
}

impl Task {
    pub fn tone(&self) -> StatusTone {
        self.state.as_deref().map(StatusTone::of).unwrap_or(StatusTone::Idle)
    }
}
