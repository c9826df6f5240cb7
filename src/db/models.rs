use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `env_data` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Reading {
    pub ts: DateTime<Utc>,
    pub room: String,
    /// Degrees Celsius
    pub temperature: f32,
    /// Relative humidity percentage
    pub humidity: f32,
}

impl Reading {
    pub fn new(ts: DateTime<Utc>, room: impl Into<String>, temperature: f32, humidity: f32) -> Self {
        Self {
            ts,
            room: room.into(),
            temperature,
            humidity,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} temp={} hum={}",
            self.ts.to_rfc3339(),
            self.room,
            self.temperature,
            self.humidity
        )
    }
}

/// Values for a reading that has not been stored yet.
/// `ts = None` lets the database stamp it with `now()`.
#[derive(Debug, Clone)]
pub struct NewReading {
    pub ts: Option<DateTime<Utc>>,
    pub room: String,
    pub temperature: f32,
    pub humidity: f32,
}
