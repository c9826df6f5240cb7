use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    aggregate::Aggregate,
    db::models::{NewReading, Reading},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadingDto {
    pub ts: DateTime<Utc>,
    pub room: String,
    /// Degrees Celsius
    pub temperature: f32,
    /// Relative humidity percentage
    pub humidity: f32,
}

impl From<Reading> for ReadingDto {
    fn from(r: Reading) -> Self {
        Self {
            ts: r.ts,
            room: r.room,
            temperature: r.temperature,
            humidity: r.humidity,
        }
    }
}

/// Response for `GET /sensor_data/mean`.
///
/// Both means are `null` when there are no readings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeanDto {
    pub mean_temperature: Option<f32>,
    pub mean_humidity: Option<f32>,
    /// Number of readings the means were computed over.
    pub len_data: usize,
}

impl From<Aggregate> for MeanDto {
    fn from(agg: Aggregate) -> Self {
        Self {
            mean_temperature: agg.mean_temperature(),
            mean_humidity: agg.mean_humidity(),
            len_data: agg.count(),
        }
    }
}

/// Request body for `POST /sensor_data`.
///
/// `temp` and `hum` are accepted for collectors that post the short names.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewReadingDto {
    /// Defaults to the time the row is inserted.
    pub ts: Option<DateTime<Utc>>,
    pub room: String,
    #[serde(alias = "temp")]
    pub temperature: f32,
    #[serde(alias = "hum")]
    pub humidity: f32,
}

impl From<NewReadingDto> for NewReading {
    fn from(r: NewReadingDto) -> Self {
        Self {
            ts: r.ts,
            room: r.room,
            temperature: r.temperature,
            humidity: r.humidity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PongDto {
    pub message: String,
}
