use axum::{extract::State, http::StatusCode, Json};
use sqlx::PgPool;
use tracing::{debug, info};
use utoipa::OpenApi;

use super::{
    dto::{MeanDto, NewReadingDto, PongDto, ReadingDto},
    errors::AppError,
};
use crate::{aggregate::Aggregate, db, db::models::NewReading};

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Fetch every reading, ordered by `ts ASC`.
#[utoipa::path(
    get,
    path = "/sensor_data",
    responses(
        (status = 200, description = "All readings, oldest first", body = Vec<ReadingDto>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "sensor_data"
)]
pub async fn get_sensor_data(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<ReadingDto>>, AppError> {
    let rows = db::fetch_all_ascending(&pool).await?;
    debug!(rows = rows.len(), "Fetched readings");

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Fetch the most recent reading as an array of zero or one element.
#[utoipa::path(
    get,
    path = "/sensor_data/latest",
    responses(
        (status = 200, description = "Latest reading (empty array when there is none)", body = Vec<ReadingDto>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "sensor_data"
)]
pub async fn get_latest_sensor_data(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<ReadingDto>>, AppError> {
    let row = db::fetch_latest(&pool).await?;

    Ok(Json(row.into_iter().map(Into::into).collect()))
}

/// Mean temperature and humidity over every stored reading.
#[utoipa::path(
    get,
    path = "/sensor_data/mean",
    responses(
        (status = 200, description = "Means and the number of readings used", body = MeanDto),
        (status = 500, description = "Internal server error"),
    ),
    tag = "sensor_data"
)]
pub async fn get_mean_sensor_data(
    State(pool): State<PgPool>,
) -> Result<Json<MeanDto>, AppError> {
    let rows = db::fetch_all(&pool).await?;
    let aggregate = Aggregate::from_readings(&rows);
    debug!(?aggregate, "Computed mean");

    Ok(Json(aggregate.into()))
}

/// Store a single reading. `ts` defaults to the insertion time.
#[utoipa::path(
    post,
    path = "/sensor_data",
    request_body = NewReadingDto,
    responses(
        (status = 201, description = "Stored reading", body = ReadingDto),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "sensor_data"
)]
pub async fn post_sensor_data(
    State(pool): State<PgPool>,
    Json(body): Json<NewReadingDto>,
) -> Result<(StatusCode, Json<ReadingDto>), AppError> {
    let reading: NewReading = body.into();
    let stored = db::insert(&pool, &reading).await?;
    info!(reading = %stored, "Reading stored");

    Ok((StatusCode::CREATED, Json(stored.into())))
}

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

/// Returns `{"message":"pong"}` while the process is up. Never touches the database.
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is alive", body = PongDto),
    ),
    tag = "system"
)]
pub async fn ping() -> Json<PongDto> {
    Json(PongDto {
        message: "pong".to_owned(),
    })
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(
        get_sensor_data,
        get_latest_sensor_data,
        get_mean_sensor_data,
        post_sensor_data,
        ping
    ),
    components(schemas(ReadingDto, MeanDto, NewReadingDto, PongDto)),
    tags(
        (name = "sensor_data", description = "Environmental sensor readings"),
        (name = "system",      description = "System endpoints"),
    ),
    info(
        title = "Env Data API",
        version = "0.1.0",
        description = "REST API for room temperature and humidity readings"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
