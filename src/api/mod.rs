pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use handlers::ApiDoc;

pub fn router(pool: PgPool) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route(
            "/sensor_data",
            get(handlers::get_sensor_data).post(handlers::post_sensor_data),
        )
        .route("/sensor_data/latest", get(handlers::get_latest_sensor_data))
        .route("/sensor_data/mean", get(handlers::get_mean_sensor_data))
        .with_state(pool)
        .split_for_parts();

    router
        .route("/ping", get(handlers::ping))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
}
