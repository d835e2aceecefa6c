use crate::{
    types::{app_state::AppState, output_rows::SpeedBandRow},
    utils::datamall_client::TRAFFIC_SPEED_BANDS_PATH,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::error;

#[cfg_attr(test, debug_handler)]
pub async fn get_traffic_speed_data(State(state): State<AppState>) -> Response {
    let rows = state
        .datamall_client
        .fetch_records(TRAFFIC_SPEED_BANDS_PATH)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to fetch traffic speed bands: {}", e);
            Vec::new()
        })
        .iter()
        .map(SpeedBandRow::from_record)
        .collect::<Vec<SpeedBandRow>>();

    (StatusCode::OK, Json(rows)).into_response()
}
