use crate::{
    types::{app_state::AppState, output_rows::TrafficIncidentRow},
    utils::datamall_client::TRAFFIC_INCIDENTS_PATH,
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
pub async fn get_traffic_incidents(State(state): State<AppState>) -> Response {
    let rows = state
        .datamall_client
        .fetch_records(TRAFFIC_INCIDENTS_PATH)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to fetch traffic incidents: {}", e);
            Vec::new()
        })
        .iter()
        .map(TrafficIncidentRow::from_record)
        .collect::<Vec<TrafficIncidentRow>>();

    (StatusCode::OK, Json(rows)).into_response()
}
