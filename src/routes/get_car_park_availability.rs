use crate::{
    types::{app_state::AppState, output_rows::CarParkRow},
    utils::datamall_client::CAR_PARK_AVAILABILITY_PATH,
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
pub async fn get_car_park_availability(State(state): State<AppState>) -> Response {
    let rows = state
        .datamall_client
        .fetch_records(CAR_PARK_AVAILABILITY_PATH)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to fetch car park availability: {}", e);
            Vec::new()
        })
        .iter()
        .map(CarParkRow::from_record)
        .collect::<Vec<CarParkRow>>();

    (StatusCode::OK, Json(rows)).into_response()
}
