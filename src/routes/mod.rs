use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_car_park_availability;
mod get_traffic_incidents;
mod get_traffic_speed_data;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/get_traffic_speed_data",
        get(get_traffic_speed_data::get_traffic_speed_data),
    )
    .route(
        "/get_data",
        get(get_car_park_availability::get_car_park_availability),
    )
    .route(
        "/traffic_incidents",
        get(get_traffic_incidents::get_traffic_incidents),
    )
}
