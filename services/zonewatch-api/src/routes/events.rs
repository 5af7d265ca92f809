use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use zonewatch_core::{now_utc, Timestamp, VehicleId};
use zonewatch_geo::Point;

use crate::routes::common::bad_request;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LocationEvent {
    pub vehicle_id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

#[post("/events")]
pub async fn receive_event(
    state: web::Data<AppState>,
    payload: web::Json<LocationEvent>,
) -> HttpResponse {
    let event = payload.into_inner();
    if event.vehicle_id.trim().is_empty() {
        return bad_request("vehicle_id is required");
    }
    if !event.latitude.is_finite() || !(-90.0..=90.0).contains(&event.latitude) {
        return bad_request("latitude must be within [-90, 90]");
    }
    if !event.longitude.is_finite() || !(-180.0..=180.0).contains(&event.longitude) {
        return bad_request("longitude must be within [-180, 180]");
    }

    tracing::info!(
        vehicle = %event.vehicle_id,
        latitude = event.latitude,
        longitude = event.longitude,
        "received location event"
    );

    metrics::counter!("zonewatch_events_total").increment(1);

    let timestamp = event.timestamp.unwrap_or_else(now_utc);
    // Point axis order is GIS-standard: x = longitude, y = latitude.
    let point = Point::new(event.longitude, event.latitude);
    let new_state =
        state
            .processor
            .process_ping(VehicleId::new(event.vehicle_id), point, timestamp);

    HttpResponse::Ok().json(new_state)
}
