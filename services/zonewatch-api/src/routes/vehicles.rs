use actix_web::{get, web, HttpResponse};
use zonewatch_core::VehicleId;

use crate::routes::common::not_found;
use crate::state::AppState;

#[get("/vehicles/{id}/status")]
pub async fn vehicle_status(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let vehicle_id = VehicleId::new(id.into_inner());

    match state.processor.status(&vehicle_id) {
        Some(vehicle) => HttpResponse::Ok().json(vehicle),
        None => not_found("vehicle not found"),
    }
}
