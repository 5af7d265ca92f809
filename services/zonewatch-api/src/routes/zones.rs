use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use zonewatch_core::ZoneId;
use zonewatch_geo::ZoneShape;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ZoneEntry<'a> {
    id: &'a ZoneId,
    shape: &'a ZoneShape,
}

#[get("/v1/zones")]
pub async fn list_zones(state: web::Data<AppState>) -> HttpResponse {
    let zones: Vec<ZoneEntry> = state
        .processor
        .registry()
        .zones()
        .iter()
        .map(|zone| ZoneEntry {
            id: &zone.id,
            shape: &zone.shape,
        })
        .collect();

    HttpResponse::Ok().json(zones)
}
