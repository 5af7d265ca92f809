pub mod common;
pub mod events;
pub mod health;
pub mod status;
pub mod vehicles;
pub mod zones;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(status::status)
        .service(events::receive_event)
        .service(vehicles::vehicle_status)
        .service(zones::list_zones);
}
