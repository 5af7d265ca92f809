use actix_web::{web, App, HttpServer};
use std::io;
use zonewatch_api::routes;
use zonewatch_api::state::AppState;
use zonewatch_config::ServiceConfig;
use zonewatch_engine::{sample_zones, EventProcessor};
use zonewatch_observability::{init, log_startup, ObservabilityConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServiceConfig::from_env("zonewatch-api");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    // Zone set is fixed at startup; a duplicate or invalid zone is fatal
    // before the listener binds.
    let registry = sample_zones()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    tracing::info!(zones = registry.len(), "zone registry ready");

    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState {
        config,
        processor: EventProcessor::with_logging(registry),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
