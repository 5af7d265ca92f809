use zonewatch_config::ServiceConfig;
use zonewatch_engine::EventProcessor;

pub struct AppState {
    pub config: ServiceConfig,
    pub processor: EventProcessor,
}
