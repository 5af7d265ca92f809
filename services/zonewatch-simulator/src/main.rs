use serde::Serialize;
use serde_json::Value;
use tokio::time::sleep;
use zonewatch_config::{ServiceConfig, SimulatorConfig};
use zonewatch_observability::{init, log_startup, ObservabilityConfig};

#[derive(Debug, Serialize)]
struct LocationEvent<'a> {
    vehicle_id: &'a str,
    latitude: f64,
    longitude: f64,
}

/// Scripted drive through the built-in zone set: start outside, enter
/// downtown, move within it, then land on the suburbs box boundary.
const SCENARIO: &[(&str, f64, f64)] = &[
    ("starts outside any zone", 0.0, -0.01),
    ("enters downtown", 0.01, 0.01),
    ("moves within downtown", 0.015, 0.015),
    ("moves onto the suburbs boundary", 0.03, 0.03),
    ("moves deeper into suburbs", 0.04, 0.035),
];

async fn send_event(
    client: &reqwest::Client,
    base_url: &str,
    event: &LocationEvent<'_>,
) -> Result<Value, reqwest::Error> {
    client
        .post(format!("{base_url}/events"))
        .json(event)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

async fn get_status(
    client: &reqwest::Client,
    base_url: &str,
    vehicle_id: &str,
) -> Result<Value, reqwest::Error> {
    client
        .get(format!("{base_url}/vehicles/{vehicle_id}/status"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env("zonewatch-simulator");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: None,
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let sim = SimulatorConfig::from_env();
    let client = reqwest::Client::new();
    tracing::info!(base_url = %sim.base_url, vehicle = %sim.vehicle_id, "starting simulation");

    for (step, (description, latitude, longitude)) in SCENARIO.iter().enumerate() {
        let event = LocationEvent {
            vehicle_id: &sim.vehicle_id,
            latitude: *latitude,
            longitude: *longitude,
        };
        match send_event(&client, &sim.base_url, &event).await {
            Ok(state) => tracing::info!(
                step = step + 1,
                description,
                zone = %state["zone_id"].as_str().unwrap_or("-"),
                status = %state["status"].as_str().unwrap_or("-"),
                "event accepted"
            ),
            Err(err) => {
                tracing::error!(step = step + 1, error = %err, "event rejected");
                continue;
            }
        }

        match get_status(&client, &sim.base_url, &sim.vehicle_id).await {
            Ok(status) => tracing::info!(
                vehicle = %sim.vehicle_id,
                zone = %status["zone_id"].as_str().unwrap_or("-"),
                status = %status["status"].as_str().unwrap_or("-"),
                "current status"
            ),
            Err(err) => tracing::error!(error = %err, "status lookup failed"),
        }

        sleep(sim.step_delay).await;
    }

    tracing::info!("simulation complete");
}
