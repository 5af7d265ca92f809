use serde::{Deserialize, Serialize};
use std::{env, fmt, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" | "development" => Self::Dev,
            "test" | "testing" => Self::Test,
            "staging" => Self::Staging,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub environment: Environment,
    pub region: Option<String>,
    pub bind_addr: String,
    pub metrics_addr: Option<String>,
    pub log_level: String,
}

impl ServiceConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        let service_name = env_var("ZW_SERVICE_NAME", default_service_name.to_string());
        let environment = Environment::from_env(&env_var("ZW_ENV", "local".to_string()));
        let region = env::var("ZW_REGION").ok();
        let bind_addr = env_var("ZW_BIND_ADDR", "0.0.0.0:8000".to_string());
        let metrics_addr = env::var("ZW_METRICS_ADDR").ok();
        let log_level = env_var("ZW_LOG_LEVEL", "info".to_string());

        Self {
            service_name,
            environment,
            region,
            bind_addr,
            metrics_addr,
            log_level,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub base_url: String,
    pub vehicle_id: String,
    pub step_delay: Duration,
}

impl SimulatorConfig {
    pub fn from_env() -> Self {
        let base_url = env_var("ZW_SIM_BASE_URL", "http://127.0.0.1:8000".to_string());
        let vehicle_id = env_var("ZW_SIM_VEHICLE_ID", "taxi-001".to_string());
        let step_delay = Duration::from_millis(env_var_u64("ZW_SIM_STEP_DELAY_MS", 1000));

        Self {
            base_url,
            vehicle_id,
            step_delay,
        }
    }
}

fn env_var(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_var_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}
