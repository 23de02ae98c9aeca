use std::env;
use tracing::warn;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_GATEWAY_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub clinic_api_url: String,
    pub request_timeout_secs: u64,
    /// Reservation statuses that do not count against slot capacity. Empty means every
    /// reservation row counts.
    pub reservation_excluded_statuses: Vec<String>,
    pub gateway_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            clinic_api_url: env::var("CLINIC_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_URL not set, using empty value");
                    String::new()
                }),
            request_timeout_secs: env::var("CLINIC_API_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| match raw.parse::<u64>() {
                    Ok(secs) if secs > 0 => Some(secs),
                    _ => {
                        warn!("CLINIC_API_TIMEOUT_SECS={} is not a positive integer, using default", raw);
                        None
                    }
                })
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            reservation_excluded_statuses: env::var("RESERVATION_EXCLUDED_STATUSES")
                .map(|raw| parse_status_list(&raw))
                .unwrap_or_default(),
            gateway_port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|raw| match raw.parse::<u16>() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("GATEWAY_PORT={} is not a valid port, using default", raw);
                        None
                    }
                })
                .unwrap_or(DEFAULT_GATEWAY_PORT),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.clinic_api_url.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clinic_api_url: String::new(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            reservation_excluded_statuses: Vec::new(),
            gateway_port: DEFAULT_GATEWAY_PORT,
        }
    }
}

fn parse_status_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|status| !status.is_empty())
        .map(str::to_string)
        .collect()
}
