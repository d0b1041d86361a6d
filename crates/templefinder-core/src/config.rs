use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_timeout = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let value = parse_u64(var, default)?;
        if value == 0 {
            return Err(invalid(var, "timeout must be at least 1 second".to_string()));
        }
        Ok(value)
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_radius = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(var, format!("{value} is not a non-negative distance")));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("TEMPLEFINDER_ENV", "development"));

    let bind_addr = parse_addr("TEMPLEFINDER_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("TEMPLEFINDER_LOG_LEVEL", "info");
    let facilities_path = PathBuf::from(or_default(
        "TEMPLEFINDER_FACILITIES_PATH",
        "./config/facilities.yaml",
    ));

    let geocoder_base_url = or_default(
        "TEMPLEFINDER_GEOCODER_BASE_URL",
        "https://api.zippopotam.us",
    );
    let geocoder_country = or_default("TEMPLEFINDER_GEOCODER_COUNTRY", "us");
    let geocoder_timeout_secs = parse_timeout("TEMPLEFINDER_GEOCODER_TIMEOUT_SECS", "10")?;
    let geocoder_user_agent = or_default(
        "TEMPLEFINDER_GEOCODER_USER_AGENT",
        "templefinder/0.1 (location-search)",
    );

    let default_radius_miles = parse_radius("TEMPLEFINDER_DEFAULT_RADIUS_MILES", "50")?;
    let rate_limit_per_minute = parse_usize("TEMPLEFINDER_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        facilities_path,
        geocoder_base_url,
        geocoder_country,
        geocoder_timeout_secs,
        geocoder_user_agent,
        default_radius_miles,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
