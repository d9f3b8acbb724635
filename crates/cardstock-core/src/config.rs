use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// The upstream search endpoint rejects requests without a browser-style
/// `User-Agent`, so the default mimics one rather than identifying the tool.
const DEFAULT_SEARCH_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value. Every
/// variable has a default, so an empty environment always succeeds.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("CARDSTOCK_ENV", "development"));
    let bind_addr = parse_addr("CARDSTOCK_BIND_ADDR", "0.0.0.0:5001")?;
    let log_level = or_default("CARDSTOCK_LOG_LEVEL", "info");

    let search_url = or_default(
        "CARDSTOCK_SEARCH_URL",
        "https://stocktrack.ca/st/search.php",
    );
    let search_timeout_secs = parse_u64("CARDSTOCK_SEARCH_TIMEOUT_SECS", "10")?;
    let search_user_agent = or_default("CARDSTOCK_SEARCH_USER_AGENT", DEFAULT_SEARCH_USER_AGENT);
    let search_max_retries = parse_u32("CARDSTOCK_SEARCH_MAX_RETRIES", "2")?;
    let search_retry_backoff_base_secs =
        parse_u64("CARDSTOCK_SEARCH_RETRY_BACKOFF_BASE_SECS", "1")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        search_url,
        search_timeout_secs,
        search_user_agent,
        search_max_retries,
        search_retry_backoff_base_secs,
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
