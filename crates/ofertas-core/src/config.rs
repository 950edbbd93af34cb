use crate::app_config::AppConfig;
use crate::{ConfigError, DEFAULT_DISCOUNT_THRESHOLD};

const DEFAULT_URL_TEMPLATE: &str =
    "https://www.mercadolivre.com.br/ofertas?container_id=MLB779362-1&page={page}";
const DEFAULT_USER_AGENT: &str = "ofertas/0.1 (promotions-catalog)";
const DEFAULT_PROJECT_ID: &str = "ISMAEL_DIEGO_FELIPE_UERBERT";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
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
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Range and threshold consistency is checked
/// later by [`AppConfig::pipeline_config`], after CLI overrides are applied.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        or_default(var, default)
            .parse::<u8>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        parse_flag(&or_default(var, default)).ok_or_else(|| {
            invalid(
                var,
                "expected one of true/false/1/0/yes/no".to_string(),
            )
        })
    };

    let url_template = or_default("OFERTAS_URL_TEMPLATE", DEFAULT_URL_TEMPLATE);
    let first_page = parse_u32("OFERTAS_FIRST_PAGE", "1")?;
    let last_page = parse_u32("OFERTAS_LAST_PAGE", "19")?;
    let discount_threshold = parse_u8(
        "OFERTAS_DISCOUNT_THRESHOLD",
        &DEFAULT_DISCOUNT_THRESHOLD.to_string(),
    )?;
    let stop_on_empty_page = parse_bool("OFERTAS_STOP_ON_EMPTY_PAGE", "false")?;
    let request_timeout_secs = parse_u64("OFERTAS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("OFERTAS_USER_AGENT", DEFAULT_USER_AGENT);
    let output_dir = PathBuf::from(or_default("OFERTAS_OUTPUT_DIR", "."));
    let project_id = or_default("OFERTAS_PROJECT_ID", DEFAULT_PROJECT_ID);
    let log_level = or_default("OFERTAS_LOG_LEVEL", "info");

    if project_id.trim().is_empty() {
        return Err(invalid("OFERTAS_PROJECT_ID", "must not be empty".to_string()));
    }

    Ok(AppConfig {
        url_template,
        first_page,
        last_page,
        discount_threshold,
        stop_on_empty_page,
        request_timeout_secs,
        user_agent,
        output_dir,
        project_id,
        log_level,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
