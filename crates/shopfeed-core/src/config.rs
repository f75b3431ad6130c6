use std::path::PathBuf;

use secrecy::SecretString;

use crate::app_config::{AppConfig, FeedSettings};
use crate::ConfigError;

/// Shopify rejects `limit` values above this.
const MAX_PAGE_LIMIT: u32 = 250;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    // Blank values count as unset.
    let or_default = |var: &str, default: &str| -> String {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => default.to_string(),
        }
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

    let access_token = SecretString::from(require("SHOPIFY_ACCESS_TOKEN")?);

    let shop_url = normalize_shop_url(&or_default("SHOPFEED_SHOP", "vdagama.myshopify.com"))?;
    let api_version = or_default("SHOPFEED_API_VERSION", "2024-01");

    let page_limit = parse_u32("SHOPFEED_PAGE_LIMIT", "250")?;
    if page_limit == 0 || page_limit > MAX_PAGE_LIMIT {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPFEED_PAGE_LIMIT".to_string(),
            reason: format!("must be between 1 and {MAX_PAGE_LIMIT}, got {page_limit}"),
        });
    }

    let output_path = PathBuf::from(or_default("SHOPFEED_OUTPUT_PATH", "feed.xml"));
    let log_level = or_default("SHOPFEED_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SHOPFEED_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPFEED_USER_AGENT", "shopfeed/0.1 (merchant-feed)");

    let defaults = FeedSettings::default();
    let feed = FeedSettings {
        storefront_url: or_default("SHOPFEED_STOREFRONT_URL", &defaults.storefront_url)
            .trim_end_matches('/')
            .to_string(),
        default_brand: or_default("SHOPFEED_DEFAULT_BRAND", &defaults.default_brand),
        currency: or_default("SHOPFEED_CURRENCY", &defaults.currency),
        condition: or_default("SHOPFEED_CONDITION", &defaults.condition),
        title: or_default("SHOPFEED_FEED_TITLE", &defaults.title),
        description: or_default("SHOPFEED_FEED_DESCRIPTION", &defaults.description),
    };

    Ok(AppConfig {
        access_token,
        shop_url,
        api_version,
        page_limit,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        feed,
    })
}

/// Turns a configured shop into an origin with a scheme.
///
/// A bare host like `"vdagama.myshopify.com"` becomes
/// `"https://vdagama.myshopify.com"`; an explicit scheme is kept so tests can
/// point at a local `http://` server.
fn normalize_shop_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPFEED_SHOP".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if trimmed.contains("://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{trimmed}"))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
