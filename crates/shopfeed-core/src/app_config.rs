use std::path::PathBuf;

use secrecy::SecretString;

/// Business constants and channel metadata baked into every generated feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    /// Public storefront origin used for product links, e.g. `"https://vdagama.com"`.
    pub storefront_url: String,
    /// Brand written when a product has no vendor.
    pub default_brand: String,
    /// ISO 4217 code appended to every price.
    pub currency: String,
    /// Merchant `g:condition` value applied to all items.
    pub condition: String,
    pub title: String,
    pub description: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            storefront_url: "https://vdagama.com".to_string(),
            default_brand: "VDagama".to_string(),
            currency: "EUR".to_string(),
            condition: "new".to_string(),
            title: "VDagama Product Feed".to_string(),
            description: "Shopify feed for Facebook Catalog".to_string(),
        }
    }
}

pub struct AppConfig {
    /// Admin API access token sent as `X-Shopify-Access-Token`.
    pub access_token: SecretString,
    /// Shop origin including scheme, e.g. `"https://vdagama.myshopify.com"`.
    pub shop_url: String,
    /// Admin API version segment, e.g. `"2024-01"`.
    pub api_version: String,
    /// Products requested per page (Shopify caps this at 250).
    pub page_limit: u32,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub feed: FeedSettings,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("access_token", &"[redacted]")
            .field("shop_url", &self.shop_url)
            .field("api_version", &self.api_version)
            .field("page_limit", &self.page_limit)
            .field("output_path", &self.output_path)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("feed", &self.feed)
            .finish()
    }
}
