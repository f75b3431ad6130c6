//! HTTP client for the Shopify Admin API `products.json` endpoint.

mod fetch_all;
mod origin;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::error::ShopifyError;
use crate::types::ShopifyProductsResponse;

pub use origin::extract_store_origin;

/// Maximum number of pages to fetch before returning an error.
/// Prevents infinite loops on cycling cursors.
pub(super) const MAX_PAGES: usize = 1000;

/// Field projection requested on every listing call.
pub(super) const PRODUCT_FIELDS: &str = "id,title,body_html,handle,vendor,variants,images";

/// Header carrying the Admin API access token (`X-Shopify-Access-Token`).
const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// HTTP client for one shop's Admin API `products.json` endpoint.
///
/// The access token is installed as a sensitive default header, so it is
/// sent on every request and never shows up in `Debug` output. Every non-2xx
/// response is surfaced as [`ShopifyError::Upstream`] with the response body
/// attached. Nothing is retried.
pub struct ShopifyClient {
    pub(super) client: Client,
    /// Scheme + host (+ port) of the shop, e.g. `"https://vdagama.myshopify.com"`.
    pub(super) origin: String,
    pub(super) api_version: String,
}

impl ShopifyClient {
    /// Creates a `ShopifyClient` for `shop_url` with a request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::InvalidShopUrl`] if `shop_url` has no parseable origin.
    /// - [`ShopifyError::InvalidAccessToken`] if the token is not a valid
    ///   header value.
    /// - [`ShopifyError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(
        shop_url: &str,
        api_version: &str,
        access_token: &SecretString,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ShopifyError> {
        let origin = extract_store_origin(shop_url)?;

        let mut token = HeaderValue::from_str(access_token.expose_secret())
            .map_err(|_| ShopifyError::InvalidAccessToken)?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            origin,
            api_version: api_version.to_owned(),
        })
    }

    /// Fetches one page of products from `url`.
    ///
    /// Returns the parsed [`ShopifyProductsResponse`] and the raw value of the
    /// `Link` response header (if present). Callers pass the `Link` value to
    /// [`crate::pagination::extract_next_link`] to find the next page.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::Upstream`]: any non-2xx status, with the response body.
    /// - [`ShopifyError::Http`]: network or TLS failure.
    /// - [`ShopifyError::Deserialize`]: response body is not valid JSON or
    ///   does not match the expected shape.
    pub async fn fetch_products_page(
        &self,
        url: &str,
    ) -> Result<(ShopifyProductsResponse, Option<String>), ShopifyError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ShopifyError::Upstream {
                status: status.as_u16(),
                url: url.to_owned(),
                body,
            });
        }

        // Extract the Link header before consuming the response body.
        let link_header = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ShopifyProductsResponse>(&body).map_err(|e| {
            ShopifyError::Deserialize {
                context: format!("products page from {url}"),
                source: e,
            }
        })?;

        Ok((parsed, link_header))
    }

    /// Builds the first-page `products.json` URL for the given shop, API
    /// version and page size.
    ///
    /// Later pages are never built here; they come verbatim from the
    /// server's `Link` header.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::InvalidShopUrl`] if the origin cannot be
    /// parsed as a URL base.
    pub fn products_url(
        shop_url: &str,
        api_version: &str,
        limit: u32,
    ) -> Result<String, ShopifyError> {
        let origin = extract_store_origin(shop_url)?;
        let base = format!("{origin}/admin/api/{api_version}/products.json");
        let mut url = reqwest::Url::parse(&base).map_err(|e| ShopifyError::InvalidShopUrl {
            shop_url: shop_url.to_owned(),
            reason: format!("\"{base}\" is not a valid URL: {e}"),
        })?;

        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("fields", PRODUCT_FIELDS);

        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
