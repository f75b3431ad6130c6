use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Shopify API error (HTTP {status}) from {url}: {body}")]
    Upstream {
        status: u16,
        url: String,
        body: String,
    },

    #[error("pagination limit reached for {shop_url}: exceeded {max_pages} pages")]
    PaginationLimit { shop_url: String, max_pages: usize },

    #[error("access token contains characters not allowed in an HTTP header")]
    InvalidAccessToken,

    #[error("invalid shop URL \"{shop_url}\": {reason}")]
    InvalidShopUrl { shop_url: String, reason: String },

    #[error("next-page link {next_url} leaves the shop origin {expected_origin}")]
    ForeignNextLink {
        expected_origin: String,
        next_url: String,
    },
}
