//! URL origin utilities for the Shopify client.

use crate::error::ShopifyError;

/// Extracts the scheme+host origin from a shop URL.
///
/// Given `"https://vdagama.myshopify.com/admin"`, returns
/// `"https://vdagama.myshopify.com"`. Non-default ports are kept.
///
/// # Errors
///
/// Returns [`ShopifyError::InvalidShopUrl`] if `shop_url` does not parse or
/// has no host.
pub fn extract_store_origin(shop_url: &str) -> Result<String, ShopifyError> {
    let url = reqwest::Url::parse(shop_url).map_err(|e| ShopifyError::InvalidShopUrl {
        shop_url: shop_url.to_owned(),
        reason: e.to_string(),
    })?;
    if url.host_str().is_none() {
        return Err(ShopifyError::InvalidShopUrl {
            shop_url: shop_url.to_owned(),
            reason: "URL has no host".to_owned(),
        });
    }
    Ok(url.origin().ascii_serialization())
}

/// Resolves a `Link` target against the URL that produced it and checks it
/// stays on `expected_origin`, so the access token never leaves the shop.
///
/// An absolute target is returned exactly as the server sent it. A relative
/// one is joined onto `current_url`, which normalises it.
pub(super) fn resolve_next_url(
    current_url: &str,
    next_link: &str,
    expected_origin: &str,
) -> Result<String, ShopifyError> {
    let foreign = || ShopifyError::ForeignNextLink {
        expected_origin: expected_origin.to_owned(),
        next_url: next_link.to_owned(),
    };

    let (resolved, absolute) = match reqwest::Url::parse(next_link) {
        Ok(url) => (url, true),
        Err(_) => {
            let joined = reqwest::Url::parse(current_url)
                .and_then(|base| base.join(next_link))
                .map_err(|_| foreign())?;
            (joined, false)
        }
    };

    if resolved.origin().ascii_serialization() != expected_origin {
        return Err(foreign());
    }

    if absolute {
        Ok(next_link.to_owned())
    } else {
        Ok(resolved.to_string())
    }
}
