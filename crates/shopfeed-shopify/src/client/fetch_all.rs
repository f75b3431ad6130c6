//! Multi-page product fetch loop for `ShopifyClient`.

use crate::error::ShopifyError;
use crate::pagination::{extract_next_link, page_info_of};
use crate::types::ShopifyProduct;

use super::origin::resolve_next_url;
use super::ShopifyClient;
use super::MAX_PAGES;

impl ShopifyClient {
    /// Fetches every product in the shop by walking the `Link` header chain.
    ///
    /// Starts from the first-page URL built by [`Self::products_url`], then
    /// follows each `rel="next"` URL exactly as the server sent it until a
    /// response carries no next relation. Pages are requested one at a time
    /// and products are returned in arrival order.
    ///
    /// **All-or-nothing semantics**: on any page failure, products from
    /// earlier pages are discarded and the error is returned, so a caller
    /// never builds a feed from a partial catalog.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_products_page`].
    /// Returns [`ShopifyError::ForeignNextLink`] if a next link points at a
    /// different origin, and [`ShopifyError::PaginationLimit`] if the number
    /// of pages exceeds [`MAX_PAGES`].
    pub async fn fetch_all_products(&self, limit: u32) -> Result<Vec<ShopifyProduct>, ShopifyError> {
        let mut all_products: Vec<ShopifyProduct> = Vec::new();
        let mut url = Self::products_url(&self.origin, &self.api_version, limit)?;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(ShopifyError::PaginationLimit {
                    shop_url: self.origin.clone(),
                    max_pages: MAX_PAGES,
                });
            }

            let (response, link_header) = self.fetch_products_page(&url).await?;
            let page_products = response.products.len();
            all_products.extend(response.products);

            let Some(next_link) = extract_next_link(link_header.as_deref()) else {
                tracing::debug!(page = page_count, products = page_products, "last page reached");
                break;
            };

            let cursor = page_info_of(&next_link);
            tracing::debug!(
                page = page_count,
                products = page_products,
                cursor = cursor.as_deref().unwrap_or("-"),
                "following next page link"
            );
            url = resolve_next_url(&url, &next_link, &self.origin)?;
        }

        tracing::info!(
            shop = %self.origin,
            pages = page_count,
            products = all_products.len(),
            "fetched product catalog"
        );

        Ok(all_products)
    }
}
