//! Flattening products into per-variant feed items.

use std::fmt;

use shopfeed_core::FeedSettings;
use shopfeed_shopify::{ShopifyProduct, ShopifyVariant};

/// Merchant `g:availability` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::InStock => "in stock",
            Availability::OutOfStock => "out of stock",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock status of a variant as advertised in the feed.
///
/// Untracked variants and variants that keep selling past zero stock are
/// always in stock; everything else depends on `inventory_quantity`.
#[must_use]
pub fn availability(variant: &ShopifyVariant) -> Availability {
    if !variant.tracks_inventory() || variant.allows_oversell() || variant.inventory_quantity > 0 {
        Availability::InStock
    } else {
        Availability::OutOfStock
    }
}

/// One `<item>` of the feed, derived from a single variant.
///
/// Text fields hold raw (unescaped) values borrowed from the product;
/// escaping happens when the item is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem<'a> {
    /// Variant id, written as `g:id`.
    pub id: i64,
    pub title: &'a str,
    /// `{storefront}/products/{handle}?variant={id}`.
    pub link: String,
    /// Product `body_html`, empty when absent.
    pub description: &'a str,
    /// Product vendor, or the configured default brand.
    pub brand: &'a str,
    /// `"{price} {currency}"`, e.g. `"19.99 EUR"`.
    pub price: String,
    pub availability: Availability,
    pub condition: &'a str,
    /// First product image, empty when the product has none.
    pub image_link: &'a str,
}

impl<'a> FeedItem<'a> {
    #[must_use]
    pub fn from_variant(
        product: &'a ShopifyProduct,
        variant: &'a ShopifyVariant,
        settings: &'a FeedSettings,
    ) -> Self {
        let brand = product
            .vendor
            .as_deref()
            .filter(|vendor| !vendor.is_empty())
            .unwrap_or(settings.default_brand.as_str());

        Self {
            id: variant.id,
            title: &product.title,
            link: format!(
                "{}/products/{}?variant={}",
                settings.storefront_url.trim_end_matches('/'),
                product.handle,
                variant.id
            ),
            description: product.body_html.as_deref().unwrap_or_default(),
            brand,
            price: format!("{} {}", variant.price, settings.currency),
            availability: availability(variant),
            condition: &settings.condition,
            image_link: product.first_image_src().unwrap_or_default(),
        }
    }
}

/// Yields one [`FeedItem`] per variant: products in input order, variants in
/// their original order within each product. Products without variants
/// contribute nothing.
pub fn feed_items<'a>(
    products: &'a [ShopifyProduct],
    settings: &'a FeedSettings,
) -> impl Iterator<Item = FeedItem<'a>> + 'a {
    products.iter().flat_map(move |product| {
        product
            .variants
            .iter()
            .map(move |variant| FeedItem::from_variant(product, variant, settings))
    })
}

#[cfg(test)]
#[path = "item_test.rs"]
mod tests;
