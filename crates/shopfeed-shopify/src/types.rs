//! Admin API response types for `GET /admin/api/{version}/products.json`.
//!
//! Only the fields requested through the `fields` projection are modelled:
//! `id,title,body_html,handle,vendor,variants,images`.
//!
//! ### `price`
//! The Admin API returns prices as decimal strings (`"19.99"`). They are
//! parsed into [`Decimal`] so the scale Shopify sent is kept when the value
//! is written back out (`"20.00"` stays `"20.00"`).
//!
//! ### `inventory_management`
//! `null` when no inventory-tracking service is configured for the variant,
//! otherwise the service name (usually `"shopify"`).
//!
//! ### `inventory_policy`
//! `"deny"` or `"continue"`. `"continue"` means the variant stays purchasable
//! after stock reaches zero.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ShopifyProductsResponse {
    pub products: Vec<ShopifyProduct>,
}

/// A single product from the Admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyProduct {
    /// Shopify numeric product ID.
    pub id: i64,

    pub title: String,

    /// Raw HTML product description. May be `null` or absent.
    #[serde(default)]
    pub body_html: Option<String>,

    /// URL slug for the storefront product page.
    pub handle: String,

    /// Vendor / brand name. May be `null` or absent.
    #[serde(default)]
    pub vendor: Option<String>,

    /// Purchasable variants in storefront order.
    #[serde(default)]
    pub variants: Vec<ShopifyVariant>,

    /// Image gallery in storefront order; the first entry is the featured image.
    #[serde(default)]
    pub images: Vec<ShopifyImage>,
}

impl ShopifyProduct {
    /// Source URL of the first gallery image, if any.
    #[must_use]
    pub fn first_image_src(&self) -> Option<&str> {
        self.images.first().map(|image| image.src.as_str())
    }
}

/// A single purchasable variant of a [`ShopifyProduct`].
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyVariant {
    /// Shopify numeric variant ID.
    pub id: i64,

    pub price: Decimal,

    /// Units on hand. Absent on variants that never tracked stock.
    #[serde(default)]
    pub inventory_quantity: i64,

    /// Inventory-tracking service, or `None` when stock is not tracked.
    #[serde(default)]
    pub inventory_management: Option<String>,

    #[serde(default)]
    pub inventory_policy: Option<InventoryPolicy>,
}

impl ShopifyVariant {
    /// Whether an inventory-tracking service is configured for this variant.
    #[must_use]
    pub fn tracks_inventory(&self) -> bool {
        self.inventory_management.is_some()
    }

    /// Whether the variant can be sold after its stock reaches zero.
    #[must_use]
    pub fn allows_oversell(&self) -> bool {
        matches!(self.inventory_policy, Some(InventoryPolicy::Continue))
    }
}

/// Variant behaviour once `inventory_quantity` reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryPolicy {
    /// Stop selling at zero stock.
    Deny,
    /// Keep selling regardless of stock.
    Continue,
    /// Any policy this client does not know about; treated like `Deny`.
    #[serde(other)]
    Unknown,
}

/// A product image from the Admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyImage {
    #[serde(default)]
    pub id: Option<i64>,
    /// Canonical CDN URL.
    pub src: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_full_admin_product() {
        let value = json!({
            "id": 1,
            "title": "Shoe",
            "body_html": "<p>Nice</p>",
            "handle": "shoe",
            "vendor": "VDagama",
            "variants": [{
                "id": 10,
                "price": "19.99",
                "inventory_quantity": 5,
                "inventory_management": "shopify",
                "inventory_policy": "deny"
            }],
            "images": [{"id": 7, "src": "https://cdn.example.com/shoe.jpg"}]
        });
        let product: ShopifyProduct = serde_json::from_value(value).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.vendor.as_deref(), Some("VDagama"));
        assert_eq!(product.first_image_src(), Some("https://cdn.example.com/shoe.jpg"));

        let variant = &product.variants[0];
        assert_eq!(variant.price.to_string(), "19.99");
        assert_eq!(variant.inventory_quantity, 5);
        assert!(variant.tracks_inventory());
        assert_eq!(variant.inventory_policy, Some(InventoryPolicy::Deny));
        assert!(!variant.allows_oversell());
    }

    #[test]
    fn null_and_missing_fields_fall_back_to_defaults() {
        let value = json!({
            "id": 2,
            "title": "Bare",
            "body_html": null,
            "handle": "bare",
            "vendor": null,
            "variants": [{
                "id": 20,
                "price": "5.00",
                "inventory_management": null,
                "inventory_policy": null
            }]
        });
        let product: ShopifyProduct = serde_json::from_value(value).unwrap();
        assert!(product.body_html.is_none());
        assert!(product.vendor.is_none());
        assert!(product.images.is_empty());
        assert!(product.first_image_src().is_none());

        let variant = &product.variants[0];
        assert_eq!(variant.price.to_string(), "5.00");
        assert_eq!(variant.inventory_quantity, 0);
        assert!(!variant.tracks_inventory());
        assert!(variant.inventory_policy.is_none());
    }

    #[test]
    fn continue_policy_allows_oversell() {
        let variant: ShopifyVariant = serde_json::from_value(json!({
            "id": 3,
            "price": "1.00",
            "inventory_policy": "continue"
        }))
        .unwrap();
        assert!(variant.allows_oversell());
    }

    #[test]
    fn unknown_policy_does_not_fail_deserialization() {
        let variant: ShopifyVariant = serde_json::from_value(json!({
            "id": 4,
            "price": "1.00",
            "inventory_policy": "backorder"
        }))
        .unwrap();
        assert_eq!(variant.inventory_policy, Some(InventoryPolicy::Unknown));
        assert!(!variant.allows_oversell());
    }
}
