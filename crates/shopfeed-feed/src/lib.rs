//! Google Merchant RSS 2.0 feed generation from Shopify products.

pub mod escape;
pub mod item;
pub mod render;

pub use escape::escape_xml;
pub use item::{availability, feed_items, Availability, FeedItem};
pub use render::render_feed;
