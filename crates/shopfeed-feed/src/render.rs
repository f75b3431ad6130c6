//! RSS 2.0 document rendering with the Google Merchant `g:` namespace.

use shopfeed_core::FeedSettings;
use shopfeed_shopify::ShopifyProduct;

use crate::escape::escape_xml;
use crate::item::{feed_items, FeedItem};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const RSS_OPEN: &str = r#"<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">"#;

const CHANNEL_INDENT: &str = "    ";
const ITEM_INDENT: &str = "      ";

/// Rough per-item size, used to pre-size the output buffer.
const ITEM_SIZE_HINT: usize = 640;

/// Renders the complete feed document for `products`.
///
/// Emits one `<item>` per variant in product-then-variant order. Title,
/// description, brand and channel text are escaped; ids, prices, URLs and
/// fixed literals are written verbatim.
#[must_use]
pub fn render_feed(products: &[ShopifyProduct], settings: &FeedSettings) -> String {
    let variant_count: usize = products.iter().map(|p| p.variants.len()).sum();
    let mut out = String::with_capacity(512 + variant_count * ITEM_SIZE_HINT);

    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(RSS_OPEN);
    out.push('\n');
    out.push_str("  <channel>\n");

    push_element(&mut out, CHANNEL_INDENT, "title", &escape_xml(Some(settings.title.as_str())));
    push_element(&mut out, CHANNEL_INDENT, "link", &settings.storefront_url);
    push_element(
        &mut out,
        CHANNEL_INDENT,
        "description",
        &escape_xml(Some(settings.description.as_str())),
    );

    for item in feed_items(products, settings) {
        push_item(&mut out, &item);
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");
    out
}

fn push_item(out: &mut String, item: &FeedItem<'_>) {
    out.push_str(CHANNEL_INDENT);
    out.push_str("<item>\n");

    push_element(out, ITEM_INDENT, "g:id", &item.id.to_string());
    push_element(out, ITEM_INDENT, "title", &escape_xml(Some(item.title)));
    push_element(out, ITEM_INDENT, "link", &item.link);
    push_element(out, ITEM_INDENT, "description", &escape_xml(Some(item.description)));
    push_element(out, ITEM_INDENT, "g:brand", &escape_xml(Some(item.brand)));
    push_element(out, ITEM_INDENT, "g:price", &item.price);
    push_element(out, ITEM_INDENT, "g:availability", item.availability.as_str());
    push_element(out, ITEM_INDENT, "g:condition", item.condition);
    push_element(out, ITEM_INDENT, "g:image_link", item.image_link);

    out.push_str(CHANNEL_INDENT);
    out.push_str("</item>\n");
}

/// Writes `<name>text</name>` on its own line. `text` must already be escaped.
fn push_element(out: &mut String, indent: &str, name: &str, text: &str) {
    out.push_str(indent);
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(text);
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
