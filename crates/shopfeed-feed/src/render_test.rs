use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::json;

use super::*;

fn products(value: serde_json::Value) -> Vec<ShopifyProduct> {
    serde_json::from_value(value).expect("valid product fixtures")
}

/// Parses the rendered feed and returns each `<item>` as a map of child
/// element name to unescaped text. Panics if the document is not well-formed.
fn parse_items(xml: &str) -> Vec<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<HashMap<String, String>> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event().expect("feed must be well-formed XML") {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                if name == "item" {
                    current = Some(HashMap::new());
                } else if let Some(item) = current.as_mut() {
                    item.insert(name.clone(), String::new());
                    field = Some(name);
                }
            }
            Event::Text(text) => {
                if let (Some(item), Some(name)) = (current.as_mut(), field.as_ref()) {
                    item.insert(name.clone(), text.unescape().unwrap().into_owned());
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"item" {
                    items.push(current.take().expect("closing an open item"));
                }
                field = None;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    items
}

fn shoe_fixture() -> Vec<ShopifyProduct> {
    products(json!([{
        "id": 1,
        "title": "Shoe \"A\" & B",
        "body_html": null,
        "handle": "shoe-a",
        "vendor": null,
        "variants": [
            {
                "id": 10,
                "price": "19.99",
                "inventory_quantity": 5,
                "inventory_management": "shopify",
                "inventory_policy": "deny"
            },
            {
                "id": 11,
                "price": "24.99",
                "inventory_quantity": 0,
                "inventory_management": null,
                "inventory_policy": null
            }
        ],
        "images": []
    }]))
}

#[test]
fn renders_rss_envelope_with_merchant_namespace() {
    let xml = render_feed(&[], &FeedSettings::default());

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" ?>"#));
    assert!(xml.contains(r#"<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">"#));
    assert!(xml.contains("<title>VDagama Product Feed</title>"));
    assert!(xml.contains("<link>https://vdagama.com</link>"));
    assert!(xml.contains("<description>Shopify feed for Facebook Catalog</description>"));
    assert!(xml.trim_end().ends_with("</rss>"));
    assert!(parse_items(&xml).is_empty());
}

#[test]
fn end_to_end_shoe_scenario() {
    let xml = render_feed(&shoe_fixture(), &FeedSettings::default());

    assert_eq!(xml.matches("<title>Shoe &quot;A&quot; &amp; B</title>").count(), 2);
    assert_eq!(xml.matches("<g:brand>VDagama</g:brand>").count(), 2);

    let items = parse_items(&xml);
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["g:id"], "10");
    assert_eq!(items[0]["title"], "Shoe \"A\" & B");
    assert_eq!(items[0]["link"], "https://vdagama.com/products/shoe-a?variant=10");
    assert_eq!(items[0]["g:price"], "19.99 EUR");
    assert_eq!(items[0]["g:availability"], "in stock");
    assert_eq!(items[0]["g:condition"], "new");

    assert_eq!(items[1]["g:id"], "11");
    assert_eq!(items[1]["g:price"], "24.99 EUR");
    assert_eq!(items[1]["g:availability"], "in stock");
}

#[test]
fn absent_fields_render_as_empty_or_default_elements() {
    let xml = render_feed(&shoe_fixture(), &FeedSettings::default());

    assert!(xml.contains("<description></description>"));
    assert!(xml.contains("<g:brand>VDagama</g:brand>"));
    assert!(xml.contains("<g:image_link></g:image_link>"));
}

#[test]
fn item_count_matches_total_variant_count_in_order() {
    let fixtures = products(json!([
        {"id": 1, "title": "One", "handle": "one",
         "variants": [{"id": 11, "price": "1.00"}]},
        {"id": 2, "title": "Two", "handle": "two",
         "variants": [{"id": 21, "price": "2.00"}, {"id": 22, "price": "2.00"}, {"id": 23, "price": "2.00"}]},
        {"id": 3, "title": "Three", "handle": "three",
         "variants": [{"id": 31, "price": "3.00"}, {"id": 32, "price": "3.00"}]}
    ]));

    let xml = render_feed(&fixtures, &FeedSettings::default());

    assert_eq!(xml.matches("<item>").count(), 6);
    let ids: Vec<String> = parse_items(&xml)
        .into_iter()
        .map(|item| item["g:id"].clone())
        .collect();
    assert_eq!(ids, ["11", "21", "22", "23", "31", "32"]);
}

#[test]
fn products_without_variants_produce_no_items() {
    let fixtures = products(json!([
        {"id": 1, "title": "Ghost", "handle": "ghost", "variants": []}
    ]));

    let xml = render_feed(&fixtures, &FeedSettings::default());

    assert!(!xml.contains("<item>"));
    assert!(!xml.contains("Ghost"));
}

#[test]
fn html_description_and_vendor_are_escaped() {
    let fixtures = products(json!([{
        "id": 1,
        "title": "Tee",
        "body_html": "<p>Soft & 'light'</p>",
        "handle": "tee",
        "vendor": "Smith & Sons <Ltd>",
        "variants": [{"id": 5, "price": "9.90", "inventory_management": "shopify",
                      "inventory_policy": "deny", "inventory_quantity": 0}],
        "images": [{"src": "https://cdn.example.com/tee.jpg"}]
    }]));

    let xml = render_feed(&fixtures, &FeedSettings::default());

    assert!(xml.contains(
        "<description>&lt;p&gt;Soft &amp; &apos;light&apos;&lt;/p&gt;</description>"
    ));
    assert!(xml.contains("<g:brand>Smith &amp; Sons &lt;Ltd&gt;</g:brand>"));
    assert!(xml.contains("<g:image_link>https://cdn.example.com/tee.jpg</g:image_link>"));
    assert!(xml.contains("<g:availability>out of stock</g:availability>"));

    let items = parse_items(&xml);
    assert_eq!(items[0]["description"], "<p>Soft & 'light'</p>");
    assert_eq!(items[0]["g:brand"], "Smith & Sons <Ltd>");
}

#[test]
fn channel_metadata_comes_from_settings() {
    let settings = FeedSettings {
        storefront_url: "https://shop.example.com".to_string(),
        currency: "USD".to_string(),
        title: "Acme & Co".to_string(),
        description: "Everything \"new\"".to_string(),
        ..FeedSettings::default()
    };
    let xml = render_feed(&shoe_fixture(), &settings);

    assert!(xml.contains("<title>Acme &amp; Co</title>"));
    assert!(xml.contains("<link>https://shop.example.com</link>"));
    assert!(xml.contains("<description>Everything &quot;new&quot;</description>"));
    assert!(xml.contains("<g:price>19.99 USD</g:price>"));
    assert!(xml.contains("<link>https://shop.example.com/products/shoe-a?variant=10</link>"));
}
