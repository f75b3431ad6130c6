//! Shopify cursor-based pagination via the `Link` response header.
//!
//! Each Admin API listing response carries an RFC 5988 `Link` header with
//! URLs for the adjacent pages. The URL in the `rel="next"` entry already
//! holds every query parameter the server wants for the next request
//! (`limit`, `fields`, `page_info`), so it is followed verbatim and never
//! rebuilt on the client.
//!
//! ## Header format
//!
//! Single next link:
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=CURSOR>; rel="next"
//! ```
//!
//! Combined previous and next:
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=PREV>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2024-01/products.json?limit=250&page_info=NEXT>; rel="next"
//! ```
//!
//! URLs may contain unencoded commas (`fields=id,title`), so the header is
//! tokenised on angle brackets rather than split on `,`.

/// Parses a `Link` header value and returns the URL of the `rel="next"` entry.
///
/// Returns `None` if:
/// - `link_header` is `None` (no header was present),
/// - there is no `rel="next"` entry (last page reached),
/// - the next entry has an empty URL.
#[must_use]
pub fn extract_next_link(link_header: Option<&str>) -> Option<String> {
    let mut rest = link_header?;

    while let Some(start) = rest.find('<') {
        let after_open = &rest[start + 1..];
        let end = after_open.find('>')?;
        let url = after_open[..end].trim();
        let tail = &after_open[end + 1..];

        // Parameters run until the next `<` (start of the following entry).
        let params = tail.find('<').map_or(tail, |i| &tail[..i]);
        if !url.is_empty() && has_next_relation(params) {
            return Some(url.to_owned());
        }

        rest = tail;
    }

    None
}

/// Extracts the opaque `page_info` cursor from a next-page URL.
///
/// Only used for log context; the full URL stays authoritative.
#[must_use]
pub fn page_info_of(url: &str) -> Option<String> {
    extract_query_param(url, "page_info")
}

/// Checks a link entry's parameter list (`; rel="next", `) for the `next`
/// relation. `rel` may hold several space-separated relation types.
fn has_next_relation(params: &str) -> bool {
    params
        .trim()
        .trim_end_matches(',')
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rel="))
        .any(|value| {
            value
                .trim()
                .trim_matches('"')
                .split_whitespace()
                .any(|rel| rel.eq_ignore_ascii_case("next"))
        })
}

/// Extracts the value of a named query parameter from a URL string.
///
/// Does not decode percent-encoded characters. Shopify cursors are
/// base64url-encoded and contain no characters that require decoding.
fn extract_query_param(url: &str, param: &str) -> Option<String> {
    let query_start = url.find('?')? + 1;
    let query = &url[query_start..];

    let needle = format!("{param}=");
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix(needle.as_str()) {
            let value = value.split('#').next().unwrap_or(value);
            if !value.is_empty() {
                return Some(value.to_owned());
            }
        }
    }
    None
}
