//! Escaping for free-text feed fields.

use std::borrow::Cow;

/// Escapes the five XML special characters (`<`, `>`, `&`, `'`, `"`) into
/// their named entities. `None` escapes to the empty string.
///
/// Only merchant-entered text (titles, descriptions, brands) goes through
/// here; ids, prices, URLs and fixed literals are written as-is.
#[must_use]
pub fn escape_xml(value: Option<&str>) -> Cow<'_, str> {
    match value {
        Some(raw) => quick_xml::escape::escape(raw),
        None => Cow::Borrowed(""),
    }
}
