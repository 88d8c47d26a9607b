//! Product inference from menu markup.
//!
//! The menu is decorative HTML, not a catalog: a product's name and price
//! are guessed from whatever text the item element carries. Scanning is
//! written against [`ProductElement`] so the rules run without a browser.

use bh_types::{DEFAULT_PRODUCT_NAME, DEFAULT_PRODUCT_PRICE, ProductInfo};
use regex_lite::Regex;
use std::sync::OnceLock;

/// The view of one menu item the scanner needs.
pub trait ProductElement {
    /// Whether an add-to-cart control was already injected.
    fn has_add_control(&self) -> bool;
    /// Text of the first `span` inside the item.
    fn first_span_text(&self) -> Option<String>;
    /// Text of the dedicated price element (`.precio`), if the item has one.
    fn price_text(&self) -> Option<String>;
    /// Text of the description paragraph (`.parrafo-2`, else the first `p`).
    fn paragraph_text(&self) -> Option<String>;
    /// All visible text of the item.
    fn full_text(&self) -> String;
    /// Inject the add-to-cart control for `info`.
    fn attach_add_control(&self, info: &ProductInfo);
}

fn currency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$[0-9.,]+").expect("currency pattern is valid"))
}

pub fn infer_product<E: ProductElement + ?Sized>(el: &E) -> ProductInfo {
    let mut name = el
        .first_span_text()
        .map(|text| strip_trailing_colon(&text))
        .unwrap_or_default();

    if name.is_empty() {
        if let Some(paragraph) = el.paragraph_text() {
            let first_line = paragraph.split('\n').next().unwrap_or_default();
            name = first_line
                .split(':')
                .next()
                .unwrap_or_default()
                .trim()
                .to_owned();
        }
    }

    let price = match el.price_text() {
        Some(text) => text.trim().to_owned(),
        None => currency_pattern()
            .find(&el.full_text())
            .map(|m| m.as_str().to_owned())
            .unwrap_or_default(),
    };

    ProductInfo {
        name: if name.is_empty() { DEFAULT_PRODUCT_NAME.to_owned() } else { name },
        price: if price.is_empty() { DEFAULT_PRODUCT_PRICE.to_owned() } else { price },
    }
}

/// Attach an add control to every element that lacks one. Returns the
/// products that received a control on this pass.
pub fn scan_products<'a, E, I>(elements: I) -> Vec<ProductInfo>
where
    E: ProductElement + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut added = Vec::new();
    for el in elements {
        if el.has_add_control() {
            continue;
        }
        let info = infer_product(el);
        el.attach_add_control(&info);
        added.push(info);
    }
    added
}

// "Clásica:  " -> "Clásica"
fn strip_trailing_colon(text: &str) -> String {
    let trimmed = text.trim_end();
    trimmed
        .strip_suffix(':')
        .unwrap_or(trimmed)
        .trim()
        .to_owned()
}
