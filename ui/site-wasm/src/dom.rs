//! DOM element bindings.
//!
//! Every element the site scripts touch is optional: a page that lacks one
//! simply loses the feature that needs it. `Elements::bind()` resolves them
//! all once at startup.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn collect_elements(nl: &web_sys::NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Rendered text of an element (`innerText` for HTML elements).
pub fn visible_text(el: &Element) -> String {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => el.text_content().unwrap_or_default(),
    }
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

// ── Elements struct ──

/// Page elements used by the site scripts.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone, Default)]
pub struct Elements {
    // Hero
    pub counter_number: Option<Element>,

    // Navigation
    pub hamburger: Option<Element>,
    pub menu_list: Option<Element>,

    // Cart
    pub cart_count: Option<Element>,
    pub cart_items: Option<Element>,
    pub cart_total: Option<Element>,
    pub cart_modal: Option<Element>,
    pub view_cart_btn: Option<Element>,
    pub close_cart: Option<Element>,
    pub checkout_btn: Option<Element>,
    pub clear_cart_btn: Option<Element>,
    pub checkout_section: Option<HtmlElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind() -> Elements {
        Elements {
            counter_number: by_id("counter-number"),

            hamburger: by_id("hamburger-menu"),
            menu_list: query(".menu ul"),

            cart_count: by_id("cart-count"),
            cart_items: by_id("cart-items"),
            cart_total: by_id("cart-total"),
            cart_modal: by_id("cart-modal"),
            view_cart_btn: by_id("view-cart-btn"),
            close_cart: by_id("close-cart"),
            checkout_btn: by_id("checkout-btn"),
            clear_cart_btn: by_id("clear-cart-btn"),
            checkout_section: by_id_typed::<HtmlElement>("checkout-section"),
        }
    }
}
