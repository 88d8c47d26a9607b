//! Add-to-cart buttons for the menu.
//!
//! Product items are recognized by their marker classes; name and price are
//! scraped from their text (see `bh_cart::scan`). Running the scan again is
//! harmless: items that already have a button are skipped.

use crate::dom;
use crate::events::on;
use crate::state::SharedStore;
use bh_cart::{NewItem, ProductElement, ProductInfo, SiteConfig, scan_products};
use std::rc::Rc;
use web_sys::Element;

pub const ADD_BUTTON_CLASS: &str = "agregar-btn";

struct MenuItem<'a> {
    el: Element,
    store: &'a SharedStore,
    label: &'a str,
}

impl ProductElement for MenuItem<'_> {
    fn has_add_control(&self) -> bool {
        dom::query_within(&self.el, &format!(".{ADD_BUTTON_CLASS}")).is_some()
    }

    fn first_span_text(&self) -> Option<String> {
        dom::query_within(&self.el, "span").map(|s| dom::visible_text(&s))
    }

    fn price_text(&self) -> Option<String> {
        dom::query_within(&self.el, ".precio").map(|p| dom::visible_text(&p))
    }

    fn paragraph_text(&self) -> Option<String> {
        dom::query_within(&self.el, ".parrafo-2")
            .or_else(|| dom::query_within(&self.el, "p"))
            .map(|p| dom::visible_text(&p))
    }

    fn full_text(&self) -> String {
        dom::visible_text(&self.el)
    }

    fn attach_add_control(&self, info: &ProductInfo) {
        let Some(btn) = dom::create_element("button") else {
            return;
        };
        btn.set_class_name(ADD_BUTTON_CLASS);
        let _ = btn.set_attribute("type", "button");
        let _ = btn.set_attribute("data-name", &info.name);
        let _ = btn.set_attribute("data-price", &info.price);
        dom::set_text(&btn, self.label);

        let store = Rc::clone(self.store);
        let item = NewItem::from(info);
        let bound = on(&btn, "click", move |_| {
            store.add(&item);
        });
        if let Err(err) = bound {
            gloo_console::warn!("could not bind add-to-cart button", err);
            return;
        }
        if let Err(err) = self.el.append_child(&btn) {
            gloo_console::warn!("could not insert add-to-cart button", err);
        }
    }
}

/// Give every product item an add-to-cart button. Returns the products that
/// received one on this pass.
pub fn scan_menu(store: &SharedStore, config: &SiteConfig) -> Vec<ProductInfo> {
    let selector = config.product_selector();
    if selector.is_empty() {
        return Vec::new();
    }
    let items: Vec<MenuItem<'_>> = dom::query_all(&selector)
        .into_iter()
        .map(|el| MenuItem {
            el,
            store,
            label: &config.add_label,
        })
        .collect();
    scan_products(&items)
}
