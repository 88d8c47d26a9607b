//! Cart modal rendering.
//!
//! The row list is thrown away and rebuilt from the store on every change.
//! Row controls are handled by two listeners delegated to `#cart-items`,
//! bound once, so a rebuild never has stale handlers to clean up.

use crate::dom::{self, Elements};
use crate::events::on;
use crate::state::SharedStore;
use bh_cart::{CartItem, CartSummary, NumberFormat, SiteConfig, SummaryRow, decode_key, parse_qty};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlInputElement};

pub struct CartView {
    store: SharedStore,
    list: Option<Element>,
    total: Option<Element>,
    badge: Option<Element>,
    format: NumberFormat,
    remove_label: String,
}

impl CartView {
    pub fn new(els: &Elements, store: SharedStore, config: &SiteConfig) -> Rc<Self> {
        Rc::new(Self {
            store,
            list: els.cart_items.clone(),
            total: els.cart_total.clone(),
            badge: els.cart_count.clone(),
            format: config.number_format.clone(),
            remove_label: config.remove_label.clone(),
        })
    }

    /// Subscribe to store changes and bind the row controls.
    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let weak = Rc::downgrade(self);
        self.store.subscribe(move |cart| {
            if let Some(view) = weak.upgrade() {
                view.render_items(cart);
            }
        });

        let Some(list) = &self.list else {
            return Ok(());
        };

        let store = Rc::clone(&self.store);
        on(list, "click", move |e: Event| {
            let Some(button) = event_element(&e).and_then(|el| el.closest(".remove-item").ok().flatten())
            else {
                return;
            };
            if let Some(key) = button.get_attribute("data-name") {
                store.remove(&decode_key(&key));
            }
        })?;

        let store = Rc::clone(&self.store);
        on(list, "change", move |e: Event| {
            let Some(input) = event_element(&e).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if !dom::has_class(&input, "cart-qty") {
                return;
            }
            if let Some(key) = input.get_attribute("data-name") {
                store.set_qty(&decode_key(&key), parse_qty(&input.value()));
            }
        })?;

        Ok(())
    }

    pub fn render(&self) {
        self.render_items(&self.store.get());
    }

    pub fn render_items(&self, items: &[CartItem]) {
        let summary = CartSummary::from_items(items, &self.format);

        if let Some(badge) = &self.badge {
            dom::set_text(badge, &summary.badge_count.to_string());
        }

        if let Some(list) = &self.list {
            list.set_inner_html("");
            for row in &summary.rows {
                if let Some(li) = self.build_row(row) {
                    let _ = list.append_child(&li);
                }
            }
        }

        if let Some(total) = &self.total {
            dom::set_text(total, &summary.total_text);
        }
    }

    fn build_row(&self, row: &SummaryRow) -> Option<Element> {
        let li = dom::create_element("li")?;
        li.set_class_name("cart-item");

        let name = dom::create_element("span")?;
        name.set_class_name("cart-name");
        dom::set_text(&name, &row.name);

        let price = dom::create_element("span")?;
        price.set_class_name("cart-price");
        dom::set_text(&price, &row.price);

        let qty = dom::create_element("input")?;
        qty.set_class_name("cart-qty");
        qty.set_attribute("type", "number").ok()?;
        qty.set_attribute("min", "1").ok()?;
        qty.set_attribute("value", &row.qty.to_string()).ok()?;
        qty.set_attribute("data-name", &row.key).ok()?;

        let remove = dom::create_element("button")?;
        remove.set_class_name("remove-item");
        remove.set_attribute("type", "button").ok()?;
        remove.set_attribute("data-name", &row.key).ok()?;
        dom::set_text(&remove, &self.remove_label);

        for child in [&name, &price, &qty, &remove] {
            li.append_child(child).ok()?;
        }
        Some(li)
    }
}

fn event_element(e: &Event) -> Option<Element> {
    e.target()?.dyn_into::<Element>().ok()
}
