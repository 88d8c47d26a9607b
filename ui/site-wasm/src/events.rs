//! Event binding.
//!
//! Wires the navigation toggle, the cart modal and the simulated checkout.
//! Every binder skips silently when the elements it needs are missing.

use crate::cart_view::CartView;
use crate::dom::{self, Elements};
use crate::state::SharedStore;
use bh_cart::SiteConfig;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, ScrollBehavior, ScrollToOptions};

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

// ── Navigation ──

pub fn bind_menu_toggle(els: &Elements) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu_list)) = (els.hamburger.clone(), els.menu_list.clone()) else {
        return Ok(());
    };

    {
        let hamburger2 = hamburger.clone();
        let menu_list2 = menu_list.clone();
        on(&hamburger, "click", move |_| {
            let expanded = hamburger2.get_attribute("aria-expanded").as_deref() == Some("true");
            let _ = hamburger2.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
            dom::toggle_class(&hamburger2, "active");
            dom::toggle_class(&menu_list2, "active");
        })?;
    }

    for link in dom::query_all_within(&menu_list, "a") {
        let hamburger2 = hamburger.clone();
        let menu_list2 = menu_list.clone();
        on(&link, "click", move |_| {
            dom::remove_class(&hamburger2, "active");
            dom::remove_class(&menu_list2, "active");
            let _ = hamburger2.set_attribute("aria-expanded", "false");
        })?;
    }
    Ok(())
}

// ── Cart modal ──

pub fn bind_cart_modal(
    els: &Elements,
    view: &Rc<CartView>,
    store: &SharedStore,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let modal = els.cart_modal.clone();

    if let (Some(btn), Some(modal)) = (&els.view_cart_btn, &modal) {
        let modal2 = modal.clone();
        let view2 = Rc::clone(view);
        on(btn, "click", move |_| {
            dom::remove_class(&modal2, "hidden");
            view2.render();
        })?;
    }

    if let (Some(btn), Some(modal)) = (&els.close_cart, &modal) {
        let modal2 = modal.clone();
        on(btn, "click", move |_| dom::add_class(&modal2, "hidden"))?;
    }

    if let Some(btn) = &els.clear_cart_btn {
        let store2 = Rc::clone(store);
        on(btn, "click", move |_| store2.clear())?;
    }

    if let Some(btn) = &els.checkout_btn {
        let store2 = Rc::clone(store);
        let modal2 = modal.clone();
        let section = els.checkout_section.clone();
        let delay = config.checkout_delay_ms;
        let message = config.checkout_message.clone();
        on(btn, "click", move |_| {
            let top = section.as_ref().map_or(0, |s| s.offset_top());
            smooth_scroll_to(f64::from(top));

            let store3 = Rc::clone(&store2);
            let modal3 = modal2.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let _ = dom::window().alert_with_message(&message);
                store3.clear();
                if let Some(modal) = &modal3 {
                    dom::add_class(modal, "hidden");
                }
            });
        })?;
    }

    // Click on the backdrop itself (not the dialog content) closes the modal.
    if let Some(modal) = &modal {
        let modal2 = modal.clone();
        on(modal, "click", move |e: Event| {
            let on_backdrop = e
                .target()
                .is_some_and(|t| AsRef::<JsValue>::as_ref(&t) == AsRef::<JsValue>::as_ref(&modal2));
            if on_backdrop {
                dom::add_class(&modal2, "hidden");
            }
        })?;
    }

    Ok(())
}

fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}
