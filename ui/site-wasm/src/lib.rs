//! Burger House site scripts.
//!
//! Pure Rust + WASM replacement for the site's page scripts: vanity counter,
//! mobile menu, cart modal backed by `localStorage`, add-to-cart buttons
//! scraped from the menu markup, and button feedback effects.

pub mod cart_view;
pub mod config;
pub mod counter;
pub mod dom;
pub mod effects;
pub mod events;
pub mod logging;
pub mod menu_scan;
pub mod state;

use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init();

    let document = dom::document();
    if document.ready_state() == "loading" {
        events::on(&document, "DOMContentLoaded", |_| {
            if let Err(err) = init() {
                gloo_console::error!("site init failed", err);
            }
        })
    } else {
        init()
    }
}

/// Main initialisation sequence. Features whose elements are missing are
/// skipped; only listener registration failures abort.
pub fn init() -> Result<(), JsValue> {
    let config = config::load();
    let els = dom::Elements::bind();
    let store = state::new_store(&config);

    match &els.counter_number {
        Some(el) => counter::start(el.clone(), &config),
        None => gloo_console::debug!("no #counter-number, counter disabled"),
    }

    events::bind_menu_toggle(&els)?;

    let view = cart_view::CartView::new(&els, Rc::clone(&store), &config);
    view.attach()?;

    let added = menu_scan::scan_menu(&store, &config);
    gloo_console::debug!(format!("add-to-cart buttons injected: {}", added.len()));

    events::bind_cart_modal(&els, &view, &store, &config)?;
    view.render();

    effects::bind_effects(&els, &config)
}
