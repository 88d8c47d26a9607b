//! Tactile button feedback: press state, click pulse and ripple.
//!
//! All effects are cosmetic class/style changes. Binding the same effect
//! twice on one element is a no-op.

use crate::dom::{self, Elements};
use crate::events::on;
use crate::menu_scan::ADD_BUTTON_CLASS;
use bh_cart::SiteConfig;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, MouseEvent};

const PRESSED: &str = "pressed";
const PULSE: &str = "pulse";

/// Returns false if `effect` was already bound on `el`, marking it otherwise.
fn claim(el: &Element, effect: &str) -> bool {
    let attr = format!("data-fx-{effect}");
    if el.has_attribute(&attr) {
        return false;
    }
    let _ = el.set_attribute(&attr, "");
    true
}

pub fn add_press_effect(el: &Element) -> Result<(), JsValue> {
    if !claim(el, "press") {
        return Ok(());
    }
    let el2 = el.clone();
    on(el, "pointerdown", move |_| dom::add_class(&el2, PRESSED))?;
    for event in ["pointerup", "pointercancel", "pointerleave"] {
        let el2 = el.clone();
        on(el, event, move |_| dom::remove_class(&el2, PRESSED))?;
    }
    Ok(())
}

/// Restartable `pulse` animation. A click while a pulse is pending cancels
/// the old cleanup timer before scheduling a new one.
pub fn add_pulse_on_click(el: &HtmlElement, duration_ms: u32) -> Result<(), JsValue> {
    if !claim(el, "pulse") {
        return Ok(());
    }
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let el2 = el.clone();
    on(el, "click", move |_| {
        dom::remove_class(&el2, PULSE);
        // Reading layout restarts the CSS animation.
        let _ = el2.offset_width();
        dom::add_class(&el2, PULSE);

        let el3 = el2.clone();
        let cleanup = Timeout::new(duration_ms, move || dom::remove_class(&el3, PULSE));
        pending.borrow_mut().replace(cleanup);
    })
}

pub fn add_ripple_effect(button: &HtmlElement, duration_ms: u32, scale: f64) -> Result<(), JsValue> {
    if !claim(button, "ripple") {
        return Ok(());
    }
    let style = button.style();
    let position = dom::window()
        .get_computed_style(button)
        .ok()
        .flatten()
        .and_then(|cs| cs.get_property_value("position").ok())
        .unwrap_or_default();
    if position == "static" {
        style.set_property("position", "relative")?;
    }
    style.set_property("overflow", "hidden")?;

    let button2 = button.clone();
    on(button, "click", move |e: Event| {
        let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Some(ripple) = spawn_ripple(&button2, mouse, scale) {
            Timeout::new(duration_ms, move || {
                if ripple.is_connected() {
                    ripple.remove();
                }
            })
            .forget();
        }
    })
}

fn spawn_ripple(button: &HtmlElement, mouse: &MouseEvent, scale: f64) -> Option<HtmlElement> {
    let rect = button.get_bounding_client_rect();
    let size = rect.width().max(rect.height()) * scale;
    let x = f64::from(mouse.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(mouse.client_y()) - rect.top() - size / 2.0;

    let span = dom::create_element("span")?.dyn_into::<HtmlElement>().ok()?;
    span.set_class_name("ripple");
    let style = span.style();
    style.set_property("width", &format!("{size}px")).ok()?;
    style.set_property("height", &format!("{size}px")).ok()?;
    style.set_property("left", &format!("{x}px")).ok()?;
    style.set_property("top", &format!("{y}px")).ok()?;
    button.append_child(&span).ok()?;
    Some(span)
}

/// Apply press feedback to every button (and the hamburger control), pulse
/// to checkout and ripple to the add-to-cart buttons.
pub fn bind_effects(els: &Elements, config: &SiteConfig) -> Result<(), JsValue> {
    for el in [&els.hamburger, &els.checkout_btn, &els.view_cart_btn]
        .into_iter()
        .flatten()
    {
        add_press_effect(el)?;
    }
    for btn in dom::query_all("button") {
        add_press_effect(&btn)?;
    }

    if let Some(checkout) = els
        .checkout_btn
        .as_ref()
        .and_then(|el| el.dyn_ref::<HtmlElement>())
    {
        add_pulse_on_click(checkout, config.pulse_ms)?;
    }

    for btn in dom::query_all(&format!(".{ADD_BUTTON_CLASS}")) {
        if let Ok(btn) = btn.dyn_into::<HtmlElement>() {
            add_ripple_effect(&btn, config.ripple_ms, config.ripple_scale)?;
        }
    }
    Ok(())
}
