//! Vanity "satisfied customers" counter animation.

use crate::dom;
use bh_cart::{CounterPlan, SiteConfig};
use chrono::{DateTime, NaiveDate};
use gloo_timers::future::TimeoutFuture;
use web_sys::Element;

/// Today's date (UTC) from the browser clock.
pub fn today() -> NaiveDate {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// Count `el` up to the configured target. The animation ends by itself at
/// the target, or early if `el` is removed from the document.
pub fn start(el: Element, config: &SiteConfig) {
    let plan = CounterPlan::new(config.counter_target(today()), config.counter_steps);
    let format = config.number_format.clone();
    let interval_ms = config.counter_interval_ms;

    wasm_bindgen_futures::spawn_local(async move {
        for value in plan {
            TimeoutFuture::new(interval_ms).await;
            if !el.is_connected() {
                return;
            }
            dom::set_text(&el, &format.format_count(value));
        }
    });
}
