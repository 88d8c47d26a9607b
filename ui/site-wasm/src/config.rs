//! Site configuration from the page.
//!
//! Pages may embed `<script id="site-config" type="application/json">` to
//! override counter constants, delays, labels or product selectors.

use crate::dom;
use bh_cart::SiteConfig;

const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load() -> SiteConfig {
    let Some(el) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            gloo_console::warn!(format!("#{CONFIG_ELEMENT_ID} ignored: {err}"));
            SiteConfig::default()
        }
    }
}
