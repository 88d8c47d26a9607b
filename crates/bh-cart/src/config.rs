//! Site configuration.
//!
//! Every field has a default matching the live site, so an absent or partial
//! `#site-config` JSON block is fine. Only fields present in the block
//! override the defaults.

use crate::format::NumberFormat;
use bh_types::CART_KEY;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,

    // Vanity counter
    pub open_date: NaiveDate,
    pub base_customers: u64,
    pub average_customers_per_day: u64,
    pub counter_steps: u64,
    pub counter_interval_ms: u32,

    // Timers
    pub checkout_delay_ms: u32,
    pub pulse_ms: u32,
    pub ripple_ms: u32,
    pub ripple_scale: f64,

    pub number_format: NumberFormat,

    // Menu scanning
    pub product_selectors: Vec<String>,
    pub add_label: String,
    pub remove_label: String,
    pub checkout_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: CART_KEY.to_owned(),
            open_date: NaiveDate::from_ymd_opt(2020, 5, 10).unwrap_or_default(),
            base_customers: 1500,
            average_customers_per_day: 40,
            counter_steps: 240,
            counter_interval_ms: 20,
            checkout_delay_ms: 600,
            pulse_ms: 500,
            ripple_ms: 650,
            ripple_scale: 1.1,
            number_format: NumberFormat::default(),
            product_selectors: vec![
                ".hamburguesa-item".to_owned(),
                ".hamburguesareina-item".to_owned(),
                ".postre-item".to_owned(),
            ],
            add_label: "Agregar al carrito".to_owned(),
            remove_label: "Eliminar".to_owned(),
            checkout_message: "Simulación de pago: Gracias por su compra.".to_owned(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Customer count the counter animates towards on `today`.
    pub fn counter_target(&self, today: NaiveDate) -> u64 {
        crate::counter::target_customers(
            self.open_date,
            today,
            self.base_customers,
            self.average_customers_per_day,
        )
    }

    /// Comma-joined selector matching every product item.
    pub fn product_selector(&self) -> String {
        self.product_selectors.join(", ")
    }
}
