//! Burger House cart core.
//!
//! Everything here is DOM-free: the wasm front end owns the elements and
//! feeds strings in, this crate owns the rules (price heuristics, cart
//! mutations, totals, menu scraping, counter maths, site config).

pub mod config;
pub mod counter;
pub mod format;
pub mod price;
pub mod quantity;
pub mod scan;
pub mod store;
pub mod summary;

pub use bh_storage::{CartStorage, InMemoryStorage, StorageError};
pub use bh_types::{CART_KEY, CartItem, NewItem, ProductInfo};
pub use config::{ConfigError, SiteConfig};
pub use counter::{CounterPlan, days_open, target_customers};
pub use format::NumberFormat;
pub use price::parse_price;
pub use quantity::parse_qty;
pub use scan::{ProductElement, infer_product, scan_products};
pub use store::CartStore;
pub use summary::{CartSummary, SummaryRow, decode_key, encode_key};
