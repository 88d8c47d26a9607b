use crate::format::NumberFormat;
use crate::price::parse_price;
use bh_types::CartItem;
use std::borrow::Cow;

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub price: String,
    pub qty: u32,
    /// Percent-encoded name, safe to embed in a `data-name` attribute.
    pub key: String,
    pub line_total: f64,
}

/// Everything the cart modal shows, computed from the stored items.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub rows: Vec<SummaryRow>,
    pub total: f64,
    pub total_text: String,
    pub badge_count: u64,
}

impl CartSummary {
    pub fn from_items(items: &[CartItem], fmt: &NumberFormat) -> Self {
        let mut total = 0.0;
        let rows = items
            .iter()
            .map(|item| {
                let qty = item.qty.max(1);
                let line_total = parse_price(&item.price) * f64::from(qty);
                total += line_total;
                SummaryRow {
                    name: item.name.clone(),
                    price: item.price.clone(),
                    qty,
                    key: encode_key(&item.name),
                    line_total,
                }
            })
            .collect();

        Self {
            rows,
            total,
            total_text: format!("${}", fmt.format_amount(total)),
            badge_count: badge_count(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn badge_count(items: &[CartItem]) -> u64 {
    items.iter().map(|i| u64::from(i.qty.max(1))).sum()
}

pub fn encode_key(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// Inverse of [`encode_key`]. Malformed input is returned untouched.
pub fn decode_key(key: &str) -> String {
    urlencoding::decode(key)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| key.to_owned())
}
