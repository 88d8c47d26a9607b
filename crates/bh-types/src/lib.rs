use serde::{Deserialize, Deserializer, Serialize};

/// localStorage key holding the serialized cart.
pub const CART_KEY: &str = "burger_house_cart_v1";

/// Name used when the menu markup carries no recognizable product name.
pub const DEFAULT_PRODUCT_NAME: &str = "Producto";

/// Price used when the menu markup carries no recognizable price.
pub const DEFAULT_PRODUCT_PRICE: &str = "$0";

/// One line of the cart. Identity is `name`, compared exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub name: String,
    /// Display price as it appeared on the menu, e.g. `"$12.500"`.
    #[serde(deserialize_with = "lenient_price")]
    pub price: String,
    #[serde(default = "one", deserialize_with = "lenient_qty")]
    pub qty: u32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>, qty: u32) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            qty: qty.max(1),
        }
    }
}

/// Request to put a product in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub qty: Option<u32>,
}

impl NewItem {
    pub fn one(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            qty: Some(1),
        }
    }

    /// Quantity to add; unset or zero counts as one.
    pub fn effective_qty(&self) -> u32 {
        match self.qty {
            Some(q) if q > 0 => q,
            _ => 1,
        }
    }
}

/// Name and price inferred from a menu entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductInfo {
    pub name: String,
    pub price: String,
}

impl Default for ProductInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_PRODUCT_NAME.to_owned(),
            price: DEFAULT_PRODUCT_PRICE.to_owned(),
        }
    }
}

impl From<&ProductInfo> for NewItem {
    fn from(info: &ProductInfo) -> Self {
        NewItem::one(info.name.clone(), info.price.clone())
    }
}

fn one() -> u32 {
    1
}

// Older blobs may carry `null`, `0` or a float for qty; all of them read as
// a valid quantity.
fn lenient_qty<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(match raw {
        Some(q) if q.is_finite() && q >= 1.0 => q.min(f64::from(u32::MAX)) as u32,
        _ => 1,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Int(i64),
    Float(f64),
}

// Hand-edited or legacy blobs may store the price as a bare number; keep the
// line instead of discarding the whole cart.
fn lenient_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        Some(RawPrice::Text(s)) => s,
        Some(RawPrice::Int(n)) => n.to_string(),
        Some(RawPrice::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_zero_qty_reads_as_one() {
        let items: Vec<CartItem> = serde_json::from_str(
            r#"[{"name":"A","price":"$1"},{"name":"B","price":"$2","qty":0},{"name":"C","price":"$3","qty":null}]"#,
        )
        .unwrap();
        assert!(items.iter().all(|i| i.qty == 1));
    }

    #[test]
    fn qty_written_as_float_is_accepted() {
        let item: CartItem = serde_json::from_str(r#"{"name":"A","price":"$1","qty":3.0}"#).unwrap();
        assert_eq!(item.qty, 3);
    }

    #[test]
    fn numeric_price_is_kept_as_text() {
        let items: Vec<CartItem> = serde_json::from_str(
            r#"[{"name":"A","price":"$1","qty":2},{"name":"B","price":5000,"qty":1},{"name":"C","price":12.5},{"name":"D","price":null}]"#,
        )
        .unwrap();
        let prices: Vec<&str> = items.iter().map(|i| i.price.as_str()).collect();
        assert_eq!(prices, vec!["$1", "5000", "12.5", ""]);
    }

    #[test]
    fn serialized_layout_matches_storage_format() {
        let json = serde_json::to_string(&CartItem::new("Doble", "$12.500", 2)).unwrap();
        assert_eq!(json, r#"{"name":"Doble","price":"$12.500","qty":2}"#);
    }

    #[test]
    fn new_item_defaults_to_one() {
        let item = NewItem {
            name: "X".into(),
            price: "$1".into(),
            qty: None,
        };
        assert_eq!(item.effective_qty(), 1);
        assert_eq!(NewItem { qty: Some(0), ..item.clone() }.effective_qty(), 1);
        assert_eq!(NewItem { qty: Some(4), ..item }.effective_qty(), 4);
    }
}
