//! The cart store.
//!
//! One `CartStore` is created at startup and shared (behind an `Rc`) by every
//! handler that touches the cart. All mutations go through `add`, `remove`,
//! `set_qty` and `clear`; each one persists the whole list and then notifies
//! the subscribers with the new contents.

use crate::format::NumberFormat;
use crate::summary::{self, CartSummary};
use bh_storage::CartStorage;
use bh_types::{CART_KEY, CartItem, NewItem};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

type Listener = Rc<dyn Fn(&[CartItem])>;

pub struct CartStore<S> {
    storage: S,
    key: String,
    listeners: RefCell<Vec<Listener>>,
}

impl<S: CartStorage> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current cart. Missing or unreadable data is an empty cart.
    pub fn get(&self) -> Vec<CartItem> {
        let raw = match self.storage.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                debug!(key = %self.key, error = %err, "cart storage unreadable, using empty cart");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) => items,
            Err(err) => {
                debug!(key = %self.key, error = %err, "cart blob is not a valid item list, using empty cart");
                Vec::new()
            }
        }
    }

    /// Replace the stored cart and notify subscribers.
    pub fn save(&self, cart: &[CartItem]) {
        match serde_json::to_string(cart) {
            Ok(raw) => {
                if let Err(err) = self.storage.save(&self.key, &raw) {
                    warn!(key = %self.key, error = %err, "failed to persist cart");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize cart"),
        }
        self.notify(cart);
    }

    /// Add `item`, merging into an existing line with the same name.
    /// Returns the line's quantity after the add.
    pub fn add(&self, item: &NewItem) -> u32 {
        let mut cart = self.get();
        let qty = item.effective_qty();
        let new_qty = match cart.iter_mut().find(|i| i.name == item.name) {
            Some(existing) => {
                existing.qty = existing.qty.max(1).saturating_add(qty);
                existing.qty
            }
            None => {
                cart.push(CartItem::new(item.name.clone(), item.price.clone(), qty));
                qty
            }
        };
        debug!(name = %item.name, qty = new_qty, "added to cart");
        self.save(&cart);
        new_qty
    }

    /// Drop every line named `name`.
    pub fn remove(&self, name: &str) {
        let mut cart = self.get();
        cart.retain(|i| i.name != name);
        self.save(&cart);
    }

    /// Set the quantity of the line named `name`, floored at 1.
    /// Returns false, without saving, when no such line exists.
    pub fn set_qty(&self, name: &str, qty: u32) -> bool {
        let mut cart = self.get();
        let Some(item) = cart.iter_mut().find(|i| i.name == name) else {
            return false;
        };
        item.qty = qty.max(1);
        self.save(&cart);
        true
    }

    pub fn clear(&self) {
        self.save(&[]);
    }

    /// Total quantity across all lines.
    pub fn badge_count(&self) -> u64 {
        summary::badge_count(&self.get())
    }

    pub fn summary(&self, fmt: &NumberFormat) -> CartSummary {
        CartSummary::from_items(&self.get(), fmt)
    }

    /// Register a callback run after every save with the new contents.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&[CartItem]) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self, cart: &[CartItem]) {
        // Snapshot so a listener may subscribe or mutate the store again.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(cart);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bh_storage::{InMemoryStorage, StorageError};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn store() -> CartStore<Rc<InMemoryStorage>> {
        CartStore::new(Rc::new(InMemoryStorage::default()))
    }

    struct BrokenStorage;

    impl CartStorage for BrokenStorage {
        fn load(&self, _key: &str) -> bh_storage::Result<Option<String>> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _key: &str, value: &str) -> bh_storage::Result<()> {
            Err(StorageError::Write(format!("quota exceeded ({} bytes)", value.len())))
        }
    }

    #[test]
    fn adding_same_name_twice_merges() {
        let store = store();
        store.add(&NewItem::one("X", "$10"));
        let qty = store.add(&NewItem::one("X", "$10"));
        assert_eq!(qty, 2);
        assert_eq!(store.get(), vec![CartItem::new("X", "$10", 2)]);
    }

    #[test]
    fn add_respects_requested_qty_and_keeps_order() {
        let store = store();
        store.add(&NewItem::one("B", "$5"));
        store.add(&NewItem {
            name: "A".into(),
            price: "$1".into(),
            qty: Some(3),
        });
        store.add(&NewItem {
            name: "B".into(),
            price: "$5".into(),
            qty: None,
        });
        assert_eq!(
            store.get(),
            vec![CartItem::new("B", "$5", 2), CartItem::new("A", "$1", 3)]
        );
    }

    #[test]
    fn names_match_case_sensitively() {
        let store = store();
        store.add(&NewItem::one("Reina", "$1"));
        store.add(&NewItem::one("reina", "$1"));
        assert_eq!(store.get().len(), 2);
    }

    #[test]
    fn remove_drops_the_item() {
        let store = store();
        store.add(&NewItem::one("X", "$1"));
        store.add(&NewItem::one("Y", "$2"));
        store.remove("X");
        let cart = store.get();
        assert!(cart.iter().all(|i| i.name != "X"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_empties_cart_and_badge() {
        let storage = Rc::new(InMemoryStorage::default());
        let store = CartStore::new(Rc::clone(&storage));
        store.add(&NewItem::one("X", "$1"));
        store.clear();
        assert!(store.get().is_empty());
        assert_eq!(store.badge_count(), 0);
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn set_qty_floors_at_one() {
        let store = store();
        store.add(&NewItem::one("X", "$1"));
        assert!(store.set_qty("X", crate::parse_qty("0")));
        assert_eq!(store.get()[0].qty, 1);
        assert!(store.set_qty("X", crate::parse_qty("-3")));
        assert_eq!(store.get()[0].qty, 1);
        assert!(store.set_qty("X", 5));
        assert_eq!(store.get()[0].qty, 5);
    }

    #[test]
    fn set_qty_on_unknown_name_does_not_save() {
        let store = store();
        let saves = Rc::new(Cell::new(0));
        let counter = Rc::clone(&saves);
        store.subscribe(move |_| counter.set(counter.get() + 1));
        assert!(!store.set_qty("ghost", 3));
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn corrupt_or_missing_blob_reads_empty() {
        init_tracing();
        for raw in ["not json", "null", "{}", r#"[{"price":"$1"}]"#] {
            let store = CartStore::new(InMemoryStorage::with_entry(CART_KEY, raw));
            assert!(store.get().is_empty(), "blob {raw:?}");
        }
        assert!(store().get().is_empty());
    }

    #[test]
    fn blob_written_by_older_pages_is_read() {
        let store = CartStore::new(InMemoryStorage::with_entry(
            CART_KEY,
            r#"[{"name":"Clásica","price":"$15.000"},{"name":"Papas","price":"$6.000","qty":2}]"#,
        ));
        assert_eq!(store.badge_count(), 3);
        assert_eq!(store.summary(&NumberFormat::default()).total_text, "$27.000");
    }

    #[test]
    fn numeric_price_in_blob_survives_the_next_add() {
        let storage = Rc::new(InMemoryStorage::with_entry(
            CART_KEY,
            r#"[{"name":"A","price":"$1","qty":2},{"name":"B","price":5000,"qty":1}]"#,
        ));
        let store = CartStore::new(Rc::clone(&storage));
        assert_eq!(store.get().len(), 2);

        store.add(&NewItem::one("C", "$3"));

        let names: Vec<String> = store.get().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(store.badge_count(), 4);
        assert!(storage.raw(CART_KEY).unwrap().contains(r#""price":"5000""#));
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        store.subscribe(move |cart| log.borrow_mut().push(summary::badge_count(cart)));

        store.add(&NewItem::one("X", "$1"));
        store.add(&NewItem::one("X", "$1"));
        store.set_qty("X", 4);
        store.remove("X");
        store.add(&NewItem::one("Y", "$1"));
        store.clear();

        assert_eq!(*seen.borrow(), vec![1, 2, 4, 0, 1, 0]);
    }

    #[test]
    fn broken_storage_never_fails_the_caller() {
        init_tracing();
        let store = CartStore::new(BrokenStorage);
        let notified = Rc::new(Cell::new(false));
        let flag = Rc::clone(&notified);
        store.subscribe(move |cart| flag.set(cart.len() == 1));

        assert_eq!(store.add(&NewItem::one("X", "$1")), 1);
        assert!(notified.get());
        assert!(store.get().is_empty());
    }

    #[test]
    fn custom_key_is_isolated() {
        let storage = Rc::new(InMemoryStorage::default());
        let a = CartStore::new(Rc::clone(&storage));
        let b = CartStore::with_key(Rc::clone(&storage), "other_cart");
        a.add(&NewItem::one("X", "$1"));
        assert!(b.get().is_empty());
        assert_eq!(b.key(), "other_cart");
    }
}
