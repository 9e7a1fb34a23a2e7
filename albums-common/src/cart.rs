use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::album::{Album, AlbumId};
use crate::storage::{CartStorage, StorageError};

/// Key the cart contents are persisted under.
pub const CART_STORAGE_KEY: &str = "album-cart";

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Failed to parse stored cart: {0}")]
    Parse(serde_json::Error),
    #[error("Failed to serialize cart: {0}")]
    Serialize(serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Shopping cart state for one browser session.
///
/// Holds at most one entry per album id, in the order albums were added.
/// Every mutation writes the full item list to `storage` before returning.
/// Count and total are computed from the items on each read.
///
/// The panel visibility flag lives here too but is never persisted.
pub struct Cart<S: CartStorage> {
    items: Vec<Album>,
    is_open: bool,
    storage: S,
}

impl<S: CartStorage> Cart<S> {
    /// Empty cart backed by `storage`. Does not read what is stored.
    pub fn new(storage: S) -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            storage,
        }
    }

    /// Cart restored from whatever `storage` holds under `CART_STORAGE_KEY`.
    pub fn restore(storage: S) -> Self {
        let mut cart = Self::new(storage);
        cart.load_cart();
        cart
    }

    /// Add a copy of `album`. Returns false (and writes nothing) if an item
    /// with the same id is already in the cart.
    pub fn add_to_cart(&mut self, album: &Album) -> bool {
        if self.is_in_cart(album.id) {
            return false;
        }
        self.items.push(album.clone());
        self.persist();
        true
    }

    /// Remove the item with `album_id`. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, album_id: AlbumId) {
        self.items.retain(|item| item.id != album_id);
        self.persist();
    }

    pub fn is_in_cart(&self, album_id: AlbumId) -> bool {
        self.items.iter().any(|item| item.id == album_id)
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist();
    }

    pub fn items(&self) -> &[Album] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Write the current items to storage as a JSON array.
    pub fn save_cart(&mut self) -> Result<(), CartError> {
        let json = serde_json::to_string(&self.items).map_err(CartError::Serialize)?;
        self.storage.set_item(CART_STORAGE_KEY, &json)?;
        Ok(())
    }

    /// Replace the items with what storage holds.
    ///
    /// A missing key or an empty value leaves the cart as it is. Data that
    /// does not parse is logged and the cart is reset to empty.
    pub fn load_cart(&mut self) {
        let Some(saved) = self
            .storage
            .get_item(CART_STORAGE_KEY)
            .filter(|saved| !saved.is_empty())
        else {
            debug!("No saved cart under {CART_STORAGE_KEY}");
            return;
        };

        match parse_items(&saved) {
            Ok(items) => {
                debug!("Loaded {} cart items", items.len());
                self.items = items;
            }
            Err(e) => {
                error!("Error loading cart from storage: {e}");
                self.items.clear();
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open_cart(&mut self) {
        self.is_open = true;
    }

    pub fn close_cart(&mut self) {
        self.is_open = false;
    }

    pub fn toggle_cart(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The in-memory mutation stands even if the write fails.
    fn persist(&mut self) {
        if let Err(e) = self.save_cart() {
            warn!("Failed to persist cart: {e}");
        }
    }
}

/// Parse a stored item list, keeping the first entry for any repeated id.
fn parse_items(saved: &str) -> Result<Vec<Album>, CartError> {
    let items: Vec<Album> = serde_json::from_str(saved).map_err(CartError::Parse)?;
    let mut seen = HashSet::new();
    Ok(items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .collect())
}
