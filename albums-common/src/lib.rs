//! albums-common - types shared by the album API and the browser client
//!
//! Holds the `Album` wire type and the cart state container. Nothing in here
//! does I/O directly; persistence goes through the `CartStorage` seam.

pub mod album;
pub mod cart;
pub mod storage;

pub use album::{Album, AlbumId};
pub use cart::{Cart, CartError, CART_STORAGE_KEY};
pub use storage::{CartStorage, MemoryStorage, StorageError};
