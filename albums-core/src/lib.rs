//! albums-core - the album catalog server
//!
//! `store` owns the in-memory catalog, `seed` builds its initial contents and
//! `api` exposes it over HTTP.

pub mod api;
pub mod seed;
pub mod store;

pub use api::{create_router, WELCOME_MESSAGE};
pub use store::{AlbumError, AlbumFields, AlbumStore, IdStrategy, PriceInput, SharedAlbumStore};
