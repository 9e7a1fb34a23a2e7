//! albums-ui - Pure view components for the album browser
//!
//! Views take plain data and report user actions through callbacks. Cart
//! state, locale state and fetching live in the app that renders them.

pub mod components;
pub mod i18n;
pub mod utils;

pub use components::*;
pub use i18n::{t, Locale, Msg, LOCALE_STORAGE_KEY};
