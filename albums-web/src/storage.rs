//! Local storage helpers

use albums_common::{CartStorage, StorageError};
use albums_ui::{Locale, LOCALE_STORAGE_KEY};
use tracing::warn;

pub fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(key, value) {
            warn!("Failed to write {} to local storage: {:?}", key, e);
        }
    }
}

/// Stored locale, English when nothing usable is stored
pub fn load_locale() -> Locale {
    get_string(LOCALE_STORAGE_KEY)
        .map(|code| Locale::from_code_or_default(&code))
        .unwrap_or_default()
}

pub fn save_locale(locale: Locale) {
    set_string(LOCALE_STORAGE_KEY, locale.code());
}

/// Cart persistence backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl CartStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_string(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
