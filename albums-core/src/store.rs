use albums_common::{Album, AlbumId};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: title, artist, price, image_url";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlbumError {
    #[error("{0}")]
    Validation(String),
    #[error("Album not found")]
    NotFound(AlbumId),
    #[error("No album ids left after {0}")]
    IdsExhausted(AlbumId),
}

/// How `create` picks the id of a new album.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// One more than the highest id currently in the store (1 when empty).
    /// Deleting the highest album and creating another reuses its id.
    #[default]
    MaxPlusOne,
    /// One more than the highest id ever seen by this store. Never reuses.
    Monotonic,
}

/// Price as it arrives in a request body: clients send either a JSON
/// number or a numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn resolve(&self) -> Result<f64, AlbumError> {
        let price = match self {
            PriceInput::Number(n) => *n,
            PriceInput::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                AlbumError::Validation(format!("Invalid price: {s:?} is not a number"))
            })?,
        };

        if !price.is_finite() || price < 0.0 {
            return Err(AlbumError::Validation(
                "Invalid price: must be a non-negative number".to_string(),
            ));
        }

        Ok(price)
    }
}

impl From<f64> for PriceInput {
    fn from(price: f64) -> Self {
        PriceInput::Number(price)
    }
}

/// Album fields as supplied by a caller. `create` requires all of them,
/// `update` applies whichever are present.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AlbumFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AlbumFields {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            artist: Some(artist.into()),
            price: Some(price.into()),
            image_url: Some(image_url.into()),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn non_empty(name: &str, value: &str) -> Result<(), AlbumError> {
    if value.trim().is_empty() {
        return Err(AlbumError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Check the invariants every stored album holds.
pub(crate) fn validate_album(album: &Album) -> Result<(), AlbumError> {
    if album.id == 0 {
        return Err(AlbumError::Validation("id must be positive".to_string()));
    }
    non_empty("title", &album.title)?;
    non_empty("artist", &album.artist)?;
    non_empty("image_url", &album.image_url)?;
    PriceInput::Number(album.price).resolve()?;
    Ok(())
}

/// The in-memory album catalog.
///
/// Albums keep insertion order. Callers that share a store across requests
/// go through `SharedAlbumStore`.
#[derive(Clone, Debug)]
pub struct AlbumStore {
    albums: Vec<Album>,
    id_strategy: IdStrategy,
    /// Highest id this store has ever held.
    high_water: AlbumId,
}

impl AlbumStore {
    pub fn new(seed: Vec<Album>, id_strategy: IdStrategy) -> Self {
        let high_water = seed.iter().map(|a| a.id).max().unwrap_or(0);
        Self {
            albums: seed,
            id_strategy,
            high_water,
        }
    }

    pub fn empty(id_strategy: IdStrategy) -> Self {
        Self::new(Vec::new(), id_strategy)
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn list(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn get(&self, id: AlbumId) -> Result<&Album, AlbumError> {
        self.albums
            .iter()
            .find(|a| a.id == id)
            .ok_or(AlbumError::NotFound(id))
    }

    pub fn create(&mut self, fields: AlbumFields) -> Result<Album, AlbumError> {
        let (Some(title), Some(artist), Some(price), Some(image_url)) = (
            present(&fields.title),
            present(&fields.artist),
            fields.price.as_ref(),
            present(&fields.image_url),
        ) else {
            return Err(AlbumError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        };

        let album = Album {
            id: self.next_id()?,
            title: title.to_string(),
            artist: artist.to_string(),
            price: price.resolve()?,
            image_url: image_url.to_string(),
        };

        self.high_water = self.high_water.max(album.id);
        self.albums.push(album.clone());
        info!("Created album {} ({})", album.id, album.title);
        Ok(album)
    }

    /// Apply the fields present in `fields`, leaving the rest untouched.
    /// Nothing is written unless every supplied field is valid.
    pub fn update(&mut self, id: AlbumId, fields: AlbumFields) -> Result<Album, AlbumError> {
        let index = self.position(id)?;

        if let Some(title) = &fields.title {
            non_empty("title", title)?;
        }
        if let Some(artist) = &fields.artist {
            non_empty("artist", artist)?;
        }
        if let Some(image_url) = &fields.image_url {
            non_empty("image_url", image_url)?;
        }
        let price = fields.price.as_ref().map(PriceInput::resolve).transpose()?;

        let album = &mut self.albums[index];
        if let Some(title) = fields.title {
            album.title = title;
        }
        if let Some(artist) = fields.artist {
            album.artist = artist;
        }
        if let Some(price) = price {
            album.price = price;
        }
        if let Some(image_url) = fields.image_url {
            album.image_url = image_url;
        }

        debug!("Updated album {id}");
        Ok(album.clone())
    }

    pub fn delete(&mut self, id: AlbumId) -> Result<Album, AlbumError> {
        let index = self.position(id)?;
        let album = self.albums.remove(index);
        info!("Deleted album {id} ({})", album.title);
        Ok(album)
    }

    fn position(&self, id: AlbumId) -> Result<usize, AlbumError> {
        self.albums
            .iter()
            .position(|a| a.id == id)
            .ok_or(AlbumError::NotFound(id))
    }

    fn next_id(&self) -> Result<AlbumId, AlbumError> {
        let last = match self.id_strategy {
            IdStrategy::MaxPlusOne => self.albums.iter().map(|a| a.id).max().unwrap_or(0),
            IdStrategy::Monotonic => self.high_water,
        };
        last.checked_add(1).ok_or(AlbumError::IdsExhausted(last))
    }
}

/// Cloneable handle to one `AlbumStore` shared by every request handler.
///
/// Each handler holds the lock for a single store operation, so mutations
/// are applied one at a time.
#[derive(Clone, Debug)]
pub struct SharedAlbumStore(Arc<RwLock<AlbumStore>>);

impl SharedAlbumStore {
    pub fn new(store: AlbumStore) -> Self {
        Self(Arc::new(RwLock::new(store)))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, AlbumStore> {
        self.0.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, AlbumStore> {
        self.0.write().await
    }
}
