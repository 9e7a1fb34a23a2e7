use serde::{Deserialize, Serialize};

pub type AlbumId = u64;

/// A catalog entry. Field names match the JSON wire format exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub image_url: String,
}
