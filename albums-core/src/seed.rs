//! Initial catalog contents
//!
//! The built-in seed is six fixed albums. A YAML file holding a list of
//! albums can replace it at startup.

use crate::store::validate_album;
use albums_common::{Album, AlbumId};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid seed album: {0}")]
    Invalid(String),
}

fn seed_album(id: u64, title: &str, artist: &str, price: f64, image_url: &str) -> Album {
    Album {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        price,
        image_url: image_url.to_string(),
    }
}

pub fn default_seed() -> Vec<Album> {
    vec![
        seed_album(
            1,
            "You, Me and an App Id",
            "Daprize",
            10.99,
            "https://aka.ms/albums-daprlogo",
        ),
        seed_album(
            2,
            "Seven Revision Army",
            "The Blue-Green Stripes",
            13.99,
            "https://aka.ms/albums-containerappslogo",
        ),
        seed_album(
            3,
            "Scale It Up",
            "KEDA Club",
            13.99,
            "https://aka.ms/albums-kedalogo",
        ),
        seed_album(
            4,
            "Lost in Translation",
            "MegaDNS",
            12.99,
            "https://aka.ms/albums-envoylogo",
        ),
        seed_album(
            5,
            "Lock Down Your Love",
            "V is for VNET",
            12.99,
            "https://aka.ms/albums-vnetlogo",
        ),
        seed_album(
            6,
            "Sweet Container O' Mine",
            "Guns N Probeses",
            14.99,
            "https://aka.ms/albums-containerappslogo",
        ),
    ]
}

pub fn parse_seed(content: &str) -> Result<Vec<Album>, SeedError> {
    let albums: Vec<Album> = serde_yaml::from_str(content)?;
    validate_seed(&albums)?;
    Ok(albums)
}

pub fn load_seed(path: &Path) -> Result<Vec<Album>, SeedError> {
    let content = std::fs::read_to_string(path)?;
    parse_seed(&content)
}

fn validate_seed(albums: &[Album]) -> Result<(), SeedError> {
    let mut ids = HashSet::new();
    for album in albums {
        validate_album(album).map_err(|e| SeedError::Invalid(format!("id {}: {e}", album.id)))?;
        if album.id == AlbumId::MAX {
            return Err(SeedError::Invalid(format!(
                "id {} leaves no room for new albums",
                album.id
            )));
        }
        if !ids.insert(album.id) {
            return Err(SeedError::Invalid(format!("duplicate id {}", album.id)));
        }
    }
    Ok(())
}
