//! View components

pub mod album_card;
pub mod album_list;
pub mod button;
pub mod cart_panel;
pub mod header;
pub mod helpers;
pub mod icons;

pub use album_card::AlbumCard;
pub use album_list::{AlbumListView, AlbumsState};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use cart_panel::CartPanel;
pub use header::{CartButton, HeaderView, LanguageSelect};
pub use helpers::{ErrorDisplay, LoadingSpinner};
