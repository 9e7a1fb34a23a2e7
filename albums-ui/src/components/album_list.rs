//! Album grid with loading and error states

use crate::components::{AlbumCard, ErrorDisplay, LoadingSpinner};
use crate::i18n::{t, Locale, Msg};
use albums_common::{Album, AlbumId};
use dioxus::prelude::*;

/// Where the album fetch currently stands
#[derive(Clone, Debug, PartialEq)]
pub enum AlbumsState {
    Loading,
    Error(String),
    Loaded(Vec<Album>),
}

#[component]
pub fn AlbumListView(
    state: AlbumsState,
    locale: Locale,
    /// Ids already in the cart, used to disable their add buttons
    cart_ids: Vec<AlbumId>,
    on_add_to_cart: EventHandler<Album>,
    on_retry: EventHandler<()>,
) -> Element {
    match state {
        AlbumsState::Loading => rsx! {
            LoadingSpinner { message: t(locale, Msg::LoadingMessage).to_string() }
        },
        AlbumsState::Error(detail) => rsx! {
            ErrorDisplay {
                message: t(locale, Msg::ErrorMessage).to_string(),
                detail: Some(detail),
                retry_label: t(locale, Msg::ErrorRetry).to_string(),
                on_retry,
            }
        },
        AlbumsState::Loaded(albums) => rsx! {
            div { class: "albums-grid grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                {
                    albums
                        .into_iter()
                        .map(|album| {
                            let id = album.id;
                            let in_cart = cart_ids.contains(&id);
                            rsx! {
                                AlbumCard {
                                    key: "{id}",
                                    album,
                                    locale,
                                    in_cart,
                                    on_add_to_cart,
                                }
                            }
                        })
                }
            }
        },
    }
}
