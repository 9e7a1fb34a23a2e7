use crate::{api, CartSignal, LocaleSignal};
use albums_common::Album;
use albums_ui::{AlbumListView, AlbumsState};
use dioxus::prelude::*;

#[component]
pub fn AlbumBrowser() -> Element {
    let mut albums = use_resource(api::fetch_albums);
    let mut cart: CartSignal = use_context();
    let locale: LocaleSignal = use_context();

    let state = match &*albums.read() {
        None => AlbumsState::Loading,
        Some(Ok(list)) => AlbumsState::Loaded(list.clone()),
        Some(Err(e)) => AlbumsState::Error(e.clone()),
    };
    let cart_ids = cart.read().items().iter().map(|album| album.id).collect();

    rsx! {
        main { class: "max-w-7xl mx-auto px-6 py-8",
            AlbumListView {
                state,
                locale: locale(),
                cart_ids,
                on_add_to_cart: move |album: Album| {
                    cart.write().add_to_cart(&album);
                },
                on_retry: move |_| albums.restart(),
            }
        }
    }
}
