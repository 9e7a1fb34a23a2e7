use crate::{storage, CartSignal, LocaleSignal, Route};
use albums_common::AlbumId;
use albums_ui::{CartPanel, HeaderView, Locale};
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let mut cart: CartSignal = use_context();
    let mut locale: LocaleSignal = use_context();

    let (items, total, count, is_open) = {
        let cart = cart.read();
        (
            cart.items().to_vec(),
            cart.total_price(),
            cart.item_count(),
            cart.is_open(),
        )
    };

    rsx! {
        HeaderView {
            locale: locale(),
            cart_count: count,
            on_toggle_cart: move |_| cart.write().toggle_cart(),
            on_locale_change: move |next: Locale| {
                storage::save_locale(next);
                locale.set(next);
            },
        }
        Outlet::<Route> {}
        CartPanel {
            is_open,
            items,
            total,
            locale: locale(),
            on_close: move |_| cart.write().close_cart(),
            on_remove: move |id: AlbumId| cart.write().remove_from_cart(id),
            on_clear: move |_| cart.write().clear_cart(),
        }
    }
}
