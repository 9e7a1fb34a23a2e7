pub mod api;
pub mod pages;
pub mod storage;

use albums_common::Cart;
use albums_ui::Locale;
use dioxus::prelude::*;
use pages::{AlbumBrowser, AppLayout};
use storage::LocalStorage;

/// Session cart shared through context
pub type CartSignal = Signal<Cart<LocalStorage>>;
pub type LocaleSignal = Signal<Locale>;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    AlbumBrowser {},
}

/// Root component. Provides the session cart and the current locale as
/// context signals for every page.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Cart::restore(LocalStorage)));
    use_context_provider(|| Signal::new(storage::load_locale()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen bg-gray-950 text-white", Router::<Route> {} }
    }
}
