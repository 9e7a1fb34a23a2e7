//! Album card component - pure view with callbacks

use crate::components::icons::{CheckIcon, ExternalLinkIcon, ImageIcon, PlusIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::i18n::{t, Locale, Msg};
use crate::utils::format_price;
use albums_common::Album;
use dioxus::prelude::*;

/// Label and disabled flag of the add button. An album already in the cart
/// cannot be added again.
fn add_button_state(in_cart: bool) -> (Msg, bool) {
    if in_cart {
        (Msg::InCart, true)
    } else {
        (Msg::AddToCart, false)
    }
}

/// Single album in the browser grid
///
/// The add button turns into a disabled "In Cart" label once `in_cart` is
/// set. Adding is reported through `on_add_to_cart`; the card holds no cart
/// state of its own.
#[component]
pub fn AlbumCard(
    album: Album,
    locale: Locale,
    in_cart: bool,
    on_add_to_cart: EventHandler<Album>,
) -> Element {
    let title = album.title.clone();
    let artist = album.artist.clone();
    let image_url = album.image_url.clone();
    let price = format_price(album.price);
    let (add_label, add_disabled) = add_button_state(in_cart);

    let card_class = "album-card bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 flex flex-col";

    rsx! {
        div { class: "{card_class}", "data-testid": "album-card",
            div { class: "aspect-square bg-gray-700 flex items-center justify-center",
                if image_url.is_empty() {
                    ImageIcon { class: "w-12 h-12 text-gray-500" }
                } else {
                    img {
                        src: "{image_url}",
                        alt: "Album cover for {title}",
                        class: "w-full h-full object-cover",
                    }
                }
            }
            div { class: "album-info p-4 flex flex-col gap-1 flex-1",
                h3 {
                    class: "album-title font-bold text-white text-lg truncate",
                    title: "{title}",
                    "{title}"
                }
                p {
                    class: "album-artist text-gray-400 text-sm truncate",
                    title: "{artist}",
                    "{artist}"
                }
                p { class: "price text-indigo-300 font-semibold", "{price}" }
                div { class: "album-actions mt-auto pt-3 flex items-center gap-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        disabled: add_disabled,
                        onclick: {
                            let album = album.clone();
                            move |_| on_add_to_cart.call(album.clone())
                        },
                        if add_disabled {
                            CheckIcon { class: "w-4 h-4" }
                        } else {
                            PlusIcon { class: "w-4 h-4" }
                        }
                        {t(locale, add_label)}
                    }
                    a {
                        class: "btn-secondary inline-flex items-center gap-1 text-sm text-gray-400 hover:text-white",
                        href: "{image_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        ExternalLinkIcon { class: "w-4 h-4" }
                        {t(locale, Msg::Preview)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_button_enabled_until_album_is_in_cart() {
        assert_eq!(add_button_state(false), (Msg::AddToCart, false));
        assert_eq!(add_button_state(true), (Msg::InCart, true));
    }

    #[test]
    fn in_cart_label_is_translated() {
        let (label, _) = add_button_state(true);
        assert_eq!(t(Locale::En, label), "In Cart");
        assert_eq!(t(Locale::Fr, label), "Dans le panier");
    }
}
