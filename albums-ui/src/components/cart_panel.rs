//! Slide-in cart panel - pure view with callbacks

use crate::components::icons::{ImageIcon, TrashIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::i18n::{t, Locale, Msg};
use crate::utils::format_price;
use albums_common::{Album, AlbumId};
use dioxus::prelude::*;

/// Cart panel with an overlay behind it
///
/// Renders nothing while closed. Clicking the overlay or the close button
/// calls `on_close`.
#[component]
pub fn CartPanel(
    is_open: bool,
    items: Vec<Album>,
    total: f64,
    locale: Locale,
    on_close: EventHandler<()>,
    on_remove: EventHandler<AlbumId>,
    on_clear: EventHandler<()>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let total = format_price(total);

    rsx! {
        div {
            class: "cart-overlay fixed inset-0 bg-black/50 z-40",
            onclick: move |_| on_close.call(()),
        }
        aside { class: "cart-panel fixed top-0 right-0 h-full w-full max-w-md bg-gray-900 border-l border-gray-700 z-50 flex flex-col",
            div { class: "cart-header flex items-center justify-between px-6 py-4 border-b border-gray-700",
                h2 { class: "text-xl font-bold text-white", {t(locale, Msg::CartTitle)} }
                ChromelessButton {
                    class: Some("cart-close text-gray-400 hover:text-white".to_string()),
                    aria_label: Some(t(locale, Msg::CartClose).to_string()),
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-5 h-5" }
                }
            }
            if items.is_empty() {
                div { class: "cart-empty flex-1 flex items-center justify-center text-gray-400",
                    p { {t(locale, Msg::CartEmpty)} }
                }
            } else {
                ul { class: "cart-items flex-1 overflow-y-auto px-6 py-4 space-y-4",
                    {
                        items
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                rsx! {
                                    CartItemRow { key: "{id}", item, locale, on_remove }
                                }
                            })
                    }
                }
                div { class: "cart-footer px-6 py-4 border-t border-gray-700 space-y-3",
                    div { class: "cart-total flex justify-between text-white font-semibold",
                        span { {t(locale, Msg::CartTotal)} }
                        span { class: "cart-total-amount", "{total}" }
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        size: ButtonSize::Medium,
                        class: Some("cart-clear w-full justify-center".to_string()),
                        onclick: move |_| on_clear.call(()),
                        {t(locale, Msg::CartClear)}
                    }
                }
            }
        }
    }
}

#[component]
fn CartItemRow(item: Album, locale: Locale, on_remove: EventHandler<AlbumId>) -> Element {
    let id = item.id;
    let price = format_price(item.price);

    rsx! {
        li { class: "cart-item flex items-center gap-4",
            div { class: "w-16 h-16 bg-gray-700 rounded overflow-hidden flex items-center justify-center shrink-0",
                if item.image_url.is_empty() {
                    ImageIcon { class: "w-6 h-6 text-gray-500" }
                } else {
                    img {
                        class: "cart-item-image w-full h-full object-cover",
                        src: "{item.image_url}",
                        alt: "{item.title}",
                    }
                }
            }
            div { class: "flex-1 min-w-0",
                p { class: "cart-item-title text-white font-medium truncate", "{item.title}" }
                p { class: "cart-item-artist text-gray-400 text-sm truncate", "{item.artist}" }
                p { class: "cart-item-price text-indigo-300 text-sm", "{price}" }
            }
            ChromelessButton {
                class: Some("cart-item-remove text-gray-400 hover:text-red-400".to_string()),
                aria_label: Some(t(locale, Msg::CartRemove).to_string()),
                title: Some(t(locale, Msg::CartRemove).to_string()),
                onclick: move |_| on_remove.call(id),
                TrashIcon { class: "w-5 h-5" }
            }
        }
    }
}
