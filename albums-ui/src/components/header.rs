//! Page header: title, language selector and cart button

use crate::components::icons::ShoppingCartIcon;
use crate::components::ChromelessButton;
use crate::i18n::{t, Locale, Msg};
use dioxus::prelude::*;

#[component]
pub fn HeaderView(
    locale: Locale,
    cart_count: usize,
    on_toggle_cart: EventHandler<()>,
    on_locale_change: EventHandler<Locale>,
) -> Element {
    rsx! {
        header { class: "header bg-gray-900 border-b border-gray-800",
            div { class: "max-w-7xl mx-auto px-6 py-6 flex items-center justify-between gap-4",
                div {
                    h1 { class: "text-3xl font-bold text-white", {t(locale, Msg::HeaderTitle)} }
                    p { class: "text-gray-400 mt-1", {t(locale, Msg::HeaderSubtitle)} }
                }
                div { class: "flex items-center gap-4",
                    LanguageSelect { locale, on_change: on_locale_change }
                    CartButton { locale, count: cart_count, on_click: on_toggle_cart }
                }
            }
        }
    }
}

/// Text of the cart badge, or `None` when the cart is empty
fn badge_label(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Cart icon with a count badge; the badge is not rendered at 0
#[component]
pub fn CartButton(locale: Locale, count: usize, on_click: EventHandler<()>) -> Element {
    rsx! {
        ChromelessButton {
            class: Some("cart-icon relative text-gray-300 hover:text-white p-2".to_string()),
            aria_label: Some(t(locale, Msg::CartOpen).to_string()),
            onclick: move |_| on_click.call(()),
            ShoppingCartIcon { class: "w-6 h-6" }
            if let Some(label) = badge_label(count) {
                span { class: "cart-badge absolute -top-1 -right-1 bg-indigo-600 text-white text-xs rounded-full min-w-5 h-5 px-1 flex items-center justify-center",
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn LanguageSelect(locale: Locale, on_change: EventHandler<Locale>) -> Element {
    rsx! {
        label { class: "language-selector flex items-center gap-2 text-sm text-gray-400",
            span { {t(locale, Msg::LanguageSelect)} }
            select {
                class: "bg-gray-800 border border-gray-700 text-white rounded px-2 py-1",
                value: locale.code(),
                onchange: move |evt| on_change.call(Locale::from_code_or_default(&evt.value())),
                for choice in Locale::ALL {
                    option {
                        key: "{choice.code()}",
                        value: choice.code(),
                        selected: choice == locale,
                        {choice.label()}
                    }
                }
            }
        }
    }
}
