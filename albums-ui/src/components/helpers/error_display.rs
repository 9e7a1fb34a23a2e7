//! Error display component

use crate::components::icons::RefreshIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Error box with a message, the underlying detail and a retry button
#[component]
pub fn ErrorDisplay(
    message: String,
    #[props(default)] detail: Option<String>,
    retry_label: String,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "error bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            p { class: "font-semibold", "{message}" }
            if let Some(detail) = detail {
                p { class: "text-sm text-red-200 mt-1", "{detail}" }
            }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                class: Some("retry-btn mt-3".to_string()),
                onclick: move |_| on_retry.call(()),
                RefreshIcon { class: "w-4 h-4" }
                "{retry_label}"
            }
        }
    }
}
