//! Loading spinner component

use dioxus::prelude::*;

/// Loading spinner with a message next to it
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "loading flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-indigo-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}
