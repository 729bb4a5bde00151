//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while a rainfall fetch is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 48px 0; color: #666; font-style: italic;",
            "Fetching rainfall data..."
        }
    }
}
