//! Dropdown selector for choosing a state.

use crate::state::AppState;
use arv_data::catalog;
use dioxus::prelude::*;

/// State dropdown selector.
/// Options come from the static catalog; changing the state resets the
/// district, since district choices depend on it.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.state_name)();

    let on_change = move |evt: Event<FormData>| {
        state.state_name.set(evt.value());
        state.district.set(String::new());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "state-select",
                style: "font-weight: bold; margin-right: 8px;",
                "State: "
            }
            select {
                id: "state-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select State"
                }
                for name in catalog::STATES.iter() {
                    option {
                        value: "{name}",
                        selected: selected == *name,
                        "{name}"
                    }
                }
            }
        }
    }
}
