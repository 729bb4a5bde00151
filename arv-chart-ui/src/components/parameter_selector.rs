//! Dropdown selector for the climate parameter.

use crate::state::AppState;
use arv_data::catalog;
use dioxus::prelude::*;

/// Climate parameter dropdown selector.
#[component]
pub fn ParameterSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.parameter)();

    let on_change = move |evt: Event<FormData>| {
        state.parameter.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "parameter-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Parameter: "
            }
            select {
                id: "parameter-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select Parameter"
                }
                for name in catalog::PARAMETERS.iter() {
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
