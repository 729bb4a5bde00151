//! Dropdown selector for choosing a district.

use crate::state::AppState;
use arv_data::catalog;
use dioxus::prelude::*;

/// District dropdown selector.
/// Options depend on the currently selected state; an unselected state
/// leaves only the placeholder entry.
#[component]
pub fn DistrictSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.district)();
    let districts = catalog::districts_for(&(state.state_name)());

    let on_change = move |evt: Event<FormData>| {
        state.district.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "district-select",
                style: "font-weight: bold; margin-right: 8px;",
                "District: "
            }
            select {
                id: "district-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select District"
                }
                for name in districts.iter() {
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
