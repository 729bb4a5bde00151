//! Numeric start/end year inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Year range inputs for the query.
///
/// Values are stored as raw text; submit-time validation only checks
/// presence (no numeric or ordering rules).
#[component]
pub fn YearRangeInputs() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_year)();
    let end = (state.end_year)();

    let on_start_input = move |evt: Event<FormData>| {
        state.start_year.set(evt.value());
    };

    let on_end_input = move |evt: Event<FormData>| {
        state.end_year.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "number",
                    placeholder: "Start Year",
                    value: "{start}",
                    style: "width: 100px;",
                    oninput: on_start_input,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "number",
                    placeholder: "End Year",
                    value: "{end}",
                    style: "width: 100px;",
                    oninput: on_end_input,
                }
            }
        }
    }
}
