//! Annual Rainfall Visualization
//!
//! Single-page form: pick a state, district, year range, and climate
//! parameter, then render a bar chart of annual rainfall for that query.
//!
//! Data flow:
//! 1. The submit handler validates the five form fields (presence only).
//! 2. A `RainfallProvider` fetch runs as an async task. Today this is the
//!    fixture-backed mock, which ignores the query; a real climate service
//!    client slots in behind the same trait.
//! 3. The fetched series lands in `AppState.data`, and `RainfallChart`
//!    redraws the SVG from a freshly computed layout. Each submit tags its
//!    fetch with a sequence number so a stale response can never overwrite
//!    a newer one.

use arv_chart::layout;
use arv_chart_ui::components::{
    ChartContainer, ChartHeader, DistrictSelector, ErrorDisplay, LoadingSpinner,
    ParameterSelector, RainfallChart, StateSelector, YearRangeInputs,
};
use arv_chart_ui::state::AppState;
use arv_chart_ui::viewport;
use arv_data::{FetchError, MockRainfallProvider, RainfallProvider};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("annual-rainfall-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        state.submitted.set(true);

        let criteria = match state.form_input().validate() {
            Ok(criteria) => criteria,
            Err(e) => {
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        };
        state.error_msg.set(None);
        state.loading.set(true);

        // Tag this request; a completing fetch only stores its result while
        // it is still the latest one.
        let seq = (state.request_seq)() + 1;
        state.request_seq.set(seq);

        spawn(async move {
            let provider = MockRainfallProvider;
            match provider.fetch(&criteria).await {
                Ok(series) => {
                    if (state.request_seq)() != seq {
                        log::debug!("discarding stale response for submit #{}", seq);
                        return;
                    }
                    log::info!(
                        "fetched {} annual values: {}",
                        series.len(),
                        serde_json::to_string(&series).unwrap_or_default()
                    );
                    state.data.set(series);
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("Error fetching data: {}", e);
                    if (state.request_seq)() != seq {
                        return;
                    }
                    state
                        .error_msg
                        .set(Some(FetchError::USER_MESSAGE.to_string()));
                    state.loading.set(false);
                }
            }
        });
    };

    let submitted = (state.submitted)();
    let error = (state.error_msg)();
    let loading = (state.loading)();
    let data = state.data.read().clone();

    rsx! {
        div {
            style: "max-width: 640px; margin: 0 auto; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Annual Rainfall Visualization".to_string(),
                unit_description: "Millimeters (mm) of rainfall per year".to_string(),
            }

            form {
                onsubmit: on_submit,
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;",
                    StateSelector {}
                    DistrictSelector {}
                    YearRangeInputs {}
                    ParameterSelector {}
                }

                if let Some(err) = error.clone() {
                    ErrorDisplay { message: err }
                }

                button {
                    r#type: "submit",
                    style: "margin-top: 16px; padding: 8px 16px; width: 100%; background: #1976D2; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    "Generate Chart"
                }
            }

            // The chart region only exists after a successful submit; a
            // validation or fetch error hides it until the user resubmits.
            if submitted && error.is_none() {
                if loading {
                    LoadingSpinner {}
                } else {
                    ChartContainer {
                        min_height: 380,
                        RainfallChart {
                            data: data.clone(),
                            inner_width: layout::inner_width(viewport::viewport_width()),
                        }
                    }
                }
            }
        }
    }
}
