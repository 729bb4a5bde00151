//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use arv_data::{AnnualRainfall, FormInput};
use dioxus::prelude::*;

/// Shared application state for the ARV chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selected state name ("" until chosen)
    pub state_name: Signal<String>,
    /// Selected district ("" until chosen)
    pub district: Signal<String>,
    /// Start year field, kept as raw text
    pub start_year: Signal<String>,
    /// End year field, kept as raw text
    pub end_year: Signal<String>,
    /// Selected climate parameter ("" until chosen)
    pub parameter: Signal<String>,
    /// Series produced by the most recent successful submit
    pub data: Signal<Vec<AnnualRainfall>>,
    /// Inline error message, if any
    pub error_msg: Signal<Option<String>>,
    /// Whether the form has been submitted at least once; gates the chart
    pub submitted: Signal<bool>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Monotonic id of the latest submit; stale fetches check against it
    pub request_seq: Signal<u64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            state_name: Signal::new(String::new()),
            district: Signal::new(String::new()),
            start_year: Signal::new(String::new()),
            end_year: Signal::new(String::new()),
            parameter: Signal::new(String::new()),
            data: Signal::new(Vec::new()),
            error_msg: Signal::new(None),
            submitted: Signal::new(false),
            loading: Signal::new(false),
            request_seq: Signal::new(0),
        }
    }

    /// Snapshot the five form fields as a `FormInput` for validation.
    pub fn form_input(&self) -> FormInput {
        FormInput {
            state: (self.state_name)(),
            district: (self.district)(),
            start_year: (self.start_year)(),
            end_year: (self.end_year)(),
            parameter: (self.parameter)(),
        }
    }
}
