//! Reusable Dioxus RSX components for ARV chart apps.

mod chart_container;
mod chart_header;
mod district_selector;
mod error_display;
mod loading_spinner;
mod parameter_selector;
mod rainfall_chart;
mod state_selector;
mod year_range_inputs;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use district_selector::DistrictSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use parameter_selector::ParameterSelector;
pub use rainfall_chart::RainfallChart;
pub use state_selector::StateSelector;
pub use year_range_inputs::YearRangeInputs;
