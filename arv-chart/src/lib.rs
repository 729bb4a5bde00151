//! Pure chart geometry for the ARV chart apps.
//!
//! Everything here is target-surface agnostic: scales and bar layouts are
//! computed as plain numbers, and a drawing layer (SVG, canvas, tests)
//! consumes the result. Keeping the geometry free of DOM types means the
//! whole pipeline is testable natively, without a browser.
//!
//! - `scale`: band and linear scales with nice bounds and tick generation
//! - `layout`: margins, sizing rules, and the full bar chart layout

pub mod layout;
pub mod scale;

pub use layout::{Bar, BarChartLayout, Margins, Tick};
pub use scale::{BandScale, LinearScale};
