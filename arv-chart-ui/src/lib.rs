//! Shared Dioxus components and SVG chart drawing for ARV chart apps.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, year inputs, chart
//!   drawing, containers)
//! - `viewport`: browser viewport helpers via `web-sys`

pub mod components;
pub mod state;
pub mod viewport;
