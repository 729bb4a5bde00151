//! Domain model and data acquisition for the ARV (Annual Rainfall
//! Visualization) chart apps.
//!
//! This crate provides:
//! - `models`: serializable chart data types (`AnnualRainfall`)
//! - `catalog`: the selectable states, districts, and climate parameters
//! - `form`: raw form input and its submit-time validation
//! - `provider`: the `RainfallProvider` trait plus the fixture-backed
//!   `MockRainfallProvider`
//!
//! # Usage
//!
//! ```rust
//! use arv_data::FormInput;
//!
//! let input = FormInput {
//!     state: "Bihar".into(),
//!     district: "Purnia".into(),
//!     start_year: "1960".into(),
//!     end_year: "1970".into(),
//!     parameter: "Precipitation".into(),
//! };
//! let criteria = input.validate().unwrap();
//! assert_eq!(criteria.state, "Bihar");
//! ```

pub mod catalog;
pub mod error;
pub mod form;
pub mod models;
pub mod provider;

pub use error::{FetchError, ValidationError};
pub use form::{FetchCriteria, FormInput};
pub use models::AnnualRainfall;
pub use provider::{MockRainfallProvider, RainfallProvider};
