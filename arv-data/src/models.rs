//! Serializable chart data types.

use serde::{Deserialize, Serialize};

/// One annual observation: total rainfall in millimeters for a year.
///
/// Produced as an ordered sequence, one entry per year, by a
/// [`crate::provider::RainfallProvider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRainfall {
    pub year: i32,
    /// Millimeters.
    pub rainfall: f64,
}
