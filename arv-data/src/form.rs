//! Raw form input and submit-time validation.

use serde::Serialize;

use crate::error::ValidationError;

/// The five form fields as entered, all optional until submit.
///
/// Year fields stay strings here: the form performs no numeric or range
/// checks (end < start and non-numeric years pass through unrejected).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub state: String,
    pub district: String,
    pub start_year: String,
    pub end_year: String,
    pub parameter: String,
}

/// A validated query, ready to hand to a [`crate::provider::RainfallProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchCriteria {
    pub state: String,
    pub district: String,
    pub start_year: String,
    pub end_year: String,
    pub parameter: String,
}

impl FormInput {
    /// Check that every field is non-empty and pass the values through.
    ///
    /// The only rule is presence; values are not interpreted.
    pub fn validate(&self) -> Result<FetchCriteria, ValidationError> {
        if self.state.is_empty()
            || self.district.is_empty()
            || self.start_year.is_empty()
            || self.end_year.is_empty()
            || self.parameter.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        Ok(FetchCriteria {
            state: self.state.clone(),
            district: self.district.clone(),
            start_year: self.start_year.clone(),
            end_year: self.end_year.clone(),
            parameter: self.parameter.clone(),
        })
    }
}
