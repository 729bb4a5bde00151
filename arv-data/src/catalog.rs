//! Selectable states, districts, and climate parameters.
//!
//! Placeholder catalog: a full deployment would load these from the climate
//! data service, but the selectors only need a static list for now.

/// States offered by the state dropdown.
pub const STATES: &[&str] = &["Bihar"];

/// Climate parameters offered by the parameter dropdown.
pub const PARAMETERS: &[&str] = &["Precipitation", "Minimum temperature"];

/// Districts available for a given state.
pub fn districts_for(state: &str) -> &'static [&'static str] {
    match state {
        "Bihar" => &["Purnia"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_state_has_districts() {
        assert_eq!(districts_for("Bihar"), &["Purnia"]);
    }

    #[test]
    fn unknown_state_has_no_districts() {
        assert!(districts_for("Kerala").is_empty());
        assert!(districts_for("").is_empty());
    }
}
