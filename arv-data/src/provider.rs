//! Rainfall data providers.
//!
//! The app talks to one interface, [`RainfallProvider`], so the mock backend
//! can be swapped for a real climate data service without touching the chart
//! code. Only [`MockRainfallProvider`] exists today.

use crate::error::FetchError;
use crate::form::FetchCriteria;
use crate::models::AnnualRainfall;

/// Mock annual rainfall series (year, millimeters), embedded at compile
/// time. `build.rs` copies `fixtures/rainfall.csv` into `OUT_DIR`, writing a
/// literal fallback when the fixture is absent.
const RAINFALL_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/rainfall.csv"));

/// A source of annual rainfall series.
///
/// `fetch` is async so a network-backed implementation can slot in later;
/// the UI already treats every acquisition as an in-flight task.
#[allow(async_fn_in_trait)] // single-threaded WASM, no Send bound wanted
pub trait RainfallProvider {
    /// Look up the annual series matching `criteria`, in year order.
    async fn fetch(&self, criteria: &FetchCriteria) -> Result<Vec<AnnualRainfall>, FetchError>;
}

/// Stand-in provider that returns the embedded fixture series.
///
/// The criteria are accepted but not consulted: every query gets the same
/// three years back, whatever state, district, or range was requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRainfallProvider;

impl RainfallProvider for MockRainfallProvider {
    async fn fetch(&self, _criteria: &FetchCriteria) -> Result<Vec<AnnualRainfall>, FetchError> {
        parse_rainfall_csv(RAINFALL_CSV).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

/// Parse a headerless `year,millimeters` CSV into an ordered series.
pub fn parse_rainfall_csv(csv_data: &str) -> anyhow::Result<Vec<AnnualRainfall>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut points = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let year = record.get(0).unwrap_or("").trim();
        let value = record.get(1).unwrap_or("").trim();
        if year.is_empty() {
            continue;
        }
        points.push(AnnualRainfall {
            year: year.parse()?,
            rainfall: value.parse()?,
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(state: &str, start: &str, end: &str) -> FetchCriteria {
        FetchCriteria {
            state: state.to_string(),
            district: "Purnia".to_string(),
            start_year: start.to_string(),
            end_year: end.to_string(),
            parameter: "Precipitation".to_string(),
        }
    }

    #[tokio::test]
    async fn mock_returns_the_fixture_series() {
        let provider = MockRainfallProvider;
        let series = provider
            .fetch(&criteria("Bihar", "1960", "1970"))
            .await
            .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series[0], AnnualRainfall { year: 1965, rainfall: 4555.32 });
        assert_eq!(series[1], AnnualRainfall { year: 1966, rainfall: 7489.07 });
        assert_eq!(series[2], AnnualRainfall { year: 1967, rainfall: 5527.14 });
    }

    #[tokio::test]
    async fn mock_ignores_the_criteria() {
        let provider = MockRainfallProvider;
        let a = provider
            .fetch(&criteria("Bihar", "1960", "1970"))
            .await
            .unwrap();
        let b = provider
            .fetch(&criteria("Bihar", "2000", "2020"))
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn full_query_for_bihar_purnia_succeeds() {
        let input = crate::FormInput {
            state: "Bihar".to_string(),
            district: "Purnia".to_string(),
            start_year: "1960".to_string(),
            end_year: "1970".to_string(),
            parameter: "Precipitation".to_string(),
        };
        let criteria = input.validate().unwrap();
        let series = MockRainfallProvider.fetch(&criteria).await.unwrap();
        // The mock pays no attention to the requested range.
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1965, 1966, 1967]);
    }

    #[test]
    fn parse_well_formed_rows() {
        let series = parse_rainfall_csv("1965,4555.32\n1966,7489.07\n").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].year, 1965);
        assert_eq!(series[1].rainfall, 7489.07);
    }

    #[test]
    fn parse_empty_input_gives_empty_series() {
        let series = parse_rainfall_csv("").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn parse_rejects_non_numeric_values() {
        assert!(parse_rainfall_csv("1965,wet\n").is_err());
    }
}
