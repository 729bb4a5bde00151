//! Bar chart layout: margins, sizing, and per-bar geometry.

use arv_data::AnnualRainfall;

use crate::scale::{BandScale, LinearScale};

/// Plot area height, exclusive of margins.
pub const INNER_HEIGHT: f64 = 300.0;
/// Plot area width cap, exclusive of margins.
pub const MAX_INNER_WIDTH: f64 = 500.0;
/// Band padding fraction for the year scale.
pub const BAND_PADDING: f64 = 0.1;
/// Target number of ticks on the rainfall axis.
pub const Y_TICK_COUNT: usize = 10;

/// Fixed chart margins. Bottom and left are generous to fit the rotated
/// year labels and the axis titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGIN: Margins = Margins {
    top: 20.0,
    right: 30.0,
    bottom: 60.0,
    left: 60.0,
};

/// Plot area width for a given viewport width: capped at
/// [`MAX_INNER_WIDTH`], otherwise viewport minus 40px of page padding.
pub fn inner_width(viewport_width: f64) -> f64 {
    if viewport_width > MAX_INNER_WIDTH {
        MAX_INNER_WIDTH
    } else {
        (viewport_width - 40.0).max(0.0)
    }
}

/// Geometry for one bar, in plot-area coordinates (origin at top-left of
/// the plot area, y growing downward).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub year: i32,
    /// Millimeters.
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One axis tick: an offset along the axis and its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Complete geometry for a rainfall bar chart. Pure data: the drawing layer
/// turns this into SVG without doing any math of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub inner_width: f64,
    pub inner_height: f64,
    pub margin: Margins,
    /// One bar per data point, in sequence order.
    pub bars: Vec<Bar>,
    /// Year ticks, offsets at band centers.
    pub x_ticks: Vec<Tick>,
    /// Rainfall ticks, offsets in plot-area y.
    pub y_ticks: Vec<Tick>,
    /// Upper bound of the rainfall axis after nice-rounding.
    pub y_max: f64,
}

impl BarChartLayout {
    /// Compute the full layout for a series. An empty series yields empty
    /// bars and year ticks but still produces a rainfall axis, so the chart
    /// renders as bare axes rather than erroring.
    pub fn compute(points: &[AnnualRainfall], inner_width: f64) -> Self {
        let years: Vec<i32> = points.iter().map(|p| p.year).collect();
        let x = BandScale::new(years, inner_width, BAND_PADDING);

        let max_rainfall = points.iter().map(|p| p.rainfall).fold(0.0, f64::max);
        // Degenerate maximum (empty series or all zeros) still needs a
        // drawable axis.
        let domain_max = if max_rainfall > 0.0 { max_rainfall } else { 1.0 };
        let y = LinearScale::new((0.0, domain_max), (INNER_HEIGHT, 0.0)).nice(Y_TICK_COUNT);

        let bars = points
            .iter()
            .map(|p| {
                let x0 = x.position(p.year).unwrap_or(0.0);
                let y0 = y.scale(p.rainfall);
                Bar {
                    year: p.year,
                    value: p.rainfall,
                    x: x0,
                    y: y0,
                    width: x.bandwidth(),
                    height: INNER_HEIGHT - y0,
                }
            })
            .collect();

        let x_ticks = x
            .domain()
            .iter()
            .map(|&year| Tick {
                offset: x.center(year).unwrap_or(0.0),
                label: year.to_string(),
            })
            .collect();

        let y_ticks = y
            .ticks(Y_TICK_COUNT)
            .into_iter()
            .map(|value| Tick {
                offset: y.scale(value),
                label: format_tick(value),
            })
            .collect();

        Self {
            inner_width,
            inner_height: INNER_HEIGHT,
            margin: MARGIN,
            bars,
            x_ticks,
            y_ticks,
            y_max: y.domain().1,
        }
    }

    /// Total SVG width including margins.
    pub fn svg_width(&self) -> f64 {
        self.inner_width + self.margin.left + self.margin.right
    }

    /// Total SVG height including margins.
    pub fn svg_height(&self) -> f64 {
        self.inner_height + self.margin.top + self.margin.bottom
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_series() -> Vec<AnnualRainfall> {
        vec![
            AnnualRainfall { year: 1965, rainfall: 4555.32 },
            AnnualRainfall { year: 1966, rainfall: 7489.07 },
            AnnualRainfall { year: 1967, rainfall: 5527.14 },
        ]
    }

    #[test]
    fn inner_width_caps_wide_viewports() {
        assert_eq!(inner_width(1280.0), 500.0);
        assert_eq!(inner_width(501.0), 500.0);
        assert_eq!(inner_width(400.0), 360.0);
        assert_eq!(inner_width(10.0), 0.0);
    }

    #[test]
    fn one_bar_per_point_in_sequence_order() {
        let layout = BarChartLayout::compute(&mock_series(), 500.0);
        assert_eq!(layout.bars.len(), 3);
        let years: Vec<i32> = layout.bars.iter().map(|b| b.year).collect();
        assert_eq!(years, vec![1965, 1966, 1967]);
        // Bars occupy distinct, increasing slots.
        assert!(layout.bars[0].x < layout.bars[1].x);
        assert!(layout.bars[1].x < layout.bars[2].x);
    }

    #[test]
    fn bar_height_is_proportional_to_rainfall() {
        let layout = BarChartLayout::compute(&mock_series(), 500.0);
        let wettest = &layout.bars[1];
        assert!(wettest.height > layout.bars[0].height);
        assert!(wettest.height > layout.bars[2].height);
        // height / inner_height == value / y_max
        let expected = wettest.value / layout.y_max * INNER_HEIGHT;
        assert!((wettest.height - expected).abs() < 1e-9);
        // Bars sit on the bottom axis.
        assert!((wettest.y + wettest.height - INNER_HEIGHT).abs() < 1e-9);
    }

    #[test]
    fn rainfall_axis_upper_bound_is_nice_and_covers_the_data() {
        let layout = BarChartLayout::compute(&mock_series(), 500.0);
        assert!(layout.y_max >= 7489.07);
        assert_eq!(layout.y_max, 8000.0);
        assert_eq!(layout.y_ticks.first().map(|t| t.label.as_str()), Some("0"));
        assert_eq!(layout.y_ticks.last().map(|t| t.label.as_str()), Some("8000"));
    }

    #[test]
    fn year_ticks_sit_at_band_centers() {
        let layout = BarChartLayout::compute(&mock_series(), 500.0);
        assert_eq!(layout.x_ticks.len(), 3);
        assert_eq!(layout.x_ticks[0].label, "1965");
        let bar = &layout.bars[0];
        let center = bar.x + bar.width / 2.0;
        assert!((layout.x_ticks[0].offset - center).abs() < 1e-9);
    }

    #[test]
    fn recompute_is_idempotent() {
        let first = BarChartLayout::compute(&mock_series(), 500.0);
        let second = BarChartLayout::compute(&mock_series(), 500.0);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_series_renders_bare_axes() {
        let layout = BarChartLayout::compute(&[], 500.0);
        assert!(layout.bars.is_empty());
        assert!(layout.x_ticks.is_empty());
        assert!(!layout.y_ticks.is_empty());
        assert!(layout.svg_width().is_finite());
    }

    #[test]
    fn svg_size_includes_margins() {
        let layout = BarChartLayout::compute(&mock_series(), 500.0);
        assert_eq!(layout.svg_width(), 500.0 + 60.0 + 30.0);
        assert_eq!(layout.svg_height(), 300.0 + 20.0 + 60.0);
    }
}
