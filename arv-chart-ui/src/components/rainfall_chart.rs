//! SVG bar chart of an annual rainfall series.
//!
//! All geometry comes precomputed from `arv-chart`; this component only
//! turns a `BarChartLayout` into SVG elements. Because RSX is declarative,
//! every re-render fully replaces the previous chart, so repeated submits
//! never accumulate bars.

use arv_chart::layout::BarChartLayout;
use arv_data::AnnualRainfall;
use dioxus::prelude::*;

/// Fill color for every bar.
const BAR_FILL: &str = "steelblue";
/// Stroke/text color for axes, ticks, and titles.
const AXIS_COLOR: &str = "#333333";

#[derive(Props, Clone, PartialEq)]
pub struct RainfallChartProps {
    /// Series to draw, in year order.
    pub data: Vec<AnnualRainfall>,
    /// Plot-area width; callers usually pass
    /// `layout::inner_width(viewport::viewport_width())`.
    pub inner_width: f64,
}

/// Bar chart with a year band axis (labels rotated 45 degrees) and a
/// rainfall axis from 0 to a nice upper bound. An empty series draws bare
/// axes with no bars.
#[component]
pub fn RainfallChart(props: RainfallChartProps) -> Element {
    let layout = BarChartLayout::compute(&props.data, props.inner_width);
    log::debug!(
        "rendering {} bars, y axis 0..{}",
        layout.bars.len(),
        layout.y_max
    );

    let svg_w = layout.svg_width();
    let svg_h = layout.svg_height();
    let ml = layout.margin.left;
    let mt = layout.margin.top;
    let w = layout.inner_width;
    let h = layout.inner_height;
    let x_title_x = w / 2.0;
    let x_title_y = h + 40.0;
    let y_title_x = -h / 2.0;
    let y_title_y = -ml + 15.0;

    rsx! {
        svg {
            width: "{svg_w}",
            height: "{svg_h}",
            g {
                transform: "translate({ml},{mt})",

                for bar in layout.bars.iter() {
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: BAR_FILL,
                    }
                }

                // Bottom axis: baseline, one tick per year, labels rotated
                // for readability.
                g {
                    transform: "translate(0,{h})",
                    line {
                        x1: "0", y1: "0", x2: "{w}", y2: "0",
                        stroke: AXIS_COLOR,
                    }
                    for tick in layout.x_ticks.iter() {
                        line {
                            x1: "{tick.offset}", y1: "0",
                            x2: "{tick.offset}", y2: "6",
                            stroke: AXIS_COLOR,
                        }
                        text {
                            transform: "translate({tick.offset},9) rotate(45)",
                            text_anchor: "start",
                            font_size: "11",
                            fill: AXIS_COLOR,
                            "{tick.label}"
                        }
                    }
                }

                // Left axis: baseline and rainfall ticks.
                g {
                    line {
                        x1: "0", y1: "0", x2: "0", y2: "{h}",
                        stroke: AXIS_COLOR,
                    }
                    for tick in layout.y_ticks.iter() {
                        line {
                            x1: "-6", y1: "{tick.offset}",
                            x2: "0", y2: "{tick.offset}",
                            stroke: AXIS_COLOR,
                        }
                        text {
                            x: "-9",
                            y: "{tick.offset}",
                            dy: "0.32em",
                            text_anchor: "end",
                            font_size: "11",
                            fill: AXIS_COLOR,
                            "{tick.label}"
                        }
                    }
                }

                // Static axis titles.
                text {
                    transform: "translate({x_title_x},{x_title_y})",
                    text_anchor: "middle",
                    font_size: "12",
                    fill: AXIS_COLOR,
                    "Year"
                }
                text {
                    transform: "rotate(-90)",
                    x: "{y_title_x}",
                    y: "{y_title_y}",
                    text_anchor: "middle",
                    font_size: "12",
                    fill: AXIS_COLOR,
                    "Rainfall (mm)"
                }
            }
        }
    }
}
