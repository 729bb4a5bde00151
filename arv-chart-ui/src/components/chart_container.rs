//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Optional minimum height in pixels
    #[props(default = 380)]
    pub min_height: u32,
    /// The chart (or anything else) to display inside
    pub children: Element,
}

/// A container div reserving space for a chart, shown only after a
/// successful submit by the caller.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin-top: 16px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            {props.children}
        }
    }
}
