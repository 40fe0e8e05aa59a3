use dioxus::prelude::*;

use super::{layout, render, ChartConfig, ChartDatum};

/// Responsive bar chart. The scene is rebuilt on every render; inputs are
/// small (a few dozen bars at most).
#[component]
pub fn BarChart(
    data: Vec<ChartDatum>,
    #[props(default)] config: ChartConfig,
    #[props(default)] empty_label: Option<String>,
) -> Element {
    if data.is_empty() {
        if let Some(label) = empty_label {
            return rsx! {
                p { class: "barchart__empty", "{label}" }
            };
        }
    }

    let markup = render(&layout(&data, &config), &config).to_svg();

    rsx! {
        div { class: "barchart", dangerous_inner_html: "{markup}" }
    }
}
