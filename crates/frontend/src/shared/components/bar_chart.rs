//! Inline SVG bar chart.

use leptos::prelude::*;

pub const CHART_WIDTH: f64 = 480.0;
pub const CHART_HEIGHT: f64 = 240.0;
/// Space below the plot reserved for category labels
const LABEL_BAND: f64 = 28.0;
/// Share of each category slot occupied by the bar
const BAR_FILL: f64 = 0.6;

/// Geometry of one bar, in SVG user units
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out one bar per `(label, value)` across `width`, scaled so the
/// largest value fills the plot height. A zero maximum gives flat bars.
pub fn layout_bars(data: &[(&str, u64)], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }
    let plot_height = (height - LABEL_BAND).max(0.0);
    let slot = width / data.len() as f64;
    let bar_width = slot * BAR_FILL;
    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(0);

    data.iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let bar_height = if max == 0 {
                0.0
            } else {
                plot_height * (*value as f64) / (max as f64)
            };
            Bar {
                label: label.to_string(),
                value: *value,
                x: slot * i as f64 + (slot - bar_width) / 2.0,
                y: plot_height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[component]
pub fn BarChart(#[prop(into)] bars: Signal<Vec<Bar>>) -> impl IntoView {
    let plot_height = CHART_HEIGHT - LABEL_BAND;
    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            preserveAspectRatio="xMidYMid meet"
        >
            <line x1="0" y1=plot_height x2=CHART_WIDTH y2=plot_height class="bar-chart__axis"/>
            {move || {
                bars.get()
                    .into_iter()
                    .map(|bar| {
                        let center = bar.x + bar.width / 2.0;
                        view! {
                            <g class="bar-chart__bar">
                                <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="3"/>
                                <text x=center y=(bar.y - 6.0).max(12.0) text-anchor="middle" class="bar-chart__value">
                                    {bar.value}
                                </text>
                                <text x=center y=CHART_HEIGHT - 8.0 text-anchor="middle" class="bar-chart__label">
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}
