use dioxus::prelude::*;

use super::ChartKindSelector;
use crate::sales::MetricSeries;

/// Chart renderings available without a JS charting bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Bar, ChartKind::Line];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }

    pub fn from_name(name: &str) -> Option<ChartKind> {
        ChartKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct MetricChartProps {
    title: String,
    series: MetricSeries,
    default_kind: ChartKind,
}

#[component]
pub fn MetricChart(props: MetricChartProps) -> Element {
    let mut kind = use_signal(|| props.default_kind);

    let max = props.series.max_y();
    let points = polyline_points(&props.series);

    rsx! {
        div { class: "metric-card",
            div { class: "metric-header",
                h3 { class: "metric-title", "{props.title}" }
                ChartKindSelector {
                    selected_kind: kind().name().to_string(),
                    on_change: move |name: String| {
                        if let Some(selected) = ChartKind::from_name(&name) {
                            kind.set(selected);
                        }
                    }
                }
            }

            if props.series.is_empty() {
                p { class: "chart-empty", "No data for this grouping." }
            } else if kind() == ChartKind::Bar {
                div { class: "bar-chart",
                    {props.series.x.iter().zip(props.series.y.iter()).map(|(label, value)| {
                        let percent = if max > 0.0 { value / max * 100.0 } else { 0.0 };
                        rsx! {
                            div {
                                key: "{label}",
                                class: "bar-row",
                                span { class: "bar-label", "{label}" }
                                div { class: "progress-bar",
                                    div {
                                        class: "progress-fill",
                                        style: "width: {percent}%"
                                    }
                                }
                                span { class: "bar-value", "{value:.2}" }
                            }
                        }
                    })}
                }
            } else {
                svg {
                    class: "line-chart",
                    view_box: "0 0 100 40",
                    preserve_aspect_ratio: "none",
                    polyline {
                        class: "line-path",
                        fill: "none",
                        points: "{points}"
                    }
                }
            }
        }
    }
}

/// Map the series onto a 100x40 view box, last group at the right edge
fn polyline_points(series: &MetricSeries) -> String {
    let max = series.max_y();
    let step = if series.len() > 1 {
        100.0 / (series.len() - 1) as f64
    } else {
        0.0
    };

    series
        .y
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 * step;
            let y = if max > 0.0 { 40.0 - (value / max * 36.0) } else { 40.0 };
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
