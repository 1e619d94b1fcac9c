use dioxus::prelude::*;

use crate::components::{ChartKind, GroupSelector, MetricChart, SearchInput};
use crate::sales::{compute_grouped, describe_scope, scope_by_product, GroupBy, GroupedMetrics, SalesDataset};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

#[component]
pub fn Dashboard() -> Element {
    let dataset = use_context::<SalesDataset>();

    let mut selected_group = use_signal(|| GroupBy::Hour.name().to_string());
    let mut product_label = use_signal(String::new);

    let scoped = scope_by_product(&dataset.orders, &product_label());
    let scope_text = describe_scope(&product_label(), scoped.len());
    let group = GroupBy::from_name(&selected_group()).unwrap_or(GroupBy::Hour);

    let GroupedMetrics {
        quantity_ordered,
        total_sales,
        average_order_value,
        total_order_value,
    } = compute_grouped(&scoped, group);

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        div { class: "dashboard-container",
            div { class: "dashboard-header",
                div { class: "header-left",
                    h1 { "Sales Dashboard" }
                    div { class: "header-controls",
                        SearchInput {
                            id: "productScope".to_string(),
                            placeholder: "Scope by product...".to_string(),
                            query: product_label(),
                            on_change: move |label| product_label.set(label)
                        }
                        GroupSelector {
                            selected_group: selected_group(),
                            on_change: move |group| selected_group.set(group)
                        }
                        span { class: "scope-label", "{scope_text}" }
                        span { class: "order-count", "{scoped.len()} orders" }
                    }
                }
            }

            div { class: "metrics-grid",
                MetricChart {
                    title: "Quantity Ordered".to_string(),
                    series: quantity_ordered,
                    default_kind: ChartKind::Bar
                }
                MetricChart {
                    title: "Total Sales".to_string(),
                    series: total_sales,
                    default_kind: ChartKind::Bar
                }
                MetricChart {
                    title: "Average Order Value".to_string(),
                    series: average_order_value,
                    default_kind: ChartKind::Line
                }
                MetricChart {
                    title: "Total Order Value".to_string(),
                    series: total_order_value,
                    default_kind: ChartKind::Line
                }
            }
        }
    }
}
