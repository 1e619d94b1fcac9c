use dioxus::prelude::*;

use crate::sales::{SalesDataset, SalesStats};
use crate::utils::date_utils;

const OVERVIEW_CSS: Asset = asset!("/assets/styling/overview.css");

/// The Home page component that renders the sales dashboard overview
#[component]
pub fn Home() -> Element {
    let dataset = use_context::<SalesDataset>();
    let stats = SalesStats::compute_from_orders(&dataset.orders);

    let clean_rows = stats.order_count - stats.coercion_failures;

    rsx! {
        document::Link { rel: "stylesheet", href: OVERVIEW_CSS }

        div { class: "overview-container",
            div { class: "overview-header",
                h1 { "Sales Overview" }
            }

            // Dataset Status Cards
            div { class: "dataset-status",
                div { class: "status-card",
                    h3 { "Orders Loaded" }
                    p { class: "status-value", "{stats.order_count}" }
                    p { class: "status-subtext", "{clean_rows} with clean numeric fields" }
                }
                div { class: "status-card",
                    h3 { "Total Revenue" }
                    p { class: "status-value", "${stats.total_revenue:.2}" }
                    p { class: "status-subtext", "Sum of price × quantity" }
                }
                div { class: "status-card",
                    h3 { "Products" }
                    p { class: "status-value", "{stats.distinct_products}" }
                    p { class: "status-subtext", "Distinct product names" }
                }
                div { class: "status-card",
                    h3 { "Cities" }
                    p { class: "status-value", "{stats.distinct_cities}" }
                    p { class: "status-subtext", "From purchase addresses" }
                }
            }

            // Recent Orders Section
            div { class: "overview-section",
                h2 { "Recent Orders" }
                if dataset.is_empty() {
                    p { class: "empty-note", "No data to display." }
                } else {
                    table { class: "recent-table",
                        thead {
                            tr {
                                th { "Order ID" }
                                th { "Product" }
                                th { "Order Date" }
                                th { "Sales" }
                            }
                        }
                        tbody {
                            {dataset.orders.iter().rev().take(5).map(|order| {
                                let order_date = order.ordered_at
                                    .as_ref()
                                    .map(date_utils::format_order_date)
                                    .unwrap_or_default();
                                let sales = order.sales
                                    .map(|sales| format!("{:.2}", sales))
                                    .unwrap_or_default();
                                rsx! {
                                    tr {
                                        td { "{order.order_id}" }
                                        td { "{order.product}" }
                                        td { "{order_date}" }
                                        td { "{sales}" }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
