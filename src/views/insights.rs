use dioxus::prelude::*;

use crate::sales::{check_order, ProblemOrder, SalesDataset, SalesStats};

const INSIGHTS_CSS: Asset = asset!("/assets/styling/insights.css");

#[component]
pub fn Insights() -> Element {
    let dataset = use_context::<SalesDataset>();
    let mut visible_problems = use_signal(|| 6); // Number of problem cards to show initially

    let stats = SalesStats::compute_from_orders(&dataset.orders);
    let problems: Vec<ProblemOrder> = dataset.orders.iter().filter_map(check_order).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: INSIGHTS_CSS }
        div { class: "insights-container",
            h1 { "Data Quality" }

            // Summary Stats
            div { class: "insights-section insights-stats",
                h2 { "Dataset Summary" }
                div { class: "stats-grid",
                    div { class: "stat-card",
                        span { class: "stat-label", "Unparseable Numeric Fields" }
                        span { class: "stat-value", "{stats.coercion_failures}" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-label", "Unparseable Timestamps" }
                        span { class: "stat-value", "{stats.missing_timestamps}" }
                    }
                    div { class: "stat-card",
                        span { class: "stat-label", "Addresses Without A City" }
                        span { class: "stat-value", "{stats.missing_cities}" }
                    }
                }
            }

            // Problem Orders Section
            div { class: "insights-section",
                h2 { "Problem Orders" }
                div { class: "problem-orders-grid",
                    {problems.iter()
                        .take(visible_problems())
                        .map(|problem| rsx! {
                            div { class: format_args!("problem-order-card severity-{}", problem.severity),
                                div { class: "problem-order-header",
                                    h3 { "{problem.product}" }
                                    span { class: "order-id", "#{problem.order_id}" }
                                }
                                div { class: "problem-order-content",
                                    div { class: "issue-type", "{problem.issue_type}" }
                                    p { class: "issue-details", "{problem.details}" }
                                }
                            }
                        })
                    }
                }

                // Show more button if there are more problems to show
                {
                    let total = problems.len();
                    let current = visible_problems();
                    if total > current {
                        let remaining = total - current;
                        rsx! {
                            button {
                                class: "show-more-button",
                                onclick: move |_| {
                                    visible_problems += 6;
                                },
                                "Show More ({remaining} remaining)"
                            }
                        }
                    } else {
                        rsx!("")
                    }
                }
            }
        }
    }
}
