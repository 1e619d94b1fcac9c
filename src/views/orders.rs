use dioxus::prelude::*;

use crate::components::{DataTable, Pagination, SearchInput};
use crate::sales::{order_columns, SalesDataset};
use crate::table::{apply_filter, visible_rows, Pager, TableModel};
use crate::utils::config;

const ORDERS_CSS: Asset = asset!("/assets/styling/orders.css");

#[component]
pub fn Orders() -> Element {
    let dataset = use_context::<SalesDataset>();

    let mut search_query = use_signal(String::new);
    let mut current_page = use_signal(|| 1usize);

    let pager = Pager::new(config::ROWS_PER_PAGE);
    let total_pages = pager.page_count(dataset.orders.len()).max(1);
    let page = pager.clamp_page(current_page(), dataset.orders.len());
    let page_orders = pager.slice(&dataset.orders, page);

    // The table holds one page of rows; the search input re-filters it
    // on every keystroke
    let mut table = TableModel::new(
        order_columns(),
        page_orders.iter().map(|order| order.table_cells()).collect(),
    );
    apply_filter(&mut table, &search_query());

    let shown = visible_rows(&table).count();
    let page_rows = table.rows.len();

    let table_body = if table.rows.is_empty() {
        rsx! {
            p { class: "empty-note", "No data to display." }
        }
    } else {
        rsx! {
            DataTable { table }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ORDERS_CSS }
        div { class: "orders-container",
            div { class: "orders-header",
                div { class: "header-left",
                    h1 { "Orders" }
                    div { class: "header-controls",
                        SearchInput {
                            id: "tableSearch".to_string(),
                            placeholder: "Search orders...".to_string(),
                            query: search_query(),
                            on_change: move |q| search_query.set(q)
                        }
                        span { class: "row-count", "{shown} of {page_rows} rows" }
                    }
                }
            }

            {table_body}

            Pagination {
                current_page: page,
                total_pages: total_pages,
                on_change: move |p| current_page.set(p)
            }
        }
    }
}
