use dioxus::prelude::*;

use crate::table::TableModel;

#[derive(Props, PartialEq, Clone)]
pub struct DataTableProps {
    table: TableModel,
}

/// Renders a table model. Filtered-out rows stay in the tree with
/// `display: none`, so a new query only flips visibility back on.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    rsx! {
        div { class: "table-wrapper",
            table { class: "data-table",
                thead {
                    tr {
                        {props.table.header.iter().map(|title| {
                            rsx! {
                                th { "{title}" }
                            }
                        })}
                    }
                }
                tbody {
                    {props.table.rows.iter().map(|row| {
                        let display = if row.visible { "" } else { "display: none" };
                        rsx! {
                            tr {
                                style: "{display}",
                                {row.cells.iter().map(|cell| {
                                    rsx! {
                                        td { "{cell}" }
                                    }
                                })}
                            }
                        }
                    })}
                }
            }
        }
    }
}
