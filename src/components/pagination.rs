use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PaginationProps {
    current_page: usize,
    total_pages: usize,
    on_change: EventHandler<usize>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let at_first = props.current_page <= 1;
    let at_last = props.current_page >= props.total_pages;

    rsx! {
        div { class: "pagination-controls",
            button {
                class: "btn btn-secondary",
                disabled: at_first,
                onclick: move |_| {
                    if props.current_page > 1 {
                        props.on_change.call(props.current_page - 1);
                    }
                },
                "Previous"
            }
            span { class: "page-indicator", "Page {props.current_page} of {props.total_pages}" }
            button {
                class: "btn btn-secondary",
                disabled: at_last,
                onclick: move |_| {
                    props.on_change.call(props.current_page + 1);
                },
                "Next"
            }
        }
    }
}
