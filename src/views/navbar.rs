use crate::components::{show_loading, DatasetNameDialog, LoadingFlag, LoadingIndicator};
use crate::contexts::{DataPathsContext, DatasetReloadContext, DatasetStorage};
use crate::Route;
use dioxus::{logger::tracing, prelude::*};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let storage = use_context::<DatasetStorage>();
    let paths = use_context::<DataPathsContext>();
    let reload = use_context::<DatasetReloadContext>();
    let loading = try_consume_context::<Signal<LoadingFlag>>();

    let mut dataset_names = paths.dataset_names;
    let mut current_dataset = reload.current_dataset;
    let mut show_dialog = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            div {
                id: "sidebar",
                class: "sales-sidebar",
                div {
                    class: "sidebar-logo",
                    span { "Salescope" }
                }
                div { class: "dataset-picker",
                    select {
                        class: "dataset-select",
                        value: "{current_dataset}",
                        onchange: move |evt| {
                            show_loading(loading);
                            current_dataset.set(evt.value());
                        },
                        {dataset_names().iter().map(|name| {
                            rsx! {
                                option {
                                    value: "{name}",
                                    "{name}"
                                }
                            }
                        })}
                    }
                    button {
                        class: "btn-add-dataset",
                        onclick: move |_| show_dialog.set(true),
                        "Add Dataset"
                    }
                    {loading.and_then(|flag| flag().busy.then(|| rsx! {
                        LoadingIndicator { message: "Reloading...".to_string() }
                    }))}
                }
                nav {
                    class: "sidebar-links",
                    div { class: "nav-group",
                        span { class: "nav-group-title", "ANALYTICS" }
                        Link {
                            to: Route::Home {},
                            class: "nav-overview",
                            "Overview"
                        }
                        Link {
                            to: Route::Dashboard {},
                            class: "nav-dashboard",
                            "Dashboard"
                        }
                    }
                    div { class: "nav-group",
                        span { class: "nav-group-title", "DATA" }
                        Link {
                            to: Route::Orders {},
                            class: "nav-orders",
                            "Orders"
                        }
                        Link {
                            to: Route::Insights {},
                            class: "nav-insights",
                            "Data Quality"
                        }
                    }
                }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }

        {show_dialog().then(|| rsx! {
            DatasetNameDialog {
                initial_path: String::new(),
                on_close: move |choice: Option<(String, String)>| {
                    show_dialog.set(false);
                    if let Some((name, dir_path)) = choice {
                        if let Err(e) = storage.store_dir(name.clone(), dir_path) {
                            tracing::error!("Failed to register dataset: {}", e);
                            return;
                        }
                        if !dataset_names().contains(&name) {
                            dataset_names.write().push(name.clone());
                        }
                        show_loading(loading);
                        current_dataset.set(name);
                    }
                }
            }
        })}
    }
}
