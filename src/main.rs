use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::{Dashboard, Home, Insights, Navbar, Orders};

mod components;
mod contexts;
mod sales;
mod table;
mod utils;
mod views;

use components::{hide_loading, LoadingFlag, LoadingIndicator};
use contexts::{load_dataset_from_path, DataPathsContext, DatasetReloadContext, DatasetStorage};
use utils::config;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/orders")]
        Orders {},
        #[route("/insights")]
        Insights {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Salescope")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Signal to track the currently selected dataset
    let current_dataset = use_signal(|| config::DEFAULT_DATASET.to_string());

    // Create dataset storage - ALWAYS at top level
    let dataset_storage = use_context_provider(|| DatasetStorage::default());

    // ALWAYS provide the reload context - BEFORE any conditional logic
    use_context_provider(|| DatasetReloadContext {
        current_dataset,
    });

    // ALWAYS provide the dataset names context - BEFORE any conditional logic
    let dataset_names = use_signal(|| vec![config::DEFAULT_DATASET.to_string()]);
    use_context_provider(|| DataPathsContext {
        dataset_names,
    });

    // Loading flag consumed by the navbar when a reload is triggered
    let loading = use_signal(LoadingFlag::default);
    use_context_provider(|| loading);

    // Resource for managing the sales dataset based on the current selection
    let dataset_resource = use_resource({
        let storage = dataset_storage.clone();
        move || {
            let name = current_dataset();
            let storage = storage.clone();
            async move {
                load_dataset_from_path(&name, &storage).await
            }
        }
    });

    // Clear the indicator once a reload settles either way
    use_effect(move || {
        if dataset_resource.read().is_some() {
            hide_loading(Some(loading));
        }
    });

    let dataset_ref = dataset_resource.read();

    match &*dataset_ref {
        None => {
            // Still loading
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                LoadingIndicator { message: "Loading sales data...".to_string() }
            }
        }
        Some(Err(err)) => {
            // Failed to load the dataset - show error and empty UI
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    // Error banner at the top
                    div {
                        class: "error-banner",
                        style: "background-color: #fef2f2; border: 1px solid #fecaca; color: #dc2626; padding: 1rem; margin: 1rem; border-radius: 0.5rem;",
                        "⚠️ Failed to load sales data: {err}"
                    }

                    div {
                        style: "flex: 1; display: flex; align-items: center; justify-content: center; flex-direction: column; padding: 2rem;",
                        h2 {
                            style: "color: #6b7280; font-size: 1.5rem; margin-bottom: 1rem;",
                            "No Sales Data"
                        }
                        p {
                            style: "color: #9ca3af; text-align: center; max-width: 500px;",
                            "Place order CSV exports in a \"csv\" directory next to the executable and restart, or fix the selected data directory to continue."
                        }
                    }
                }
            }
        }
        Some(Ok(dataset)) => {
            // Successful - provide the dataset context and show normal UI
            use_context_provider(|| dataset.clone());

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                Router::<Route> {}
            }
        }
    }
}
