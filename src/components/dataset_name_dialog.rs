#![allow(non_snake_case)] // Allow non-snake_case for component names

use dioxus::prelude::*;

const DIALOG_CSS: Asset = asset!("/assets/styling/dialog.css");

#[derive(Props, PartialEq, Clone)]
pub struct DatasetNameDialogProps {
    pub initial_path: String,
    pub on_close: EventHandler<Option<(String, String)>>,
}

pub fn DatasetNameDialog(props: DatasetNameDialogProps) -> Element {
    let mut input_name = use_signal(String::new);
    let mut input_path = use_signal(|| props.initial_path.clone());

    let ready = move || !input_name.read().is_empty() && !input_path.read().is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: DIALOG_CSS }
        div { class: "dialog-overlay", // Modal overlay
            div { class: "dialog-box", // Dialog container
                h3 { "Register Dataset" }
                p { "Point a name at a directory of order CSV exports." }
                div { class: "dialog-input-group",
                    label { r#for: "dataset-name-input", "Dataset Name:" }
                    input {
                        id: "dataset-name-input",
                        r#type: "text",
                        value: "{input_name}",
                        // Use oninput for immediate updates to the signal
                        oninput: move |evt| input_name.set(evt.value()),
                    }
                }
                div { class: "dialog-input-group",
                    label { r#for: "dataset-path-input", "Data Directory:" }
                    input {
                        id: "dataset-path-input",
                        r#type: "text",
                        value: "{input_path}",
                        oninput: move |evt| input_path.set(evt.value()),
                        // Allow submitting with Enter key
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter && ready() {
                                props.on_close.call(Some((input_name(), input_path())));
                            }
                        }
                    }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "dialog-button cancel",
                        onclick: move |_| props.on_close.call(None),
                        "Cancel"
                    }
                    button {
                        class: "dialog-button ok",
                        // Disable OK button until both fields are filled
                        disabled: !ready(),
                        onclick: move |_| {
                            if ready() {
                                props.on_close.call(Some((input_name(), input_path())));
                            }
                        },
                        "OK"
                    }
                }
            }
        }
    }
}
