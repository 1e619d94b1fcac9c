use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    id: String,
    placeholder: String,
    query: String,
    on_change: EventHandler<String>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-container",
            input {
                id: "{props.id}",
                class: "search-input",
                r#type: "text",
                placeholder: "{props.placeholder}",
                value: "{props.query}",
                oninput: move |evt| props.on_change.call(evt.value().clone())
            }
        }
    }
}
