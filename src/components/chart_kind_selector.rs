use dioxus::prelude::*;

use super::ChartKind;

#[derive(Props, PartialEq, Clone)]
pub struct ChartKindSelectorProps {
    selected_kind: String,
    on_change: EventHandler<String>,
}

#[component]
pub fn ChartKindSelector(props: ChartKindSelectorProps) -> Element {
    rsx! {
        select {
            class: "chart-kind-select",
            value: "{props.selected_kind}",
            onchange: move |evt| {
                props.on_change.call(evt.value());
            },
            {ChartKind::ALL.iter().map(|kind| {
                rsx! {
                    option {
                        value: "{kind.name()}",
                        "{kind.name()}"
                    }
                }
            })}
        }
    }
}
