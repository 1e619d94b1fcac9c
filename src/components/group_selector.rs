use dioxus::prelude::*;

use crate::sales::GroupBy;

#[derive(Props, PartialEq, Clone)]
pub struct GroupSelectorProps {
    selected_group: String,
    on_change: EventHandler<String>,
}

#[component]
pub fn GroupSelector(props: GroupSelectorProps) -> Element {
    rsx! {
        select {
            class: "group-select",
            value: "{props.selected_group}",
            onchange: move |evt| {
                props.on_change.call(evt.value());
            },
            {GroupBy::ALL.iter().map(|group| {
                rsx! {
                    option {
                        value: "{group.name()}",
                        "{group.name()}"
                    }
                }
            })}
        }
    }
}
