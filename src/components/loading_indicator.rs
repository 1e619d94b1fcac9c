use dioxus::prelude::*;

/// Shared flag tracking whether a dataset (re)load is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingFlag {
    pub busy: bool,
}

/// Mark the loading indicator busy. When no indicator flag is mounted
/// the call is a silent no-op.
pub fn show_loading(flag: Option<Signal<LoadingFlag>>) {
    if let Some(mut flag) = flag {
        flag.set(LoadingFlag { busy: true });
    }
}

/// Clear the loading indicator, with the same missing-flag guard.
pub fn hide_loading(flag: Option<Signal<LoadingFlag>>) {
    if let Some(mut flag) = flag {
        flag.set(LoadingFlag { busy: false });
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    message: String,
}

/// Simple centered loading indicator
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            id: "loading",
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flag_is_a_no_op() {
        // No indicator mounted: neither call may panic or observe anything
        show_loading(None);
        hide_loading(None);
    }
}
