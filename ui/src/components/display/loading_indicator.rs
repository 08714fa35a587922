use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-indicator",
            span { class: "loading loading-spinner loading-sm" }
            "{props.message}"
        }
    }
}
