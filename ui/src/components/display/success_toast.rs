use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SuccessToastProps {
    pub visible: bool,
    pub message: String,
}

#[component]
pub fn SuccessToast(props: SuccessToastProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    rsx! {
        div {
            id: "contact-toast",
            class: "toast toast-top toast-end",
            div {
                class: "alert alert-success",
                role: "status",
                span { "✓ {props.message}" }
            }
        }
    }
}
