use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub id: String,
    pub message: String,
    pub visible: bool,
}

/// Static error text under a field; kept in the markup and hidden when valid
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    rsx! {
        p {
            id: "{props.id}",
            class: if props.visible { "field-error text-error text-sm mt-1" } else { "field-error hidden" },
            role: "alert",
            "{props.message}"
        }
    }
}
