use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub required: bool,
    pub invalid: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            name: "{props.id}",
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            aria_required: if props.required { "true" } else { "false" },
            aria_invalid: if props.invalid { "true" } else { "false" },
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
