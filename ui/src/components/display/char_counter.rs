use dioxus::prelude::*;

use crate::features::contact::{char_count_class, CharCount};

#[derive(Props, PartialEq, Clone)]
pub struct CharCounterProps {
    pub count: CharCount,
}

#[component]
pub fn CharCounter(props: CharCounterProps) -> Element {
    let count = props.count;

    rsx! {
        span {
            id: "message-count",
            class: char_count_class(&count),
            "{count.length}/{count.limit}"
        }
    }
}
