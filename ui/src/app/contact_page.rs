use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::SuccessToast;
use crate::components::forms::ContactForm;
use crate::features::contact::{ContactAction, ContactState};

const CONTACT_PAGE_CSS: Asset = asset!("/assets/styling/contact_form.css");

#[component]
pub fn ContactPage() -> Element {
    let mut state = use_signal(ContactState::default);

    use_effect(move || {
        console_info!("[Contact Page] Form ready");
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: ContactAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_PAGE_CSS }

        main {
            class: "contact-page-container",

            div {
                class: "title-container",
                h1 {
                    class: "contact-title",
                    "Get in touch"
                }
                p {
                    class: "contact-subtitle",
                    "Send us a message and we will get back to you within two business days."
                }
            }

            ContactForm {
                state: state,
                dispatch: dispatch
            }

            SuccessToast {
                visible: state().toast_visible(),
                message: "Thanks! Your message has been sent.".to_string()
            }
        }
    }
}
