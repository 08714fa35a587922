use dioxus::prelude::*;

use crate::components::{
    display::{CharCounter, LoadingIndicator},
    input::{FieldError, InputType, ValidatedInput},
};
use crate::features::contact::*;
use crate::services::backend::SimulatedBackend;
use crate::services::config::get_global_config;
use crate::services::timer::PlatformTimer;
use crate::{console_debug, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct ContactFormProps {
    pub state: Signal<ContactState>,
    pub dispatch: EventHandler<ContactAction>,
}

#[component]
pub fn ContactForm(props: ContactFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;

    let validator = use_hook(|| FormValidator::contact(get_global_config()));
    // Running lifecycle; read on unmount, never rendered
    let pending = use_hook(PendingSubmission::default);

    {
        let pending = pending.clone();
        use_drop(move || {
            if pending.cancel() {
                console_debug!("[ContactForm] Unmounted, cancelling pending submission");
            }
        });
    }

    let on_submit = {
        let validator = validator.clone();
        let pending = pending.clone();
        move |event: FormEvent| {
            event.prevent_default();

            let outcome = validator.submit(&mut state.write());
            let SubmitOutcome::Accepted(submission) = outcome else {
                return;
            };

            let backend =
                SimulatedBackend::new(PlatformTimer::default(), validator.config().send_delay_ms);
            let (lifecycle, handle) = validator.start_submission(
                submission,
                backend,
                PlatformTimer::default(),
                move |action| dispatch.call(action),
            );

            let generation = pending.track(handle);
            let pending = pending.clone();

            spawn(async move {
                let outcome = lifecycle.await;
                pending.finish(generation);
                console_info!("[ContactForm] Submission finished: {:?}", outcome);
            });
        }
    };

    let current = state();
    let sending = current.is_sending();
    let locked = !current.accepts_submit();
    let count = validator.char_count(current.text(FieldId::Message));

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form card bg-base-100 shadow-xl",
            onsubmit: on_submit,

            div {
                class: "card-body gap-4",

                for spec in validator.fields().iter().copied() {
                    div {
                        key: "{spec.input_id()}",
                        class: "form-control w-full",
                        {render_field(spec, &current, dispatch, sending, count)}
                        FieldError {
                            id: spec.error_id().to_string(),
                            message: spec.error_message.to_string(),
                            visible: current.error_visible(spec.id)
                        }
                    }
                }

                if let Some(error) = &current.submit_error {
                    div {
                        class: "alert alert-error",
                        role: "alert",
                        "✗ {error}"
                    }
                }

                div {
                    class: "card-actions justify-end",
                    button {
                        id: "contact-submit",
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: locked,
                        if sending {
                            LoadingIndicator { message: "Sending...".to_string() }
                        } else {
                            "Send message"
                        }
                    }
                }
            }
        }
    }
}

/// Label and control for one registry entry
fn render_field(
    spec: FieldSpec,
    state: &ContactState,
    dispatch: EventHandler<ContactAction>,
    disabled: bool,
    count: CharCount,
) -> Element {
    let id = spec.id;
    let invalid = state.error_visible(id);
    let class = field_class(spec.kind, invalid);
    let label = spec.label;

    let set_text = move |value: String| {
        dispatch.call(ContactAction::SetFieldValue(id, FieldValue::Text(value)));
    };

    match spec.kind {
        InputKind::Text | InputKind::Email | InputKind::Tel => {
            let input_type = match spec.kind {
                InputKind::Email => InputType::Email,
                InputKind::Tel => InputType::Tel,
                _ => InputType::Text,
            };
            rsx! {
                label {
                    class: "label",
                    r#for: spec.input_id(),
                    span { class: "label-text", "{label}" }
                }
                ValidatedInput {
                    id: spec.input_id().to_string(),
                    value: state.text(id).to_string(),
                    placeholder: spec.placeholder.to_string(),
                    input_type: input_type,
                    input_class: class.to_string(),
                    required: spec.required,
                    invalid: invalid,
                    disabled: disabled,
                    on_change: set_text
                }
            }
        }
        InputKind::Select => rsx! {
            label {
                class: "label",
                r#for: spec.input_id(),
                span { class: "label-text", "{label}" }
            }
            select {
                id: spec.input_id(),
                name: spec.input_id(),
                class: class,
                value: state.text(id).to_string(),
                aria_required: bool_attr(spec.required),
                aria_invalid: bool_attr(invalid),
                disabled: disabled,
                onchange: move |event| set_text(event.value()),
                option { value: "", disabled: true, "{spec.placeholder}" }
                for subject in SUBJECT_OPTIONS {
                    option { key: "{subject}", value: subject, "{subject}" }
                }
            }
        },
        InputKind::TextArea => rsx! {
            label {
                class: "label",
                r#for: spec.input_id(),
                span { class: "label-text", "{label}" }
            }
            textarea {
                id: spec.input_id(),
                name: spec.input_id(),
                class: class,
                placeholder: spec.placeholder,
                maxlength: count.limit as i64,
                value: state.text(id).to_string(),
                aria_required: bool_attr(spec.required),
                aria_invalid: bool_attr(invalid),
                disabled: disabled,
                oninput: move |event| set_text(event.value())
            }
            div {
                class: "label justify-end",
                CharCounter { count: count }
            }
        },
        InputKind::Checkbox => {
            let checked = state.is_checked(id);
            rsx! {
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    r#for: spec.input_id(),
                    input {
                        id: spec.input_id(),
                        name: spec.input_id(),
                        class: class,
                        r#type: "checkbox",
                        checked: checked,
                        aria_required: bool_attr(spec.required),
                        aria_invalid: bool_attr(invalid),
                        disabled: disabled,
                        onchange: move |event: FormEvent| {
                            dispatch.call(ContactAction::SetFieldValue(id, FieldValue::Checked(event.checked())));
                        }
                    }
                    span { class: "label-text", "{label}" }
                }
            }
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
