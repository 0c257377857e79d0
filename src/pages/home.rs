use super::report_action;
use crate::api;
use crate::components::{use_notifier, Button, Card};
use crate::i18n::{get_dict, Language};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());
    let notifier = use_notifier();

    let mut custom_message = use_signal(String::new);
    let mut is_sending = use_signal(|| false);

    // `None` asks the device for its built-in test message.
    let send = move |message: Option<String>| {
        spawn(async move {
            is_sending.set(true);
            let result = api::send_lora(message.as_deref()).await;
            is_sending.set(false);
            report_action(notifier, dict, "send LoRa message", result);
        });
    };

    rsx! {
        div {
            class: "dashboard-container",
            Card {
                title: dict.home_title.to_string(),
                subtitle: dict.home_subtitle.to_string(),
                actions: rsx! {
                    Button {
                        variant: "tonal".to_string(),
                        icon: "science".to_string(),
                        disabled: *is_sending.read(),
                        onclick: move |_| send(None),
                        "{dict.send_test_btn}"
                    }
                    Button {
                        variant: "filled".to_string(),
                        icon: "send".to_string(),
                        disabled: *is_sending.read(),
                        onclick: move |_| send(Some(custom_message.read().clone())),
                        "{dict.send_custom_btn}"
                    }
                },
                div {
                    class: "md-field",
                    label { r#for: "customMessage", "{dict.custom_message_label}" }
                    input {
                        r#type: "text",
                        id: "customMessage",
                        class: "md-input",
                        value: "{custom_message}",
                        placeholder: "{dict.custom_message_placeholder}",
                        oninput: move |evt| custom_message.set(evt.value()),
                        onkeypress: move |evt| {
                            if evt.key() == Key::Enter {
                                send(Some(custom_message.read().clone()));
                            }
                        },
                    }
                }
            }
        }
    }
}
