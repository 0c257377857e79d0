use super::report_action;
use crate::api;
use crate::components::{use_notifier, Button, Card};
use crate::i18n::{get_dict, Language};
use crate::models::{LogFlags, Settings as DeviceSettings, SettingsError, SettingsUpdate};
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, warn};

#[component]
pub fn Settings() -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());
    let notifier = use_notifier();

    let settings = use_resource(move || async move {
        let result = api::fetch_settings().await;
        if let Err(err) = &result {
            error!("fetching settings failed: {err}");
            notifier.show_text(get_dict(*lang.peek()).settings_fetch_error);
        }
        result
    });

    match &*settings.read_unchecked() {
        None => rsx! {
            div { class: "md-muted", "{dict.loading}" }
        },
        Some(Err(_)) => rsx! {
            div { class: "md-inline-error", "{dict.settings_fetch_error}" }
        },
        Some(Ok(current)) => rsx! {
            SettingsForm { initial: current.clone() }
        },
    }
}

/// Editable copy of the device settings, submitted wholesale on save.
#[component]
fn SettingsForm(initial: DeviceSettings) -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());
    let notifier = use_notifier();

    let mut device_number = use_signal(|| initial.device_number.to_string());
    let mut site_id = use_signal(|| initial.site_id.clone());
    let mut flags = use_signal(|| LogFlags {
        system: initial.enable_system_logs,
        http: initial.enable_http_logs,
        lora: initial.enable_lora_logs,
    });
    let mut is_saving = use_signal(|| false);

    let save = move |_| {
        let update = match SettingsUpdate::parse(&device_number.read(), &site_id.read(), *flags.read()) {
            Ok(update) => update,
            Err(err) => {
                warn!("settings edit rejected: {err}");
                notifier.show_text(match err {
                    SettingsError::InvalidDeviceNumber => dict.invalid_device_number,
                    SettingsError::InvalidSiteId => dict.invalid_site_id,
                });
                return;
            }
        };

        spawn(async move {
            is_saving.set(true);
            let result = api::update_settings(&update).await;
            is_saving.set(false);
            report_action(notifier, dict, "update settings", result);
        });
    };

    rsx! {
        Card {
            title: dict.settings_title.to_string(),
            actions: rsx! {
                Button {
                    variant: "filled".to_string(),
                    icon: "save".to_string(),
                    disabled: *is_saving.read(),
                    onclick: save,
                    "{dict.save_btn}"
                }
            },
            div {
                class: "md-form",
                div {
                    class: "md-field",
                    label { r#for: "deviceNumberInput", "{dict.device_number}" }
                    input {
                        r#type: "number",
                        id: "deviceNumberInput",
                        class: "md-input",
                        min: "0",
                        value: "{device_number}",
                        oninput: move |evt| device_number.set(evt.value()),
                    }
                }
                div {
                    class: "md-field",
                    label { r#for: "siteIDInput", "{dict.site_id}" }
                    input {
                        r#type: "text",
                        id: "siteIDInput",
                        class: "md-input",
                        value: "{site_id}",
                        oninput: move |evt| site_id.set(evt.value()),
                    }
                    small { class: "md-muted", "{dict.site_id_hint}" }
                }
                label {
                    class: "md-checkbox",
                    input {
                        r#type: "checkbox",
                        id: "enableSystemLogs",
                        checked: flags.read().system,
                        onchange: move |evt| flags.write().system = evt.checked(),
                    }
                    "{dict.enable_system_logs}"
                }
                label {
                    class: "md-checkbox",
                    input {
                        r#type: "checkbox",
                        id: "enableHttpLogs",
                        checked: flags.read().http,
                        onchange: move |evt| flags.write().http = evt.checked(),
                    }
                    "{dict.enable_http_logs}"
                }
                label {
                    class: "md-checkbox",
                    input {
                        r#type: "checkbox",
                        id: "enableLoRaLogs",
                        checked: flags.read().lora,
                        onchange: move |evt| flags.write().lora = evt.checked(),
                    }
                    "{dict.enable_lora_logs}"
                }
            }
        }
    }
}
