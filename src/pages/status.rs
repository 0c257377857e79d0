use super::report_action;
use crate::api;
use crate::components::{use_notifier, Button, Card, InfoItem};
use crate::i18n::{get_dict, Language};
use crate::models::StatusSnapshot;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;

#[component]
pub fn Status() -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());
    let notifier = use_notifier();

    let status = use_resource(move || async move {
        let result = api::fetch_status().await;
        if let Err(err) = &result {
            error!("fetching status failed: {err}");
            notifier.show_text(get_dict(*lang.peek()).status_fetch_error);
        }
        result
    });

    let mut is_rebooting = use_signal(|| false);
    let reboot = move |_| {
        spawn(async move {
            let result = api::reboot().await;
            let accepted = result.is_ok();
            report_action(notifier, dict, "reboot", result);
            if accepted {
                is_rebooting.set(true);
            }
        });
    };

    if *is_rebooting.read() {
        return rsx! {
            Card {
                title: dict.rebooting_title.to_string(),
                p { "{dict.rebooting_hint}" }
            }
        };
    }

    match &*status.read_unchecked() {
        None => rsx! {
            div { class: "md-muted", "{dict.loading}" }
        },
        Some(Err(_)) => rsx! {
            div { class: "md-inline-error", "{dict.status_fetch_error}" }
        },
        Some(Ok(snapshot)) => rsx! {
            Card {
                title: dict.status_title.to_string(),
                actions: rsx! {
                    Button {
                        variant: "danger".to_string(),
                        icon: "restart_alt".to_string(),
                        onclick: reboot,
                        "{dict.reboot_btn}"
                    }
                },
                StatusGrid { snapshot: snapshot.clone() }
            }
        },
    }
}

#[component]
fn StatusGrid(snapshot: StatusSnapshot) -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());

    rsx! {
        div {
            class: "md-info-grid",
            InfoItem {
                icon: "schedule".to_string(),
                label: dict.uptime.to_string(),
                value: format!("{} {}", snapshot.uptime, dict.seconds),
            }
            InfoItem {
                icon: "memory".to_string(),
                label: dict.free_heap.to_string(),
                value: format!("{} {}", snapshot.free_heap, dict.bytes),
            }
            InfoItem {
                icon: "verified_user".to_string(),
                label: dict.chip_revision.to_string(),
                value: snapshot.chip_revision.to_string(),
            }
            InfoItem {
                icon: "network_wifi".to_string(),
                label: dict.wifi_rssi.to_string(),
                value: format!("{} dBm", snapshot.wifi_rssi),
            }
            InfoItem {
                icon: "event".to_string(),
                label: dict.current_time.to_string(),
                value: snapshot.current_time.clone(),
            }
            InfoItem {
                icon: "public".to_string(),
                label: dict.time_zone.to_string(),
                value: snapshot.time_zone.clone(),
            }
            InfoItem {
                icon: "wifi".to_string(),
                label: dict.wifi_ip.to_string(),
                value: snapshot.wifi_ip.clone(),
            }
            InfoItem {
                icon: "lan".to_string(),
                label: dict.eth_ip.to_string(),
                value: snapshot.eth_ip.clone(),
            }
        }
    }
}
