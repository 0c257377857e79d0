use crate::api;
use crate::components::{use_notifier, Button, Card};
use crate::i18n::{get_dict, Language};
use crate::models::LogEntry;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;

#[component]
pub fn Logs() -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());
    let notifier = use_notifier();

    // Fetched fresh on every visit, never cached.
    let mut logs = use_resource(move || async move {
        let result = api::fetch_logs().await;
        if let Err(err) = &result {
            error!("fetching logs failed: {err}");
            notifier.show_text(get_dict(*lang.peek()).logs_fetch_error);
        }
        result
    });

    rsx! {
        Card {
            title: dict.logs_title.to_string(),
            subtitle: dict.logs_subtitle.to_string(),
            actions: rsx! {
                Button {
                    variant: "text".to_string(),
                    icon: "refresh".to_string(),
                    onclick: move |_| logs.restart(),
                }
            },
            {match &*logs.read_unchecked() {
                None => rsx! {
                    div { class: "md-muted", "{dict.loading}" }
                },
                Some(Err(_)) => rsx! {
                    div { class: "md-inline-error", "{dict.logs_fetch_error}" }
                },
                Some(Ok(entries)) if entries.is_empty() => rsx! {
                    div { class: "md-muted", "{dict.logs_empty}" }
                },
                Some(Ok(entries)) => rsx! {
                    div {
                        class: "log-list",
                        for (i, entry) in entries.iter().enumerate() {
                            LogLine { key: "{i}", entry: entry.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn LogLine(entry: LogEntry) -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());

    rsx! {
        div {
            class: "log-line",
            strong { "{entry.timestamp} - {entry.kind}" }
            " - "
            if let Some((src, dest)) = entry.addresses() {
                "{dict.src_ip}: {src} - {dict.dest_ip}: {dest} - "
            }
            "{entry.message}"
        }
    }
}
