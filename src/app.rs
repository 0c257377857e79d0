#![allow(non_snake_case)]

use crate::api;
use crate::channel::{use_notification_channel, Notification};
use crate::components::{use_notifier_provider, Layout};
use crate::i18n::{get_dict, Language};
use crate::pages::home::Home;
use crate::pages::logs::Logs;
use crate::pages::settings::Settings;
use crate::pages::status::Status;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use wasm_bindgen::prelude::*;

static CSS: Asset = asset!("/assets/styles.css");

// Helper to switch theme
#[wasm_bindgen(
    inline_js = "export function set_theme(theme) { document.documentElement.setAttribute('data-theme', theme); }"
)]
extern "C" {
    fn set_theme(theme: &str);
}

#[derive(Clone, Copy, PartialEq)]
enum Theme {
    Light,
    Dark,
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/logs")]
    Logs {},
    #[route("/status")]
    Status {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        div { "Page not found: {route:?}" }
    }
}

pub fn App() -> Element {
    rsx! {
        link { rel: "stylesheet", href: CSS }
        link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined",
        }
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    let mut theme = use_signal(|| Theme::Dark);
    let mut lang = use_context_provider(|| Signal::new(Language::En));
    let notifier = use_notifier_provider();

    use_notification_channel(move |notification| {
        if let Notification::LoraMessage { message } = notification {
            let dict = get_dict(*lang.peek());
            notifier.show_labelled(dict.lora_received, &message);
        }
    });

    // Header badge; the page still works when this lookup fails.
    let device_number = use_resource(|| async {
        match api::fetch_settings().await {
            Ok(settings) => Some(settings.device_number),
            Err(err) => {
                warn!("could not load device number: {err}");
                None
            }
        }
    });

    // Apply initial theme
    use_effect(move || {
        set_theme("dark");
    });

    let toggle_theme = move |_| {
        let new_theme = match *theme.read() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        theme.set(new_theme);

        let theme_str = match new_theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        set_theme(theme_str);
    };

    let toggle_lang = move |_| {
        let new_lang = match *lang.read() {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        };
        lang.set(new_lang);
    };

    rsx! {
        Layout {
            on_theme_toggle: toggle_theme,
            on_lang_toggle: toggle_lang,
            is_dark: *theme.read() == Theme::Dark,
            device_number: (*device_number.read()).flatten(),
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_map_paths_to_views() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
        assert_eq!(Route::from_str("/logs").unwrap(), Route::Logs {});
        assert_eq!(Route::from_str("/status").unwrap(), Route::Status {});
        assert_eq!(Route::from_str("/settings").unwrap(), Route::Settings {});
    }

    #[test]
    fn should_fall_back_for_unknown_views() {
        assert!(matches!(
            Route::from_str("/firmware").unwrap(),
            Route::PageNotFound { .. }
        ));
    }

    #[test]
    fn should_render_view_paths() {
        assert_eq!(Route::Logs {}.to_string(), "/logs");
        assert_eq!(Route::Settings {}.to_string(), "/settings");
    }
}
