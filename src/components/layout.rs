use crate::components::{NotificationModal, Sidebar};
use crate::i18n::{get_dict, Language};
use dioxus::prelude::*;

#[component]
pub fn Layout(
    children: Element,
    on_theme_toggle: Option<EventHandler<MouseEvent>>,
    on_lang_toggle: Option<EventHandler<MouseEvent>>,
    is_dark: bool,
    device_number: Option<u32>,
) -> Element {
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());

    rsx! {
        div {
            class: "md-layout",
            Sidebar {
                on_theme_toggle: on_theme_toggle,
                on_lang_toggle: on_lang_toggle,
                is_dark: is_dark
            }
            main {
                class: "md-main-content",
                header {
                    class: "md-top-bar",
                    span { class: "md-top-bar-title", "{dict.app_title}" }
                    if let Some(number) = device_number {
                        span {
                            class: "md-top-bar-chip",
                            "{dict.device_label} "
                            span { id: "deviceNumber", "{number}" }
                        }
                    }
                }
                div {
                    id: "content",
                    {children}
                }
            }
            NotificationModal {}
        }
    }
}
