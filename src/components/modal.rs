//! Notification modal: a single overlay message shared through context.

use crate::components::Button;
use crate::html::escape;
use crate::i18n::{get_dict, Language};
use dioxus::prelude::*;

/// Handle used by pages and socket callbacks to surface a message.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    markup: Signal<Option<String>>,
}

impl Notifier {
    /// Show `markup` as-is. Anything that came from the device must already
    /// have gone through [`escape`].
    pub fn show_markup(&self, markup: String) {
        let mut slot = self.markup;
        slot.set(Some(markup));
    }

    pub fn show_text(&self, text: &str) {
        self.show_markup(escape(text));
    }

    /// `"<label>: <detail>"`, both escaped.
    pub fn show_labelled(&self, label: &str, detail: &str) {
        self.show_markup(format!("{}: {}", escape(label), escape(detail)));
    }

    pub fn close(&self) {
        let mut slot = self.markup;
        slot.set(None);
    }
}

/// Install the notifier for the component tree below the caller.
pub fn use_notifier_provider() -> Notifier {
    use_context_provider(|| Notifier {
        markup: Signal::new(None),
    })
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

#[component]
pub fn NotificationModal() -> Element {
    let notifier = use_notifier();
    let lang = use_context::<Signal<Language>>();
    let dict = get_dict(*lang.read());

    let Some(message) = notifier.markup.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "md-modal-backdrop",
            onclick: move |_| notifier.close(),
            div {
                class: "md-modal",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "md-modal-message",
                    dangerous_inner_html: "{message}",
                }
                div {
                    class: "md-card-actions",
                    Button {
                        variant: "text".to_string(),
                        icon: "close".to_string(),
                        onclick: move |_| notifier.close(),
                        "{dict.close}"
                    }
                }
            }
        }
    }
}
