use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(default = "".to_string())] title: String,
    #[props(default = "".to_string())] subtitle: String,
    children: Element,
    actions: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "md-card",
            if !title.is_empty() {
                div {
                   class: "md-card-header",
                   div { class: "md-card-title", "{title}" }
                   if !subtitle.is_empty() {
                       div { class: "md-card-subtitle", "{subtitle}" }
                   }
                }
            }
            div {
                class: "md-card-content",
                {children}
            }
            if let Some(actions) = actions {
                div {
                    class: "md-card-actions",
                    {actions}
                }
            }
        }
    }
}

/// Single labelled reading inside a card, e.g. on the status view.
#[component]
pub fn InfoItem(icon: String, label: String, value: String) -> Element {
    rsx! {
        div {
            class: "md-info-item",
            div {
                class: "md-info-icon",
                span { class: "material-symbols-outlined", "{icon}" }
            }
            div {
                class: "md-info-text",
                span { class: "md-info-label", "{label}" }
                span { class: "md-info-value", title: "{value}", "{value}" }
            }
        }
    }
}
