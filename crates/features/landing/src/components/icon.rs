use crate::content::Icon;
use dioxus::prelude::*;

/// Placeholder element picked up by the Lucide stylesheet.
#[component]
pub fn IconMark(icon: Icon, #[props(into)] class: String) -> Element {
    let class = format!("{} {class}", icon.class());

    rsx! {
        i { class, aria_hidden: "true", "data-lucide": icon.name() }
    }
}
