use leptos::prelude::*;

use crate::core::IconName;

#[component]
pub fn Icon(
    /// Icon from the page's icon set, served as `/icons/{name}.svg`
    name: IconName,
    /// CSS classes for sizing and tint
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{name}.svg");

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}
