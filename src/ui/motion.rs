//! Motion wrappers
//!
//! [`RevealBox`] plays a [`RevealMotion`] once its own reveal latch fires.
//! [`AmbientBox`] starts an [`AmbientMotion`] on mount and never consults scroll
//! state. Both hand the actual animation to the browser through inline CSS.

use leptos::html;
use leptos::prelude::*;

use crate::core::{AmbientMotion, RevealMotion, Threshold};
use crate::ui::reveal::use_reveal;

/// Disables decorative loops and reveal transitions for users who ask for less motion
const REDUCED_MOTION_CSS: &str = "
@media (prefers-reduced-motion: reduce) {
    [data-ambient] { animation: none !important; }
    [data-reveal] { transition: none !important; }
}";

/// Shows every revealable block when scripts are disabled
const NOSCRIPT_CSS: &str =
    "[data-reveal] { opacity: 1 !important; transform: none !important; }";

/// Container animated in the first time it scrolls into view
#[component]
pub fn RevealBox(
    motion: RevealMotion,
    #[prop(default = Threshold::DEFAULT)] threshold: Threshold,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let state = use_reveal(node_ref, threshold);

    view! {
        <div
            node_ref=node_ref
            class=class
            data-reveal=move || if state.get().is_revealed() { "revealed" } else { "resting" }
            style=move || motion.style(state.get())
        >
            {children()}
        </div>
    }
}

/// Container running a decorative animation for as long as it is mounted
#[component]
pub fn AmbientBox(
    motion: AmbientMotion,
    #[prop(default = "")] class: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=class data-ambient=motion.name() style=motion.style()>
            {children.map(|children| children())}
        </div>
    }
}

/// Without scripts nothing observes the viewport, so reveal everything
#[component]
pub fn NoscriptReveal() -> impl IntoView {
    view! {
        <noscript>
            <style inner_html=NOSCRIPT_CSS></style>
        </noscript>
    }
}

/// `@keyframes` for every ambient preset plus the reduced-motion override
#[component]
pub fn MotionStyles() -> impl IntoView {
    let mut css: String = AmbientMotion::catalog()
        .iter()
        .map(AmbientMotion::keyframes_css)
        .collect::<Vec<_>>()
        .join("\n");
    css.push_str(REDUCED_MOTION_CSS);

    view! { <style inner_html=css></style> }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn render<F, V>(view: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView + 'static,
    {
        Owner::new().with(|| view().into_view().to_html())
    }

    #[test]
    fn test_noscript_reveals_everything() {
        let html = render(|| view! { <NoscriptReveal /> });

        assert!(html.contains("<noscript>"));
        assert!(html.contains(NOSCRIPT_CSS));
        assert!(html.contains("opacity: 1 !important"));
    }

    #[test]
    fn test_motion_styles_cover_catalog() {
        let html = render(|| view! { <MotionStyles /> });

        for motion in AmbientMotion::catalog() {
            assert!(html.contains(&format!("@keyframes {} {{", motion.name())));
        }
        assert!(html.contains("prefers-reduced-motion: reduce"));
    }

    #[test]
    fn test_ambient_box_has_resting_style_without_animation() {
        let html = render(|| view! { <AmbientBox motion=AmbientMotion::hero_accent() /> });

        assert!(html.contains("data-ambient=\"ambient-accent\""));
        assert!(html.contains("opacity: 0.1;"));
        assert!(html.contains("animation: ambient-accent"));
    }
}
