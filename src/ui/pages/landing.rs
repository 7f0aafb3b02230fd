//! Landing page component
//!
//! Marketing page for the assistant:
//! - SEO meta tags and JSON-LD structured data
//! - Hero with floating background icons, accent lines and a bouncing scroll hint
//! - Feature cards revealed on scroll
//! - Testimonials revealed on scroll
//! - Floating chat launcher with a pulsing halo

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::{
    AmbientMotion, FeatureDescriptor, FloatingIconDescriptor, IconName, LandingContent,
    RevealMotion, TestimonialDescriptor,
};
use crate::ui::icon::Icon;
use crate::ui::motion::{AmbientBox, MotionStyles, RevealBox};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let content = LandingContent::STANDARD;

    view! {
        <SeoMeta content=content />
        <MotionStyles />

        <div class="min-h-screen gradient-bg text-white">
            <Hero content=content />
            <FeaturesSection features=content.features />
            <TestimonialsSection testimonials=content.testimonials />
            <ChatLauncher />
        </div>
    }
}

#[component]
fn Hero(content: LandingContent) -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col items-center justify-center px-4 relative overflow-hidden">
            // Background decoration
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                {content
                    .floating_icons
                    .iter()
                    .map(|icon| view! { <FloatingIcon icon=*icon /> })
                    .collect_view()}

                <AmbientBox motion=AmbientMotion::hero_accent() class="absolute inset-0">
                    <div class="absolute w-full h-1 bg-gradient-to-r from-transparent via-purple-300 to-transparent top-1/3 -rotate-45"></div>
                    <div class="absolute w-full h-1 bg-gradient-to-r from-transparent via-blue-300 to-transparent bottom-1/3 rotate-45"></div>
                </AmbientBox>
            </div>

            <AmbientBox motion=AmbientMotion::hero_intro() class="text-center max-w-4xl relative z-10">
                <h1 class="text-6xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-purple-300 to-blue-300">
                    {content.title}
                </h1>
                <p class="text-xl text-gray-300 mb-8">{content.tagline}</p>
            </AmbientBox>

            // Scroll indicator
            <AmbientBox motion=AmbientMotion::scroll_hint() class="absolute bottom-10 z-10">
                <Icon name=IconName::ChevronDown class="w-8 h-8 text-white/60" />
            </AmbientBox>
        </section>
    }
}

/// Decorative icon fading in and out behind the hero
#[component]
fn FloatingIcon(icon: FloatingIconDescriptor) -> impl IntoView {
    view! {
        <AmbientBox motion=AmbientMotion::floating_icon(icon.delay) class=icon.class>
            <Icon name=icon.icon class="w-full h-full" />
        </AmbientBox>
    }
}

#[component]
fn FeaturesSection(features: &'static [FeatureDescriptor]) -> impl IntoView {
    view! {
        <section class="py-32 px-4 relative overflow-hidden">
            <RevealBox motion=RevealMotion::section_accent() class="absolute inset-0 pointer-events-none">
                <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-transparent via-purple-300 to-transparent"></div>
                <div class="absolute bottom-0 right-0 w-full h-1 bg-gradient-to-r from-transparent via-blue-300 to-transparent"></div>
            </RevealBox>

            <div class="max-w-6xl mx-auto">
                <RevealBox motion=RevealMotion::section_heading()>
                    <h2 class="text-5xl font-bold text-center mb-20 bg-clip-text text-transparent bg-gradient-to-r from-purple-300 to-blue-300">
                        "Features"
                    </h2>
                </RevealBox>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {features
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: FeatureDescriptor) -> impl IntoView {
    view! {
        <RevealBox motion=RevealMotion::feature_card() class="h-full">
            // Hover scale sits inside the reveal transform
            <div class="h-full bg-white/5 backdrop-blur-lg rounded-2xl p-8 border border-white/10 relative overflow-hidden group hover:scale-105 transition-all duration-300">
                <div class="absolute inset-0 bg-gradient-to-r from-purple-500/10 to-blue-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                <div class="relative z-10" data-feature=feature.title>
                    <div class="bg-gradient-to-r from-purple-400 to-blue-400 p-3 rounded-lg inline-block mb-6">
                        <Icon name=feature.icon class="w-8 h-8" />
                    </div>
                    <h3 class="text-2xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-purple-300 to-blue-300">
                        {feature.title}
                    </h3>
                    <p class="text-gray-300 text-lg leading-relaxed">{feature.description}</p>
                </div>
            </div>
        </RevealBox>
    }
}

#[component]
fn TestimonialsSection(testimonials: &'static [TestimonialDescriptor]) -> impl IntoView {
    view! {
        <section class="py-20 px-4 bg-black/20">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12">"What People Say"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {testimonials
                        .iter()
                        .map(|testimonial| view! { <Testimonial testimonial=*testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Quote with author avatar; each instance owns its reveal latch
#[component]
fn Testimonial(testimonial: TestimonialDescriptor) -> impl IntoView {
    view! {
        <RevealBox
            motion=RevealMotion::testimonial()
            class="bg-white/5 backdrop-blur-lg rounded-xl p-6 flex items-start space-x-4"
        >
            <img
                src=testimonial.avatar_url
                alt=testimonial.author
                class="w-12 h-12 rounded-full object-cover"
                data-testimonial=testimonial.author
            />
            <div>
                <p class="text-gray-200 italic mb-2">{testimonial.quote}</p>
                <p class="text-purple-300 font-semibold">{testimonial.author}</p>
            </div>
        </RevealBox>
    }
}

/// Entry point for the chat widget. Only the trigger lives here; the widget
/// itself hooks onto `data-chat-launch`.
#[component]
fn ChatLauncher() -> impl IntoView {
    view! {
        <div class="fixed bottom-6 right-6">
            <AmbientBox motion=AmbientMotion::chat_pulse() class="relative">
                <AmbientBox
                    motion=AmbientMotion::chat_halo()
                    class="absolute inset-0 bg-purple-500 rounded-full"
                />
                <button
                    type="button"
                    class="relative bg-purple-600 hover:bg-purple-700 text-white p-4 rounded-full shadow-lg transition-colors duration-300 chat-launch-button"
                    aria-label="Open chat"
                    data-chat-launch="true"
                >
                    <Icon name=IconName::MessageCircle class="w-6 h-6" />
                </button>
            </AmbientBox>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta(content: LandingContent) -> impl IntoView {
    let title = format!("{} - Your Empathetic AI Assistant", content.title);
    let structured_data = content.structured_data().to_string();

    view! {
        <Title text=title.clone() />

        <Meta name="description" content=content.tagline />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=content.tagline />

        <Link rel="canonical" href="/" />

        <script type="application/ld+json" inner_html=structured_data></script>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::{FLOATING_ICONS, TESTIMONIALS};
    use leptos::reactive::owner::Owner;

    fn render<F, V>(view: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView + 'static,
    {
        Owner::new().with(|| view().into_view().to_html())
    }

    #[test]
    fn test_renders_one_testimonial_per_entry() {
        let html = render(|| view! { <TestimonialsSection testimonials=TESTIMONIALS /> });

        assert_eq!(html.matches("data-testimonial=").count(), 2);
        assert!(html.contains("Sarah Johnson"));
        assert!(html.contains("Michael Chen"));
        // Each testimonial renders its own resting latch
        assert_eq!(html.matches("data-reveal=\"resting\"").count(), 2);
        assert!(html.contains("opacity: 0; transform: translateY(0px) scale(0.9);"));
    }

    #[test]
    fn test_feature_cards_render_resting() {
        let html = render(|| {
            view! { <FeaturesSection features=LandingContent::STANDARD.features /> }
        });

        assert_eq!(html.matches("data-feature=").count(), 3);
        assert!(html.contains("opacity: 0; transform: translateY(50px) scale(1);"));
        assert!(!html.contains("data-reveal=\"revealed\""));
    }

    #[test]
    fn test_feature_cards_scale_on_hover() {
        let html = render(|| {
            view! { <FeaturesSection features=LandingContent::STANDARD.features /> }
        });

        assert_eq!(html.matches("hover:scale-105 transition-all").count(), 3);
    }

    #[test]
    fn test_hero_ambient_boxes_have_static_state() {
        let html = render(|| view! { <Hero content=LandingContent::STANDARD /> });

        let accent = html
            .split("data-ambient=\"ambient-accent\"")
            .nth(1)
            .and_then(|rest| rest.split('>').next())
            .unwrap();
        assert!(accent.contains("opacity: 0.1;"));
        assert_eq!(
            html.matches("data-ambient=\"ambient-float\"").count(),
            FLOATING_ICONS.len()
        );
        assert!(html.contains(
            "opacity: 0.2; transform: translateY(0px) scale(1); animation: ambient-float"
        ));
    }

    #[test]
    fn test_motion_styles_define_every_rendered_animation() {
        let styles = render(|| view! { <MotionStyles /> });
        let page = render(|| {
            view! {
                <Hero content=LandingContent::STANDARD />
                <ChatLauncher />
            }
        });

        let names: Vec<&str> = page
            .split("data-ambient=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert!(!names.is_empty());
        for name in names {
            assert!(
                styles.contains(&format!("@keyframes {name} {{")),
                "missing keyframes for {name}"
            );
        }
    }

    #[test]
    fn test_chat_halo_is_not_scroll_gated() {
        let html = render(|| view! { <ChatLauncher /> });

        assert!(html.contains("data-ambient=\"ambient-halo\""));
        assert!(html.contains("animation: ambient-halo 2000ms"));
        assert!(html.contains("infinite"));
        assert!(!html.contains("data-reveal"));
        assert!(html.contains("data-chat-launch"));
    }
}
