//! Static page content
//!
//! Descriptors are immutable and supplied at composition time.

use std::time::Duration;

use derive_more::Display;
use serde::Serialize;

/// Symbolic name of an icon in the page's icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    #[display("brain")]
    Brain,
    #[display("message-circle")]
    MessageCircle,
    #[display("sparkles")]
    Sparkles,
    #[display("chevron-down")]
    ChevronDown,
    #[display("circuit")]
    Circuit,
    #[display("cpu")]
    Cpu,
    #[display("network")]
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub icon: IconName,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialDescriptor {
    pub quote: &'static str,
    pub author: &'static str,
    pub avatar_url: &'static str,
}

/// Decorative hero icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingIconDescriptor {
    pub icon: IconName,
    /// Position, size and tint classes
    pub class: &'static str,
    pub delay: Duration,
}

/// Everything the landing page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub features: &'static [FeatureDescriptor],
    pub testimonials: &'static [TestimonialDescriptor],
    pub floating_icons: &'static [FloatingIconDescriptor],
}

pub const FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor {
        icon: IconName::Brain,
        title: "Advanced AI",
        description: "Powered by cutting-edge machine learning for natural conversations",
    },
    FeatureDescriptor {
        icon: IconName::MessageCircle,
        title: "24/7 Support",
        description: "Always available to help with your questions and concerns",
    },
    FeatureDescriptor {
        icon: IconName::Sparkles,
        title: "Personalized Experience",
        description: "Adapts to your needs and preferences over time",
    },
];

pub const TESTIMONIALS: &[TestimonialDescriptor] = &[
    TestimonialDescriptor {
        quote: "This AI assistant has transformed how I handle my daily tasks. It's incredibly intuitive and helpful!",
        author: "Sarah Johnson",
        avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=128&q=80",
    },
    TestimonialDescriptor {
        quote: "The level of understanding and empathy shown by this AI is remarkable. It feels like talking to a real person.",
        author: "Michael Chen",
        avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=128&q=80",
    },
];

pub const FLOATING_ICONS: &[FloatingIconDescriptor] = &[
    FloatingIconDescriptor {
        icon: IconName::Circuit,
        class: "absolute text-purple-300/20 w-24 h-24 top-1/4 left-1/4 -translate-x-1/2",
        delay: Duration::ZERO,
    },
    FloatingIconDescriptor {
        icon: IconName::Cpu,
        class: "absolute text-blue-300/20 w-32 h-32 top-1/3 right-1/4 translate-x-1/2",
        delay: Duration::from_millis(500),
    },
    FloatingIconDescriptor {
        icon: IconName::Network,
        class: "absolute text-purple-400/20 w-40 h-40 bottom-1/4 left-1/3",
        delay: Duration::from_millis(1000),
    },
    FloatingIconDescriptor {
        icon: IconName::Brain,
        class: "absolute text-blue-400/20 w-36 h-36 bottom-1/3 right-1/3",
        delay: Duration::from_millis(1500),
    },
];

impl LandingContent {
    pub const STANDARD: LandingContent = LandingContent {
        title: "AI That Cares",
        tagline: "Experience the future of AI assistance with empathy and understanding at its core",
        features: FEATURES,
        testimonials: TESTIMONIALS,
        floating_icons: FLOATING_ICONS,
    };

    /// schema.org JSON-LD describing the product
    pub fn structured_data(&self) -> serde_json::Value {
        serde_json::json!({
            "@context": "https://schema.org",
            "@type": "SoftwareApplication",
            "name": self.title,
            "applicationCategory": "CommunicationApplication",
            "operatingSystem": "Web",
            "description": self.tagline,
            "featureList": self.features.iter().map(|f| f.title).collect::<Vec<_>>(),
            "review": self.testimonials.iter().map(|t| serde_json::json!({
                "@type": "Review",
                "reviewBody": t.quote,
                "author": { "@type": "Person", "name": t.author },
            })).collect::<Vec<_>>(),
        })
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names_are_kebab_case() {
        assert_eq!(IconName::MessageCircle.to_string(), "message-circle");
        assert_eq!(IconName::ChevronDown.to_string(), "chevron-down");
        assert_eq!(
            serde_json::to_string(&IconName::MessageCircle).unwrap(),
            "\"message-circle\""
        );
    }

    #[test]
    fn test_standard_content() {
        let content = LandingContent::default();
        assert_eq!(content.features.len(), 3);
        assert_eq!(content.testimonials.len(), 2);
        assert_eq!(content.testimonials[0].author, "Sarah Johnson");
        assert_eq!(content.testimonials[1].author, "Michael Chen");
    }

    #[test]
    fn test_floating_icon_delays_are_staggered() {
        let delays: Vec<u128> = FLOATING_ICONS.iter().map(|i| i.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 500, 1000, 1500]);
    }

    #[test]
    fn test_structured_data() {
        let data = LandingContent::STANDARD.structured_data();
        assert_eq!(data["name"], "AI That Cares");
        assert_eq!(data["featureList"].as_array().map(Vec::len), Some(3));
        assert_eq!(data["review"][1]["author"]["name"], "Michael Chen");
    }
}
