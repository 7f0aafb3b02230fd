//! Target-independent animation and visibility logic for the landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod reveal;
pub mod timeline;

pub use content::*;
pub use error::*;
pub use motion::{AmbientMotion, RevealMotion};
pub use reveal::{
    IntersectionSample, MountOutcome, RevealController, RevealLatch, RevealState, Threshold,
    ViewportObserver,
};
pub use timeline::{Easing, Repeat, RepeatKind, Timeline, Transition, VisualState};
