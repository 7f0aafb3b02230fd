pub mod icon;
pub mod motion;
pub mod pages;
pub mod reveal;

pub use icon::Icon;
pub use motion::{AmbientBox, MotionStyles, RevealBox};
pub use reveal::use_reveal;
