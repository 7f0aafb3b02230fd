//! Motion presets for the landing page
//!
//! Two deliberately separate abstractions share the [`Timeline`] data shape:
//!
//! - [`RevealMotion`]: content animation gated on a reveal latch. It has a
//!   resting and a revealed endpoint and plays once, when the latch fires.
//! - [`AmbientMotion`]: decorative animation that starts on mount and never
//!   looks at scroll state. Most presets loop forever.

use std::time::Duration;

use crate::core::reveal::RevealState;
use crate::core::timeline::{Easing, Repeat, RepeatKind, Timeline, Transition, VisualState};

/// Scroll-gated transition between a resting and a revealed state
#[derive(Debug, Clone, PartialEq)]
pub struct RevealMotion {
    timeline: Timeline,
}

impl RevealMotion {
    pub fn new(resting: VisualState, revealed: VisualState, duration: Duration) -> Self {
        Self {
            timeline: Timeline::tween(resting, revealed, Transition::new(duration)),
        }
    }

    /// Feature card: slides up 50px while fading in
    pub fn feature_card() -> Self {
        Self::new(
            VisualState::new(0.0, 50.0, 1.0),
            VisualState::IDENTITY,
            Duration::from_millis(500),
        )
    }

    /// Testimonial: grows from 90% while fading in
    pub fn testimonial() -> Self {
        Self::new(
            VisualState::new(0.0, 0.0, 0.9),
            VisualState::IDENTITY,
            Duration::from_millis(500),
        )
    }

    pub fn section_heading() -> Self {
        Self::new(
            VisualState::new(0.0, 20.0, 1.0),
            VisualState::IDENTITY,
            Duration::from_millis(800),
        )
    }

    /// Divider lines of the features section
    pub fn section_accent() -> Self {
        Self::new(
            VisualState::IDENTITY.with_opacity(0.0),
            VisualState::IDENTITY.with_opacity(0.1),
            Duration::from_secs(2),
        )
    }

    pub fn resting(&self) -> VisualState {
        self.timeline.initial()
    }

    pub fn revealed(&self) -> VisualState {
        self.timeline.last()
    }

    pub fn endpoint(&self, state: RevealState) -> VisualState {
        match state {
            RevealState::Resting => self.resting(),
            RevealState::Revealed => self.revealed(),
        }
    }

    /// Visual state `since_reveal` after the latch fired
    pub fn sample(&self, since_reveal: Duration) -> VisualState {
        self.timeline.sample(since_reveal)
    }

    pub fn duration(&self) -> Duration {
        self.timeline.transition().duration
    }

    /// Inline style for the given latch state; the browser animates between
    /// the two endpoints through the CSS transition
    pub fn style(&self, state: RevealState) -> String {
        format!(
            "{} {}",
            self.endpoint(state).to_css(),
            self.timeline.transition_css()
        )
    }
}

/// Mount-driven decorative animation, independent of any input
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientMotion {
    name: &'static str,
    timeline: Timeline,
}

impl AmbientMotion {
    pub fn new(name: &'static str, timeline: Timeline) -> Self {
        Self { name, timeline }
    }

    /// Background icon pulsing between invisible and 20% opacity
    pub fn floating_icon(delay: Duration) -> Self {
        Self::new(
            "ambient-float",
            Timeline::tween(
                VisualState::new(0.0, 0.0, 0.0),
                VisualState::new(0.2, 0.0, 1.0),
                Transition::new(Duration::from_secs(2))
                    .repeat(Repeat::Forever(RepeatKind::Reverse)),
            ),
        )
        .with_delay(delay)
    }

    /// Bouncing chevron under the hero
    pub fn scroll_hint() -> Self {
        Self::new(
            "ambient-bounce",
            Timeline::sequence(
                VisualState::IDENTITY,
                [
                    VisualState::IDENTITY.with_translate_y(-20.0),
                    VisualState::IDENTITY,
                ],
                Transition::new(Duration::from_secs(2))
                    .easing(Easing::EaseInOut)
                    .repeat(Repeat::Forever(RepeatKind::Loop)),
            ),
        )
    }

    pub fn chat_pulse() -> Self {
        Self::new(
            "ambient-pulse",
            Timeline::sequence(
                VisualState::IDENTITY,
                [VisualState::IDENTITY.with_scale(1.1), VisualState::IDENTITY],
                Transition::new(Duration::from_secs(2))
                    .easing(Easing::EaseInOut)
                    .repeat(Repeat::Forever(RepeatKind::Loop)),
            ),
        )
    }

    /// Half-transparent halo behind the chat button
    pub fn chat_halo() -> Self {
        let base = VisualState::IDENTITY.with_opacity(0.5);
        Self::new(
            "ambient-halo",
            Timeline::sequence(
                base,
                [base.with_opacity(0.25), base],
                Transition::new(Duration::from_secs(2))
                    .easing(Easing::CubicBezier(0.4, 0.0, 0.6, 1.0))
                    .repeat(Repeat::Forever(RepeatKind::Loop)),
            ),
        )
    }

    /// One-shot fade of the hero's diagonal lines
    pub fn hero_accent() -> Self {
        Self::new(
            "ambient-accent",
            Timeline::tween(
                VisualState::IDENTITY.with_opacity(0.0),
                VisualState::IDENTITY.with_opacity(0.1),
                Transition::new(Duration::from_secs(2)),
            ),
        )
    }

    pub fn hero_intro() -> Self {
        Self::new(
            "ambient-intro",
            Timeline::tween(
                VisualState::new(0.0, 50.0, 1.0),
                VisualState::IDENTITY,
                Transition::new(Duration::from_millis(800)),
            ),
        )
    }

    /// Every distinct `@keyframes` rule the presets refer to
    pub fn catalog() -> Vec<AmbientMotion> {
        vec![
            Self::floating_icon(Duration::ZERO),
            Self::scroll_hint(),
            Self::chat_pulse(),
            Self::chat_halo(),
            Self::hero_accent(),
            Self::hero_intro(),
        ]
    }

    /// Start offset; only the first iteration is delayed
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.timeline.transition_mut().delay = delay;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn is_looping(&self) -> bool {
        !self.timeline.transition().is_finite()
    }

    /// Visual state `elapsed` after mount
    pub fn sample(&self, elapsed: Duration) -> VisualState {
        self.timeline.sample(elapsed)
    }

    /// State shown when the animation is not running: the settled keyframe
    /// of a one-shot, the most visible keyframe of a loop
    pub fn still_state(&self) -> VisualState {
        if !self.is_looping() {
            return self.timeline.last();
        }
        self.timeline
            .keyframes()
            .iter()
            .copied()
            .reduce(|best, state| if state.opacity > best.opacity { state } else { best })
            .unwrap_or_default()
    }

    pub fn keyframes_css(&self) -> String {
        self.timeline.keyframes_css(self.name)
    }

    /// Inline style: the still state, overridden by the animation while it runs
    pub fn style(&self) -> String {
        format!(
            "{} {}",
            self.still_state().to_css(),
            self.timeline.animation_css(self.name)
        )
    }
}
