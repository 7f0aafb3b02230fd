//! Declarative animation timelines
//!
//! A [`Timeline`] is a list of evenly spaced keyframes plus a [`Transition`]
//! describing how long it runs, when it starts and whether it repeats. Timelines
//! carry no runtime state: [`Timeline::sample`] answers "what does the element
//! look like `elapsed` after the animation was started", and the CSS helpers
//! render the same description for the browser to play.

use std::fmt::Write;
use std::time::Duration;

/// Animatable visual properties of a single element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    /// Vertical offset in CSS pixels, positive is downwards
    pub translate_y: f64,
    pub scale: f64,
}

impl VisualState {
    /// Fully visible, untransformed
    pub const IDENTITY: VisualState = VisualState::new(1.0, 0.0, 1.0);

    pub const fn new(opacity: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            opacity,
            translate_y,
            scale,
        }
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_translate_y(mut self, translate_y: f64) -> Self {
        self.translate_y = translate_y;
        self
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Linear interpolation towards `other`; `t` is clamped to [0, 1]
    pub fn lerp(&self, other: &VisualState, t: f64) -> VisualState {
        let t = t.clamp(0.0, 1.0);
        VisualState {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            translate_y: self.translate_y + (other.translate_y - self.translate_y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    /// Inline CSS declarations for this state
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            css_number(self.opacity),
            css_number(self.translate_y),
            css_number(self.scale)
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Timing curve applied to each keyframe segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic bezier with control points `(x1, y1)` and `(x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Control points matching the CSS keywords
    fn control_points(&self) -> Option<(f64, f64, f64, f64)> {
        match *self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Map linear progress `t` in [0, 1] to eased progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return t;
        };
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // x(s) is monotonic on [0, 1] for x1, x2 in [0, 1], so bisection converges
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut s = t;
        for _ in 0..48 {
            s = (lo + hi) / 2.0;
            let x = bezier_axis(s, x1, x2);
            if (x - t).abs() < 1e-9 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
        }
        bezier_axis(s, y1, y2)
    }

    pub fn to_css(&self) -> String {
        match self.control_points() {
            None => "linear".to_string(),
            Some((x1, y1, x2, y2)) => format!(
                "cubic-bezier({}, {}, {}, {})",
                css_number(x1),
                css_number(y1),
                css_number(x2),
                css_number(y2)
            ),
        }
    }
}

fn bezier_axis(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Direction of successive iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    /// Restart from the first keyframe
    Loop,
    /// Alternate direction every iteration (ping-pong)
    Reverse,
}

impl RepeatKind {
    fn css_direction(&self) -> &'static str {
        match self {
            RepeatKind::Loop => "normal",
            RepeatKind::Reverse => "alternate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Play once, then repeat the given number of extra times
    Count(u32, RepeatKind),
    Forever(RepeatKind),
}

/// Timing of a timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub repeat: Repeat,
    pub easing: Easing,
}

impl Transition {
    /// Single play, no delay, ease-out
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            repeat: Repeat::Once,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Whether the timeline ever stops on its own
    pub fn is_finite(&self) -> bool {
        !matches!(self.repeat, Repeat::Forever(_))
    }

    /// Linear progress through the keyframes in [0, 1] after `elapsed`,
    /// with repeat direction already applied
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return self.settled_progress();
        }

        let cycles = active.as_secs_f64() / self.duration.as_secs_f64();
        match self.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Count(extra, kind) => {
                if cycles >= f64::from(extra) + 1.0 {
                    self.settled_progress()
                } else {
                    within_cycle(cycles, kind)
                }
            }
            Repeat::Forever(kind) => within_cycle(cycles, kind),
        }
    }

    /// Progress once every iteration has played
    fn settled_progress(&self) -> f64 {
        match self.repeat {
            Repeat::Count(extra, RepeatKind::Reverse) if extra % 2 == 1 => 0.0,
            _ => 1.0,
        }
    }

    fn css_iterations(&self) -> String {
        match self.repeat {
            Repeat::Once => "1".to_string(),
            Repeat::Count(extra, _) => (u64::from(extra) + 1).to_string(),
            Repeat::Forever(_) => "infinite".to_string(),
        }
    }

    fn css_direction(&self) -> &'static str {
        match self.repeat {
            Repeat::Once => "normal",
            Repeat::Count(_, kind) | Repeat::Forever(kind) => kind.css_direction(),
        }
    }
}

fn within_cycle(cycles: f64, kind: RepeatKind) -> f64 {
    let iteration = cycles.floor();
    let fraction = cycles - iteration;
    match kind {
        RepeatKind::Loop => fraction,
        RepeatKind::Reverse if iteration % 2.0 == 1.0 => 1.0 - fraction,
        RepeatKind::Reverse => fraction,
    }
}

/// Evenly spaced keyframes played with a [`Transition`]
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    keyframes: Vec<VisualState>,
    transition: Transition,
}

impl Timeline {
    /// Two-keyframe animation from `from` to `to`
    pub fn tween(from: VisualState, to: VisualState, transition: Transition) -> Self {
        Self {
            keyframes: vec![from, to],
            transition,
        }
    }

    /// Keyframe sequence; always has at least one keyframe
    pub fn sequence(
        first: VisualState,
        rest: impl IntoIterator<Item = VisualState>,
        transition: Transition,
    ) -> Self {
        let mut keyframes = vec![first];
        keyframes.extend(rest);
        Self {
            keyframes,
            transition,
        }
    }

    pub fn keyframes(&self) -> &[VisualState] {
        &self.keyframes
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    pub fn initial(&self) -> VisualState {
        self.keyframes[0]
    }

    pub fn last(&self) -> VisualState {
        self.keyframes[self.keyframes.len() - 1]
    }

    /// State of the element `elapsed` after the timeline started
    pub fn sample(&self, elapsed: Duration) -> VisualState {
        self.state_at(self.transition.progress(elapsed))
    }

    /// State at linear progress `progress` through the keyframes
    pub fn state_at(&self, progress: f64) -> VisualState {
        if self.keyframes.len() == 1 {
            return self.keyframes[0];
        }

        let segments = self.keyframes.len() - 1;
        let position = progress.clamp(0.0, 1.0) * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let local = position - index as f64;

        let eased = self.transition.easing.apply(local);
        self.keyframes[index].lerp(&self.keyframes[index + 1], eased)
    }

    /// `@keyframes` rule for this timeline
    pub fn keyframes_css(&self, name: &str) -> String {
        let mut css = format!("@keyframes {name} {{ ");
        if self.keyframes.len() == 1 {
            let _ = write!(css, "0%, 100% {{ {} }} ", self.keyframes[0].to_css());
        } else {
            let segments = (self.keyframes.len() - 1) as f64;
            for (i, state) in self.keyframes.iter().enumerate() {
                let percent = i as f64 * 100.0 / segments;
                let _ = write!(css, "{}% {{ {} }} ", css_number(percent), state.to_css());
            }
        }
        css.push('}');
        css
    }

    /// `animation` declaration playing the `@keyframes` rule called `name`
    pub fn animation_css(&self, name: &str) -> String {
        let t = &self.transition;
        format!(
            "animation: {name} {}ms {} {}ms {} {} both;",
            t.duration.as_millis(),
            t.easing.to_css(),
            t.delay.as_millis(),
            t.css_iterations(),
            t.css_direction()
        )
    }

    /// `transition` declaration for switching between two states
    pub fn transition_css(&self) -> String {
        let t = &self.transition;
        let timing = format!(
            "{}ms {} {}ms",
            t.duration.as_millis(),
            t.easing.to_css(),
            t.delay.as_millis()
        );
        format!("transition: opacity {timing}, transform {timing};")
    }
}

/// Shortest CSS-friendly rendering of a number, rounded to 3 decimals
pub(crate) fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}
