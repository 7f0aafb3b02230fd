//! Reveal-on-scroll latch and controller
//!
//! Every revealable block owns one [`RevealController`]. The controller keeps a
//! one-shot [`RevealLatch`] (Resting -> Revealed, never back) and manages the
//! lifetime of a [`ViewportObserver`] subscription for the mounted element.
//!
//! The observer backend is a trait so the browser's `IntersectionObserver`
//! can be swapped for a scripted one in tests.

use crate::core::error::{MotionError, ObserverError};

/// Minimum fraction of an element's area that must be inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// 10% of the element visible
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(value: f64) -> Result<Self, MotionError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MotionError::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = MotionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One intersection measurement delivered by the observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    /// Fraction of the element inside the viewport, in [0, 1]
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        Self {
            ratio,
            is_intersecting,
        }
    }

    /// Sample derived from a ratio alone; any positive ratio intersects
    pub fn from_ratio(ratio: f64) -> Self {
        Self::new(ratio, ratio > 0.0)
    }

    pub fn satisfies(&self, threshold: Threshold) -> bool {
        self.is_intersecting && self.ratio >= threshold.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Resting,
    /// Terminal
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// One-shot visibility latch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: Threshold,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: RevealState::Resting,
        }
    }

    /// Feed a sample. Returns `true` only for the sample that latches.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.state.is_revealed() || !sample.satisfies(self.threshold) {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }

    /// Latch without a sample, used when observation is unavailable
    pub fn fail_open(&mut self) -> bool {
        let changed = !self.state.is_revealed();
        self.state = RevealState::Revealed;
        changed
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}

/// Backend that reports viewport intersections for one element
///
/// Samples are delivered out of band (for the browser, from the
/// `IntersectionObserver` callback) to [`RevealController::record`].
pub trait ViewportObserver {
    /// Start observing. Calling it on an already observing backend must not
    /// create a second subscription.
    fn observe(&mut self, threshold: Threshold) -> Result<(), ObserverError>;

    /// Stop delivering samples. Safe to call more than once.
    fn disconnect(&mut self);
}

/// Result of attaching a controller to a mounted element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    /// Subscribed; waiting for the element to scroll into view
    Observing,
    /// Revealed earlier, nothing subscribed
    AlreadyRevealed,
    /// The backend refused to observe and the element was revealed instead
    FailedOpen(ObserverError),
}

impl MountOutcome {
    pub fn state(&self) -> RevealState {
        match self {
            MountOutcome::Observing => RevealState::Resting,
            MountOutcome::AlreadyRevealed | MountOutcome::FailedOpen(_) => RevealState::Revealed,
        }
    }
}

/// Couples a [`RevealLatch`] with the observer of the currently mounted element
pub struct RevealController<O: ViewportObserver> {
    latch: RevealLatch,
    observer: Option<O>,
}

impl<O: ViewportObserver> RevealController<O> {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            latch: RevealLatch::new(threshold),
            observer: None,
        }
    }

    /// Attach to a freshly mounted element.
    ///
    /// Any previous observer is released first. Nothing is subscribed if the
    /// element is already revealed. If the backend refuses to observe, the
    /// latch fails open so the element is never stuck invisible; reporting
    /// that is left to the caller.
    pub fn mount(&mut self, mut observer: O) -> MountOutcome {
        self.unmount();

        if self.latch.state().is_revealed() {
            return MountOutcome::AlreadyRevealed;
        }

        match observer.observe(self.latch.threshold()) {
            Ok(()) => {
                self.observer = Some(observer);
                MountOutcome::Observing
            }
            Err(err) => {
                self.latch.fail_open();
                MountOutcome::FailedOpen(err)
            }
        }
    }

    /// Feed an intersection sample; returns `true` when this sample revealed
    /// the element. The observer is disconnected once latched.
    pub fn record(&mut self, sample: IntersectionSample) -> bool {
        let latched = self.latch.observe(sample);
        if latched {
            if let Some(observer) = self.observer.as_mut() {
                observer.disconnect();
            }
        }
        latched
    }

    /// Release the observer of the unmounted element
    pub fn unmount(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }

    pub fn state(&self) -> RevealState {
        self.latch.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_some()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Observer that counts live subscriptions across every instance sharing `live`
    pub struct CountingObserver {
        pub live: Rc<Cell<usize>>,
        pub supported: bool,
        observing: bool,
    }

    impl CountingObserver {
        pub fn new(live: &Rc<Cell<usize>>) -> Self {
            Self {
                live: live.clone(),
                supported: true,
                observing: false,
            }
        }

        pub fn unsupported(live: &Rc<Cell<usize>>) -> Self {
            Self {
                supported: false,
                ..Self::new(live)
            }
        }
    }

    impl ViewportObserver for CountingObserver {
        fn observe(&mut self, _threshold: Threshold) -> Result<(), ObserverError> {
            if !self.supported {
                return Err(ObserverError::Unsupported("test backend".to_string()));
            }
            if !self.observing {
                self.observing = true;
                self.live.set(self.live.get() + 1);
            }
            Ok(())
        }

        fn disconnect(&mut self) {
            if self.observing {
                self.observing = false;
                self.live.set(self.live.get() - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingObserver;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_threshold_bounds() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(
            Threshold::new(1.5),
            Err(MotionError::InvalidThreshold(1.5))
        );
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::default().value(), 0.1);
    }

    #[test]
    fn test_sample_satisfies_threshold() {
        let threshold = Threshold::DEFAULT;
        assert!(!IntersectionSample::from_ratio(0.05).satisfies(threshold));
        assert!(IntersectionSample::from_ratio(0.1).satisfies(threshold));
        assert!(IntersectionSample::from_ratio(0.15).satisfies(threshold));
        assert!(!IntersectionSample::new(0.5, false).satisfies(threshold));
    }

    #[test]
    fn test_zero_threshold_needs_intersection() {
        let zero = Threshold::new(0.0).unwrap();
        assert!(!IntersectionSample::from_ratio(0.0).satisfies(zero));
        assert!(IntersectionSample::new(0.0, true).satisfies(zero));
    }

    #[test]
    fn test_latch_starts_resting() {
        let latch = RevealLatch::new(Threshold::DEFAULT);
        assert_eq!(latch.state(), RevealState::Resting);
    }

    #[test]
    fn test_latch_fires_exactly_once() {
        let mut latch = RevealLatch::new(Threshold::DEFAULT);
        assert!(latch.observe(IntersectionSample::from_ratio(0.2)));
        assert!(!latch.observe(IntersectionSample::from_ratio(0.9)));
        assert!(!latch.observe(IntersectionSample::from_ratio(0.0)));
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn test_fail_open_reveals() {
        let mut latch = RevealLatch::new(Threshold::DEFAULT);
        assert!(latch.fail_open());
        assert!(!latch.fail_open());
        assert!(latch.state().is_revealed());
    }

    #[test]
    fn test_mount_subscribes_once() {
        let live = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::DEFAULT);

        assert_eq!(controller.mount(CountingObserver::new(&live)), MountOutcome::Observing);
        assert_eq!(live.get(), 1);
        assert!(controller.is_mounted());

        // Re-mount without unmount replaces the subscription
        controller.mount(CountingObserver::new(&live));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn test_mount_unmount_twice_leaves_no_subscriptions() {
        let live = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::DEFAULT);

        for _ in 0..2 {
            controller.mount(CountingObserver::new(&live));
            assert_eq!(live.get(), 1);
            controller.unmount();
            assert_eq!(live.get(), 0);
        }
        controller.unmount();
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_record_disconnects_after_reveal() {
        let live = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::DEFAULT);
        controller.mount(CountingObserver::new(&live));

        assert!(!controller.record(IntersectionSample::from_ratio(0.05)));
        assert_eq!(live.get(), 1);

        assert!(controller.record(IntersectionSample::from_ratio(0.15)));
        assert_eq!(live.get(), 0);
        assert!(!controller.record(IntersectionSample::from_ratio(0.15)));
    }

    #[test]
    fn test_revealed_controller_does_not_resubscribe() {
        let live = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::DEFAULT);
        controller.mount(CountingObserver::new(&live));
        controller.record(IntersectionSample::from_ratio(1.0));
        controller.unmount();

        let outcome = controller.mount(CountingObserver::new(&live));
        assert_eq!(outcome, MountOutcome::AlreadyRevealed);
        assert_eq!(outcome.state(), RevealState::Revealed);
        assert_eq!(live.get(), 0);
        assert!(!controller.is_mounted());
    }

    #[test]
    fn test_unsupported_observer_fails_open() {
        let live = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::DEFAULT);

        let outcome = controller.mount(CountingObserver::unsupported(&live));

        assert_eq!(
            outcome,
            MountOutcome::FailedOpen(ObserverError::Unsupported("test backend".to_string()))
        );
        assert_eq!(outcome.state(), RevealState::Revealed);
        assert_eq!(controller.state(), RevealState::Revealed);
        assert_eq!(live.get(), 0);
        assert!(!controller.is_mounted());
    }
}
