//! Fire-once scroll reveal.
//!
//! A [`RevealTracker`] watches one region of the page through a
//! [`ViewportObserver`] and latches from [`RevealState::Hidden`] to
//! [`RevealState::Visible`] the first time the region overlaps the viewport.
//! Once visible it stops observing and never goes back.
//!
//! The observer is a seam: the browser build plugs in an intersection
//! observer, tests plug in a fake that fires on demand.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use thiserror::Error;

/// Inline style for a revealed region.
const VISIBLE_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease-out, transform 0.6s ease-out;";
/// Inline style for a region still waiting to be revealed.
const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(50px); transition: opacity 0.6s ease-out, transform 0.6s ease-out;";

/// Fade/slide style for a region, given whether it has been revealed.
pub fn reveal_style(visible: bool) -> &'static str {
    if visible {
        VISIBLE_STYLE
    } else {
        HIDDEN_STYLE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// State after an intersection notification. `Visible` is terminal.
    pub fn on_intersection(self, intersecting: bool) -> Self {
        match self {
            Self::Hidden if intersecting => Self::Visible,
            state => state,
        }
    }
}

/// What a tracker does when the host cannot observe the viewport at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegradePolicy {
    /// Show the region right away.
    #[default]
    Reveal,
    /// Leave the region hidden; the page must reveal it some other way.
    Hold,
}

impl DegradePolicy {
    fn fallback_state(self) -> RevealState {
        match self {
            Self::Reveal => RevealState::Visible,
            Self::Hold => RevealState::Hidden,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserveError {
    #[error("viewport observation is not supported by this host")]
    Unsupported,
    #[error("tracker is already attached to a region")]
    AlreadyAttached,
}

/// Called with `true` whenever the observed region has a non-zero
/// intersection with the viewport, `false` otherwise.
pub type IntersectCallback = Box<dyn FnMut(bool)>;

/// Host facility that reports when a region enters the viewport.
pub trait ViewportObserver {
    type Region;

    /// Start observing `region`. The callback may fire before this returns
    /// when the region is already in view. Dropping the returned
    /// [`Observation`] stops the callbacks.
    fn observe(
        &self,
        region: &Self::Region,
        on_intersect: IntersectCallback,
    ) -> Result<Observation, ObserveError>;

    /// Run `task` once the host is ready to apply state changes. Hosts that
    /// render before they can react to them (e.g. while hydrating) should
    /// postpone it.
    fn defer(&self, task: Box<dyn FnOnce()>) {
        task();
    }
}

/// A live observation registration. Released exactly once, either through
/// [`Observation::cancel`] or on drop.
pub struct Observation {
    release: Option<Box<dyn FnOnce()>>,
}

impl Observation {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Stop observing. Calling this again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("active", &self.is_active())
            .finish()
    }
}

type Listener = Box<dyn Fn(RevealState)>;

#[derive(Default)]
struct Latch {
    state: Cell<RevealState>,
    // true from attach until the latch fires or the tracker detaches
    active: Cell<bool>,
    observation: RefCell<Option<Observation>>,
    listener: RefCell<Option<Listener>>,
}

impl Latch {
    fn on_intersection(&self, intersecting: bool) {
        if !self.active.get() {
            return;
        }
        let next = self.state.get().on_intersection(intersecting);
        if next != self.state.get() {
            log::debug!("region entered viewport, revealing");
            self.settle(next);
        }
    }

    fn settle(&self, state: RevealState) {
        self.active.set(false);
        self.state.set(state);
        self.release();
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(state);
        }
    }

    fn fall_back(&self, policy: DegradePolicy) {
        if !self.active.get() {
            return;
        }
        match policy.fallback_state() {
            RevealState::Visible => self.settle(RevealState::Visible),
            RevealState::Hidden => self.active.set(false),
        }
    }

    fn release(&self) {
        // take it out first: cancelling may run host code that calls back in
        let observation = self.observation.borrow_mut().take();
        drop(observation);
    }
}

/// One fire-once reveal latch bound to a single region.
pub struct RevealTracker<O: ViewportObserver> {
    observer: O,
    policy: DegradePolicy,
    latch: Rc<Latch>,
    attached: bool,
}

impl<O: ViewportObserver> RevealTracker<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            policy: DegradePolicy::default(),
            latch: Rc::new(Latch::default()),
            attached: false,
        }
    }

    pub fn with_policy(mut self, policy: DegradePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a listener run once, when the tracker settles on a state
    /// other than the initial one. Replaces any earlier listener.
    pub fn on_change(self, listener: impl Fn(RevealState) + 'static) -> Self {
        *self.latch.listener.borrow_mut() = Some(Box::new(listener));
        self
    }

    /// Start observing `region`. Only the first call registers anything.
    pub fn attach(&mut self, region: &O::Region) -> Result<(), ObserveError> {
        if self.attached {
            return Err(ObserveError::AlreadyAttached);
        }
        self.attached = true;
        self.latch.active.set(true);

        let latch = Rc::downgrade(&self.latch);
        let on_intersect: IntersectCallback = Box::new(move |intersecting| {
            if let Some(latch) = latch.upgrade() {
                latch.on_intersection(intersecting);
            }
        });

        match self.observer.observe(region, on_intersect) {
            // dropping the observation releases it if the latch already fired
            Ok(observation) if self.latch.active.get() => {
                *self.latch.observation.borrow_mut() = Some(observation);
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(ObserveError::Unsupported) => {
                log::warn!(
                    "viewport observation unsupported, falling back to {:?}",
                    self.policy
                );
                let latch = Rc::downgrade(&self.latch);
                let policy = self.policy;
                self.observer.defer(Box::new(move || {
                    if let Some(latch) = latch.upgrade() {
                        latch.fall_back(policy);
                    }
                }));
                Ok(())
            }
            Err(err) => {
                self.latch.active.set(false);
                Err(err)
            }
        }
    }

    pub fn state(&self) -> RevealState {
        self.latch.state.get()
    }

    pub fn is_visible(&self) -> bool {
        self.state().is_visible()
    }

    /// Whether an observation registration is currently held.
    pub fn is_observing(&self) -> bool {
        self.latch.observation.borrow().is_some()
    }

    /// Stop observing. Safe to call any number of times, before or after
    /// the latch fires. The current state is kept.
    pub fn detach(&mut self) {
        self.latch.active.set(false);
        self.latch.release();
    }
}

impl<O: ViewportObserver> Drop for RevealTracker<O> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<O: ViewportObserver> fmt::Debug for RevealTracker<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealTracker")
            .field("state", &self.state())
            .field("policy", &self.policy)
            .field("attached", &self.attached)
            .field("observing", &self.is_observing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    type Region = u32;

    #[derive(Default)]
    struct FakeHost {
        // registered regions; the callback slot is empty while it runs
        slots: RefCell<HashMap<Region, Option<IntersectCallback>>>,
        in_view: RefCell<HashSet<Region>>,
        deferred: RefCell<Vec<Box<dyn FnOnce()>>>,
        unsupported: bool,
    }

    /// Viewport stand-in that fires callbacks on demand and counts live
    /// registrations.
    #[derive(Clone, Default)]
    struct FakeViewport {
        host: Rc<FakeHost>,
    }

    impl FakeViewport {
        fn unsupported() -> Self {
            Self {
                host: Rc::new(FakeHost {
                    unsupported: true,
                    ..Default::default()
                }),
            }
        }

        fn live(&self) -> usize {
            self.host.slots.borrow().len()
        }

        /// Run everything postponed through `defer`, like a host's next frame.
        fn run_deferred(&self) {
            let tasks = self.host.deferred.take();
            for task in tasks {
                task();
            }
        }

        fn place_in_view(&self, region: Region) {
            self.host.in_view.borrow_mut().insert(region);
        }

        /// Deliver one intersection notification to `region`'s observer.
        fn notify(&self, region: Region, intersecting: bool) {
            let callback = self
                .host
                .slots
                .borrow_mut()
                .get_mut(&region)
                .and_then(Option::take);
            let Some(mut callback) = callback else {
                return;
            };
            callback(intersecting);
            if let Some(slot) = self.host.slots.borrow_mut().get_mut(&region) {
                *slot = Some(callback);
            }
        }
    }

    impl ViewportObserver for FakeViewport {
        type Region = Region;

        fn observe(
            &self,
            region: &Region,
            mut on_intersect: IntersectCallback,
        ) -> Result<Observation, ObserveError> {
            if self.host.unsupported {
                return Err(ObserveError::Unsupported);
            }
            let region = *region;
            if self.host.in_view.borrow().contains(&region) {
                on_intersect(true);
            }
            self.host
                .slots
                .borrow_mut()
                .insert(region, Some(on_intersect));
            let host = Rc::clone(&self.host);
            Ok(Observation::new(move || {
                host.slots.borrow_mut().remove(&region);
            }))
        }

        fn defer(&self, task: Box<dyn FnOnce()>) {
            self.host.deferred.borrow_mut().push(task);
        }
    }

    fn attached(viewport: &FakeViewport, region: Region) -> RevealTracker<FakeViewport> {
        let mut tracker = RevealTracker::new(viewport.clone());
        tracker.attach(&region).expect("attach should succeed");
        tracker
    }

    #[test]
    fn test_hidden_after_attach() {
        let viewport = FakeViewport::default();
        let tracker = attached(&viewport, 1);

        assert!(!tracker.is_visible());
        assert_eq!(tracker.state(), RevealState::Hidden);
        assert!(tracker.is_observing());
        assert_eq!(viewport.live(), 1);
    }

    #[test]
    fn test_intersection_latches_visible() {
        let viewport = FakeViewport::default();
        let tracker = attached(&viewport, 1);

        viewport.notify(1, true);
        assert!(tracker.is_visible());
        // observation is dropped as soon as the latch fires
        assert!(!tracker.is_observing());
        assert_eq!(viewport.live(), 0);

        // scrolling away again changes nothing
        viewport.notify(1, false);
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_non_intersecting_notification_keeps_hidden() {
        let viewport = FakeViewport::default();
        let tracker = attached(&viewport, 1);

        viewport.notify(1, false);
        assert!(!tracker.is_visible());
        assert!(tracker.is_observing());
    }

    #[test]
    fn test_already_in_view_reveals_on_attach() {
        let viewport = FakeViewport::default();
        viewport.place_in_view(7);
        let tracker = attached(&viewport, 7);

        assert!(tracker.is_visible());
        assert!(!tracker.is_observing());
        assert_eq!(viewport.live(), 0);
    }

    #[test]
    fn test_independent_trackers() {
        let viewport = FakeViewport::default();
        let about = attached(&viewport, 1);
        let projects = attached(&viewport, 2);
        let resume = attached(&viewport, 3);
        assert_eq!(viewport.live(), 3);

        viewport.notify(2, true);
        assert!(!about.is_visible());
        assert!(projects.is_visible());
        assert!(!resume.is_visible());
        assert_eq!(viewport.live(), 2);

        viewport.notify(3, true);
        assert!(!about.is_visible());
        assert!(resume.is_visible());
    }

    #[test]
    fn test_teardown_before_intersection_releases_observation() {
        let viewport = FakeViewport::default();
        let tracker = attached(&viewport, 1);
        assert_eq!(viewport.live(), 1);

        drop(tracker);
        assert_eq!(viewport.live(), 0);
        // a late notification for the torn down region is harmless
        viewport.notify(1, true);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let viewport = FakeViewport::default();
        let mut tracker = attached(&viewport, 1);

        tracker.detach();
        tracker.detach();
        assert_eq!(viewport.live(), 0);
        assert!(!tracker.is_visible());

        let mut revealed = attached(&viewport, 2);
        viewport.notify(2, true);
        revealed.detach();
        assert!(revealed.is_visible());
        assert_eq!(viewport.live(), 0);
    }

    #[test]
    fn test_never_intersecting_stays_hidden() {
        let viewport = FakeViewport::default();
        let tracker = attached(&viewport, 1);

        // two seconds of frames at ~60fps with the region off screen
        for _ in 0..(2_000 / 16) {
            viewport.notify(1, false);
        }
        assert!(!tracker.is_visible());
        assert!(tracker.is_observing());
        assert_eq!(viewport.live(), 1);
    }

    #[test]
    fn test_second_attach_rejected() {
        let viewport = FakeViewport::default();
        let mut tracker = attached(&viewport, 1);

        assert_eq!(tracker.attach(&2), Err(ObserveError::AlreadyAttached));
        assert_eq!(viewport.live(), 1);

        viewport.notify(1, true);
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_unsupported_host_degrades() {
        let viewport = FakeViewport::unsupported();
        let mut revealing = RevealTracker::new(viewport.clone());
        assert_eq!(revealing.attach(&1), Ok(()));
        viewport.run_deferred();
        assert!(revealing.is_visible());
        assert!(!revealing.is_observing());

        let mut holding = RevealTracker::new(viewport.clone()).with_policy(DegradePolicy::Hold);
        assert_eq!(holding.attach(&1), Ok(()));
        viewport.run_deferred();
        assert!(!holding.is_visible());
        assert!(!holding.is_observing());
    }

    #[test]
    fn test_fallback_reveal_waits_for_host() {
        let viewport = FakeViewport::unsupported();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut tracker =
            RevealTracker::new(viewport.clone()).on_change(move |_| seen.set(seen.get() + 1));

        tracker.attach(&1).expect("attach should succeed");
        // nothing changes while the page is still being set up
        assert_eq!(calls.get(), 0);
        assert!(!tracker.is_visible());

        viewport.run_deferred();
        assert_eq!(calls.get(), 1);
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_fallback_skipped_after_teardown() {
        let viewport = FakeViewport::unsupported();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut tracker =
            RevealTracker::new(viewport.clone()).on_change(move |_| seen.set(seen.get() + 1));
        tracker.attach(&1).expect("attach should succeed");

        tracker.detach();
        viewport.run_deferred();
        assert_eq!(calls.get(), 0);
        assert!(!tracker.is_visible());

        drop(tracker);
        let mut dropped = RevealTracker::new(viewport.clone());
        dropped.attach(&2).expect("attach should succeed");
        drop(dropped);
        viewport.run_deferred();
    }

    #[test]
    fn test_listener_set_after_attach() {
        let viewport = FakeViewport::default();
        let mut tracker = RevealTracker::new(viewport.clone());
        tracker.attach(&1).expect("attach should succeed");

        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let tracker = tracker.on_change(move |_| seen.set(seen.get() + 1));

        viewport.notify(1, true);
        assert_eq!(calls.get(), 1);
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_listener_runs_once_on_reveal() {
        let viewport = FakeViewport::default();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut tracker = RevealTracker::new(viewport.clone()).on_change(move |state| {
            assert_eq!(state, RevealState::Visible);
            seen.set(seen.get() + 1);
        });
        tracker.attach(&1).expect("attach should succeed");

        viewport.notify(1, false);
        assert_eq!(calls.get(), 0);
        viewport.notify(1, true);
        viewport.notify(1, true);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_observation_cancel_runs_once() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let mut observation = Observation::new(move || counter.set(counter.get() + 1));

        assert!(observation.is_active());
        observation.cancel();
        observation.cancel();
        assert!(!observation.is_active());
        drop(observation);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_reveal_style() {
        assert!(reveal_style(false).contains("opacity: 0"));
        assert!(reveal_style(false).contains("translateY(50px)"));
        assert!(reveal_style(true).contains("opacity: 1"));
        assert!(reveal_style(true).contains("translateY(0)"));
        assert!(reveal_style(true).contains("transition: opacity 0.6s ease-out"));
    }
}
