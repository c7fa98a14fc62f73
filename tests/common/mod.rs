//! Shared test utilities for driving carousels on simulated time.

#![allow(dead_code, unused_imports)]

pub mod timers;

use parking_lot::Mutex;
use showreel::config::Config;
use showreel::rotation::{CarouselId, RotationController, SignalBus, TimerScheduler};
use showreel::ui::app::{App, SchedulerFactory};
use showreel::ui::page::Page;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use timers::{ManualClock, RecordingScheduler, TimerEvent};

pub const STEP: Duration = Duration::from_millis(100);
pub const TEST_CAROUSEL: CarouselId = CarouselId("test");

/// One controller wired to a manual clock and a recording scheduler.
pub struct Rig {
    pub clock: ManualClock,
    pub timers: RecordingScheduler,
    pub bus: SignalBus,
    pub controller: RotationController,
}

impl Rig {
    pub fn new(slides: usize, interval_ms: u64) -> Self {
        Self::with_suppression(slides, interval_ms, 8000)
    }

    pub fn with_suppression(slides: usize, interval_ms: u64, suppression_ms: u64) -> Self {
        let clock = ManualClock::new();
        let timers = RecordingScheduler::new(clock.clone());
        let mut bus = SignalBus::new();
        let mut controller = RotationController::new(
            TEST_CAROUSEL,
            Arc::new(clock.clone()),
            Box::new(timers.clone()),
        )
        .with_suppression(ms(suppression_ms));
        controller.mount(&mut bus);
        controller
            .initialize(slides, ms(interval_ms))
            .expect("interval is non-zero");
        Self {
            clock,
            timers,
            bus,
            controller,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.controller.state().active_index
    }

    /// Let `total` simulated time pass, firing timers as their deadlines
    /// come due.
    pub fn elapse(&mut self, total: Duration) {
        let mut passed = Duration::ZERO;
        while passed < total {
            let step = STEP.min(total - passed);
            self.clock.advance(step);
            passed += step;
            self.fire_due();
        }
    }

    pub fn elapse_ms(&mut self, millis: u64) {
        self.elapse(ms(millis));
    }

    pub fn fire_due(&mut self) {
        for timer in self.timers.take_due() {
            self.controller.on_timer(timer);
        }
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Checks that no two timers were ever pending together, and that every
/// reschedule while a timer was still pending cancelled it first.
pub fn assert_single_timer(timers: &RecordingScheduler) {
    assert!(
        timers.max_outstanding() <= 1,
        "saw {} timers pending at once",
        timers.max_outstanding()
    );
    let events = timers.events();
    for pair in events.windows(2) {
        if let [TimerEvent::Scheduled { timer: first, .. }, TimerEvent::Scheduled { .. }] = pair {
            // Back-to-back schedules are only legal when the first one fired.
            let cancelled_later = events
                .iter()
                .any(|e| matches!(e, TimerEvent::Cancelled { timer } if timer == first));
            assert!(
                !cancelled_later,
                "timer {first:?} was replaced without a cancel"
            );
        }
    }
}

/// Per-carousel recording schedulers handed out by an [`App`] under test.
pub type TimerRegistry = Arc<Mutex<HashMap<CarouselId, Vec<RecordingScheduler>>>>;

pub fn recording_schedulers(clock: ManualClock) -> (SchedulerFactory, TimerRegistry) {
    let registry: TimerRegistry = Arc::new(Mutex::new(HashMap::new()));
    let handle = Arc::clone(&registry);
    let factory: SchedulerFactory = Box::new(move |carousel| {
        let scheduler = RecordingScheduler::new(clock.clone());
        handle
            .lock()
            .entry(carousel)
            .or_default()
            .push(scheduler.clone());
        Box::new(scheduler) as Box<dyn TimerScheduler>
    });
    (factory, registry)
}

/// App on the Home page, sized like a typical terminal, driven by a manual
/// clock.
pub fn home_app() -> (App, ManualClock, TimerRegistry) {
    home_app_with(Config::default())
}

pub fn home_app_with(config: Config) -> (App, ManualClock, TimerRegistry) {
    let clock = ManualClock::new();
    let (factory, registry) = recording_schedulers(clock.clone());
    let mut app = App::new(config, Arc::new(clock.clone()), factory);
    app.on_resize(120, 40);
    app.set_page(Page::Home);
    (app, clock, registry)
}

/// Most recent scheduler created for `carousel`.
pub fn latest_timers(registry: &TimerRegistry, carousel: CarouselId) -> RecordingScheduler {
    registry
        .lock()
        .get(&carousel)
        .and_then(|list| list.last().cloned())
        .expect("carousel was mounted")
}

pub fn mounts(registry: &TimerRegistry, carousel: CarouselId) -> usize {
    registry.lock().get(&carousel).map_or(0, Vec::len)
}

/// Advance the clock and deliver due timers to every mounted carousel.
pub fn elapse_app(app: &mut App, clock: &ManualClock, registry: &TimerRegistry, total: Duration) {
    let mut passed = Duration::ZERO;
    while passed < total {
        let step = STEP.min(total - passed);
        clock.advance(step);
        passed += step;
        let schedulers: Vec<(CarouselId, RecordingScheduler)> = registry
            .lock()
            .iter()
            .filter_map(|(id, list)| list.last().cloned().map(|s| (*id, s)))
            .collect();
        for (id, scheduler) in schedulers {
            for timer in scheduler.take_due() {
                app.on_timer(id, timer);
            }
        }
    }
}
