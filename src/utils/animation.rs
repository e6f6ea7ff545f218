use std::cell::Cell;
use std::rc::Rc;

use super::scheduler::Scheduler;
use crate::config::Config;
use crate::models::{placeholder::generate, series::Value};

type Regenerate = Rc<dyn Fn(Vec<Value>)>;

/// Whether a graph is showing synthetic or real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    Loaded,
}

/// A running placeholder loop. Dropping it cancels the underlying timer.
pub struct PlaceholderTimer<S: Scheduler> {
    _handle: S::Handle,
    iteration: Rc<Cell<u32>>,
}

impl<S: Scheduler> PlaceholderTimer<S> {
    /// Schedules a regeneration of `count` samples every tick, counting
    /// iterations up from zero.
    pub fn start(scheduler: &S, count: usize, on_regenerate: Regenerate) -> Self {
        let iteration = Rc::new(Cell::new(0_u32));
        let handle = {
            let iteration = iteration.clone();
            scheduler.every(
                Config::PLACEHOLDER_INTERVAL_MS,
                Box::new(move || {
                    let next = iteration.get().wrapping_add(1);
                    iteration.set(next);
                    on_regenerate(generate(next, count));
                }),
            )
        };

        Self {
            _handle: handle,
            iteration,
        }
    }

    /// Number of ticks fired so far.
    pub fn iteration(&self) -> u32 {
        self.iteration.get()
    }
}

/// Per-graph loading animation.
///
/// Starts in [`LoadingPhase::Loading`] so the first frame is always
/// synthetic. The timer only runs while the query reports loading.
pub struct PlaceholderAnimation<S: Scheduler> {
    scheduler: S,
    limit: usize,
    phase: LoadingPhase,
    timer: Option<PlaceholderTimer<S>>,
    on_regenerate: Regenerate,
}

impl<S: Scheduler> PlaceholderAnimation<S> {
    pub fn new(scheduler: S, limit: usize, on_regenerate: impl Fn(Vec<Value>) + 'static) -> Self {
        Self {
            scheduler,
            limit,
            phase: LoadingPhase::Loading,
            timer: None,
            on_regenerate: Rc::new(on_regenerate),
        }
    }

    pub const fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub const fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Ticks fired since the animation last (re)started.
    pub fn iteration(&self) -> Option<u32> {
        self.timer.as_ref().map(PlaceholderTimer::iteration)
    }

    /// Reconciles with the query's loading flag.
    ///
    /// Entering loading (or resizing while loading) emits a fresh series at
    /// iteration zero and restarts the timer; leaving it cancels the timer.
    pub fn update(&mut self, is_loading: bool, limit: usize) {
        let resized = limit != self.limit;
        self.limit = limit;

        if !is_loading {
            self.stop();
        } else if self.timer.is_none() || resized {
            self.restart();
        }
    }

    /// Cancels any pending regeneration.
    pub fn stop(&mut self) {
        self.timer = None;
        self.phase = LoadingPhase::Loaded;
    }

    fn restart(&mut self) {
        self.timer = None;
        (self.on_regenerate)(generate(0, self.limit));
        self.timer = Some(PlaceholderTimer::start(
            &self.scheduler,
            self.limit,
            self.on_regenerate.clone(),
        ));
        self.phase = LoadingPhase::Loading;
    }
}
