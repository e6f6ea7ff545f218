use gloo_timers::callback::Interval;

/// Runs a task on a fixed period until the returned handle is dropped.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser timers via `setInterval`. Dropping the `Interval` clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, task)
    }
}
