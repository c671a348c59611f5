//! Step observer trait for monitoring rope and cloth ticks.

/// Trait for observing simulation ticks.
///
/// Implement this to monitor progress (debugging, visualization, profiling).
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after gravity and carried velocity have been applied.
    fn on_forcing(&mut self) {}

    /// Called after each rope relaxation pass, or the single cloth spring pass.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called after cloth points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a rope or cloth tick is fully complete.
    fn on_step_complete(&mut self) {}

    /// Called by the registry after it ticks the rope in `slot`.
    fn on_rope_ticked(&mut self, _slot: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards every hook to `log::trace!` under the `drape::step` target.
#[derive(Default)]
pub struct LogStepObserver {
    ticks: usize,
}

impl LogStepObserver {
    pub fn new() -> Self {
        LogStepObserver { ticks: 0 }
    }

    /// Completed ticks seen so far.
    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

impl StepObserver for LogStepObserver {
    fn on_forcing(&mut self) {
        log::trace!(target: "drape::step", "tick {}: forcing applied", self.ticks);
    }

    fn on_relaxation_pass(&mut self, pass: usize) {
        log::trace!(target: "drape::step", "tick {}: relaxation pass {}", self.ticks, pass);
    }

    fn on_integrate(&mut self) {
        log::trace!(target: "drape::step", "tick {}: integrated", self.ticks);
    }

    fn on_step_complete(&mut self) {
        log::trace!(target: "drape::step", "tick {} complete", self.ticks);
        self.ticks += 1;
    }

    fn on_rope_ticked(&mut self, slot: usize) {
        log::trace!(target: "drape::step", "rope slot {} ticked", slot);
    }
}
