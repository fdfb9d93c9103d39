use crate::{State, StateCtx, Updater};

/// Progress of a [`Compute`] invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeStage {
    /// The compute published its result synchronously, or had nothing to do.
    Finished,
    /// An asynchronous completion will publish through the updater later.
    Pending,
}

/// A recomputation that derives one state value from others.
///
/// Computes are owned by the application, not by the context: the app loop
/// decides when to run them (typically when an input state was marked dirty)
/// via [`StateCtx::run_compute`], which hands the compute a fresh
/// [`Updater`] for its output type. Long-running work must happen off the UI
/// thread and publish through the updater when done.
pub trait Compute {
    type Output: State;

    fn compute(&mut self, ctx: &StateCtx, updater: Updater<Self::Output>) -> ComputeStage;
}
