//! Reactive state storage for the QR Smith UI.
//!
//! The context owns every piece of application state, keyed by type. Widgets
//! mutate state synchronously on the UI thread; background recomputations
//! publish replacement values through [`Updater`] handles and become visible
//! on the next [`StateCtx::sync_computes`] call. Each handle is stamped with
//! a monotonically increasing sequence number, so when several
//! recomputations of the same state race, only the most recently requested
//! one is ever applied.

mod compute;
mod ctx;
mod state;
mod update;

pub use compute::{Compute, ComputeStage};
pub use ctx::StateCtx;
pub use state::State;
pub use update::Updater;
