use std::any::Any;

/// Marker for values owned by a [`StateCtx`](crate::StateCtx).
///
/// States are keyed by their `TypeId`, so the context holds at most one value
/// of each implementing type. `Send` is required because asynchronous
/// completions carry replacement values back from worker threads.
pub trait State: Any + Send {}
