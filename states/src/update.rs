use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;

use flume::Sender;

use crate::State;

/// A completed state value travelling back to its [`StateCtx`](crate::StateCtx).
pub(crate) struct Envelope {
    pub(crate) type_id: TypeId,
    pub(crate) seq: u64,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Write handle for publishing a recomputed state value.
///
/// Each handle carries the sequence number it was issued with. The context
/// applies a published value only while that number is still the latest one
/// issued for `T`, so a slow completion can never overwrite a newer result.
pub struct Updater<T: State> {
    seq: u64,
    send: Sender<Envelope>,
    _marker: PhantomData<fn(T)>,
}

impl<T: State> Updater<T> {
    pub(crate) fn new(seq: u64, send: Sender<Envelope>) -> Self {
        Self {
            seq,
            send,
            _marker: PhantomData,
        }
    }

    /// The sequence number this handle publishes under.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Publish a new value for `T`.
    ///
    /// The value lands on the next [`StateCtx::sync_computes`] call. A closed
    /// channel means the context itself is gone; the value is dropped.
    ///
    /// [`StateCtx::sync_computes`]: crate::StateCtx::sync_computes
    pub fn set(&self, value: T) {
        let envelope = Envelope {
            type_id: TypeId::of::<T>(),
            seq: self.seq,
            value: Box::new(value),
        };
        if self.send.send(envelope).is_err() {
            log::debug!(
                "state context dropped before update for {} arrived",
                type_name::<T>()
            );
        }
    }
}

impl<T: State> Clone for Updater<T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            send: self.send.clone(),
            _marker: PhantomData,
        }
    }
}
