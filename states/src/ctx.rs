use std::any::{Any, TypeId, type_name};
use std::collections::{HashMap, HashSet};

use flume::{Receiver, Sender};

use crate::update::Envelope;
use crate::{Compute, ComputeStage, State, Updater};

/// Owner of all application state.
///
/// The context is mutated only from the UI thread: widgets read and commit
/// values through `&self`/`&mut self` methods, and asynchronous work talks
/// back through [`Updater`] handles over an internal channel. Draining that
/// channel with [`StateCtx::sync_computes`] is the only point where async
/// results become visible, which is where stale completions are filtered out.
pub struct StateCtx {
    storage: HashMap<TypeId, Box<dyn Any>>,
    /// Latest update sequence number issued per state type.
    issued: HashMap<TypeId, u64>,
    dirty: HashSet<TypeId>,
    send: Sender<Envelope>,
    recv: Receiver<Envelope>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            storage: HashMap::new(),
            issued: HashMap::new(),
            dirty: HashSet::new(),
            send,
            recv,
        }
    }

    /// Register a state value, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Read the current value of `T`, if registered.
    pub fn state<T: State>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Mutate `T` in place on the UI thread.
    ///
    /// Returns `false` when `T` was never registered.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self
            .storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
        {
            Some(state) => {
                f(state);
                true
            }
            None => {
                log::warn!("update on unregistered state {}", type_name::<T>());
                false
            }
        }
    }

    /// Flag `T` so the app loop reruns the compute that depends on it.
    pub fn mark_dirty<T: State>(&mut self) {
        self.dirty.insert(TypeId::of::<T>());
    }

    /// Consume the dirty flag for `T`.
    pub fn take_dirty<T: State>(&mut self) -> bool {
        self.dirty.remove(&TypeId::of::<T>())
    }

    /// Issue a fresh write handle for `T`.
    ///
    /// Issuing bumps the latest sequence number for `T`, which retires every
    /// previously issued handle: their completions will be discarded by
    /// [`StateCtx::sync_computes`].
    pub fn updater<T: State>(&mut self) -> Updater<T> {
        let seq = self.issued.entry(TypeId::of::<T>()).or_insert(0);
        *seq += 1;
        Updater::new(*seq, self.send.clone())
    }

    /// The latest sequence number issued for `T` (0 when never issued).
    pub fn latest_seq<T: State>(&self) -> u64 {
        self.issued.get(&TypeId::of::<T>()).copied().unwrap_or(0)
    }

    /// Run a compute against the current state snapshot.
    pub fn run_compute<C: Compute>(&mut self, compute: &mut C) -> ComputeStage {
        let updater = self.updater::<C::Output>();
        compute.compute(self, updater)
    }

    /// Apply completed async updates, dropping stale ones.
    ///
    /// Returns how many updates were applied.
    pub fn sync_computes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(envelope) = self.recv.try_recv() {
            let latest = self.issued.get(&envelope.type_id).copied().unwrap_or(0);
            if envelope.seq != latest {
                log::debug!(
                    "discarding stale update (seq {} superseded by {latest})",
                    envelope.seq
                );
                continue;
            }
            self.storage
                .insert(envelope.type_id, envelope.value as Box<dyn Any>);
            applied += 1;
        }
        applied
    }
}
