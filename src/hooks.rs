//! Extension hooks
//!
//! Notifications for collaborators that live outside the store: a
//! persistence layer that wants every frozen generation, and indexers that
//! want every key mutation.
//!
//! Listeners run synchronously while the store's write lock is held. They
//! must return quickly and must not call back into the store; hand the work
//! to another thread through a [`ChannelSink`] instead.

use std::sync::Arc;

use crossbeam::channel::{self, Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::generation::{FrozenTable, Generation, GenerationId};
use crate::memtable::EntryFlag;
use crate::model::Key;

/// One applied key mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationEvent {
    /// Position in the store's mutation order, starting at 1
    pub sequence: u64,

    /// Generation the mutation landed in
    pub generation: GenerationId,

    pub key: Key,

    /// Flag of the key's entry after the mutation
    pub flag: EntryFlag,
}

/// Called once per rotation with the generation that was just frozen
pub trait FreezeListener: Send + Sync {
    fn on_freeze(&self, generation: &Arc<FrozenTable>);
}

/// Called once per applied mutation, in application order
pub trait MutationListener: Send + Sync {
    fn on_mutation(&self, event: &MutationEvent);
}

impl<F> FreezeListener for F
where
    F: Fn(&Arc<FrozenTable>) + Send + Sync,
{
    fn on_freeze(&self, generation: &Arc<FrozenTable>) {
        self(generation)
    }
}

impl<F> MutationListener for F
where
    F: Fn(&MutationEvent) + Send + Sync,
{
    fn on_mutation(&self, event: &MutationEvent) {
        self(event)
    }
}

/// Forwards notifications over a crossbeam channel
///
/// A dropped receiver only loses notifications; the store keeps working.
pub struct ChannelSink<T> {
    sender: Sender<T>,
}

impl<T> ChannelSink<T> {
    pub fn new(sender: Sender<T>) -> Self {
        Self { sender }
    }

    /// Create a sink on an unbounded channel, returning the receiving end
    pub fn unbounded() -> (Self, Receiver<T>) {
        let (sender, receiver) = channel::unbounded();
        (Self::new(sender), receiver)
    }
}

impl FreezeListener for ChannelSink<Arc<FrozenTable>> {
    fn on_freeze(&self, generation: &Arc<FrozenTable>) {
        if self.sender.send(Arc::clone(generation)).is_err() {
            tracing::warn!(
                generation = generation.id(),
                "freeze receiver disconnected, notification dropped"
            );
        }
    }
}

impl MutationListener for ChannelSink<MutationEvent> {
    fn on_mutation(&self, event: &MutationEvent) {
        if self.sender.send(event.clone()).is_err() {
            tracing::warn!(
                sequence = event.sequence,
                "mutation receiver disconnected, notification dropped"
            );
        }
    }
}
