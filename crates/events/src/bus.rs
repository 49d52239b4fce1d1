//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is how observers learn that the form changed: the component
//! publishes the events its operations produced, and each subscriber (status
//! line, log sink) drains its own copy.
//!
//! - **Transport-agnostic**: the trait says nothing about channels
//! - **Broadcast**: every subscriber receives every message published after
//!   it subscribed
//! - **No persistence**: the bus distributes, it does not store

use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to an event stream.
///
/// Subscriptions are meant to be drained by a single consumer.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Collect every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// ```text
/// Intent → InventoryForm (events) → EventBus (publish) → Subscribers
///                                                          ├─ status line
///                                                          └─ log
/// ```
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
