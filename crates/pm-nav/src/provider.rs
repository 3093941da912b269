//! Location providers and subscriptions.
//!
//! A provider hands out subscriptions; a subscription yields events until it
//! is cancelled or dropped.  The controller holds at most one subscription
//! and cancels it before starting another, so a stale stream can never feed
//! fixes into a new session.
//!
//! [`ChannelProvider`] is the in-process implementation: whatever produces
//! fixes (a GPS thread, a replay, a test) pushes them through a
//! [`LocationFeed`], and only the newest subscription receives them.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::LocationEvent;

pub trait LocationSubscription {
    /// Next pending event, or `None` when nothing is pending or the
    /// subscription has been cancelled.
    fn try_next(&mut self) -> Option<LocationEvent>;

    /// Stop receiving events.  Idempotent.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

pub trait LocationProvider {
    type Subscription: LocationSubscription;

    /// Start a new subscription.  Any earlier subscription from this
    /// provider stops receiving events.
    fn subscribe(&mut self) -> Self::Subscription;
}

// ── Channel implementation ────────────────────────────────────────────────────

type Slot = Arc<Mutex<Option<(u64, Sender<LocationEvent>)>>>;

/// Producer side: cloneable and `Send`.
#[derive(Clone, Debug)]
pub struct LocationFeed {
    slot: Slot,
}

impl LocationFeed {
    /// Deliver `event` to the active subscription.  Returns `false` if there
    /// is none.
    pub fn push(&self, event: LocationEvent) -> bool {
        let Ok(mut guard) = self.slot.lock() else {
            return false;
        };
        let sent = match guard.as_ref() {
            Some((_, tx)) => tx.send(event).is_ok(),
            None => return false,
        };
        if !sent {
            // Receiver dropped without cancelling.
            *guard = None;
        }
        sent
    }
}

#[derive(Debug)]
pub struct ChannelProvider {
    slot:       Slot,
    generation: u64,
}

impl ChannelProvider {
    pub fn new() -> (Self, LocationFeed) {
        let slot: Slot = Arc::new(Mutex::new(None));
        (Self { slot: Arc::clone(&slot), generation: 0 }, LocationFeed { slot })
    }
}

impl LocationProvider for ChannelProvider {
    type Subscription = ChannelSubscription;

    fn subscribe(&mut self) -> ChannelSubscription {
        self.generation += 1;
        let (tx, rx) = mpsc::channel();
        if let Ok(mut guard) = self.slot.lock() {
            // Dropping the old sender disconnects the previous subscription.
            *guard = Some((self.generation, tx));
        }
        debug!(generation = self.generation, "location subscription started");
        ChannelSubscription {
            rx:         Some(rx),
            slot:       Arc::clone(&self.slot),
            generation: self.generation,
        }
    }
}

#[derive(Debug)]
pub struct ChannelSubscription {
    rx:         Option<Receiver<LocationEvent>>,
    slot:       Slot,
    generation: u64,
}

impl LocationSubscription for ChannelSubscription {
    fn try_next(&mut self) -> Option<LocationEvent> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                None
            }
        }
    }

    fn cancel(&mut self) {
        if self.rx.take().is_none() {
            return;
        }
        if let Ok(mut guard) = self.slot.lock()
            && guard.as_ref().is_some_and(|(generation, _)| *generation == self.generation)
        {
            *guard = None;
        }
        debug!(generation = self.generation, "location subscription cancelled");
    }

    fn is_active(&self) -> bool {
        self.rx.is_some()
    }
}

impl Drop for ChannelSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
