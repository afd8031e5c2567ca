//! Live query subscriptions.
//!
//! Replaces implicit reactive-framework queries with an explicit observer
//! registry: each subscriber registers a query shape and receives the full
//! current result set on subscription and again after every successful
//! weather write. Fan-out happens in registration order; a subscriber whose
//! receiver has been dropped is pruned on the next notification pass.

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::types::WeatherRecord;

/// The query shapes a subscriber can observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherQuery {
    /// All records, all users, newest first.
    AllHistory,
    /// Records for one email (exact match), newest first.
    HistoryForUser(String),
    /// The single most recent record, if any.
    Latest,
}

/// A live feed of weather query results.
///
/// Delivers the full result set for the subscribed query shape: once
/// immediately on subscription, then once per store write. Dropping the
/// subscription unsubscribes (the registry prunes it on the next write).
#[derive(Debug)]
pub struct WeatherSubscription {
    rx: UnboundedReceiver<Vec<WeatherRecord>>,
}

impl WeatherSubscription {
    /// Wait for the next result set.
    ///
    /// Returns `None` once the store side has gone away.
    pub async fn next(&mut self) -> Option<Vec<WeatherRecord>> {
        self.rx.recv().await
    }

    /// Take the next result set if one is already queued.
    pub fn try_next(&mut self) -> Option<Vec<WeatherRecord>> {
        self.rx.try_recv().ok()
    }
}

pub(crate) struct Subscriber {
    pub(crate) query: WeatherQuery,
    pub(crate) tx: UnboundedSender<Vec<WeatherRecord>>,
}

/// Registry of live subscribers, notified in registration order.
#[derive(Default)]
pub(crate) struct LiveRegistry {
    pub(crate) subscribers: Vec<Subscriber>,
}

impl LiveRegistry {
    /// Register a subscriber for the given query shape.
    ///
    /// The caller is responsible for delivering the initial snapshot.
    pub(crate) fn register(
        &mut self,
        query: WeatherQuery,
    ) -> (UnboundedSender<Vec<WeatherRecord>>, WeatherSubscription) {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(Subscriber {
            query,
            tx: tx.clone(),
        });
        (tx, WeatherSubscription { rx })
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }
}
