//! Optional remote-persistence seam.
//!
//! Local state is authoritative for the session: the remote store only ever
//! observes committed purchases. Pushes are fire-and-forget, failures are
//! logged and never retried, and nothing here can block or roll back a
//! local mutation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use serde_json::Value;
use thiserror::Error;

use crate::ledger::Purchase;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote store unavailable")]
    Unavailable,
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Callback invoked with the remote's current documents for a user.
pub type RemoteCallback = Box<dyn Fn(&[Value]) + Send + Sync>;

/// Token returned by [`RemoteExpenseStore::subscribe`]; pass it back to
/// `unsubscribe` to stop deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// A remote document store for expense records, push-notified.
pub trait RemoteExpenseStore {
    fn push_expense(&self, user_id: &str, purchase: &Purchase) -> Result<(), RemoteError>;
    fn subscribe(&self, user_id: &str, callback: RemoteCallback) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Fire-and-forget push: errors are logged, never surfaced.
pub fn sync_expense(store: &dyn RemoteExpenseStore, user_id: &str, purchase: &Purchase) {
    match store.push_expense(user_id, purchase) {
        Ok(()) => tracing::info!(user_id, purchase = %purchase.id, "expense pushed"),
        Err(error) => tracing::error!(user_id, %error, "error pushing expense"),
    }
}

struct Subscriber {
    id: SubscriptionId,
    user_id: String,
    callback: RemoteCallback,
}

/// In-process [`RemoteExpenseStore`] used by tests and local-echo callers.
///
/// Documents are held as JSON values, mirroring a schemaless document
/// store. `set_failing(true)` flips every push into an error to exercise
/// the logged-failure path.
#[derive(Default)]
pub struct MemoryRemote {
    documents: Mutex<Vec<(String, Value)>>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscription: AtomicU64,
    failing: AtomicBool,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the documents stored for a user.
    pub fn documents(&self, user_id: &str) -> Vec<Value> {
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|(user, _)| user == user_id)
            .map(|(_, doc)| doc.clone())
            .collect()
    }

    fn notify(&self, user_id: &str) {
        let snapshot = self.documents(user_id);
        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for subscriber in subscribers.iter().filter(|s| s.user_id == user_id) {
            (subscriber.callback)(&snapshot);
        }
    }
}

impl RemoteExpenseStore for MemoryRemote {
    fn push_expense(&self, user_id: &str, purchase: &Purchase) -> Result<(), RemoteError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RemoteError::Unavailable);
        }
        let document = serde_json::to_value(purchase)?;
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((user_id.to_string(), document));
        self.notify(user_id);
        Ok(())
    }

    fn subscribe(&self, user_id: &str, callback: RemoteCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Subscriber {
                id,
                user_id: user_id.to_string(),
                callback,
            });
        // New listeners immediately see the current snapshot.
        self.notify(user_id);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .retain(|subscriber| subscriber.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use uuid::Uuid;

    fn sample_purchase() -> Purchase {
        Purchase::new("milk", Some(Uuid::new_v4()), "Groceries", 120.0)
    }

    #[test]
    fn push_stores_a_document_per_user() {
        let remote = MemoryRemote::new();
        remote
            .push_expense("alice", &sample_purchase())
            .expect("push succeeds");

        assert_eq!(remote.documents("alice").len(), 1);
        assert!(remote.documents("bob").is_empty());
        assert_eq!(remote.documents("alice")[0]["name"], "milk");
    }

    #[test]
    fn subscribers_get_snapshots_for_their_user_only() {
        let remote = MemoryRemote::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_cb = Arc::clone(&seen);
        remote.subscribe(
            "alice",
            Box::new(move |docs| {
                seen_cb.store(docs.len(), Ordering::SeqCst);
            }),
        );

        remote
            .push_expense("alice", &sample_purchase())
            .expect("push succeeds");
        remote
            .push_expense("bob", &sample_purchase())
            .expect("push succeeds");

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_deliveries() {
        let remote = MemoryRemote::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_cb = Arc::clone(&calls);
        let id = remote.subscribe(
            "alice",
            Box::new(move |_| {
                calls_cb.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let after_subscribe = calls.load(Ordering::SeqCst);

        remote.unsubscribe(id);
        remote
            .push_expense("alice", &sample_purchase())
            .expect("push succeeds");

        assert_eq!(calls.load(Ordering::SeqCst), after_subscribe);
    }

    #[test]
    fn sync_expense_swallows_remote_failures() {
        let remote = MemoryRemote::new();
        remote.set_failing(true);
        // Must not panic or propagate; the failure only gets logged.
        sync_expense(&remote, "alice", &sample_purchase());
        assert!(remote.documents("alice").is_empty());
    }
}
