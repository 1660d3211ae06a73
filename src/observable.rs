//! A single-slot publish/subscribe cell.
//!
//! [ObservableCell] holds one value. Publishing replaces the whole value at
//! once and wakes every [Subscription]. Intermediate values are not
//! buffered: a subscriber that falls behind only ever sees the latest value.

use std::sync::Arc;

use tokio::sync::watch;

/// Holds the latest value of `T` and notifies subscribers when it is replaced.
///
/// Cloning the cell gives another handle to the same slot.
#[derive(Debug, Clone)]
pub struct ObservableCell<T> {
    sender: Arc<watch::Sender<Arc<T>>>,
}

impl<T> ObservableCell<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(Arc::new(initial));

        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replace the current value and wake all subscribers.
    ///
    /// Publishing succeeds even when nobody is subscribed.
    pub fn publish(&self, value: T) {
        self.sender.send_replace(Arc::new(value));
    }

    /// A snapshot of the current value.
    pub fn get(&self) -> Arc<T> {
        self.sender.borrow().clone()
    }

    /// Subscribe to future values.
    ///
    /// The current value counts as already seen, so [Subscription::changed]
    /// resolves on the next publish.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// The number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Default> Default for ObservableCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A subscription to an [ObservableCell].
#[derive(Debug, Clone)]
pub struct Subscription<T> {
    receiver: watch::Receiver<Arc<T>>,
}

impl<T> Subscription<T> {
    /// The latest published value, marking it as seen.
    pub fn latest(&mut self) -> Arc<T> {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait until a value newer than the last one seen is published and return it.
    ///
    /// Returns `None` once every handle to the cell has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<T>> {
        self.receiver.changed().await.ok()?;

        Some(self.latest())
    }
}
