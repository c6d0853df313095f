//! Trailing-edge debouncing of input events.
//!
//! A search box emits an event per keystroke; running the pipeline on
//! every one of them wastes work the next keystroke throws away. The
//! debouncer delays the callback until the input has been quiet for the
//! configured interval, and a new call while one is pending replaces it
//! outright.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// Rate-limiting wrapper around a callback.
///
/// The pending invocation is explicit state: [`Debouncer::call`] cancels
/// whatever is pending and schedules the callback with the new
/// arguments, so the callback fires at most once per quiet period and
/// always sees the most recent arguments. Dropping the debouncer aborts
/// the pending invocation without running it.
///
/// Must be used from within a tokio runtime; the pending timer lives on
/// a spawned task.
pub struct Debouncer<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `callback` so invocations are delayed by `delay`.
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedule the callback with `args`, replacing any pending call.
    ///
    /// The callback runs after `delay` elapses with no further `call`;
    /// until then another `call` supersedes this one unconditionally.
    pub fn call(&mut self, args: T) {
        self.cancel();

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            callback(args);
        }));
    }
}

impl<T> Debouncer<T> {
    /// Abort the pending invocation, if any. No effect once the
    /// callback has already run.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
