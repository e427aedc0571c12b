//! Typed game events and the subscription bus.
//!
//! Event payloads are a typed enum and listeners hold explicit
//! [`Subscription`] handles on an owned [`EventBus`] value, so nothing
//! listens ambiently.
//!
//! A separate log callback gives the embedder a diagnostics channel without
//! pulling a logging framework into the crate.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

/// Events produced by the game logic that the presentation layer reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new target word was drawn for the current level.
    TargetChanged { target: String },
    /// The final score for a finished game was computed.
    ScoreComputed { score: u32 },
}

/// Log level for diagnostics callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventHandler = Box<dyn Fn(&GameEvent) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// Subscription-based dispatcher for [`GameEvent`] values.
///
/// The bus is an owned value injected where needed; handlers are invoked
/// synchronously, in subscription order, on the emitting thread.
#[derive(Default)]
pub struct EventBus {
    handlers: Mutex<Vec<(u64, EventHandler)>>,
    next_id: AtomicU64,
}

impl EventBus {
    /// Create a new bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, returning the handle that removes it again.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut handlers = self.handlers.lock().expect("event bus lock");
        handlers.push((id, Box::new(handler)));
        Subscription(id)
    }

    /// Remove a handler. Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut handlers = self.handlers.lock().expect("event bus lock");
        let before = handlers.len();
        handlers.retain(|(id, _)| *id != subscription.0);
        handlers.len() != before
    }

    /// Dispatch an event to every current subscriber.
    pub fn emit(&self, event: &GameEvent) {
        if let Ok(handlers) = self.handlers.lock() {
            for (_, handler) in handlers.iter() {
                handler(event);
            }
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.lock().map_or(0, |h| h.len())
    }
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
