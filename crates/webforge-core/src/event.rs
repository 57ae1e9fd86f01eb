//! Event system for session notifications.
//!
//! ## Design
//!
//! Every mutating session operation ends with an explicit `emit` — this
//! is the publish step observers hook into (auto-save, preview refresh,
//! status bar). A `tokio::sync::broadcast` channel gives us multiple
//! subscribers, async reception, and no coupling between the session and
//! its observers; lagged receivers never block the writer.

use tokio::sync::broadcast;

/// Events published by the session after each mutation.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The active file changed
    FileSelected(String),
    /// A file was created (and became active)
    FileCreated(String),
    /// A file was deleted
    FileDeleted(String),
    /// A file's content was replaced
    ContentChanged(String),
    /// An AI generation result was applied to the reserved files
    GenerationApplied,
    /// An AI generation result arrived after cancellation and was dropped
    GenerationDiscarded,
    /// Session state was written to disk
    ProjectSaved,
    /// Session state was restored from a snapshot
    ProjectRestored,
    /// Configuration changed
    ConfigChanged,
}

/// Broadcast bus for session events.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 256 events in the buffer
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: SessionEvent) {
        // Ignore error if no receivers (not a problem)
        let _ = self.sender.send(event);
    }

    /// Subscribes to events.
    ///
    /// Returns a receiver that will get all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Helper for processing events asynchronously, tolerant of lag.
pub struct EventHandler {
    receiver: broadcast::Receiver<SessionEvent>,
}

impl EventHandler {
    /// Creates a new event handler.
    pub fn new(receiver: broadcast::Receiver<SessionEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<SessionEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Event handler lagged, missed {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(SessionEvent::GenerationApplied);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::GenerationApplied));
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emit(SessionEvent::FileSelected("index.html".into()));

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_handler_skips_lag() {
        let bus = EventBus::new();
        let mut handler = EventHandler::new(bus.subscribe());

        bus.emit(SessionEvent::ConfigChanged);

        let event = handler.next().await;
        assert!(matches!(event, Some(SessionEvent::ConfigChanged)));
    }
}
