use crate::types::NodeStatusEvent;

/// Event bus using tokio broadcast channel.
/// All subscribers receive all events; publishing is fire-and-forget, so a
/// run with no listeners is unaffected.
pub struct EventBus {
    tx: tokio::sync::broadcast::Sender<NodeStatusEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = tokio::sync::broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: NodeStatusEvent) {
        // Ignore error if no receivers
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<NodeStatusEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
