use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};

use crate::kernel::HierarchyEvent;

pub trait EventBus {
    fn publish(&self, event: HierarchyEvent);
}

impl<T: EventBus + ?Sized> EventBus for Arc<T> {
    fn publish(&self, event: HierarchyEvent) {
        (**self).publish(event)
    }
}

/// Fan-out bus: every subscriber receives its own copy of each event.
#[derive(Default)]
pub struct EventHub {
    subscribers: Mutex<Vec<Sender<HierarchyEvent>>>,
}

pub struct EventBusReceiver {
    rx: Receiver<HierarchyEvent>,
}

impl EventHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn subscribe(&self) -> EventBusReceiver {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        EventBusReceiver { rx }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl EventBus for EventHub {
    fn publish(&self, event: HierarchyEvent) {
        let Ok(mut subscribers) = self.subscribers.lock() else {
            tracing::error!(event = event.name(), "event bus poisoned, event dropped");
            return;
        };
        tracing::debug!(event = event.name(), subscribers = subscribers.len(), "publish");
        // Receivers that went away are pruned on the next publish.
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl EventBusReceiver {
    pub fn try_recv(&mut self) -> Result<HierarchyEvent, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn drain(&mut self) -> Vec<HierarchyEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/bus.rs"]
mod tests;
