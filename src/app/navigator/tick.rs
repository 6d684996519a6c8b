use super::{HierarchyNavigator, MAX_MESSAGES_PER_PUMP};
use crate::kernel::services::adapters::AppMessage;
use std::sync::mpsc;
use std::time::Duration;

impl HierarchyNavigator {
    /// Applies server responses that have already arrived.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_MESSAGES_PER_PUMP {
            match self.rx.try_recv() {
                Ok(msg) => changed |= self.apply_message(msg),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::error!("navigator runtime channel disconnected");
                    break;
                }
            }
        }
        changed
    }

    /// Waits up to `timeout` for one response, then drains the rest.
    pub fn pump_blocking(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                let changed = self.apply_message(msg);
                changed | self.pump()
            }
            Err(mpsc::RecvTimeoutError::Timeout) => false,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::error!("navigator runtime channel disconnected");
                false
            }
        }
    }

    fn apply_message(&mut self, msg: AppMessage) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(msg.into())
    }
}
