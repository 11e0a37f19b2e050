//! Serialized event queue with move and tick coalescing
//!
//! Pointer moves carry absolute positions, so only the latest of a run
//! matters. Ticks are summed; tracks evaluate easing from absolute elapsed
//! time, so one long tick lands where several short ones would.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use crate::messages::{Msg, PointerMsg};

/// Fold `next` into `last` if they coalesce; non-finite moves never do
fn merge(last: &mut Msg, next: Msg) -> bool {
    match (last, next) {
        (
            Msg::Pointer(PointerMsg::Move { pos: last }),
            Msg::Pointer(PointerMsg::Move { pos }),
        ) if last.is_finite() && pos.is_finite() => {
            *last = pos;
            true
        }
        (Msg::Tick(last), Msg::Tick(dt)) => {
            *last = last.saturating_add(dt);
            true
        }
        _ => false,
    }
}

#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<Msg>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, merging it into the last one when both are moves or both ticks
    pub fn push(&mut self, msg: Msg) {
        if let Some(last) = self.pending.back_mut() {
            if merge(last, msg) {
                return;
            }
        }
        self.pending.push_back(msg);
    }

    pub fn pop(&mut self) -> Option<Msg> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move every message waiting on `rx` into the queue without blocking
    ///
    /// Returns how many messages were received (before coalescing).
    pub fn drain_channel(&mut self, rx: &Receiver<Msg>) -> usize {
        let mut received = 0;
        while let Ok(msg) = rx.try_recv() {
            self.push(msg);
            received += 1;
        }
        received
    }

    /// Take everything queued, in order
    pub fn drain(&mut self) -> impl Iterator<Item = Msg> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_moves_coalesce_to_latest() {
        let mut queue = EventQueue::new();
        queue.push(Msg::move_to(1.0, 1.0));
        queue.push(Msg::move_to(2.0, 3.0));
        queue.push(Msg::move_to(5.0, 8.0));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(Msg::move_to(5.0, 8.0)));
    }

    #[test]
    fn test_ticks_sum() {
        let mut queue = EventQueue::new();
        queue.push(Msg::tick_ms(16));
        queue.push(Msg::tick_ms(17));
        assert_eq!(queue.pop(), Some(Msg::Tick(Duration::from_millis(33))));
    }

    #[test]
    fn test_press_and_release_are_barriers() {
        let mut queue = EventQueue::new();
        queue.push(Msg::move_to(1.0, 1.0));
        queue.push(Msg::down(1.0, 1.0));
        queue.push(Msg::move_to(2.0, 2.0));
        queue.push(Msg::move_to(3.0, 3.0));
        queue.push(Msg::up(3.0, 3.0));
        queue.push(Msg::up(3.0, 3.0));
        let drained: Vec<Msg> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                Msg::move_to(1.0, 1.0),
                Msg::down(1.0, 1.0),
                Msg::move_to(3.0, 3.0),
                Msg::up(3.0, 3.0),
                Msg::up(3.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_non_finite_move_is_not_merged() {
        let mut queue = EventQueue::new();
        queue.push(Msg::move_to(1.0, 1.0));
        queue.push(Msg::move_to(f64::NAN, 1.0));
        queue.push(Msg::move_to(2.0, 2.0));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_drain_channel() {
        let (tx, rx) = std::sync::mpsc::channel();
        let producer = std::thread::spawn(move || {
            for i in 0..10 {
                tx.send(Msg::move_to(i as f64, 0.0)).unwrap();
            }
            tx.send(Msg::Hover(crate::messages::HoverMsg::Enter)).unwrap();
        });
        producer.join().unwrap();

        let mut queue = EventQueue::new();
        assert_eq!(queue.drain_channel(&rx), 11);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(Msg::move_to(9.0, 0.0)));
    }
}
