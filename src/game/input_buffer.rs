use std::collections::VecDeque;

use crate::basic::Dir;

/// Most turn intents the player can have queued up at once, pushes
/// beyond this are dropped
pub const BUFFER_CAPACITY: usize = 20;

/// Ordered queue of directional intents, decoupling the rate at which
/// key events arrive from the one-turn-per-tick simulation. The order
/// in which turns were issued is preserved so that rapid sequences
/// (e.g. up then left within one tick) play out over successive ticks
/// instead of collapsing into the last keypress.
pub struct InputBuffer {
    queue: VecDeque<Dir>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(BUFFER_CAPACITY),
        }
    }

    /// Appends an intent unless the buffer is full, in which case the
    /// intent is dropped with a diagnostic (never fatal)
    pub fn push(&mut self, intent: Dir) {
        if self.queue.len() >= BUFFER_CAPACITY {
            eprintln!("warning: input buffer over capacity, dropping {:?}", intent);
            return;
        }
        self.queue.push_back(intent);
    }

    /// Removes and returns the oldest intent
    pub fn pop(&mut self) -> Option<Dir> {
        self.queue.pop_front()
    }

    /// The most recently buffered intent, used as the baseline for the
    /// no-reverse rule while earlier intents are still queued
    pub fn last(&self) -> Option<Dir> {
        self.queue.back().copied()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir::*;

    #[test]
    fn fifo_order() {
        let mut buffer = InputBuffer::new();
        buffer.push(Up);
        buffer.push(Left);
        buffer.push(Down);

        assert_eq!(buffer.last(), Some(Down));
        assert_eq!(buffer.pop(), Some(Up));
        assert_eq!(buffer.pop(), Some(Left));
        assert_eq!(buffer.pop(), Some(Down));
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn push_past_capacity_drops_the_intent() {
        let mut buffer = InputBuffer::new();
        for i in 0..BUFFER_CAPACITY {
            buffer.push(if i % 2 == 0 { Up } else { Left });
        }
        assert_eq!(buffer.len(), BUFFER_CAPACITY);

        // the 21st push is a no-op
        buffer.push(Down);
        assert_eq!(buffer.len(), BUFFER_CAPACITY);

        // the first 20 intents survive in order
        for i in 0..BUFFER_CAPACITY {
            assert_eq!(buffer.pop(), Some(if i % 2 == 0 { Up } else { Left }));
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut buffer = InputBuffer::new();
        buffer.push(Right);
        buffer.push(Up);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.pop(), None);
    }
}
