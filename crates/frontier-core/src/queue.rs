//! Fixed-capacity integer FIFO backed by a ring buffer.
//!
//! # Contract
//!
//! - The buffer is allocated once with exactly `capacity` slots and never
//!   grows.
//! - [`BoundedCircularQueue::enqueue`] on a full queue **drops the item
//!   silently**. No error is reported and the queue is left unchanged.
//! - [`BoundedCircularQueue::dequeue`] on an empty queue returns
//!   [`UNDERFLOW`] (`-1`). Vertex indices are never negative, so the
//!   sentinel cannot be confused with a stored vertex.
//! - A queue created with capacity 0 is permanently both empty and full.
//!
//! `rear` starts one slot behind `front` so the first enqueue lands on
//! slot 0.

/// Returned by [`BoundedCircularQueue::dequeue`] when the queue is empty.
pub const UNDERFLOW: i64 = -1;

/// Ring-buffer queue with fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCircularQueue {
    buffer: Box<[i64]>,
    front: usize,
    rear: usize,
    size: usize,
}

impl BoundedCircularQueue {
    /// Create an empty queue holding at most `capacity` items.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity].into_boxed_slice(),
            front: 0,
            rear: capacity.saturating_sub(1),
            size: 0,
        }
    }

    /// Maximum number of items the queue can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of items currently queued.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Append `item` at the rear. Dropped without notice when full.
    pub fn enqueue(&mut self, item: i64) {
        if self.is_full() {
            return;
        }
        self.rear = (self.rear + 1) % self.capacity();
        self.buffer[self.rear] = item;
        self.size += 1;
    }

    /// Remove and return the front item, or [`UNDERFLOW`] when empty.
    pub fn dequeue(&mut self) -> i64 {
        self.try_dequeue().unwrap_or(UNDERFLOW)
    }

    /// Remove and return the front item, `None` when empty.
    pub fn try_dequeue(&mut self) -> Option<i64> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.front];
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        Some(item)
    }

    /// Front item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            Some(self.buffer[self.front])
        }
    }
}
