// src/model/queue.rs

use rand::Rng;
use thiserror::Error;

use crate::model::generator::PieceGenerator;
use crate::model::piece::Piece;

/// Fixed queue size. Fullness is decided by the element count, never by
/// comparing the cursors, so capacity and occupancy stay unambiguous even
/// when `tail` wraps back onto `head`.
pub const QUEUE_CAPACITY: usize = 5;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("the piece queue is full")]
    Full,
    #[error("the piece queue is empty")]
    Empty,
}

/// The circular queue of upcoming pieces.
///
/// A ring buffer over an owned fixed-length array: `head` is the slot of the
/// next piece to play, `tail` the slot the next insertion writes, both
/// advancing with modular arithmetic. Unoccupied slots hold `None` rather
/// than stale pieces, so an invalid piece can never be observed. All state
/// changes flow through [`enqueue`](Self::enqueue),
/// [`dequeue`](Self::dequeue), or construction.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    head: usize,
    tail: usize,
    count: usize,
}

impl PieceQueue {
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Builds the starting queue: exactly `QUEUE_CAPACITY` fresh pieces, so
    /// the first run of the session begins with ids 0..4 front-to-back.
    /// Inserting capacity items into an empty queue wraps `tail` back to 0,
    /// coinciding with `head`.
    pub fn prefilled<R: Rng>(generator: &mut PieceGenerator<R>) -> Self {
        let mut queue = Self::new();
        for _ in 0..QUEUE_CAPACITY {
            // Cannot fail: exactly capacity insertions into an empty queue.
            let _ = queue.enqueue(generator.next_piece());
        }
        queue
    }

    pub fn is_full(&self) -> bool {
        self.count == QUEUE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    /// Inserts a piece at the back. Rejects with [`QueueError::Full`] when
    /// the queue holds `QUEUE_CAPACITY` pieces, leaving it untouched.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }
        self.slots[self.tail] = Some(piece);
        self.tail = (self.tail + 1) % QUEUE_CAPACITY;
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the piece at the front. Rejects with
    /// [`QueueError::Empty`] when nothing is queued, leaving state untouched.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let piece = self.slots[self.head].take().ok_or(QueueError::Empty)?;
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.count -= 1;
        Ok(piece)
    }

    /// Front-to-back view of the queued pieces, without mutating anything.
    /// Yields exactly `len()` pieces; repeated calls between mutations see
    /// the same sequence.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.count).filter_map(move |offset| {
            self.slots[(self.head + offset) % QUEUE_CAPACITY].as_ref()
        })
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
