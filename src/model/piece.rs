// src/model/piece.rs

use std::fmt;

/// The category tag of a piece, one of the four classic tetromino shapes
/// the simulator deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    I,
    O,
    T,
    L,
}

impl Shape {
    /// Every shape the generator can draw, in a fixed order so a seeded
    /// run always maps the same draws to the same shapes.
    pub const ALL: [Shape; 4] = [Shape::I, Shape::O, Shape::T, Shape::L];

    pub fn tag(self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::L => 'L',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single generated piece. Immutable once created: the shape is drawn at
/// generation time and the id is unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub id: u32,
}

impl fmt::Display for Piece {
    /// Renders the bracketed form the queue display uses, e.g. `[T 7]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.shape, self.id)
    }
}
