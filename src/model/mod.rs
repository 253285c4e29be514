pub mod generator;
pub mod piece;
pub mod queue;
