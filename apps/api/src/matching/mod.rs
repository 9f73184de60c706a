// Skill matching: the scorer backends, the display matrix, and its HTTP handler.

pub mod handlers;
pub mod matrix;
pub mod scorer;
