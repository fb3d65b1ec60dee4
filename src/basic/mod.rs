pub use dir::Dir;
pub use point::Point;

pub mod board;
mod dir;
mod point;
