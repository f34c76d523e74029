mod disk;
mod triangle;

pub use disk::Disk;
pub use triangle::{Tag, Triangle, TriangleType};
