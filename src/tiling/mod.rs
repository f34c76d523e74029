//! Robinson triangle substitution: the sun seed, one subdivision step,
//! region pruning and classification by type.

mod classify;
mod filter;
mod grow;
mod star;
mod subdivide;

pub use classify::{classify_by_type, Partition};
pub use filter::region_filter;
pub use grow::{grow, TilingParams, TriangleStream};
pub use star::initial_star;
pub use subdivide::{subdivide, Subdivide};
