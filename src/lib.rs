pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod tiling;

pub use config::Config;
pub use error::{PenroseError, Result};
pub use geometry::{Disk, Tag, Triangle, TriangleType};
pub use math::distance_2d::{distance_lower_bound, point_segment_distance_sq};
pub use math::Point2;
pub use render::{render_postscript, RenderParams};
pub use tiling::{
    classify_by_type, grow, initial_star, region_filter, subdivide, Partition, Subdivide,
    TilingParams,
};
