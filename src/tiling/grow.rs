use serde::{Deserialize, Serialize};

use crate::error::{PenroseError, Result};
use crate::geometry::{Disk, Triangle};
use crate::math::Point2;

use super::{initial_star, Subdivide};

/// A lazy, single-pass stream of triangles.
///
/// Collect it into a `Vec` before walking the same round twice.
pub type TriangleStream<'a> = Box<dyn Iterator<Item = Result<Triangle>> + 'a>;

/// Applies `rounds` rounds of subdivision, each followed by pruning to `disk`.
///
/// Triangles that certainly miss the disk are dropped after every round so
/// the working set stays bounded. Errors are never pruned.
pub fn grow<'a, I>(seed: I, rounds: usize, disk: Disk) -> TriangleStream<'a>
where
    I: IntoIterator<Item = Triangle>,
    I::IntoIter: 'a,
{
    let mut stream: TriangleStream<'a> =
        Box::new(seed.into_iter().map(Ok::<Triangle, PenroseError>));
    for _ in 0..rounds {
        stream = Box::new(Subdivide::new(stream).filter(move |item| match item {
            Ok(triangle) => disk.may_intersect(triangle),
            Err(_) => true,
        }));
    }
    stream
}

/// Parameters for generating a pruned tiling from the sun seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingParams {
    /// Number of substitution rounds.
    pub rounds: usize,
    /// Center of the region of interest.
    pub center: Point2,
    /// Radius of the region of interest.
    pub radius: f64,
}

impl Default for TilingParams {
    fn default() -> Self {
        Self {
            rounds: 4,
            center: Point2::origin(),
            radius: 1.0,
        }
    }
}

impl TilingParams {
    /// Returns the region of interest.
    ///
    /// # Errors
    ///
    /// Returns an error if the center or radius is invalid.
    pub fn disk(&self) -> Result<Disk> {
        Disk::new(self.center, self.radius)
    }

    /// Grows the sun seed and materializes the surviving triangles.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn generate(&self) -> Result<Vec<Triangle>> {
        let disk = self.disk()?;
        tracing::debug!(
            rounds = self.rounds,
            center_x = self.center.x,
            center_y = self.center.y,
            radius = self.radius,
            "growing tiling"
        );

        let triangles = grow(initial_star(), self.rounds, disk).collect::<Result<Vec<_>>>()?;

        tracing::info!(triangles = triangles.len(), "tiling generated");
        Ok(triangles)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Tag, TriangleType};
    use crate::tiling::{classify_by_type, region_filter, subdivide};

    #[test]
    fn one_step_from_star() {
        let first = initial_star()[0].clone();
        let children: Vec<_> = subdivide([first]).collect::<Result<_>>().unwrap();
        assert_eq!(children.len(), 3);

        let partition = classify_by_type(children);
        assert_eq!(partition.acute.len(), 1);
        assert_eq!(partition.obtuse.len(), 2);
        assert_eq!(partition.other.len(), 0);
    }

    #[test]
    fn four_rounds_stay_near_the_disk() {
        let triangles = TilingParams::default().generate().unwrap();
        assert!(!triangles.is_empty());

        let partition = classify_by_type(triangles.clone());
        assert!(partition.other.is_empty());
        assert_eq!(partition.len(), triangles.len());

        for t in &triangles {
            let nearest = t
                .vertices()
                .iter()
                .map(|v| v.coords.norm())
                .fold(f64::INFINITY, f64::min);
            assert!(
                nearest <= 1.0 + 0.5 * t.longest_edge() + 1e-12,
                "triangle {t:?} too far: {nearest}"
            );
        }
    }

    #[test]
    fn grow_matches_manual_rounds() {
        let keep = region_filter(Point2::origin(), 1.0);
        let mut manual = initial_star();
        for _ in 0..3 {
            manual = subdivide(manual)
                .collect::<Result<Vec<_>>>()
                .unwrap()
                .into_iter()
                .filter(|t| keep(t))
                .collect();
        }

        let disk = Disk::new(Point2::origin(), 1.0).unwrap();
        let grown: Vec<_> = grow(initial_star(), 3, disk).collect::<Result<_>>().unwrap();
        assert_eq!(grown, manual);
    }

    #[test]
    fn pruning_keeps_the_working_set_small() {
        let disk = Disk::new(Point2::origin(), 0.5).unwrap();
        let pruned = grow(initial_star(), 5, disk).count();
        let everything = Disk::new(Point2::origin(), 100.0).unwrap();
        let unpruned = grow(initial_star(), 5, everything).count();
        assert!(pruned > 0);
        assert!(pruned < unpruned);
    }

    #[test]
    fn zero_rounds_returns_seed() {
        let disk = Disk::new(Point2::origin(), 1.0).unwrap();
        let seed: Vec<_> = grow(initial_star(), 0, disk).collect::<Result<_>>().unwrap();
        assert_eq!(seed, initial_star());
    }

    #[test]
    fn unsupported_seed_surfaces_error() {
        let strange = Triangle::with_tag(
            Tag::Other("kite".to_owned()),
            Point2::origin(),
            Point2::new(0.1, 0.0),
            Point2::new(0.0, 0.1),
        );
        let good = Triangle::new(
            TriangleType::Acute,
            Point2::origin(),
            Point2::new(0.1, 0.0),
            Point2::new(0.0, 0.1),
        );
        let disk = Disk::new(Point2::origin(), 1.0).unwrap();
        let result: Result<Vec<_>> = grow(vec![good, strange], 2, disk).collect();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let params = TilingParams {
            radius: -1.0,
            ..TilingParams::default()
        };
        assert!(params.generate().is_err());
    }
}
