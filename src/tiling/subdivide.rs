use crate::error::{PenroseError, Result, TilingError};
use crate::geometry::{Tag, Triangle, TriangleType};
use crate::math::vector_2d::lerp;
use crate::math::GOLDEN_RATIO_INV;

/// Lazily replaces every input triangle by its Robinson children.
///
/// Acute triangles yield `(acute, obtuse)`, obtuse triangles yield
/// `(obtuse, acute, obtuse)`. Work happens only as items are pulled.
///
/// The first error, whether an upstream `Err` or a triangle with an
/// unsupported tag, is yielded once and ends the iteration.
#[derive(Debug)]
pub struct Subdivide<I> {
    triangles: I,
    // Children of the current parent, last child on top.
    pending: Vec<Triangle>,
    done: bool,
}

impl<I> Subdivide<I>
where
    I: Iterator<Item = Result<Triangle>>,
{
    /// Wraps a fallible triangle stream, typically the output of a previous round.
    #[must_use]
    pub fn new(triangles: I) -> Self {
        Self {
            triangles,
            pending: Vec::with_capacity(3),
            done: false,
        }
    }
}

/// Subdivides a sequence of triangles once.
///
/// Nothing is computed until the returned iterator is consumed.
pub fn subdivide<I>(triangles: I) -> Subdivide<impl Iterator<Item = Result<Triangle>>>
where
    I: IntoIterator<Item = Triangle>,
{
    Subdivide::new(triangles.into_iter().map(Ok::<Triangle, PenroseError>))
}

/// Pushes the children of `triangle` onto `out` in reverse emission order.
fn push_children(kind: TriangleType, triangle: &Triangle, out: &mut Vec<Triangle>) {
    let Triangle { a, b, c, .. } = *triangle;

    match kind {
        TriangleType::Acute => {
            let j = lerp(&b, &a, GOLDEN_RATIO_INV);
            out.push(Triangle::new(TriangleType::Obtuse, c, j, b));
            out.push(Triangle::new(TriangleType::Acute, j, c, a));
        }
        TriangleType::Obtuse => {
            let k = lerp(&a, &b, GOLDEN_RATIO_INV);
            let l = lerp(&a, &c, GOLDEN_RATIO_INV);
            out.push(Triangle::new(TriangleType::Obtuse, c, l, b));
            out.push(Triangle::new(TriangleType::Acute, k, l, b));
            out.push(Triangle::new(TriangleType::Obtuse, l, k, a));
        }
    }
}

impl<I> Iterator for Subdivide<I>
where
    I: Iterator<Item = Result<Triangle>>,
{
    type Item = Result<Triangle>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(child) = self.pending.pop() {
            return Some(Ok(child));
        }
        if self.done {
            return None;
        }

        let triangle = match self.triangles.next()? {
            Ok(triangle) => triangle,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        match &triangle.tag {
            Tag::Robinson(kind) => {
                push_children(*kind, &triangle, &mut self.pending);
                self.pending.pop().map(Ok)
            }
            Tag::Other(name) => {
                tracing::warn!(tag = %name, "refusing to subdivide unsupported triangle");
                self.done = true;
                Some(Err(TilingError::UnsupportedTriangleType(name.clone()).into()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (self.pending.len(), Some(self.pending.len()));
        }
        let (lower, upper) = self.triangles.size_hint();
        let pending = self.pending.len();
        // A single unsupported or failed input yields one item and ends the stream.
        (
            pending.saturating_add(lower.min(1)),
            upper.and_then(|n| n.checked_mul(3)?.checked_add(pending)),
        )
    }
}

impl<I> std::iter::FusedIterator for Subdivide<I> where
    I: std::iter::FusedIterator<Item = Result<Triangle>>
{
}
