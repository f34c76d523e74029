use std::fmt;

use crate::math::Point2;

/// The two Robinson triangle shapes of the P3 substitution system.
///
/// Acute triangles split into two children, obtuse ones into three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleType {
    Acute,
    Obtuse,
}

impl fmt::Display for TriangleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acute => f.write_str("acute"),
            Self::Obtuse => f.write_str("obtuse"),
        }
    }
}

/// Label carried by a triangle.
///
/// `Other` covers triangles that did not come out of the substitution rule.
/// They can be classified and rendered but not subdivided.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Robinson(TriangleType),
    Other(String),
}

impl From<TriangleType> for Tag {
    fn from(kind: TriangleType) -> Self {
        Self::Robinson(kind)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Robinson(kind) => fmt::Display::fmt(kind, f),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// A tagged triangle with ordered vertices `a`, `b`, `c`.
///
/// The order is part of the value: the subdivision formulas treat each
/// vertex differently, so a relabeled triangle is a different triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub tag: Tag,
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    /// Creates a Robinson triangle of the given type.
    #[must_use]
    pub fn new(kind: TriangleType, a: Point2, b: Point2, c: Point2) -> Self {
        Self::with_tag(Tag::Robinson(kind), a, b, c)
    }

    /// Creates a triangle with an arbitrary tag.
    #[must_use]
    pub fn with_tag(tag: Tag, a: Point2, b: Point2, c: Point2) -> Self {
        Self { tag, a, b, c }
    }

    /// Returns the Robinson type, or `None` for an `Other` tag.
    #[must_use]
    pub fn triangle_type(&self) -> Option<TriangleType> {
        match self.tag {
            Tag::Robinson(kind) => Some(kind),
            Tag::Other(_) => None,
        }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the edges `(a, b)`, `(b, c)`, `(c, a)`.
    #[must_use]
    pub fn edges(&self) -> [(Point2, Point2); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Returns the length of the longest edge.
    #[must_use]
    pub fn longest_edge(&self) -> f64 {
        self.edges()
            .iter()
            .map(|(p, q)| (q - p).norm())
            .fold(0.0, f64::max)
    }

    /// Returns a new triangle with the same tag and every vertex mapped by `f`.
    #[must_use]
    pub fn map_vertices<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Point2) -> Point2,
    {
        Self::with_tag(self.tag.clone(), f(&self.a), f(&self.b), f(&self.c))
    }
}
