use crate::geometry::{Tag, Triangle, TriangleType};

/// Triangles grouped by tag, each group in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Acute Robinson triangles.
    pub acute: Vec<Triangle>,
    /// Obtuse Robinson triangles.
    pub obtuse: Vec<Triangle>,
    /// Anything else.
    pub other: Vec<Triangle>,
}

impl Partition {
    /// Total number of triangles across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.acute.len() + self.obtuse.len() + self.other.len()
    }

    /// Returns `true` if every group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Partition> for (Vec<Triangle>, Vec<Triangle>, Vec<Triangle>) {
    fn from(partition: Partition) -> Self {
        (partition.acute, partition.obtuse, partition.other)
    }
}

/// Stable three-way partition of `triangles` into acute, obtuse and other.
#[must_use]
pub fn classify_by_type<I>(triangles: I) -> Partition
where
    I: IntoIterator<Item = Triangle>,
{
    let mut partition = Partition::default();
    for triangle in triangles {
        let bucket = match triangle.tag {
            Tag::Robinson(TriangleType::Acute) => &mut partition.acute,
            Tag::Robinson(TriangleType::Obtuse) => &mut partition.obtuse,
            Tag::Other(_) => &mut partition.other,
        };
        bucket.push(triangle);
    }
    partition
}
