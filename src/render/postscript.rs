use std::fmt::{self, Write};

use crate::error::{RenderError, Result};
use crate::geometry::Triangle;
use crate::math::vector_2d::{add, lerp, scale, sub};
use crate::math::Point2;
use crate::tiling::classify_by_type;

use super::RenderParams;

const OBTUSE_FILL: &str = ".8 .8 1";
const ACUTE_FILL: &str = ".9 1 .5";
const OTHER_FILL: &str = "0 .5 0";

/// How far the vertex marker reaches from `a` towards the opposite edge.
const MARKER_REACH: f64 = 0.17;

/// Renders triangles as a one-page PostScript document.
///
/// Triangles are filled by type (obtuse, then acute, then other) and then
/// stroked in input order, so the slice is traversed more than once.
///
/// # Errors
///
/// Returns an error if the parameters are invalid.
pub fn render_postscript(triangles: &[Triangle], params: &RenderParams) -> Result<String> {
    params.validate()?;

    let mut out = String::new();
    write_document(&mut out, triangles, params).map_err(RenderError::from)?;

    tracing::debug!(
        triangles = triangles.len(),
        bytes = out.len(),
        "rendered postscript"
    );
    Ok(out)
}

fn write_document(out: &mut String, triangles: &[Triangle], params: &RenderParams) -> fmt::Result {
    let [width, height] = params.page_size;
    writeln!(out, "%!PS-Adobe-1.0")?;
    writeln!(out, "%%BoundingBox: 0 0 {width} {height}")?;
    writeln!(out, "%%Pages: 1")?;
    writeln!(out, "%%EndComments")?;
    writeln!(out, "%%Page: 1 1")?;
    writeln!(
        out,
        "gsave 1 setlinejoin 1 setlinecap {} setlinewidth 0 setgray",
        params.line_width
    )?;

    let partition = classify_by_type(triangles.iter().cloned());
    writeln!(
        out,
        "% {} acute, {} obtuse, {} other triangles",
        partition.acute.len(),
        partition.obtuse.len(),
        partition.other.len()
    )?;

    for (color, group) in [
        (OBTUSE_FILL, &partition.obtuse),
        (ACUTE_FILL, &partition.acute),
        (OTHER_FILL, &partition.other),
    ] {
        writeln!(out, "gsave {color} setrgbcolor")?;
        for triangle in group {
            let [a, b, c] = page_vertices(triangle, params);
            writeln!(
                out,
                "newpath {} {} moveto {} {} lineto {} {} lineto closepath fill",
                a.x, a.y, b.x, b.y, c.x, c.y
            )?;
        }
        writeln!(out, "grestore")?;
    }

    for triangle in triangles {
        let [a, b, c] = page_vertices(triangle, params);
        if params.mark_vertex_a {
            let (m, n) = vertex_marker(&a, &b, &c);
            writeln!(out, "{} {} moveto {} {} lineto", m.x, m.y, n.x, n.y)?;
        }
        writeln!(
            out,
            "{} {} moveto {} {} lineto {} {} lineto",
            a.x, a.y, b.x, b.y, c.x, c.y
        )?;
    }

    writeln!(out, "stroke")?;
    writeln!(out, "grestore showpage")
}

fn page_vertices(triangle: &Triangle, params: &RenderParams) -> [Point2; 3] {
    triangle.map_vertices(|p| params.to_page(p)).vertices()
}

/// Tick from `m = a + 0.17 (b + c - 2a)` back halfway towards `a`.
fn vertex_marker(a: &Point2, b: &Point2, c: &Point2) -> (Point2, Point2) {
    let toward_base = add(&sub(b, a), &sub(c, a));
    let m = add(a, &scale(MARKER_REACH, &toward_base));
    let n = lerp(a, &m, 0.5);
    (m, n)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Tag, TriangleType};
    use crate::math::TOLERANCE;

    fn unit(kind: TriangleType) -> Triangle {
        Triangle::new(
            kind,
            Point2::origin(),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
    }

    #[test]
    fn document_structure() {
        let triangles = vec![
            unit(TriangleType::Acute),
            unit(TriangleType::Obtuse),
            unit(TriangleType::Obtuse),
        ];
        let ps = render_postscript(&triangles, &RenderParams::default()).unwrap();
        let lines: Vec<&str> = ps.lines().collect();

        assert_eq!(lines[0], "%!PS-Adobe-1.0");
        assert_eq!(lines[1], "%%BoundingBox: 0 0 1000 1000");
        assert_eq!(
            lines[5],
            "gsave 1 setlinejoin 1 setlinecap 0.2 setlinewidth 0 setgray"
        );
        assert_eq!(lines[6], "% 1 acute, 2 obtuse, 0 other triangles");
        assert_eq!(lines[7], "gsave .8 .8 1 setrgbcolor");
        assert_eq!(
            lines[8],
            "newpath 500 500 moveto 700 500 lineto 500 700 lineto closepath fill"
        );
        assert_eq!(lines.last().copied(), Some("grestore showpage"));
        assert_eq!(lines[lines.len() - 2], "stroke");

        let fills = lines.iter().filter(|l| l.ends_with("closepath fill")).count();
        assert_eq!(fills, 3);
    }

    #[test]
    fn fill_groups_are_ordered_obtuse_acute_other() {
        let strange = Triangle::with_tag(
            Tag::Other("strange".to_owned()),
            Point2::origin(),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        let triangles = vec![strange, unit(TriangleType::Acute), unit(TriangleType::Obtuse)];
        let ps = render_postscript(&triangles, &RenderParams::default()).unwrap();

        let obtuse = ps.find(OBTUSE_FILL).unwrap();
        let acute = ps.find(ACUTE_FILL).unwrap();
        let other = ps.find(OTHER_FILL).unwrap();
        assert!(obtuse < acute && acute < other);
    }

    #[test]
    fn marker_can_be_disabled() {
        let triangles = vec![unit(TriangleType::Acute)];
        let with_marker = render_postscript(&triangles, &RenderParams::default()).unwrap();
        let params = RenderParams {
            mark_vertex_a: false,
            ..RenderParams::default()
        };
        let without_marker = render_postscript(&triangles, &params).unwrap();

        let strokes = |ps: &str| {
            ps.lines()
                .filter(|l| l.ends_with("lineto") && !l.starts_with("newpath"))
                .count()
        };
        assert_eq!(strokes(&with_marker), 2);
        assert_eq!(strokes(&without_marker), 1);
    }

    #[test]
    fn marker_points_into_the_triangle() {
        let a = Point2::origin();
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let (m, n) = vertex_marker(&a, &b, &c);
        assert!((m.x - 0.17).abs() < TOLERANCE && (m.y - 0.17).abs() < TOLERANCE);
        assert!((n.x - 0.085).abs() < TOLERANCE && (n.y - 0.085).abs() < TOLERANCE);
    }

    #[test]
    fn invalid_params_fail() {
        let params = RenderParams {
            scale: -1.0,
            ..RenderParams::default()
        };
        assert!(render_postscript(&[], &params).is_err());
    }

    #[test]
    fn empty_tiling_still_renders() {
        let ps = render_postscript(&[], &RenderParams::default()).unwrap();
        assert!(ps.contains("% 0 acute, 0 obtuse, 0 other triangles"));
        assert!(ps.ends_with("grestore showpage\n"));
    }
}
