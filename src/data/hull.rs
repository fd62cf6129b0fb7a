use claims::debug_assert_ok;

use crate::data::{Point, PointLocation};
use crate::orientation::Orientation;
use crate::Error;

/// The boundary of a convex polygon: at least three vertices in
/// counter-clockwise order, every consecutive triple a strict left
/// turn. No colinear vertices survive construction, so each vertex is
/// a corner of the enclosed area.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
  vertices: Vec<Point>,
}

impl Hull {
  /// $O(1)$ Assume that a vertex sequence is a strictly convex,
  /// counter-clockwise boundary.
  ///
  /// The invariant is checked in debug builds only. Callers must
  /// guarantee it; [`Hull::validate`] checks it explicitly.
  pub fn new_unchecked(vertices: Vec<Point>) -> Hull {
    let hull = Hull { vertices };
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n)$ Verify the convexity invariant: three or more vertices and
  /// no consecutive triple that is colinear or turns clockwise.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.vertices.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for i in 0..n {
      let p = &self.vertices[i];
      let q = &self.vertices[(i + 1) % n];
      let r = &self.vertices[(i + 2) % n];
      if !p.orientation(q, r).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// The boundary in counter-clockwise order, starting at the pivot
  /// (lowest y-coordinate, leftmost on ties).
  pub fn points(&self) -> &[Point] {
    &self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  /// $O(n)$ Twice the signed area of the boundary: the shoelace sum
  /// over consecutive vertex pairs, with wraparound.
  pub fn signed_area_2x(&self) -> f64 {
    let n = self.vertices.len();
    (0..n)
      .map(|i| {
        let p = &self.vertices[i];
        let q = &self.vertices[(i + 1) % n];
        p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      .sum()
  }

  /// Signed area of the boundary. Positive for counter-clockwise
  /// order, which [`convex_hull`](crate::algorithms::convex_hull)
  /// always produces.
  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Enclosed area. Non-negative regardless of the winding of the
  /// vertex sequence.
  pub fn area(&self) -> f64 {
    self.signed_area().abs()
  }

  /// $O(n)$ Locate a point relative to the boundary.
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let n = self.vertices.len();
    let mut on_boundary = false;
    for i in 0..n {
      let p = &self.vertices[i];
      let q = &self.vertices[(i + 1) % n];
      match p.orientation(q, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_boundary = true,
        Orientation::CounterClockWise => {}
      }
    }
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}
