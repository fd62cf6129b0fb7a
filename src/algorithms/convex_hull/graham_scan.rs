use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::Error;

// https://en.wikipedia.org/wiki/Graham_scan

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon
/// which contains all the given points. Duplicate points are discarded
/// before the scan.
///
/// # Errors
/// Will return an error iff the input set contains less than three
/// distinct points, or if all distinct points are colinear.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * The boundary is counter-clockwise, starting at the pivot (lowest
///   y-coordinate, leftmost on ties), and strictly convex.
///
/// # Examples
///
/// ```rust
/// # use hullarea::algorithms::convex_hull;
/// # use hullarea::data::Point;
/// # use hullarea::Error;
/// let empty_set: Vec<Point> = vec![];
/// assert_eq!(convex_hull(empty_set).err(), Some(Error::InsufficientVertices));
/// ```
///
/// ```rust
/// # use hullarea::algorithms::convex_hull;
/// # use hullarea::data::Point;
/// # use hullarea::Error;
/// let dups = vec![Point::new(1.0, 1.0)?; 5];
/// assert_eq!(convex_hull(dups).err(), Some(Error::InsufficientVertices));
/// # Ok::<(), Error>(())
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(mut pts: Vec<Point>) -> Result<Hull, Error> {
  // (y, x) ordering lines duplicates up for dedup and puts the pivot at
  // index 0.
  pts.sort_unstable();
  pts.dedup();
  if pts.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  let pivot = pts[0];
  pts[1..].sort_unstable_by(|q1, q2| pivot.ccw_cmp_around(q1, q2));

  let pruned = prune_colinear(&pivot, pts);
  if pruned.len() < 3 {
    // Every point shares one line through the pivot.
    return Err(Error::InsufficientVertices);
  }

  let mut stack: Vec<Point> = Vec::with_capacity(pruned.len());
  stack.extend_from_slice(&pruned[..2]);
  for candidate in &pruned[2..] {
    while stack.len() > 1
      && !stack[stack.len() - 2]
        .orientation(&stack[stack.len() - 1], candidate)
        .is_ccw()
    {
      stack.pop();
    }
    stack.push(*candidate);
  }
  Ok(Hull::new_unchecked(stack))
}

/// $O(n \log n)$ Area of the smallest convex polygon enclosing a batch
/// of raw coordinate pairs.
///
/// One batch in, one area out: the pairs are validated, deduplicated by
/// exact equality and hulled, and the hull's area is returned. A batch
/// with fewer than three distinct points, or with all points on one
/// line, encloses nothing and yields exactly `0.0`.
///
/// The returned area is non-negative. Callers that want duplicate
/// detection at a fixed decimal precision must round the coordinates
/// before the call, e.g. with [`Point::rounded`].
///
/// # Errors
/// Will return `Error::NonFiniteCoordinate` if any coordinate is NaN or
/// infinite. The whole batch is rejected; no partial result is
/// produced.
///
/// # Examples
///
/// ```rust
/// # use hullarea::algorithms::min_polygon_area;
/// let square = vec![(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)];
/// assert_eq!(min_polygon_area(square), Ok(4.0));
/// ```
pub fn min_polygon_area<I>(coords: I) -> Result<f64, Error>
where
  I: IntoIterator<Item = (f64, f64)>,
{
  let pts = coords
    .into_iter()
    .map(Point::try_from)
    .collect::<Result<Vec<Point>, Error>>()?;
  match convex_hull(pts) {
    Ok(hull) => Ok(hull.area()),
    Err(Error::InsufficientVertices) => Ok(0.0),
    Err(err) => Err(err),
  }
}

// Collapse each run of points that share an angle around the pivot down
// to the one farthest from it. A nearer colinear point would sit on a
// hull edge and corrupt the area sum.
//
// `pts` is the deduplicated set with the pivot at index 0 and the rest
// in angular order. The sort leaves equal angles in unspecified order,
// so each candidate is compared against the last point kept rather than
// against its sort neighbour.
fn prune_colinear(pivot: &Point, pts: Vec<Point>) -> Vec<Point> {
  let mut kept: Vec<Point> = Vec::with_capacity(pts.len());
  for candidate in pts {
    match kept.last_mut() {
      Some(last) if *last != *pivot && pivot.orientation(last, &candidate).is_colinear() => {
        if pivot.cmp_distance_to(last, &candidate) == Ordering::Less {
          *last = candidate;
        }
      }
      _ => kept.push(candidate),
    }
  }
  kept
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use claims::assert_ok;
  use proptest::collection::vec;
  use proptest::prelude::*;

  fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw
      .iter()
      .map(|&(x, y)| Point::new(x, y).unwrap())
      .collect()
  }

  #[test]
  fn convex_hull_colinear() {
    let points = pts(&[
      (0.0, 0.0),
      (1.0, 0.0),
      (2.0, 0.0),
      (3.0, 0.0),
      (4.0, 0.0),
      (1.0, 1.0),
    ]);
    let hull = convex_hull(points).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.points(), pts(&[(0.0, 0.0), (4.0, 0.0), (1.0, 1.0)]));
  }

  #[test]
  fn convex_hull_colinear_rev() {
    let points = pts(&[
      (0.0, 0.0),
      (1.0, 0.0),
      (0.0, 9.0),
      (0.0, 8.0),
      (0.0, 7.0),
      (0.0, 6.0),
    ]);
    let hull = convex_hull(points).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.points(), pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 9.0)]));
  }

  #[test]
  fn convex_hull_pops_shallow_bulge() {
    // (50,1) and (40,1) are pushed and later popped in one sweep step.
    let points = pts(&[
      (0.0, 0.0),
      (100.0, 0.0),
      (50.0, 1.0),
      (40.0, 1.0),
      (0.0, 100.0),
    ]);
    let hull = convex_hull(points).unwrap();
    assert_ok!(hull.validate());
  }

  #[test]
  fn convex_hull_all_colinear_is_degenerate() {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    assert_eq!(convex_hull(points).err(), Some(Error::InsufficientVertices));
  }

  #[test]
  fn convex_hull_triangle() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let hull = convex_hull(points).unwrap();
    assert_eq!(hull.points(), pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]));
  }

  #[test]
  fn pivot_is_lowest_leftmost() {
    let points = pts(&[(3.0, 1.0), (-2.0, 1.0), (0.0, 5.0), (1.0, 3.0)]);
    let hull = convex_hull(points).unwrap();
    assert_eq!(hull.points()[0], Point::new(-2.0, 1.0).unwrap());
  }

  #[test]
  fn min_polygon_area_degenerate_batches() {
    assert_eq!(min_polygon_area(vec![]), Ok(0.0));
    assert_eq!(min_polygon_area(vec![(1.0, 1.0)]), Ok(0.0));
    assert_eq!(min_polygon_area(vec![(1.0, 1.0), (2.0, 2.0)]), Ok(0.0));
    // Duplicates do not make a batch non-degenerate.
    assert_eq!(
      min_polygon_area(vec![(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]),
      Ok(0.0)
    );
  }

  #[test]
  fn min_polygon_area_rejects_non_finite() {
    assert_eq!(
      min_polygon_area(vec![(0.0, 0.0), (f64::NAN, 1.0), (2.0, 0.0)]),
      Err(Error::NonFiniteCoordinate)
    );
    assert_eq!(
      min_polygon_area(vec![(0.0, 0.0), (1.0, f64::INFINITY), (2.0, 0.0)]),
      Err(Error::NonFiniteCoordinate)
    );
  }

  proptest! {
    #[test]
    fn convex_hull_prop(points in vec(any_point(), 0..100)) {
      if let Ok(hull) = convex_hull(points.clone()) {
        // Results are valid.
        assert_ok!(hull.validate());
        // No points from the input set are outside the hull.
        for pt in points.iter() {
          prop_assert_ne!(hull.locate(pt), PointLocation::Outside);
        }
        // All vertices are in the input set.
        for pt in hull.iter() {
          prop_assert!(points.contains(pt));
        }
      }
    }

    // Lattice inputs hit duplicate and colinear runs constantly.
    #[test]
    fn convex_hull_lattice_prop(points in vec(any_lattice_point(), 0..60)) {
      if let Ok(hull) = convex_hull(points.clone()) {
        assert_ok!(hull.validate());
        for pt in points.iter() {
          prop_assert_ne!(hull.locate(pt), PointLocation::Outside);
        }
      }
    }

    #[test]
    fn duplicated_input_same_hull(points in vec(any_lattice_point(), 3..40)) {
      let mut doubled = points.clone();
      doubled.extend_from_slice(&points);
      prop_assert_eq!(
        convex_hull(points).map(|h| h.points().to_vec()).ok(),
        convex_hull(doubled).map(|h| h.points().to_vec()).ok()
      );
    }
  }
}
