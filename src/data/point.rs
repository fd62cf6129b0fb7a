use ordered_float::NotNan;
use std::cmp::Ordering;
use std::convert::TryFrom;

use crate::orientation::Orientation;
use crate::Error;

/// An immutable 2D coordinate pair.
///
/// Coordinates are finite `f64` values: construction rejects NaN and
/// infinities, so every comparison on a `Point` is total. Equality is
/// exact value equality on both coordinates, and two equal points are
/// indistinguishable; duplicate filtering relies on this.
///
/// The derived ordering is by y-coordinate first, then x-coordinate.
/// The minimum of a point set under this order is the Graham-scan
/// pivot: the lowest point, leftmost on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
  x: NotNan<f64>,
  y: NotNan<f64>,
}

impl Point {
  /// # Errors
  /// Will return `Error::NonFiniteCoordinate` if either coordinate is
  /// NaN or infinite.
  pub fn new(x: f64, y: f64) -> Result<Point, Error> {
    if !x.is_finite() || !y.is_finite() {
      return Err(Error::NonFiniteCoordinate);
    }
    let x = NotNan::new(x).map_err(|_| Error::NonFiniteCoordinate)?;
    let y = NotNan::new(y).map_err(|_| Error::NonFiniteCoordinate)?;
    Ok(Point { x, y })
  }

  pub fn x_coord(&self) -> f64 {
    self.x.into_inner()
  }

  pub fn y_coord(&self) -> f64 {
    self.y.into_inner()
  }

  fn to_array(self) -> [f64; 2] {
    [self.x_coord(), self.y_coord()]
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `q` to `r`. See [`Orientation::new`].
  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&self.to_array(), &q.to_array(), &r.to_array())
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    let dx = rhs.x_coord() - self.x_coord();
    let dy = rhs.y_coord() - self.y_coord();
    dx * dx + dy * dy
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  /// Compare the angles of `q1` and `q2` around `self`, counter-clockwise
  /// from the positive x-axis.
  ///
  /// The comparison uses a half-plane split instead of computing angles:
  /// a point on or above the horizontal line through `self` precedes any
  /// point below it, two points on the horizontal line order by which
  /// side of `self` they fall on, and within one half-plane the turn
  /// direction of `(self, q1, q2)` decides.
  ///
  /// This is a strict weak ordering. Two points at the exact same angle
  /// (colinear with `self`) compare `Equal` and their relative order is
  /// unspecified; callers that need a single survivor per angle must
  /// break the tie themselves, e.g. by distance.
  pub fn ccw_cmp_around(&self, q1: &Point, q2: &Point) -> Ordering {
    let dy1 = q1.y_coord() - self.y_coord();
    let dy2 = q2.y_coord() - self.y_coord();
    if dy1 >= 0.0 && dy2 < 0.0 {
      Ordering::Less
    } else if dy2 >= 0.0 && dy1 < 0.0 {
      Ordering::Greater
    } else if dy1 == 0.0 && dy2 == 0.0 {
      let dx1 = q1.x_coord() - self.x_coord();
      let dx2 = q2.x_coord() - self.x_coord();
      if dx1 >= 0.0 && dx2 < 0.0 {
        Ordering::Less
      } else if dx2 >= 0.0 && dx1 < 0.0 {
        Ordering::Greater
      } else {
        Ordering::Equal
      }
    } else {
      match self.orientation(q1, q2) {
        Orientation::CounterClockWise => Ordering::Less,
        Orientation::ClockWise => Ordering::Greater,
        Orientation::CoLinear => Ordering::Equal,
      }
    }
  }

  /// Round both coordinates to `decimals` decimal places, ties to even.
  ///
  /// Rounding input coordinates is a caller policy: apply this before
  /// hulling when duplicates should collapse at a fixed precision
  /// rather than at exact equality. Magnitudes too large to scale
  /// without overflow carry no fractional digits and are returned
  /// unchanged.
  #[must_use]
  pub fn rounded(&self, decimals: i32) -> Point {
    let scale = 10f64.powi(decimals);
    let round = |c: f64| {
      let scaled = c * scale;
      if scaled.is_finite() {
        scaled.round_ties_even() / scale
      } else {
        c
      }
    };
    Point::new(round(self.x_coord()), round(self.y_coord())).unwrap_or(*self)
  }
}

impl PartialOrd for Point {
  fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Point {
  fn cmp(&self, other: &Point) -> Ordering {
    self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
  }
}

impl TryFrom<(f64, f64)> for Point {
  type Error = Error;
  fn try_from((x, y): (f64, f64)) -> Result<Point, Error> {
    Point::new(x, y)
  }
}
