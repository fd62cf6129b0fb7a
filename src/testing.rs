// Strategies for generating points with finite, well-behaved
// coordinates.
use proptest::prelude::*;

use crate::data::Point;

const COORD_LIMIT: f64 = 1e6;

pub fn any_coord() -> impl Strategy<Value = f64> {
  -COORD_LIMIT..COORD_LIMIT
}

pub fn any_point() -> impl Strategy<Value = Point> {
  (any_coord(), any_coord()).prop_map(|(x, y)| Point::new(x, y).unwrap())
}

// Small integer coordinates collide often, producing duplicates and
// colinear runs far more frequently than continuous sampling would.
pub fn any_lattice_point() -> impl Strategy<Value = Point> {
  (-10i32..=10, -10i32..=10).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)).unwrap())
}
