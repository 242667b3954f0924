//! City coordinates and input validation.

use crate::error::{TspError, TspResult};

/// A city: an immutable point in the plane.
///
/// Cities are identified by their index in the input slice; tours are
/// permutations of those indices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Create a new city at coordinates (x, y).
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another city.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for City {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

/// Minimum number of cities the annealer accepts.
pub const MIN_CITIES: usize = 2;

/// Checks that `cities` can be annealed: at least [`MIN_CITIES`]
/// entries, all coordinates finite, and the bounding box small enough
/// that summing `n²` distances stays finite.
///
/// The last bound covers both the tour length and the pairwise sum
/// behind the minimum temperature.
pub fn validate_cities(cities: &[City]) -> TspResult<()> {
    if cities.len() < MIN_CITIES {
        return Err(TspError::TooFewCities {
            found: cities.len(),
            required: MIN_CITIES,
        });
    }
    if let Some(index) = cities.iter().position(|c| !c.is_finite()) {
        return Err(TspError::NonFiniteCoordinate { index });
    }

    let (lo, hi) = cities.iter().fold(
        (
            City::new(f64::INFINITY, f64::INFINITY),
            City::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(lo, hi), c| {
            (
                City::new(lo.x.min(c.x), lo.y.min(c.y)),
                City::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        },
    );
    let span = lo.distance_to(&hi);
    let n = cities.len() as f64;
    if !(span * n * n).is_finite() {
        return Err(TspError::CoordinateOverflow { span });
    }
    Ok(())
}
