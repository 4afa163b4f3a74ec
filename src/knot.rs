use crate::error::SplineError;

/// Knot represents a point through which the spline passes.
/// - `x` - coordinate (cumulative distance along the route),
/// - `y` - coordinate (elevation).
#[derive(Debug, Clone, Copy)]
pub struct Knot {
    x: f64,
    y: f64,
}

impl Knot {
    pub fn new(x: f64, y: f64) -> Self {
        Knot { x, y }
    }

    /// Builds knots from separate coordinate slices.
    /// # Example
    /// ```
    /// use elevation_spline::Knot;
    ///
    /// let knots = Knot::from_pairs(&[0.0, 1.0, 2.0], &[4.0, 2.0, 6.0]).unwrap();
    /// assert_eq!(3, knots.len());
    /// assert_eq!(2.0, knots[1].get_y());
    /// ```
    /// # Errors
    /// Error is returned when slices have different lengths.
    /// ```
    /// use elevation_spline::Knot;
    ///
    /// assert!(Knot::from_pairs(&[0.0, 1.0], &[4.0]).is_err());
    /// ```
    pub fn from_pairs(xs: &[f64], ys: &[f64]) -> Result<Vec<Knot>, SplineError> {
        if xs.len() != ys.len() {
            return Err(SplineError::InvalidInput(format!(
                "got {} x values and {} y values",
                xs.len(),
                ys.len()
            )));
        }
        Ok(xs.iter().zip(ys).map(|(x, y)| Knot::new(*x, *y)).collect())
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Knot {
    fn from(pair: (f64, f64)) -> Self {
        Knot::new(pair.0, pair.1)
    }
}

impl Ord for Knot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x)
    }
}

impl PartialOrd for Knot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Knot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Knot {}
