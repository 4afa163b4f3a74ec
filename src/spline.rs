use log::debug;

use crate::{error::SplineError, knot::Knot, polynomial::Polynomial, tridiagonal::TridiagonalSystem};

/// Smallest number of knots accepted by [Spline::new].
pub const MIN_KNOTS: usize = 3;

/// Coefficients of a single segment `S_i(x) = a + b*dx + c*dx^2 + d*dx^3`, `dx = x - x_i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Natural cubic spline passing through a fixed sequence of knots.
///
/// Coefficients are computed once in [Spline::new] and never change afterwards,
/// so a spline can be shared between threads without synchronization.
#[derive(Debug, Clone)]
pub struct Spline {
    knots: Vec<Knot>,
    polynomials: Vec<Polynomial>,
    curvatures: Vec<f64>,
    min_x: f64,
    max_x: f64,
    is_knot_spacing_uniform: bool,
}

impl Spline {
    /// Builds natural cubic spline (second derivative equal to zero at both ends).
    /// # Errors
    /// [SplineError::InvalidInput] is returned when there are fewer than [MIN_KNOTS] knots,
    /// any coordinate is not finite, x values are not strictly increasing or the computed
    /// coefficients overflow.
    pub fn new(knots: Vec<Knot>) -> Result<Self, SplineError> {
        if knots.len() < MIN_KNOTS {
            return Err(SplineError::InvalidInput(format!(
                "spline must have at least {} knots, got {}",
                MIN_KNOTS,
                knots.len()
            )));
        }
        if let Some(index) = knots.iter().position(|k| !k.is_finite()) {
            return Err(SplineError::InvalidInput(format!(
                "knot {} has non-finite coordinates",
                index
            )));
        }

        let spacing = calculate_spacing(&knots)?;
        let is_knot_spacing_uniform = is_uniform(&spacing);
        let curvatures = calculate_curvatures(&knots, &spacing)?;
        let polynomials = calculate_polynomials(&knots, &spacing, &curvatures)?;

        debug!(
            "built natural spline over {} knots (uniform spacing: {})",
            knots.len(),
            is_knot_spacing_uniform
        );

        Ok(Spline {
            min_x: knots[0].get_x(),
            max_x: knots[knots.len() - 1].get_x(),
            knots,
            polynomials,
            curvatures,
            is_knot_spacing_uniform,
        })
    }

    /// Builds spline from separate x and y slices. See [Spline::new].
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, SplineError> {
        Spline::new(Knot::from_pairs(xs, ys)?)
    }

    /// Evaluates spline at `x`.
    /// # Errors
    /// [SplineError::OutOfRange] is returned when `x` lies outside of `[min_x, max_x]` or is NaN.
    pub fn interpolate(&self, x: f64) -> Result<f64, SplineError> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.polynomials[index].evaluate(x))
    }

    /// First derivative of the spline at `x` (rise over run).
    pub fn slope(&self, x: f64) -> Result<f64, SplineError> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.polynomials[index].derivative(x))
    }

    /// Second derivative of the spline at `x`.
    pub fn curvature(&self, x: f64) -> Result<f64, SplineError> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.polynomials[index].second_derivative(x))
    }

    /// Evaluates spline at every point of `x_vector`. Consecutive points are expected to be
    /// close to each other, previous segment is used as a starting point of the search.
    /// # Errors
    /// [SplineError::OutOfRange] for the first point outside of the knot range.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            self.check_range(*x)?;
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.polynomials[index].evaluate(*x));
        }
        Ok(results)
    }

    /// Evaluates spline at `count` evenly spaced points from `min_x` to `max_x` inclusive.
    /// # Errors
    /// [SplineError::InvalidInput] when `count` is lower than 2.
    pub fn sample(&self, count: usize) -> Result<Vec<(f64, f64)>, SplineError> {
        if count < 2 {
            return Err(SplineError::InvalidInput(format!(
                "at least 2 sample points are required, got {}",
                count
            )));
        }

        let step = (self.max_x - self.min_x) / (count - 1) as f64;
        let x_vector: Vec<f64> = (0..count)
            .map(|i| if i == count - 1 { self.max_x } else { self.min_x + step * i as f64 })
            .collect();
        let y_vector = self.batch_interpolate(&x_vector)?;

        Ok(x_vector.into_iter().zip(y_vector).collect())
    }

    /// Coefficients of every segment, ordered by x.
    pub fn coefficients(&self) -> Vec<SegmentCoefficients> {
        self.polynomials
            .iter()
            .map(|p| {
                let [a, b, c, d] = p.coefficients();
                SegmentCoefficients { a, b, c, d }
            })
            .collect()
    }

    /// `c` coefficient of every knot, including both ends where it is zero.
    pub fn curvatures(&self) -> &[f64] {
        &self.curvatures
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn number_of_segments(&self) -> usize {
        self.polynomials.len()
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    fn check_range(&self, x: f64) -> Result<(), SplineError> {
        if self.min_x <= x && x <= self.max_x {
            Ok(())
        } else {
            Err(SplineError::OutOfRange { x, min: self.min_x, max: self.max_x })
        }
    }

    fn find_interval_index(&self, x: f64) -> usize {
        if self.is_knot_spacing_uniform {
            self.find_interval_index_uniform(x)
        } else {
            self.find_interval_index_bisect(x)
        }
    }

    // Knot shared by two segments belongs to the lower one.
    fn find_interval_index_bisect(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.knots.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x <= self.knots[mid].get_x() {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_uniform(&self, x: f64) -> usize {
        let number_of_segments = self.polynomials.len();
        let relative_x = (x - self.min_x) / (self.max_x - self.min_x);
        let guess = ((relative_x * number_of_segments as f64).ceil() as usize)
            .saturating_sub(1)
            .min(number_of_segments - 1);
        self.correct_interval_index(guess, x)
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            return index_hint;
        }
        if index_hint + 1 < self.polynomials.len() && self.is_in_interval_range(index_hint + 1, x) {
            return index_hint + 1;
        }
        self.find_interval_index(x)
    }

    fn correct_interval_index(&self, mut index: usize, x: f64) -> usize {
        while index + 1 < self.polynomials.len() && x > self.knots[index + 1].get_x() {
            index += 1;
        }
        while index > 0 && x <= self.knots[index].get_x() {
            index -= 1;
        }
        index
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        let lower = self.knots[interval_index].get_x();
        let upper = self.knots[interval_index + 1].get_x();
        let above_lower = if interval_index == 0 { lower <= x } else { lower < x };
        above_lower && x <= upper
    }
}

fn calculate_spacing(knots: &[Knot]) -> Result<Vec<f64>, SplineError> {
    let spacing: Vec<f64> = knots
        .windows(2)
        .map(|w| w[1].get_x() - w[0].get_x())
        .collect();

    if let Some(index) = spacing.iter().position(|h| *h <= 0.0) {
        return Err(SplineError::InvalidInput(format!(
            "x values must be strictly increasing, knot {} has x = {} after x = {}",
            index + 1,
            knots[index + 1].get_x(),
            knots[index].get_x()
        )));
    }
    Ok(spacing)
}

fn is_uniform(spacing: &[f64]) -> bool {
    let tolerance = 1e-12 * spacing.iter().cloned().fold(0.0, f64::max);
    spacing
        .windows(2)
        .all(|w| (w[1] - w[0]).abs() <= tolerance)
}

// Interior c_1..c_{n-2} from
// h_{i-1} c_{i-1} + 2 (h_{i-1} + h_i) c_i + h_i c_{i+1} = 3 (dy_i / h_i - dy_{i-1} / h_{i-1})
// with c_0 = c_{n-1} = 0.
fn calculate_curvatures(knots: &[Knot], spacing: &[f64]) -> Result<Vec<f64>, SplineError> {
    let n = knots.len();
    let mut system = TridiagonalSystem::new(n - 2);

    for row in 0..n - 2 {
        let i = row + 1;
        let slope_before = (knots[i].get_y() - knots[i - 1].get_y()) / spacing[i - 1];
        let slope_after = (knots[i + 1].get_y() - knots[i].get_y()) / spacing[i];
        system.set_row(
            row,
            spacing[i - 1],
            2.0 * (spacing[i - 1] + spacing[i]),
            spacing[i],
            3.0 * (slope_after - slope_before),
        );
    }

    let interior = system.solve()?;
    if let Some(row) = interior.iter().position(|c| !c.is_finite()) {
        return Err(SplineError::InvalidInput(format!(
            "curvature at knot {} overflows, knots are too close or too high",
            row + 1
        )));
    }
    let mut curvatures = vec![0.0; n];
    curvatures[1..n - 1].copy_from_slice(interior.as_slice());
    Ok(curvatures)
}

fn calculate_polynomials(
    knots: &[Knot],
    spacing: &[f64],
    curvatures: &[f64],
) -> Result<Vec<Polynomial>, SplineError> {
    (0..knots.len() - 1)
        .map(|i| {
            let h = spacing[i];
            let a = knots[i].get_y();
            let c = curvatures[i];
            let d = (curvatures[i + 1] - c) / (3.0 * h);
            let b = (knots[i + 1].get_y() - a) / h - h * (curvatures[i + 1] + 2.0 * c) / 3.0;
            if !(b.is_finite() && d.is_finite()) {
                return Err(SplineError::InvalidInput(format!(
                    "coefficients of segment {} overflow, knots are too close or too high",
                    i
                )));
            }
            Ok(Polynomial::new(knots[i].get_x(), [a, b, c, d]))
        })
        .collect()
}
