//! Route statistics derived from the raw profile and the dense spline curve.

use serde::{Deserialize, Serialize};

use crate::route::Profile;

pub const STANDARD_GRAVITY: f64 = 9.81;
pub const JOULES_PER_KCAL: f64 = 4184.0;

/// Parameters used to turn elevation gain into mechanical work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyModel {
    pub mass_kg: f64,
    pub gravity: f64,
}

impl Default for EnergyModel {
    fn default() -> Self {
        EnergyModel { mass_kg: 80.0, gravity: STANDARD_GRAVITY }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStats {
    pub total_distance_m: f64,
    pub total_ascent_m: f64,
    pub total_descent_m: f64,
    /// Steepest climb of the smoothed curve, percent.
    pub max_climb_grade: f64,
    /// Steepest descent of the smoothed curve, percent (negative).
    pub max_descent_grade: f64,
    pub mean_abs_grade: f64,
    pub work_kj: f64,
    pub energy_kcal: f64,
}

impl RouteStats {
    /// Ascent and descent come from the raw profile points, grades from the dense `curve`.
    pub fn compute(profile: &Profile, curve: &[(f64, f64)], model: &EnergyModel) -> Self {
        let (total_ascent_m, total_descent_m) = ascent_descent(profile.elevations());

        let xs: Vec<f64> = curve.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = curve.iter().map(|p| p.1).collect();
        let grades: Vec<f64> = gradient(&xs, &ys).iter().map(|g| g * 100.0).collect();

        let max_climb_grade = grades.iter().cloned().fold(f64::NAN, f64::max);
        let max_descent_grade = grades.iter().cloned().fold(f64::NAN, f64::min);
        let mean_abs_grade = if grades.is_empty() {
            f64::NAN
        } else {
            grades.iter().map(|g| g.abs()).sum::<f64>() / grades.len() as f64
        };

        let work_j = model.mass_kg * model.gravity * total_ascent_m;

        RouteStats {
            total_distance_m: profile.total_distance(),
            total_ascent_m,
            total_descent_m,
            max_climb_grade,
            max_descent_grade,
            mean_abs_grade,
            work_kj: work_j / 1000.0,
            energy_kcal: work_j / JOULES_PER_KCAL,
        }
    }
}

/// Sums positive and negative steps between consecutive elevations. Both results are non-negative.
pub fn ascent_descent(elevations: &[f64]) -> (f64, f64) {
    elevations
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(ascent, descent), delta| {
            if delta > 0.0 {
                (ascent + delta, descent)
            } else {
                (ascent, descent - delta)
            }
        })
}

/// Derivative estimate at every point of a sampled curve with non-uniform spacing.
///
/// Interior points use second-order central differences, both ends one-sided first-order ones.
/// Fewer than 2 points give an empty result.
pub fn gradient(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(n);
    result.push((ys[1] - ys[0]) / (xs[1] - xs[0]));
    for i in 1..n - 1 {
        let hs = xs[i] - xs[i - 1];
        let hd = xs[i + 1] - xs[i];
        result.push(
            (hs * hs * ys[i + 1] + (hd * hd - hs * hs) * ys[i] - hd * hd * ys[i - 1])
                / (hs * hd * (hd + hs)),
        );
    }
    result.push((ys[n - 1] - ys[n - 2]) / (xs[n - 1] - xs[n - 2]));
    result
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn ascent_and_descent() {
        let (ascent, descent) = ascent_descent(&[100.0, 120.0, 110.0, 110.0, 150.0, 90.0]);

        assert_approx_eq!(ascent, 60.0, 1e-12);
        assert_approx_eq!(descent, 70.0, 1e-12);
        assert_eq!((0.0, 0.0), ascent_descent(&[42.0]));
    }

    #[test]
    fn gradient_exact_for_quadratic() {
        // second-order differences are exact for y = x^2 at interior points
        let xs = [0.0, 0.5, 1.5, 1.75, 3.0];
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();

        let result = gradient(&xs, &ys);

        assert_eq!(xs.len(), result.len());
        assert_approx_eq!(result[0], 0.5, 1e-12);
        for i in 1..xs.len() - 1 {
            assert_approx_eq!(result[i], 2.0 * xs[i], 1e-12);
        }
        assert_approx_eq!(result[4], (9.0 - 1.75 * 1.75) / 1.25, 1e-12);
    }

    #[test]
    fn gradient_of_short_input() {
        assert!(gradient(&[1.0], &[2.0]).is_empty());
        assert_eq!(vec![2.0, 2.0], gradient(&[0.0, 1.0], &[1.0, 3.0]));
    }

    #[test]
    fn stats_for_simple_route() {
        let profile = Profile::from_distances(
            vec![0.0, 100.0, 200.0, 300.0],
            vec![1000.0, 1010.0, 1005.0, 1025.0],
        )
        .unwrap();
        let curve = vec![(0.0, 1000.0), (100.0, 1010.0), (200.0, 1005.0), (300.0, 1025.0)];

        let stats = RouteStats::compute(&profile, &curve, &EnergyModel::default());

        assert_eq!(300.0, stats.total_distance_m);
        assert_approx_eq!(stats.total_ascent_m, 30.0, 1e-12);
        assert_approx_eq!(stats.total_descent_m, 5.0, 1e-12);
        // gradients: 10%, 2.5%, 7.5%, 20%
        assert_approx_eq!(stats.max_climb_grade, 20.0, 1e-9);
        assert_approx_eq!(stats.max_descent_grade, 2.5, 1e-9);
        assert_approx_eq!(stats.mean_abs_grade, 10.0, 1e-9);
        assert_approx_eq!(stats.work_kj, 80.0 * 9.81 * 30.0 / 1000.0, 1e-9);
        assert_approx_eq!(stats.energy_kcal, 80.0 * 9.81 * 30.0 / 4184.0, 1e-9);
    }

    #[test]
    fn energy_scales_with_mass() {
        let profile = Profile::from_distances(vec![0.0, 50.0], vec![0.0, 100.0]).unwrap();
        let curve = vec![(0.0, 0.0), (50.0, 100.0)];
        let light = RouteStats::compute(&profile, &curve, &EnergyModel { mass_kg: 50.0, gravity: 9.81 });
        let heavy = RouteStats::compute(&profile, &curve, &EnergyModel { mass_kg: 100.0, gravity: 9.81 });

        assert_approx_eq!(heavy.work_kj, 2.0 * light.work_kj, 1e-9);
        assert_approx_eq!(light.max_climb_grade, 200.0, 1e-9);
    }
}
