use log::trace;
use nalgebra::DVector;

use crate::error::SplineError;

/// Tridiagonal linear system `sub[i]*u[i-1] + diag[i]*u[i] + sup[i]*u[i+1] = rhs[i]`.
///
/// `sub[0]` and `sup[size-1]` fall outside of the matrix and are ignored.
#[derive(Debug, Clone)]
pub struct TridiagonalSystem {
    sub: DVector<f64>,
    diag: DVector<f64>,
    sup: DVector<f64>,
    rhs: DVector<f64>,
}

impl TridiagonalSystem {
    /// Creates system of given size with all entries set to zero.
    pub fn new(size: usize) -> Self {
        TridiagonalSystem {
            sub: DVector::zeros(size),
            diag: DVector::zeros(size),
            sup: DVector::zeros(size),
            rhs: DVector::zeros(size),
        }
    }

    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Sets all entries of a single row.
    /// # Panics
    /// When `row` is not lower than [TridiagonalSystem::size].
    pub fn set_row(&mut self, row: usize, sub: f64, diag: f64, sup: f64, rhs: f64) {
        self.sub[row] = sub;
        self.diag[row] = diag;
        self.sup[row] = sup;
        self.rhs[row] = rhs;
    }

    /// Solves the system with the Thomas algorithm (forward elimination followed by back substitution).
    ///
    /// Uses two scratch vectors of the system size, the second one is overwritten with the solution.
    /// No pivoting is done, so the system is expected to be diagonally dominant.
    /// # Errors
    /// Error is returned when elimination meets a zero or non-finite pivot.
    pub fn solve(&self) -> Result<DVector<f64>, SplineError> {
        let size = self.size();
        let mut ratio = DVector::<f64>::zeros(size);
        let mut eliminated_rhs = DVector::<f64>::zeros(size);

        if size == 0 {
            return Ok(eliminated_rhs);
        }

        let pivot = checked_pivot(self.diag[0], 0)?;
        ratio[0] = self.sup[0] / pivot;
        eliminated_rhs[0] = self.rhs[0] / pivot;

        for i in 1..size {
            let pivot = checked_pivot(self.diag[i] - self.sub[i] * ratio[i - 1], i)?;
            if i < size - 1 {
                ratio[i] = self.sup[i] / pivot;
            }
            eliminated_rhs[i] = (self.rhs[i] - self.sub[i] * eliminated_rhs[i - 1]) / pivot;
        }

        for i in (0..size - 1).rev() {
            eliminated_rhs[i] -= ratio[i] * eliminated_rhs[i + 1];
        }

        trace!("solved tridiagonal system of size {}", size);
        Ok(eliminated_rhs)
    }
}

fn checked_pivot(pivot: f64, row: usize) -> Result<f64, SplineError> {
    if pivot == 0.0 || !pivot.is_finite() {
        return Err(SplineError::InvalidInput(format!(
            "degenerate pivot {} in row {} of tridiagonal system",
            pivot, row
        )));
    }
    Ok(pivot)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::DMatrix;

    use super::*;

    fn dense(system: &TridiagonalSystem) -> DMatrix<f64> {
        let size = system.size();
        let mut matrix = DMatrix::<f64>::zeros(size, size);
        for i in 0..size {
            matrix[(i, i)] = system.diag[i];
            if i > 0 {
                matrix[(i, i - 1)] = system.sub[i];
            }
            if i + 1 < size {
                matrix[(i, i + 1)] = system.sup[i];
            }
        }
        matrix
    }

    #[test]
    fn empty_system() {
        let system = TridiagonalSystem::new(0);

        assert_eq!(0, system.solve().unwrap().len());
    }

    #[test]
    fn single_equation() {
        let mut system = TridiagonalSystem::new(1);
        system.set_row(0, 7.0, 4.0, 9.0, -2.0);

        let solution = system.solve().unwrap();

        assert_eq!(1, solution.len());
        assert_approx_eq!(solution[0], -0.5, 1e-12);
    }

    #[test]
    fn three_by_three() {
        // [2 1 0; 1 4 1; 0 1 2] u = [4 9 8]  =>  u = [1.5, 1, 3.5]
        let mut system = TridiagonalSystem::new(3);
        system.set_row(0, 0.0, 2.0, 1.0, 4.0);
        system.set_row(1, 1.0, 4.0, 1.0, 9.0);
        system.set_row(2, 1.0, 2.0, 0.0, 8.0);

        let solution = system.solve().unwrap();

        assert_approx_eq!(solution[0], 1.5, 1e-12);
        assert_approx_eq!(solution[1], 1.0, 1e-12);
        assert_approx_eq!(solution[2], 3.5, 1e-12);
    }

    #[test]
    fn matches_dense_lu() {
        let size = 12;
        let mut system = TridiagonalSystem::new(size);
        for i in 0..size {
            let h0 = 1.0 + (i as f64 * 0.7).sin().abs();
            let h1 = 0.5 + (i as f64 * 1.3).cos().abs();
            system.set_row(i, h0, 2.0 * (h0 + h1), h1, (i as f64 - 5.0) * 0.3);
        }

        let solution = system.solve().unwrap();
        let expected = dense(&system).lu().solve(&system.rhs).unwrap();

        for i in 0..size {
            assert_approx_eq!(solution[i], expected[i], 1e-10);
        }
    }

    #[test]
    fn zero_pivot_error() {
        let mut system = TridiagonalSystem::new(2);
        system.set_row(0, 0.0, 0.0, 1.0, 1.0);
        system.set_row(1, 1.0, 1.0, 0.0, 1.0);

        assert!(matches!(system.solve(), Err(SplineError::InvalidInput(_))));
    }
}
