/// Cubic polynomial of a single spline segment in local form
/// `a + b*dx + c*dx^2 + d*dx^3` where `dx = x - x_start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    x_start: f64,
    coefficients: [f64; 4],
}

impl Polynomial {
    pub fn new(x_start: f64, coefficients: [f64; 4]) -> Self {
        Polynomial { x_start, coefficients }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.x_start;
        let [a, b, c, d] = self.coefficients;
        a + dx * (b + dx * (c + dx * d))
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let dx = x - self.x_start;
        let [_, b, c, d] = self.coefficients;
        b + dx * (2.0 * c + dx * 3.0 * d)
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let dx = x - self.x_start;
        let [_, _, c, d] = self.coefficients;
        2.0 * c + 6.0 * d * dx
    }

    pub fn coefficients(&self) -> [f64; 4] {
        self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {
        let eps = 1e-6;
        let polynomial = Polynomial::new(0.0, [1.0, 2.5, -0.25, 0.0]);

        assert_approx_eq!(polynomial.evaluate(2.1), 5.1475, eps);
        assert_approx_eq!(polynomial.evaluate(-3.14), -9.3149, eps);
        assert_approx_eq!(polynomial.evaluate(0.0), 1.0, eps);
    }

    #[test]
    fn evaluate_shifted() {
        let eps = 1e-9;
        // (x - 2)^3 written around x_start = 2
        let polynomial = Polynomial::new(2.0, [0.0, 0.0, 0.0, 1.0]);

        assert_approx_eq!(polynomial.evaluate(2.0), 0.0, eps);
        assert_approx_eq!(polynomial.evaluate(3.0), 1.0, eps);
        assert_approx_eq!(polynomial.evaluate(0.5), -3.375, eps);
    }

    #[test]
    fn derivatives() {
        let eps = 1e-9;
        let polynomial = Polynomial::new(1.0, [2.0, -1.0, 0.5, 0.25]);

        // dx = 2
        assert_approx_eq!(polynomial.derivative(3.0), -1.0 + 2.0 * 0.5 * 2.0 + 3.0 * 0.25 * 4.0, eps);
        assert_approx_eq!(polynomial.second_derivative(3.0), 2.0 * 0.5 + 6.0 * 0.25 * 2.0, eps);
        assert_approx_eq!(polynomial.second_derivative(1.0), 1.0, eps);
    }
}
