use thiserror::Error;

/// Errors reported while building or querying a [Spline](crate::Spline).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Knots cannot define a natural cubic spline (too few, not finite or not strictly increasing).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Query point lies outside of the closed knot range.
    #[error("x = {x} is out of range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },
}

/// Errors reported while turning GPS samples into a distance/elevation profile.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("failed to read elevation samples: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse elevation samples: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("route needs at least {required} points, got {got}")]
    TooFewPoints { required: usize, got: usize },
    #[error("got {distances} distances and {elevations} elevations")]
    LengthMismatch { distances: usize, elevations: usize },
    #[error("cannot select {requested} nodes from a profile of {available} points")]
    InvalidSubset { requested: usize, available: usize },
    #[error(transparent)]
    Spline(#[from] SplineError),
}
