//! Distance/elevation profile of a route built from GPS elevation samples.
//!
//! Samples are read in the Open-Elevation lookup format:
//! ```json
//! {"results": [{"latitude": 48.164214, "longitude": 24.536044, "elevation": 1294.0}]}
//! ```

use std::{fs::File, io::{BufReader, Read}, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::RouteError, knot::Knot, spline::Spline};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Single GPS sample with its elevation in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    results: Vec<GeoPoint>,
}

/// Reads elevation samples from an Open-Elevation style JSON document.
pub fn read_elevation_samples<R: Read>(reader: R) -> Result<Vec<GeoPoint>, RouteError> {
    let response: ElevationResponse = serde_json::from_reader(reader)?;
    Ok(response.results)
}

/// Reads elevation samples from a JSON file. See [read_elevation_samples].
pub fn load_elevation_samples(path: &Path) -> Result<Vec<GeoPoint>, RouteError> {
    let file = File::open(path)?;
    let points = read_elevation_samples(BufReader::new(file))?;
    debug!("read {} elevation samples from {}", points.len(), path.display());
    Ok(points)
}

/// Great-circle distance in metres between two coordinates given in degrees.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Cumulative distance along the route paired with elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    distances: Vec<f64>,
    elevations: Vec<f64>,
}

impl Profile {
    /// Accumulates haversine distances between consecutive samples, starting at 0.
    /// # Errors
    /// [RouteError::TooFewPoints] when there are fewer than 2 samples.
    pub fn from_points(points: &[GeoPoint]) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::TooFewPoints { required: 2, got: points.len() });
        }

        let mut distances = Vec::with_capacity(points.len());
        let mut cumulative = 0.0;
        distances.push(cumulative);
        for pair in points.windows(2) {
            cumulative += haversine_distance(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            );
            distances.push(cumulative);
        }
        let elevations = points.iter().map(|p| p.elevation).collect();

        debug!("route profile of {} points, {:.2} m long", points.len(), cumulative);
        Ok(Profile { distances, elevations })
    }

    /// Profile from already accumulated distances.
    /// # Errors
    /// [RouteError::LengthMismatch] when vectors have different lengths,
    /// [RouteError::TooFewPoints] when there are fewer than 2 entries.
    pub fn from_distances(distances: Vec<f64>, elevations: Vec<f64>) -> Result<Self, RouteError> {
        if distances.len() != elevations.len() {
            return Err(RouteError::LengthMismatch {
                distances: distances.len(),
                elevations: elevations.len(),
            });
        }
        if distances.len() < 2 {
            return Err(RouteError::TooFewPoints { required: 2, got: distances.len() });
        }
        Ok(Profile { distances, elevations })
    }

    /// Keeps `count` evenly spread points, index `k` maps to `floor(k * (n - 1) / (count - 1))`.
    /// First and last point are always kept.
    pub fn subset(&self, count: usize) -> Result<Profile, RouteError> {
        let available = self.len();
        if count < 2 || count > available {
            return Err(RouteError::InvalidSubset { requested: count, available });
        }

        let indices = (0..count).map(|k| k * (available - 1) / (count - 1));
        let (distances, elevations) = indices
            .map(|i| (self.distances[i], self.elevations[i]))
            .unzip();
        Ok(Profile { distances, elevations })
    }

    pub fn knots(&self) -> Vec<Knot> {
        self.distances
            .iter()
            .zip(&self.elevations)
            .map(|(x, y)| Knot::new(*x, *y))
            .collect()
    }

    pub fn to_spline(&self) -> Result<Spline, RouteError> {
        Ok(Spline::new(self.knots())?)
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn elevations(&self) -> &[f64] {
        &self.elevations
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn total_distance(&self) -> f64 {
        self.distances.last().copied().unwrap_or(0.0)
    }
}
