//! Location error types.

use derive_more::{Display, Error};

/// Error returned by [`GeolocationProvider`](super::GeolocationProvider) operations.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum LocationError {
    /// No device position is available.
    #[display("Location services are disabled")]
    ServicesDisabled,
    /// Coordinates were malformed or out of range.
    #[display("Invalid coordinates: {_0}")]
    InvalidCoordinates(#[error(not(source))] String),
    /// No known place lies close enough to the coordinates.
    #[display("No place found within {max_distance_km} km")]
    NoPlaceFound {
        /// Search radius that was used.
        max_distance_km: f64,
    },
}
