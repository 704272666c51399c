//! The geolocation contract.

use derive_more::Display;
use serde::Deserialize;
use tracing::{instrument, warn};

use super::LocationError;

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Display, Deserialize)]
#[display("{latitude:.4}, {longitude:.4}")]
pub struct Coordinates {
    /// Latitude, -90 to 90.
    pub latitude: f64,
    /// Longitude, -180 to 180.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidCoordinates`] for non-finite or
    /// out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(LocationError::InvalidCoordinates(format!(
                "{}, {}",
                latitude, longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses `"lat,lon"`.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::InvalidCoordinates`] if the text is not two
    /// comma-separated numbers in range.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, LocationError> {
        let invalid = || LocationError::InvalidCoordinates(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let lat = lat.trim().parse().map_err(|_| invalid())?;
        let lon = lon.trim().parse().map_err(|_| invalid())?;
        Self::new(lat, lon)
    }
}

/// Source of the device position and place names.
pub trait GeolocationProvider {
    /// Returns the current device position.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::ServicesDisabled`] when no position is available.
    fn request_location(&self) -> Result<Coordinates, LocationError>;

    /// Resolves coordinates to a place (city) name.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::NoPlaceFound`] when nothing matches.
    fn reverse_geocode(&self, coords: Coordinates) -> Result<String, LocationError>;
}

/// Produces the one-line location text shown to the user.
#[instrument(skip(provider))]
pub fn describe(provider: &dyn GeolocationProvider) -> String {
    let coords = match provider.request_location() {
        Ok(coords) => coords,
        Err(LocationError::ServicesDisabled) => {
            return LocationError::ServicesDisabled.to_string();
        }
        Err(e) => {
            warn!(error = %e, "Location request failed");
            return "Failed to determine location".to_string();
        }
    };

    match provider.reverse_geocode(coords) {
        Ok(city) => format!("City: {}", city),
        Err(LocationError::NoPlaceFound { .. }) => "Failed to determine city".to_string(),
        Err(e) => {
            warn!(error = %e, %coords, "Reverse geocoding failed");
            "Failed to determine location".to_string()
        }
    }
}
