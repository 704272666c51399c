//! Offline provider: position from configuration, names from a gazetteer.

use tracing::{debug, info, instrument, warn};

use super::{Coordinates, GeolocationProvider, LocationError};
use crate::config::{LocationConfig, PlaceConfig};

/// Mean Earth radius used for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// [`GeolocationProvider`] backed by configuration.
///
/// The device position is fixed at construction. A malformed position is
/// kept as an error and reported by [`request_location`](GeolocationProvider::request_location).
/// Reverse geocoding picks the nearest known place within `max_distance_km`.
#[derive(Debug, Clone)]
pub struct ConfiguredLocationProvider {
    position: Result<Coordinates, LocationError>,
    places: Vec<PlaceConfig>,
    max_distance_km: f64,
}

impl ConfiguredLocationProvider {
    /// Creates a provider from explicit parts. `None` means location
    /// services are disabled.
    #[instrument(skip(places), fields(place_count = places.len()))]
    pub fn new(position: Option<Coordinates>, places: Vec<PlaceConfig>, max_distance_km: f64) -> Self {
        Self {
            position: position.ok_or(LocationError::ServicesDisabled),
            places,
            max_distance_km,
        }
    }

    /// Builds a provider from the `[location]` config section.
    ///
    /// `env_override` is the raw `MINI_APPS_LOCATION` value, if set; it takes
    /// precedence over configured coordinates. A malformed override, invalid
    /// configured coordinates, or only one of latitude and longitude being
    /// set is logged and later surfaced by `request_location` as
    /// [`LocationError::InvalidCoordinates`].
    #[instrument(skip(config))]
    pub fn from_config(config: &LocationConfig, env_override: Option<&str>) -> Self {
        let position = match (env_override, config.latitude(), config.longitude()) {
            (Some(raw), _, _) => Coordinates::parse(raw),
            (None, Some(lat), Some(lon)) => Coordinates::new(*lat, *lon),
            (None, None, None) => Err(LocationError::ServicesDisabled),
            (None, lat, lon) => Err(LocationError::InvalidCoordinates(format!(
                "latitude {:?} and longitude {:?} must both be set",
                lat, lon
            ))),
        };
        match &position {
            Ok(coords) => info!(%coords, "Location provider configured"),
            Err(LocationError::ServicesDisabled) => info!("No device position configured"),
            Err(e) => warn!(error = %e, "Ignoring invalid device position"),
        }
        Self {
            position,
            places: config.places().clone(),
            max_distance_km: *config.max_distance_km(),
        }
    }
}

impl GeolocationProvider for ConfiguredLocationProvider {
    #[instrument(skip(self))]
    fn request_location(&self) -> Result<Coordinates, LocationError> {
        self.position.clone()
    }

    #[instrument(skip(self))]
    fn reverse_geocode(&self, coords: Coordinates) -> Result<String, LocationError> {
        let nearest = self
            .places
            .iter()
            .filter_map(|place| {
                let at = Coordinates::new(*place.latitude(), *place.longitude()).ok()?;
                Some((place, haversine_km(coords, at)))
            })
            .filter(|(_, distance)| *distance <= self.max_distance_km)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match nearest {
            Some((place, distance)) => {
                debug!(place = %place.name(), distance_km = distance, "Place resolved");
                Ok(place.name().clone())
            }
            None => Err(LocationError::NoPlaceFound {
                max_distance_km: self.max_distance_km,
            }),
        }
    }
}
