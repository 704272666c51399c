//! Device location: the [`GeolocationProvider`] collaborator.

mod configured;
mod error;
mod provider;

pub use configured::{ConfiguredLocationProvider, haversine_km};
pub use error::LocationError;
pub use provider::{Coordinates, GeolocationProvider, describe};
