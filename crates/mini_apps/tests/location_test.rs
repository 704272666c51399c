//! Tests for the configured geolocation provider.

use mini_apps::{
    AppConfig, ConfiguredLocationProvider, Coordinates, GeolocationProvider, LocationError,
    PlaceConfig, describe, haversine_km,
};

fn coords(lat: f64, lon: f64) -> Coordinates {
    Coordinates::new(lat, lon).expect("valid coordinates")
}

fn places() -> Vec<PlaceConfig> {
    vec![
        PlaceConfig::new("Moscow".to_string(), 55.7558, 37.6173),
        PlaceConfig::new("Kazan".to_string(), 55.7887, 49.1221),
    ]
}

#[test]
fn test_nearest_place_is_chosen() {
    let provider = ConfiguredLocationProvider::new(None, places(), 50.0);
    // A few kilometres south-west of central Moscow.
    let city = provider
        .reverse_geocode(coords(55.70, 37.55))
        .expect("place found");
    assert_eq!(city, "Moscow");
}

#[test]
fn test_far_position_finds_no_place() {
    let provider = ConfiguredLocationProvider::new(None, places(), 50.0);
    let result = provider.reverse_geocode(coords(0.0, 0.0));
    assert_eq!(
        result,
        Err(LocationError::NoPlaceFound {
            max_distance_km: 50.0
        })
    );
}

#[test]
fn test_no_position_means_services_disabled() {
    let provider = ConfiguredLocationProvider::new(None, places(), 50.0);
    assert_eq!(
        provider.request_location(),
        Err(LocationError::ServicesDisabled)
    );
    assert_eq!(describe(&provider), "Location services are disabled");
}

#[test]
fn test_describe_names_city() {
    let provider = ConfiguredLocationProvider::new(Some(coords(55.79, 49.12)), places(), 50.0);
    assert_eq!(describe(&provider), "City: Kazan");
}

#[test]
fn test_describe_reports_unknown_city() {
    let provider = ConfiguredLocationProvider::new(Some(coords(-33.87, 151.21)), places(), 50.0);
    assert_eq!(describe(&provider), "Failed to determine city");
}

#[test]
fn test_describe_reports_provider_failure() {
    struct Broken;
    impl GeolocationProvider for Broken {
        fn request_location(&self) -> Result<Coordinates, LocationError> {
            Err(LocationError::InvalidCoordinates("garbage".to_string()))
        }
        fn reverse_geocode(&self, _coords: Coordinates) -> Result<String, LocationError> {
            unreachable!("no position to geocode")
        }
    }
    assert_eq!(describe(&Broken), "Failed to determine location");
}

#[test]
fn test_coordinates_parse() {
    assert_eq!(
        Coordinates::parse("55.75, 37.62"),
        Ok(coords(55.75, 37.62))
    );
    assert!(Coordinates::parse("55.75").is_err());
    assert!(Coordinates::parse("north,east").is_err());
    assert!(Coordinates::parse("91,0").is_err());
    assert!(Coordinates::parse("0,181").is_err());
}

#[test]
fn test_coordinates_reject_non_finite() {
    assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_haversine_known_distance() {
    let moscow = coords(55.7558, 37.6173);
    let spb = coords(59.9343, 30.3351);
    let distance = haversine_km(moscow, spb);
    assert!((distance - 634.0).abs() < 5.0, "got {distance}");
    assert!(haversine_km(moscow, moscow) < 1e-9);
}

#[test]
fn test_from_config_uses_configured_position() {
    let config = AppConfig::from_toml(
        r#"
        [location]
        latitude = 59.93
        longitude = 30.33
        "#,
    )
    .expect("valid config");
    let provider = ConfiguredLocationProvider::from_config(config.location(), None);
    assert_eq!(describe(&provider), "City: Saint Petersburg");
}

#[test]
fn test_env_override_wins_over_config() {
    let config = AppConfig::from_toml(
        r#"
        [location]
        latitude = 59.93
        longitude = 30.33
        "#,
    )
    .expect("valid config");
    let provider = ConfiguredLocationProvider::from_config(config.location(), Some("52.52,13.40"));
    assert_eq!(describe(&provider), "City: Berlin");
}

#[test]
fn test_invalid_override_reports_failure() {
    let config = AppConfig::default();
    let provider = ConfiguredLocationProvider::from_config(config.location(), Some("abc"));
    assert!(matches!(
        provider.request_location(),
        Err(LocationError::InvalidCoordinates(_))
    ));
    assert_eq!(describe(&provider), "Failed to determine location");
}

#[test]
fn test_out_of_range_config_reports_failure() {
    let config = AppConfig::from_toml(
        r#"
        [location]
        latitude = 123.0
        longitude = 30.33
        "#,
    )
    .expect("valid config");
    let provider = ConfiguredLocationProvider::from_config(config.location(), None);
    assert_eq!(describe(&provider), "Failed to determine location");
}

#[test]
fn test_half_configured_position_is_invalid() {
    let config = AppConfig::from_toml(
        r#"
        [location]
        latitude = 59.93
        "#,
    )
    .expect("valid config");
    let provider = ConfiguredLocationProvider::from_config(config.location(), None);
    assert!(matches!(
        provider.request_location(),
        Err(LocationError::InvalidCoordinates(_))
    ));
    assert_eq!(describe(&provider), "Failed to determine location");
}

#[test]
fn test_default_config_disables_location() {
    let config = AppConfig::default();
    let provider = ConfiguredLocationProvider::from_config(config.location(), None);
    assert_eq!(describe(&provider), "Location services are disabled");
}
