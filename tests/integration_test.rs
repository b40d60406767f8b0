//! Integration tests for the public conversion API

extern crate std;

use gridloc::{
    from_decimal_degrees, from_deg_min_sec, from_maidenhead, to_deg_min_sec, to_maidenhead,
    Coordinate, Hemisphere, Settings, ValidationError,
};
use gridloc::commands::{build_cli, Command, CommandFactory, GridlocCommandFactory};

#[test]
fn test_complete_conversion_workflow() {
    // Mount Diablo, Eagle Peak
    let loc = from_decimal_degrees(37.901687598628186, -121.93842262029649).unwrap();

    let maiden = to_maidenhead(&loc, 4).unwrap();
    std::assert_eq!(maiden, "CM97AV76");

    let (lat, lon) = to_deg_min_sec(&loc);
    std::assert_eq!(lat.to_string(), "37°54'06.08\"N");
    std::assert_eq!(lon.to_string(), "121°56'18.32\"W");

    // Back through DMS using the default hemispheres
    let again = from_deg_min_sec(
        lat.degrees, lat.minutes, lat.seconds,
        lon.degrees, lon.minutes, lon.seconds,
        Hemisphere::DEFAULT_LATITUDE, Hemisphere::DEFAULT_LONGITUDE,
    ).unwrap();
    std::assert!((again.lat() - loc.lat()).abs() < 1e-9);
    std::assert!((again.lon() - loc.lon()).abs() < 1e-9);
    std::assert_eq!(to_maidenhead(&again, 4).unwrap(), maiden);

    // The locator names a cell whose corner re-encodes to the same locator
    let corner = from_maidenhead(&maiden).unwrap();
    std::assert_eq!(to_maidenhead(&corner, 4).unwrap(), maiden);
    std::assert!(corner.lat() <= loc.lat() && corner.lon() <= loc.lon());
}

#[test]
fn test_minimum_and_odd_length_locators() {
    std::assert!(from_maidenhead("AA").is_ok());
    std::assert_eq!(from_maidenhead("A"), Err(ValidationError::InvalidGridLength(1)));
    std::assert_eq!(from_maidenhead("AAA"), Err(ValidationError::InvalidGridLength(3)));
}

#[test]
fn test_coordinates_are_shareable_across_threads() {
    let loc = Coordinate::from_maidenhead("QF56OD").unwrap();
    let handles: Vec<_> = (1..=4)
        .map(|precision| std::thread::spawn(move || loc.to_maidenhead(precision).unwrap()))
        .collect();

    let locators: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    std::assert_eq!(locators, ["QF", "QF56", "QF56OD", "QF56OD00"]);
}

#[test]
fn test_cli_encode_with_settings_override() {
    let settings: Settings = "[maidenhead]\nprecision = 2\n[dms]\nseconds_decimals = 0\n".parse().unwrap();
    let matches = build_cli().get_matches_from(["gridloc", "37.89244968464312", "-121.9255114719272"]);

    let command = GridlocCommandFactory::new().create_command(&matches, &settings).unwrap();
    let output = command.render().unwrap();

    std::assert_eq!(output.lines().next(), Some("locator: CM97"));
    std::assert!(output.contains("dms: 37°53'33\"N 121°55'32\"W"));
}
