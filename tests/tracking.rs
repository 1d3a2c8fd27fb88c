use approx::assert_abs_diff_eq;
use plan13::observer::Observer;
use plan13::satellite::Satellite;
use plan13::sun::Sun;
use plan13::time::Instant;

const ISS_L1: &str = "1 25544U 98067A   24001.50000000  .00016717  00000-0  10270-3 0  9994";
const ISS_L2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.49511818335342";

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Tracks the ISS from a station near Santa Cruz over the first half of
/// January 2024. The expected values were captured from a known-good run
/// of the propagator; the pass at 19:31 on New Year's Day is the one
/// above-horizon row, the others have the station looking through the
/// Earth.
#[test]
fn test_iss_over_california() {
    init_logs();

    // (instant, latitude, longitude, elevation, azimuth, radius, orbit number)
    let expected = [
        (
            Instant::from_ymd_hms(2024, 1, 1, 12, 0, 0),
            51.307013107204,
            65.669882154186,
            -43.841276187911,
            355.226855650426,
            6792.5556569649598,
            33534,
        ),
        (
            Instant::from_ymd_hms(2024, 1, 1, 19, 31, 0),
            32.815795500723,
            -117.105859787085,
            30.184074008249,
            133.523090755696,
            6796.123418121716,
            33539,
        ),
        (
            Instant::from_ymd_hms(2024, 1, 2, 3, 30, 0),
            50.439759126068,
            -162.852712892632,
            -9.537839032649,
            308.283804735058,
            6792.440109078595,
            33544,
        ),
        (
            Instant::from_ymd_hms(2024, 1, 15, 18, 45, 30),
            -49.117481029460,
            26.745633336538,
            -76.837260380687,
            127.868280150680,
            6794.8241509782092,
            33756,
        ),
    ];

    let sat = Satellite::from_tle("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
    let station = Observer::new("home", 37.0, -122.0, 100.0);

    for (time, latitude, longitude, elevation, azimuth, radius, orbit_number) in expected {
        let state = sat.predict(time).unwrap();
        let sub = state.subpoint();
        let look = station.look_angles(&state.geocentric.position);

        assert_abs_diff_eq!(sub.latitude, latitude, epsilon = 1e-6);
        assert_abs_diff_eq!(sub.longitude, longitude, epsilon = 1e-6);
        assert_abs_diff_eq!(look.elevation, elevation, epsilon = 1e-6);
        assert_abs_diff_eq!(look.azimuth, azimuth, epsilon = 1e-6);
        assert_abs_diff_eq!(state.radius, radius, epsilon = 1e-6);
        assert_eq!(state.orbit_number, orbit_number, "at {}", time);
    }
}

/// Sweeps a whole day at a fixed cadence and checks the output ranges the
/// consumers rely on.
#[test]
fn test_output_ranges_over_a_day() {
    init_logs();

    let sat = Satellite::from_tle("ISS (ZARYA)", ISS_L1, ISS_L2).unwrap();
    let station = Observer::new("home", 37.0, -122.0, 100.0);

    // one-minute cadence, aligned the way a tracking loop would align it
    let mut time = Instant::from_ymd_hms(2024, 1, 1, 0, 0, 37).round_up(1.0 / 1440.0);
    for _ in 0..1440 {
        let state = sat.predict(time).unwrap();
        let sub = state.subpoint();
        let look = station.look_angles(&state.geocentric.position);

        assert!((0.0..360.0).contains(&look.azimuth), "az {}", look.azimuth);
        assert!(
            (-90.0..=90.0).contains(&look.elevation),
            "el {}",
            look.elevation
        );
        assert!((-90.0..=90.0).contains(&sub.latitude), "lat {}", sub.latitude);
        assert!(
            (-180.0..=180.0).contains(&sub.longitude),
            "lon {}",
            sub.longitude
        );

        time = time.add_days(1.0 / 1440.0);
    }
}

/// The Sun's ground track, on the same time scale as the satellite.
#[test]
fn test_sun_ground_track() {
    init_logs();

    let sun = Sun::new();

    let solstice = sun
        .predict(Instant::from_ymd_hms(2014, 6, 21, 12, 0, 0))
        .subpoint();
    assert_abs_diff_eq!(solstice.latitude, 23.437491662451, epsilon = 1e-6);

    let winter = sun
        .predict(Instant::from_ymd_hms(2024, 1, 1, 12, 0, 0))
        .subpoint();
    assert_abs_diff_eq!(winter.latitude, -23.018002998005, epsilon = 1e-6);
    assert_abs_diff_eq!(winter.longitude, 0.832831849140, epsilon = 1e-6);
}
