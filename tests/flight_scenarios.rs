use approx::{assert_abs_diff_eq, assert_relative_eq};
use vertical_launch::config::{LaunchArgs, LaunchSettings};
use vertical_launch::core::kinematics::{
    display_x, height_at, max_height, solve_time_of_flight, velocity_at,
};
use vertical_launch::core::{BODIES, Direction, LaunchInputs, Scene, Trajectory, find_body};

fn launch(body: &str, height: f64, velocity: f64) -> Trajectory {
    let args = LaunchArgs {
        body: body.to_string(),
        height: Some(height),
        velocity: Some(velocity),
    };
    let settings = LaunchSettings::from_args(&args).expect("valid launch");
    Trajectory::new(settings.inputs().expect("valid inputs"))
}

#[test]
fn test_building_launch_on_earth() {
    let flight = launch("earth", 50.0, 15.0);

    assert_abs_diff_eq!(flight.time_of_flight_s(), 5.069, epsilon = 1e-3);
    assert_abs_diff_eq!(flight.max_height_m(), 61.47, epsilon = 5e-3);
    assert_abs_diff_eq!(flight.apex_time_s().unwrap(), 1.529, epsilon = 1e-3);

    let start = flight.state_at(0.0);
    assert_eq!(format!("{:.2}", start.height_m), "50.00");
    assert_eq!(format!("{:.2}", start.velocity_mps), "15.00");

    let two_seconds = flight.state_at(2.0);
    assert_eq!(format!("{:.2}", two_seconds.height_m), "60.38");
    assert_eq!(format!("{:.2}", two_seconds.velocity_mps), "-4.62");
}

#[test]
fn test_grounded_downward_launch_is_degenerate() {
    let flight = launch("earth", 0.0, -5.0);
    assert_eq!(flight.time_of_flight_s(), 0.0);
    assert!(!flight.has_flight());

    let scrub = flight.scrub();
    let (lo, hi) = scrub.range();
    assert!(hi > lo, "scrub range must never be empty");
    assert_eq!(scrub.clamp(3.0), 0.0);

    let frame = Scene::compose(&flight, scrub.clamp(3.0));
    assert_eq!(frame.marker, (0.0, 0.0));
    assert_eq!(frame.arrow.direction, Direction::Descending);
}

#[test]
fn test_dropped_from_ten_metres() {
    let flight = launch("earth", 10.0, 0.0);
    assert_relative_eq!(
        flight.time_of_flight_s(),
        (2.0_f64 * 10.0 / 9.81).sqrt(),
        max_relative = 1e-12
    );
    assert_abs_diff_eq!(flight.time_of_flight_s(), 1.427, epsilon = 1e-3);
    assert_eq!(flight.max_height_m(), 10.0);
}

#[test]
fn test_every_body_lands_at_time_of_flight() {
    for body in BODIES.iter() {
        for &(d0, v0) in &[(50.0, 15.0), (0.0, 30.0), (120.0, -20.0), (1.0, 0.0)] {
            let g = body.gravity_mps2;
            let t_total = solve_time_of_flight(d0, v0, g);
            assert!(t_total > 0.0, "{} d0={d0} v0={v0}", body.name);
            assert_abs_diff_eq!(height_at(d0, v0, g, t_total), 0.0, epsilon = 1e-6);
            assert_eq!(height_at(d0, v0, g, 0.0), d0);
            assert_eq!(velocity_at(v0, g, 0.0), v0);
            assert_abs_diff_eq!(display_x(t_total, t_total), 5.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_peak_is_never_below_launch_for_upward_throws() {
    for body in BODIES.iter() {
        let g = body.gravity_mps2;
        for v0 in [0.5, 5.0, 40.0] {
            let peak = max_height(20.0, v0, g);
            assert!(peak >= 20.0);
            assert_eq!(peak, height_at(20.0, v0, g, v0 / g));
        }
        assert_eq!(max_height(20.0, -1.0, g), 20.0);
    }
}

#[test]
fn test_lighter_gravity_means_longer_flight() {
    let earth = launch("earth", 50.0, 15.0);
    let moon = launch("moon", 50.0, 15.0);
    let sun = launch("sun", 50.0, 15.0);
    assert!(moon.time_of_flight_s() > earth.time_of_flight_s());
    assert!(sun.time_of_flight_s() < earth.time_of_flight_s());
}

#[test]
fn test_scrubbing_through_flight_changes_arrow_direction() {
    let flight = launch("mars", 5.0, 10.0);
    let scrub = flight.scrub();
    let apex = flight.apex_time_s().unwrap();

    let before = Scene::compose(&flight, scrub.clamp(apex - 0.5));
    let after = Scene::compose(&flight, scrub.clamp(apex + 0.5));
    assert_eq!(before.arrow.direction, Direction::Ascending);
    assert_eq!(after.arrow.direction, Direction::Descending);
    assert!(after.marker.0 > before.marker.0);

    let ticks = scrub.ticks(0.25);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(*ticks.last().unwrap(), flight.time_of_flight_s());
}

#[test]
fn test_invalid_inputs_are_rejected_at_the_edge() {
    assert!(LaunchInputs::new(-0.1, 1.0, 9.81).is_err());
    assert!(find_body("Nibiru").is_err());

    let args = LaunchArgs {
        body: "pluto".to_string(),
        height: Some(f64::INFINITY),
        velocity: None,
    };
    assert!(LaunchSettings::from_args(&args).is_err());
}
