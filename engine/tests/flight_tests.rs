//! Flight Tests - Attitude Limits, Speed Governor and Integration
//!
//! Tests for the flight model driven through whole frames.

use approx::assert_relative_eq;
use dive_bomber_engine::flight::{
    AircraftState, Attitude, FlightControls, FlightModel, PitchCommand, SpeedCommand, SpeedLimits,
    TurnCommand,
};
use glam::Vec3;

fn level_aircraft() -> AircraftState {
    AircraftState::new(Vec3::ZERO, Attitude::LEVEL, SpeedLimits::default())
}

fn turn(turn: TurnCommand) -> FlightControls {
    FlightControls {
        turn,
        ..Default::default()
    }
}

fn throttle(speed: SpeedCommand) -> FlightControls {
    FlightControls {
        speed,
        ..Default::default()
    }
}

// ============================================================================
// Roll Limit Tests
// ============================================================================

#[test]
fn test_roll_stays_within_limit_for_any_turn_sequence() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    let commands = [TurnCommand::Left, TurnCommand::Right, TurnCommand::None];
    let steps = [0.0, 0.016, 0.1, 0.5, 2.0, 10.0];

    // Deterministic walk through every command/step combination
    for i in 0..500usize {
        let command = commands[(i * 7 + i / 3) % commands.len()];
        let dt = steps[(i * 5 + 1) % steps.len()];
        model.step(&mut aircraft, &turn(command), dt);
        assert!(
            aircraft.attitude.roll.abs() <= 45.0,
            "roll {} out of range at step {i}",
            aircraft.attitude.roll
        );
    }
}

#[test]
fn test_sustained_left_turn_saturates_roll() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    for _ in 0..100 {
        model.step(&mut aircraft, &turn(TurnCommand::Left), 0.1);
    }
    assert_relative_eq!(aircraft.attitude.roll, -45.0);
    // Yaw keeps growing at 20 deg/s
    assert_relative_eq!(aircraft.attitude.yaw, 200.0, epsilon = 1e-3);
}

#[test]
fn test_roll_levels_out_after_turn() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    model.step(&mut aircraft, &turn(TurnCommand::Right), 1.0);
    assert_relative_eq!(aircraft.attitude.roll, 20.0);

    let mut previous = aircraft.attitude.roll;
    for _ in 0..20 {
        model.step(&mut aircraft, &FlightControls::default(), 0.25);
        assert!(aircraft.attitude.roll <= previous);
        assert!(aircraft.attitude.roll >= 0.0);
        previous = aircraft.attitude.roll;
    }
    assert_eq!(aircraft.attitude.roll, 0.0);
}

// ============================================================================
// Speed Governor Tests
// ============================================================================

#[test]
fn test_speed_approaches_cruise_from_above_without_overshoot() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    for _ in 0..40 {
        model.step(&mut aircraft, &throttle(SpeedCommand::Accelerate), 0.1);
    }
    assert_relative_eq!(aircraft.speed, 80.0);

    let mut previous = aircraft.speed;
    for _ in 0..200 {
        model.step(&mut aircraft, &FlightControls::default(), 0.1);
        assert!(aircraft.speed <= previous);
        assert!(aircraft.speed >= 50.0);
        previous = aircraft.speed;
    }
    assert_eq!(aircraft.speed, 50.0);
}

#[test]
fn test_speed_approaches_cruise_from_below_without_overshoot() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    for _ in 0..40 {
        model.step(&mut aircraft, &throttle(SpeedCommand::Decelerate), 0.1);
    }
    assert_relative_eq!(aircraft.speed, 30.0);

    let mut previous = aircraft.speed;
    // Large steps must clamp at cruise rather than jump past it
    for _ in 0..10 {
        model.step(&mut aircraft, &FlightControls::default(), 3.0);
        assert!(aircraft.speed >= previous);
        assert!(aircraft.speed <= 50.0);
        previous = aircraft.speed;
    }
    assert_eq!(aircraft.speed, 50.0);
}

#[test]
fn test_throttle_frame_skips_governor() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    model.step(&mut aircraft, &throttle(SpeedCommand::Accelerate), 0.5);
    // 50 + 10 * 0.5, no relaxation on the same frame
    assert_relative_eq!(aircraft.speed, 55.0);
}

// ============================================================================
// Kinematics Tests
// ============================================================================

#[test]
fn test_level_flight_moves_along_negative_z() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    model.step(&mut aircraft, &FlightControls::default(), 2.0);
    assert!(aircraft.position.abs_diff_eq(Vec3::new(0.0, 0.0, -100.0), 1e-3));
}

#[test]
fn test_pitch_up_climbs() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    let climb = FlightControls {
        pitch: PitchCommand::Up,
        ..Default::default()
    };
    model.step(&mut aircraft, &climb, 1.0);
    assert_relative_eq!(aircraft.attitude.pitch, -20.0);
    assert!(aircraft.position.y > 0.0);
}

#[test]
fn test_pitch_down_dives() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    let dive = FlightControls {
        pitch: PitchCommand::Down,
        ..Default::default()
    };
    model.step(&mut aircraft, &dive, 1.0);
    assert_relative_eq!(aircraft.attitude.pitch, 20.0);
    assert!(aircraft.position.y < 0.0);
}

#[test]
fn test_zero_dt_is_a_no_op() {
    let model = FlightModel::default();
    let mut aircraft = level_aircraft();
    let before = aircraft;
    let controls = FlightControls {
        turn: TurnCommand::Left,
        pitch: PitchCommand::Up,
        speed: SpeedCommand::Accelerate,
    };
    model.step(&mut aircraft, &controls, 0.0);
    assert_eq!(aircraft, before);
}
