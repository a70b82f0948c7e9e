//! Orientation integration: pointer and key input → airframe rotation.

use glam::{DQuat, DVec3};

use strafe_core::config::FlightConfig;
use strafe_core::enums::Key;
use strafe_core::input::InputState;
use strafe_core::types::PlayerFrame;

/// Consume this frame's pointer motion and key state and rotate the airframe.
pub fn run(player: &mut PlayerFrame, input: &mut InputState, config: &FlightConfig, dt: f64) {
    let (dx, dy) = input.take_pointer_delta();

    let yaw = -dx * config.pointer_sensitivity + input.axis(Key::A, Key::D) * config.yaw_rate * dt;
    let pitch =
        -dy * config.pointer_sensitivity + input.axis(Key::S, Key::W) * config.pitch_rate * dt;
    let roll = input.axis(Key::Q, Key::E) * config.roll_rate * dt;

    player.orientation = integrate(player.orientation, yaw, pitch, roll);
}

/// Apply yaw (about +Y), pitch (about +X) and roll (about +Z) in the
/// airframe's local frame, then renormalize against drift.
pub fn integrate(orientation: DQuat, yaw: f64, pitch: f64, roll: f64) -> DQuat {
    let delta = DQuat::from_axis_angle(DVec3::Y, yaw)
        * DQuat::from_axis_angle(DVec3::X, pitch)
        * DQuat::from_axis_angle(DVec3::Z, roll);
    (orientation * delta).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_right_yaws_right() {
        let mut player = PlayerFrame::default();
        let mut input = InputState::new();
        input.set_pointer_locked(true);
        input.pointer_moved(100.0, 0.0);

        run(&mut player, &mut input, &FlightConfig::default(), 0.016);

        // Turning right swings the facing toward +X.
        assert!(player.forward().x > 0.0);
        assert_eq!(input.take_pointer_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_keyboard_yaw_scales_with_dt() {
        let config = FlightConfig::default();
        let mut player = PlayerFrame::default();
        let mut input = InputState::new();
        input.key_down(Key::A);

        run(&mut player, &mut input, &config, 0.5);

        let expected = DQuat::from_rotation_y(config.yaw_rate * 0.5);
        assert!(player.orientation.abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_w_pitches_nose_down() {
        let mut player = PlayerFrame::default();
        let mut input = InputState::new();
        input.key_down(Key::W);
        run(&mut player, &mut input, &FlightConfig::default(), 0.1);
        assert!(player.forward().y < 0.0);
    }

    #[test]
    fn test_roll_leaves_facing_unchanged() {
        let mut player = PlayerFrame::default();
        let mut input = InputState::new();
        input.key_down(Key::Q);
        run(&mut player, &mut input, &FlightConfig::default(), 0.2);
        assert!((player.forward() - DVec3::NEG_Z).length() < 1e-12);
        assert!((player.orientation * DVec3::Y).x < 0.0);
    }

    #[test]
    fn test_integration_stays_unit_length() {
        let mut q = DQuat::IDENTITY;
        for i in 0..10_000 {
            let t = i as f64;
            q = integrate(q, (t * 0.37).sin() * 0.05, (t * 0.11).cos() * 0.04, 0.03);
            assert!((q.length() - 1.0).abs() < 1e-9);
        }
    }
}
