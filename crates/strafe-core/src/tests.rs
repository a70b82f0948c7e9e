#[cfg(test)]
mod tests {
    use glam::{DQuat, DVec3};

    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, FlightConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{FrameSnapshot, HudView};
    use crate::types::{PlayerFrame, SimTime};

    /// Commands use an internally tagged representation for the input bridge.
    #[test]
    fn test_player_command_tagged_json() {
        let cmd = PlayerCommand::KeyDown { key: Key::Space };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"type":"KeyDown","key":"Space"}"#);

        let back: PlayerCommand =
            serde_json::from_str(r#"{"type":"PointerMoved","dx":1.5,"dy":-2.0}"#).unwrap();
        assert!(matches!(back, PlayerCommand::PointerMoved { dx, dy } if dx == 1.5 && dy == -2.0));
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::EnemyDestroyed {
            position: DVec3::new(1.0, 2.0, 3.0),
            score: 40,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_game_over_flag() {
        let mut snapshot = FrameSnapshot::default();
        assert!(!snapshot.game_over());
        snapshot.events.push(GameEvent::GameOver { final_score: 90 });
        assert!(snapshot.game_over());
    }

    #[test]
    fn test_round_phase_liveness() {
        assert!(!RoundPhase::Idle.is_live());
        assert!(RoundPhase::Running.is_live());
        assert!(RoundPhase::Paused.is_live());
        assert!(!RoundPhase::GameOver.is_live());
        assert_eq!(RoundPhase::default(), RoundPhase::Idle);
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults_match_constants() {
        let config = FlightConfig::default();
        assert_eq!(config.base_speed, BASE_SPEED);
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.kill_reward, 10);
        assert_eq!(config.fire_cooldown_ms, 120.0);
        assert_eq!(config.projectile_lifetime, 2.0);
        assert_eq!(config.initial_enemy_count, INITIAL_ENEMY_COUNT);
    }

    #[test]
    fn test_config_partial_json_keeps_defaults() {
        let config = FlightConfig::from_json_str(r#"{ "base_speed": 420.0, "starting_lives": 5 }"#)
            .unwrap();
        assert_eq!(config.base_speed, 420.0);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.boost_speed, BOOST_SPEED);
        assert_eq!(config.enemy_radius, ENEMY_RADIUS);
    }

    #[test]
    fn test_config_rejects_bad_json() {
        let err = FlightConfig::from_json_str("{ base_speed: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file_is_io_error() {
        let err = FlightConfig::load("/nonexistent/strafe/flight.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_spawn_interval_shrinks_with_score_and_floors() {
        let config = FlightConfig::default();
        assert!((config.spawn_interval(0) - 1.6).abs() < 1e-12);
        assert!((config.spawn_interval(100) - 1.4).abs() < 1e-12);
        assert!(config.spawn_interval(300) < config.spawn_interval(200));
        assert_eq!(config.spawn_interval(700), SPAWN_INTERVAL_MIN);
        assert_eq!(config.spawn_interval(100_000), SPAWN_INTERVAL_MIN);
    }

    // ---- Player frame ----

    #[test]
    fn test_player_frame_defaults() {
        let frame = PlayerFrame::default();
        assert_eq!(frame.position, DVec3::new(0.0, 10.0, 0.0));
        assert_eq!(frame.orientation, DQuat::IDENTITY);
        assert!((frame.forward() - DVec3::NEG_Z).length() < 1e-12);
        assert!((frame.backward() - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_nose_point_follows_orientation() {
        let frame = PlayerFrame {
            position: DVec3::ZERO,
            orientation: DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2),
        };
        // Yawing left by 90 degrees turns -Z into -X.
        let nose = frame.point_ahead(4.0);
        assert!((nose - DVec3::new(-4.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_to_local_positive_z_is_behind() {
        let frame = PlayerFrame::default();
        let behind = frame.to_local(frame.position + DVec3::new(0.0, 0.0, 60.0));
        assert!(behind.z > 50.0);
        let ahead = frame.to_local(frame.position + DVec3::new(0.0, 0.0, -60.0));
        assert!(ahead.z < 0.0);
    }

    #[test]
    fn test_heading_ignores_pitch() {
        let frame = PlayerFrame {
            position: DVec3::ZERO,
            orientation: DQuat::from_rotation_y(0.5) * DQuat::from_rotation_x(0.3),
        };
        let heading = frame.heading();
        let flat = heading * DVec3::NEG_Z;
        assert!(flat.y.abs() < 1e-12);
        assert!((flat - DQuat::from_rotation_y(0.5) * DVec3::NEG_Z).length() < 1e-9);
    }

    #[test]
    fn test_heading_degenerate_when_vertical() {
        let frame = PlayerFrame {
            position: DVec3::ZERO,
            orientation: DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2),
        };
        assert_eq!(frame.heading(), DQuat::IDENTITY);
    }

    // ---- Misc ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5, 100.0);
        time.advance(0.25, 350.0);
        assert_eq!(time.frame, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-12);
        assert_eq!(time.wall_ms, 350.0);
    }

    #[test]
    fn test_hud_text() {
        let hud = HudView {
            score: 120,
            lives: 2,
            speed: 550,
        };
        assert_eq!(hud.score_text(), "Score: 120");
        assert_eq!(hud.lives_text(), "Lives: 2");
        assert_eq!(hud.speed_text(), "Speed: 550");
    }
}
