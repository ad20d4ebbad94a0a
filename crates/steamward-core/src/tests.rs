#[cfg(test)]
mod tests {
    use crate::classes::{boss_phase_mods, class_spec, enemy_spec, special_cooldown_ticks};
    use crate::commands::PlayerCommand;
    use crate::components::Health;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{angle_diff, Position, SimTime};

    /// Verify core enums round-trip through serde_json.
    #[test]
    fn test_steam_class_serde() {
        for class in SteamClass::ALL {
            let json = serde_json::to_string(&class).unwrap();
            let back: SteamClass = serde_json::from_str(&json).unwrap();
            assert_eq!(class, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![EnemyKind::Cultist, EnemyKind::DeepOne, EnemyKind::Shoggoth];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetDirection { dx: 1.0, dy: 0.0 },
            PlayerCommand::SetClassSpawnRate {
                class: SteamClass::Ninja,
                rate: 250,
            },
            PlayerCommand::DisableClassSpawn {
                class: SteamClass::Shaman,
            },
            PlayerCommand::ResetClassSpawnRates,
            PlayerCommand::SetTimeScale { scale: 2.0 },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::StartGame,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::SpecialFired {
                style: AttackStyle::ChainLightning,
            },
            AudioEvent::EnemyDown {
                kind: EnemyKind::Shoggoth,
            },
            AudioEvent::BossPhaseChange {
                phase: BossPhase::Three,
            },
            AudioEvent::GameOver,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: AudioEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_direction_normalized() {
        let a = Position::new(10.0, 10.0);
        let b = Position::new(40.0, 50.0);
        let (dx, dy) = a.direction_to(&b);
        assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < 1e-10);
        // Coincident positions give a zero vector, not NaN.
        let (zx, zy) = a.direction_to(&a);
        assert_eq!((zx, zy), (0.0, 0.0));
    }

    #[test]
    fn test_position_clamp_to_bounds() {
        let mut p = Position::new(-50.0, 2000.0);
        p.clamp_to(WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, WORLD_HEIGHT);
    }

    #[test]
    fn test_angle_diff_wraps() {
        let d = angle_diff(3.0, -3.0);
        assert!(d.abs() < 1.0, "Wrapped difference should be small, got {d}");
        assert!((angle_diff(0.5, 0.2) - 0.3).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Stat tables ----

    /// Every class has positive stats and a distinct attack style.
    #[test]
    fn test_class_table_complete() {
        let mut styles = std::collections::HashSet::new();
        for class in SteamClass::ALL {
            let spec = class_spec(class);
            assert!(spec.damage > 0.0);
            assert!(spec.range > 0.0);
            assert!(spec.speed > 0.0);
            assert!(styles.insert(spec.style), "Duplicate style {:?}", spec.style);
        }
        assert_eq!(styles.len(), 11);
    }

    #[test]
    fn test_special_cooldowns() {
        assert_eq!(
            special_cooldown_ticks(AttackStyle::SwordSweep),
            SWORD_SWEEP_COOLDOWN_TICKS
        );
        assert_eq!(
            special_cooldown_ticks(AttackStyle::AetherBeam),
            AETHER_BEAM_COOLDOWN_TICKS
        );
        assert_eq!(
            special_cooldown_ticks(AttackStyle::TemporalMine),
            SPECIAL_COOLDOWN_TICKS
        );
    }

    /// Boss variants are strictly tougher than their normal counterparts.
    #[test]
    fn test_boss_specs_dominate() {
        for kind in [EnemyKind::Cultist, EnemyKind::DeepOne, EnemyKind::Shoggoth] {
            let normal = enemy_spec(kind, false);
            let boss = enemy_spec(kind, true);
            assert!(boss.health > normal.health);
            assert!(boss.damage > normal.damage);
            assert!(boss.size > normal.size);
            assert_eq!(boss.score, normal.score);
        }
    }

    #[test]
    fn test_boss_phase_one_is_identity() {
        for kind in [EnemyKind::Cultist, EnemyKind::DeepOne, EnemyKind::Shoggoth] {
            let mods = boss_phase_mods(kind, BossPhase::One);
            assert_eq!(mods.damage_mult, 1.0);
            assert_eq!(mods.speed_mult, 1.0);
            assert_eq!(mods.size_mult, 1.0);
            assert_eq!(mods.special_interval_mult, 1.0);
        }
    }

    #[test]
    fn test_health_death_at_zero() {
        let mut hp = Health::full(50.0);
        assert!(!hp.is_dead());
        hp.current = 0.0;
        assert!(hp.is_dead());
    }
}
