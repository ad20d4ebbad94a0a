#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use steamward_core::constants::*;
    use steamward_core::enums::{AttackStyle, BossPhase, EnemyKind};
    use steamward_core::types::Position;

    use crate::actions::{CasterContext, CombatAction, TargetInfo};
    use crate::boss::{fire_special, next_phase, BossAction};
    use crate::specials::{self, chain_falloff, fire, in_range, nearest_in_range};

    fn ctx(damage: f64, range: f64) -> CasterContext {
        CasterContext {
            position: Position::new(0.0, 0.0),
            damage,
            range,
            facing: DVec2::X,
        }
    }

    fn target(x: f64, y: f64) -> TargetInfo {
        TargetInfo {
            position: Position::new(x, y),
            size: 0.0,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn damages(actions: &[CombatAction]) -> Vec<(usize, f64)> {
        actions
            .iter()
            .filter_map(|a| match a {
                CombatAction::Damage { target, amount } => Some((*target, *amount)),
                _ => None,
            })
            .collect()
    }

    // ---- Range semantics ----

    /// A target at exactly attack range is in range; past it is not.
    #[test]
    fn test_range_boundary_inclusive() {
        let caster = Position::new(0.0, 0.0);
        let at_range = target(100.0, 0.0);
        let past_range = target(100.0 + 1e-9, 0.0);
        assert!(in_range(&caster, &at_range, 100.0));
        assert!(!in_range(&caster, &past_range, 100.0));
    }

    #[test]
    fn test_target_size_extends_range() {
        let caster = Position::new(0.0, 0.0);
        let big = TargetInfo {
            position: Position::new(110.0, 0.0),
            size: 10.0,
        };
        assert!(in_range(&caster, &big, 100.0));
    }

    #[test]
    fn test_nearest_in_range_picks_nearest() {
        let caster = Position::new(0.0, 0.0);
        let targets = vec![target(50.0, 0.0), target(20.0, 0.0), target(300.0, 0.0)];
        assert_eq!(nearest_in_range(&caster, &targets, 100.0), Some(1));
        assert_eq!(nearest_in_range(&caster, &targets, 10.0), None);
    }

    // ---- Chain lightning ----

    #[test]
    fn test_chain_falloff_sequence() {
        assert_eq!(chain_falloff(0), 1.0);
        assert_eq!(chain_falloff(1), 0.8);
        assert_eq!(chain_falloff(2), 0.6);
        assert_eq!(chain_falloff(4), 0.6);
    }

    #[test]
    fn test_chain_lightning_damage_progression() {
        let c = ctx(10.0, 150.0);
        let targets = vec![target(10.0, 0.0), target(30.0, 0.0), target(50.0, 0.0)];
        let actions = fire(AttackStyle::ChainLightning, &c, &targets, &mut rng());
        let hits = damages(&actions);

        assert_eq!(hits.len(), 3);
        let base = 10.0 * CHAIN_LIGHTNING_DAMAGE_FACTOR;
        assert!((hits[0].1 - base).abs() < 1e-10);
        assert!((hits[1].1 - base * 0.8).abs() < 1e-10);
        assert!((hits[2].1 - base * 0.6).abs() < 1e-10);
        // Strikes nearest-first.
        assert_eq!(hits[0].0, 0);
        assert_eq!(hits[1].0, 1);
        assert_eq!(hits[2].0, 2);
    }

    /// No target is struck twice, even with spare jumps and the widened
    /// secondary search.
    #[test]
    fn test_chain_lightning_no_double_strike() {
        let c = ctx(10.0, 150.0);
        let targets = vec![target(10.0, 0.0), target(40.0, 0.0)];
        let actions = fire(AttackStyle::ChainLightning, &c, &targets, &mut rng());
        let hits = damages(&actions);

        assert_eq!(hits.len(), 2);
        let mut indices: Vec<usize> = hits.iter().map(|(i, _)| *i).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), 2);
    }

    #[test]
    fn test_chain_lightning_jump_cap() {
        let c = ctx(10.0, 500.0);
        let targets: Vec<TargetInfo> = (0..10).map(|i| target(10.0 * (i + 1) as f64, 0.0)).collect();
        let actions = fire(AttackStyle::ChainLightning, &c, &targets, &mut rng());
        assert_eq!(damages(&actions).len(), CHAIN_LIGHTNING_JUMPS);
    }

    /// Spare jumps arc out past caster range via the widened secondary search.
    #[test]
    fn test_chain_lightning_secondary_arc() {
        let c = ctx(10.0, 100.0);
        // One primary target, one only reachable from it at 1.5x range.
        let targets = vec![target(90.0, 0.0), target(220.0, 0.0)];
        let actions = fire(AttackStyle::ChainLightning, &c, &targets, &mut rng());
        let hits = damages(&actions);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].0, 1);
        assert!((hits[1].1 - 10.0 * CHAIN_LIGHTNING_DAMAGE_FACTOR * 0.8).abs() < 1e-10);
    }

    // ---- Sword sweep ----

    #[test]
    fn test_sword_sweep_arc_excludes_behind() {
        let c = ctx(5.0, 100.0);
        // Nearest target to the east sets the sweep; the western target is
        // outside the 180-degree arc.
        let targets = vec![target(50.0, 0.0), target(-60.0, 0.0)];
        let actions = fire(AttackStyle::SwordSweep, &c, &targets, &mut rng());
        let hits = damages(&actions);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);
    }

    #[test]
    fn test_sword_sweep_knockback() {
        let c = ctx(5.0, 100.0);
        let targets = vec![target(50.0, 0.0)];
        let actions = fire(AttackStyle::SwordSweep, &c, &targets, &mut rng());
        let kb = actions.iter().any(|a| {
            matches!(a, CombatAction::Knockback { distance, .. }
                if (*distance - SWORD_SWEEP_KNOCKBACK).abs() < 1e-10)
        });
        assert!(kb, "Sweep should knock back hit enemies");
    }

    // ---- Pressure blast ----

    #[test]
    fn test_pressure_blast_knockback_scales_with_distance() {
        let c = ctx(5.0, 80.0);
        let targets = vec![target(0.0, 0.0), target(50.0, 0.0), target(200.0, 0.0)];
        let actions = fire(AttackStyle::PressureBlast, &c, &targets, &mut rng());

        let mut pushes: Vec<(usize, f64)> = actions
            .iter()
            .filter_map(|a| match a {
                CombatAction::Knockback { target, distance, .. } => Some((*target, *distance)),
                _ => None,
            })
            .collect();
        pushes.sort_by_key(|(i, _)| *i);

        assert_eq!(pushes.len(), 2, "Target outside the radius is untouched");
        assert!((pushes[0].1 - PRESSURE_BLAST_KNOCKBACK).abs() < 1e-10);
        let expected = (PRESSURE_BLAST_RADIUS - 50.0) / PRESSURE_BLAST_RADIUS
            * PRESSURE_BLAST_KNOCKBACK;
        assert!((pushes[1].1 - expected).abs() < 1e-10);
    }

    // ---- Aether beam ----

    #[test]
    fn test_aether_beam_cone() {
        let c = ctx(10.0, 200.0);
        // Nearest target east; second target well off the cone axis.
        let targets = vec![target(100.0, 0.0), target(0.0, 120.0)];
        let actions = fire(AttackStyle::AetherBeam, &c, &targets, &mut rng());
        let hits = damages(&actions);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].1 - 10.0 * AETHER_BEAM_DAMAGE_FACTOR).abs() < 1e-10);
    }

    // ---- Projectile sprays ----

    #[test]
    fn test_ember_spray_count_and_damage() {
        let c = ctx(8.0, 90.0);
        let targets = vec![target(50.0, 0.0)];
        let actions = fire(AttackStyle::EmberSpray, &c, &targets, &mut rng());
        let embers: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, CombatAction::SpawnEmber { .. }))
            .collect();
        assert_eq!(embers.len(), EMBER_COUNT);
        if let CombatAction::SpawnEmber { damage, velocity, .. } = embers[0] {
            assert!((damage - 4.0).abs() < 1e-10);
            assert!((velocity.length() - EMBER_SPEED).abs() < 1e-10);
        }
    }

    #[test]
    fn test_gear_throw_velocity_toward_target() {
        let c = ctx(6.0, 200.0);
        let targets = vec![target(0.0, 100.0)];
        let actions = fire(AttackStyle::GearThrow, &c, &targets, &mut rng());
        let gear = actions
            .iter()
            .find_map(|a| match a {
                CombatAction::LaunchGear { velocity, damage, .. } => Some((*velocity, *damage)),
                _ => None,
            })
            .expect("Gear throw should launch a projectile");
        assert!(gear.0.y > 0.0 && gear.0.x.abs() < 1e-9);
        assert!((gear.0.length() - GEAR_SPEED).abs() < 1e-10);
        assert!((gear.1 - 6.0 * GEAR_DAMAGE_FACTOR).abs() < 1e-10);
    }

    // ---- Shrapnel ----

    #[test]
    fn test_shrapnel_staggered_schedule() {
        let c = ctx(10.0, 100.0);
        let actions = fire(AttackStyle::ShrapnelField, &c, &[], &mut rng());
        let delays: Vec<u64> = actions
            .iter()
            .filter_map(|a| match a {
                CombatAction::ScheduleShrapnel { delay_ticks, .. } => Some(*delay_ticks),
                _ => None,
            })
            .collect();
        assert_eq!(delays.len(), SHRAPNEL_COUNT);
        assert_eq!(delays[0], 0);
        assert_eq!(delays[1], SHRAPNEL_STAGGER_TICKS);
        assert_eq!(
            delays[SHRAPNEL_COUNT - 1],
            (SHRAPNEL_COUNT as u64 - 1) * SHRAPNEL_STAGGER_TICKS
        );
    }

    #[test]
    fn test_shrapnel_burst_radius() {
        let pos = Position::new(0.0, 0.0);
        let targets = vec![target(10.0, 0.0), target(100.0, 0.0)];
        let actions = specials::shrapnel_burst(pos, 5.0, &targets);
        let hits = damages(&actions);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], (0, 5.0));
    }

    // ---- Mines ----

    #[test]
    fn test_mine_detonation_linear_falloff() {
        let pos = Position::new(0.0, 0.0);
        let targets = vec![target(0.0, 0.0), target(40.0, 0.0), target(200.0, 0.0)];
        let actions = specials::mine_detonation(pos, 10.0, &targets);
        let hits = damages(&actions);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].1 - 10.0).abs() < 1e-10);
        assert!((hits[1].1 - 10.0 * (1.0 - 40.0 / MINE_RADIUS)).abs() < 1e-10);
    }

    // ---- Corrosion ----

    #[test]
    fn test_corrosion_cloud_initial_and_dot() {
        let c = ctx(10.0, 110.0);
        let targets = vec![target(50.0, 0.0)];
        let actions = fire(AttackStyle::CorrosionCloud, &c, &targets, &mut rng());

        let hits = damages(&actions);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].1 - 10.0 * CORROSION_INITIAL_DAMAGE_FACTOR).abs() < 1e-10);

        let dot = actions.iter().find_map(|a| match a {
            CombatAction::Corrode { pulse_damage, .. } => Some(*pulse_damage),
            _ => None,
        });
        assert_eq!(dot, Some(10.0 * CORROSION_TICK_DAMAGE_FACTOR));
    }

    // ---- Time burst ----

    #[test]
    fn test_time_burst_extended_radius() {
        let c = ctx(5.0, 100.0);
        // Inside 1.5x range but outside base range.
        let targets = vec![target(130.0, 0.0), target(300.0, 0.0)];
        let actions = fire(AttackStyle::TimeBurst, &c, &targets, &mut rng());
        let slows: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, CombatAction::Slow { .. }))
            .collect();
        assert_eq!(slows.len(), 1);
        if let CombatAction::Slow {
            factor,
            duration_ticks,
            ..
        } = slows[0]
        {
            assert_eq!(*factor, TIME_BURST_SLOW_FACTOR);
            assert_eq!(*duration_ticks, TIME_BURST_DURATION_TICKS);
        }
    }

    // ---- Boss phases ----

    /// Transitions step one phase at a time and only from the matching
    /// current phase.
    #[test]
    fn test_boss_phase_single_trigger() {
        assert_eq!(next_phase(BossPhase::One, 0.8), None);
        assert_eq!(next_phase(BossPhase::One, 0.7), Some(BossPhase::Two));
        // Already in phase 2: the 70% threshold never re-fires.
        assert_eq!(next_phase(BossPhase::Two, 0.65), None);
        assert_eq!(next_phase(BossPhase::Two, 0.3), Some(BossPhase::Three));
        assert_eq!(next_phase(BossPhase::Three, 0.01), None);
        // A massive hit from phase 1 steps to 2 first, never straight to 3.
        assert_eq!(next_phase(BossPhase::One, 0.1), Some(BossPhase::Two));
    }

    #[test]
    fn test_cultist_summon_counts() {
        let pos = Position::new(500.0, 500.0);
        for (phase, expected) in [
            (BossPhase::One, 3),
            (BossPhase::Two, 4),
            (BossPhase::Three, 6),
        ] {
            match fire_special(EnemyKind::Cultist, phase, pos, 20.0, &mut rng()) {
                BossAction::SummonMinions { positions, .. } => {
                    assert_eq!(positions.len(), expected)
                }
                other => panic!("Expected summon, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_deep_one_frenzy_escalates() {
        let pos = Position::new(0.0, 0.0);
        let p1 = fire_special(EnemyKind::DeepOne, BossPhase::One, pos, 30.0, &mut rng());
        let p3 = fire_special(EnemyKind::DeepOne, BossPhase::Three, pos, 30.0, &mut rng());
        match (p1, p3) {
            (
                BossAction::Frenzy {
                    speed_mult: s1,
                    duration_ticks: d1,
                    ..
                },
                BossAction::Frenzy {
                    speed_mult: s3,
                    damage_mult: dm3,
                    duration_ticks: d3,
                },
            ) => {
                assert!(s3 > s1);
                assert!(d3 > d1);
                assert_eq!(dm3, 2.0);
            }
            other => panic!("Expected frenzies, got {other:?}"),
        }
    }

    #[test]
    fn test_shoggoth_ring_counts() {
        let pos = Position::new(0.0, 0.0);
        for (phase, expected) in [
            (BossPhase::One, 1),
            (BossPhase::Two, 2),
            (BossPhase::Three, 3),
        ] {
            match fire_special(EnemyKind::Shoggoth, phase, pos, 40.0, &mut rng()) {
                BossAction::DamageRings { rings } => assert_eq!(rings.len(), expected),
                other => panic!("Expected rings, got {other:?}"),
            }
        }
    }
}
