//! Temporal mines: placed charges that detonate after a fixed fuse.

use hecs::{Entity, World};

use steamward_combat::actions::TargetInfo;
use steamward_combat::specials;

use steamward_core::constants::MINE_FUSE_TICKS;
use steamward_core::types::Position;

use crate::systems::combat_apply::{self, SideEffects};

/// An armed mine waiting on its fuse.
#[derive(Debug, Clone, Copy)]
pub struct TemporalMine {
    pub position: Position,
    pub damage: f64,
    pub detonate_at_tick: u64,
}

impl TemporalMine {
    pub fn new(position: Position, damage: f64, tick: u64) -> Self {
        Self {
            position,
            damage,
            detonate_at_tick: tick + MINE_FUSE_TICKS,
        }
    }
}

/// Detonate any mine whose fuse has run out.
pub fn run(
    world: &mut World,
    mines: &mut Vec<TemporalMine>,
    enemy_entities: &[Entity],
    enemy_targets: &[TargetInfo],
    tick: u64,
    out: &mut SideEffects,
) {
    let mut detonated = Vec::new();
    mines.retain(|mine| {
        if tick >= mine.detonate_at_tick {
            detonated.push(*mine);
            false
        } else {
            true
        }
    });

    for mine in detonated {
        let actions = specials::mine_detonation(mine.position, mine.damage, enemy_targets);
        combat_apply::apply(world, actions, enemy_entities, tick, out);
    }
}
