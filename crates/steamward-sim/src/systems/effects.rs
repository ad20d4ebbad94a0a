//! Transient presentation state: timed visual effects, screen shake,
//! flash, and notice aging.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steamward_core::constants::{FLASH_DECAY, NOTICE_LIFETIME_TICKS, SHAKE_DECAY};
use steamward_core::events::Notice;
use steamward_core::state::EffectView;

/// Shake intensity below which the camera snaps back to rest.
const SHAKE_FLOOR: f64 = 0.1;

/// A visual effect with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct ActiveEffect {
    pub view: EffectView,
    pub spawned_tick: u64,
    pub duration_ticks: u64,
}

impl ActiveEffect {
    pub fn expired(&self, tick: u64) -> bool {
        tick.saturating_sub(self.spawned_tick) >= self.duration_ticks
    }
}

/// Per-tick decay pass over all presentation state.
pub fn run(
    effects: &mut Vec<ActiveEffect>,
    shake: &mut f64,
    shake_offset: &mut (f64, f64),
    flash: &mut f64,
    notices: &mut Vec<Notice>,
    tick: u64,
    rng: &mut ChaCha8Rng,
) {
    effects.retain(|e| !e.expired(tick));

    *shake *= SHAKE_DECAY;
    if *shake < SHAKE_FLOOR {
        *shake = 0.0;
        *shake_offset = (0.0, 0.0);
    } else {
        *shake_offset = (
            rng.gen_range(-1.0..1.0) * *shake,
            rng.gen_range(-1.0..1.0) * *shake,
        );
    }

    *flash *= FLASH_DECAY;
    if *flash < 0.01 {
        *flash = 0.0;
    }

    notices.retain(|n| tick.saturating_sub(n.spawned_tick) < NOTICE_LIFETIME_TICKS);
}
