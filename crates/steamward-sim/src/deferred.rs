//! Deferred timed mutations.
//!
//! Anything the game schedules for later — slow reverts, boss frenzy
//! reverts, staggered shrapnel bursts — goes through this queue and is
//! polled once per tick. Events referencing an entity validate liveness
//! when they fire, so a despawn between scheduling and firing is a no-op.

use hecs::Entity;

use steamward_core::types::Position;

/// A mutation scheduled for a future tick.
#[derive(Debug, Clone)]
pub enum DeferredEvent {
    /// Multiply an enemy's speed back up after a time burst slow expires.
    RevertSlow { entity: Entity, factor: f64 },
    /// Restore a boss's stats after a frenzy burst.
    RevertFrenzy {
        entity: Entity,
        speed_factor: f64,
        damage_factor: f64,
    },
    /// Detonate one staggered shrapnel fragment.
    ShrapnelBurst { position: Position, damage: f64 },
}

#[derive(Debug, Clone)]
struct Entry {
    due_tick: u64,
    event: DeferredEvent,
}

/// FIFO-per-tick queue of deferred events.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<Entry>,
}

impl DeferredQueue {
    /// Schedule an event for `delay_ticks` from `now`.
    pub fn schedule(&mut self, now: u64, delay_ticks: u64, event: DeferredEvent) {
        self.entries.push(Entry {
            due_tick: now + delay_ticks,
            event,
        });
    }

    /// Remove and return all events due at or before `tick`, preserving
    /// scheduling order.
    pub fn drain_due(&mut self, tick: u64) -> Vec<DeferredEvent> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].due_tick <= tick {
                due.push(self.entries.remove(i).event);
            } else {
                i += 1;
            }
        }
        due
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
