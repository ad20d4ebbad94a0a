//! Fixed-capacity particle arenas with index free-lists.
//!
//! Spawn requests against a full pool are dropped; the active set is
//! never evicted to make room.

use steamward_core::types::Position;

/// One pooled particle.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Position,
    pub velocity_x: f64,
    pub velocity_y: f64,
    /// Remaining life in [0, 1]; freed at 0.
    pub life: f64,
    pub decay: f64,
}

/// Fixed-capacity particle arena.
#[derive(Debug)]
pub struct ParticlePool {
    slots: Vec<Option<Particle>>,
    free: Vec<usize>,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            free: (0..capacity).rev().collect(),
        }
    }

    /// Spawn a particle. Returns None (request dropped) when the pool is full.
    pub fn spawn(&mut self, particle: Particle) -> Option<usize> {
        let index = self.free.pop()?;
        self.slots[index] = Some(particle);
        Some(index)
    }

    /// Advance all live particles one tick, freeing any that expire.
    pub fn update(&mut self) {
        for index in 0..self.slots.len() {
            let expired = match &mut self.slots[index] {
                Some(p) => {
                    p.position.x += p.velocity_x;
                    p.position.y += p.velocity_y;
                    p.life -= p.decay;
                    p.life <= 0.0
                }
                None => false,
            };
            if expired {
                self.slots[index] = None;
                self.free.push(index);
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate live particles.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.free = (0..self.slots.len()).rev().collect();
    }
}
