//! Procedural terrain layout generation.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steamward_core::constants::*;
use steamward_core::enums::TerrainKind;

use crate::tiles::TerrainTile;

/// Generate the terrain layout for a new run: scattered grass patches,
/// bushes, and a few forests, all within world bounds.
pub fn generate_layout(rng: &mut ChaCha8Rng) -> Vec<TerrainTile> {
    let mut tiles = Vec::with_capacity(
        TERRAIN_GRASS_PATCHES + TERRAIN_BUSH_PATCHES + TERRAIN_FOREST_PATCHES,
    );

    for _ in 0..TERRAIN_GRASS_PATCHES {
        tiles.push(random_tile(rng, TerrainKind::Grass, 100.0, 300.0));
    }
    for _ in 0..TERRAIN_BUSH_PATCHES {
        tiles.push(random_tile(rng, TerrainKind::Bush, 60.0, 180.0));
    }
    for _ in 0..TERRAIN_FOREST_PATCHES {
        tiles.push(random_tile(rng, TerrainKind::Forest, 200.0, 450.0));
    }

    tiles
}

fn random_tile(rng: &mut ChaCha8Rng, kind: TerrainKind, min_size: f64, max_size: f64) -> TerrainTile {
    let width = rng.gen_range(min_size..max_size);
    let height = rng.gen_range(min_size..max_size);
    TerrainTile {
        kind,
        x: rng.gen_range(0.0..(WORLD_WIDTH - width)),
        y: rng.gen_range(0.0..(WORLD_HEIGHT - height)),
        width,
        height,
    }
}
