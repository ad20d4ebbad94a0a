//! Terrain tiles and the movement speed modifier lookup.

use steamward_core::constants::*;
use steamward_core::enums::TerrainKind;
use steamward_core::types::Position;

/// An axis-aligned terrain patch.
#[derive(Debug, Clone, Copy)]
pub struct TerrainTile {
    pub kind: TerrainKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TerrainTile {
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= self.x
            && pos.x <= self.x + self.width
            && pos.y >= self.y
            && pos.y <= self.y + self.height
    }

    pub fn speed_modifier(&self) -> f64 {
        match self.kind {
            TerrainKind::Grass => TERRAIN_GRASS_MODIFIER,
            TerrainKind::Bush => TERRAIN_BUSH_MODIFIER,
            TerrainKind::Forest => TERRAIN_FOREST_MODIFIER,
        }
    }
}

/// Movement speed modifier at a position: the minimum modifier over all
/// tiles containing it. Open ground counts as grass.
pub fn speed_modifier_at(tiles: &[TerrainTile], pos: &Position) -> f64 {
    tiles
        .iter()
        .filter(|t| t.contains(pos))
        .map(|t| t.speed_modifier())
        .fold(TERRAIN_GRASS_MODIFIER, f64::min)
}
