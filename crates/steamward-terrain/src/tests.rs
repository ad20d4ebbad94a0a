#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use steamward_core::constants::*;
    use steamward_core::enums::TerrainKind;
    use steamward_core::types::Position;

    use crate::generate::generate_layout;
    use crate::tiles::{speed_modifier_at, TerrainTile};

    fn tile(kind: TerrainKind, x: f64, y: f64, w: f64, h: f64) -> TerrainTile {
        TerrainTile {
            kind,
            x,
            y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_open_ground_is_full_speed() {
        let mods = speed_modifier_at(&[], &Position::new(100.0, 100.0));
        assert_eq!(mods, TERRAIN_GRASS_MODIFIER);
    }

    #[test]
    fn test_tile_contains_edges() {
        let t = tile(TerrainKind::Bush, 10.0, 10.0, 50.0, 50.0);
        assert!(t.contains(&Position::new(10.0, 10.0)));
        assert!(t.contains(&Position::new(60.0, 60.0)));
        assert!(!t.contains(&Position::new(60.1, 60.0)));
    }

    /// Overlapping tiles: the slowest one wins.
    #[test]
    fn test_overlap_takes_minimum_modifier() {
        let tiles = vec![
            tile(TerrainKind::Grass, 0.0, 0.0, 100.0, 100.0),
            tile(TerrainKind::Forest, 50.0, 50.0, 100.0, 100.0),
            tile(TerrainKind::Bush, 40.0, 40.0, 100.0, 100.0),
        ];
        let inside_all = Position::new(60.0, 60.0);
        assert_eq!(speed_modifier_at(&tiles, &inside_all), TERRAIN_FOREST_MODIFIER);

        let bush_only = Position::new(45.0, 45.0);
        assert_eq!(speed_modifier_at(&tiles, &bush_only), TERRAIN_BUSH_MODIFIER);
    }

    #[test]
    fn test_generated_layout_counts_and_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let tiles = generate_layout(&mut rng);
        assert_eq!(
            tiles.len(),
            TERRAIN_GRASS_PATCHES + TERRAIN_BUSH_PATCHES + TERRAIN_FOREST_PATCHES
        );
        for t in &tiles {
            assert!(t.x >= 0.0 && t.x + t.width <= WORLD_WIDTH);
            assert!(t.y >= 0.0 && t.y + t.height <= WORLD_HEIGHT);
        }
    }

    #[test]
    fn test_generation_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let ta = generate_layout(&mut a);
        let tb = generate_layout(&mut b);
        for (x, y) in ta.iter().zip(tb.iter()) {
            assert_eq!(x.x, y.x);
            assert_eq!(x.y, y.y);
            assert_eq!(x.width, y.width);
        }
    }
}
