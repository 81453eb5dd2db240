//! Paint execution
//!
//! One paint action: a uniformly random offset inside the tile, a uniformly
//! random palette color, one POST. Session bookkeeping is the loop's job;
//! nothing here mutates state.

use crate::api::{PaintResponse, PlaceApi, TileOffset};
use rand::Rng;
use wfarm_core::FarmConfig;

/// Draw a uniform random offset in [0, tile_size) on both axes
pub fn random_offset(tile_size: u32) -> TileOffset {
    let mut rng = rand::thread_rng();
    TileOffset {
        x: rng.gen_range(0..tile_size),
        y: rng.gen_range(0..tile_size),
    }
}

/// Draw a uniform random color index in [1, palette_size]
pub fn random_color(palette_size: u32) -> u32 {
    rand::thread_rng().gen_range(1..=palette_size)
}

/// Submit one randomly placed paint action for the configured tile
///
/// Returns the chosen offset alongside the raw server response (`None` when
/// the backend is unavailable), so the caller can record where a confirmed
/// paint landed.
pub async fn paint_once<A: PlaceApi + ?Sized>(
    api: &A,
    config: &FarmConfig,
) -> (TileOffset, Option<PaintResponse>) {
    let offset = random_offset(config.pixels_per_line);
    let color = random_color(config.palette_size);
    tracing::debug!("Painting offset ({}, {}) color {}", offset.x, offset.y, color);
    let response = api.paint(offset, color).await;
    (offset, response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_stay_inside_tile() {
        for _ in 0..1000 {
            let offset = random_offset(100);
            assert!(offset.x < 100);
            assert!(offset.y < 100);
        }
    }

    #[test]
    fn test_colors_stay_inside_palette() {
        for _ in 0..1000 {
            let color = random_color(31);
            assert!((1..=31).contains(&color));
        }
    }

    #[test]
    fn test_color_range_covers_both_ends() {
        // With 1000 draws from [1, 2] both values show up
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..1000 {
            match random_color(2) {
                1 => seen_low = true,
                2 => seen_high = true,
                other => panic!("color {} outside palette", other),
            }
        }
        assert!(seen_low && seen_high);
    }
}
