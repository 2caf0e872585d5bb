//! Cosmetic parallax layers: a city skyline along the bottom and a band of
//! stars higher up. Generated once per session, never affects gameplay.

use crate::core::constants::{
    CITY_BUILDINGS, CITY_HEIGHT, STAR_COUNT, STAR_FIELD_HEIGHT, STAR_FIELD_TOP,
};
use rand::Rng;

/// One skyline block, in layer-local coordinates (x in `0..layer_width`).
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    /// Offset from the top of the star band.
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    pub layer_width: f64,
    pub buildings: Vec<Building>,
    pub stars: Vec<Star>,
}

impl Backdrop {
    pub fn generate<R: Rng>(rng: &mut R, layer_width: f64) -> Self {
        let building_width = (layer_width / CITY_BUILDINGS as f64).floor();
        let max_jitter = (building_width / 2.0).floor() as u32;
        let min_height = (CITY_HEIGHT / 2.0) as u32;

        let buildings = (0..CITY_BUILDINGS)
            .map(|i| Building {
                x: i as f64 * building_width + rng.gen_range(0..=max_jitter) as f64,
                width: building_width,
                height: rng.gen_range(min_height..=CITY_HEIGHT as u32) as f64,
            })
            .collect();

        let max_x = (layer_width as u32).saturating_sub(1);
        let max_y = (STAR_FIELD_HEIGHT as u32).saturating_sub(1);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0..=max_x) as f64,
                y: rng.gen_range(0..=max_y) as f64,
                radius: rng.gen_range(1..=2) as f64,
            })
            .collect();

        Self {
            layer_width,
            buildings,
            stars,
        }
    }

    /// Height of the skyline at screen column `x` given the layer's scroll
    /// offset. Zero where there is no building. Buildings past the right
    /// edge of the layer are clipped, same as a fixed-width surface.
    pub fn skyline_height(&self, x: f64, scroll: f64) -> f64 {
        let local = wrap(x + scroll, self.layer_width);
        self.buildings
            .iter()
            .filter(|b| local >= b.x && local < (b.x + b.width).min(self.layer_width))
            .map(|b| b.height)
            .fold(0.0, f64::max)
    }

    /// Whether a star covers the screen point `(x, y)` given the star
    /// layer's scroll offset.
    pub fn star_at(&self, x: f64, y: f64, scroll: f64) -> bool {
        let band_y = y - STAR_FIELD_TOP;
        if !(0.0..STAR_FIELD_HEIGHT).contains(&band_y) {
            return false;
        }
        let local = wrap(x + scroll, self.layer_width);
        self.stars.iter().any(|s| {
            let dx = (local - s.x).abs().min(self.layer_width - (local - s.x).abs());
            let dy = band_y - s.y;
            dx * dx + dy * dy <= s.radius * s.radius
        })
    }
}

fn wrap(value: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    value.rem_euclid(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_counts_and_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let backdrop = Backdrop::generate(&mut rng, 400.0);
        assert_eq!(backdrop.buildings.len(), CITY_BUILDINGS);
        assert_eq!(backdrop.stars.len(), STAR_COUNT);

        for (i, b) in backdrop.buildings.iter().enumerate() {
            let slot = i as f64 * 50.0;
            assert!(b.x >= slot && b.x <= slot + 25.0);
            assert!(b.height >= 50.0 && b.height <= CITY_HEIGHT);
        }
        for s in &backdrop.stars {
            assert!(s.x >= 0.0 && s.x < 400.0);
            assert!(s.y >= 0.0 && s.y < STAR_FIELD_HEIGHT);
            assert!(s.radius == 1.0 || s.radius == 2.0);
        }
    }

    #[test]
    fn test_skyline_wraps_with_scroll() {
        let backdrop = Backdrop {
            layer_width: 400.0,
            buildings: vec![Building {
                x: 0.0,
                width: 50.0,
                height: 80.0,
            }],
            stars: Vec::new(),
        };
        assert_eq!(backdrop.skyline_height(10.0, 0.0), 80.0);
        assert_eq!(backdrop.skyline_height(10.0, 100.0), 0.0);
        // Scrolled by 390: screen x 15 samples layer x 5.
        assert_eq!(backdrop.skyline_height(15.0, 390.0), 80.0);
    }

    #[test]
    fn test_star_lookup() {
        let backdrop = Backdrop {
            layer_width: 400.0,
            buildings: Vec::new(),
            stars: vec![Star {
                x: 20.0,
                y: 10.0,
                radius: 2.0,
            }],
        };
        assert!(backdrop.star_at(20.0, STAR_FIELD_TOP + 10.0, 0.0));
        assert!(!backdrop.star_at(20.0, 10.0, 0.0));
        assert!(backdrop.star_at(10.0, STAR_FIELD_TOP + 10.0, 10.0));
    }
}
