//! The ambient sky simulation: falling stars and drifting nebulae.
//!
//! Pure state plus one `advance` step per tick; painting lives in
//! `tui::backdrop` and this module never touches the terminal. All
//! randomness flows through an owned seeded generator, so a given seed
//! replays the same sky frame for frame.
//!
//! Coordinates are terminal cell units as `f64`, origin top-left, y
//! growing downward. Stars fall straight down and respawn at the top
//! once they leave the bottom edge; nebulae drift freely and wrap to the
//! opposite edge once their center is more than one radius outside.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// TUNING
// ============================================================================

/// Fixed star population.
pub const STAR_COUNT: usize = 150;
/// Fixed nebula population.
pub const NEBULA_COUNT: usize = 5;

/// Star radius upper bound; the radius picks the glyph when painted.
const STAR_RADIUS_MAX: f64 = 2.0;
/// Star fall speed range, cells per tick.
const STAR_SPEED_MIN: f64 = 0.02;
const STAR_SPEED_MAX: f64 = 0.14;
/// Opacity oscillation step per tick.
const OPACITY_STEP: f64 = 0.01;

/// Nebula radius range, in columns.
const NEBULA_RADIUS_MIN: f64 = 7.0;
const NEBULA_RADIUS_MAX: f64 = 18.0;
/// Nebula drift bound per axis, cells per tick.
const NEBULA_DRIFT_MAX: f64 = 0.06;

// ============================================================================
// PARTICLES
// ============================================================================

/// Direction a star's opacity is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Brighter,
    Dimmer,
}

impl Fade {
    fn step(self) -> f64 {
        match self {
            Fade::Brighter => OPACITY_STEP,
            Fade::Dimmer => -OPACITY_STEP,
        }
    }
}

/// One falling star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    /// Always within `[0.0, 1.0]`, bouncing between the bounds.
    pub opacity: f64,
    pub fade: Fade,
}

/// The two nebula tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NebulaHue {
    Cyan,
    Violet,
}

/// One drifting nebula cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct Nebula {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hue: NebulaHue,
    pub drift_x: f64,
    pub drift_y: f64,
}

// ============================================================================
// SKY
// ============================================================================

/// The whole backdrop state: both populations plus surface dimensions.
#[derive(Debug)]
pub struct Sky {
    width: f64,
    height: f64,
    stars: Vec<Star>,
    nebulae: Vec<Nebula>,
    rng: StdRng,
}

impl Sky {
    /// Populate a sky sized to the given surface.
    pub fn new(width: u16, height: u16, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (w, h) = (f64::from(width), f64::from(height));
        let stars = (0..STAR_COUNT).map(|_| spawn_star(&mut rng, w, h)).collect();
        let nebulae = (0..NEBULA_COUNT)
            .map(|_| spawn_nebula(&mut rng, w, h))
            .collect();
        Sky {
            width: w,
            height: h,
            stars,
            nebulae,
            rng,
        }
    }

    /// Assemble a sky from explicit populations.
    pub fn from_parts(width: u16, height: u16, stars: Vec<Star>, nebulae: Vec<Nebula>) -> Self {
        Sky {
            width: f64::from(width),
            height: f64::from(height),
            stars,
            nebulae,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn nebulae(&self) -> &[Nebula] {
        &self.nebulae
    }

    /// Adopt new surface dimensions. Particle positions are not rescaled;
    /// motion simply continues in the new coordinate space.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = f64::from(width);
        self.height = f64::from(height);
    }

    /// Advance the simulation by one frame: nebulae first, then stars.
    pub fn advance(&mut self) {
        for nebula in self.nebulae.iter_mut() {
            nebula.x += nebula.drift_x;
            nebula.y += nebula.drift_y;

            // Toroidal wrap once the center is more than one radius out.
            if nebula.x < -nebula.radius {
                nebula.x = self.width + nebula.radius;
            } else if nebula.x > self.width + nebula.radius {
                nebula.x = -nebula.radius;
            }
            if nebula.y < -nebula.radius {
                nebula.y = self.height + nebula.radius;
            } else if nebula.y > self.height + nebula.radius {
                nebula.y = -nebula.radius;
            }
        }

        for star in self.stars.iter_mut() {
            star.y += star.speed;

            // Reflect at the bounds so opacity never leaves [0, 1].
            let next = star.opacity + star.fade.step();
            if next < 0.0 {
                star.opacity = -next;
                star.fade = Fade::Brighter;
            } else if next > 1.0 {
                star.opacity = 2.0 - next;
                star.fade = Fade::Dimmer;
            } else {
                star.opacity = next;
            }

            // Fell past the bottom edge: respawn at the top at a fresh column.
            if star.y > self.height {
                star.y = 0.0;
                star.x = self.rng.random_range(0.0..self.width.max(1.0));
            }
        }
    }
}

fn spawn_star(rng: &mut StdRng, width: f64, height: f64) -> Star {
    Star {
        x: rng.random_range(0.0..width.max(1.0)),
        y: rng.random_range(0.0..height.max(1.0)),
        radius: rng.random_range(0.0..STAR_RADIUS_MAX),
        speed: rng.random_range(STAR_SPEED_MIN..STAR_SPEED_MAX),
        opacity: rng.random_range(0.0..1.0),
        fade: if rng.random_bool(0.5) {
            Fade::Brighter
        } else {
            Fade::Dimmer
        },
    }
}

fn spawn_nebula(rng: &mut StdRng, width: f64, height: f64) -> Nebula {
    Nebula {
        x: rng.random_range(0.0..width.max(1.0)),
        y: rng.random_range(0.0..height.max(1.0)),
        radius: rng.random_range(NEBULA_RADIUS_MIN..NEBULA_RADIUS_MAX),
        hue: if rng.random_bool(0.5) {
            NebulaHue::Cyan
        } else {
            NebulaHue::Violet
        },
        drift_x: rng.random_range(-NEBULA_DRIFT_MAX..NEBULA_DRIFT_MAX),
        drift_y: rng.random_range(-NEBULA_DRIFT_MAX..NEBULA_DRIFT_MAX),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn still_star(x: f64, y: f64, opacity: f64, fade: Fade) -> Star {
        Star {
            x,
            y,
            radius: 1.0,
            speed: 0.0,
            opacity,
            fade,
        }
    }

    fn drifting_nebula(x: f64, y: f64, drift_x: f64, drift_y: f64) -> Nebula {
        Nebula {
            x,
            y,
            radius: 8.0,
            hue: NebulaHue::Cyan,
            drift_x,
            drift_y,
        }
    }

    #[test]
    fn test_populations_have_fixed_counts() {
        let sky = Sky::new(80, 24, 1);
        assert_eq!(sky.stars().len(), STAR_COUNT);
        assert_eq!(sky.nebulae().len(), NEBULA_COUNT);
    }

    #[test]
    fn test_spawned_attributes_stay_in_their_ranges() {
        let sky = Sky::new(80, 24, 2);
        for star in sky.stars() {
            assert!((0.0..80.0).contains(&star.x));
            assert!((0.0..24.0).contains(&star.y));
            assert!((0.0..STAR_RADIUS_MAX).contains(&star.radius));
            assert!((STAR_SPEED_MIN..STAR_SPEED_MAX).contains(&star.speed));
            assert!((0.0..1.0).contains(&star.opacity));
        }
        for nebula in sky.nebulae() {
            assert!((NEBULA_RADIUS_MIN..NEBULA_RADIUS_MAX).contains(&nebula.radius));
            assert!(nebula.drift_x.abs() <= NEBULA_DRIFT_MAX);
            assert!(nebula.drift_y.abs() <= NEBULA_DRIFT_MAX);
        }
    }

    #[test]
    fn test_same_seed_replays_the_same_sky() {
        let mut a = Sky::new(80, 24, 42);
        let mut b = Sky::new(80, 24, 42);
        for _ in 0..100 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.stars(), b.stars());
        assert_eq!(a.nebulae(), b.nebulae());
    }

    #[test]
    fn test_star_y_is_monotone_or_reset_to_top() {
        let mut sky = Sky::new(40, 12, 7);
        for _ in 0..500 {
            let before: Vec<f64> = sky.stars().iter().map(|s| s.y).collect();
            sky.advance();
            for (star, prev) in sky.stars().iter().zip(before) {
                assert!(star.y >= prev || star.y == 0.0, "y went backwards");
            }
        }
    }

    #[test]
    fn test_opacity_never_leaves_the_unit_interval() {
        let mut sky = Sky::new(40, 12, 9);
        for _ in 0..1000 {
            sky.advance();
            for star in sky.stars() {
                assert!((0.0..=1.0).contains(&star.opacity));
            }
        }
    }

    #[test]
    fn test_opacity_reflects_at_the_lower_bound() {
        let star = still_star(1.0, 0.0, 0.005, Fade::Dimmer);
        let mut sky = Sky::from_parts(10, 10, vec![star], vec![]);
        sky.advance();
        let star = &sky.stars()[0];
        // 0.005 - 0.01 = -0.005 reflects back to 0.005, now brightening.
        assert!((star.opacity - 0.005).abs() < 1e-12);
        assert_eq!(star.fade, Fade::Brighter);
    }

    #[test]
    fn test_opacity_reflects_at_the_upper_bound() {
        let star = still_star(1.0, 0.0, 0.995, Fade::Brighter);
        let mut sky = Sky::from_parts(10, 10, vec![star], vec![]);
        sky.advance();
        let star = &sky.stars()[0];
        assert!((star.opacity - 0.995).abs() < 1e-12);
        assert_eq!(star.fade, Fade::Dimmer);
    }

    #[test]
    fn test_star_respawns_at_top_after_the_bottom_edge() {
        let mut star = still_star(17.0, 19.95, 0.5, Fade::Brighter);
        star.speed = 0.1;
        let mut sky = Sky::from_parts(40, 20, vec![star], vec![]);
        sky.advance();
        let star = &sky.stars()[0];
        assert_eq!(star.y, 0.0);
        assert!((0.0..40.0).contains(&star.x));
    }

    #[test]
    fn test_nebula_wraps_horizontally_within_one_frame() {
        let right = drifting_nebula(48.0, 10.0, 0.05, 0.0);
        let left = drifting_nebula(-8.0, 10.0, -0.05, 0.0);
        let mut sky = Sky::from_parts(40, 20, vec![], vec![right, left]);
        sky.advance();
        // Past width + radius on the right: reappears one radius off the left.
        assert_eq!(sky.nebulae()[0].x, -8.0);
        // Past -radius on the left: reappears one radius off the right.
        assert_eq!(sky.nebulae()[1].x, 48.0);
    }

    #[test]
    fn test_nebula_wraps_vertically_within_one_frame() {
        let below = drifting_nebula(20.0, 28.0, 0.0, 0.05);
        let above = drifting_nebula(20.0, -8.0, 0.0, -0.05);
        let mut sky = Sky::from_parts(40, 20, vec![], vec![below, above]);
        sky.advance();
        assert_eq!(sky.nebulae()[0].y, -8.0);
        assert_eq!(sky.nebulae()[1].y, 28.0);
    }

    #[test]
    fn test_nebula_inside_the_margin_does_not_wrap() {
        let nebula = drifting_nebula(20.0, 10.0, 0.05, 0.0);
        let mut sky = Sky::from_parts(40, 20, vec![], vec![nebula]);
        sky.advance();
        assert!((sky.nebulae()[0].x - 20.05).abs() < 1e-12);
    }

    #[test]
    fn test_resize_keeps_particle_positions() {
        let mut sky = Sky::new(80, 24, 3);
        for _ in 0..10 {
            sky.advance();
        }
        let stars_before = sky.stars().to_vec();
        let nebulae_before = sky.nebulae().to_vec();

        sky.resize(10, 5);
        assert_eq!(sky.stars(), &stars_before[..]);
        assert_eq!(sky.nebulae(), &nebulae_before[..]);

        // And the simulation keeps going in the new space.
        sky.advance();
    }

    #[test]
    fn test_zero_area_sky_is_safe() {
        let mut sky = Sky::new(0, 0, 1);
        for _ in 0..200 {
            sky.advance();
        }
        assert_eq!(sky.stars().len(), STAR_COUNT);
    }
}
