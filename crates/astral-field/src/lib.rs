//! Starfield animation engine.
//!
//! One [`Starfield`] instance owns a pixel [`Surface`] and every particle
//! collection: twinkling stars with constellation edges, drifting nebula
//! orbs, the warp-launch intro, and shooting stars. The caller drives it
//! with explicit `tick`/`resize` calls; there is no hidden timer and no
//! global state, so several instances can run side by side and tests can
//! single-step frames deterministically.

mod debounce;
mod nebula;
mod shooting;
mod star;
mod surface;
mod warp;

pub use debounce::{Debouncer, RESIZE_DEBOUNCE};
pub use surface::Surface;
pub use warp::WARP_FRAMES;

use astral_core::Variant;
use rand::SeedableRng;
use rand::rngs::StdRng;

use nebula::NebulaOrb;
use shooting::{ShootingStar, Spawner};
use star::Star;
use warp::Warp;

/// The animator: all per-frame state behind `tick`.
#[derive(Debug)]
pub struct Starfield {
    variant: Variant,
    surface: Surface,
    stars: Vec<Star>,
    orbs: Vec<NebulaOrb>,
    warp: Option<Warp>,
    shooting: Vec<ShootingStar>,
    spawner: Spawner,
    frame: u64,
    rng: StdRng,
}

impl Starfield {
    /// Initialize for a surface of the given pixel dimensions. A
    /// zero-area surface produces a disabled animator whose `tick` is a
    /// silent no-op.
    pub fn new(variant: Variant, width: u32, height: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (w, h) = (width as f32, height as f32);
        let stars = star::generate(variant.star_count(), w, h, &mut rng);
        let orbs = nebula::generate(variant.orb_count(), w, h, &mut rng);
        let warp = (variant.has_warp() && width > 0 && height > 0)
            .then(|| Warp::new(w, h, &mut rng));
        let spawner = Spawner::new(&mut rng);
        Starfield {
            variant,
            surface: Surface::new(width, height),
            stars,
            orbs,
            warp,
            shooting: Vec::new(),
            spawner,
            frame: 0,
            rng,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The rendered frame.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Frames ticked since init.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether the warp intro is still running.
    pub fn in_warp(&self) -> bool {
        self.warp.is_some()
    }

    fn disabled(&self) -> bool {
        self.surface.width() == 0 || self.surface.height() == 0
    }

    /// Advance and render one frame.
    pub fn tick(&mut self) {
        if self.disabled() {
            return;
        }
        self.frame += 1;

        if let Some(warp) = self.warp.as_mut() {
            if warp.tick(&mut self.surface) {
                // The intro is over for good: hand off to steady state
                // from a clean slate.
                self.surface.clear();
                self.warp = None;
            }
            return;
        }

        let w = self.surface.width() as f32;
        let h = self.surface.height() as f32;
        self.surface.clear();

        nebula::update(&mut self.orbs, w, h);
        nebula::render(&self.orbs, &mut self.surface);

        star::render_constellations(&self.stars, &mut self.surface);
        star::update(&mut self.stars, w);
        star::render(
            &self.stars,
            &mut self.surface,
            self.frame,
            self.variant.sparkle_threshold(),
        );

        if self.variant.has_shooting_stars() {
            if self.spawner.tick(&mut self.rng) {
                self.shooting.push(ShootingStar::spawn(w, h, &mut self.rng));
            }
            for s in &mut self.shooting {
                s.update(h);
                s.render(&mut self.surface);
            }
            self.shooting.retain(|s| s.active);
        }
    }

    /// Apply new surface dimensions: swap in a fresh star population (and
    /// a fresh ray set if the intro is still running). Nebula orbs and
    /// shooting stars carry over unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (w, h) = (width as f32, height as f32);
        self.surface = Surface::new(width, height);
        self.stars = star::generate(self.variant.star_count(), w, h, &mut self.rng);
        if let Some(warp) = self.warp.as_mut() {
            if width > 0 && height > 0 {
                warp.rebuild(w, h, &mut self.rng);
            }
        }
    }

    /// Number of constellation edges the current positions produce.
    pub fn constellation_edges(&self) -> usize {
        star::constellation_edges(&self.stars)
    }

    /// Active shooting-star count.
    pub fn shooting_count(&self) -> usize {
        self.shooting.len()
    }

    /// Star count in the current population.
    pub fn star_count(&self) -> usize {
        self.stars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_init_allocates_everything() {
        let field = Starfield::new(Variant::Hero, 800, 600, 1);
        assert_eq!(field.star_count(), 220);
        assert_eq!(field.orbs.len(), 6);
        assert!(field.in_warp());
    }

    #[test]
    fn background_init_is_stars_only() {
        let field = Starfield::new(Variant::Background, 800, 600, 1);
        assert_eq!(field.star_count(), 160);
        assert!(field.orbs.is_empty());
        assert!(!field.in_warp());
    }

    #[test]
    fn zero_area_animator_is_inert() {
        let mut field = Starfield::new(Variant::Hero, 0, 600, 1);
        assert!(!field.in_warp());
        field.tick();
        field.tick();
        assert_eq!(field.frame(), 0);
    }

    #[test]
    fn resize_swaps_the_star_population() {
        let mut field = Starfield::new(Variant::Background, 400, 300, 1);
        let before: Vec<f32> = field.stars.iter().map(|s| s.x).collect();
        field.resize(800, 600);
        assert_eq!(field.star_count(), 160);
        let after: Vec<f32> = field.stars.iter().map(|s| s.x).collect();
        assert_ne!(before, after);
        assert_eq!(field.surface().width(), 800);
    }

    #[test]
    fn off_surface_shooting_star_is_swept_within_one_tick() {
        use std::collections::VecDeque;

        let mut field = Starfield::new(Variant::Hero, 200, 150, 13);
        for _ in 0..WARP_FRAMES {
            field.tick();
        }
        assert!(!field.in_warp());

        // Plant a comet already past the left exit margin.
        field.shooting.push(ShootingStar {
            x: -121.0,
            y: 50.0,
            vx: -8.0,
            vy: 2.0,
            trail: VecDeque::new(),
            cap: 20,
            alpha: 0.8,
            active: true,
            color: astral_core::STAR_WHITE,
            size: 1.0,
        });
        assert_eq!(field.shooting_count(), 1);

        field.tick();
        assert_eq!(field.shooting_count(), 0, "inactive comet survived the sweep");
    }

    #[test]
    fn resize_leaves_orbs_and_shooting_stars_alone() {
        let mut field = Starfield::new(Variant::Hero, 800, 600, 1);
        let orb_positions: Vec<(f32, f32)> = field.orbs.iter().map(|o| (o.x, o.y)).collect();
        field.resize(400, 300);
        let after: Vec<(f32, f32)> = field.orbs.iter().map(|o| (o.x, o.y)).collect();
        assert_eq!(orb_positions, after);
    }
}
