//! Shooting stars: comets with a bounded trail and stochastic spawning.

use std::collections::VecDeque;

use astral_core::{Rgb, STAR_CYAN, STAR_WHITE};
use rand::Rng;

use crate::surface::Surface;

/// A star is done once it leaves the surface past these margins.
const EXIT_LEFT: f32 = -120.0;
const EXIT_BOTTOM: f32 = 80.0;

/// Inter-arrival window, in steady-state frames.
const SPAWN_MIN: u32 = 150;
const SPAWN_MAX: u32 = 320;

/// A comet streaking left and slightly downward.
#[derive(Debug, Clone)]
pub struct ShootingStar {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Recent positions, newest first; never longer than `cap`.
    pub trail: VecDeque<(f32, f32)>,
    pub cap: usize,
    pub alpha: f32,
    pub active: bool,
    pub color: Rgb,
    pub size: f32,
}

impl ShootingStar {
    /// Spawn in the upper-right region, headed down-left.
    pub fn spawn<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        ShootingStar {
            x: rng.gen_range(width * 0.5..width + 40.0),
            y: rng.gen_range(-40.0..height * 0.4),
            vx: rng.gen_range(-11.0..-6.0),
            vy: rng.gen_range(1.2..3.2),
            trail: VecDeque::new(),
            cap: rng.gen_range(14..=26),
            alpha: rng.gen_range(0.6..1.0),
            active: true,
            color: if rng.gen_bool(0.3) { STAR_CYAN } else { STAR_WHITE },
            size: rng.gen_range(0.8..1.8),
        }
    }

    /// Record the current position in the trail, move, and deactivate
    /// once off the surface.
    pub fn update(&mut self, height: f32) {
        self.trail.push_front((self.x, self.y));
        self.trail.truncate(self.cap);
        self.x += self.vx;
        self.y += self.vy;
        if self.x < EXIT_LEFT || self.y > height + EXIT_BOTTOM {
            self.active = false;
        }
    }

    /// Draw the head and its fading trail.
    pub fn render(&self, surface: &mut Surface) {
        if !self.active {
            return;
        }
        surface.fill_circle(self.x, self.y, self.size, self.color, self.alpha);
        let len = self.trail.len();
        let mut prev = (self.x, self.y);
        for (i, &p) in self.trail.iter().enumerate() {
            let t = (i + 1) as f32 / (len + 1) as f32;
            let a = self.alpha * (1.0 - t) * 0.9;
            let w = (self.size * (1.0 - t)).max(0.3);
            surface.line(prev.0, prev.1, p.0, p.1, self.color, a, w);
            prev = p;
        }
    }
}

/// Spawn pacing: one star per trigger, counter reset and a fresh target
/// drawn from the inter-arrival window each time.
#[derive(Debug, Clone)]
pub struct Spawner {
    counter: u32,
    target: u32,
}

impl Spawner {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Spawner {
            counter: 0,
            target: rng.gen_range(SPAWN_MIN..=SPAWN_MAX),
        }
    }

    /// Advance one frame. Returns `true` on the at-most-one spawn trigger.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.counter += 1;
        if self.counter >= self.target {
            self.counter = 0;
            self.target = rng.gen_range(SPAWN_MIN..=SPAWN_MAX);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn trail_never_exceeds_capacity() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut star = ShootingStar::spawn(800.0, 600.0, &mut rng);
        for _ in 0..200 {
            star.update(600.0);
            assert!(star.trail.len() <= star.cap);
        }
        assert_eq!(star.trail.len(), star.cap);
    }

    #[test]
    fn trail_evicts_oldest_first() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut star = ShootingStar::spawn(800.0, 600.0, &mut rng);
        let first_x = star.x;
        star.update(600.0);
        assert_eq!(star.trail.front().unwrap().0, first_x);
        for _ in 0..star.cap {
            star.update(600.0);
        }
        // The spawn position has been evicted off the back by now.
        assert!(star.trail.back().unwrap().0 < first_x);
    }

    #[test]
    fn deactivates_past_the_left_margin() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut star = ShootingStar::spawn(800.0, 600.0, &mut rng);
        star.x = EXIT_LEFT + 1.0;
        star.vx = -2.0;
        star.vy = 0.0;
        star.update(600.0);
        assert!(!star.active);
        // Inactive stars draw nothing.
        let mut surface = Surface::new(64, 64);
        star.render(&mut surface);
        assert!(surface.is_black());
    }

    #[test]
    fn deactivates_past_the_bottom_margin() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut star = ShootingStar::spawn(800.0, 600.0, &mut rng);
        star.y = 600.0 + EXIT_BOTTOM - 1.0;
        star.vy = 2.0;
        star.vx = 0.0;
        star.update(600.0);
        assert!(!star.active);
    }

    #[test]
    fn spawner_fires_once_per_window() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut spawner = Spawner::new(&mut rng);
        let mut gaps = Vec::new();
        let mut since = 0u32;
        for _ in 0..5_000 {
            since += 1;
            if spawner.tick(&mut rng) {
                gaps.push(since);
                since = 0;
            }
        }
        assert!(!gaps.is_empty());
        for gap in gaps {
            assert!((SPAWN_MIN..=SPAWN_MAX).contains(&gap), "gap {gap}");
        }
    }
}
