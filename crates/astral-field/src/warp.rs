//! Warp-launch intro: an accelerating radial burst of rays.
//!
//! Runs for a fixed window of frames from init, darkening the previous
//! frame instead of clearing it so the rays leave blurred trails. When
//! the window closes the surface is cleared and the phase never returns.

use astral_core::{Rgb, STAR_CYAN, STAR_VIOLET, STAR_WHITE};
use rand::Rng;

use crate::surface::Surface;

/// Length of the warp phase in frames.
pub const WARP_FRAMES: u32 = 110;

/// Margin around the surface within which rays are still drawn.
const DRAW_MARGIN: f32 = 100.0;

/// Ease-out quadratic. Monotone non-decreasing, exactly 1.0 at
/// `progress == 1.0`.
pub fn ease_out(progress: f32) -> f32 {
    1.0 - (1.0 - progress) * (1.0 - progress)
}

/// One radial ray. `dist` only ever grows.
#[derive(Debug, Clone)]
pub struct WarpRay {
    pub angle: f32,
    pub dist: f32,
    pub speed: f32,
    pub width: f32,
    pub alpha: f32,
    pub color: Rgb,
}

/// Warp phase state: frame counter plus the ray set.
#[derive(Debug, Clone)]
pub struct Warp {
    frame: u32,
    origin_x: f32,
    origin_y: f32,
    rays: Vec<WarpRay>,
}

const RAY_COUNT: usize = 90;

fn ray_color<R: Rng>(rng: &mut R) -> Rgb {
    let roll: f32 = rng.gen_range(0.0..1.0);
    if roll < 0.6 {
        STAR_WHITE
    } else if roll < 0.85 {
        STAR_CYAN
    } else {
        STAR_VIOLET
    }
}

impl Warp {
    /// Build the full ray set for a surface of the given dimensions.
    pub fn new<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let mut warp = Warp {
            frame: 0,
            origin_x: 0.0,
            origin_y: 0.0,
            rays: Vec::new(),
        };
        warp.rebuild(width, height, rng);
        warp
    }

    /// Replace the ray set for new dimensions, keeping the frame counter.
    /// Used when the surface resizes while the phase is still running.
    pub fn rebuild<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.origin_x = width * 0.5;
        self.origin_y = height * 0.42;
        self.rays = (0..RAY_COUNT)
            .map(|_| WarpRay {
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                dist: rng.gen_range(0.0..40.0),
                speed: rng.gen_range(2.0..6.0),
                width: rng.gen_range(0.6..2.0),
                alpha: rng.gen_range(0.3..0.9),
                color: ray_color(rng),
            })
            .collect();
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Render one warp frame and advance the counter. Returns `true` once
    /// the phase has completed; the caller clears the surface and drops
    /// this state for good.
    pub fn tick(&mut self, surface: &mut Surface) -> bool {
        let progress = self.frame as f32 / WARP_FRAMES as f32;
        let eased = ease_out(progress);

        // Translucent dark overlay instead of a clear: trails persist.
        surface.fade(0.88 - 0.58 * eased);

        let fade = (1.0 - eased * 0.82).max(0.0);
        let w = surface.width() as f32;
        let h = surface.height() as f32;
        for ray in &mut self.rays {
            let near = ray.dist;
            ray.dist += ray.speed * (1.0 + eased * 10.0);
            let (sin, cos) = ray.angle.sin_cos();
            let fx = self.origin_x + cos * ray.dist;
            let fy = self.origin_y + sin * ray.dist;
            // Off-surface rays keep advancing but are skipped this frame.
            if fx < -DRAW_MARGIN || fx > w + DRAW_MARGIN || fy < -DRAW_MARGIN || fy > h + DRAW_MARGIN
            {
                continue;
            }
            let nx = self.origin_x + cos * near;
            let ny = self.origin_y + sin * near;
            surface.line(nx, ny, fx, fy, ray.color, ray.alpha * fade, ray.width);
        }

        self.frame += 1;
        self.frame >= WARP_FRAMES
    }
}
