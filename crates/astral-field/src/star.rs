//! Twinkling star population and constellation pass.

use astral_core::{Rgb, STAR_CYAN, STAR_VIOLET, STAR_WHITE};
use rand::Rng;

use crate::surface::Surface;

/// Horizontal wrap margin: stars leave one edge 5 px out and re-enter
/// 5 px beyond the opposite one.
pub const WRAP_MARGIN: f32 = 5.0;

/// Size of the fixed constellation subset (creation order).
pub const CONSTELLATION_STARS: usize = 80;

/// Maximum pair distance for a constellation edge.
pub const CONSTELLATION_DIST: f32 = 100.0;

/// A single star. Everything but `x` is immutable after creation.
#[derive(Debug, Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub alpha: f32,
    /// Twinkle angular speed (rad/frame).
    pub speed: f32,
    /// Twinkle phase offset.
    pub phase: f32,
    /// Horizontal drift (px/frame).
    pub drift: f32,
    pub color: Rgb,
}

/// Weighted star color draw: mostly white with cyan and violet accents.
fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    let roll: f32 = rng.gen_range(0.0..1.0);
    if roll < 0.80 {
        STAR_WHITE
    } else if roll < 0.92 {
        STAR_CYAN
    } else {
        STAR_VIOLET
    }
}

/// Build a fresh population for the given surface dimensions.
pub fn generate<R: Rng>(count: usize, width: f32, height: f32, rng: &mut R) -> Vec<Star> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            r: rng.gen_range(0.3..1.8),
            alpha: rng.gen_range(0.25..1.0),
            speed: rng.gen_range(0.0003..0.001),
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
            drift: rng.gen_range(-0.04..0.04),
            color: random_color(rng),
        })
        .collect()
}

/// Drift every star horizontally, wrapping at the margins.
pub fn update(stars: &mut [Star], width: f32) {
    for s in stars {
        s.x += s.drift;
        if s.x < -WRAP_MARGIN {
            s.x = width + WRAP_MARGIN;
        } else if s.x > width + WRAP_MARGIN {
            s.x = -WRAP_MARGIN;
        }
    }
}

/// Draw every star at its current twinkle alpha. Stars above the sparkle
/// threshold render as a 4-pointed sparkle, the rest as discs.
pub fn render(stars: &[Star], surface: &mut Surface, frame: u64, sparkle_threshold: f32) {
    for s in stars {
        let a = s.alpha * (0.5 + 0.5 * (frame as f32 * s.speed + s.phase).sin());
        if s.r > sparkle_threshold {
            surface.fill_polygon(&sparkle_points(s.x, s.y, s.r * 2.5), s.color, a);
        } else {
            surface.fill_circle(s.x, s.y, s.r, s.color, a);
        }
    }
}

/// The 8-vertex concave sparkle polygon: four long arms with a narrow waist.
fn sparkle_points(x: f32, y: f32, len: f32) -> [(f32, f32); 8] {
    [
        (x, y - len),
        (x + 0.5, y - 0.5),
        (x + len, y),
        (x + 0.5, y + 0.5),
        (x, y + len),
        (x - 0.5, y + 0.5),
        (x - len, y),
        (x - 0.5, y - 0.5),
    ]
}

/// Draw faint edges between nearby stars from the fixed first-80 subset.
pub fn render_constellations(stars: &[Star], surface: &mut Surface) {
    let subset = &stars[..stars.len().min(CONSTELLATION_STARS)];
    for (i, a) in subset.iter().enumerate() {
        for b in &subset[i + 1..] {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < CONSTELLATION_DIST {
                let alpha = (1.0 - dist / CONSTELLATION_DIST) * 0.14;
                surface.line(a.x, a.y, b.x, b.y, STAR_WHITE, alpha, 1.0);
            }
        }
    }
}

/// Count the edges the constellation pass would draw. Deterministic for a
/// fixed set of positions.
pub fn constellation_edges(stars: &[Star]) -> usize {
    let subset = &stars[..stars.len().min(CONSTELLATION_STARS)];
    let mut edges = 0;
    for (i, a) in subset.iter().enumerate() {
        for b in &subset[i + 1..] {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            if (dx * dx + dy * dy).sqrt() < CONSTELLATION_DIST {
                edges += 1;
            }
        }
    }
    edges
}
