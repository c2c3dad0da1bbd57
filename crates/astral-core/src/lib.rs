//! Core types shared across the astral workspace.
//!
//! Holds the scene [`Variant`] selector with its per-variant constants,
//! the floating-point [`Rgb`] color used by the compositing surface, and
//! the star/nebula palettes.

use ratatui::style::Color;
use serde::Deserialize;

/// Which starfield scene to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Hero scene: warp intro, nebula orbs, shooting stars.
    #[default]
    Hero,
    /// Plain full-page background: stars only, no intro.
    Background,
}

impl Variant {
    /// Number of stars in the population.
    pub fn star_count(self) -> usize {
        match self {
            Variant::Hero => 220,
            Variant::Background => 160,
        }
    }

    /// Radius above which a star renders as a 4-pointed sparkle.
    pub fn sparkle_threshold(self) -> f32 {
        match self {
            Variant::Hero => 1.4,
            Variant::Background => 1.3,
        }
    }

    /// Number of nebula orbs (hero scene only).
    pub fn orb_count(self) -> usize {
        match self {
            Variant::Hero => 6,
            Variant::Background => 0,
        }
    }

    /// Whether the scene opens with the warp-launch intro.
    pub fn has_warp(self) -> bool {
        matches!(self, Variant::Hero)
    }

    /// Whether shooting stars spawn during steady state.
    pub fn has_shooting_stars(self) -> bool {
        matches!(self, Variant::Hero)
    }

    /// Switch to the other scene.
    pub fn toggle(self) -> Self {
        match self {
            Variant::Hero => Variant::Background,
            Variant::Background => Variant::Hero,
        }
    }
}

/// Linear RGB color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channel values.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Multiply every channel by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Source-over blend of `top` at `alpha` onto `self`.
    pub fn blend(self, top: Rgb, alpha: f32) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        Self::new(
            self.r + (top.r - self.r) * a,
            self.g + (top.g - self.g) * a,
            self.b + (top.b - self.b) * a,
        )
    }

    /// Convert to a terminal color.
    pub fn as_color(self) -> Color {
        Color::Rgb(
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

/// Star colors: plain white plus the two brand accents.
pub const STAR_WHITE: Rgb = Rgb::from_u8(255, 255, 255);
pub const STAR_CYAN: Rgb = Rgb::from_u8(6, 182, 212);
pub const STAR_VIOLET: Rgb = Rgb::from_u8(124, 58, 237);

/// Nebula gradient base colors.
pub const NEBULA_COLORS: [Rgb; 4] = [
    Rgb::from_u8(124, 58, 237),
    Rgb::from_u8(6, 182, 212),
    Rgb::from_u8(159, 96, 245),
    Rgb::from_u8(34, 211, 238),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_constants() {
        assert_eq!(Variant::Hero.star_count(), 220);
        assert_eq!(Variant::Background.star_count(), 160);
        assert_eq!(Variant::Hero.orb_count(), 6);
        assert_eq!(Variant::Background.orb_count(), 0);
        assert!(Variant::Hero.has_warp());
        assert!(!Variant::Background.has_warp());
        assert_eq!(Variant::Hero.toggle(), Variant::Background);
    }

    #[test]
    fn blend_endpoints() {
        let black = Rgb::BLACK;
        let white = STAR_WHITE;
        assert_eq!(black.blend(white, 0.0), black);
        assert_eq!(black.blend(white, 1.0), white);
        let half = black.blend(white, 0.5);
        assert!((half.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn as_color_rounds_channels() {
        assert_eq!(STAR_CYAN.as_color(), Color::Rgb(6, 182, 212));
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).as_color(), Color::Rgb(255, 0, 128));
    }
}
