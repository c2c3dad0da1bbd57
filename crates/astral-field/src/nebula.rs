//! Drifting nebula orbs rendered as radial gradients.

use astral_core::{NEBULA_COLORS, Rgb};
use rand::Rng;

use crate::surface::Surface;

/// A soft gradient orb that drifts slowly and bounces off the edges.
#[derive(Debug, Clone)]
pub struct NebulaOrb {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub alpha: f32,
    pub color: Rgb,
    pub dx: f32,
    pub dy: f32,
}

/// Build the orb set for the given surface dimensions.
pub fn generate<R: Rng>(count: usize, width: f32, height: f32, rng: &mut R) -> Vec<NebulaOrb> {
    if count == 0 || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| NebulaOrb {
            x: rng.gen_range(width * 0.1..width * 0.9),
            y: rng.gen_range(height * 0.05..height * 0.75),
            r: rng.gen_range(120.0..280.0),
            alpha: rng.gen_range(0.03..0.11),
            color: NEBULA_COLORS[rng.gen_range(0..NEBULA_COLORS.len())],
            dx: rng.gen_range(-0.05..0.05),
            dy: rng.gen_range(-0.03..0.03),
        })
        .collect()
}

/// Drift the orbs one frame. A drift component reverses only when the
/// orb's leading edge has crossed the boundary and the component still
/// points outward, so one crossing flips the sign exactly once. An orb
/// wider than the surface on an axis overlaps both edges at once and
/// would re-trigger every frame, so it keeps its drift on that axis.
pub fn update(orbs: &mut [NebulaOrb], width: f32, height: f32) {
    for o in orbs {
        o.x += o.dx;
        o.y += o.dy;
        if o.r * 2.0 <= width
            && ((o.x - o.r < 0.0 && o.dx < 0.0) || (o.x + o.r > width && o.dx > 0.0))
        {
            o.dx = -o.dx;
        }
        if o.r * 2.0 <= height
            && ((o.y - o.r < 0.0 && o.dy < 0.0) || (o.y + o.r > height && o.dy > 0.0))
        {
            o.dy = -o.dy;
        }
    }
}

/// Draw every orb as a color → transparent radial gradient.
pub fn render(orbs: &[NebulaOrb], surface: &mut Surface) {
    for o in orbs {
        surface.fill_radial(o.x, o.y, o.r, o.color, o.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn orb(x: f32, y: f32, dx: f32, dy: f32) -> NebulaOrb {
        NebulaOrb {
            x,
            y,
            r: 50.0,
            alpha: 0.08,
            color: NEBULA_COLORS[0],
            dx,
            dy,
        }
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let orbs = generate(6, 800.0, 600.0, &mut rng);
        assert_eq!(orbs.len(), 6);
        for o in &orbs {
            assert!((80.0..720.0).contains(&o.x));
            assert!((30.0..450.0).contains(&o.y));
            assert!((120.0..280.0).contains(&o.r));
            assert!((0.03..0.11).contains(&o.alpha));
        }
    }

    #[test]
    fn drift_flips_once_per_crossing() {
        // Leading edge already out on the right, moving outward.
        let mut orbs = vec![orb(360.0, 100.0, 0.05, 0.0)];
        update(&mut orbs, 400.0, 300.0);
        assert!(orbs[0].dx < 0.0, "should reflect off the right edge");
        // Still outside on the next frame, but now inbound: no second flip.
        update(&mut orbs, 400.0, 300.0);
        assert!(orbs[0].dx < 0.0, "must not flip twice for one crossing");
    }

    #[test]
    fn vertical_bounce_mirrors_horizontal() {
        let mut orbs = vec![orb(200.0, 40.0, 0.0, -0.03)];
        update(&mut orbs, 400.0, 300.0);
        assert!(orbs[0].dy > 0.0);
        update(&mut orbs, 400.0, 300.0);
        assert!(orbs[0].dy > 0.0);
    }

    #[test]
    fn oversized_orb_never_oscillates() {
        // Diameter exceeds the surface width: both vertical edges are
        // overlapped at once, so the horizontal drift must stay put
        // instead of negating every frame.
        let mut orbs = vec![orb(40.0, 100.0, 0.05, 0.0)];
        orbs[0].r = 120.0;
        let mut flips = 0;
        let mut prev = orbs[0].dx;
        for _ in 0..100 {
            update(&mut orbs, 80.0, 300.0);
            if orbs[0].dx.signum() != prev.signum() {
                flips += 1;
            }
            prev = orbs[0].dx;
        }
        assert_eq!(flips, 0, "oversized orb re-flipped");
        assert!((orbs[0].x - 45.0).abs() < 1e-3, "orb stopped drifting");
        // The vertical axis still fits and still bounces.
        orbs[0].dy = -0.03;
        orbs[0].y = 119.0;
        update(&mut orbs, 80.0, 300.0);
        assert!(orbs[0].dy > 0.0);
    }

    #[test]
    fn interior_orb_keeps_its_drift() {
        let mut orbs = vec![orb(200.0, 150.0, 0.04, -0.02)];
        for _ in 0..100 {
            update(&mut orbs, 400.0, 300.0);
        }
        assert!(orbs[0].dx > 0.0);
        assert!(orbs[0].dy < 0.0);
    }
}
