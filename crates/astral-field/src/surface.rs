//! Owned RGB framebuffer with alpha compositing.
//!
//! The animation simulates in continuous pixel space; everything it draws
//! lands here via source-over blending against an implicit black
//! background. The binary decides how the buffer reaches the terminal.

use astral_core::Rgb;

/// A width × height pixel buffer. Recreated on resize, never rescaled.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Surface {
    /// Allocate a black surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y); out-of-bounds reads come back black.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        if x >= self.width || y >= self.height {
            return Rgb::BLACK;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// True if no pixel holds any light.
    pub fn is_black(&self) -> bool {
        self.pixels.iter().all(|p| *p == Rgb::BLACK)
    }

    /// Composite a black overlay of the given alpha over the whole
    /// surface. This darkens instead of clearing, so previous frames
    /// persist as trails.
    pub fn fade(&mut self, alpha: f32) {
        let keep = 1.0 - alpha.clamp(0.0, 1.0);
        for px in &mut self.pixels {
            *px = px.scale(keep);
        }
    }

    /// Source-over blend a single pixel. Out-of-bounds writes are clipped.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if alpha <= 0.0 || x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = self.pixels[idx].blend(color, alpha);
    }

    /// Filled disc with a soft one-pixel edge.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb, alpha: f32) {
        if r <= 0.0 || alpha <= 0.0 {
            return;
        }
        let x0 = (cx - r).floor().max(0.0) as i32;
        let x1 = (cx + r).ceil().min(self.width as f32 - 1.0) as i32;
        let y0 = (cy - r).floor().max(0.0) as i32;
        let y1 = (cy + r).ceil().min(self.height as f32 - 1.0) as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let coverage = (r - d + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, alpha * coverage);
            }
        }
    }

    /// Line segment of the given stroke width (1..=2 px effective).
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb, alpha: f32, width: f32) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil() as i32;
        if steps == 0 {
            self.blend(x0.round() as i32, y0.round() as i32, color, alpha);
            return;
        }
        let len = (dx * dx + dy * dy).sqrt();
        // Perpendicular unit vector for strokes wider than one pixel.
        let (px, py) = (-dy / len, dx / len);
        let side_alpha = (width / 2.0 - 0.5).clamp(0.0, 1.0) * alpha;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = x0 + dx * t;
            let y = y0 + dy * t;
            self.blend(x.round() as i32, y.round() as i32, color, alpha);
            if side_alpha > 0.0 {
                self.blend((x + px).round() as i32, (y + py).round() as i32, color, side_alpha);
                self.blend((x - px).round() as i32, (y - py).round() as i32, color, side_alpha);
            }
        }
    }

    /// Filled polygon, scanline even-odd rule.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgb, alpha: f32) {
        if points.len() < 3 || alpha <= 0.0 {
            return;
        }
        let y_min = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let y_max = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let y0 = y_min.floor().max(0.0) as i32;
        let y1 = y_max.ceil().min(self.height as f32 - 1.0) as i32;
        let mut xs: Vec<f32> = Vec::with_capacity(points.len());
        for y in y0..=y1 {
            let yc = y as f32;
            xs.clear();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                if (a.1 <= yc) != (b.1 <= yc) {
                    xs.push(a.0 + (yc - a.1) / (b.1 - a.1) * (b.0 - a.0));
                }
            }
            xs.sort_by(|a, b| a.total_cmp(b));
            for pair in xs.chunks_exact(2) {
                let start = pair[0].round() as i32;
                let end = pair[1].round() as i32;
                for x in start..=end {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    /// Radial gradient disc fading color → transparent, with the nebula
    /// stops: full alpha at the center, 0.4·alpha at half radius, zero at
    /// the rim.
    pub fn fill_radial(&mut self, cx: f32, cy: f32, r: f32, color: Rgb, alpha: f32) {
        if r <= 0.0 || alpha <= 0.0 {
            return;
        }
        let x0 = (cx - r).floor().max(0.0) as i32;
        let x1 = (cx + r).ceil().min(self.width as f32 - 1.0) as i32;
        let y0 = (cy - r).floor().max(0.0) as i32;
        let y1 = (cy + r).ceil().min(self.height as f32 - 1.0) as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let t = (dx * dx + dy * dy).sqrt() / r;
                if t >= 1.0 {
                    continue;
                }
                let g = if t < 0.5 { 1.0 - 1.2 * t } else { 0.8 * (1.0 - t) };
                self.blend(x, y, color, alpha * g);
            }
        }
    }
}
