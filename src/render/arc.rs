// Arc geometry -> drawable attributes.
//
// Everything here is a pure function of a node's (focus-relative) geometry
// plus chart constants. Angles are radians, 0 at twelve o'clock, clockwise.
// Radii are in rings until multiplied by the ring radius.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

use serde::Serialize;

use crate::config::ChartConfig;
use crate::focus::Geometry;
use crate::zoom::Fade;

const EPSILON: f64 = 1e-12;

/// Paintable and clickable: inside the rendered rings [1, visible_rings] with non-zero width.
pub fn arc_visible(g: &Geometry, cfg: &ChartConfig) -> bool {
    g.radial_outer <= cfg.visible_rings && g.radial_inner >= 1.0 && g.angular_end > g.angular_start
}

pub fn label_visible(g: &Geometry, cfg: &ChartConfig) -> bool {
    g.radial_outer <= cfg.visible_rings
        && g.radial_inner >= 1.0
        && g.radial_span() * g.angular_span() > cfg.label_area_threshold
}

/// Settled fade levels of `g`: each part fully shown or hidden.
pub fn fade_of(g: &Geometry, cfg: &ChartConfig) -> Fade {
    Fade {
        arc: arc_visible(g, cfg) as u8 as f64,
        label: label_visible(g, cfg) as u8 as f64,
    }
}

/// Wedge opacity at fade level `level` (0 hidden, 1 fully shown).
pub fn fill_opacity(level: f64, has_children: bool, cfg: &ChartConfig) -> f64 {
    let full = if has_children { cfg.category_opacity } else { cfg.leaf_opacity };
    full * level
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    /// Midpoint angle in degrees, clockwise from twelve o'clock.
    pub angle_deg: f64,
    pub radius: f64,
    /// Rotated a half turn so the text never reads upside down.
    pub flipped: bool,
}

impl LabelPlacement {
    pub fn transform(&self) -> String {
        format!(
            "rotate({}) translate({},0) rotate({})",
            num(self.angle_deg - 90.0),
            num(self.radius),
            if self.flipped { 180 } else { 0 }
        )
    }
}

pub fn label_placement(g: &Geometry, cfg: &ChartConfig) -> LabelPlacement {
    let angle_deg = (g.angular_start + g.angular_end) / 2.0 * 180.0 / PI;
    LabelPlacement {
        angle_deg,
        radius: (g.radial_inner + g.radial_outer) / 2.0 * cfg.ring_radius(),
        flipped: angle_deg >= 180.0,
    }
}

/// SVG path data for the padded annular sector of `g`.
pub fn arc_path(g: &Geometry, cfg: &ChartConfig) -> String {
    let ring = cfg.ring_radius();
    let mut r0 = g.radial_inner * ring;
    let mut r1 = (g.radial_inner * ring).max(g.radial_outer * ring - 1.0);
    if r1 < r0 {
        std::mem::swap(&mut r0, &mut r1);
    }

    let a0 = g.angular_start - FRAC_PI_2;
    let a1 = g.angular_end - FRAC_PI_2;
    let da = (a1 - a0).abs();
    let cw = a1 > a0;

    let mut path = PathBuilder::default();

    if r1 <= EPSILON {
        path.move_to(0.0, 0.0);
        return path.finish();
    }

    if da > TAU - EPSILON {
        // Full ring: two half arcs per circle.
        let mid = a0 + PI;
        path.move_to(r1 * a0.cos(), r1 * a0.sin());
        path.arc_to(r1, mid, PI, true);
        path.arc_to(r1, a0, PI, true);
        if r0 > EPSILON {
            path.move_to(r0 * a0.cos(), r0 * a0.sin());
            path.arc_to(r0, mid, PI, false);
            path.arc_to(r0, a0, PI, false);
        }
        return path.finish();
    }

    let (mut a00, mut a10) = (a0, a1);
    let (mut a01, mut a11) = (a0, a1);
    let (mut da0, mut da1) = (da, da);

    let ap = (da / 2.0).min(cfg.max_pad_angle) / 2.0;
    let rp = cfg.pad_radius();
    if ap > EPSILON && rp > EPSILON {
        let dir = if cw { 1.0 } else { -1.0 };
        let mid = (a0 + a1) / 2.0;

        let p0 = if r0 > EPSILON { (rp / r0 * ap.sin()).asin() } else { f64::NAN };
        da0 -= p0 * 2.0;
        if da0 > EPSILON {
            a00 += p0 * dir;
            a10 -= p0 * dir;
        } else {
            da0 = 0.0;
            a00 = mid;
            a10 = mid;
        }

        let p1 = (rp / r1 * ap.sin()).asin();
        da1 -= p1 * 2.0;
        if da1 > EPSILON {
            a01 += p1 * dir;
            a11 -= p1 * dir;
        } else {
            da1 = 0.0;
            a01 = mid;
            a11 = mid;
        }
    }

    path.move_to(r1 * a01.cos(), r1 * a01.sin());
    if da1 > EPSILON {
        path.arc_to(r1, a11, da1, cw);
    }

    path.line_to(r0 * a10.cos(), r0 * a10.sin());
    if r0 > EPSILON && da0 > EPSILON {
        path.arc_to(r0, a00, da0, !cw);
    }

    path.close();
    path.finish()
}

#[derive(Default)]
struct PathBuilder {
    d: String,
}

impl PathBuilder {
    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "M{},{}", num(x), num(y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "L{},{}", num(x), num(y));
    }

    /// Circular arc around the origin ending at angle `to`, sweeping `span` radians.
    fn arc_to(&mut self, r: f64, to: f64, span: f64, clockwise: bool) {
        let large = if span > PI + EPSILON { 1 } else { 0 };
        let sweep = if clockwise { 1 } else { 0 };
        let _ = write!(
            self.d,
            "A{},{},0,{},{},{},{}",
            num(r),
            num(r),
            large,
            sweep,
            num(r * to.cos()),
            num(r * to.sin())
        );
    }

    fn close(&mut self) {
        self.d.push('Z');
    }

    fn finish(self) -> String {
        self.d
    }
}

/// Fixed three-decimal formatting with trailing zeros trimmed; never prints `-0`.
pub(crate) fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
