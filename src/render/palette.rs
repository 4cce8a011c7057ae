// Categorical palette for top-level categories.
//
// n + 1 colours are sampled evenly from the cyclical cubehelix "rainbow"
// ramp (t = i / n), and handed out to names in first-seen order. Since the
// top-level categories are sorted, the assignment is stable for the session.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::hierarchy::Hierarchy;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cubehelix (h in degrees, s, l) to sRGB.
fn cubehelix(h: f64, s: f64, l: f64) -> Rgb {
    const A: f64 = -0.14861;
    const B: f64 = 1.78277;
    const C: f64 = -0.29227;
    const D: f64 = -0.90649;
    const E: f64 = 1.97294;

    let h = (h + 120.0) * PI / 180.0;
    let a = s * l * (1.0 - l);
    let (sin_h, cos_h) = h.sin_cos();
    let channel = |v: f64| (255.0 * v).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(l + a * (A * cos_h + B * sin_h)),
        g: channel(l + a * (C * cos_h + D * sin_h)),
        b: channel(l + a * (E * cos_h)),
    }
}

/// Cyclical rainbow ramp, t in [0, 1] (0 and 1 give the same colour).
pub fn rainbow(t: f64) -> Rgb {
    let t = t - t.floor();
    let ts = (t - 0.5).abs();
    cubehelix(360.0 * t - 100.0, 1.5 - 1.5 * ts, 0.8 - 0.9 * ts)
}

pub fn quantize(n: usize) -> Vec<Rgb> {
    match n {
        0 => Vec::new(),
        1 => vec![rainbow(0.0)],
        _ => (0..n).map(|i| rainbow(i as f64 / (n - 1) as f64)).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct CategoricalPalette {
    colors: Vec<Rgb>,
    assigned: HashMap<String, usize>,
}

impl CategoricalPalette {
    /// Palette keyed by the names of the root's children.
    pub fn for_hierarchy(hierarchy: &Hierarchy) -> Self {
        let top = &hierarchy.node(hierarchy.root).children;
        let mut palette = Self { colors: quantize(top.len() + 1), assigned: HashMap::new() };
        for &id in top {
            palette.assign(&hierarchy.node(id).name);
        }
        palette
    }

    fn assign(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.assigned.get(name) {
            return idx;
        }
        let idx = self.assigned.len() % self.colors.len().max(1);
        self.assigned.insert(name.to_string(), idx);
        idx
    }

    pub fn color(&self, name: &str) -> Rgb {
        let idx = self.assigned.get(name).copied().unwrap_or(0);
        self.colors.get(idx).copied().unwrap_or(Rgb { r: 0x99, g: 0x99, b: 0x99 })
    }
}
