//! Focus state: which node is the centre of the view, and where every
//! node is (current) and is heading (target) relative to it.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::hierarchy::{Hierarchy, NodeId};
use crate::zoom::Transition;

/// Angular span in radians, radial span in rings.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct Geometry {
    pub angular_start: f64,
    pub angular_end: f64,
    pub radial_inner: f64,
    pub radial_outer: f64,
}

impl Geometry {
    pub fn angular_span(&self) -> f64 {
        self.angular_end - self.angular_start
    }

    pub fn radial_span(&self) -> f64 {
        self.radial_outer - self.radial_inner
    }

    /// Component-wise linear interpolation, `t` in [0, 1].
    pub fn lerp(&self, to: &Geometry, t: f64) -> Geometry {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Geometry {
            angular_start: mix(self.angular_start, to.angular_start),
            angular_end: mix(self.angular_end, to.angular_end),
            radial_inner: mix(self.radial_inner, to.radial_inner),
            radial_outer: mix(self.radial_outer, to.radial_outer),
        }
    }

    pub fn approx_eq(&self, other: &Geometry, eps: f64) -> bool {
        (self.angular_start - other.angular_start).abs() < eps
            && (self.angular_end - other.angular_end).abs() < eps
            && (self.radial_inner - other.radial_inner).abs() < eps
            && (self.radial_outer - other.radial_outer).abs() < eps
    }
}

/// Target geometry of every node when `focus` becomes the centre.
///
/// Pure function of the tree and the focus. Nodes outside the focus's
/// angular span (ancestors included) collapse to zero width. Endpoints are
/// clamped independently, so a span straddling the focus boundary keeps a
/// partial wedge.
pub fn retarget(hierarchy: &Hierarchy, focus: NodeId) -> Vec<Geometry> {
    let f = hierarchy.node(focus);
    let fg = f.geometry;
    let scale = 1.0 / fg.angular_span();
    let depth = f.depth as f64;

    hierarchy
        .nodes
        .iter()
        .map(|d| {
            let g = d.geometry;
            Geometry {
                angular_start: clamp01((g.angular_start - fg.angular_start) * scale) * TAU,
                angular_end: clamp01((g.angular_end - fg.angular_start) * scale) * TAU,
                radial_inner: (g.radial_inner - depth).max(0.0),
                radial_outer: (g.radial_outer - depth).max(0.0),
            }
        })
        .collect()
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Per-chart view state. Owned by the chart, mutated only by the zoom controller.
#[derive(Debug, Clone)]
pub struct FocusState {
    pub focus: NodeId,
    pub current: Vec<Geometry>,
    pub target: Vec<Geometry>,
    /// Some only while an animation is in flight.
    pub transition: Option<Transition>,
    /// Eased progress of the in-flight transition, 1.0 when idle.
    pub progress: f64,
}

impl FocusState {
    pub fn new(hierarchy: &Hierarchy) -> Self {
        let target = retarget(hierarchy, hierarchy.root);
        Self {
            focus: hierarchy.root,
            current: target.clone(),
            target,
            transition: None,
            progress: 1.0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn current(&self, id: NodeId) -> &Geometry {
        &self.current[id.0]
    }

    pub fn target(&self, id: NodeId) -> &Geometry {
        &self.target[id.0]
    }
}
