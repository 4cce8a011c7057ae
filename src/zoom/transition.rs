// Animated focus transition as a plain value.
//
// A transition never touches the focus state itself: `sample` is a pure
// function of (transition, now), so any scheduler can drive it, whether the
// browser's animation-frame loop or a test passing synthetic timestamps.

use serde::{Deserialize, Serialize};

use crate::focus::Geometry;
use crate::hierarchy::NodeId;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// How much of a wedge and of its label is on screen, each in [0, 1].
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct Fade {
    pub arc: f64,
    pub label: f64,
}

impl Fade {
    pub fn lerp(&self, to: &Fade, t: f64) -> Fade {
        Fade {
            arc: self.arc + (to.arc - self.arc) * t,
            label: self.label + (to.label - self.label) * t,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub from_focus: NodeId,
    pub to_focus: NodeId,
    /// Snapshot of every node's current geometry when the transition started.
    pub from: Vec<Geometry>,
    pub to: Vec<Geometry>,
    /// Fade levels on screen when the transition started; opacity moves
    /// from these toward the target's visibility.
    pub fade_from: Vec<Fade>,
    /// Milliseconds, same clock as the `now` passed to `sample`.
    pub start_time: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Transition {
    /// Linear clock progress in [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn eased_progress(&self, now: f64) -> f64 {
        self.easing.apply(self.progress(now))
    }

    pub fn is_complete(&self, now: f64) -> bool {
        now - self.start_time >= self.duration
    }

    /// Interpolated geometry of every node at `now`. Exactly `to` once complete.
    pub fn sample(&self, now: f64) -> Vec<Geometry> {
        if self.is_complete(now) {
            return self.to.clone();
        }
        let t = self.eased_progress(now);
        self.from.iter().zip(&self.to).map(|(a, b)| a.lerp(b, t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_transition(easing: Easing) -> Transition {
        Transition {
            from_focus: NodeId(0),
            to_focus: NodeId(1),
            from: vec![Geometry { angular_start: 0.0, angular_end: 1.0, radial_inner: 1.0, radial_outer: 2.0 }],
            to: vec![Geometry { angular_start: 0.0, angular_end: 3.0, radial_inner: 0.0, radial_outer: 1.0 }],
            fade_from: vec![Fade { arc: 1.0, label: 1.0 }],
            start_time: 1000.0,
            duration: 750.0,
            easing,
        }
    }

    #[test]
    fn test_easing_fixed_points() {
        for easing in [Easing::Linear, Easing::CubicInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        }
        assert!(Easing::CubicInOut.apply(0.25) < 0.25);
        assert!(Easing::CubicInOut.apply(0.75) > 0.75);
    }

    #[test]
    fn test_sample_before_start_is_origin() {
        let t = make_transition(Easing::Linear);
        assert_eq!(t.sample(900.0), t.from);
        assert_eq!(t.sample(1000.0), t.from);
    }

    #[test]
    fn test_sample_midway_linear() {
        let t = make_transition(Easing::Linear);
        let mid = t.sample(1375.0);
        assert!((mid[0].angular_end - 2.0).abs() < 1e-12);
        assert!((mid[0].radial_inner - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sample_after_end_is_exact_target() {
        let t = make_transition(Easing::CubicInOut);
        assert!(!t.is_complete(1749.0));
        assert!(t.is_complete(1750.0));
        assert_eq!(t.sample(1750.0), t.to);
        assert_eq!(t.sample(5000.0), t.to);
    }

    #[test]
    fn test_fade_lerp() {
        let shown = Fade { arc: 0.5, label: 1.0 };
        let mid = shown.lerp(&Fade::default(), 0.5);
        assert_eq!(mid, Fade { arc: 0.25, label: 0.5 });
    }

    #[test]
    fn test_zero_duration_is_immediately_complete() {
        let mut t = make_transition(Easing::Linear);
        t.duration = 0.0;
        assert_eq!(t.progress(1000.0), 1.0);
        assert_eq!(t.sample(1000.0), t.to);
    }

    #[test]
    fn test_easing_deserializes_kebab_case() {
        let e: Easing = serde_json::from_str("\"cubic-in-out\"").unwrap();
        assert_eq!(e, Easing::CubicInOut);
        let e: Easing = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(e, Easing::Linear);
    }
}
