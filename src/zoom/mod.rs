// Zoom controller: the Idle / Animating state machine over FocusState.
//
// - drill_in: focus a clicked category (leaves are rejected, they open the detail view)
// - drill_out: focus the current focus's parent (root stays root, identity transition replays)
// - a click while animating abandons the in-flight transition and starts
//   from whatever `current` holds at that instant (last click wins, no queue)
// - opacity continues from what is on screen when a transition starts, so an
//   interrupted fade never pops
// - tick: advance `current` toward `target`; snap exactly onto it when done

use serde::Serialize;
use tracing::debug;

use crate::config::ChartConfig;
use crate::focus::{retarget, FocusState};
use crate::hierarchy::{Hierarchy, NodeId};
use crate::render::shown_fade;

mod transition;

pub use transition::{Easing, Fade, Transition};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ZoomPhase {
    Idle,
    Animating {
        from: NodeId,
        to: NodeId,
        start_time: f64,
        duration: f64,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomOutcome {
    Started,
    /// The node has no children; focus is unchanged.
    NotACategory,
}

#[derive(Debug, Clone)]
pub struct ZoomController {
    cfg: ChartConfig,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

impl ZoomController {
    pub fn from_config(cfg: &ChartConfig) -> Self {
        Self { cfg: cfg.clone() }
    }

    pub fn phase(&self, state: &FocusState) -> ZoomPhase {
        match &state.transition {
            None => ZoomPhase::Idle,
            Some(t) => ZoomPhase::Animating {
                from: t.from_focus,
                to: t.to_focus,
                start_time: t.start_time,
                duration: t.duration,
            },
        }
    }

    fn duration(&self, slow_motion: bool) -> f64 {
        if slow_motion { self.cfg.slow_motion_duration_ms } else { self.cfg.zoom_duration_ms }
    }

    pub fn drill_in(
        &self,
        hierarchy: &Hierarchy,
        state: &mut FocusState,
        node: NodeId,
        slow_motion: bool,
        now: f64,
    ) -> ZoomOutcome {
        if hierarchy.node(node).is_leaf() {
            return ZoomOutcome::NotACategory;
        }
        self.focus_on(hierarchy, state, node, slow_motion, now);
        ZoomOutcome::Started
    }

    pub fn drill_out(&self, hierarchy: &Hierarchy, state: &mut FocusState, slow_motion: bool, now: f64) {
        let parent = hierarchy.node(state.focus).parent.unwrap_or(hierarchy.root);
        self.focus_on(hierarchy, state, parent, slow_motion, now);
    }

    fn focus_on(&self, hierarchy: &Hierarchy, state: &mut FocusState, node: NodeId, slow_motion: bool, now: f64) {
        let fade_from = hierarchy.nodes.iter().map(|n| shown_fade(state, n.id, &self.cfg)).collect();
        if let Some(abandoned) = state.transition.take() {
            debug!(from = abandoned.from_focus.0, to = abandoned.to_focus.0, "transition abandoned");
        }

        let target = retarget(hierarchy, node);
        let duration = self.duration(slow_motion);
        debug!(from = state.focus.0, to = node.0, duration, "zoom transition started");

        state.transition = Some(Transition {
            from_focus: state.focus,
            to_focus: node,
            from: state.current.clone(),
            to: target.clone(),
            fade_from,
            start_time: now,
            duration,
            easing: self.cfg.easing,
        });
        state.focus = node;
        state.target = target;
        state.progress = 0.0;
    }

    /// Advances the in-flight transition to `now`. Returns true while still animating.
    pub fn tick(&self, state: &mut FocusState, now: f64) -> bool {
        let Some(transition) = &state.transition else {
            return false;
        };

        if transition.is_complete(now) {
            state.current = state.target.clone();
            state.progress = 1.0;
            state.transition = None;
            debug!(focus = state.focus.0, "zoom transition finished");
            return false;
        }

        state.progress = transition.eased_progress(now);
        state.current = transition.sample(now);
        true
    }
}
