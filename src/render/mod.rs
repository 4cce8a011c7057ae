// Arc renderer: focus state -> per-wedge visual attributes.
//
// Path and label position follow the *current* geometry (they move every
// frame). Opacity fades from whatever was on screen when the transition
// started to the target visibility with the eased progress. Clickability
// follows the target, so a wedge that is leaving the view stops taking
// clicks at once.

use crate::config::ChartConfig;
use crate::focus::FocusState;
use crate::hierarchy::{Hierarchy, NodeId};
use crate::output::{ArcOutput, LabelOutput};
use crate::zoom::Fade;

mod arc;
mod palette;
pub mod svg;

pub use arc::{arc_path, arc_visible, fade_of, fill_opacity, label_placement, label_visible, LabelPlacement};
pub use palette::{quantize, rainbow, CategoricalPalette, Rgb};

/// Fade levels of a node as currently on screen.
pub fn shown_fade(state: &FocusState, id: NodeId, cfg: &ChartConfig) -> Fade {
    let settled = fade_of(state.target(id), cfg);
    match &state.transition {
        Some(t) => t.fade_from[id.0].lerp(&settled, state.progress),
        None => settled,
    }
}

pub struct ArcRenderer {
    cfg: ChartConfig,
    palette: CategoricalPalette,
}

impl ArcRenderer {
    pub fn new(hierarchy: &Hierarchy, cfg: &ChartConfig) -> Self {
        Self { cfg: cfg.clone(), palette: CategoricalPalette::for_hierarchy(hierarchy) }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.cfg
    }

    /// Colour of a node's top-level category.
    pub fn fill(&self, hierarchy: &Hierarchy, id: NodeId) -> String {
        match hierarchy.top_level_ancestor(id) {
            Some(top) => self.palette.color(&hierarchy.node(top).name).to_hex(),
            None => "none".to_string(),
        }
    }

    /// Every node except the root, which sits under the centre disc.
    pub fn arcs(&self, hierarchy: &Hierarchy, state: &FocusState) -> Vec<ArcOutput> {
        hierarchy
            .nodes
            .iter()
            .filter(|n| n.id != hierarchy.root)
            .map(|n| {
                let current = state.current(n.id);
                let has_children = !n.is_leaf();
                let shown = shown_fade(state, n.id, &self.cfg);

                ArcOutput {
                    id: n.id.0,
                    name: n.name.clone(),
                    path: arc_path(current, &self.cfg),
                    fill: self.fill(hierarchy, n.id),
                    fill_opacity: fill_opacity(shown.arc, has_children, &self.cfg),
                    interactive: arc_visible(state.target(n.id), &self.cfg),
                    is_leaf: !has_children,
                    label: LabelOutput {
                        text: n.name.clone(),
                        transform: label_placement(current, &self.cfg).transform(),
                        opacity: shown.label,
                    },
                }
            })
            .collect()
    }
}
