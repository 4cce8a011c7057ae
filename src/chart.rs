// One sunburst chart instance.
//
// Owns the hierarchy and every piece of view state, so several charts can
// live on one page without sharing anything. Click routing:
// - category wedge  -> zoom controller (drill in)
// - centre disc     -> zoom controller (drill out)
// - leaf wedge      -> detail view switcher
// Clicks are ignored while the detail view covers the sunburst, and on
// wedges that are not currently interactive.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::ChartConfig;
use crate::detail::{DetailViewSwitcher, RendererRegistry, ViewMode};
use crate::focus::FocusState;
use crate::hierarchy::{Hierarchy, HierarchyError, NodeId};
use crate::output::FrameOutput;
use crate::render::{arc_visible, svg, ArcRenderer};
use crate::zoom::{ZoomController, ZoomOutcome, ZoomPhase};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
    #[error("invalid chart config: {0}")]
    Config(#[source] serde_json::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Zoom,
    Detail,
    Ignored,
}

impl ClickOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            ClickOutcome::Zoom => "zoom",
            ClickOutcome::Detail => "detail",
            ClickOutcome::Ignored => "ignored",
        }
    }
}

pub struct SunburstChart {
    hierarchy: Hierarchy,
    config: ChartConfig,
    state: FocusState,
    zoom: ZoomController,
    renderer: ArcRenderer,
    detail: DetailViewSwitcher,
}

impl SunburstChart {
    pub fn new(hierarchy: Hierarchy, config: ChartConfig) -> Self {
        let state = FocusState::new(&hierarchy);
        let zoom = ZoomController::from_config(&config);
        let renderer = ArcRenderer::new(&hierarchy, &config);
        let detail = DetailViewSwitcher::new(&config, RendererRegistry::with_builtins());
        info!(nodes = hierarchy.len(), "sunburst chart created");
        Self { hierarchy, config, state, zoom, renderer, detail }
    }

    /// Builds a chart from the hierarchy document and an optional (possibly empty) config override.
    pub fn from_json(hierarchy_json: &str, config_json: &str) -> Result<Self, ChartError> {
        let config = ChartConfig::from_json(config_json).map_err(ChartError::Config)?;
        let hierarchy = Hierarchy::from_json(hierarchy_json)?;
        Ok(Self::new(hierarchy, config))
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn focus(&self) -> NodeId {
        self.state.focus
    }

    pub fn phase(&self) -> ZoomPhase {
        self.zoom.phase(&self.state)
    }

    pub fn view_mode(&self) -> &ViewMode {
        self.detail.mode()
    }

    pub fn sunburst_visible(&self) -> bool {
        self.detail.overview_visible()
    }

    pub fn renderers_mut(&mut self) -> &mut RendererRegistry {
        self.detail.registry_mut()
    }

    /// Click on a wedge. `slow_motion` is the alt-key modifier.
    pub fn click(&mut self, node: NodeId, slow_motion: bool, now: f64) -> ClickOutcome {
        if !self.sunburst_visible() {
            warn!(node = node.0, "click ignored while the detail view is open");
            return ClickOutcome::Ignored;
        }
        let Some(target) = self.state.target.get(node.0) else {
            warn!(node = node.0, "click on unknown node ignored");
            return ClickOutcome::Ignored;
        };
        if !arc_visible(target, &self.config) {
            warn!(node = node.0, "click on hidden wedge ignored");
            return ClickOutcome::Ignored;
        }

        if self.hierarchy.node(node).is_leaf() {
            return match self.detail.open(&self.hierarchy, node) {
                Some(_) => ClickOutcome::Detail,
                None => ClickOutcome::Ignored,
            };
        }

        match self.zoom.drill_in(&self.hierarchy, &mut self.state, node, slow_motion, now) {
            ZoomOutcome::Started => ClickOutcome::Zoom,
            ZoomOutcome::NotACategory => ClickOutcome::Ignored,
        }
    }

    /// Click on the centre disc: zoom out one level.
    pub fn click_center(&mut self, slow_motion: bool, now: f64) -> ClickOutcome {
        if !self.sunburst_visible() {
            return ClickOutcome::Ignored;
        }
        self.zoom.drill_out(&self.hierarchy, &mut self.state, slow_motion, now);
        ClickOutcome::Zoom
    }

    /// Animation-frame callback. Returns true while a transition is in flight.
    pub fn tick(&mut self, now: f64) -> bool {
        self.zoom.tick(&mut self.state, now)
    }

    /// Leaves the detail view; the sunburst comes back exactly as it was.
    pub fn back(&mut self) -> bool {
        self.detail.back()
    }

    pub fn center_target(&self) -> NodeId {
        self.hierarchy.node(self.state.focus).parent.unwrap_or(self.hierarchy.root)
    }

    pub fn frame(&self) -> FrameOutput {
        let w = self.config.width;
        FrameOutput {
            view: self.detail.mode().clone(),
            phase: self.phase(),
            focus: self.state.focus.0,
            center_target: self.center_target().0,
            center_radius: self.config.ring_radius(),
            viewbox: [-w / 2.0, -w / 2.0, w, w],
            arcs: self.renderer.arcs(&self.hierarchy, &self.state),
            detail: self.detail.view().cloned(),
        }
    }

    pub fn svg(&self) -> String {
        svg::frame_svg(&self.frame(), self.config.label_font_px)
    }
}
