// Detail view switching: overview (sunburst) <-> one algorithm's illustration.
//
// Pure view-mode state. It reads the hierarchy but never the zoom state:
// leaving the detail view restores the sunburst exactly as it was.

use serde::Serialize;
use tracing::debug;

use crate::config::ChartConfig;
use crate::hierarchy::{Hierarchy, NodeId};

mod registry;
mod surface;

pub use registry::{
    DetailRenderer, HostRenderer, PlaceholderRenderer, RendererRegistry, ALGORITHM_RENDERERS, PLACEHOLDER_KEY,
};
pub use surface::{Element, Surface};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "algorithm", rename_all = "snake_case")]
pub enum ViewMode {
    Overview,
    Detail(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub node: NodeId,
    pub algorithm: String,
    pub description: String,
    pub renderer: String,
    pub surface: Surface,
}

pub struct DetailViewSwitcher {
    registry: RendererRegistry,
    mode: ViewMode,
    view: Option<DetailView>,
    width: f64,
    height: f64,
    no_description: String,
}

impl DetailViewSwitcher {
    pub fn new(cfg: &ChartConfig, registry: RendererRegistry) -> Self {
        Self {
            registry,
            mode: ViewMode::Overview,
            view: None,
            width: cfg.detail_width,
            height: cfg.detail_height,
            no_description: cfg.no_description.clone(),
        }
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }

    pub fn overview_visible(&self) -> bool {
        self.mode == ViewMode::Overview
    }

    pub fn registry_mut(&mut self) -> &mut RendererRegistry {
        &mut self.registry
    }

    /// Opens the detail view for a leaf. Categories are refused (None).
    /// Opening while already in detail replaces the previous surface.
    pub fn open(&mut self, hierarchy: &Hierarchy, node: NodeId) -> Option<&DetailView> {
        let leaf = hierarchy.node(node);
        if !leaf.is_leaf() {
            return None;
        }

        let mut surface = Surface::new(self.width, self.height);
        let renderer = self.registry.render(&leaf.name, &mut surface);
        let description = leaf
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| self.no_description.clone());

        debug!(algorithm = %leaf.name, renderer = %renderer, "detail view opened");
        self.mode = ViewMode::Detail(leaf.name.clone());
        self.view = Some(DetailView {
            node,
            algorithm: leaf.name.clone(),
            description,
            renderer,
            surface,
        });
        self.view.as_ref()
    }

    /// Destroys the detail surface and shows the overview again. False if already there.
    pub fn back(&mut self) -> bool {
        if self.view.take().is_none() && self.mode == ViewMode::Overview {
            return false;
        }
        self.mode = ViewMode::Overview;
        debug!("detail view closed");
        true
    }
}
