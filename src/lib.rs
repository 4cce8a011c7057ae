//! Zoomable sunburst navigation core for the ML algorithm atlas.
//!
//! Raw category document -> [`hierarchy`] (radial partition) ->
//! [`focus`] (focus-relative geometry) driven by [`zoom`] ->
//! [`render`] (wedges, labels, SVG). Leaf clicks switch to a [`detail`] view.

pub mod chart;
pub mod config;
pub mod detail;
pub mod focus;
pub mod hierarchy;
pub mod output;
pub mod render;
pub mod zoom;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use chart::{ChartError, ClickOutcome, SunburstChart};
pub use config::ChartConfig;
pub use detail::{DetailRenderer, DetailView, DetailViewSwitcher, RendererRegistry, Surface, ViewMode};
pub use focus::{retarget, FocusState, Geometry};
pub use hierarchy::{CategoryNode, Hierarchy, HierarchyError, LayoutNode, NodeId};
pub use output::FrameOutput;
pub use render::ArcRenderer;
pub use zoom::{Easing, Transition, ZoomController, ZoomOutcome, ZoomPhase};
