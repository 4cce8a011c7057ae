//! Output types for the browser host.
//!
//! These structs are serialized to JSON and handed to JavaScript, which
//! either draws them itself or mounts the SVG produced from them.

use serde::Serialize;

use crate::detail::{DetailView, ViewMode};
use crate::zoom::ZoomPhase;

/// One wedge, ready to draw
#[derive(Debug, Clone, Serialize)]
pub struct ArcOutput {
    pub id: usize,
    pub name: String,
    /// SVG path data, centred on the origin
    pub path: String,
    pub fill: String,
    pub fill_opacity: f64,
    /// Whether the wedge accepts clicks (follows the target geometry)
    pub interactive: bool,
    pub is_leaf: bool,
    pub label: LabelOutput,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelOutput {
    pub text: String,
    pub transform: String,
    pub opacity: f64,
}

/// Error payload, mirrors the message of the underlying error
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// Everything the host needs to paint one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameOutput {
    pub view: ViewMode,
    pub phase: ZoomPhase,
    pub focus: usize,
    /// Node that a click on the centre disc zooms to
    pub center_target: usize,
    pub center_radius: f64,
    /// min-x, min-y, width, height
    pub viewbox: [f64; 4],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arcs: Vec<ArcOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailView>,
}

/// Returned in place of a frame when the chart cannot be built
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    pub error: ErrorInfo,
}

impl ErrorOutput {
    pub fn new(err: &dyn std::error::Error) -> Self {
        Self { error: ErrorInfo { message: err.to_string() } }
    }
}
