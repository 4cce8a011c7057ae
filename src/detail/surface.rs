use serde::Serialize;

/// Drawing target handed to a detail renderer. Coordinates are in the
/// surface's own viewbox, `0 0 width height`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Text {
        x: f64,
        y: f64,
        text: String,
        font_px: f64,
        fill: String,
    },
    /// The host's diagram library draws this renderer into the surface.
    Delegate { renderer: String },
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, elements: Vec::new() }
    }

    /// Horizontally centred text.
    pub fn text(&mut self, x: f64, y: f64, text: &str, font_px: f64, fill: &str) {
        self.elements.push(Element::Text {
            x,
            y,
            text: text.to_string(),
            font_px,
            fill: fill.to_string(),
        });
    }

    pub fn delegate(&mut self, renderer: &str) {
        self.elements.push(Element::Delegate { renderer: renderer.to_string() });
    }

    pub fn delegated_renderer(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            Element::Delegate { renderer } => Some(renderer.as_str()),
            _ => None,
        })
    }
}
