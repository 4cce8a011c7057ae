// SVG emission for a frame, built with the `svg` crate.
//
// Overview: one <path> per wedge, one <text> per label, the centre disc as
// the zoom-out hit target, then the centre info text. Nodes carry
// `data-node` so the host can map a click back to a NodeId.
// Detail: a header with the back control (`data-back`), the algorithm's
// title and description, then the detail surface as a nested <svg>. A
// delegated renderer becomes an empty <g data-renderer="..."> for the host
// library to draw into.

use ::svg::node::element::{Circle, Group, Path, Rectangle, Text, SVG};
use ::svg::node::Text as TextNode;
use ::svg::Document;

use super::arc::num;
use crate::detail::{DetailView, Element};
use crate::output::FrameOutput;

const INFO_PROMPT: &str = "Click an algorithm";
const BACK_LABEL: &str = "\u{2190} Back to Overview";
/// Space above the detail surface for the back control, title and description.
const DETAIL_HEADER: f64 = 140.0;

pub fn frame_svg(frame: &FrameOutput, font_px: f64) -> String {
    match &frame.detail {
        Some(detail) => detail_svg(detail),
        None => overview_svg(frame, font_px),
    }
}

fn text(content: &str) -> Text {
    Text::new("").add(TextNode::new(content))
}

pub fn overview_svg(frame: &FrameOutput, font_px: f64) -> String {
    let [x, y, w, h] = frame.viewbox;

    let mut wedges = Group::new();
    for arc in &frame.arcs {
        wedges = wedges.add(
            Path::new()
                .set("data-node", arc.id.to_string())
                .set("d", arc.path.as_str())
                .set("fill", arc.fill.as_str())
                .set("fill-opacity", num(arc.fill_opacity))
                .set("pointer-events", if arc.interactive { "auto" } else { "none" })
                .set("style", "cursor: pointer"),
        );
    }

    let mut labels = Group::new()
        .set("pointer-events", "none")
        .set("text-anchor", "middle")
        .set("style", "user-select: none");
    for arc in &frame.arcs {
        labels = labels.add(
            text(&arc.label.text)
                .set("dy", "0.35em")
                .set("fill-opacity", num(arc.label.opacity))
                .set("transform", arc.label.transform.as_str()),
        );
    }

    let center = Circle::new()
        .set("data-center", frame.center_target.to_string())
        .set("r", num(frame.center_radius))
        .set("fill", "none")
        .set("pointer-events", "all");

    let info = Group::new()
        .set("class", "algorithm-info")
        .set("text-anchor", "middle")
        .set("pointer-events", "none")
        .add(text(INFO_PROMPT).set("y", -20).set("style", "font-weight: bold; font-size: 14px"));

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", format!("{} {} {} {}", num(x), num(y), num(w), num(h)))
        .set("style", format!("font: {}px sans-serif", num(font_px)))
        .add(wedges)
        .add(labels)
        .add(center)
        .add(info)
        .to_string()
}

pub fn detail_svg(detail: &DetailView) -> String {
    let surface = &detail.surface;
    let (w, h) = (surface.width, surface.height);

    let back = Group::new()
        .set("data-back", "true")
        .set("style", "cursor: pointer")
        .add(
            Rectangle::new()
                .set("x", 20)
                .set("y", 16)
                .set("width", 180)
                .set("height", 32)
                .set("rx", 4)
                .set("fill", "#667eea"),
        )
        .add(
            text(BACK_LABEL)
                .set("x", 110)
                .set("y", 37)
                .set("text-anchor", "middle")
                .set("style", "font-size: 14px; fill: white"),
        );

    let title = text(&detail.algorithm)
        .set("data-title", "true")
        .set("x", num(w / 2.0))
        .set("y", 84)
        .set("text-anchor", "middle")
        .set("style", "font-family: 'Playfair Display', Georgia, serif; font-size: 28px; fill: #0a0a0a");

    let description = text(&detail.description)
        .set("data-description", "true")
        .set("x", num(w / 2.0))
        .set("y", 118)
        .set("text-anchor", "middle")
        .set("style", "font-size: 16px; fill: #4a4a4a");

    let mut viz = SVG::new()
        .set("class", "algo-viz")
        .set("y", num(DETAIL_HEADER))
        .set("width", num(w))
        .set("height", num(h))
        .set("viewBox", format!("0 0 {} {}", num(w), num(h)))
        .add(Rectangle::new().set("width", num(w)).set("height", num(h)).set("rx", 8).set("fill", "#fafafa"));
    for element in &surface.elements {
        match element {
            Element::Text { x, y, text: content, font_px, fill } => {
                viz = viz.add(
                    text(content)
                        .set("x", num(*x))
                        .set("y", num(*y))
                        .set("text-anchor", "middle")
                        .set("style", format!("font-size: {}px; fill: {}", num(*font_px), fill)),
                );
            }
            Element::Delegate { renderer } => {
                viz = viz.add(Group::new().set("data-renderer", renderer.as_str()));
            }
        }
    }

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", format!("0 0 {} {}", num(w), num(h + DETAIL_HEADER)))
        .set("style", "max-width: 100%; height: auto")
        .add(back)
        .add(title)
        .add(description)
        .add(viz)
        .to_string()
}
