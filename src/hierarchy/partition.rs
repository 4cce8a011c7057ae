// Radial space partition ("sunburst" partition).
//
// - Weights bottom-up: a leaf weighs 1, a category the sum of its children
// - Angles top-down: root spans [0, 2π), each child gets a share of its
//   parent's span proportional to weight, in sibling order
// - Radii: a node at depth d spans [d, d + 1]
//
// Child boundaries are computed from cumulative weight, and the last child
// ends exactly at the parent's end, so spans always abut with no drift.

use std::f64::consts::TAU;

use super::Hierarchy;
use crate::focus::Geometry;

pub fn partition(hierarchy: &mut Hierarchy) {
    assign_weights(hierarchy);

    let root = hierarchy.root;
    hierarchy.nodes[root.0].geometry = Geometry {
        angular_start: 0.0,
        angular_end: TAU,
        radial_inner: 0.0,
        radial_outer: 1.0,
    };

    // Pre-order guarantees a parent's geometry is final before its children are visited.
    for idx in 0..hierarchy.nodes.len() {
        assign_child_angles(hierarchy, idx);
    }
}

/// Nodes are stored in pre-order, so a reverse sweep sees children before parents.
fn assign_weights(hierarchy: &mut Hierarchy) {
    for idx in (0..hierarchy.nodes.len()).rev() {
        let node = &hierarchy.nodes[idx];
        let weight = if node.children.is_empty() {
            1
        } else {
            node.children.iter().map(|c| hierarchy.nodes[c.0].weight).sum()
        };
        hierarchy.nodes[idx].weight = weight;
    }
}

fn assign_child_angles(hierarchy: &mut Hierarchy, idx: usize) {
    let parent = &hierarchy.nodes[idx];
    if parent.children.is_empty() {
        return;
    }

    let start = parent.geometry.angular_start;
    let end = parent.geometry.angular_end;
    let span = end - start;
    let depth = parent.depth as f64 + 1.0;
    let total = parent.weight.max(1) as f64;
    let children = parent.children.clone();
    let last = children.len() - 1;

    let mut cumulative = 0usize;
    let mut child_start = start;
    for (i, child) in children.into_iter().enumerate() {
        cumulative += hierarchy.nodes[child.0].weight;
        let child_end = if i == last {
            end
        } else {
            start + span * (cumulative as f64 / total)
        };
        hierarchy.nodes[child.0].geometry = Geometry {
            angular_start: child_start,
            angular_end: child_end,
            radial_inner: depth,
            radial_outer: depth + 1.0,
        };
        child_start = child_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::tests::small_tree;
    use crate::hierarchy::{CategoryNode, NodeId};
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn assert_tiles(h: &Hierarchy) {
        for node in &h.nodes {
            if node.children.is_empty() {
                continue;
            }
            let first = h.node(node.children[0]).geometry;
            let last = h.node(*node.children.last().unwrap()).geometry;
            assert!((first.angular_start - node.geometry.angular_start).abs() < EPS);
            assert!((last.angular_end - node.geometry.angular_end).abs() < EPS);
            for pair in node.children.windows(2) {
                let a = h.node(pair[0]).geometry;
                let b = h.node(pair[1]).geometry;
                assert_eq!(a.angular_end, b.angular_start, "siblings must abut exactly");
            }
        }
    }

    #[test]
    fn test_scenario_angles() {
        let h = Hierarchy::build(&small_tree()).unwrap();
        let a = h.node(h.find_by_name("A").unwrap()).geometry;
        let b = h.node(h.find_by_name("B").unwrap()).geometry;
        let leaf1 = h.node(h.find_by_name("leaf1").unwrap()).geometry;
        let leaf2 = h.node(h.find_by_name("leaf2").unwrap()).geometry;
        let leaf3 = h.node(h.find_by_name("leaf3").unwrap()).geometry;

        assert!((a.angular_span() - TAU * 2.0 / 3.0).abs() < EPS);
        assert!((b.angular_span() - TAU / 3.0).abs() < EPS);
        assert!((leaf1.angular_span() - PI * 2.0 / 3.0).abs() < EPS);
        assert!((leaf2.angular_span() - PI * 2.0 / 3.0).abs() < EPS);
        assert!((leaf3.angular_span() - TAU / 3.0).abs() < EPS);
        assert!(leaf1.angular_start < leaf2.angular_start);
    }

    #[test]
    fn test_radial_span_matches_depth() {
        let h = Hierarchy::build(&small_tree()).unwrap();
        for node in &h.nodes {
            assert_eq!(node.geometry.radial_inner, node.depth as f64);
            assert_eq!(node.geometry.radial_outer, node.depth as f64 + 1.0);
        }
    }

    #[test]
    fn test_single_leaf_tree() {
        let raw = CategoryNode::category("root", vec![CategoryNode::leaf("only")]);
        let h = Hierarchy::build(&raw).unwrap();
        let only = h.node(NodeId(1)).geometry;
        assert_eq!(only.angular_start, 0.0);
        assert_eq!(only.angular_end, TAU);
    }

    #[test]
    fn test_root_with_empty_children_is_a_leaf() {
        let raw = CategoryNode::category("root", vec![]);
        let h = Hierarchy::build(&raw).unwrap();
        assert_eq!(h.len(), 1);
        assert_eq!(h.node(h.root).weight, 1);
        assert_eq!(h.node(h.root).geometry.angular_end, TAU);
    }

    fn arb_children() -> impl Strategy<Value = CategoryNode> {
        let leaf = "[a-z]{1,6}".prop_map(|name| CategoryNode::leaf(&name));
        leaf.prop_recursive(4, 64, 6, |inner| {
            ("[a-z]{1,6}", prop::collection::vec(inner, 1..6))
                .prop_map(|(name, children)| CategoryNode::category(&name, children))
        })
    }

    fn arb_tree() -> impl Strategy<Value = CategoryNode> {
        prop::collection::vec(arb_children(), 1..6)
            .prop_map(|children| CategoryNode::category("root", children))
    }

    proptest! {
        #[test]
        fn prop_children_tile_parent(raw in arb_tree()) {
            let h = Hierarchy::build(&raw).unwrap();
            assert_tiles(&h);
        }

        #[test]
        fn prop_leaf_spans_sum_to_full_circle(raw in arb_tree()) {
            let h = Hierarchy::build(&raw).unwrap();
            let total: f64 = h.nodes.iter()
                .filter(|n| n.is_leaf())
                .map(|n| n.geometry.angular_span())
                .sum();
            prop_assert!((total - TAU).abs() < 1e-9);
        }

        #[test]
        fn prop_leaf_share_is_equal(raw in arb_tree()) {
            let h = Hierarchy::build(&raw).unwrap();
            let leaves = h.node(h.root).weight as f64;
            for n in h.nodes.iter().filter(|n| n.is_leaf()) {
                prop_assert!((n.geometry.angular_span() - TAU / leaves).abs() < 1e-9);
            }
        }
    }
}
