use std::f64::consts::{PI, TAU};

use sunburst_core::{
    retarget, ChartConfig, ClickOutcome, Hierarchy, NodeId, SunburstChart, ViewMode, ZoomPhase,
};

const EPS: f64 = 1e-9;

const ATLAS: &str = r#"{
  "name": "Machine Learning",
  "children": [
    {
      "name": "Unsupervised",
      "description": "Learning structure without labels",
      "children": [
        {"name": "K-Means", "description": "Partitions points into k clusters around centroids"},
        {"name": "DBSCAN"},
        {"name": "Spectral Clustering"}
      ]
    },
    {
      "name": "Supervised",
      "children": [
        {"name": "Regression", "children": [
          {"name": "Linear Regression"},
          {"name": "Ridge/Lasso Regression"}
        ]},
        {"name": "SVM"}
      ]
    }
  ]
}"#;

const SCENARIO: &str = r#"{
  "name": "root",
  "children": [
    {"name": "B", "children": [{"name": "leaf3"}]},
    {"name": "A", "children": [{"name": "leaf1"}, {"name": "leaf2"}]}
  ]
}"#;

fn id(chart: &SunburstChart, name: &str) -> NodeId {
    chart.hierarchy().find_by_name(name).unwrap()
}

#[test]
fn test_partition_and_drill_in_scenario() {
    let mut chart = SunburstChart::from_json(SCENARIO, "").unwrap();
    let h = chart.hierarchy();

    let a = h.node(id(&chart, "A")).geometry;
    let b = h.node(id(&chart, "B")).geometry;
    assert!((a.angular_span() - TAU * 2.0 / 3.0).abs() < EPS);
    assert!((b.angular_span() - TAU / 3.0).abs() < EPS);
    assert!((h.node(id(&chart, "leaf1")).geometry.angular_span() - PI / 3.0 * 2.0).abs() < EPS);

    let a_id = id(&chart, "A");
    assert_eq!(chart.click(a_id, false, 0.0), ClickOutcome::Zoom);
    chart.tick(750.0);

    let leaf1 = chart.state().current(id(&chart, "leaf1"));
    let leaf2 = chart.state().current(id(&chart, "leaf2"));
    assert!(leaf1.angular_start.abs() < EPS);
    assert!((leaf1.angular_end - PI).abs() < EPS);
    assert!((leaf2.angular_start - PI).abs() < EPS);
    assert!((leaf2.angular_end - TAU).abs() < EPS);
}

#[test]
fn test_retarget_is_idempotent_for_every_focus() {
    let h = Hierarchy::from_json(ATLAS).unwrap();
    for node in &h.nodes {
        assert_eq!(retarget(&h, node.id), retarget(&h, node.id));
    }
}

#[test]
fn test_zoom_round_trip_restores_geometry() {
    let mut chart = SunburstChart::from_json(ATLAS, "").unwrap();
    let initial = chart.state().current.clone();
    let supervised = id(&chart, "Supervised");

    chart.click(supervised, false, 0.0);
    chart.tick(750.0);
    chart.click_center(false, 1000.0);
    chart.tick(1750.0);

    assert_eq!(chart.focus(), chart.hierarchy().root);
    for (now, before) in chart.state().current.iter().zip(&initial) {
        assert!(now.approx_eq(before, EPS));
    }
}

#[test]
fn test_nested_drill_and_center_target() {
    let mut chart = SunburstChart::from_json(ATLAS, "").unwrap();
    let supervised = id(&chart, "Supervised");
    let regression = id(&chart, "Regression");

    chart.click(supervised, false, 0.0);
    chart.tick(750.0);
    assert_eq!(chart.center_target(), chart.hierarchy().root);

    assert_eq!(chart.click(regression, false, 800.0), ClickOutcome::Zoom);
    chart.tick(1550.0);
    assert_eq!(chart.focus(), regression);
    assert_eq!(chart.center_target(), supervised);

    chart.click_center(false, 2000.0);
    chart.tick(2750.0);
    assert_eq!(chart.focus(), supervised);
}

#[test]
fn test_slow_motion_click() {
    let mut chart = SunburstChart::from_json(ATLAS, "").unwrap();
    let supervised = id(&chart, "Supervised");
    chart.click(supervised, true, 0.0);
    assert_eq!(
        chart.phase(),
        ZoomPhase::Animating { from: chart.hierarchy().root, to: supervised, start_time: 0.0, duration: 7500.0 }
    );
    assert!(chart.tick(750.0));
    assert!(!chart.tick(7500.0));
}

#[test]
fn test_detail_switch_keeps_focus() {
    let mut chart = SunburstChart::from_json(ATLAS, "").unwrap();
    let unsupervised = id(&chart, "Unsupervised");
    chart.click(unsupervised, false, 0.0);
    chart.tick(750.0);
    let geometry_before = chart.state().current.clone();

    let kmeans = id(&chart, "K-Means");
    assert_eq!(chart.click(kmeans, false, 1000.0), ClickOutcome::Detail);
    assert_eq!(chart.focus(), unsupervised);
    assert_eq!(chart.view_mode(), &ViewMode::Detail("K-Means".to_string()));

    let frame = chart.frame();
    let detail = frame.detail.as_ref().unwrap();
    assert_eq!(detail.renderer, "k-means");
    assert_eq!(detail.description, "Partitions points into k clusters around centroids");
    assert_eq!(detail.surface.delegated_renderer(), Some("k-means"));

    let svg = chart.svg();
    assert!(svg.contains("Partitions points into k clusters around centroids"));
    assert!(svg.contains("data-renderer=\"k-means\""));
    assert!(svg.contains("data-back"));

    assert!(chart.back());
    assert_eq!(chart.view_mode(), &ViewMode::Overview);
    assert_eq!(chart.focus(), unsupervised);
    assert_eq!(chart.state().current, geometry_before);
    assert_eq!(chart.phase(), ZoomPhase::Idle);
}

#[test]
fn test_unknown_leaf_uses_placeholder() {
    let mut chart = SunburstChart::from_json(ATLAS, "").unwrap();
    let unsupervised = id(&chart, "Unsupervised");
    chart.click(unsupervised, false, 0.0);
    chart.tick(750.0);

    let spectral = id(&chart, "Spectral Clustering");
    assert_eq!(chart.click(spectral, false, 1000.0), ClickOutcome::Detail);
    let frame = chart.frame();
    let detail = frame.detail.unwrap();
    assert_eq!(detail.renderer, "placeholder");
    assert_eq!(detail.description, ChartConfig::default().no_description);
}

#[test]
fn test_frame_json_shape() {
    let chart = SunburstChart::from_json(ATLAS, r#"{"width": 600}"#).unwrap();
    let json: serde_json::Value = serde_json::to_value(chart.frame()).unwrap();
    assert_eq!(json["view"]["mode"], "overview");
    assert_eq!(json["phase"]["state"], "idle");
    assert_eq!(json["center_radius"], 100.0);
    assert!(json.get("detail").is_none());
    assert_eq!(json["arcs"].as_array().unwrap().len(), chart.hierarchy().len() - 1);
}
