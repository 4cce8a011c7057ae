use serde::Deserialize;

use crate::zoom::Easing;

/// Chart-wide constants. Any field may be overridden from the host with a
/// partial JSON object; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Side of the square viewbox, centred on the origin.
    pub width: f64,
    pub zoom_duration_ms: f64,
    /// Used while the slow-motion modifier (alt) is held.
    pub slow_motion_duration_ms: f64,
    pub easing: Easing,
    /// Outer bound of the visible radial band [1, visible_rings].
    pub visible_rings: f64,
    pub label_area_threshold: f64,
    pub category_opacity: f64,
    pub leaf_opacity: f64,
    pub max_pad_angle: f64,
    pub pad_radius_factor: f64,
    pub label_font_px: f64,
    pub detail_width: f64,
    pub detail_height: f64,
    pub no_description: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 930.0,
            zoom_duration_ms: 750.0,
            slow_motion_duration_ms: 7500.0,
            easing: Easing::CubicInOut,
            visible_rings: 3.0,
            label_area_threshold: 0.03,
            category_opacity: 0.6,
            leaf_opacity: 0.4,
            max_pad_angle: 0.005,
            pad_radius_factor: 1.5,
            label_font_px: 10.0,
            detail_width: 800.0,
            detail_height: 500.0,
            no_description: "No description available.".to_string(),
        }
    }
}

impl ChartConfig {
    /// Empty input means all defaults. Anything else must be a JSON object;
    /// the array form serde would otherwise accept for structs is refused.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_json::Value = serde_json::from_str(input)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("chart config must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Pixels per radial unit.
    pub fn ring_radius(&self) -> f64 {
        self.width / 6.0
    }

    pub fn pad_radius(&self) -> f64 {
        self.ring_radius() * self.pad_radius_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.ring_radius(), 155.0);
        assert_eq!(cfg.zoom_duration_ms, 750.0);
        assert_eq!(cfg.slow_motion_duration_ms, 7500.0);
    }

    #[test]
    fn test_partial_override() {
        let cfg = ChartConfig::from_json(r#"{"zoom_duration_ms": 300, "easing": "linear"}"#).unwrap();
        assert_eq!(cfg.zoom_duration_ms, 300.0);
        assert_eq!(cfg.easing, Easing::Linear);
        assert_eq!(cfg.width, 930.0);
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(ChartConfig::from_json("  ").unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_bad_override_is_error() {
        assert!(ChartConfig::from_json(r#"{"width": "wide"}"#).is_err());
        assert!(ChartConfig::from_json(r#"{"width": 600"#).is_err());
    }

    #[test]
    fn test_non_object_is_error() {
        for input in ["[1]", "[]", "600", "null"] {
            let err = ChartConfig::from_json(input).unwrap_err();
            assert!(err.to_string().contains("JSON object"), "{input}: {err}");
        }
    }
}
