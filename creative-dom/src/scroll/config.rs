use serde::{Deserialize, Serialize};

use crate::error::ScrollError;

/// Element ids, fixed offsets and travel bounds of one scrollbar.
///
/// Deserializes from JSON with every field optional; missing numbers are 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Draggable thumb element.
    pub thumb_id: String,
    /// Fixed horizontal translation of the thumb.
    pub thumb_x: f64,
    pub thumb_min: f64,
    pub thumb_max: f64,

    /// Panel moved by the scrollbar.
    pub content_id: String,
    pub content_x: f64,
    pub content_min: f64,
    pub content_max: f64,

    /// Factor applied to each pointer delta before it moves the thumb.
    /// Only used when `content_deduction` is also positive.
    pub bar_deduction: f64,
    /// Flat amount taken off every content step while deduction is active.
    pub content_deduction: f64,

    /// Element receiving wheel and press events for the whole scroll area.
    pub container_id: String,
    /// Element whose text selection is disabled while the thumb is dragged.
    pub selection_root_id: Option<String>,
}

impl ScrollConfig {
    pub fn new(
        thumb_id: impl Into<String>,
        content_id: impl Into<String>,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            thumb_id: thumb_id.into(),
            content_id: content_id.into(),
            container_id: container_id.into(),
            ..Default::default()
        }
    }

    pub fn thumb_x(mut self, x: f64) -> Self {
        self.thumb_x = x;
        self
    }

    pub fn thumb_bounds(mut self, min: f64, max: f64) -> Self {
        self.thumb_min = min;
        self.thumb_max = max;
        self
    }

    pub fn content_x(mut self, x: f64) -> Self {
        self.content_x = x;
        self
    }

    pub fn content_bounds(mut self, min: f64, max: f64) -> Self {
        self.content_min = min;
        self.content_max = max;
        self
    }

    pub fn deduction(mut self, bar: f64, content: f64) -> Self {
        self.bar_deduction = bar;
        self.content_deduction = content;
        self
    }

    pub fn selection_root(mut self, id: impl Into<String>) -> Self {
        self.selection_root_id = Some(id.into());
        self
    }

    /// Deduction only applies when both tuning values are positive.
    pub fn deduction_active(&self) -> bool {
        self.bar_deduction > 0.0 && self.content_deduction > 0.0
    }

    /// Content pixels per thumb pixel.
    pub fn ratio(&self) -> f64 {
        (self.content_max - self.content_min) / (self.thumb_max - self.thumb_min)
    }

    /// Reject bounds that make `ratio` or clamping meaningless.
    pub fn validate(&self) -> Result<(), ScrollError> {
        if self.thumb_min.is_nan() || self.thumb_max.is_nan() || self.thumb_min >= self.thumb_max {
            return Err(ScrollError::InvalidBounds {
                axis: "thumb",
                min: self.thumb_min,
                max: self.thumb_max,
            });
        }
        if self.content_min.is_nan() || self.content_max.is_nan() || self.content_min > self.content_max
        {
            return Err(ScrollError::InvalidBounds {
                axis: "content",
                min: self.content_min,
                max: self.content_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let config = ScrollConfig::new("bar", "content", "box")
            .thumb_bounds(0.0, 100.0)
            .content_bounds(0.0, 400.0);
        assert_eq!(config.ratio(), 4.0);
    }

    #[test]
    fn test_equal_thumb_bounds_are_rejected() {
        let config = ScrollConfig::new("bar", "content", "box")
            .thumb_bounds(50.0, 50.0)
            .content_bounds(0.0, 400.0);
        assert!(matches!(
            config.validate(),
            Err(ScrollError::InvalidBounds { axis: "thumb", .. })
        ));
    }

    #[test]
    fn test_equal_content_bounds_are_allowed() {
        let config = ScrollConfig::new("bar", "content", "box")
            .thumb_bounds(0.0, 10.0)
            .content_bounds(30.0, 30.0);
        assert!(config.validate().is_ok());
        assert_eq!(config.ratio(), 0.0);
    }

    #[test]
    fn test_deduction_needs_both_values() {
        let config = ScrollConfig::default().deduction(0.5, 0.0);
        assert!(!config.deduction_active());
        assert!(config.deduction(0.5, 2.0).deduction_active());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ScrollConfig =
            serde_json::from_str(r#"{"thumb_id": "bar", "thumb_max": 80}"#).unwrap();
        assert_eq!(config.thumb_id, "bar");
        assert_eq!(config.thumb_max, 80.0);
        assert_eq!(config.content_max, 0.0);
        assert_eq!(config.selection_root_id, None);
    }
}
