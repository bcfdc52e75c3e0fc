use log::trace;

use super::ScrollConfig;

/// Lifecycle of a scrollbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    #[default]
    Uninitialized,
    Idle,
    /// A press was received and the move listener is attached.
    Dragging,
}

/// Live thumb and content positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub ratio: f64,
    /// Thumb translation on the Y axis.
    pub thumb_y: f64,
    /// Content translation on the Y axis.
    pub content_y: f64,
    /// Coordinate the last accepted movement ended at. `None` until a press
    /// or wheel event supplies one.
    pub last_y: Option<f64>,
    /// Coordinate of the event being processed.
    pub direction_y: f64,
    pub phase: ScrollPhase,
}

impl ScrollState {
    /// State right after setup: both elements at their minimum.
    pub fn initialized(config: &ScrollConfig) -> Self {
        Self {
            ratio: config.ratio(),
            thumb_y: config.thumb_min,
            content_y: config.content_min,
            last_y: None,
            direction_y: 0.0,
            phase: ScrollPhase::Idle,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.phase != ScrollPhase::Uninitialized
    }

    /// Wheel input only contributes its sign: a one pixel step up for a
    /// negative delta, down otherwise.
    pub fn wheel(&mut self, config: &ScrollConfig, delta_y: f64) -> bool {
        if delta_y < 0.0 {
            self.last_y = Some(1.0);
            self.direction_y = 0.0;
        } else {
            self.last_y = Some(0.0);
            self.direction_y = 1.0;
        }
        self.advance(config)
    }

    /// Pointer or touch move to `y`. Events without a usable coordinate
    /// are ignored.
    pub fn pointer(&mut self, config: &ScrollConfig, y: Option<f64>) -> bool {
        let Some(y) = y else {
            return false;
        };
        self.direction_y = y;
        self.advance(config)
    }

    /// Move from `last_y` toward `direction_y`. Returns whether positions
    /// changed and need rendering.
    fn advance(&mut self, config: &ScrollConfig) -> bool {
        let Some(last) = self.last_y else {
            return false;
        };
        let target = self.direction_y;

        let moved = if last < target && config.thumb_max >= self.thumb_y {
            self.step_down(config, target - last);
            true
        } else if last > target && config.thumb_min <= self.thumb_y {
            self.step_up(config, last - target);
            true
        } else {
            false
        };

        if moved {
            self.last_y = Some(target);
        }
        moved
    }

    fn step_down(&mut self, config: &ScrollConfig, distance: f64) {
        let (bar, content) = if config.deduction_active() {
            let bar = distance * config.bar_deduction;
            (bar, (-(bar * self.ratio)).trunc() - config.content_deduction)
        } else {
            (distance, (-(distance * self.ratio)).trunc())
        };

        self.thumb_y += bar;
        self.content_y += content;
        trace!(
            "[scroll] down: bar sum {}, content sum {}, content total {}",
            bar, content, self.content_y
        );

        if self.thumb_y > config.thumb_max {
            self.thumb_y = config.thumb_max;
            self.content_y = -config.content_max;
        }
    }

    fn step_up(&mut self, config: &ScrollConfig, distance: f64) {
        let (bar, content) = if config.deduction_active() {
            let bar = distance * config.bar_deduction;
            (bar, (bar * self.ratio).trunc() + config.content_deduction)
        } else {
            (distance, (distance * self.ratio).trunc())
        };

        self.thumb_y -= bar;
        self.content_y += content;
        trace!(
            "[scroll] up: bar sum {}, content sum {}, content total {}",
            bar, content, self.content_y
        );

        if self.thumb_y < config.thumb_min {
            self.thumb_y = config.thumb_min;
            self.content_y = config.content_min;
        }
    }
}
