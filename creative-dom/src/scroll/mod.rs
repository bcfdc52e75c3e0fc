//! Drag and wheel driven custom scrollbar.
//!
//! A thumb element and a content panel are moved together with CSS
//! `translate` transforms. Thumb travel maps to content travel through a
//! linear ratio, optionally bent by the deduction tuning values.

mod config;
mod controller;
mod state;

pub use config::ScrollConfig;
pub use controller::ScrollController;
pub use state::{ScrollPhase, ScrollState};

/// Format a pixel count for a CSS value: integral values without a fraction
/// and no negative zero. Matches browser output for pixel-range numbers; very
/// small or very large magnitudes print in positional rather than exponent
/// form.
pub(crate) fn css_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{}", value + 0.0)
}

pub(crate) fn translate(x: f64, y: f64) -> String {
    format!("translate({}px, {}px)", css_number(x), css_number(y))
}
