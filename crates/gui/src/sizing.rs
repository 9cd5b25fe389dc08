//! Board sizing. Driven by window resize events only; it never sees the
//! session.

use crate::config::BoardConfig;
use crate::styles::{PADDING, PANEL_WIDTH};
use iced::Size;

/// Largest board edge that fits next to the side panel, clamped to the
/// configured range and rounded down to whole squares.
pub fn board_width(window: Size, config: &BoardConfig) -> f32 {
    let available_w = window.width - PANEL_WIDTH - 3.0 * PADDING;
    let available_h = window.height - 2.0 * PADDING;
    let fit = available_w.min(available_h);

    let max = config.max_width.max(config.min_width);
    let width = fit.clamp(config.min_width, max);
    (width / 8.0).floor() * 8.0
}
