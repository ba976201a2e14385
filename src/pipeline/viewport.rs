//! Viewport Signals - Scroll offset and viewport size
//!
//! The two browser inputs every scroll operation reads, held as signals so
//! the snapshot derived re-runs when either changes. The host writes them
//! from its own resize/scroll plumbing; tests set them directly.

use spark_signals::{Signal, signal};

thread_local! {
    /// Current vertical scroll offset in CSS pixels.
    static SCROLL_OFFSET: Signal<f32> = signal(0.0);

    /// Viewport width in CSS pixels.
    static VIEWPORT_WIDTH: Signal<f32> = signal(0.0);

    /// Viewport height in CSS pixels.
    static VIEWPORT_HEIGHT: Signal<f32> = signal(0.0);
}

/// Current scroll offset (reactive).
pub fn scroll_offset() -> f32 {
    SCROLL_OFFSET.with(|s| s.get())
}

/// Set the scroll offset. Clamped to non-negative.
pub fn set_scroll_offset(offset: f32) {
    SCROLL_OFFSET.with(|s| s.set(offset.max(0.0)));
}

/// Current viewport width (reactive).
pub fn viewport_width() -> f32 {
    VIEWPORT_WIDTH.with(|s| s.get())
}

/// Current viewport height (reactive).
pub fn viewport_height() -> f32 {
    VIEWPORT_HEIGHT.with(|s| s.get())
}

/// Set the viewport dimensions.
pub fn set_viewport_size(width: f32, height: f32) {
    VIEWPORT_WIDTH.with(|s| s.set(width.max(0.0)));
    VIEWPORT_HEIGHT.with(|s| s.set(height.max(0.0)));
}

/// The scroll offset signal itself, for deriveds.
pub fn scroll_offset_signal() -> Signal<f32> {
    SCROLL_OFFSET.with(|s| s.clone())
}

/// The viewport height signal itself, for deriveds.
pub fn viewport_height_signal() -> Signal<f32> {
    VIEWPORT_HEIGHT.with(|s| s.clone())
}

/// Reset viewport state (for tests).
pub fn reset_viewport_state() {
    SCROLL_OFFSET.with(|s| s.set(0.0));
    VIEWPORT_WIDTH.with(|s| s.set(0.0));
    VIEWPORT_HEIGHT.with(|s| s.set(0.0));
}
