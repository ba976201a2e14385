//! Page Engine - Geometry Arrays
//!
//! Element bounding boxes in page coordinates, as measured by the host.
//! The engine only ever reads these; writing them is the host's half of the
//! DOM contract (geometry queries).
//!
//! Uses `TrackedSlotArray` so deriveds re-run when the host re-measures.

use spark_signals::TrackedSlotArray;

use crate::types::Rect;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Distance from the document top to the element's top edge.
    static TOP: TrackedSlotArray<f32> = TrackedSlotArray::new(Some(0.0));

    /// Distance from the document left to the element's left edge.
    static LEFT: TrackedSlotArray<f32> = TrackedSlotArray::new(Some(0.0));

    /// Element width.
    static WIDTH: TrackedSlotArray<f32> = TrackedSlotArray::new(Some(0.0));

    /// Element height.
    static HEIGHT: TrackedSlotArray<f32> = TrackedSlotArray::new(Some(0.0));
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    TOP.with(|arr| {
        let _ = arr.peek(index);
    });
    LEFT.with(|arr| {
        let _ = arr.peek(index);
    });
    WIDTH.with(|arr| {
        let _ = arr.peek(index);
    });
    HEIGHT.with(|arr| {
        let _ = arr.peek(index);
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    TOP.with(|arr| arr.clear(index));
    LEFT.with(|arr| arr.clear(index));
    WIDTH.with(|arr| arr.clear(index));
    HEIGHT.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    TOP.with(|arr| arr.clear_all());
    LEFT.with(|arr| arr.clear_all());
    WIDTH.with(|arr| arr.clear_all());
    HEIGHT.with(|arr| arr.clear_all());
}

// =============================================================================
// Accessors
// =============================================================================

/// Get top edge at index (reactive).
pub fn get_top(index: usize) -> f32 {
    TOP.with(|arr| arr.get(index))
}

/// Get height at index (reactive).
pub fn get_height(index: usize) -> f32 {
    HEIGHT.with(|arr| arr.get(index))
}

/// Get the full bounding box at index (reactive).
pub fn get_rect(index: usize) -> Rect {
    Rect::new(
        LEFT.with(|arr| arr.get(index)),
        TOP.with(|arr| arr.get(index)),
        WIDTH.with(|arr| arr.get(index)),
        HEIGHT.with(|arr| arr.get(index)),
    )
}

/// Set the full bounding box at index.
pub fn set_rect(index: usize, rect: Rect) {
    LEFT.with(|arr| arr.set_value(index, rect.x));
    TOP.with(|arr| arr.set_value(index, rect.y));
    WIDTH.with(|arr| arr.set_value(index, rect.width));
    HEIGHT.with(|arr| arr.set_value(index, rect.height));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_round_trip() {
        reset();
        let rect = Rect::new(4.0, 120.0, 300.0, 80.0);
        set_rect(1, rect);
        assert_eq!(get_rect(1), rect);
        assert_eq!(get_top(1), 120.0);
        assert_eq!(get_height(1), 80.0);
    }

    #[test]
    fn test_unmeasured_element_is_zeroed() {
        reset();
        assert_eq!(get_rect(7), Rect::default());
    }
}
