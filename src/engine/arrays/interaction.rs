//! Page Engine - Interaction Arrays
//!
//! Runtime visual state the synchronizer writes:
//! - classes: CSS-class toggles per element
//! - transformY: Inline vertical transform (parallax)
//! - tabIndex: Keyboard focus order
//! - display: Rendered text for statistic counters
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::TrackedSlotArray;

use crate::types::ClassFlags;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// CSS-class state toggles.
    static CLASSES: TrackedSlotArray<ClassFlags> = TrackedSlotArray::new(Some(ClassFlags::empty()));

    /// Inline `translateY` in CSS pixels (parallax output).
    static TRANSFORM_Y: TrackedSlotArray<f32> = TrackedSlotArray::new(Some(0.0));

    /// Tab index for keyboard navigation (-1 = not focusable).
    static TAB_INDEX: TrackedSlotArray<i32> = TrackedSlotArray::new(Some(-1));

    /// Displayed text for statistic counters.
    static DISPLAY: TrackedSlotArray<String> = TrackedSlotArray::new(Some(String::from("0")));
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    CLASSES.with(|arr| {
        let _ = arr.peek(index);
    });
    TRANSFORM_Y.with(|arr| {
        let _ = arr.peek(index);
    });
    TAB_INDEX.with(|arr| {
        let _ = arr.peek(index);
    });
    DISPLAY.with(|arr| {
        let _ = arr.peek(index);
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    CLASSES.with(|arr| arr.clear(index));
    TRANSFORM_Y.with(|arr| arr.clear(index));
    TAB_INDEX.with(|arr| arr.clear(index));
    DISPLAY.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    CLASSES.with(|arr| arr.clear_all());
    TRANSFORM_Y.with(|arr| arr.clear_all());
    TAB_INDEX.with(|arr| arr.clear_all());
    DISPLAY.with(|arr| arr.clear_all());
}

// =============================================================================
// Classes
// =============================================================================

/// Get class flags at index (reactive).
pub fn get_classes(index: usize) -> ClassFlags {
    CLASSES.with(|arr| arr.get(index))
}

/// Replace class flags at index.
pub fn set_classes(index: usize, classes: ClassFlags) {
    CLASSES.with(|arr| arr.set_value(index, classes));
}

/// Add a class flag at index. Idempotent.
pub fn add_class(index: usize, class: ClassFlags) {
    let classes = get_classes(index);
    if !classes.contains(class) {
        set_classes(index, classes | class);
    }
}

/// Remove a class flag at index. Idempotent.
pub fn remove_class(index: usize, class: ClassFlags) {
    let classes = get_classes(index);
    if classes.intersects(class) {
        set_classes(index, classes & !class);
    }
}

/// Check a class flag at index (reactive).
pub fn has_class(index: usize, class: ClassFlags) -> bool {
    get_classes(index).contains(class)
}

// =============================================================================
// Transform
// =============================================================================

/// Get vertical transform at index (reactive).
pub fn get_transform_y(index: usize) -> f32 {
    TRANSFORM_Y.with(|arr| arr.get(index))
}

/// Set vertical transform at index.
pub fn set_transform_y(index: usize, transform_y: f32) {
    TRANSFORM_Y.with(|arr| arr.set_value(index, transform_y));
}

// =============================================================================
// Tab Index
// =============================================================================

/// Get tab index at index (reactive).
pub fn get_tab_index(index: usize) -> i32 {
    TAB_INDEX.with(|arr| arr.get(index))
}

/// Set tab index at index.
pub fn set_tab_index(index: usize, tab_index: i32) {
    TAB_INDEX.with(|arr| arr.set_value(index, tab_index));
}

// =============================================================================
// Counter Display
// =============================================================================

/// Get displayed counter text at index (reactive).
pub fn get_display(index: usize) -> String {
    DISPLAY.with(|arr| arr.get(index))
}

/// Set displayed counter text at index.
pub fn set_display(index: usize, display: String) {
    DISPLAY.with(|arr| arr.set_value(index, display));
}
