//! Page Engine - Core Arrays
//!
//! Structural element state:
//! - role: What the element is (header, nav link, section, ...)
//! - parent: Enclosing element (button inside a card, link inside a card)
//! - anchor: Fragment identifier (nav-link target / section id)
//! - label: Visible text (portal button label, announcement title)
//! - counterTarget: Numeric target for statistic elements
//! - hero/revealable: Orthogonal traits any element can carry
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::TrackedSlotArray;

use crate::types::ElementRole;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Primary structural role.
    static ROLE: TrackedSlotArray<ElementRole> = TrackedSlotArray::new(Some(ElementRole::Generic));

    /// Parent element index (-1 = top level).
    static PARENT: TrackedSlotArray<i32> = TrackedSlotArray::new(Some(-1));

    /// Anchor fragment: a nav link's target, or a section's own id.
    static ANCHOR: TrackedSlotArray<String> = TrackedSlotArray::new(Some(String::new()));

    /// Visible text associated with the element.
    static LABEL: TrackedSlotArray<String> = TrackedSlotArray::new(Some(String::new()));

    /// Target value for statistic counters.
    static COUNTER_TARGET: TrackedSlotArray<u64> = TrackedSlotArray::new(Some(0));

    /// Element is part of the hero region (counter trigger).
    static HERO: TrackedSlotArray<bool> = TrackedSlotArray::new(Some(false));

    /// Element participates in reveal-on-scroll.
    static REVEALABLE: TrackedSlotArray<bool> = TrackedSlotArray::new(Some(false));
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    ROLE.with(|arr| {
        let _ = arr.peek(index);
    });
    PARENT.with(|arr| {
        let _ = arr.peek(index);
    });
    ANCHOR.with(|arr| {
        let _ = arr.peek(index);
    });
    LABEL.with(|arr| {
        let _ = arr.peek(index);
    });
    COUNTER_TARGET.with(|arr| {
        let _ = arr.peek(index);
    });
    HERO.with(|arr| {
        let _ = arr.peek(index);
    });
    REVEALABLE.with(|arr| {
        let _ = arr.peek(index);
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    ROLE.with(|arr| arr.clear(index));
    PARENT.with(|arr| arr.clear(index));
    ANCHOR.with(|arr| arr.clear(index));
    LABEL.with(|arr| arr.clear(index));
    COUNTER_TARGET.with(|arr| arr.clear(index));
    HERO.with(|arr| arr.clear(index));
    REVEALABLE.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    ROLE.with(|arr| arr.clear_all());
    PARENT.with(|arr| arr.clear_all());
    ANCHOR.with(|arr| arr.clear_all());
    LABEL.with(|arr| arr.clear_all());
    COUNTER_TARGET.with(|arr| arr.clear_all());
    HERO.with(|arr| arr.clear_all());
    REVEALABLE.with(|arr| arr.clear_all());
}

// =============================================================================
// Role
// =============================================================================

/// Get role at index (reactive).
pub fn get_role(index: usize) -> ElementRole {
    ROLE.with(|arr| arr.get(index))
}

/// Set role at index.
pub fn set_role(index: usize, role: ElementRole) {
    ROLE.with(|arr| arr.set_value(index, role));
}

// =============================================================================
// Parent
// =============================================================================

/// Get parent element index (reactive).
pub fn get_parent_index(index: usize) -> Option<usize> {
    let parent = PARENT.with(|arr| arr.get(index));
    if parent < 0 { None } else { Some(parent as usize) }
}

/// Set parent element index.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    let value = match parent {
        Some(parent) => parent as i32,
        None => -1,
    };
    PARENT.with(|arr| arr.set_value(index, value));
}

// =============================================================================
// Anchor
// =============================================================================

/// Get anchor fragment at index (reactive).
pub fn get_anchor(index: usize) -> String {
    ANCHOR.with(|arr| arr.get(index))
}

/// Set anchor fragment at index.
pub fn set_anchor(index: usize, anchor: &str) {
    ANCHOR.with(|arr| arr.set_value(index, anchor.to_string()));
}

// =============================================================================
// Label
// =============================================================================

/// Get label text at index (reactive).
pub fn get_label(index: usize) -> String {
    LABEL.with(|arr| arr.get(index))
}

/// Set label text at index.
pub fn set_label(index: usize, label: &str) {
    LABEL.with(|arr| arr.set_value(index, label.to_string()));
}

// =============================================================================
// Counter Target
// =============================================================================

/// Get counter target at index (reactive).
pub fn get_counter_target(index: usize) -> u64 {
    COUNTER_TARGET.with(|arr| arr.get(index))
}

/// Set counter target at index.
pub fn set_counter_target(index: usize, target: u64) {
    COUNTER_TARGET.with(|arr| arr.set_value(index, target));
}

// =============================================================================
// Hero / Revealable Traits
// =============================================================================

/// Is this element part of the hero region (reactive).
pub fn get_hero(index: usize) -> bool {
    HERO.with(|arr| arr.get(index))
}

/// Mark the element as part of the hero region.
pub fn set_hero(index: usize, hero: bool) {
    HERO.with(|arr| arr.set_value(index, hero));
}

/// Does this element participate in reveal-on-scroll (reactive).
pub fn get_revealable(index: usize) -> bool {
    REVEALABLE.with(|arr| arr.get(index))
}

/// Mark the element as revealable.
pub fn set_revealable(index: usize, revealable: bool) {
    REVEALABLE.with(|arr| arr.set_value(index, revealable));
}
