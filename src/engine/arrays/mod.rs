//! Page Engine - Parallel Arrays
//!
//! All element state lives in these parallel arrays.
//! Each array index corresponds to one registered page element.
//!
//! The host writes structural data (`core`) and measured boxes (`geometry`);
//! the synchronizer writes runtime visual state (`interaction`). Deriveds
//! read from the arrays directly via `.get()`.
//!
//! All arrays use `TrackedSlotArray` for stable reactive cells with
//! fine-grained per-index tracking, so deriveds only re-run when the
//! specific indices they access have changed.

pub mod core;
pub mod geometry;
pub mod interaction;

use self::core as core_arrays;
use self::geometry as geometry_arrays;
use self::interaction as interaction_arrays;

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    geometry_arrays::ensure_capacity(index);
    interaction_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    geometry_arrays::clear_at_index(index);
    interaction_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when the last element is released.
pub fn reset_all_arrays() {
    core_arrays::reset();
    geometry_arrays::reset();
    interaction_arrays::reset();
}
