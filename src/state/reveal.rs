//! Reveal State - Viewport-entry tracking
//!
//! Marks revealable elements once their top edge enters the viewport.
//! Reveal state is monotonic: an element that has been revealed stays
//! revealed no matter where the page scrolls afterwards.
//!
//! One capability - "notify when an element enters the viewport" - with two
//! interchangeable drivers selected at mount:
//! - [`IntersectionWatcher`]: the host observes elements itself and reports
//!   entries; scroll events carry no reveal work.
//! - [`ScrollPoller`]: every scroll event re-checks all revealable elements
//!   against the viewport.
//!
//! Both drivers reach the same terminal state: everything that has entered
//! the viewport is revealed.

use spark_signals::ReactiveSet;
use tracing::debug;

use crate::config::{HostCapabilities, SyncConfig};
use crate::engine::arrays::{core, geometry, interaction};
use crate::engine::registry;
use crate::types::ClassFlags;

// =============================================================================
// Reveal Set
// =============================================================================

/// The set of revealed element indices, owned by the synchronizer.
///
/// Backed by a `ReactiveSet` so the snapshot derived re-runs when elements
/// reveal. The set only ever grows; there is no unmark operation.
pub struct RevealSet {
    revealed: ReactiveSet<usize>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self {
            revealed: ReactiveSet::new(),
        }
    }

    /// Mark an element revealed. Returns true the first time only.
    pub fn mark(&self, index: usize) -> bool {
        if self.revealed.contains(&index) {
            return false;
        }
        self.revealed.insert(index);
        true
    }

    /// Check whether an element has been revealed (reactive).
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Revealed indices in document order (reactive).
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.revealed.iter().into_iter().collect();
        indices.sort_unstable();
        indices
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

impl Default for RevealSet {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Reveal Checks
// =============================================================================

/// Has this element's top edge entered the viewport?
///
/// `element_top` is in page coordinates; the check compares its
/// viewport-relative position against the bottom edge minus the margin.
pub fn in_reveal_zone(config: &SyncConfig, element_top: f32, offset: f32, viewport_height: f32) -> bool {
    element_top - offset < viewport_height - config.reveal_margin
}

/// Check every revealable element against the viewport and mark entries.
///
/// Idempotent: already-revealed elements are skipped. Returns the indices
/// that were newly revealed by this pass.
pub fn poll(
    config: &SyncConfig,
    revealed: &RevealSet,
    offset: f32,
    viewport_height: f32,
) -> Vec<usize> {
    let mut newly_revealed = Vec::new();

    for index in registry::registered_indices() {
        if !core::get_revealable(index) || revealed.is_revealed(index) {
            continue;
        }
        if in_reveal_zone(config, geometry::get_top(index), offset, viewport_height) {
            if revealed.mark(index) {
                interaction::add_class(index, ClassFlags::REVEALED);
                newly_revealed.push(index);
            }
        }
    }

    if !newly_revealed.is_empty() {
        debug!(count = newly_revealed.len(), "revealed elements");
    }
    newly_revealed
}

/// Reveal one element reported visible by the host. Observer path.
///
/// The host has already decided the element intersects the viewport, so no
/// geometry check happens here. Unregistered or non-revealable indices
/// no-op.
pub fn reveal_now(revealed: &RevealSet, index: usize) -> bool {
    if !registry::is_registered(index) || !core::get_revealable(index) {
        return false;
    }
    if revealed.mark(index) {
        interaction::add_class(index, ClassFlags::REVEALED);
        return true;
    }
    false
}

// =============================================================================
// Drivers
// =============================================================================

/// One way of learning that elements entered the viewport.
///
/// Exactly one driver is active per synchronizer. Either the host pushes
/// visibility notifications (watcher) or the engine re-derives visibility
/// from scroll offsets (poller); the unused entry point of each driver is
/// a no-op so event routing never needs to branch.
pub trait RevealDriver {
    /// Reveal pass driven by a scroll event.
    fn on_scroll(
        &self,
        config: &SyncConfig,
        revealed: &RevealSet,
        offset: f32,
        viewport_height: f32,
    ) -> Vec<usize>;

    /// Reveal pass driven by a host visibility notification.
    fn on_visible(&self, revealed: &RevealSet, index: usize) -> Vec<usize>;
}

/// Fallback driver: re-check all revealables on every scroll event.
pub struct ScrollPoller;

impl RevealDriver for ScrollPoller {
    fn on_scroll(
        &self,
        config: &SyncConfig,
        revealed: &RevealSet,
        offset: f32,
        viewport_height: f32,
    ) -> Vec<usize> {
        poll(config, revealed, offset, viewport_height)
    }

    fn on_visible(&self, _revealed: &RevealSet, _index: usize) -> Vec<usize> {
        Vec::new()
    }
}

/// Observer driver: the host reports viewport entries itself.
pub struct IntersectionWatcher;

impl RevealDriver for IntersectionWatcher {
    fn on_scroll(
        &self,
        _config: &SyncConfig,
        _revealed: &RevealSet,
        _offset: f32,
        _viewport_height: f32,
    ) -> Vec<usize> {
        Vec::new()
    }

    fn on_visible(&self, revealed: &RevealSet, index: usize) -> Vec<usize> {
        if reveal_now(revealed, index) {
            vec![index]
        } else {
            Vec::new()
        }
    }
}

/// Pick the reveal driver for the host's reported capabilities.
pub fn select_driver(capabilities: &HostCapabilities) -> Box<dyn RevealDriver> {
    if capabilities.intersection_observer {
        Box::new(IntersectionWatcher)
    } else {
        Box::new(ScrollPoller)
    }
}
