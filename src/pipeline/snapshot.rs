//! Snapshot Derived - The page's visual state as one value
//!
//! Assembles everything the host must render into a single
//! [`VisualSnapshot`]: class toggles read from the interaction arrays,
//! transient ripples and section tracking read from the synchronizer's own
//! signals. Pure reads only; every event entry point returns the snapshot
//! after applying its side effects, and `create_snapshot_derived` wraps the
//! same computation in a `Derived` so hosts can react to changes instead of
//! polling.

use spark_signals::{Derived, Signal, derived};

use crate::engine::arrays::{core, interaction};
use crate::engine::registry;
use crate::state::ripple::Ripple;
use crate::types::{ClassFlags, ElementRole};

// =============================================================================
// Snapshot Types
// =============================================================================

/// Parallax transform for one floating card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardParallax {
    pub id: String,
    pub translate_y: f32,
}

/// Displayed value of one statistic counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReading {
    pub id: String,
    pub display: String,
}

/// Everything the host needs to paint the page's interactive state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualSnapshot {
    /// Header carries the `scrolled` class.
    pub header_elevated: bool,
    /// Anchor id of the section currently scrolled into view.
    pub current_section: Option<String>,
    /// Anchor fragment of the nav link marked active, if any.
    pub active_link: Option<String>,
    /// Mobile navigation menu is expanded.
    pub menu_open: bool,
    /// Page-wide loaded state (post-mount transition hook).
    pub body_loaded: bool,
    /// Hero text entrance animation has fired.
    pub hero_text_entered: bool,
    /// Hero image entrance animation has fired.
    pub hero_image_entered: bool,
    /// IDs of elements carrying the `revealed` class, in document order.
    pub revealed: Vec<String>,
    /// Floating-card transforms, in document order.
    pub parallax: Vec<CardParallax>,
    /// Counter displays, in document order.
    pub counters: Vec<CounterReading>,
    /// Live ripples, oldest first.
    pub ripples: Vec<Ripple>,
}

// =============================================================================
// Sources
// =============================================================================

/// The synchronizer-owned signals the snapshot reads alongside the arrays.
///
/// Obtained from [`Synchronizer::sources`](crate::pipeline::Synchronizer::sources);
/// opaque outside the pipeline.
#[derive(Clone)]
pub struct SnapshotSources {
    pub(crate) current_section: Signal<Option<String>>,
    pub(crate) body_loaded: Signal<bool>,
    pub(crate) ripples: Signal<Vec<(u64, Ripple)>>,
}

// =============================================================================
// Computation
// =============================================================================

fn first_has_class(role: ElementRole, class: ClassFlags) -> bool {
    registry::first_with_role(role)
        .map(|index| interaction::has_class(index, class))
        .unwrap_or(false)
}

/// Assemble the current visual snapshot. Pure read.
pub fn compute_snapshot(sources: &SnapshotSources) -> VisualSnapshot {
    let active_link = registry::indices_with_role(ElementRole::NavLink)
        .into_iter()
        .find(|&index| interaction::has_class(index, ClassFlags::ACTIVE))
        .map(core::get_anchor);

    let revealed = registry::registered_indices()
        .into_iter()
        .filter(|&index| interaction::has_class(index, ClassFlags::REVEALED))
        .filter_map(registry::get_id)
        .collect();

    let parallax = registry::indices_with_role(ElementRole::FloatingCard)
        .into_iter()
        .filter_map(|index| {
            registry::get_id(index).map(|id| CardParallax {
                id,
                translate_y: interaction::get_transform_y(index),
            })
        })
        .collect();

    let counters = registry::indices_with_role(ElementRole::StatCounter)
        .into_iter()
        .filter_map(|index| {
            registry::get_id(index).map(|id| CounterReading {
                id,
                display: interaction::get_display(index),
            })
        })
        .collect();

    VisualSnapshot {
        header_elevated: first_has_class(ElementRole::Header, ClassFlags::SCROLLED),
        current_section: sources.current_section.get(),
        active_link,
        menu_open: first_has_class(ElementRole::NavMenu, ClassFlags::OPEN),
        body_loaded: sources.body_loaded.get(),
        hero_text_entered: first_has_class(ElementRole::HeroText, ClassFlags::FADE_IN_LEFT),
        hero_image_entered: first_has_class(ElementRole::HeroImage, ClassFlags::FADE_IN_RIGHT),
        revealed,
        parallax,
        counters,
        ripples: sources
            .ripples
            .get()
            .into_iter()
            .map(|(_, ripple)| ripple)
            .collect(),
    }
}

/// Wrap the snapshot computation in a `Derived`.
///
/// The derived re-runs whenever any array cell, registry entry, or
/// synchronizer signal it reads has changed.
pub fn create_snapshot_derived(
    sources: SnapshotSources,
) -> Derived<VisualSnapshot> {
    derived(move || compute_snapshot(&sources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{register_element, reset_registry};
    use spark_signals::signal;

    fn test_sources() -> SnapshotSources {
        SnapshotSources {
            current_section: signal(None),
            body_loaded: signal(false),
            ripples: signal(Vec::new()),
        }
    }

    #[test]
    fn test_empty_page_snapshot_is_default() {
        reset_registry();
        let snapshot = compute_snapshot(&test_sources());
        assert_eq!(snapshot, VisualSnapshot::default());
    }

    #[test]
    fn test_snapshot_reads_applied_state() {
        reset_registry();
        let header = register_element(Some("header"), ElementRole::Header);
        interaction::add_class(header, ClassFlags::SCROLLED);

        let link = register_element(Some("nav-about"), ElementRole::NavLink);
        core::set_anchor(link, "about");
        interaction::add_class(link, ClassFlags::ACTIVE);

        let sources = test_sources();
        sources.current_section.set(Some("about".to_string()));

        let snapshot = compute_snapshot(&sources);
        assert!(snapshot.header_elevated);
        assert_eq!(snapshot.active_link.as_deref(), Some("about"));
        assert_eq!(snapshot.current_section.as_deref(), Some("about"));
    }

    #[test]
    fn test_snapshot_collects_in_document_order() {
        reset_registry();
        let a = register_element(Some("card-a"), ElementRole::FloatingCard);
        let b = register_element(Some("card-b"), ElementRole::FloatingCard);
        interaction::set_transform_y(a, -10.0);
        interaction::set_transform_y(b, -15.0);

        let snapshot = compute_snapshot(&test_sources());
        assert_eq!(snapshot.parallax.len(), 2);
        assert_eq!(snapshot.parallax[0].id, "card-a");
        assert_eq!(snapshot.parallax[0].translate_y, -10.0);
        assert_eq!(snapshot.parallax[1].id, "card-b");
    }

    #[test]
    fn test_derived_recomputes_on_change() {
        reset_registry();
        let sources = test_sources();
        let snapshot_derived = create_snapshot_derived(sources.clone());
        assert!(!snapshot_derived.get().body_loaded);

        sources.body_loaded.set(true);
        assert!(snapshot_derived.get().body_loaded);
    }
}
