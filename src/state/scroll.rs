//! Scroll State - Header elevation, section tracking, parallax
//!
//! The scroll-driven half of the synchronizer. Every operation here is a
//! direct function of the current scroll offset and the registered page:
//! - Header elevation past a fixed threshold (no hysteresis)
//! - Current-section resolution and nav-link highlighting
//! - Parallax offsets for decorative floating cards
//! - Smooth-scroll target computation for anchor navigation
//!
//! All lookups degrade silently when the page lacks the element in
//! question; a page without a header simply has header height 0.

use tracing::trace;

use crate::config::SyncConfig;
use crate::engine::arrays::{core, geometry, interaction};
use crate::engine::registry;
use crate::types::{ClassFlags, ElementRole};

// =============================================================================
// Header Elevation
// =============================================================================

/// Is the header elevated at this offset?
///
/// Exclusive boundary: exactly at the threshold the header stays flat.
pub fn is_elevated(config: &SyncConfig, offset: f32) -> bool {
    offset > config.elevation_threshold
}

/// Height of the page header, 0 if the page has none.
pub fn header_height() -> f32 {
    registry::first_with_role(ElementRole::Header)
        .map(geometry::get_height)
        .unwrap_or(0.0)
}

/// Toggle the header's `scrolled` state for the given offset.
pub fn apply_header_elevation(config: &SyncConfig, offset: f32) {
    let Some(header) = registry::first_with_role(ElementRole::Header) else {
        return;
    };
    if is_elevated(config, offset) {
        interaction::add_class(header, ClassFlags::SCROLLED);
    } else {
        interaction::remove_class(header, ClassFlags::SCROLLED);
    }
}

// =============================================================================
// Active Section
// =============================================================================

/// Resolve which section is current at the given offset.
///
/// Walks sections in document order; the current section is the LAST one
/// whose top, adjusted for header height and the lookahead margin, is at
/// or above the offset. Later sections override earlier ones, so
/// non-overlapping top-to-bottom sections resolve unambiguously.
pub fn current_section(config: &SyncConfig, offset: f32) -> Option<String> {
    let header_height = header_height();
    let mut current = None;

    for index in registry::indices_with_role(ElementRole::Section) {
        let section_top = geometry::get_top(index);
        if offset >= section_top - header_height - config.section_lookahead {
            current = Some(core::get_anchor(index));
        }
    }

    current
}

/// Highlight the nav link matching the current section.
///
/// Clears the active state from every link, then sets it on the one link
/// whose anchor equals the current section id. No match leaves no link
/// active.
pub fn apply_active_link(current: Option<&str>) {
    for index in registry::indices_with_role(ElementRole::NavLink) {
        interaction::remove_class(index, ClassFlags::ACTIVE);
        if let Some(current) = current {
            if core::get_anchor(index) == current {
                interaction::add_class(index, ClassFlags::ACTIVE);
            }
        }
    }
}

// =============================================================================
// Parallax
// =============================================================================

/// Parallax offset for the floating card at `position` (0-based).
///
/// Pure: `-(offset * (base + position * step))`. With the default config,
/// offset 200 puts card 0 at -20 and card 2 at -40.
pub fn parallax_offset(config: &SyncConfig, offset: f32, position: usize) -> f32 {
    -(offset * (config.parallax_base + position as f32 * config.parallax_step))
}

/// Apply parallax transforms to every floating card.
pub fn apply_parallax(config: &SyncConfig, offset: f32) {
    for (position, index) in registry::indices_with_role(ElementRole::FloatingCard)
        .into_iter()
        .enumerate()
    {
        interaction::set_transform_y(index, parallax_offset(config, offset, position));
    }
}

// =============================================================================
// Anchor Navigation
// =============================================================================

/// Scroll offset that puts the named section just below the header.
///
/// Returns None for an empty fragment or an unknown section, in which
/// case no scrolling should happen.
pub fn scroll_target(fragment: &str) -> Option<f32> {
    if fragment.is_empty() {
        return None;
    }
    let section = registry::indices_with_role(ElementRole::Section)
        .into_iter()
        .find(|&index| core::get_anchor(index) == fragment)?;
    let target = geometry::get_top(section) - header_height();
    trace!(fragment, target, "resolved scroll target");
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{register_element, reset_registry};
    use crate::types::Rect;

    fn setup() -> SyncConfig {
        reset_registry();
        SyncConfig::default()
    }

    fn add_header(height: f32) -> usize {
        let header = register_element(Some("header"), ElementRole::Header);
        geometry::set_rect(header, Rect::new(0.0, 0.0, 1280.0, height));
        header
    }

    fn add_section(id: &str, top: f32, height: f32) -> usize {
        let section = register_element(Some(id), ElementRole::Section);
        core::set_anchor(section, id);
        geometry::set_rect(section, Rect::new(0.0, top, 1280.0, height));
        section
    }

    fn add_nav_link(id: &str, fragment: &str) -> usize {
        let link = register_element(Some(id), ElementRole::NavLink);
        core::set_anchor(link, fragment);
        link
    }

    #[test]
    fn test_elevation_boundary_is_exclusive() {
        let config = setup();
        assert!(!is_elevated(&config, 0.0));
        assert!(!is_elevated(&config, 50.0));
        assert!(is_elevated(&config, 50.5));
        assert!(is_elevated(&config, 51.0));
    }

    #[test]
    fn test_apply_header_elevation_toggles_both_ways() {
        let config = setup();
        let header = add_header(70.0);

        apply_header_elevation(&config, 120.0);
        assert!(interaction::has_class(header, ClassFlags::SCROLLED));

        // No hysteresis: dropping back below clears it
        apply_header_elevation(&config, 10.0);
        assert!(!interaction::has_class(header, ClassFlags::SCROLLED));
    }

    #[test]
    fn test_apply_header_elevation_without_header_is_noop() {
        let config = setup();
        apply_header_elevation(&config, 500.0); // Must not panic
    }

    #[test]
    fn test_current_section_last_match_wins() {
        let config = setup();
        add_header(70.0);
        add_section("home", 0.0, 900.0);
        add_section("about", 900.0, 700.0);
        add_section("contact", 1600.0, 500.0);

        // Top of page: only "home" qualifies
        assert_eq!(current_section(&config, 0.0).as_deref(), Some("home"));

        // "about" becomes current once offset reaches 900 - 70 - 100 = 730
        assert_eq!(current_section(&config, 729.0).as_deref(), Some("home"));
        assert_eq!(current_section(&config, 730.0).as_deref(), Some("about"));

        // Deep scroll: the last section wins
        assert_eq!(current_section(&config, 5000.0).as_deref(), Some("contact"));
    }

    #[test]
    fn test_current_section_none_without_sections() {
        let config = setup();
        add_header(70.0);
        assert_eq!(current_section(&config, 300.0), None);
    }

    #[test]
    fn test_apply_active_link_exactly_one_active() {
        let config = setup();
        add_header(70.0);
        add_section("home", 0.0, 900.0);
        add_section("about", 900.0, 700.0);
        let home_link = add_nav_link("nav-home", "home");
        let about_link = add_nav_link("nav-about", "about");

        let current = current_section(&config, 0.0);
        apply_active_link(current.as_deref());
        assert!(interaction::has_class(home_link, ClassFlags::ACTIVE));
        assert!(!interaction::has_class(about_link, ClassFlags::ACTIVE));

        let current = current_section(&config, 1000.0);
        apply_active_link(current.as_deref());
        assert!(!interaction::has_class(home_link, ClassFlags::ACTIVE));
        assert!(interaction::has_class(about_link, ClassFlags::ACTIVE));
    }

    #[test]
    fn test_apply_active_link_no_match_leaves_none_active() {
        setup();
        let link = add_nav_link("nav-portal", "portals");
        apply_active_link(Some("unlisted"));
        assert!(!interaction::has_class(link, ClassFlags::ACTIVE));

        apply_active_link(None);
        assert!(!interaction::has_class(link, ClassFlags::ACTIVE));
    }

    #[test]
    fn test_parallax_offset_exact_values() {
        let config = setup();
        assert_eq!(parallax_offset(&config, 200.0, 0), -20.0);
        assert_eq!(parallax_offset(&config, 200.0, 1), -30.0);
        assert_eq!(parallax_offset(&config, 200.0, 2), -40.0);
        assert_eq!(parallax_offset(&config, 0.0, 5), -0.0);
    }

    #[test]
    fn test_apply_parallax_orders_by_document_position() {
        let config = setup();
        let first = register_element(Some("card-a"), ElementRole::FloatingCard);
        let second = register_element(Some("card-b"), ElementRole::FloatingCard);

        apply_parallax(&config, 100.0);
        assert_eq!(interaction::get_transform_y(first), -10.0);
        assert_eq!(interaction::get_transform_y(second), -15.0);
    }

    #[test]
    fn test_scroll_target_accounts_for_header() {
        setup();
        add_header(70.0);
        add_section("about", 900.0, 700.0);

        assert_eq!(scroll_target("about"), Some(830.0));
        assert_eq!(scroll_target("missing"), None);
        assert_eq!(scroll_target(""), None);
    }
}
