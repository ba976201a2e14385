//! Core types for vitrine.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive pipeline and define what the host
//! (a browser shim, a test harness, a server-side renderer) understands.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

// =============================================================================
// Class Flags
// =============================================================================

bitflags! {
    /// CSS-class state toggles, one set per page element.
    ///
    /// Each flag mirrors a class name the page stylesheet keys off.
    /// Using a bitset for exact comparison and cheap copies - an element's
    /// entire visual state fits in two bytes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClassFlags: u16 {
        /// Header has passed the elevation threshold (`scrolled`).
        const SCROLLED      = 1 << 0;
        /// Navigation link marks the current section (`active`).
        const ACTIVE        = 1 << 1;
        /// Element has entered the viewport (`revealed`). Monotonic.
        const REVEALED      = 1 << 2;
        /// Hero text entrance animation (`fade-in-left`).
        const FADE_IN_LEFT  = 1 << 3;
        /// Hero image entrance animation (`fade-in-right`).
        const FADE_IN_RIGHT = 1 << 4;
        /// Mobile navigation menu is expanded (`active` on the menu).
        const OPEN          = 1 << 5;
    }
}

// =============================================================================
// Element Roles
// =============================================================================

/// Structural role of a registered page element.
///
/// Roles replace DOM class-name selectors: where the page would query
/// `.nav-link` or `.floating-card`, the engine iterates elements by role.
/// One primary role per element; orthogonal traits (revealable, hero) are
/// boolean attributes in the core arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElementRole {
    /// No structural role assigned.
    #[default]
    Generic,
    /// The fixed page header.
    Header,
    /// The collapsible navigation menu container.
    NavMenu,
    /// The mobile menu toggle button.
    MobileToggle,
    /// A navigation link carrying an `href` fragment.
    NavLink,
    /// A page section with an anchor id.
    Section,
    /// Hero headline text (entrance animation on load).
    HeroText,
    /// Hero illustration (entrance animation on load).
    HeroImage,
    /// Decorative floating card moved by the parallax effect.
    FloatingCard,
    /// Statistic element carrying a numeric target.
    StatCounter,
    /// Portal login button.
    PortalButton,
    /// Portal card wrapping a portal button (keyboard-activatable).
    PortalCard,
    /// Feature card (focusable, no activation behavior).
    FeatureCard,
    /// Announcement card carrying a title.
    AnnouncementCard,
    /// "Read more" link inside an announcement card.
    AnnouncementLink,
}

// =============================================================================
// Geometry
// =============================================================================

/// A point in page coordinates (CSS pixels, origin at the document top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in page coordinates.
///
/// Geometry is an input: the host measures the real page (or a test fixture
/// fabricates one) and writes boxes into the geometry arrays. The engine
/// never lays anything out itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the box, used for coordinate-free (keyboard) activation.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// =============================================================================
// Keys
// =============================================================================

/// A key press forwarded by the host.
///
/// Only activation keys matter to the engine; everything else is carried
/// as `Char` and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Char(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_flags_are_disjoint() {
        let all = [
            ClassFlags::SCROLLED,
            ClassFlags::ACTIVE,
            ClassFlags::REVEALED,
            ClassFlags::FADE_IN_LEFT,
            ClassFlags::FADE_IN_RIGHT,
            ClassFlags::OPEN,
        ];
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!((*a & *b).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_class_flags_toggle() {
        let mut flags = ClassFlags::empty();
        flags |= ClassFlags::SCROLLED;
        assert!(flags.contains(ClassFlags::SCROLLED));
        flags &= !ClassFlags::SCROLLED;
        assert!(flags.is_empty());
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_default_role_is_generic() {
        assert_eq!(ElementRole::default(), ElementRole::Generic);
    }
}
