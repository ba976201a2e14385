//! Ripple State - Click feedback and placeholder notices
//!
//! Portal buttons answer a click with a transient ripple at the click
//! point, then a placeholder notice naming the destination; announcement
//! links surface their notice immediately. Neither performs any real
//! navigation.
//!
//! Ripples and notices are plain data: the synchronizer owns their
//! lifetimes, the host renders them.

use crate::types::{Point, Rect};

// =============================================================================
// Ripples
// =============================================================================

/// A transient circular ripple inside an element.
///
/// Coordinates are relative to the element's top-left corner, sized so the
/// circle covers the whole element from the click point.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    /// Index of the element the ripple plays inside.
    pub element: usize,
    /// Left offset of the ripple circle within the element.
    pub x: f32,
    /// Top offset of the ripple circle within the element.
    pub y: f32,
    /// Diameter of the ripple circle.
    pub size: f32,
}

/// Build the ripple for a click at `click` inside `rect`.
///
/// The circle's diameter is the element's larger side, centered on the
/// click point.
pub fn ripple_at(element: usize, rect: Rect, click: Point) -> Ripple {
    let size = rect.width.max(rect.height);
    Ripple {
        element,
        x: click.x - rect.x - size / 2.0,
        y: click.y - rect.y - size / 2.0,
        size,
    }
}

/// Build a ripple centered in `rect`, for activations without coordinates
/// (keyboard).
pub fn centered_ripple(element: usize, rect: Rect) -> Ripple {
    ripple_at(element, rect, rect.center())
}

// =============================================================================
// Notices
// =============================================================================

/// A placeholder notice standing in for real navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Notice shown after a portal button activation.
pub fn portal_notice(label: &str) -> Notice {
    Notice {
        message: format!(
            "Redirecting to {}...\n\nIn production, this would navigate to the actual portal login page.",
            label
        ),
    }
}

/// Notice shown when an announcement link is followed.
pub fn announcement_notice(title: &str) -> Notice {
    Notice {
        message: format!(
            "Opening: {}\n\nIn production, this would open the full announcement details.",
            title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_covers_element_from_click() {
        // Button at (100, 500), 200x60: diameter is the wider side
        let rect = Rect::new(100.0, 500.0, 200.0, 60.0);
        let ripple = ripple_at(7, rect, Point::new(150.0, 520.0));

        assert_eq!(ripple.element, 7);
        assert_eq!(ripple.size, 200.0);
        // Click at element-relative (50, 20), circle centered there
        assert_eq!(ripple.x, -50.0);
        assert_eq!(ripple.y, -80.0);
    }

    #[test]
    fn test_ripple_tall_element_uses_height() {
        let rect = Rect::new(0.0, 0.0, 60.0, 200.0);
        let ripple = ripple_at(0, rect, Point::new(30.0, 100.0));
        assert_eq!(ripple.size, 200.0);
    }

    #[test]
    fn test_centered_ripple_matches_center_click() {
        let rect = Rect::new(100.0, 500.0, 200.0, 60.0);
        let centered = centered_ripple(3, rect);
        let clicked = ripple_at(3, rect, Point::new(200.0, 530.0));
        assert_eq!(centered, clicked);
    }

    #[test]
    fn test_portal_notice_names_destination() {
        let notice = portal_notice("Student Portal");
        assert!(notice.message.starts_with("Redirecting to Student Portal..."));
    }

    #[test]
    fn test_announcement_notice_names_title() {
        let notice = announcement_notice("New Admission Cycle");
        assert!(notice.message.starts_with("Opening: New Admission Cycle"));
    }
}
