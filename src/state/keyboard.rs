//! Keyboard State - Focusability and card activation
//!
//! The minimal keyboard layer the page carries: portal and feature cards
//! join the tab order, and Enter or Space on a portal card activates the
//! portal button inside it, exactly as a click would.

use crate::engine::arrays::{core, interaction};
use crate::engine::registry;
use crate::types::{ElementRole, Key};

/// Does this key activate a focused card?
pub fn activates(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Space)
}

/// Put portal and feature cards into the tab order.
pub fn apply_card_tab_indices() {
    for index in registry::indices_with_role(ElementRole::PortalCard) {
        interaction::set_tab_index(index, 0);
    }
    for index in registry::indices_with_role(ElementRole::FeatureCard) {
        interaction::set_tab_index(index, 0);
    }
}

/// The portal button nested inside a card, if any.
pub fn activation_target(card: usize) -> Option<usize> {
    registry::registered_indices().into_iter().find(|&index| {
        core::get_role(index) == ElementRole::PortalButton
            && core::get_parent_index(index) == Some(card)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::interaction;
    use crate::engine::registry::{
        pop_parent_context, push_parent_context, register_element, reset_registry,
    };

    #[test]
    fn test_activation_keys() {
        assert!(activates(Key::Enter));
        assert!(activates(Key::Space));
        assert!(!activates(Key::Char('a')));
    }

    #[test]
    fn test_cards_join_tab_order() {
        reset_registry();
        let portal = register_element(Some("portal-card"), ElementRole::PortalCard);
        let feature = register_element(Some("feature-card"), ElementRole::FeatureCard);
        let section = register_element(Some("home"), ElementRole::Section);

        apply_card_tab_indices();

        assert_eq!(interaction::get_tab_index(portal), 0);
        assert_eq!(interaction::get_tab_index(feature), 0);
        assert_eq!(interaction::get_tab_index(section), -1);
    }

    #[test]
    fn test_activation_target_finds_nested_button() {
        reset_registry();
        let card = register_element(Some("card"), ElementRole::PortalCard);
        push_parent_context(card);
        let button = register_element(Some("btn"), ElementRole::PortalButton);
        pop_parent_context();
        let other_card = register_element(Some("other"), ElementRole::PortalCard);

        assert_eq!(activation_target(card), Some(button));
        assert_eq!(activation_target(other_card), None);
    }
}
