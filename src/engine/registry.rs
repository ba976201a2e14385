//! Element Registry - Index allocation for parallel arrays.
//!
//! Manages the lifecycle of element indices:
//! - ID ↔ Index bidirectional mapping
//! - Free index pool for O(1) reuse
//! - ReactiveSet for registered indices (deriveds react to add/remove)
//! - Parent context stack for nested registration (button inside a card)
//!
//! Registration order is document order: hosts register elements top to
//! bottom, and every "iterate sections in document order" operation walks
//! indices ascending.

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::ReactiveSet;

use super::arrays;
use crate::types::ElementRole;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map element ID to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to element ID.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Set of currently registered indices (for iteration).
    /// Using ReactiveSet so deriveds that iterate over this set
    /// automatically react when elements are added or removed.
    static REGISTERED_INDICES: ReactiveSet<usize> = ReactiveSet::new();

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };

    /// Stack of parent indices for nested registration.
    static PARENT_STACK: RefCell<Vec<usize>> = RefCell::new(Vec::new());
}

// =============================================================================
// Parent Context Stack
// =============================================================================

/// Get current parent index (None at top level).
pub fn get_current_parent_index() -> Option<usize> {
    PARENT_STACK.with(|stack| stack.borrow().last().copied())
}

/// Push a parent index onto the stack.
pub fn push_parent_context(index: usize) {
    PARENT_STACK.with(|stack| {
        stack.borrow_mut().push(index);
    })
}

/// Pop a parent index from the stack.
pub fn pop_parent_context() {
    PARENT_STACK.with(|stack| {
        stack.borrow_mut().pop();
    })
}

// =============================================================================
// Registration
// =============================================================================

/// Register a page element and return its index.
///
/// # Arguments
/// * `id` - Optional element ID. If not provided, one is generated.
/// * `role` - The element's structural role.
///
/// Registering an ID that already exists returns the existing index
/// (the role is left untouched).
pub fn register_element(id: Option<&str>, role: ElementRole) -> usize {
    // Generate ID if not provided
    let element_id = match id {
        Some(id) => id.to_string(),
        None => ID_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let id = format!("e{}", *counter);
            *counter += 1;
            id
        }),
    };

    // Check if already registered
    let existing = ID_TO_INDEX.with(|map| map.borrow().get(&element_id).copied());
    if let Some(index) = existing {
        return index;
    }

    // Reuse free index or allocate new
    let index = FREE_INDICES.with(|free| {
        let mut free = free.borrow_mut();
        if let Some(index) = free.pop() {
            index
        } else {
            NEXT_INDEX.with(|next| {
                let mut next = next.borrow_mut();
                let index = *next;
                *next += 1;
                index
            })
        }
    });

    // Register mappings
    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(element_id.clone(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, element_id);
    });
    REGISTERED_INDICES.with(|set| {
        set.insert(index);
    });

    // Ensure arrays have capacity for this index
    arrays::ensure_all_capacity(index);

    arrays::core::set_role(index, role);
    arrays::core::set_parent_index(index, get_current_parent_index());

    index
}

/// Release an element back to the pool.
///
/// Also recursively releases all nested elements.
pub fn release_element(index: usize) {
    let id = INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned());
    let Some(id) = id else { return };

    // Find and release nested elements first.
    // Collected up front to avoid modifying while iterating.
    let children: Vec<usize> = REGISTERED_INDICES.with(|set| {
        set.iter()
            .into_iter()
            .filter(|&child| arrays::core::get_parent_index(child) == Some(index))
            .collect()
    });
    for child in children {
        release_element(child);
    }

    // Clean up mappings
    ID_TO_INDEX.with(|map| {
        map.borrow_mut().remove(&id);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });
    REGISTERED_INDICES.with(|set| {
        set.remove(&index);
    });

    // Clear all array values at this index
    arrays::clear_all_at_index(index);

    // Return to pool for reuse
    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });

    // When the last element is gone, reset everything to free memory
    let is_empty = REGISTERED_INDICES.with(|set| set.is_empty());
    if is_empty {
        arrays::reset_all_arrays();
        FREE_INDICES.with(|free| {
            free.borrow_mut().clear();
        });
        NEXT_INDEX.with(|next| {
            *next.borrow_mut() = 0;
        });
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Look up an element's index by ID.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Look up an element's ID by index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Check whether an index is currently registered (reactive).
pub fn is_registered(index: usize) -> bool {
    REGISTERED_INDICES.with(|set| set.contains(&index))
}

/// All registered indices in document order (reactive).
pub fn registered_indices() -> Vec<usize> {
    let mut indices: Vec<usize> =
        REGISTERED_INDICES.with(|set| set.iter().into_iter().collect());
    indices.sort_unstable();
    indices
}

/// Registered indices with the given role, in document order (reactive).
pub fn indices_with_role(role: ElementRole) -> Vec<usize> {
    registered_indices()
        .into_iter()
        .filter(|&index| arrays::core::get_role(index) == role)
        .collect()
}

/// First registered element with the given role (reactive).
pub fn first_with_role(role: ElementRole) -> Option<usize> {
    indices_with_role(role).into_iter().next()
}

/// Number of registered elements.
pub fn element_count() -> usize {
    REGISTERED_INDICES.with(|set| set.len())
}

// =============================================================================
// Reset
// =============================================================================

/// Reset the whole registry (for tests).
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    REGISTERED_INDICES.with(|set| set.clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    PARENT_STACK.with(|stack| stack.borrow_mut().clear());
    arrays::reset_all_arrays();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_register_assigns_sequential_indices() {
        setup();
        let a = register_element(Some("header"), ElementRole::Header);
        let b = register_element(Some("nav"), ElementRole::NavMenu);
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(element_count(), 2);
    }

    #[test]
    fn test_register_same_id_returns_existing() {
        setup();
        let a = register_element(Some("home"), ElementRole::Section);
        let b = register_element(Some("home"), ElementRole::Section);
        assert_eq!(a, b);
        assert_eq!(element_count(), 1);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        setup();
        let a = register_element(None, ElementRole::Generic);
        let b = register_element(None, ElementRole::Generic);
        assert_ne!(get_id(a), get_id(b));
    }

    #[test]
    fn test_lookup_by_id_and_index() {
        setup();
        let index = register_element(Some("about"), ElementRole::Section);
        assert_eq!(get_index("about"), Some(index));
        assert_eq!(get_id(index), Some("about".to_string()));
        assert_eq!(get_index("missing"), None);
    }

    #[test]
    fn test_indices_with_role_in_document_order() {
        setup();
        register_element(Some("header"), ElementRole::Header);
        let s1 = register_element(Some("home"), ElementRole::Section);
        register_element(Some("card"), ElementRole::FloatingCard);
        let s2 = register_element(Some("about"), ElementRole::Section);

        assert_eq!(indices_with_role(ElementRole::Section), vec![s1, s2]);
        assert_eq!(first_with_role(ElementRole::NavLink), None);
    }

    #[test]
    fn test_parent_context_nesting() {
        setup();
        let card = register_element(Some("portal-card"), ElementRole::PortalCard);
        push_parent_context(card);
        let button = register_element(Some("portal-btn"), ElementRole::PortalButton);
        pop_parent_context();

        assert_eq!(arrays::core::get_parent_index(button), Some(card));
        assert_eq!(arrays::core::get_parent_index(card), None);
    }

    #[test]
    fn test_release_recurses_into_children() {
        setup();
        let card = register_element(Some("card"), ElementRole::PortalCard);
        push_parent_context(card);
        register_element(Some("btn"), ElementRole::PortalButton);
        pop_parent_context();

        release_element(card);
        assert_eq!(element_count(), 0);
        assert_eq!(get_index("btn"), None);
    }

    #[test]
    fn test_release_returns_index_to_pool() {
        setup();
        let a = register_element(Some("a"), ElementRole::Generic);
        register_element(Some("b"), ElementRole::Generic);
        release_element(a);
        let c = register_element(Some("c"), ElementRole::Generic);
        assert_eq!(c, a); // Reused
    }
}
