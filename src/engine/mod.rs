//! Page Engine - Element registry and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context
//! - Arrays: Parallel SlotArrays for element state
//!
//! # Architecture
//!
//! Page elements are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Header   (role=Header,  top=0,    height=70, classes=SCROLLED)
//! Index 1: NavLink  (role=NavLink, anchor="home",       classes=ACTIVE)
//! Index 2: Section  (role=Section, anchor="home", top=0, height=900)
//! ```
//!
//! This mirrors how the page itself is flat markup queried by role, enables
//! cache-friendly iteration, and gives every cell stable fine-grained
//! reactivity.

pub(crate) mod registry;
pub mod arrays;

pub use registry::*;
