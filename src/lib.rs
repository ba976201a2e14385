//! # vitrine
//!
//! Headless reactive page-state engine for static institutional sites.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! vitrine models a page's interactive state without a browser. Elements
//! are indices into columnar reactive arrays rather than DOM nodes; the
//! host registers the page once, then feeds discrete events (scroll,
//! click, key press, load, element-visible) into the [`Synchronizer`] and
//! reads back a [`VisualSnapshot`] of every class toggle, transform,
//! ripple, and pending notice.
//!
//! The pipeline is derived-based throughout:
//!
//! ```text
//! Element registry → state operations → snapshot derived → host
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (ClassFlags, ElementRole, Rect, Key)
//! - [`config`] - Tuning constants and host capabilities
//! - [`engine`] - Element registry, parallel arrays
//! - [`state`] - Scroll sync, reveal, counters, ripples, keyboard, timers
//! - [`pipeline`] - Viewport signals, snapshot derived, the synchronizer

pub mod config;
pub mod engine;
pub mod pipeline;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{ConfigError, HostCapabilities, SyncConfig};

pub use engine::{
    element_count, first_with_role, get_id, get_index, indices_with_role, is_registered,
    pop_parent_context, push_parent_context, register_element, registered_indices,
    release_element, reset_registry,
};

pub use state::{
    counter::{CounterRamp, format_grouped},
    reveal::{IntersectionWatcher, RevealDriver, RevealSet, ScrollPoller, select_driver},
    ripple::{Notice, Ripple},
};

pub use pipeline::{
    ScrollCommand, Synchronizer, VisualSnapshot, WatchHandle, compute_snapshot,
    create_snapshot_derived, scroll_offset, set_scroll_offset, set_viewport_size,
};
