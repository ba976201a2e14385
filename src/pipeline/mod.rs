//! Reactive Pipeline
//!
//! Connects the element registry to the host-facing snapshot.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Host events → Synchronizer → element arrays / signals → snapshot derived → host
//! ```
//!
//! ## Data Flow
//!
//! 1. **viewport** - Scroll offset and viewport size signals (host inputs)
//! 2. **mount** - The synchronizer: one method per host event, side effects
//!    into the arrays and its own signals
//! 3. **snapshot** - Pure derived assembling the [`VisualSnapshot`]
//!
//! ## Key Design Principles
//!
//! - **Pure Derived**: the snapshot computation only reads
//! - **Side Effects in Events**: only synchronizer entry points mutate state
//! - **Reactive Dependencies**: array and signal reads auto-track, so
//!   `watch` subscribers hear about exactly the changes that matter

pub mod mount;
pub mod snapshot;
pub mod viewport;

// Re-exports
pub use mount::{ScrollCommand, Synchronizer, WatchHandle};
pub use snapshot::{
    CardParallax, CounterReading, SnapshotSources, VisualSnapshot, compute_snapshot,
    create_snapshot_derived,
};
pub use viewport::{
    scroll_offset, set_scroll_offset, set_viewport_size, viewport_height, viewport_width,
};
