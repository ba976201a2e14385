//! Mount API - The synchronizer and its event entry points
//!
//! [`Synchronizer`] is the one component of this crate: it owns every piece
//! of state the page mutates (reveal set, counter flag, menu/loaded
//! signals, live ripples, pending timers) and exposes one method per host
//! event. Every entry point applies its side effects and returns the
//! updated [`VisualSnapshot`], so the reactive logic is fully exercisable
//! without a browser.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Instant;
//! use vitrine::{HostCapabilities, SyncConfig, Synchronizer};
//!
//! // Register the page (engine::registry), then:
//! let mut sync = Synchronizer::mount(
//!     SyncConfig::default(),
//!     HostCapabilities::default(),
//!     Instant::now(),
//! )?;
//!
//! // Feed events as the host sees them:
//! let snapshot = sync.on_scroll(240.0);
//! assert!(snapshot.header_elevated);
//!
//! // Pump cosmetic timers from the host's frame loop:
//! let snapshot = sync.tick(Instant::now());
//! for notice in sync.take_notices() {
//!     // show it
//! }
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use spark_signals::{Signal, effect, signal};
use tracing::{debug, info};

use crate::config::{ConfigError, HostCapabilities, SyncConfig};
use crate::engine::arrays::{core, geometry, interaction};
use crate::engine::registry;
use crate::state::reveal::{RevealDriver, RevealSet, select_driver};
use crate::state::ripple::{
    Notice, Ripple, announcement_notice, centered_ripple, portal_notice, ripple_at,
};
use crate::state::timers::{TimerAction, TimerQueue};
use crate::state::{counter, keyboard, reveal, scroll};
use crate::types::{ClassFlags, ElementRole, Key, Point};

use super::snapshot::{SnapshotSources, VisualSnapshot, compute_snapshot, create_snapshot_derived};
use super::viewport;

// =============================================================================
// Host Commands
// =============================================================================

/// A smooth-scroll request the host should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Destination scroll offset (section top minus header height).
    pub target: f32,
}

// =============================================================================
// Watch Handle
// =============================================================================

/// Handle for a snapshot subscription created by [`Synchronizer::watch`].
///
/// Dropping the handle (or calling [`unwatch`](WatchHandle::unwatch))
/// stops the underlying effect.
pub struct WatchHandle {
    stop: Option<Box<dyn FnOnce()>>,
}

impl WatchHandle {
    /// Stop receiving snapshot updates.
    pub fn unwatch(mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

// =============================================================================
// Synchronizer
// =============================================================================

/// The scroll-state synchronizer.
///
/// Owns all previously page-global mutable state explicitly:
/// the monotonic reveal set, the once-per-lifetime counter flag, the
/// transient ripple/notice queues, and the one-shot timer queue.
pub struct Synchronizer {
    config: SyncConfig,
    driver: Box<dyn RevealDriver>,
    revealed: RevealSet,

    current_section: Signal<Option<String>>,
    body_loaded: Signal<bool>,
    counters_started: Signal<bool>,
    counter_started_at: Option<Instant>,
    counters_done: bool,

    ripples: Signal<Vec<(u64, Ripple)>>,
    queued_notices: HashMap<u64, Notice>,
    ready_notices: Vec<Notice>,
    scroll_commands: Vec<ScrollCommand>,
    timers: TimerQueue,
    next_seq: u64,
}

impl Synchronizer {
    /// Mount the synchronizer over the registered page.
    ///
    /// This is the document-ready moment: it validates the configuration,
    /// prints the identity banner, puts cards into the tab order, runs the
    /// initial reveal pass, and schedules the page-loaded transition.
    pub fn mount(
        config: SyncConfig,
        capabilities: HostCapabilities,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        info!("GTTI Digital Learning Hub");
        info!("Government Technical Training Institute");
        info!("Empowering Technical Education Through Digital Innovation");

        keyboard::apply_card_tab_indices();

        let revealed = RevealSet::new();
        // Initial reveal check runs on both driver paths; elements already
        // in the viewport must not wait for the first scroll.
        let initial = reveal::poll(
            &config,
            &revealed,
            viewport::scroll_offset(),
            viewport::viewport_height(),
        );
        debug!(
            count = initial.len(),
            observer = capabilities.intersection_observer,
            "synchronizer mounted"
        );

        let mut timers = TimerQueue::new();
        timers.schedule(
            now + Duration::from_millis(config.loaded_delay_ms),
            TimerAction::MarkLoaded,
        );

        Ok(Self {
            driver: select_driver(&capabilities),
            revealed,
            config,
            current_section: signal(None),
            body_loaded: signal(false),
            counters_started: signal(false),
            counter_started_at: None,
            counters_done: false,
            ripples: signal(Vec::new()),
            queued_notices: HashMap::new(),
            ready_notices: Vec::new(),
            scroll_commands: Vec::new(),
            timers,
            next_seq: 0,
        })
    }

    // -------------------------------------------------------------------------
    // Snapshot access
    // -------------------------------------------------------------------------

    /// The signals the snapshot reads alongside the element arrays.
    pub fn sources(&self) -> SnapshotSources {
        SnapshotSources {
            current_section: self.current_section.clone(),
            body_loaded: self.body_loaded.clone(),
            ripples: self.ripples.clone(),
        }
    }

    /// Assemble the current visual snapshot.
    pub fn snapshot(&self) -> VisualSnapshot {
        compute_snapshot(&self.sources())
    }

    /// Subscribe to snapshot changes.
    ///
    /// The callback fires once immediately and again whenever any state
    /// the snapshot reads has changed.
    pub fn watch(&self, mut on_change: impl FnMut(VisualSnapshot) + 'static) -> WatchHandle {
        let snapshot_derived = create_snapshot_derived(self.sources());
        let stop = effect(move || {
            on_change(snapshot_derived.get());
        });
        WatchHandle {
            stop: Some(Box::new(stop)),
        }
    }

    // -------------------------------------------------------------------------
    // Scroll events
    // -------------------------------------------------------------------------

    /// Process a scroll event at the given offset.
    ///
    /// Recomputes all four scroll-driven indicators: header elevation,
    /// active section/link, reveal (polling driver only), and parallax.
    /// Unthrottled: runs in full on every event, like the page it models.
    pub fn on_scroll(&mut self, offset: f32) -> VisualSnapshot {
        let offset = offset.max(0.0);
        viewport::set_scroll_offset(offset);

        scroll::apply_header_elevation(&self.config, offset);

        let current = scroll::current_section(&self.config, offset);
        scroll::apply_active_link(current.as_deref());
        self.current_section.set(current);

        self.driver
            .on_scroll(&self.config, &self.revealed, offset, viewport::viewport_height());

        scroll::apply_parallax(&self.config, offset);

        self.snapshot()
    }

    // -------------------------------------------------------------------------
    // Lifecycle events
    // -------------------------------------------------------------------------

    /// Process the window-load event.
    ///
    /// Fires the hero entrance animations and arms the one-time counter
    /// ramp.
    pub fn on_load(&mut self, now: Instant) -> VisualSnapshot {
        if let Some(hero_text) = registry::first_with_role(ElementRole::HeroText) {
            interaction::add_class(hero_text, ClassFlags::FADE_IN_LEFT);
        }
        if let Some(hero_image) = registry::first_with_role(ElementRole::HeroImage) {
            interaction::add_class(hero_image, ClassFlags::FADE_IN_RIGHT);
        }

        self.arm_counters(now);
        self.snapshot()
    }

    /// Process a host visibility notification for one element. Observer
    /// path only; on the polling driver this reveals nothing.
    ///
    /// When the hero region reports visible, the one-time counter ramp is
    /// armed as well.
    pub fn on_element_visible(&mut self, id: &str, now: Instant) -> VisualSnapshot {
        if let Some(index) = registry::get_index(id) {
            self.driver.on_visible(&self.revealed, index);
            if core::get_hero(index) {
                self.arm_counters(now);
            }
        }
        self.snapshot()
    }

    /// Arm the counter ramp once per page lifetime.
    ///
    /// Guarded at scheduling time, so load and hero-visibility triggering
    /// in any order (or repeatedly) still produce exactly one ramp.
    fn arm_counters(&mut self, now: Instant) {
        if self.counters_started.get() {
            return;
        }
        self.counters_started.set(true);
        self.timers.schedule(
            now + Duration::from_millis(self.config.counter_start_delay_ms),
            TimerAction::StartCounters,
        );
        debug!(
            delay_ms = self.config.counter_start_delay_ms,
            "counter animation armed"
        );
    }

    // -------------------------------------------------------------------------
    // Navigation events
    // -------------------------------------------------------------------------

    /// Toggle the mobile navigation menu.
    pub fn on_menu_toggle(&mut self) -> VisualSnapshot {
        if let Some(menu) = registry::first_with_role(ElementRole::NavMenu) {
            if interaction::has_class(menu, ClassFlags::OPEN) {
                interaction::remove_class(menu, ClassFlags::OPEN);
            } else {
                interaction::add_class(menu, ClassFlags::OPEN);
            }
        }
        self.snapshot()
    }

    /// Process a nav-link click targeting `fragment`.
    ///
    /// Marks the clicked link active immediately (the next scroll event
    /// re-resolves it), closes the mobile menu, and queues a smooth-scroll
    /// command for the host.
    pub fn on_nav_click(&mut self, fragment: &str) -> VisualSnapshot {
        for index in registry::indices_with_role(ElementRole::NavLink) {
            interaction::remove_class(index, ClassFlags::ACTIVE);
            if core::get_anchor(index) == fragment {
                interaction::add_class(index, ClassFlags::ACTIVE);
            }
        }

        if let Some(menu) = registry::first_with_role(ElementRole::NavMenu) {
            interaction::remove_class(menu, ClassFlags::OPEN);
        }

        if let Some(target) = scroll::scroll_target(fragment) {
            self.scroll_commands.push(ScrollCommand { target });
        }

        self.snapshot()
    }

    /// Process a plain in-page anchor click. Bare `#` and unknown
    /// fragments scroll nowhere.
    pub fn on_anchor_click(&mut self, fragment: &str) -> VisualSnapshot {
        if let Some(target) = scroll::scroll_target(fragment) {
            self.scroll_commands.push(ScrollCommand { target });
        }
        self.snapshot()
    }

    // -------------------------------------------------------------------------
    // Activation events
    // -------------------------------------------------------------------------

    /// Process a click on a portal button: ripple at the click point, then
    /// a delayed placeholder notice. Navigation never happens.
    pub fn on_portal_click(&mut self, id: &str, click: Point, now: Instant) -> VisualSnapshot {
        if let Some(index) = registry::get_index(id) {
            if core::get_role(index) == ElementRole::PortalButton {
                self.activate_portal(index, Some(click), now);
            }
        }
        self.snapshot()
    }

    /// Process a key press on a card. Enter or Space on a portal card
    /// activates the portal button inside it, ripple centered.
    pub fn on_key(&mut self, id: &str, key: Key, now: Instant) -> VisualSnapshot {
        if keyboard::activates(key) {
            if let Some(card) = registry::get_index(id) {
                if core::get_role(card) == ElementRole::PortalCard {
                    if let Some(button) = keyboard::activation_target(card) {
                        self.activate_portal(button, None, now);
                    }
                }
            }
        }
        self.snapshot()
    }

    /// Process a click on an announcement link: surface the card's title
    /// in an immediate placeholder notice.
    pub fn on_announcement_click(&mut self, id: &str, _now: Instant) -> VisualSnapshot {
        if let Some(index) = registry::get_index(id) {
            if core::get_role(index) == ElementRole::AnnouncementLink {
                let card = core::get_parent_index(index).filter(|&card| {
                    core::get_role(card) == ElementRole::AnnouncementCard
                });
                if let Some(card) = card {
                    self.ready_notices
                        .push(announcement_notice(&core::get_label(card)));
                }
            }
        }
        self.snapshot()
    }

    fn activate_portal(&mut self, button: usize, click: Option<Point>, now: Instant) {
        let rect = geometry::get_rect(button);
        let ripple = match click {
            Some(point) => ripple_at(button, rect, point),
            None => centered_ripple(button, rect),
        };

        let ripple_seq = self.next_seq();
        let mut live = self.ripples.get();
        live.push((ripple_seq, ripple));
        self.ripples.set(live);
        self.timers.schedule(
            now + Duration::from_millis(self.config.ripple_lifetime_ms),
            TimerAction::ExpireRipple(ripple_seq),
        );

        let notice_seq = self.next_seq();
        self.queued_notices
            .insert(notice_seq, portal_notice(&core::get_label(button)));
        self.timers.schedule(
            now + Duration::from_millis(self.config.notice_delay_ms),
            TimerAction::DeliverNotice(notice_seq),
        );
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    // -------------------------------------------------------------------------
    // Timer pump
    // -------------------------------------------------------------------------

    /// Pump fire-and-forget timers and the counter ramp.
    ///
    /// The host calls this from its frame loop (or a test calls it with
    /// synthetic instants). Everything time-driven happens here: the
    /// page-loaded flag, counter frames, ripple expiry, notice delivery.
    pub fn tick(&mut self, now: Instant) -> VisualSnapshot {
        for action in self.timers.fire_due(now) {
            match action {
                TimerAction::MarkLoaded => {
                    self.body_loaded.set(true);
                }
                TimerAction::StartCounters => {
                    self.counter_started_at = Some(now);
                    debug!("counter animation started");
                }
                TimerAction::ExpireRipple(seq) => {
                    let mut live = self.ripples.get();
                    live.retain(|(ripple_seq, _)| *ripple_seq != seq);
                    self.ripples.set(live);
                }
                TimerAction::DeliverNotice(seq) => {
                    if let Some(notice) = self.queued_notices.remove(&seq) {
                        self.ready_notices.push(notice);
                    }
                }
            }
        }

        if let Some(started_at) = self.counter_started_at {
            if !self.counters_done {
                self.counters_done = counter::advance_displays(&self.config, started_at, now);
            }
        }

        self.snapshot()
    }

    // -------------------------------------------------------------------------
    // Host drains
    // -------------------------------------------------------------------------

    /// Take the notices that are ready to show.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.ready_notices)
    }

    /// Take the pending smooth-scroll commands.
    pub fn take_scroll_commands(&mut self) -> Vec<ScrollCommand> {
        std::mem::take(&mut self.scroll_commands)
    }

    /// Has the one-time counter ramp been armed or run?
    pub fn counters_started(&self) -> bool {
        self.counters_started.get()
    }

    /// How many elements have been revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
