//! # Navigator
//!
//! Owned back-stack with the single-top navigation policy.
//!
//! The back-stack is an explicit stack of entries seeded with the start
//! destination. All mutation goes through [`Navigator`]; subscribers observe
//! the current route through a watch channel and re-derive their displayed
//! state from it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::watch;

use crate::destinations::Destination;
use crate::route::Route;

/// One entry of the back-stack.
///
/// Created on navigate, destroyed on pop; lifetime fully owned by the
/// [`Navigator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackStackEntry {
    route: Route,
}

impl BackStackEntry {
    fn new(route: Route) -> Self {
        Self { route }
    }

    /// The resolved route for this entry
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Argument value by name, for the entry that produced it
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.route.argument(name)
    }
}

/// Per-destination UI state carried across tab switches (scroll/selection).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenMemory {
    /// Selected index in the destination's primary list
    pub selected_index: usize,
}

impl ScreenMemory {
    /// Memory with a selection
    pub fn with_selection(selected_index: usize) -> Self {
        Self { selected_index }
    }
}

/// Back-stack navigation controller.
///
/// Repeated tab selections collapse into a stack of at most two entries (the
/// start destination plus one top entry), so tab taps never grow the stack.
///
/// Clones share the subscription point: a cloned-and-advanced navigator
/// keeps notifying subscribers obtained from the original, which lets
/// functional state updates (clone, mutate, swap) preserve the reactive
/// stream.
#[derive(Clone)]
pub struct Navigator {
    /// Back-stack, bottom first; index 0 is always the start destination
    stack: Vec<BackStackEntry>,
    /// Saved per-destination state, restorable on re-entry
    memory: HashMap<Destination, ScreenMemory>,
    /// Publishes the current route to subscribers
    current_tx: Arc<watch::Sender<Route>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("stack", &self.stack)
            .field("memory", &self.memory)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Create a navigator showing the start destination
    pub fn new() -> Self {
        let (current_tx, _) = watch::channel(Route::START);
        Self {
            stack: vec![BackStackEntry::new(Route::START)],
            memory: HashMap::new(),
            current_tx: Arc::new(current_tx),
        }
    }

    /// The current route (the top entry's route)
    pub fn current(&self) -> &Route {
        // The stack is never empty: index 0 is the start destination and
        // pop_back refuses to remove it.
        &self.stack[self.stack.len() - 1].route
    }

    /// Back-stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The back-stack entries, bottom first
    pub fn entries(&self) -> &[BackStackEntry] {
        &self.stack
    }

    /// Navigate with the single-top policy: pop to the start destination,
    /// then push `route` as the single top-most entry. Navigating to the
    /// route already on top is a no-op, so repeated tab taps do not stack
    /// duplicate entries. Saved state for the entered destination stays
    /// restorable via [`Navigator::restore_memory`].
    pub fn navigate_single_top(&mut self, route: Route) {
        if *self.current() == route {
            tracing::debug!(route = %route, "single-top: already current, ignoring");
            return;
        }

        tracing::debug!(from = %self.current(), to = %route, "navigate");
        self.stack.truncate(1);
        if route != Route::START {
            self.stack.push(BackStackEntry::new(route));
        }
        self.publish();
    }

    /// Pop the top entry. The start destination is never popped; returns
    /// whether anything changed.
    pub fn pop_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        tracing::debug!(to = %self.current(), "pop back");
        self.publish();
        true
    }

    /// Save per-destination UI state for later restoration
    pub fn save_memory(&mut self, destination: Destination, memory: ScreenMemory) {
        self.memory.insert(destination, memory);
    }

    /// Previously saved state for a destination being entered, if any
    pub fn restore_memory(&self, destination: Destination) -> Option<ScreenMemory> {
        self.memory.get(&destination).copied()
    }

    /// Subscribe to current-route changes
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current_tx.subscribe()
    }

    fn publish(&self) {
        self.current_tx.send_replace(self.current().clone());
    }
}
