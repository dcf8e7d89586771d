//! Application state for the web layer.

use std::sync::Arc;

use crate::clock::Clock;
use crate::domain::CarrierRegistry;
use crate::preferences::PreferenceStore;

/// Shared application state.
///
/// Each request reads the saved pair and searches afresh, so the state holds
/// no board data of its own.
pub struct AppState<A> {
    /// Journey API client
    pub api: Arc<A>,

    /// Carrier labels and colors
    pub registry: Arc<CarrierRegistry>,

    /// Saved station pair
    pub store: Arc<PreferenceStore>,

    /// Time source for searches
    pub clock: Arc<dyn Clock>,

    /// Connections shown per direction
    pub limit: usize,

    /// Seconds between automatic page reloads; 0 disables reloading
    pub refresh_secs: u32,
}

impl<A> AppState<A> {
    /// Create a new app state.
    pub fn new(
        api: A,
        registry: CarrierRegistry,
        store: PreferenceStore,
        clock: impl Clock + 'static,
        limit: usize,
        refresh_secs: u32,
    ) -> Self {
        Self {
            api: Arc::new(api),
            registry: Arc::new(registry),
            store: Arc::new(store),
            clock: Arc::new(clock),
            limit,
            refresh_secs,
        }
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            registry: Arc::clone(&self.registry),
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            limit: self.limit,
            refresh_secs: self.refresh_secs,
        }
    }
}
