//! # Catalog Session
//!
//! This module wires the input side to the filter pipeline:
//! 1. The session owns the loaded catalog for its whole lifetime
//! 2. Input events arrive on an mpsc channel, in order
//! 3. Query changes are debounced; sort changes apply immediately
//! 4. Each qualifying event runs filter-then-sort over the catalog
//! 5. The resulting view goes out on the view channel for rendering
//!
//! The session never renders anything itself; the presentation layer
//! owns the receiving end of the view channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use catalog::{Catalog, Movie};
use pipeline::{FilterCriteria, apply_filters_and_sort};

use crate::debounce::Debouncer;

/// Default quiet period before a query change runs the pipeline,
/// matching a comfortable typing cadence.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// The two input events a session reacts to. Each carries the full
/// criteria state as of the event, so handling one never needs to
/// consult input widgets.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// The free-text query changed (debounced)
    QueryChanged(FilterCriteria),
    /// The sort selector changed (applied immediately)
    SortChanged(FilterCriteria),
}

/// A filtered, ordered view of the catalog, ready to render.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// The movies to display, in display order
    pub movies: Vec<Movie>,
    /// Result count for the "N movies found" counter
    pub total: usize,
}

/// Owns the catalog and turns input events into views.
///
/// ## Usage
/// ```ignore
/// let session = CatalogSession::new(catalog);
/// let (event_tx, event_rx) = mpsc::channel(16);
/// let (view_tx, view_rx) = mpsc::unbounded_channel();
/// tokio::spawn(session.run(event_rx, view_tx));
/// ```
pub struct CatalogSession {
    catalog: Arc<Catalog>,
    debounce_delay: Duration,
}

impl CatalogSession {
    /// Create a session over an owned catalog with the default debounce.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            debounce_delay: DEFAULT_DEBOUNCE,
        }
    }

    /// Override the debounce quiet period (builder pattern).
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// Process input events until the event channel closes.
    ///
    /// Emits one unfiltered view up front, then one view per qualifying
    /// event. A dropped view receiver is logged and tolerated so a
    /// closing front end cannot wedge the loop.
    pub async fn run(
        self,
        mut events: mpsc::Receiver<InputEvent>,
        views: mpsc::UnboundedSender<CatalogView>,
    ) {
        let render = {
            let catalog = Arc::clone(&self.catalog);
            let views = views.clone();
            move |criteria: FilterCriteria| {
                debug!(
                    "Running pipeline: query={:?} sort={}",
                    criteria.query, criteria.sort_key
                );
                let movies = apply_filters_and_sort(catalog.movies().to_vec(), &criteria);
                let view = CatalogView {
                    total: movies.len(),
                    movies,
                };
                if views.send(view).is_err() {
                    warn!("View receiver dropped; discarding filtered view");
                }
            }
        };

        info!("Session started with {} movies in catalog", self.catalog.len());

        // The page renders the whole catalog before any input arrives.
        render(FilterCriteria::default());

        let mut debouncer = Debouncer::new(self.debounce_delay, render.clone());
        while let Some(event) = events.recv().await {
            match event {
                InputEvent::QueryChanged(criteria) => debouncer.call(criteria),
                InputEvent::SortChanged(criteria) => render(criteria),
            }
        }
        info!("Event channel closed, session ending");
    }
}
