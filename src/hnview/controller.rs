//! # Search Controller
//!
//! Owns the [`SearchState`], the remembered query and the current [`QueryUrl`], and is
//! the only thing that dispatches actions.
//!
//! ## Typing is not searching
//!
//! [`SearchController::set_query`] only updates (and persists) the query text. The URL
//! changes, and a fetch happens, only on an explicit [`SearchController::submit`]. Editing
//! the query never touches the network.
//!
//! ## Overlapping fetches
//!
//! Each fetch-start hands out a [`FetchTicket`] stamped with a generation number. A
//! completion is applied only if its ticket is still the latest one; anything older is
//! dropped, so a slow earlier response can never overwrite a newer one. Nothing is
//! cancelled, the stale response is simply ignored.
//!
//! ## Failures
//!
//! Whatever goes wrong during a fetch becomes [`Action::FetchFailure`]. The cause is
//! logged here and goes no further.

use crate::config::HnConfig;
use crate::error::{HnError, Result};
use crate::fetch::{FetchError, QueryUrl, StoryFetcher};
use crate::model::{Story, StoryId};
use crate::persisted::PersistedValue;
use crate::state::{Action, SearchState};
use crate::store::KeyValueStore;
use tracing::{debug, info, warn};

/// Proof that a fetch was started, needed to complete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    url: QueryUrl,
}

impl FetchTicket {
    pub fn url(&self) -> &QueryUrl {
        &self.url
    }
}

pub struct SearchController<F: StoryFetcher, S: KeyValueStore> {
    fetcher: F,
    query: PersistedValue<S>,
    endpoint: String,
    url: QueryUrl,
    state: SearchState,
    generation: u64,
}

impl<F: StoryFetcher, S: KeyValueStore> SearchController<F, S> {
    /// Seeds the query from `store` (or the configured default) and the URL from the query.
    ///
    /// Does not fetch; call [`refresh`](Self::refresh) for the initial load.
    pub fn new(fetcher: F, store: S, config: &HnConfig) -> Result<Self> {
        let query = PersistedValue::load(store, &config.query_key, &config.default_query)?;
        let url = QueryUrl::new(&config.endpoint, query.get());
        Ok(Self {
            fetcher,
            query,
            endpoint: config.endpoint.clone(),
            url,
            state: SearchState::new(),
            generation: 0,
        })
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> &str {
        self.query.get()
    }

    pub fn current_url(&self) -> &QueryUrl {
        &self.url
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Updates and persists the query text. Does not fetch.
    pub fn set_query(&mut self, text: impl Into<String>) -> Result<()> {
        self.query.set(text)
    }

    pub fn can_submit(&self) -> bool {
        !self.query.get().is_empty()
    }

    /// Points the URL at the current query and fetches it.
    pub async fn submit(&mut self) -> Result<()> {
        let ticket = self.start_submit()?;
        self.run_fetch(ticket).await;
        Ok(())
    }

    /// Fetches the current URL again without reading the query.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_fetch();
        self.run_fetch(ticket).await;
    }

    /// First half of [`submit`](Self::submit): updates the URL and dispatches fetch-start.
    pub fn start_submit(&mut self) -> Result<FetchTicket> {
        if !self.can_submit() {
            return Err(HnError::EmptyQuery);
        }
        self.url = QueryUrl::new(&self.endpoint, self.query.get());
        info!(query = self.query.get(), "search: submit");
        Ok(self.begin_fetch())
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.dispatch(Action::FetchStart);
        FetchTicket {
            generation: self.generation,
            url: self.url.clone(),
        }
    }

    /// Applies the outcome of a fetch. Returns `false` if the ticket was stale and the
    /// outcome was dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: std::result::Result<Vec<Story>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                url = ticket.url.as_str(),
                "search: dropping stale response"
            );
            return false;
        }

        match outcome {
            Ok(stories) => {
                debug!(count = stories.len(), "search: fetch succeeded");
                self.dispatch(Action::FetchSuccess(stories));
            }
            Err(err) => {
                warn!(url = ticket.url.as_str(), error = %err, "search: fetch failed");
                self.dispatch(Action::FetchFailure);
            }
        }
        true
    }

    pub fn remove_story(&mut self, id: &StoryId) {
        self.dispatch(Action::RemoveStory(id.clone()));
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    async fn run_fetch(&mut self, ticket: FetchTicket) {
        let outcome = self.fetcher.fetch(ticket.url()).await;
        self.complete_fetch(ticket, outcome);
    }
}
