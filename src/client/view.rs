//! The client view: one fetch per mount, three states.

use std::time::Instant;

use tracing::{debug, info};

use super::render::render;
use super::source::EnvSource;
use super::state::{on_fetch_result, FetchState};
use crate::metrics::record_client_fetch;

/// A mounted client view over an [`EnvSource`].
#[derive(Debug)]
pub struct ClientView<S> {
    source: S,
    state: FetchState,
    fetched: bool,
}

impl<S: EnvSource> ClientView<S> {
    /// Mount the view. Starts in [`FetchState::Loading`] without fetching.
    pub fn mount(source: S) -> Self {
        Self {
            source,
            state: FetchState::Loading,
            fetched: false,
        }
    }

    /// Issue the mount's single fetch and settle the state.
    ///
    /// Later calls on the same mount return the settled state untouched.
    pub async fn activate(&mut self) -> &FetchState {
        if self.fetched {
            debug!(phase = %self.state.phase(), "Fetch already issued for this mount");
            return &self.state;
        }
        self.fetched = true;

        let started = Instant::now();
        let result = self.source.fetch_env().await;
        self.state = on_fetch_result(result);

        let phase = self.state.phase();
        record_client_fetch(phase.into(), started);
        info!(%phase, elapsed_ms = started.elapsed().as_millis() as u64, "Client view settled");

        &self.state
    }

    /// Start a fresh mount over the same source.
    pub fn remount(&mut self) {
        self.state = FetchState::Loading;
        self.fetched = false;
    }

    /// Current state.
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Render the current state.
    pub fn render(&self) -> String {
        render(&self.state)
    }

    /// Underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
