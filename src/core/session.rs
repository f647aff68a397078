// Session context: the user state, where it is stored, and the collaborators
// skills can call. One session lives for the whole process.

use crate::config::Config;
use crate::core::dispatcher::{dispatch, Reply};
use crate::core::parser::parse;
use crate::error::Result;
use crate::services::Collaborators;
use crate::state::UserState;
use crate::store::DocumentStore;
use log::info;

pub struct Session {
    state: UserState,
    store: DocumentStore,
    services: Collaborators,
    default_city: String,
    closed: bool,
}

impl Session {
    /// Load state from `store` and build a session around it
    pub fn new(store: DocumentStore, services: Collaborators, default_city: impl Into<String>) -> Self {
        let state = store.load();
        Self {
            state,
            store,
            services,
            default_city: default_city.into(),
            closed: false,
        }
    }

    /// Session wired to the real collaborators and the configured data file
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DocumentStore::new(&config.data_file),
            Collaborators::system(config),
            config.default_city.clone(),
        )
    }

    /// Parse and run one line of input
    pub async fn handle(&mut self, input: &str) -> Reply {
        match parse(input) {
            Ok(parsed) => dispatch(self, &parsed).await,
            Err(e) => Reply::text(e.user_message()),
        }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UserState {
        &mut self.state
    }

    pub fn services(&self) -> &Collaborators {
        &self.services
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Write the current state to the store
    pub fn persist(&self) -> Result<()> {
        self.store.save(&self.state)
    }

    /// Final flush. Only the first call writes; later calls are no-ops.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        info!("Shutting down, flushing user data");
        self.persist()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
