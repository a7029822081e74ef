//! Screen state machine: `Idle -> Loading -> Loaded | Failed`.
//!
//! A screen owns one endpoint. Each fetch is identified by a [`Ticket`]; only
//! the most recently issued ticket may complete, so a newer fetch replaces an
//! in-flight one without aborting it.

use crate::endpoint::Endpoint;
use crate::envelope::{Envelope, decode_envelope};
use crate::error::ClientError;
use crate::source::LedgerSource;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(ClientError),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ScreenState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            ScreenState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Identifies one fetch issued by [`Screen::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Screen<T> {
    endpoint: Endpoint,
    state: ScreenState<T>,
    issued: u64,
}

impl<T> Screen<T> {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            state: ScreenState::Idle,
            issued: 0,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn state(&self) -> &ScreenState<T> {
        &self.state
    }

    pub fn into_state(self) -> ScreenState<T> {
        self.state
    }

    /// Start a fetch: enter `Loading` and supersede any earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = ScreenState::Loading;
        Ticket(self.issued)
    }

    /// Finish the fetch identified by `ticket`.
    ///
    /// Returns `false` (state untouched) when the ticket has been superseded.
    pub fn complete(&mut self, ticket: Ticket, result: Result<T, ClientError>) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(endpoint = %self.endpoint, ticket = ticket.0, latest = self.issued, "discarding superseded fetch");
            return false;
        }

        self.state = match result {
            Ok(data) => ScreenState::Loaded(data),
            Err(err) => {
                tracing::warn!(endpoint = %self.endpoint, error = %err, alert = ?err.alert(), "fetch failed");
                ScreenState::Failed(err)
            }
        };
        true
    }

    /// Fetch, decode and transform in one round.
    ///
    /// The transform runs only on a successfully decoded body; it never runs
    /// for transport or decoding failures.
    pub async fn refresh<S, F>(&mut self, source: &S, transform: F) -> &ScreenState<T>
    where
        S: LedgerSource + ?Sized,
        F: FnOnce(Envelope) -> Result<T, ClientError>,
    {
        let ticket = self.begin();
        tracing::debug!(endpoint = %self.endpoint, "fetching");

        let result = match source.fetch(&self.endpoint).await {
            Ok(body) => decode_envelope(&body).and_then(transform),
            Err(err) => Err(err),
        };

        self.complete(ticket, result);
        &self.state
    }
}
