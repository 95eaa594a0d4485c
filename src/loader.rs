//! Record Loader
//!
//! Tracks the identifier being shown and turns fetch outcomes into a
//! [`ViewState`]. Each fetch is tagged with a generation number; an outcome
//! whose generation is no longer current is dropped, so a slow response for
//! an old identifier never overwrites the page.

use serde_json::Value;

use crate::api::RecordSource;
use crate::error::LoadError;
use crate::models::{Record, ViewState};

/// Permission to apply the outcome of one fetch
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    identifier: String,
}

impl LoadTicket {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordLoader {
    generation: u64,
    identifier: Option<String>,
    state: ViewState,
    fallback_message: String,
}

impl RecordLoader {
    pub fn new(fallback_message: impl Into<String>) -> Self {
        Self {
            generation: 0,
            identifier: None,
            state: ViewState::NoIdentifier,
            fallback_message: fallback_message.into(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// React to a (possibly unchanged) identifier. Returns a ticket when a
    /// fetch must be issued; `None` when the identifier is absent or the same
    /// as before.
    pub fn on_identifier_change(&mut self, id: Option<String>) -> Option<LoadTicket> {
        let id = id.filter(|id| !id.is_empty());
        if id == self.identifier {
            return None;
        }

        // Any fetch still in flight belongs to the old identifier
        self.generation += 1;
        self.identifier = id.clone();

        match id {
            None => {
                self.state = ViewState::NoIdentifier;
                None
            }
            Some(identifier) => {
                self.state = ViewState::Loading;
                log::info!("loading record '{}' (generation {})", identifier, self.generation);
                Some(LoadTicket { generation: self.generation, identifier })
            }
        }
    }

    /// True while no newer identifier change has superseded the ticket
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a fetch outcome. Returns `false` when the ticket is stale and the
    /// outcome was dropped.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: Result<Record, LoadError>) -> bool {
        if !self.is_current(&ticket) {
            log::debug!(
                "dropping stale response for '{}' (generation {}, current {})",
                ticket.identifier,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(record) => ViewState::Loaded(record),
            Err(err) => {
                if let LoadError::Transport(_) = err {
                    log::warn!("record '{}' could not be loaded", ticket.identifier);
                }
                ViewState::Error(err.user_message(&self.fallback_message))
            }
        };
        true
    }
}

/// Interpret a response body: an `error` field wins, otherwise the record.
pub fn parse_response(body: &str) -> Result<Record, LoadError> {
    let value: Value = serde_json::from_str(body).map_err(LoadError::transport)?;
    if !value.is_object() {
        return Err(LoadError::Transport("response is not a JSON object".into()));
    }
    if let Some(message) = value.get("error").and_then(error_message) {
        return Err(LoadError::Remote(message));
    }
    serde_json::from_value(value).map_err(LoadError::transport)
}

/// The `error` field counts only when it is truthy: empty strings, zero,
/// `null` and `false` are ignored.
fn error_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Fetch and interpret the record a ticket was issued for
pub async fn resolve<S: RecordSource + ?Sized>(source: &S, ticket: &LoadTicket) -> Result<Record, LoadError> {
    let body = source.fetch(ticket.identifier()).await?;
    parse_response(&body)
}
