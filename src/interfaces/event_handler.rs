// ============================================================================
// Event Handler Interface
// Defines the contract for observing formatting outcomes
// ============================================================================

use crate::numeric::NumeralError;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a [`NumeralWriter`](crate::engine::NumeralWriter)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatEvent {
    /// Input failed validation
    InputRejected {
        input: String,
        timestamp: DateTime<Utc>,
    },

    /// Input written out successfully
    Formatted {
        input: String,
        words: String,
        timestamp: DateTime<Utc>,
    },

    /// Input was valid but could not be named
    Failed {
        input: String,
        error: NumeralError,
        timestamp: DateTime<Utc>,
    },
}

impl FormatEvent {
    /// Build the event describing `outcome` for `input`.
    pub fn from_outcome(input: &str, outcome: &Result<String, NumeralError>) -> Self {
        let input = input.to_string();
        let timestamp = Utc::now();
        match outcome {
            Ok(words) => FormatEvent::Formatted {
                input,
                words: words.clone(),
                timestamp,
            },
            Err(NumeralError::NotANumber) => FormatEvent::InputRejected { input, timestamp },
            Err(error) => FormatEvent::Failed {
                input,
                error: *error,
                timestamp,
            },
        }
    }

    pub fn input(&self) -> &str {
        match self {
            FormatEvent::InputRejected { input, .. }
            | FormatEvent::Formatted { input, .. }
            | FormatEvent::Failed { input, .. } => input,
        }
    }
}

/// Event handler trait for processing writer events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a format event
    fn on_event(&self, event: FormatEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FormatEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler, the default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: FormatEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: FormatEvent) {
        match &event {
            FormatEvent::Failed { error, .. } => {
                tracing::debug!(%error, "Numeral writer event: {:?}", event)
            }
            _ => tracing::debug!("Numeral writer event: {:?}", event),
        }
    }
}
