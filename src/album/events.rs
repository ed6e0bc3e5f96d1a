//! Album events.
//!
//! Every committed purchase appends to the album's `EventLog`. When a rare
//! card is drawn, `RareCardDrawn` is appended before `PackOpened`.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Identity;

/// Something observable that happened in an album.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum AlbumEvent {
    /// A rare card was drawn as part of a purchase.
    RareCardDrawn { buyer: Identity, card_id: CardId },

    /// A pack was opened and its common cards credited.
    PackOpened { buyer: Identity, common_cards: Vec<CardId> },
}

impl AlbumEvent {
    /// Event name as emitted in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::RareCardDrawn { .. } => "RareCardDrawn",
            Self::PackOpened { .. } => "PackOpened",
        }
    }

    /// The buyer the event belongs to.
    #[must_use]
    pub fn buyer(&self) -> Identity {
        match self {
            Self::RareCardDrawn { buyer, .. } | Self::PackOpened { buyer, .. } => *buyer,
        }
    }
}

/// Append-only, ordered event log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<AlbumEvent>,
}

impl EventLog {
    /// Create a new empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: AlbumEvent) {
        self.events.push(event);
    }

    /// All events in emission order.
    #[must_use]
    pub fn events(&self) -> &[AlbumEvent] {
        &self.events
    }

    /// Remove and return all events.
    pub fn take(&mut self) -> Vec<AlbumEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of events logged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events were logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
