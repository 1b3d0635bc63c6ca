//! Display-ready strings for whatever renders the carousel.

use serde::Serialize;
use shared::{domain::Event, wing::WingDirectory};

use crate::carousel::{CarouselPhase, CarouselSnapshot};

pub const PLACEHOLDER_POSTER_URL: &str = "https://images.unsplash.com/photo-1614850523296-d8c1af93d400?q=80&w=600&h=900&auto=format&fit=crop";
pub const LOADING_TEXT: &str = "Loading events...";
pub const EMPTY_TEXT: &str = "No events available";
pub const DATE_FALLBACK: &str = "TBA";

/// What the fee line shows when an event publishes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeeFallback {
    #[default]
    Zero,
    NotAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub fee: String,
    pub date: String,
    pub badge: String,
}

impl EventCard {
    pub fn from_event(event: &Event, wings: &WingDirectory, fee_fallback: FeeFallback) -> Self {
        let fee = match (event.registration_fee(), fee_fallback) {
            (Some(fee), _) => format!("₹{fee}"),
            (None, FeeFallback::Zero) => "₹0".to_string(),
            (None, FeeFallback::NotAvailable) => "N/A".to_string(),
        };

        Self {
            event_id: event.event_id.to_string(),
            title: event.name.clone(),
            description: event.description.clone(),
            poster_url: event
                .poster_url()
                .unwrap_or(PLACEHOLDER_POSTER_URL)
                .to_string(),
            fee,
            date: event.date().unwrap_or(DATE_FALLBACK).to_string(),
            badge: format!("{} presents", wings.label_for(&event.event_id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselView {
    Loading,
    Empty,
    Showing {
        card: EventCard,
        active_index: usize,
        total: usize,
    },
}

impl CarouselView {
    pub fn from_snapshot(
        snapshot: &CarouselSnapshot,
        wings: &WingDirectory,
        fee_fallback: FeeFallback,
    ) -> Self {
        match (snapshot.phase, snapshot.current()) {
            (CarouselPhase::Idle | CarouselPhase::Loading, _) => CarouselView::Loading,
            (CarouselPhase::Populated, Some(event)) => CarouselView::Showing {
                card: EventCard::from_event(event, wings, fee_fallback),
                active_index: snapshot.active_index,
                total: snapshot.events.len(),
            },
            _ => CarouselView::Empty,
        }
    }

    pub fn status_line(&self) -> Option<&'static str> {
        match self {
            CarouselView::Loading => Some(LOADING_TEXT),
            CarouselView::Empty => Some(EMPTY_TEXT),
            CarouselView::Showing { .. } => None,
        }
    }

    pub fn total_events(&self) -> usize {
        match self {
            CarouselView::Showing { total, .. } => *total,
            _ => 0,
        }
    }

    /// One marker per event, the active one filled.
    pub fn indicators(&self) -> String {
        let CarouselView::Showing {
            active_index,
            total,
            ..
        } = self
        else {
            return String::new();
        };
        (0..*total)
            .map(|i| if i == *active_index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
