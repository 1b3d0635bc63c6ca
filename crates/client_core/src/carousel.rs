//! Events carousel controller: one fetch per lifetime, a periodic
//! auto-advance task while there is something to show, and manual selection.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use shared::domain::Event;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{error::FetchError, source::EventSource};

pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Loading,
    Empty,
    Populated,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceCause {
    Auto,
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    Loaded { count: usize },
    ActiveChanged { index: usize, cause: AdvanceCause },
    Stopped,
}

/// Consistent copy of the carousel state handed to presenters.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSnapshot {
    pub phase: CarouselPhase,
    pub events: Arc<Vec<Event>>,
    pub active_index: usize,
}

impl CarouselSnapshot {
    /// True until the first fetch settles, including before `start()`.
    pub fn loading(&self) -> bool {
        matches!(self.phase, CarouselPhase::Idle | CarouselPhase::Loading)
    }

    pub fn current(&self) -> Option<&Event> {
        self.events.get(self.active_index)
    }
}

struct CarouselState {
    phase: CarouselPhase,
    events: Arc<Vec<Event>>,
    active_index: usize,
    ticker: Option<JoinHandle<()>>,
}

pub struct EventsCarousel {
    source: Arc<dyn EventSource>,
    advance_interval: Duration,
    state: Mutex<CarouselState>,
    events: broadcast::Sender<CarouselEvent>,
}

impl EventsCarousel {
    pub fn new(source: Arc<dyn EventSource>) -> Arc<Self> {
        Self::with_advance_interval(source, DEFAULT_ADVANCE_INTERVAL)
    }

    pub fn with_advance_interval(
        source: Arc<dyn EventSource>,
        advance_interval: Duration,
    ) -> Arc<Self> {
        let advance_interval = if advance_interval.is_zero() {
            warn!("zero advance interval requested; using default");
            DEFAULT_ADVANCE_INTERVAL
        } else {
            advance_interval
        };
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            source,
            advance_interval,
            state: Mutex::new(CarouselState {
                phase: CarouselPhase::Idle,
                events: Arc::new(Vec::new()),
                active_index: 0,
                ticker: None,
            }),
            events,
        })
    }

    /// Kicks off the single fetch of this carousel's lifetime. Later calls
    /// are ignored.
    pub async fn start(self: &Arc<Self>) {
        {
            let mut state = self.state.lock().await;
            if state.phase != CarouselPhase::Idle {
                warn!(phase = ?state.phase, "carousel already started; not fetching again");
                return;
            }
            state.phase = CarouselPhase::Loading;
        }

        let carousel = Arc::downgrade(self);
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source.fetch_events().await;
            let Some(carousel) = carousel.upgrade() else {
                debug!("carousel dropped before events arrived");
                return;
            };
            carousel.apply_fetch_result(result).await;
        });
    }

    /// Cancels auto-advance and discards state. A fetch still in flight is
    /// left to finish but its result is dropped.
    pub async fn stop(&self) {
        {
            let mut state = self.state.lock().await;
            if state.phase == CarouselPhase::Stopped {
                return;
            }
            if let Some(ticker) = state.ticker.take() {
                ticker.abort();
            }
            state.phase = CarouselPhase::Stopped;
            state.events = Arc::new(Vec::new());
            state.active_index = 0;
        }
        debug!("carousel stopped");
        let _ = self.events.send(CarouselEvent::Stopped);
    }

    /// Jumps to `index`. The auto-advance cadence is untouched, so the next
    /// scheduled tick moves on from `index`.
    pub async fn select_event(&self, index: usize) {
        {
            let mut state = self.state.lock().await;
            if state.phase != CarouselPhase::Populated {
                debug!(index, phase = ?state.phase, "no events to select from");
                return;
            }
            if index >= state.events.len() {
                warn!(
                    index,
                    len = state.events.len(),
                    "ignoring out-of-range event selection"
                );
                return;
            }
            state.active_index = index;
        }
        let _ = self.events.send(CarouselEvent::ActiveChanged {
            index,
            cause: AdvanceCause::Manual,
        });
    }

    pub async fn current_event(&self) -> Option<Event> {
        let state = self.state.lock().await;
        state.events.get(state.active_index).cloned()
    }

    pub async fn snapshot(&self) -> CarouselSnapshot {
        let state = self.state.lock().await;
        CarouselSnapshot {
            phase: state.phase,
            events: Arc::clone(&state.events),
            active_index: state.active_index,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CarouselEvent> {
        self.events.subscribe()
    }

    async fn apply_fetch_result(self: &Arc<Self>, result: Result<Vec<Event>, FetchError>) {
        let count = {
            let mut state = self.state.lock().await;
            if state.phase == CarouselPhase::Stopped {
                debug!("carousel stopped while fetching; discarding events");
                return;
            }

            let events = match result {
                Ok(events) => events,
                Err(err) => {
                    warn!("failed to load events, showing none: {err}");
                    Vec::new()
                }
            };

            state.events = Arc::new(events);
            state.active_index = 0;
            if let Some(ticker) = state.ticker.take() {
                ticker.abort();
            }
            if state.events.is_empty() {
                state.phase = CarouselPhase::Empty;
            } else {
                state.phase = CarouselPhase::Populated;
                state.ticker = Some(self.spawn_ticker());
            }
            state.events.len()
        };

        info!(count, "events loaded");
        let _ = self.events.send(CarouselEvent::Loaded { count });
    }

    fn spawn_ticker(self: &Arc<Self>) -> JoinHandle<()> {
        let carousel: Weak<Self> = Arc::downgrade(self);
        let period = self.advance_interval;
        tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                let Some(carousel) = carousel.upgrade() else {
                    break;
                };
                if !carousel.advance().await {
                    break;
                }
            }
        })
    }

    async fn advance(&self) -> bool {
        let index = {
            let mut state = self.state.lock().await;
            if state.phase != CarouselPhase::Populated || state.events.is_empty() {
                return false;
            }
            state.active_index = (state.active_index + 1) % state.events.len();
            state.active_index
        };
        debug!(index, "auto-advanced");
        let _ = self.events.send(CarouselEvent::ActiveChanged {
            index,
            cause: AdvanceCause::Auto,
        });
        true
    }
}

impl Drop for EventsCarousel {
    fn drop(&mut self) {
        if let Some(ticker) = self.state.get_mut().ticker.take() {
            ticker.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
