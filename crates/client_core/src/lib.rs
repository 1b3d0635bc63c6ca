//! Client side of the festival events listing: the carousel controller, the
//! source it fetches from, settings, and view models for presenters.

pub mod carousel;
pub mod config;
pub mod error;
pub mod source;
pub mod view;

pub use carousel::{
    AdvanceCause, CarouselEvent, CarouselPhase, CarouselSnapshot, EventsCarousel,
    DEFAULT_ADVANCE_INTERVAL,
};
pub use config::{load_settings, load_settings_from, Settings};
pub use error::{FetchError, SettingsError};
pub use source::{EventSource, HttpEventSource};
pub use view::{CarouselView, EventCard, FeeFallback};
