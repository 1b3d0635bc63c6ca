//! Plain-text rendering of carousel state and the static festival copy.

use chrono::{DateTime, FixedOffset, Utc};
use client_core::{CarouselSnapshot, CarouselView, FeeFallback};
use shared::{
    countdown::time_left,
    festival::{FAQ, FESTIVAL_NAME, TIMELINE},
    wing::WingDirectory,
};

pub fn print_countdown(starts_at: &DateTime<FixedOffset>, now: DateTime<Utc>) {
    let left = time_left(starts_at, now);
    if left.is_over() {
        println!("{FESTIVAL_NAME} is live!");
    } else {
        println!(
            "{FESTIVAL_NAME} starts in {}d {:02}h {:02}m {:02}s",
            left.days, left.hours, left.minutes, left.seconds
        );
    }
}

pub fn print_view(snapshot: &CarouselSnapshot, wings: &WingDirectory, fee_fallback: FeeFallback) {
    let view = CarouselView::from_snapshot(snapshot, wings, fee_fallback);
    if let Some(status) = view.status_line() {
        println!("{status}");
        return;
    }
    let CarouselView::Showing {
        card,
        active_index,
        total,
    } = &view
    else {
        return;
    };

    println!();
    println!("[{}/{}] {}", active_index + 1, total, card.badge);
    println!("  {}", card.title.to_uppercase());
    if !card.description.is_empty() {
        println!("  {}", card.description);
    }
    println!("  Entry: {}   Date: {}", card.fee, card.date);
    println!("  Poster: {}", card.poster_url);
    println!("  {}", view.indicators());
}

pub fn print_about() {
    println!("{FESTIVAL_NAME} through the years");
    for milestone in TIMELINE {
        println!("  {}  {}", milestone.year, milestone.title);
        println!("        {}", milestone.description);
    }
    println!();
    println!("FAQ");
    for entry in FAQ {
        println!("  Q: {}", entry.question);
        println!("  A: {}", entry.answer);
    }
}
