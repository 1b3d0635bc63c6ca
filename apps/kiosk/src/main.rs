use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use client_core::{
    load_settings, load_settings_from, CarouselEvent, EventsCarousel, FeeFallback,
    HttpEventSource,
};
use shared::wing::WingDirectory;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FeeStyle {
    Zero,
    NotAvailable,
}

impl From<FeeStyle> for FeeFallback {
    fn from(value: FeeStyle) -> Self {
        match value {
            FeeStyle::Zero => FeeFallback::Zero,
            FeeStyle::NotAvailable => FeeFallback::NotAvailable,
        }
    }
}

/// Terminal presenter for the festival events carousel. Type an event number
/// and press enter to jump to it.
#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to ./carousel.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long)]
    advance_interval_ms: Option<String>,
    #[arg(long, value_enum, default_value_t = FeeStyle::Zero)]
    fee_fallback: FeeStyle,
    /// Exit after this many seconds instead of waiting for ctrl-c.
    #[arg(long)]
    run_for_secs: Option<u64>,
    /// Print the FAQ and festival timeline, then exit.
    #[arg(long)]
    about: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    if args.about {
        render::print_about();
        return Ok(());
    }

    let mut settings = match &args.config {
        Some(path) => load_settings_from(path, |key| std::env::var(key).ok()),
        None => load_settings(),
    };
    if let Some(url) = &args.api_base_url {
        settings
            .set_api_base_url(url)
            .context("invalid --api-base-url")?;
    }
    if let Some(ms) = &args.advance_interval_ms {
        settings
            .set_advance_interval_ms(ms)
            .context("invalid --advance-interval-ms")?;
    }

    render::print_countdown(&settings.fest_starts_at, chrono::Utc::now());

    let source = HttpEventSource::from_settings(&settings)
        .context("failed to build events client")?;
    info!(endpoint = %source.endpoint(), "starting events carousel");
    let carousel = EventsCarousel::with_advance_interval(Arc::new(source), settings.advance_interval);
    let wings = WingDirectory::default();
    let fee_fallback = FeeFallback::from(args.fee_fallback);
    let mut events = carousel.subscribe();

    carousel.start().await;
    render::print_view(&carousel.snapshot().await, &wings, fee_fallback);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let run_for = args.run_for_secs.map(Duration::from_secs);
    let deadline = async move {
        match run_for {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(deadline);

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(CarouselEvent::Stopped) | Err(RecvError::Closed) => break,
                Ok(_) | Err(RecvError::Lagged(_)) => {
                    render::print_view(&carousel.snapshot().await, &wings, fee_fallback);
                }
            },
            line = stdin.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match line.trim().parse::<usize>() {
                    Ok(number) if number > 0 => carousel.select_event(number - 1).await,
                    _ => println!("enter an event number between 1 and the number of events"),
                },
                Ok(None) => stdin_open = false,
                Err(err) => {
                    warn!("stdin closed: {err}");
                    stdin_open = false;
                }
            },
            _ = &mut shutdown => break,
            _ = &mut deadline => break,
        }
    }

    carousel.stop().await;
    Ok(())
}
