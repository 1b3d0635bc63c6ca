use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use clap::{Parser, Subcommand};
use shared::{
    protocol::{EventsEnvelope, EVENTS_ALL_PATH},
    wing::wing_label,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const BUILTIN_FIXTURE: &str = include_str!("../fixtures/events.json");

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve a fixture listing at /events/all for local kiosk runs.
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
        /// JSON file shaped like the events API response; a built-in sample otherwise.
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Answer `{"success":false}` instead of the fixture.
        #[arg(long)]
        fail: bool,
        #[arg(long, default_value_t = 200)]
        status: u16,
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
    /// Parse a fixture file and list its events with their wings.
    Check { fixture: PathBuf },
}

#[derive(Clone)]
struct FixtureState {
    envelope: Arc<EventsEnvelope>,
    status: StatusCode,
    delay: Duration,
}

async fn events_all(State(state): State<FixtureState>) -> (StatusCode, Json<EventsEnvelope>) {
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, Json(state.envelope.as_ref().clone()))
}

fn build_router(state: FixtureState) -> Router {
    Router::new()
        .route(EVENTS_ALL_PATH, get(events_all))
        .with_state(state)
}

async fn load_fixture(path: Option<&PathBuf>) -> Result<EventsEnvelope> {
    let body = match path {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read fixture '{}'", path.display()))?,
        None => BUILTIN_FIXTURE.as_bytes().to_vec(),
    };
    EventsEnvelope::from_slice(&body).context("fixture is not a valid events response")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            fixture,
            fail,
            status,
            delay_ms,
        } => {
            let envelope = if fail {
                EventsEnvelope::failed()
            } else {
                load_fixture(fixture.as_ref()).await?
            };
            let status = StatusCode::from_u16(status).context("invalid --status")?;
            let app = build_router(FixtureState {
                envelope: Arc::new(envelope),
                status,
                delay: Duration::from_millis(delay_ms),
            });

            let listener = TcpListener::bind(bind)
                .await
                .with_context(|| format!("failed to bind {bind}"))?;
            info!("serving events fixture on http://{bind}{EVENTS_ALL_PATH}");
            axum::serve(listener, app).await?;
        }
        Command::Check { fixture } => {
            let envelope = load_fixture(Some(&fixture)).await?;
            match envelope.into_events() {
                Some(events) => {
                    println!("{} events", events.len());
                    for event in &events {
                        println!(
                            "  {:<10} {:<10} {}",
                            event.event_id,
                            wing_label(&event.event_id),
                            event.name
                        );
                    }
                }
                None => println!("fixture reports failure; the carousel would show no events"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::ServiceExt;

    fn state(envelope: EventsEnvelope, status: StatusCode) -> FixtureState {
        FixtureState {
            envelope: Arc::new(envelope),
            status,
            delay: Duration::ZERO,
        }
    }

    async fn get_events(app: Router) -> (StatusCode, EventsEnvelope) {
        let request = Request::get(EVENTS_ALL_PATH)
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, EventsEnvelope::from_slice(&body).expect("envelope"))
    }

    #[tokio::test]
    async fn builtin_fixture_is_served_in_order() {
        let envelope = load_fixture(None).await.expect("fixture");
        let (status, served) = get_events(build_router(state(envelope, StatusCode::OK))).await;

        assert_eq!(status, StatusCode::OK);
        let ids = served
            .into_events()
            .expect("events")
            .into_iter()
            .map(|event| event.event_id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["EVT00001", "EVT00002", "EVT00003", "EVT00004"]);
    }

    #[tokio::test]
    async fn failure_mode_serves_unsuccessful_envelope() {
        let (status, served) = get_events(build_router(state(
            EventsEnvelope::failed(),
            StatusCode::SERVICE_UNAVAILABLE,
        )))
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(served.into_events().is_none());
    }

    #[tokio::test]
    async fn missing_fixture_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/events.json");
        assert!(load_fixture(Some(&missing)).await.is_err());
    }
}
