//! Dev backend for the overlay: serves a rotating window of canned
//! suggestions on `GET /suggestions` so the widget has something to poll
//! without a real suggestion engine running.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use serde::Serialize;

/// How many catalog entries each response carries.
const WINDOW_SIZE: usize = 5;

/// How often the served window advances.
const ROTATE_INTERVAL: Duration = Duration::from_secs(3);

const DEFAULT_PORT: u16 = 8080;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "ambient-backend")]
#[command(author, version, about = "Rotating canned-suggestion server for overlay development", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

/// One catalog entry, serialized with the wire field names the overlay
/// decodes (`suggestion`, `command`, `comment`).
#[derive(Debug, Clone, Serialize)]
struct Suggestion {
    suggestion: String,
    command: String,
    comment: String,
}

impl Suggestion {
    fn new(
        suggestion: impl Into<String>,
        command: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            suggestion: suggestion.into(),
            command: command.into(),
            comment: comment.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SuggestionsResponse {
    suggestions: Vec<Suggestion>,
    timestamp: u64,
}

#[derive(Clone)]
struct AppState {
    catalog: Arc<Vec<Suggestion>>,
    offset: Arc<AtomicUsize>,
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Args::parse();

    let state = AppState {
        catalog: Arc::new(catalog()),
        offset: Arc::new(AtomicUsize::new(0)),
    };

    let rotate_state = state.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(ROTATE_INTERVAL);
        // interval fires immediately once; skip that so the first window
        // stays up for a full period
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let current = rotate_state.offset.load(Ordering::Relaxed);
            let next = next_offset(current, rotate_state.catalog.len());
            rotate_state.offset.store(next, Ordering::Relaxed);
            log::debug!("rotated suggestion window to offset {next}");
        }
    });

    let app = Router::new()
        .route("/suggestions", get(get_suggestions))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Serving suggestions on http://{addr}/suggestions");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    let offset = state.offset.load(Ordering::Relaxed);
    Json(SuggestionsResponse {
        suggestions: window(&state.catalog, offset),
        timestamp: unix_timestamp(),
    })
}

/// The `WINDOW_SIZE` entries starting at `offset`, wrapping past the end of
/// the catalog.
fn window(catalog: &[Suggestion], offset: usize) -> Vec<Suggestion> {
    if catalog.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .cycle()
        .skip(offset % catalog.len())
        .take(WINDOW_SIZE)
        .cloned()
        .collect()
}

fn next_offset(current: usize, catalog_len: usize) -> usize {
    if catalog_len == 0 {
        return 0;
    }
    (current + WINDOW_SIZE) % catalog_len
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

fn catalog() -> Vec<Suggestion> {
    vec![
        Suggestion::new("🎵 Play Focus Music", "spotify-play-focus", "Spotify • Lofi Beats"),
        Suggestion::new("📝 Git: Commit Changes", "git-commit", "5 files modified"),
        Suggestion::new("🔑 SSH: Connect to Server", "ssh-connect", "Root access ready"),
        Suggestion::new("🧹 Cleanup Downloads", "cleanup-downloads", "1.2GB of temp files"),
        Suggestion::new("🚀 Deploy App", "deploy-app", "All tests passed"),
        Suggestion::new("📊 Check System Stats", "system-stats", "CPU: 45%, RAM: 60%"),
        Suggestion::new("🔄 Update Dependencies", "update-deps", "12 packages available"),
        Suggestion::new("📧 Check Emails", "check-email", "3 unread messages"),
        Suggestion::new("🌐 Open Dev Server", "start-dev-server", "Port 3000 available"),
        Suggestion::new("📱 Build Mobile App", "build-mobile", "React Native ready"),
        Suggestion::new("🔍 Run Tests", "run-tests", "Jest • 45 test suites"),
        Suggestion::new("📦 Package Release", "package-release", "Version 1.2.3 ready"),
        Suggestion::new("🎨 Design Review", "design-review", "Figma • 3 components"),
        Suggestion::new("📈 Analytics Report", "analytics-report", "Weekly insights ready"),
        Suggestion::new("🔐 Security Scan", "security-scan", "No vulnerabilities found"),
        Suggestion::new("📝 Write Documentation", "write-docs", "API endpoints updated"),
        Suggestion::new("🎯 Performance Audit", "perf-audit", "Lighthouse score: 95"),
        Suggestion::new("🔧 Fix Bug #247", "fix-bug-247", "Critical priority"),
        Suggestion::new("📋 Code Review", "code-review", "3 PRs pending"),
        Suggestion::new("🎪 Demo Preparation", "demo-prep", "Client meeting at 3pm"),
    ]
}
