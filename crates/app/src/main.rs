use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use api::{ApiConfig, HttpRoadmapApi, RoadmapApi};
use momentum_core::model::UserId;
use services::{
    AssistantService, AuthSession, FixedSession, RoadmapService, WeekService,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidUserId,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidUserId => write!(f, "--user-id must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--user-id <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:8000");
    eprintln!("  --user-id local-user");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MOMENTUM_API_URL, MOMENTUM_USER_ID");
}

struct Args {
    api_url: String,
    user_id: UserId,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = ApiConfig::from_env().base_url;
        let mut user_id = std::env::var("MOMENTUM_USER_ID")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| UserId::new("local-user"), UserId::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = value;
                }
                "--user-id" => {
                    let value = require_value(args, "--user-id")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidUserId);
                    }
                    user_id = UserId::new(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api_url, user_id })
    }
}

struct DesktopApp {
    session: Arc<dyn AuthSession>,
    week_service: Arc<WeekService>,
    roadmap_service: Arc<RoadmapService>,
    assistant_service: Arc<AssistantService>,
}

impl UiApp for DesktopApp {
    fn session(&self) -> Arc<dyn AuthSession> {
        Arc::clone(&self.session)
    }

    fn week_service(&self) -> Arc<WeekService> {
        Arc::clone(&self.week_service)
    }

    fn roadmap_service(&self) -> Arc<RoadmapService> {
        Arc::clone(&self.roadmap_service)
    }

    fn assistant_service(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant_service)
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(api_url = %parsed.api_url, user_id = %parsed.user_id, "starting");

    let backend: Arc<dyn RoadmapApi> =
        Arc::new(HttpRoadmapApi::new(ApiConfig::new(parsed.api_url)));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session: Arc::new(FixedSession::signed_in(parsed.user_id)),
        week_service: Arc::new(WeekService::new(Arc::clone(&backend))),
        roadmap_service: Arc::new(RoadmapService::new(Arc::clone(&backend))),
        assistant_service: Arc::new(AssistantService::new(backend)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Momentum")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

// The desktop event loop blocks this thread; the surrounding runtime is
// what gives reqwest a reactor for its connection tasks.
#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
