mod telemetry;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use hub_core::model::{ModalPolicy, TopicId};
use services::{AppServices, Clock, PracticeService, RosterService};
use tracing::info;
use ui::{App, UiApp, build_app_context};

const POLICY_ENV: &str = "VBHUB_MODAL_POLICY";
const OPEN_TOPIC_ENV: &str = "VBHUB_OPEN_TOPIC";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidModalPolicy { raw: String },
    InvalidTopic { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidModalPolicy { raw } => {
                write!(f, "invalid --modal-policy value: {raw} (expected exclusive or permissive)")
            }
            ArgsError::InvalidTopic { raw } => write!(f, "invalid --open value: {raw}"),
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

fn parse_policy(raw: String) -> Result<ModalPolicy, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidModalPolicy { raw })
}

fn parse_topic(raw: String) -> Result<TopicId, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidTopic { raw })
}

struct DesktopApp {
    modal_policy: ModalPolicy,
    open_on_launch: Option<TopicId>,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn modal_policy(&self) -> ModalPolicy {
        self.modal_policy
    }

    fn open_on_launch(&self) -> Option<TopicId> {
        self.open_on_launch
    }

    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn roster(&self) -> Arc<RosterService> {
        self.services.roster()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    modal_policy: ModalPolicy,
    open_on_launch: Option<TopicId>,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Launch(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--modal-policy <exclusive|permissive>] [--open <topic>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --modal-policy exclusive");
    eprintln!();
    eprintln!("Topics:");
    let slugs: Vec<&str> = TopicId::ALL.iter().map(|topic| topic.slug()).collect();
    eprintln!("  {}", slugs.join(", "));
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {POLICY_ENV}, {OPEN_TOPIC_ENV}, LOG_LEVEL, LOG_FORMAT");
}

impl Args {
    /// Flags win over the environment; the environment wins over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Invocation, ArgsError> {
        let mut parsed = Args::default();
        if let Some(raw) = env(POLICY_ENV) {
            parsed.modal_policy = parse_policy(raw)?;
        }
        if let Some(raw) = env(OPEN_TOPIC_ENV).filter(|raw| !raw.trim().is_empty()) {
            parsed.open_on_launch = Some(parse_topic(raw)?);
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--modal-policy" => {
                    parsed.modal_policy = parse_policy(require_value(args, "--modal-policy")?)?;
                }
                "--open" => {
                    parsed.open_on_launch = Some(parse_topic(require_value(args, "--open")?)?);
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Launch(parsed))
    }
}

fn run() -> Result<(), ArgsError> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok())? {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Launch(parsed) => parsed,
    };

    telemetry::init_tracing();
    info!(
        modal_policy = %parsed.modal_policy,
        open_on_launch = ?parsed.open_on_launch,
        "launching hub"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        modal_policy: parsed.modal_policy,
        open_on_launch: parsed.open_on_launch,
        services: AppServices::new(Clock::default_clock()),
    });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("VB.NET Learning Hub")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
