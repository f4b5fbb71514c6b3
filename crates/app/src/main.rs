use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{HttpQuizApi, QuizApi, QuizApiConfig};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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

struct DesktopApp {
    quiz_api: Arc<dyn QuizApi>,
}

impl UiApp for DesktopApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://127.0.0.1:5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_URL, RUST_LOG");
}

enum Parsed {
    Run(QuizApiConfig),
    Help,
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
    let mut config = QuizApiConfig::from_env();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                let trimmed = value.trim();
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(ArgsError::InvalidApiUrl { raw: value });
                }
                config = QuizApiConfig::new(trimmed);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Run(config))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(&mut argv).inspect_err(|e| {
        eprintln!("{e}");
        print_usage();
    })? {
        Parsed::Run(config) => config,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();
    tracing::info!(base_url = %config.base_url, "starting quiz client");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_api: Arc::new(HttpQuizApi::new(config)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Parsed, ArgsError> {
        parse_args(&mut args.iter().map(ToString::to_string))
    }

    #[test]
    fn api_url_flag_overrides_default() {
        match parse(&["--api-url", "https://quiz.example.com/"]) {
            Ok(Parsed::Run(config)) => assert_eq!(config.base_url, "https://quiz.example.com/"),
            _ => panic!("expected run config"),
        }
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            parse(&["--api-url"]),
            Err(ArgsError::MissingValue { flag: "--api-url" })
        ));
        assert!(matches!(
            parse(&["--api-url", "localhost"]),
            Err(ArgsError::InvalidApiUrl { .. })
        ));
        assert!(matches!(parse(&["--db"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn help_is_recognised() {
        assert!(matches!(parse(&["-h"]), Ok(Parsed::Help)));
    }
}
