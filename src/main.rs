use petlife_match::config::{LoggingSettings, Settings};
use petlife_match::models::Decision;
use petlife_match::presenter::{ReviewPresenter, ReviewView};
use petlife_match::services::HttpMatchService;
use petlife_match::MatchController;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "Commands: y (accept), n (reject), select <pet id>, select (clear), q (quit)";

fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load()?;
    init_logging(&settings.logging);

    info!("Using match backend at {}", settings.service.base_url);

    let service = HttpMatchService::new(&settings.service.base_url, settings.service.timeout())?;
    let presenter = ReviewPresenter::new(MatchController::new(service), settings.presenter.clone());

    let initial = std::env::args().nth(1).unwrap_or_default();
    let mut view = presenter.select_pet(&initial).await;
    println!("{}", view);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        let (command, argument) = match input.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (input, ""),
        };

        view = match command {
            "q" | "quit" => break,
            "y" | "yes" => match decide(&presenter, &view, Decision::Accept).await {
                Some(next) => next,
                None => continue,
            },
            "n" | "no" => match decide(&presenter, &view, Decision::Reject).await {
                Some(next) => next,
                None => continue,
            },
            "select" => presenter.select_pet(argument).await,
            "" => presenter.view().await,
            _ => {
                println!("{}", HELP);
                continue;
            }
        };

        println!("{}", view);
    }

    info!("Review session ended");
    Ok(())
}

/// Apply `decision` to the candidate shown in `view`, if there is one
async fn decide(
    presenter: &ReviewPresenter<HttpMatchService>,
    view: &ReviewView,
    decision: Decision,
) -> Option<ReviewView> {
    let Some(control) = view.candidate.controls().iter().find(|c| c.decision == decision) else {
        error!("No candidate on screen to {}", decision);
        return None;
    };

    Some(presenter.decide(&control.candidate_id, decision).await)
}
