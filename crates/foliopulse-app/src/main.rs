use std::process::ExitCode;

use chrono::Utc;
use foliopulse_app::application::config::AppConfig;
use foliopulse_app::application::queries::ActivityViewBuilder;
use foliopulse_app::presentation::bootstrap::build_activity_service;
use foliopulse_app::presentation::CommandError;
use foliopulse_infrastructure::logging::{init_console_logger, init_logger};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_console_logger();
            return report(CommandError::from(e));
        }
    };

    match init_logger(config.log_dir.clone()) {
        Ok(_) => {
            tracing::info!("🚀 FolioPulse starting...");
            tracing::info!("📝 File logging initialized at: {}", config.log_dir.display());
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {:#}", e);
            eprintln!("   Falling back to console logging only");
            init_console_logger();
        }
    }

    match run(&config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

async fn run(config: &AppConfig) -> Result<String, CommandError> {
    let service = build_activity_service(config)?;

    let today = Utc::now().date_naive();
    let summary = service
        .fetch_activity_on(&config.username, config.token.as_deref(), today)
        .await?;

    let view = ActivityViewBuilder::new().build(&summary, config.username.trim(), today);
    tracing::info!("✅ {}", view.headline);

    Ok(serde_json::to_string_pretty(&view)?)
}

fn report(err: CommandError) -> ExitCode {
    tracing::error!("❌ {}", err);
    match serde_json::to_string_pretty(&err) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", err.user_message()),
    }
    ExitCode::FAILURE
}
