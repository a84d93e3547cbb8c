use anyhow::Context;
use clap::Parser;
use quiz_service::db;
use quiz_service::server::app::run_server;
use quiz_service::settings::Settings;
use quiz_service::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(default_value = "serve")]
    runner: Runner,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Runner {
    /// Apply migrations and serve the HTTP API
    Serve,
    /// Apply migrations and exit
    Migrate,
    /// Apply migrations and insert a sample quiz
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    let pool = db::establish_connection(&settings.db_path)
        .await
        .with_context(|| format!("Cannot connect to DB at {}", settings.db_path))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    match cli.runner {
        Runner::Serve => run_server(pool, &settings.addr()).await?,
        Runner::Migrate => {}
        Runner::Seed => {
            db::seed_sample_quiz(&pool).await?;
        }
    };
    Ok(())
}
