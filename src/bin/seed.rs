use std::process::ExitCode;

use dotenv::dotenv;
use log::{error, info};

use progress_backend::config::AppConfig;
use progress_backend::demo::{DEMO_EMAIL, DEMO_PASSWORD};
use progress_backend::seed::{seed_demo_user, DEMO_HASH_COST};
use progress_backend::store::MySqlStore;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Seed failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let store = MySqlStore::connect(&config.database_url, config.max_connections).await?;

    let outcome = async {
        store.run_migrations().await?;
        seed_demo_user(&store, DEMO_HASH_COST).await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .await;
    store.close().await;
    outcome?;

    info!("Seed complete.");
    info!("Demo user: {} | Password: {}", DEMO_EMAIL, DEMO_PASSWORD);
    info!("Open /dashboard to see the seeded data.");
    Ok(())
}
