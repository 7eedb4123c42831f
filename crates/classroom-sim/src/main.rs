//! Classroom Sim Service Binary

use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classroom_capacity::Simulation;
use classroom_sim::{config::SimConfig, router, AppState, SIM_VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Classroom Sim v{}", SIM_VERSION);

    // Load configuration
    let config = SimConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let simulation = Simulation::new(&config.simulation)?;
    let status = simulation.status();
    info!(
        "Initial state: students={}, demand={:.3}, fail_rate={:.3}, predicted={:.3}",
        status.students, status.demand, status.fail_rate, status.predicted_fail_rate
    );

    let app = router(AppState::new(simulation));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal");
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shutting down Classroom Sim");
    Ok(())
}
