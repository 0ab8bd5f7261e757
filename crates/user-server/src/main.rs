use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::sync::Arc;
use tracing::info;

use user_api::{build_router, AppState};
use user_core::repositories::UserRepository;
use user_core::services::UserService;
use user_infrastructure::{create_pool, ensure_schema, InMemoryUserRepository, PgUserRepository};
use user_shared::config::{AppConfig, StorageBackend};

#[derive(Parser, Debug)]
#[command(name = "user-server", version, about = "User CRUD RPC service")]
struct Args {
    /// Listen port, overrides `app.port`
    #[arg(long, env = "USER_SERVER_PORT")]
    port: Option<u16>,

    /// Storage backend, overrides `database.backend`
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BackendArg {
    Postgres,
    Memory,
}

impl From<BackendArg> for StorageBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Postgres => StorageBackend::Postgres,
            BackendArg::Memory => StorageBackend::Memory,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(port) = args.port {
        config.app.port = port;
    }
    if let Some(backend) = args.backend {
        config.database.backend = backend.into();
    }

    user_shared::telemetry::init_telemetry(&config.log)?;
    info!("{} starting (env: {})", config.app.name, config.app.env);

    let user_repo: Arc<dyn UserRepository> = match config.database.backend {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(&config.database, config.app.workers)
                .await
                .context("Failed to connect to database")?;
            ensure_schema(&pool).await.context("Failed to create schema")?;
            info!("Database connection established.");
            Arc::new(PgUserRepository::new(pool))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is lost on exit");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let state = AppState::new(UserService::new(user_repo));
    let app = build_router(state, config.app.workers);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("RPC server started on {} ({} workers)", addr, config.app.workers);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_flag_accepts_known_values_only() {
        let args = Args::try_parse_from(["user-server", "--backend", "memory"]).unwrap();
        assert_eq!(args.backend, Some(BackendArg::Memory));
        assert_eq!(StorageBackend::from(BackendArg::Memory), StorageBackend::Memory);
        assert_eq!(StorageBackend::from(BackendArg::Postgres), StorageBackend::Postgres);

        assert!(Args::try_parse_from(["user-server", "--backend", "mysql"]).is_err());
    }
}
