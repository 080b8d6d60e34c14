/// Ringside Server - Muay Thai marketplace backend
use clap::{Parser, Subcommand};
use ringside_server::{api, config::ServerConfig, services::MediaStorage, state::AppState};
use ringside_storage::LocalStore;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ringside-server")]
#[command(about = "Ringside marketplace backend server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// List all accounts
    ListAccounts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ringside_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config: _ } => {
            serve().await?;
        }
        Commands::ListAccounts => {
            list_accounts().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Ringside Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = ringside_storage::create_pool(&config.storage.database_url).await?;
    ringside_storage::run_migrations(&pool).await?;
    let db = Arc::new(LocalStore::new(pool));
    tracing::info!("Database connected");

    // Initialize media storage
    let media_storage = MediaStorage::new(config.storage.media_storage_path.clone());
    media_storage.initialize().await?;
    let media_storage = Arc::new(media_storage);
    tracing::info!("Media storage initialized");

    // Build application state and router
    let app_state = AppState::new(db, media_storage);
    let app = api::router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_accounts() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = ringside_storage::create_pool(&config.storage.database_url).await?;
    ringside_storage::run_migrations(&pool).await?;

    let accounts = ringside_storage::accounts::get_all(&pool).await?;

    println!("Accounts:");
    for account in accounts {
        println!(
            "  {} - {} {} ({})",
            account.id, account.first_name, account.last_name, account.user_name
        );
    }

    Ok(())
}
