//! Chartdesk CLI: create and view accountability charts backed by a remote
//! Supabase-style service.

use anyhow::Result;
use chartdesk_application::{ChartService, SessionStore};
use chartdesk_core::auth::TokenSource;
use chartdesk_infrastructure::{
    ChartdeskPaths, ConfigService, HttpAuthService, HttpChartRepository, SessionTokenStorage,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;
mod prompt;
mod views;

#[derive(Parser)]
#[command(name = "chartdesk")]
#[command(about = "Create and manage accountability charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        /// Password; prompted on stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// List your charts, newest first
    List,
    /// Show one chart with its positions
    Show { id: String },
    /// Create a new chart from a draft file or flags
    Create {
        /// TOML draft file (takes precedence over the flags below)
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Position as `title|name|responsibilities|kpis`; repeatable
        #[arg(long = "position")]
        positions: Vec<String>,
    },
    /// Delete a chart
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export a chart to a JSON file
    Export {
        id: String,
        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Services shared by every command.
struct AppContext {
    session: Arc<SessionStore>,
    charts: ChartService,
}

/// Wires the HTTP services into the session store and chart service.
///
/// The session restore runs here, before any command dispatch, so an
/// existing valid session is visible from the first render.
async fn bootstrap() -> Result<AppContext> {
    let paths = ChartdeskPaths::new(None);
    let config = ConfigService::new(paths.clone()).get()?;
    tracing::info!("[Bootstrap] Using service at {}", config.base_url());

    let auth = Arc::new(HttpAuthService::new(&config)?);
    let storage = Arc::new(SessionTokenStorage::new(&paths)?);
    let session = Arc::new(SessionStore::new(auth, storage));

    let repository = Arc::new(HttpChartRepository::new(
        &config,
        Arc::clone(&session) as Arc<dyn TokenSource>,
    )?);
    let charts = ChartService::new(repository, Arc::clone(&session));

    session.restore().await;
    Ok(AppContext { session, charts })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = bootstrap().await?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::login::login(&ctx.session, &email, password).await
        }
        Commands::Logout => commands::login::logout(&ctx.session).await,
        Commands::Whoami => commands::login::whoami(&ctx.session).await,
        Commands::List => commands::dashboard::list(&ctx.session, &ctx.charts).await,
        Commands::Show { id } => commands::view::show(&ctx.charts, &id).await,
        Commands::Create {
            file,
            title,
            description,
            positions,
        } => {
            commands::builder::create(
                &ctx.session,
                &ctx.charts,
                file.as_deref(),
                title,
                description,
                &positions,
            )
            .await
        }
        Commands::Delete { id, yes } => {
            commands::dashboard::delete(&ctx.session, &ctx.charts, &id, yes).await
        }
        Commands::Export { id, out } => {
            commands::view::export(&ctx.charts, &id, out.as_deref()).await
        }
    }
}
