use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, NotificationConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::notify::{AdminMailNotifier, ReportNotifier, SmtpMailer};
use service::user::repo::seaorm::SeaOrmUserRepository;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Admin mail notifier when `notification.enabled`, otherwise `None`.
pub fn build_notifier(db: &DatabaseConnection, cfg: &NotificationConfig) -> Result<Option<Arc<dyn ReportNotifier>>, StartupError> {
    if !cfg.enabled {
        info!("admin notifications disabled");
        return Ok(None);
    }
    let mailer = SmtpMailer::from_config(cfg)?;
    let users = Arc::new(SeaOrmUserRepository { db: db.clone() });
    info!(smtp_host = %cfg.smtp_host, smtp_port = cfg.smtp_port, "admin notifications enabled");
    Ok(Some(Arc::new(AdminMailNotifier::new(users, Arc::new(mailer)))))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse().map_err(|e| StartupError::InvalidConfig(format!("server address {raw}: {e}")))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env()?;
    let addr = bind_addr(&cfg)?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database schema up to date");

    let notifier = build_notifier(&db, &cfg.notification)?;
    let state = ServerState::from_db(db, notifier);
    let app: Router = routes::build_router(state, build_cors());

    info!(%addr, "starting office issues server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
